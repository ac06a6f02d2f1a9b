use serenity::client::Context;
use serenity::framework::standard::macros::{help, hook};
use serenity::framework::standard::{
    help_commands, Args, CommandGroup, CommandResult, DispatchError, HelpOptions,
    StandardFramework,
};
use serenity::model::{
    channel::Message,
    id::{MessageId, UserId},
};

use crate::{commands::*, config::Config, constants::ERROR_COLOR, traits::ChannelExt, utils::*};

use chrono::{DateTime, Utc};
use colorful::Colorful;
use dashmap::DashMap;
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref EXECUTION_LIST: DashMap<MessageId, DateTime<Utc>> = DashMap::new();
}

#[help]
#[individual_command_tip = "Hello! Привет!\n\
If you want more information about a specific command, just pass the command as argument."]
#[command_not_found_text = "Could not find: `{}`."]
#[embed_success_colour(ORANGE)]
#[embed_error_colour(RED)]
#[max_levenshtein_distance(3)]
#[indention_prefix = "+"]
#[lacking_permissions = "Hide"]
#[wrong_channel = "Strike"]
async fn stolen_help(
    context: &Context,
    msg: &Message,
    args: Args,
    help_options: &'static HelpOptions,
    groups: &[&'static CommandGroup],
    owners: HashSet<UserId>,
) -> CommandResult {
    let _ = help_commands::with_embeds(context, msg, args, help_options, groups, owners).await;
    Ok(())
}

pub fn get_framework(config: &Config) -> StandardFramework {
    let owners = config.owner_ids();

    StandardFramework::new()
        .configure(|c| {
            c.prefix(&config.prefix)
                .owners(owners)
                .case_insensitivity(true)
                .by_space(true)
        })
        .group(&UTILITIES_GROUP)
        .group(&GUILDMASTER_GROUP)
        .help(&STOLEN_HELP)
        .before(before_cmd)
        .after(after_cmd)
        .on_dispatch_error(dispatch_error)
}

#[hook]
async fn before_cmd(_ctx: &Context, msg: &Message, cmd_name: &str) -> bool {
    info!("Found command {}", cmd_name.bold().underlined());

    EXECUTION_LIST.insert(msg.id, Utc::now());
    true
}

#[hook]
async fn after_cmd(ctx: &Context, msg: &Message, cmd: &str, err: CommandResult) {
    let start_time = match EXECUTION_LIST.remove(&msg.id) {
        Some((_, v)) => v.timestamp_millis(),
        None => msg.timestamp.timestamp_millis(),
    };

    match err {
        Ok(_) => {
            let now = Utc::now().timestamp_millis();
            info!(
                "Successfully executed the command {}, time passed {}ms",
                cmd.cyan(),
                now - start_time
            );
        }

        Err(why) => {
            error!("Couldn't execute the command {}\n{:#?}", cmd.magenta(), why);

            let mess = match renderer_and_locale(ctx, msg).await {
                Ok((renderer, locale)) => renderer
                    .locales()
                    .format(&locale, "errors.command_failed", &[&cmd, &why])
                    .unwrap_or_else(|_| why.to_string()),
                Err(_) => why.to_string(),
            };

            msg.channel_id
                .send_notice(&ctx.http, mess, ERROR_COLOR)
                .await
                .ok();
        }
    }
}

#[hook]
async fn dispatch_error(ctx: &Context, msg: &Message, error: DispatchError) {
    let (renderer, locale) = match renderer_and_locale(ctx, msg).await {
        Ok(v) => v,
        Err(why) => {
            error!("Cannot answer the dispatch error {:?}: {}", error, why);
            return;
        }
    };

    let locales = renderer.locales();
    let mess = match &error {
        DispatchError::OnlyForGuilds => locales.format(&locale, "errors.guild_only", &[]),
        DispatchError::LackingPermissions(permissions) => {
            let permissions = format!("{:?}", permissions);
            locales.format(&locale, "errors.lacking_permissions", &[&permissions])
        }

        _ => {
            warn!("Unhandled dispatch error for `{}`: {:?}", msg.content, error);
            return;
        }
    };

    match mess {
        Ok(mess) => {
            msg.channel_id
                .send_notice(&ctx.http, mess, ERROR_COLOR)
                .await
                .ok();
        }

        Err(why) => error!("Cannot localize the dispatch error {:?}: {}", error, why),
    }
}
