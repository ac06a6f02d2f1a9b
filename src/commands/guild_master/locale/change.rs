use super::list::available_locales;
use crate::commands::prelude::*;
use crate::error::SettingsError;
use crate::storages::SettingsKey;

#[command]
#[only_in(guilds)]
#[required_permissions(MANAGE_GUILD)]
#[num_args(1)]
#[usage = "<language>"]
#[example = "ru"]
/// Change the language the bot speaks on this server
async fn change(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let guild_id = match msg.guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    let wanted = args.single::<String>()?.to_lowercase();
    let settings = get_data::<SettingsKey>(ctx)
        .await
        .ok_or("The guild settings are not initialized")?;

    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
    let locales = renderer.locales();

    let content = match settings.set_locale(guild_id, &wanted, locales) {
        Ok(_) => {
            info!("Guild {} now speaks {} instead of {}", guild_id, wanted, locale);
            locales.format(&wanted, "guild_master.locale_changed", &[&locale, &wanted])?
        }

        Err(SettingsError::UnknownLocale(key)) => {
            let available = available_locales(locales);
            locales.format(&locale, "guild_master.locale_unknown", &[&key, &available])?
        }

        Err(why) => return Err(why.into()),
    };

    msg.channel_id.say(&ctx.http, content).await?;
    Ok(())
}
