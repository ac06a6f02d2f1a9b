use crate::commands::prelude::*;

#[command]
#[only_in(guilds)]
/// Show the language used on this server
async fn info(ctx: &Context, msg: &Message) -> CommandResult {
    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
    let content = renderer
        .locales()
        .format(&locale, "guild_master.locale_info", &[&locale])?;

    msg.channel_id.say(&ctx.http, content).await?;
    Ok(())
}
