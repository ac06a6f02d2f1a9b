use crate::commands::prelude::*;

#[command]
#[only_in(guilds)]
/// List every language the bot can speak
async fn list(ctx: &Context, msg: &Message) -> CommandResult {
    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
    let available = available_locales(renderer.locales());
    let content = renderer
        .locales()
        .format(&locale, "guild_master.locale_list", &[&available])?;

    msg.channel_id.say(&ctx.http, content).await?;
    Ok(())
}

/// `en`, `ru`
pub(super) fn available_locales(locales: &crate::locale::Locales) -> String {
    locales
        .keys()
        .into_iter()
        .map(|v| format!("`{}`", v))
        .collect::<Vec<_>>()
        .join(", ")
}
