use crate::commands::prelude::*;
use crate::storages::SettingsKey;

#[command]
#[only_in(guilds)]
#[required_permissions(MANAGE_GUILD)]
/// Go back to the default language on this server
async fn clear(ctx: &Context, msg: &Message) -> CommandResult {
    let guild_id = match msg.guild_id {
        Some(id) => id,
        None => return Ok(()),
    };

    let settings = get_data::<SettingsKey>(ctx)
        .await
        .ok_or("The guild settings are not initialized")?;

    if let Some(old) = settings.clear_locale(guild_id) {
        info!("Guild {} no longer speaks {}", guild_id, old);
    }

    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
    let content = renderer
        .locales()
        .format(&locale, "guild_master.locale_cleared", &[&locale])?;

    msg.channel_id.say(&ctx.http, content).await?;
    Ok(())
}
