use crate::commands::prelude::*;

#[command]
#[only_in(guilds)]
#[aliases("server")]
/// Show the information card of this server
async fn guild(ctx: &Context, msg: &Message) -> CommandResult {
    let guild = msg
        .guild(&ctx.cache)
        .await
        .map(|guild| Subject::Guild(GuildSubject::from_guild(&guild)))
        .ok_or_else(|| {
            let id = msg.guild_id.map(|v| v.0).unwrap_or_default();
            RenderError::not_found(SubjectKind::Guild, id)
        });

    reply_card(ctx, msg, guild).await?;
    Ok(())
}
