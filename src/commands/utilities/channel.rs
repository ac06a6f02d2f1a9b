use crate::commands::prelude::*;
use crate::token::ChannelToken;

#[command]
#[only_in(guilds)]
#[min_args(1)]
#[usage = "<channel>"]
#[example = "#general"]
/// Show the information card of a channel on this server
async fn channel(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let id = match ChannelToken::parse(args.rest().trim()) {
        Ok(ChannelToken::Id(id)) => id,

        Ok(ChannelToken::NotAChannel) => {
            let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
            let content = renderer.channel_rejection(&locale)?;

            msg.channel_id.say(&ctx.http, content).await?;
            return Ok(());
        }

        Err(why) => return reply_card(ctx, msg, Err(why)).await,
    };

    let subject = ctx
        .cache
        .guild_channel(id)
        .await
        .filter(|channel| Some(channel.guild_id) == msg.guild_id)
        .map(|channel| Subject::Channel(ChannelSubject::from_channel(&channel)))
        .ok_or_else(|| RenderError::not_found(SubjectKind::Channel, id));

    reply_card(ctx, msg, subject).await?;
    Ok(())
}
