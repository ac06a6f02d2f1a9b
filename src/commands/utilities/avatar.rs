use crate::commands::prelude::*;

#[command]
#[only_in(guilds)]
#[usage = "[member]"]
#[example = "@Ann"]
/// Show the avatar of a member in full size
async fn avatar(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let subject = find_member(ctx, msg, args.rest())
        .await
        .map(|member| UserSubject::from_member(&member, None));

    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;
    match subject.and_then(|v| renderer.avatar(&v, &locale)) {
        Ok(card) => {
            msg.channel_id.send_card(&ctx.http, &card).await?;
        }

        Err(why) => reply_error(ctx, msg, &renderer, &locale, &why).await?,
    }

    Ok(())
}
