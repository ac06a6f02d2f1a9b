use crate::commands::prelude::*;

#[command]
#[only_in(guilds)]
#[usage = "[member]"]
#[example = "@Ann"]
/// Show the information card of a member, or your own without an argument.
/// The member can be a mention, an ID or a name.
async fn user(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let subject = match find_member(ctx, msg, args.rest()).await {
        Ok(member) => {
            let color = member.colour(&ctx.cache).await;
            Ok(Subject::User(UserSubject::from_member(&member, color)))
        }
        Err(why) => Err(why),
    };

    reply_card(ctx, msg, subject).await?;
    Ok(())
}
