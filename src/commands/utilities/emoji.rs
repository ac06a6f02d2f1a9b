use crate::commands::prelude::*;
use crate::token::parse_emoji;

#[command]
#[only_in(guilds)]
#[min_args(1)]
#[usage = "<custom emoji>"]
#[example = "<:kaede:702911112711421962>"]
/// Show a custom emoji in full size
async fn emoji(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let subject = parse_emoji(args.rest().trim()).map(Subject::Emoji);

    reply_card(ctx, msg, subject).await?;
    Ok(())
}
