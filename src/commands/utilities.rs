use serenity::framework::standard::macros::group;

import_all! {
    user,
    emoji,
    channel,
    avatar,
    guild,
}

#[group]
#[only_in(guilds)]
#[description = "Information cards about the things on this server"]
#[commands(user, emoji, channel, avatar, guild)]
struct Utilities;
