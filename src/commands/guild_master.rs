use serenity::framework::standard::macros::group;

import_all! {
    locale,
}

#[group]
#[only_in(guilds)]
#[description = "Server settings of the bot"]
#[sub_groups(Locale)]
struct GuildMaster;
