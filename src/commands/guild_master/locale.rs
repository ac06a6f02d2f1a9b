use serenity::framework::standard::macros::group;

import_all! {
    info,
    change,
    clear,
    list,
}

#[group]
#[prefix = "locale"]
#[description = "The language the bot speaks on this server"]
#[default_command(info)]
#[commands(info, change, clear, list)]
struct Locale;
