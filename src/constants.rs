pub const CDN_URL: &str = "https://cdn.discordapp.com";
pub const EMOJI_URL: &str = "https://cdn.discordapp.com/emojis";

/// The accent of every card that has no color of its own
pub const CARD_COLOR: u32 = 0xeda84e;
pub const ERROR_COLOR: u32 = 0xe74c3c;

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
