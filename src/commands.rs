mod guild_master;
mod utilities;

pub use guild_master::GUILDMASTER_GROUP;
pub use utilities::UTILITIES_GROUP;

pub mod prelude {
    pub use crate::error::RenderError;
    pub use crate::subject::*;
    pub use crate::traits::ChannelExt as _;
    pub use crate::utils::*;

    pub use serenity::client::Context;
    pub use serenity::framework::standard::{macros::command, Args, CommandResult};
    pub use serenity::model::channel::Message;
}
