mod channelext;

pub use channelext::ChannelExt;

use crate::render::{HeadingStyle, RenderedCard};
use serenity::builder::CreateEmbed;

pub trait ToEmbed {
    fn to_embed<'a>(&self, embed: &'a mut CreateEmbed) -> &'a mut CreateEmbed;
}

impl ToEmbed for RenderedCard {
    fn to_embed<'a>(&self, embed: &'a mut CreateEmbed) -> &'a mut CreateEmbed {
        match self.heading_style {
            HeadingStyle::Title => embed.title(&self.heading),
            HeadingStyle::Author => embed.author(|a| a.name(&self.heading)),
        };

        if let Some(body) = &self.body {
            embed.description(body);
        }

        if let Some(url) = &self.thumbnail {
            embed.thumbnail(url);
        }

        if let Some(url) = &self.image {
            embed.image(url);
        }

        if let Some(text) = &self.footer {
            embed.footer(|f| f.text(text));
        }

        embed.color(self.color)
    }
}
