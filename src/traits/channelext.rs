use super::ToEmbed;
use crate::render::RenderedCard;
use crate::Result;
use async_trait::async_trait;
use serenity::http::client::Http;
use serenity::model::channel::Message;
use serenity::model::id::ChannelId;

#[async_trait]
pub trait ChannelExt: Into<ChannelId> + Send {
    async fn send_card(self, http: &Http, card: &RenderedCard) -> Result<Message> {
        let message = self
            .into()
            .send_message(http, |m| m.embed(|embed| card.to_embed(embed)))
            .await?;

        Ok(message)
    }

    /// A plain embed with only a description
    async fn send_notice(self, http: &Http, description: String, color: u32) -> Result<Message> {
        let message = self
            .into()
            .send_message(http, |m| {
                m.embed(|embed| embed.description(description).color(color))
            })
            .await?;

        Ok(message)
    }
}

impl<C: Into<ChannelId> + Send> ChannelExt for C {}
