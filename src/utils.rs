use crate::constants::ERROR_COLOR;
use crate::error::RenderError;
use crate::render::InfoCardRenderer;
use crate::storages::{RendererKey, SettingsKey};
use crate::subject::{Subject, SubjectKind};
use crate::token::MemberArg;
use crate::traits::ChannelExt as _;
use crate::Result;

use serenity::client::Context;
use serenity::model::{channel::Message, guild::Member};
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// This will clone the value if exist
#[inline]
pub async fn get_data<D: TypeMapKey>(ctx: &Context) -> Option<D::Value>
where
    D::Value: Sync + Send + Clone,
{
    ctx.data.read().await.get::<D>().cloned()
}

/// The renderer, and the locale the message should be answered in
pub async fn renderer_and_locale(
    ctx: &Context,
    msg: &Message,
) -> Result<(Arc<InfoCardRenderer>, String)> {
    let data = ctx.data.read().await;
    let renderer = data
        .get::<RendererKey>()
        .cloned()
        .ok_or("The card renderer is not initialized")?;

    let default = renderer.locales().default_locale();
    let locale = match data.get::<SettingsKey>() {
        Some(settings) => settings.resolve_locale(msg.guild_id, default),
        None => default.to_owned(),
    };

    Ok((renderer, locale))
}

/// Render the subject and send it back, or tell the user what went wrong
pub async fn reply_card(
    ctx: &Context,
    msg: &Message,
    subject: std::result::Result<Subject, RenderError>,
) -> Result<()> {
    let (renderer, locale) = renderer_and_locale(ctx, msg).await?;

    match subject.and_then(|v| renderer.render(&v, &locale)) {
        Ok(card) => {
            msg.channel_id.send_card(&ctx.http, &card).await?;
        }

        Err(why) => reply_error(ctx, msg, &renderer, &locale, &why).await?,
    }

    Ok(())
}

pub async fn reply_error(
    ctx: &Context,
    msg: &Message,
    renderer: &InfoCardRenderer,
    locale: &str,
    err: &RenderError,
) -> Result<()> {
    warn!("Cannot render the card for `{}`: {}", msg.content, err);

    let description = renderer.error_message(err, locale);
    msg.channel_id
        .send_notice(&ctx.http, description, ERROR_COLOR)
        .await?;

    Ok(())
}

/// Find a member of the guild the message was sent in.
/// An empty argument means the author.
pub async fn find_member(
    ctx: &Context,
    msg: &Message,
    arg: &str,
) -> std::result::Result<Member, RenderError> {
    let arg = arg.trim();
    let not_found = || RenderError::not_found(SubjectKind::Member, arg);

    if arg.is_empty() {
        return msg
            .member(ctx)
            .await
            .map_err(|_| RenderError::not_found(SubjectKind::Member, &msg.author.name));
    }

    let guild_id = msg.guild_id.ok_or_else(not_found)?;

    match MemberArg::parse(arg) {
        MemberArg::Id(id) => guild_id.member(ctx, id).await.map_err(|_| not_found()),
        MemberArg::Name(name) => msg
            .guild(&ctx.cache)
            .await
            .and_then(|guild| guild.member_named(&name).cloned())
            .ok_or_else(not_found),
    }
}
