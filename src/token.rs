use crate::error::RenderError;
use crate::subject::{EmojiSubject, SubjectKind};
use lazy_static::lazy_static;
use regex::Regex;

/// Parse a custom emoji as discord sends it, `<:name:id>` or `<a:name:id>` for animated ones.
/// The angle brackets are optional.
pub fn parse_emoji(raw: &str) -> Result<EmojiSubject, RenderError> {
    lazy_static! {
        static ref EMOJI_RE: Regex = Regex::new(r"^<?(a?):(\w+):(\d+)>?$").unwrap();
    }

    let raw = raw.trim();
    let malformed = || RenderError::malformed(SubjectKind::Emoji, raw);
    let caps = EMOJI_RE.captures(raw).ok_or_else(malformed)?;

    Ok(EmojiSubject {
        animated: !caps[1].is_empty(),
        name: caps[2].to_owned(),
        id: caps[3].parse().map_err(|_| malformed())?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelToken {
    Id(u64),
    /// A user/role mention or an emoji was passed instead of a channel
    NotAChannel,
}

impl ChannelToken {
    /// Accept `<#id>` or a bare id
    pub fn parse(raw: &str) -> Result<Self, RenderError> {
        lazy_static! {
            static ref CHANNEL_RE: Regex = Regex::new(r"^<?#?(\d+)>?$").unwrap();
        }

        let raw = raw.trim();

        if raw.contains(|c: char| matches!(c, '@' | '&' | ':')) {
            return Ok(Self::NotAChannel);
        }

        CHANNEL_RE
            .captures(raw)
            .and_then(|caps| caps[1].parse().ok())
            .map(Self::Id)
            .ok_or_else(|| RenderError::malformed(SubjectKind::Channel, raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberArg {
    Id(u64),
    /// A name or `name#1234`, looked up among the guild members
    Name(String),
}

impl MemberArg {
    pub fn parse(raw: &str) -> Self {
        lazy_static! {
            static ref MENTION_RE: Regex = Regex::new(r"^(?:<@!?(\d+)>|(\d{15,20}))$").unwrap();
        }

        let raw = raw.trim();

        MENTION_RE
            .captures(raw)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .and_then(|id| id.as_str().parse().ok())
            .map(Self::Id)
            .unwrap_or_else(|| Self::Name(raw.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_emoji() {
        let emoji = parse_emoji("<:kaede:123>").unwrap();

        assert!(!emoji.animated);
        assert_eq!(emoji.format(), "png");
        assert_eq!(emoji.name, "kaede");
        assert_eq!(emoji.id, 123);
    }

    #[test]
    fn animated_emoji() {
        let emoji = parse_emoji("<a:dance:676135471566290985>").unwrap();

        assert_eq!(emoji.format(), "gif");
        assert_eq!(emoji.id, 676135471566290985);
        assert_eq!(
            emoji.url(),
            "https://cdn.discordapp.com/emojis/676135471566290985.gif"
        );
    }

    #[test]
    fn emoji_without_brackets() {
        assert_eq!(parse_emoji(":kaede:123").unwrap().id, 123);
    }

    #[test]
    fn malformed_emojis() {
        for raw in &["kaede", "<:kaede>", "<:a:b:123>", "<:kaede:abc>", "😀", ""] {
            assert_eq!(
                parse_emoji(raw),
                Err(RenderError::malformed(SubjectKind::Emoji, *raw)),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn emoji_id_overflow() {
        assert!(parse_emoji("<:big:99999999999999999999999>").is_err());
    }

    #[test]
    fn channel_mention() {
        assert_eq!(
            ChannelToken::parse("<#450521152272728065>"),
            Ok(ChannelToken::Id(450521152272728065))
        );
        assert_eq!(ChannelToken::parse("42"), Ok(ChannelToken::Id(42)));
    }

    #[test]
    fn mentions_are_not_channels() {
        for raw in &["<@123>", "<@!123>", "<@&123>", "<:kaede:123>", "a:b"] {
            assert_eq!(ChannelToken::parse(raw), Ok(ChannelToken::NotAChannel));
        }
    }

    #[test]
    fn malformed_channel() {
        assert_eq!(
            ChannelToken::parse("general"),
            Err(RenderError::malformed(SubjectKind::Channel, "general"))
        );
    }

    #[test]
    fn member_args() {
        assert_eq!(MemberArg::parse("<@!239825449637642240>"), MemberArg::Id(239825449637642240));
        assert_eq!(MemberArg::parse("<@239825449637642240>"), MemberArg::Id(239825449637642240));
        assert_eq!(MemberArg::parse("239825449637642240"), MemberArg::Id(239825449637642240));
        assert_eq!(MemberArg::parse("Ann#0001"), MemberArg::Name(String::from("Ann#0001")));
        assert_eq!(MemberArg::parse("1234"), MemberArg::Name(String::from("1234")));
    }
}
