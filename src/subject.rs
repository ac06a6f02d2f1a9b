use crate::constants::{CDN_URL, EMOJI_URL};
use chrono::{DateTime, Utc};
use serenity::model::channel::{ChannelType, GuildChannel};
use serenity::model::guild::{
    ExplicitContentFilter, Guild, Member, VerificationLevel as SerenityVerification,
};
use serenity::utils::Colour;
use std::fmt;

/// What a token or an id was supposed to point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Member,
    Emoji,
    Channel,
    Guild,
}

impl SubjectKind {
    pub fn label_path(self) -> &'static str {
        match self {
            Self::Member => "etc.subjects.member",
            Self::Emoji => "etc.subjects.emoji",
            Self::Channel => "etc.subjects.channel",
            Self::Guild => "etc.subjects.guild",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Member => "member",
            Self::Emoji => "emoji",
            Self::Channel => "channel",
            Self::Guild => "server",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    News,
    Other,
}

impl ChannelKind {
    /// Everything that is not voice or news is shown as a text channel
    pub fn label_path(self) -> &'static str {
        match self {
            Self::Voice => "etc.channel_type.voice",
            Self::News => "etc.channel_type.news",
            Self::Text | Self::Other => "etc.channel_type.text",
        }
    }
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => Self::Text,
            ChannelType::Voice => Self::Voice,
            ChannelType::News => Self::News,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationLevel {
    None,
    Low,
    Medium,
    High,
    Extreme,
    Unknown,
}

impl VerificationLevel {
    pub fn label_path(self) -> &'static str {
        match self {
            Self::None => "etc.levels.none",
            Self::Low => "etc.levels.low",
            Self::Medium => "etc.levels.medium",
            Self::High => "etc.levels.high",
            Self::Extreme => "etc.levels.extreme",
            Self::Unknown => "etc.levels.unknown",
        }
    }
}

impl From<SerenityVerification> for VerificationLevel {
    fn from(level: SerenityVerification) -> Self {
        match level {
            SerenityVerification::None => Self::None,
            SerenityVerification::Low => Self::Low,
            SerenityVerification::Medium => Self::Medium,
            SerenityVerification::High => Self::High,
            SerenityVerification::Higher => Self::Extreme,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFilterLevel {
    Disabled,
    NoRole,
    AllMembers,
    Unknown,
}

impl ContentFilterLevel {
    /// The filter has no labels of its own, it shares the verification ones:
    /// disabled is "none", no-role is "medium" and all-members is "high".
    pub fn label_path(self) -> &'static str {
        match self {
            Self::Disabled => VerificationLevel::None.label_path(),
            Self::NoRole => VerificationLevel::Medium.label_path(),
            Self::AllMembers => VerificationLevel::High.label_path(),
            Self::Unknown => VerificationLevel::Unknown.label_path(),
        }
    }
}

impl From<ExplicitContentFilter> for ContentFilterLevel {
    fn from(filter: ExplicitContentFilter) -> Self {
        match filter {
            ExplicitContentFilter::None => Self::Disabled,
            ExplicitContentFilter::WithoutRole => Self::NoRole,
            ExplicitContentFilter::All => Self::AllMembers,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSubject {
    pub id: u64,
    pub name: String,
    /// The four digits tag, zero padded
    pub discriminator: String,
    pub joined_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub accent_color: u32,
    pub avatar_hash: Option<String>,
    pub avatar_url: String,
}

impl UserSubject {
    /// `color` is the color of the highest colored role, if any
    pub fn from_member(member: &Member, color: Option<Colour>) -> Self {
        let user = &member.user;

        Self {
            id: user.id.0,
            name: user.name.to_owned(),
            discriminator: format!("{:04}", user.discriminator),
            joined_at: member.joined_at,
            created_at: user.id.created_at(),
            accent_color: color.map(|v| v.0).unwrap_or_default(),
            avatar_hash: user.avatar.to_owned(),
            avatar_url: user.face(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSubject {
    pub animated: bool,
    pub name: String,
    pub id: u64,
}

impl EmojiSubject {
    #[inline]
    pub fn format(&self) -> &'static str {
        if self.animated {
            "gif"
        } else {
            "png"
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}.{}", EMOJI_URL, self.id, self.format())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSubject {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
    pub nsfw: bool,
    pub created_at: DateTime<Utc>,
}

impl ChannelSubject {
    pub fn from_channel(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.0,
            name: channel.name.to_owned(),
            kind: channel.kind.into(),
            nsfw: channel.nsfw,
            created_at: channel.id.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSubject {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub member_count: u64,
    pub owner_id: u64,
    pub verification_level: VerificationLevel,
    pub content_filter: ContentFilterLevel,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
}

impl GuildSubject {
    pub fn from_guild(guild: &Guild) -> Self {
        let banner_url = guild
            .banner
            .as_ref()
            .map(|hash| format!("{}/banners/{}/{}.png", CDN_URL, guild.id.0, hash));

        Self {
            id: guild.id.0,
            name: guild.name.to_owned(),
            created_at: guild.id.created_at(),
            member_count: guild.member_count,
            owner_id: guild.owner_id.0,
            verification_level: guild.verification_level.into(),
            content_filter: guild.explicit_content_filter.into(),
            icon_url: guild.icon_url(),
            banner_url,
        }
    }

    #[inline]
    pub fn owner_mention(&self) -> String {
        format!("<@!{}>", self.owner_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    User(UserSubject),
    Emoji(EmojiSubject),
    Channel(ChannelSubject),
    Guild(GuildSubject),
}
