use crate::constants::{CARD_COLOR, TIMESTAMP_FORMAT};
use crate::error::RenderError;
use crate::locale::Locales;
use crate::subject::*;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

/// Where the heading of a card goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Title,
    Author,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub heading: String,
    pub heading_style: HeadingStyle,
    pub body: Option<String>,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub footer: Option<String>,
}

impl RenderedCard {
    fn new(heading: String, heading_style: HeadingStyle) -> Self {
        Self {
            heading,
            heading_style,
            body: None,
            color: CARD_COLOR,
            thumbnail: None,
            image: None,
            footer: None,
        }
    }
}

/// Turns subjects into localized cards.
/// Holds nothing but the shared locale table and the display timezone,
/// so a single instance serves every command concurrently.
#[derive(Debug, Clone)]
pub struct InfoCardRenderer {
    locales: Arc<Locales>,
    timezone: Tz,
}

impl InfoCardRenderer {
    pub fn new(locales: Arc<Locales>, timezone: Tz) -> Self {
        Self { locales, timezone }
    }

    #[inline]
    pub fn locales(&self) -> &Locales {
        &self.locales
    }

    pub fn format_time(&self, time: &DateTime<Utc>) -> String {
        time.with_timezone(&self.timezone)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    #[inline]
    fn label(&self, locale: &str, path: &str) -> Result<&str, RenderError> {
        self.locales.template(locale, path)
    }

    pub fn render(&self, subject: &Subject, locale: &str) -> Result<RenderedCard, RenderError> {
        match subject {
            Subject::User(user) => self.user(user, locale),
            Subject::Emoji(emoji) => self.emoji(emoji, locale),
            Subject::Channel(channel) => self.channel(channel, locale),
            Subject::Guild(guild) => self.guild(guild, locale),
        }
    }

    pub fn user(&self, user: &UserSubject, locale: &str) -> Result<RenderedCard, RenderError> {
        let created_at = self.format_time(&user.created_at);
        let joined_at = match &user.joined_at {
            Some(time) => self.format_time(time),
            None => self.label(locale, "etc.other.unknown")?.to_owned(),
        };
        let color = format!("#{:06x}", user.accent_color);

        let title = self.locales.format(
            locale,
            "utilities.user_info_title",
            &[&user.name, &user.discriminator],
        )?;
        let body = self.locales.format(
            locale,
            "utilities.user_info",
            &[&user.id, &created_at, &joined_at, &color],
        )?;

        let mut card = RenderedCard::new(title, HeadingStyle::Author);
        card.body = Some(body);
        card.color = user.accent_color;
        card.thumbnail = Some(user.avatar_url.to_owned());

        Ok(card)
    }

    pub fn avatar(&self, user: &UserSubject, locale: &str) -> Result<RenderedCard, RenderError> {
        let hash = match &user.avatar_hash {
            Some(hash) => hash.as_str(),
            None => self.label(locale, "etc.other.unknown")?,
        };

        let title = self.locales.format(
            locale,
            "utilities.avatar_info_title",
            &[&user.name, &user.discriminator],
        )?;
        let body = self.locales.format(
            locale,
            "utilities.avatar_info",
            &[&hash, &user.avatar_url],
        )?;

        let mut card = RenderedCard::new(title, HeadingStyle::Title);
        card.body = Some(body);
        card.image = Some(user.avatar_url.to_owned());

        Ok(card)
    }

    pub fn emoji(&self, emoji: &EmojiSubject, locale: &str) -> Result<RenderedCard, RenderError> {
        let title = self
            .locales
            .format(locale, "utilities.emoji_info_title", &[&emoji.name])?;
        let footer = self
            .locales
            .format(locale, "utilities.emoji_info", &[&emoji.id])?;

        let mut card = RenderedCard::new(title, HeadingStyle::Title);
        card.image = Some(emoji.url());
        card.footer = Some(footer);

        Ok(card)
    }

    pub fn channel(
        &self,
        channel: &ChannelSubject,
        locale: &str,
    ) -> Result<RenderedCard, RenderError> {
        let kind = self.label(locale, channel.kind.label_path())?;
        let nsfw = self.label(
            locale,
            if channel.nsfw {
                "etc.other.yes"
            } else {
                "etc.other.no"
            },
        )?;
        let created_at = self.format_time(&channel.created_at);

        let title = self
            .locales
            .format(locale, "utilities.channel_info_title", &[&channel.name])?;
        let body = self.locales.format(
            locale,
            "utilities.channel_info",
            &[&channel.id, &kind, &created_at, &nsfw],
        )?;

        let mut card = RenderedCard::new(title, HeadingStyle::Author);
        card.body = Some(body);

        Ok(card)
    }

    pub fn guild(&self, guild: &GuildSubject, locale: &str) -> Result<RenderedCard, RenderError> {
        let verification = self.label(locale, guild.verification_level.label_path())?;
        let content_filter = self.label(locale, guild.content_filter.label_path())?;
        let created_at = self.format_time(&guild.created_at);
        let owner = guild.owner_mention();

        let title = self
            .locales
            .format(locale, "utilities.guild_info_title", &[&guild.name])?;
        let body = self.locales.format(
            locale,
            "utilities.guild_info",
            &[
                &guild.id,
                &created_at,
                &guild.member_count,
                &owner,
                &verification,
                &content_filter,
            ],
        )?;

        let mut card = RenderedCard::new(title, HeadingStyle::Author);
        card.body = Some(body);
        card.thumbnail = guild.icon_url.to_owned();
        card.image = guild.banner_url.to_owned();

        Ok(card)
    }

    /// The reply for a `channel` call with a mention instead of a channel
    pub fn channel_rejection(&self, locale: &str) -> Result<String, RenderError> {
        self.label(locale, "utilities.channel_not_a_channel")
            .map(String::from)
    }

    /// Something a user can read about a failed render
    pub fn error_message(&self, err: &RenderError, locale: &str) -> String {
        let message = match err {
            RenderError::MalformedToken { kind, token } => self
                .label(locale, kind.label_path())
                .and_then(|kind| {
                    self.locales
                        .format(locale, "errors.malformed_token", &[token, &kind])
                }),

            RenderError::NotFound {
                kind: SubjectKind::Member,
                id,
            } => self
                .locales
                .format(locale, "errors.member_not_found", &[id]),

            RenderError::NotFound { kind, id } => self
                .label(locale, kind.label_path())
                .and_then(|kind| self.locales.format(locale, "errors.not_found", &[&kind, id])),

            RenderError::TemplateMissing { .. } => return err.to_string(),
        };

        message.unwrap_or_else(|_| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn renderer() -> InfoCardRenderer {
        let locales = Locales::from_json(include_str!("../data/locales.json"), "en").unwrap();
        InfoCardRenderer::new(Arc::new(locales), Tz::UTC)
    }

    fn time(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn ann() -> UserSubject {
        UserSubject {
            id: 42,
            name: String::from("Ann"),
            discriminator: String::from("0001"),
            created_at: time(2021, 3, 5, 14, 7),
            joined_at: Some(time(2022, 12, 31, 23, 59)),
            accent_color: 0xABCDEF,
            avatar_hash: Some(String::from("a_1b2c")),
            avatar_url: String::from("https://cdn.discordapp.com/avatars/42/a_1b2c.gif"),
        }
    }

    fn guild(verification_level: VerificationLevel, content_filter: ContentFilterLevel) -> GuildSubject {
        GuildSubject {
            id: 7,
            name: String::from("Tomo's house"),
            created_at: time(2019, 1, 2, 3, 4),
            member_count: 1337,
            owner_id: 239825449637642240,
            verification_level,
            content_filter,
            icon_url: Some(String::from("https://cdn.discordapp.com/icons/7/abc.png")),
            banner_url: None,
        }
    }

    #[test]
    fn timestamp_format() {
        assert_eq!(renderer().format_time(&time(2021, 3, 5, 14, 7)), "05.03.2021 14:07");
    }

    #[test]
    fn timestamp_in_another_timezone() {
        let tz: Tz = "Europe/Moscow".parse().unwrap();
        let renderer = InfoCardRenderer::new(renderer().locales, tz);

        assert_eq!(renderer.format_time(&time(2021, 3, 5, 14, 7)), "05.03.2021 17:07");
    }

    #[test]
    fn user_card() {
        let card = renderer().user(&ann(), "en").unwrap();

        assert_eq!(card.heading, "Ann#0001");
        assert_eq!(card.heading_style, HeadingStyle::Author);
        assert_eq!(
            card.body.as_deref(),
            Some(
                "**ID:** 42\n**Account created:** 05.03.2021 14:07\n\
                 **Joined the server:** 31.12.2022 23:59\n**Color:** #abcdef"
            )
        );
        assert_eq!(card.color, 0xABCDEF);
        assert_eq!(card.thumbnail.as_deref(), Some(ann().avatar_url.as_str()));
        assert_eq!(card.image, None);
    }

    #[test]
    fn user_card_without_join_date() {
        let mut user = ann();
        user.joined_at = None;
        user.accent_color = 0;

        let body = renderer().user(&user, "en").unwrap().body.unwrap();
        assert!(body.contains("**Joined the server:** Unknown"));
        assert!(body.ends_with("#000000"));
    }

    #[test]
    fn user_card_in_russian() {
        let card = renderer().user(&ann(), "ru").unwrap();
        assert!(card.body.unwrap().starts_with("**ID:** 42\n**Аккаунт создан:** 05.03.2021 14:07"));
    }

    #[test]
    fn unknown_locale_uses_default() {
        let renderer = renderer();
        assert_eq!(renderer.user(&ann(), "xx"), renderer.user(&ann(), "en"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = renderer();
        let subjects = [
            Subject::User(ann()),
            Subject::Guild(guild(VerificationLevel::High, ContentFilterLevel::NoRole)),
        ];

        for subject in subjects.iter() {
            assert_eq!(
                renderer.render(subject, "ru").unwrap(),
                renderer.render(subject, "ru").unwrap()
            );
        }
    }

    #[test]
    fn avatar_card() {
        let card = renderer().avatar(&ann(), "en").unwrap();

        assert_eq!(card.heading, "Avatar of Ann#0001");
        assert_eq!(card.heading_style, HeadingStyle::Title);
        assert_eq!(
            card.body.as_deref(),
            Some("**Hash:** a_1b2c\n[Open in browser](https://cdn.discordapp.com/avatars/42/a_1b2c.gif)")
        );
        assert_eq!(card.image, Some(ann().avatar_url));
        assert_eq!(card.color, CARD_COLOR);
    }

    #[test]
    fn avatar_card_without_hash() {
        let mut user = ann();
        user.avatar_hash = None;

        let body = renderer().avatar(&user, "en").unwrap().body.unwrap();
        assert!(body.starts_with("**Hash:** Unknown\n"));
    }

    #[test]
    fn emoji_card() {
        let emoji = EmojiSubject {
            animated: false,
            name: String::from("kaede"),
            id: 123,
        };
        let card = renderer().render(&Subject::Emoji(emoji), "en").unwrap();

        assert_eq!(card.heading, "Emoji :kaede:");
        assert_eq!(card.image.as_deref(), Some("https://cdn.discordapp.com/emojis/123.png"));
        assert_eq!(card.footer.as_deref(), Some("ID: 123"));
        assert_eq!(card.body, None);
    }

    #[test]
    fn channel_card() {
        let channel = ChannelSubject {
            id: 450521152272728065,
            name: String::from("general"),
            kind: ChannelKind::Other,
            nsfw: true,
            created_at: time(2018, 5, 6, 7, 8),
        };
        let card = renderer().channel(&channel, "en").unwrap();

        assert_eq!(card.heading, "Channel #general");
        assert_eq!(
            card.body.as_deref(),
            Some("**ID:** 450521152272728065\n**Type:** Text\n**Created:** 06.05.2018 07:08\n**NSFW:** Yes")
        );
    }

    #[test]
    fn channel_kind_labels() {
        let renderer = renderer();
        let cases = [
            (ChannelKind::Text, "Text"),
            (ChannelKind::Voice, "Voice"),
            (ChannelKind::News, "News"),
            (ChannelKind::Other, "Text"),
        ];

        for (kind, label) in cases.iter() {
            let channel = ChannelSubject {
                id: 1,
                name: String::from("c"),
                kind: *kind,
                nsfw: false,
                created_at: time(2020, 1, 1, 0, 0),
            };

            let body = renderer.channel(&channel, "en").unwrap().body.unwrap();
            assert!(body.contains(&format!("**Type:** {}\n", label)), "{:?}", kind);
            assert!(body.ends_with("**NSFW:** No"));
        }
    }

    #[test]
    fn guild_card() {
        let card = renderer()
            .guild(&guild(VerificationLevel::Extreme, ContentFilterLevel::AllMembers), "en")
            .unwrap();

        assert_eq!(card.heading, "Server Tomo's house");
        assert_eq!(card.heading_style, HeadingStyle::Author);
        assert_eq!(
            card.body.as_deref(),
            Some(
                "**ID:** 7\n**Created:** 02.01.2019 03:04\n**Members:** 1337\n\
                 **Owner:** <@!239825449637642240>\n**Verification level:** Extreme\n\
                 **Content filter:** High"
            )
        );
        assert_eq!(card.thumbnail.as_deref(), Some("https://cdn.discordapp.com/icons/7/abc.png"));
        assert_eq!(card.image, None);
    }

    #[test]
    fn verification_labels() {
        let renderer = renderer();
        let cases = [
            (VerificationLevel::None, "None"),
            (VerificationLevel::Low, "Low"),
            (VerificationLevel::Medium, "Medium"),
            (VerificationLevel::High, "High"),
            (VerificationLevel::Extreme, "Extreme"),
            (VerificationLevel::Unknown, "Unknown"),
        ];

        for (level, label) in cases.iter() {
            let body = renderer
                .guild(&guild(*level, ContentFilterLevel::Disabled), "en")
                .unwrap()
                .body
                .unwrap();

            assert!(body.contains(&format!("**Verification level:** {}\n", label)));
        }
    }

    #[test]
    fn content_filter_shares_the_level_labels() {
        let renderer = renderer();

        for locale in &["en", "ru"] {
            let levels = |path: &str| renderer.locales().template(locale, path).unwrap().to_owned();
            let cases = [
                (ContentFilterLevel::Disabled, levels("etc.levels.none")),
                (ContentFilterLevel::NoRole, levels("etc.levels.medium")),
                (ContentFilterLevel::AllMembers, levels("etc.levels.high")),
                (ContentFilterLevel::Unknown, levels("etc.levels.unknown")),
            ];

            for (filter, label) in cases.iter() {
                let body = renderer
                    .guild(&guild(VerificationLevel::Low, *filter), locale)
                    .unwrap()
                    .body
                    .unwrap();

                assert!(body.ends_with(label.as_str()), "{:?} in {}", filter, locale);
            }
        }
    }

    #[test]
    fn channel_rejection_is_localized() {
        let renderer = renderer();

        assert_eq!(
            renderer.channel_rejection("ru").unwrap(),
            "чел, это не канал, ты что-то попутал"
        );
        assert_eq!(
            renderer.channel_rejection("en").unwrap(),
            "That is not a channel, you mixed something up"
        );
    }

    #[test]
    fn error_messages() {
        let renderer = renderer();

        assert_eq!(
            renderer.error_message(&RenderError::malformed(SubjectKind::Emoji, "kaede"), "en"),
            "`kaede` doesn't look like a valid emoji"
        );
        assert_eq!(
            renderer.error_message(&RenderError::not_found(SubjectKind::Channel, 42), "ru"),
            "Не могу найти канал с ID `42`"
        );
        assert_eq!(
            renderer.error_message(&RenderError::not_found(SubjectKind::Member, "Bob"), "en"),
            "Cannot find a member called `Bob` on this server"
        );
    }

    #[test]
    fn missing_template_is_an_error() {
        let locales = Locales::from_json(r#"{"en": {"utilities": {}}}"#, "en").unwrap();
        let renderer = InfoCardRenderer::new(Arc::new(locales), Tz::UTC);

        assert!(matches!(
            renderer.user(&ann(), "en"),
            Err(RenderError::TemplateMissing { .. })
        ));
    }
}
