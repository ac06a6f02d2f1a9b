use crate::error::SettingsError;
use crate::locale::Locales;
use dashmap::DashMap;
use serenity::model::id::GuildId;
use smallstr::SmallString;

pub type LocaleKey = SmallString<[u8; 8]>;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub locale: Option<LocaleKey>,
}

impl GuildSettings {
    #[inline]
    pub fn is_default(&self) -> bool {
        self.locale.is_none()
    }
}

/// Per guild preferences, kept in memory for the lifetime of the process
#[derive(Default)]
pub struct GuildSettingsStore {
    guilds: DashMap<GuildId, GuildSettings>,
}

impl GuildSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the store from `guild_id=locale` pairs separated by commas.
    /// Unknown locales are rejected, the table has to know them.
    pub fn from_pairs(pairs: &str, locales: &Locales) -> Result<Self, SettingsError> {
        let store = Self::new();

        for entry in pairs.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            let invalid = || SettingsError::InvalidEntry(entry.to_owned());
            let mut split = entry.splitn(2, '=');

            let guild = split
                .next()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .ok_or_else(invalid)?;
            let locale = split.next().map(str::trim).ok_or_else(invalid)?;

            store.set_locale(GuildId(guild), locale, locales)?;
        }

        Ok(store)
    }

    pub fn locale_for(&self, guild: GuildId) -> Option<String> {
        self.guilds
            .get(&guild)
            .and_then(|v| v.locale.as_ref().map(|v| v.to_string()))
    }

    /// The preference of the guild, or the default locale
    pub fn resolve_locale(&self, guild: Option<GuildId>, default: &str) -> String {
        guild
            .and_then(|v| self.locale_for(v))
            .unwrap_or_else(|| default.to_owned())
    }

    /// Returns the previous preference of the guild
    pub fn set_locale(
        &self,
        guild: GuildId,
        locale: &str,
        locales: &Locales,
    ) -> Result<Option<String>, SettingsError> {
        if !locales.contains(locale) {
            return Err(SettingsError::UnknownLocale(locale.to_owned()));
        }

        let mut settings = self.guilds.entry(guild).or_insert_with(GuildSettings::default);
        let old = settings.locale.replace(LocaleKey::from(locale));

        Ok(old.map(|v| v.to_string()))
    }

    /// Returns the removed preference
    pub fn clear_locale(&self, guild: GuildId) -> Option<String> {
        let old = self
            .guilds
            .get_mut(&guild)
            .and_then(|mut v| v.locale.take());

        self.guilds.remove_if(&guild, |_, v| v.is_default());
        old.map(|v| v.to_string())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.guilds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
    }
}
