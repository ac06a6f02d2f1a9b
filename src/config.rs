use crate::Result;
use chrono_tz::Tz;
use lib_config::{Config as LibConfig, Environment, Source};
use serde::Deserialize;
use serenity::model::id::UserId;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub discord_token: String,
    pub prefix: String,
    pub default_locale: String,
    pub locales_path: PathBuf,
    /// IANA name of the timezone the timestamps are shown in
    pub timezone: String,
    /// `guild_id=locale` pairs, separated by commas
    #[serde(default)]
    pub guild_locales: String,
    /// User ids separated by commas
    #[serde(default)]
    pub owners: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::new())
    }

    fn load<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut config = LibConfig::new();

        config.set_default("prefix", "u!")?;
        config.set_default("default_locale", "en")?;
        config.set_default("locales_path", "./data/locales.json")?;
        config.set_default("timezone", "UTC")?;
        config.merge(source)?;

        let res = config.try_into()?;
        Ok(res)
    }

    pub fn timezone(&self) -> Result<Tz> {
        let tz = self
            .timezone
            .parse::<Tz>()
            .map_err(|why| format!("Invalid timezone `{}`: {}", self.timezone, why))?;

        Ok(tz)
    }

    pub fn owner_ids(&self) -> HashSet<UserId> {
        self.owners
            .split(',')
            .filter_map(|v| v.trim().parse::<u64>().ok())
            .map(UserId)
            .collect()
    }
}
