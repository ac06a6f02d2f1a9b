#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate log;

extern crate config as lib_config;

#[macro_use]
mod macros;

mod commands;
mod events;
mod framework;
mod storages;
mod traits;
mod utils;

pub mod config;
pub mod constants;
pub mod error;
pub mod locale;
pub mod logger;
pub mod render;
pub mod settings;
pub mod subject;
pub mod token;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

use std::error::Error;
use std::sync::Arc;

use crate::config::Config;
use events::Handler;
use locale::Locales;
use render::InfoCardRenderer;
use settings::GuildSettingsStore;
use storages::*;

use colorful::Colorful;
use serenity::client::bridge::gateway::{GatewayIntents, ShardManager};
use serenity::Client;
use tokio::task::JoinHandle;

/// Modules announced in the startup banner
const COGS: &[&str] = &["Utilities", "GuildMaster"];

pub type Shard = Arc<serenity::prelude::Mutex<ShardManager>>;
pub struct Instance {
    task: Option<JoinHandle<serenity::Result<()>>>,
    shard: Option<Shard>,
}

impl Instance {
    pub async fn start(config: &Config) -> Result<Self> {
        let locales = Locales::from_file(&config.locales_path, &config.default_locale)?;
        locales.validate()?;

        let settings = GuildSettingsStore::from_pairs(&config.guild_locales, &locales)?;
        let renderer = InfoCardRenderer::new(Arc::new(locales), config.timezone()?);

        announce_cogs(renderer.locales());

        let mut client = Client::builder(&config.discord_token)
            .framework(framework::get_framework(config))
            .event_handler(Handler::new(&config.prefix))
            .intents(intents())
            .await?;

        {
            let mut data = client.data.write().await;
            data.insert::<RendererKey>(Arc::new(renderer));
            data.insert::<SettingsKey>(Arc::new(settings));
        }

        let shard_manager = Arc::clone(&client.shard_manager);
        let task = tokio::spawn(async move { client.start().await });

        Ok(Self {
            shard: Some(shard_manager),
            task: Some(task),
        })
    }

    /// Take out the shard
    #[inline]
    pub fn shard(&mut self) -> Option<Shard> {
        self.shard.take()
    }

    pub async fn wait(mut self) -> Result<()> {
        if let Some(task) = self.task.take() {
            task.await??;
        }

        Ok(())
    }
}

/// `[12:00:00] INFO: Module Utilities is loaded`, in the default locale
fn announce_cogs(locales: &Locales) {
    let locale = locales.default_locale();
    let time = chrono::Local::now().format("%H:%M:%S").to_string();

    for cog in COGS {
        let line = locales
            .format(locale, "bot_log.cog_loaded", &[cog])
            .and_then(|loaded| locales.format(locale, "bot_log.info", &[&time, &loaded]));

        match line {
            Ok(line) => info!("{}", line.as_str().light_blue()),
            Err(why) => warn!("Cannot announce the module {}: {}", cog, why),
        }
    }
}

#[inline]
fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
}
