use crate::render::InfoCardRenderer;
use crate::settings::GuildSettingsStore;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

pub struct RendererKey;
impl TypeMapKey for RendererKey {
    type Value = Arc<InfoCardRenderer>;
}

pub struct SettingsKey;
impl TypeMapKey for SettingsKey {
    type Value = Arc<GuildSettingsStore>;
}
