use async_trait::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::{
    event::ResumedEvent,
    gateway::{Activity, Ready},
    user::OnlineStatus,
};

use colorful::Colorful;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct Handler {
    prefix: String,
    ready: AtomicU64,
    resume: AtomicU64,
}

impl Handler {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ready: AtomicU64::from(0),
            resume: AtomicU64::from(0),
        }
    }

    /// `u!help (resumed/ready)`
    fn presence(&self) -> String {
        format!(
            "{}help ({}/{})",
            self.prefix,
            self.resume.load(Ordering::SeqCst),
            self.ready.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        self.ready.fetch_add(1, Ordering::SeqCst);

        info!(
            "{} is now available on {} servers",
            ready.user.tag().as_str().green().bold(),
            ready.guilds.len()
        );

        let activity = Activity::listening(&self.presence());
        ctx.set_presence(Some(activity), OnlineStatus::Online).await;
    }

    async fn resume(&self, ctx: Context, _resume: ResumedEvent) {
        let count = self.resume.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Resumed the session, {} times so far", count);

        let activity = Activity::listening(&self.presence());
        ctx.set_presence(Some(activity), OnlineStatus::Online).await;
    }
}
