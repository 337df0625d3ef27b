//! Typed settings access with a live bundle feed.

use std::sync::Arc;

use scriba_core::{SettingKey, SettingValue, Settings};
use scriba_feed::{ChangeFeed, Subscription};
use scriba_store::SettingsStore;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::repository::{finish_detached, warn_fault};

/// Typed read/write gateway over a [`SettingsStore`].
///
/// Reads come from the last published bundle; writes persist first, then
/// reload and publish, so subscribers only ever observe durable state.
/// Cheap to clone; clones share the same store and feed.
pub struct SettingsManager<S: SettingsStore> {
    inner: Arc<SettingsInner<S>>,
}

impl<S: SettingsStore> Clone for SettingsManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct SettingsInner<S> {
    store: S,
    write: Mutex<()>,
    feed: ChangeFeed<Settings>,
}

impl<S: SettingsStore + 'static> SettingsManager<S> {
    /// Open a manager over an explicitly owned settings store.
    pub async fn open(store: S) -> Result<Self> {
        let settings = store.load_settings().await?;
        let feed = ChangeFeed::new(settings);
        Ok(Self {
            inner: Arc::new(SettingsInner {
                store,
                write: Mutex::new(()),
                feed,
            }),
        })
    }

    /// Subscribe to the live settings bundle.
    ///
    /// A fresh subscription immediately sees the latest written state.
    pub fn subscribe(&self) -> Subscription<Settings> {
        self.inner.feed.subscribe()
    }

    /// The most recently published bundle.
    pub fn current(&self) -> Settings {
        self.inner.feed.latest()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Typed accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Dark color scheme toggle. Defaults to `false`.
    pub fn dark_mode(&self) -> bool {
        self.current().dark_mode
    }

    /// Display name. Defaults to empty.
    pub fn user_name(&self) -> String {
        self.current().user_name
    }

    /// Contact email. Defaults to empty.
    pub fn user_email(&self) -> String {
        self.current().user_email
    }

    /// List layout: `true` = grid, `false` = linear. Defaults to `true`.
    pub fn view_mode(&self) -> bool {
        self.current().view_mode
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.set(SettingKey::DarkMode, SettingValue::Bool(enabled)).await
    }

    pub async fn set_user_name(&self, name: impl Into<String>) -> Result<()> {
        self.set(SettingKey::UserName, SettingValue::Text(name.into())).await
    }

    pub async fn set_user_email(&self, email: impl Into<String>) -> Result<()> {
        self.set(SettingKey::UserEmail, SettingValue::Text(email.into())).await
    }

    pub async fn set_view_mode(&self, grid: bool) -> Result<()> {
        self.set(SettingKey::ViewMode, SettingValue::Bool(grid)).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────

    /// Write one setting and publish the updated bundle.
    pub async fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        finish_detached(tokio::spawn(async move { inner.set(key, value).await })).await
    }

    /// Restore every setting to its documented default and publish.
    pub async fn reset(&self) -> Result<()> {
        let inner = Arc::clone(&self.inner);
        finish_detached(tokio::spawn(async move { inner.reset().await })).await
    }
}

impl<S: SettingsStore> SettingsInner<S> {
    async fn set(&self, key: SettingKey, value: SettingValue) -> Result<()> {
        let _write = self.write.lock().await;
        self.store.set_setting(key, value).await.map_err(warn_fault)?;
        self.republish().await
    }

    async fn reset(&self) -> Result<()> {
        let _write = self.write.lock().await;
        self.store.reset_settings().await.map_err(warn_fault)?;
        self.republish().await
    }

    /// Reload the durable bundle and publish it.
    async fn republish(&self) -> Result<()> {
        let settings = self.store.load_settings().await.map_err(warn_fault)?;
        self.feed.publish(settings);
        Ok(())
    }
}
