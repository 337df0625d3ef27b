//! End-to-end behavior of the settings gateway.

use std::time::Duration;

use scriba::{MemoryStore, SettingKey, SettingValue, Settings, SettingsManager, SqliteStore};
use tokio::time::timeout;

async fn mem_settings() -> SettingsManager<MemoryStore> {
    SettingsManager::open(MemoryStore::new()).await.unwrap()
}

#[tokio::test]
async fn test_defaults_before_any_write() {
    let settings = mem_settings().await;
    assert!(!settings.dark_mode());
    assert_eq!(settings.user_name(), "");
    assert_eq!(settings.user_email(), "");
    assert!(settings.view_mode());
}

#[tokio::test]
async fn test_fresh_subscription_sees_latest_write() {
    let settings = mem_settings().await;
    settings.set_dark_mode(true).await.unwrap();

    let mut sub = settings.subscribe();
    assert!(sub.current().dark_mode);
}

#[tokio::test]
async fn test_write_publishes_to_live_subscriber() {
    let settings = mem_settings().await;
    let mut sub = settings.subscribe();

    settings.set_user_name("Ada").await.unwrap();

    let bundle = timeout(Duration::from_secs(1), sub.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bundle.user_name, "Ada");
}

#[tokio::test]
async fn test_generic_set_matches_typed_accessor() {
    let settings = mem_settings().await;
    settings
        .set(SettingKey::UserEmail, SettingValue::Text("ada@example.com".into()))
        .await
        .unwrap();
    assert_eq!(settings.user_email(), "ada@example.com");
}

#[tokio::test]
async fn test_view_mode_toggle() {
    let settings = mem_settings().await;
    settings.set_view_mode(false).await.unwrap();
    assert!(!settings.view_mode());
    settings.set_view_mode(true).await.unwrap();
    assert!(settings.view_mode());
}

#[tokio::test]
async fn test_reset_restores_documented_defaults() {
    let settings = mem_settings().await;
    settings.set_dark_mode(true).await.unwrap();
    settings.set_user_name("Ada").await.unwrap();
    settings.set_view_mode(false).await.unwrap();

    let mut sub = settings.subscribe();
    settings.reset().await.unwrap();

    let bundle = timeout(Duration::from_secs(1), sub.next())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bundle, Settings::default());
    assert_eq!(settings.current(), Settings::default());
}

#[tokio::test]
async fn test_settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scriba.db");

    {
        let settings = SettingsManager::open(SqliteStore::open(&path).unwrap())
            .await
            .unwrap();
        settings.set_dark_mode(true).await.unwrap();
        settings.set_user_email("ada@example.com").await.unwrap();
    }

    let settings = SettingsManager::open(SqliteStore::open(&path).unwrap())
        .await
        .unwrap();
    assert!(settings.dark_mode());
    assert_eq!(settings.user_email(), "ada@example.com");
}
