//! Preference store - JSON file in the data directory behind an async RwLock.
//!
//! Records expire once they are older than the retention window (the visitor
//! cookie lifetime): a record nobody can present a cookie for is dead weight.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::theme::Theme;

const PREFERENCES_FILE: &str = "preferences.json";
const PREFERENCES_TMP_FILE: &str = "preferences.json.tmp";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode preferences: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreference {
    pub theme: Theme,
    pub updated_at: DateTime<Utc>,
}

/// Generate a fresh anonymous visitor id (128 random bits, hex encoded)
pub fn new_visitor_id() -> String {
    let bytes: [u8; 16] = rand::random();
    hex::encode(bytes)
}

type Preferences = HashMap<String, StoredPreference>;

#[derive(Clone)]
pub struct PreferenceStore {
    prefs: Arc<RwLock<Preferences>>,
    /// Held for a whole write (snapshot, file write, commit). Writers queue
    /// here; readers only ever touch `prefs`.
    write_lock: Arc<Mutex<()>>,
    data_dir: PathBuf,
    retention: Duration,
}

impl PreferenceStore {
    /// Create store, loading existing preferences from disk and dropping
    /// records older than `retention_days`
    pub fn new(data_dir: PathBuf, retention_days: u32) -> Self {
        let retention = Duration::days(i64::from(retention_days));
        let mut prefs = Self::load_from_disk(&data_dir);
        let expired = Self::prune(&mut prefs, retention, Utc::now());
        if expired > 0 {
            tracing::info!("Dropped {} expired preferences", expired);
        }
        tracing::debug!("Loaded {} stored preferences", prefs.len());
        Self {
            prefs: Arc::new(RwLock::new(prefs)),
            write_lock: Arc::new(Mutex::new(())),
            data_dir,
            retention,
        }
    }

    fn prefs_file(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    fn load_from_disk(data_dir: &Path) -> Preferences {
        let path = Self::prefs_file(data_dir);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
                HashMap::new()
            }
        }
    }

    /// Remove records last updated before `now - retention`, returning how many went
    fn prune(prefs: &mut Preferences, retention: Duration, now: DateTime<Utc>) -> usize {
        let before = prefs.len();
        prefs.retain(|_, p| now.signed_duration_since(p.updated_at) <= retention);
        before - prefs.len()
    }

    /// Write the table to a sibling temp file, then rename it over the live one
    async fn save_to_disk(&self, prefs: &Preferences) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(prefs)?;
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let tmp = self.data_dir.join(PREFERENCES_TMP_FILE);
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, Self::prefs_file(&self.data_dir)).await?;
        Ok(())
    }

    pub async fn get(&self, visitor: &str) -> Option<StoredPreference> {
        let prefs = self.prefs.read().await;
        prefs.get(visitor).cloned()
    }

    /// Theme to render for a visitor (default when unknown)
    pub async fn theme_for(&self, visitor: Option<&str>) -> Theme {
        match visitor {
            Some(v) => self.get(v).await.map(|p| p.theme).unwrap_or_default(),
            None => Theme::default(),
        }
    }

    /// Record a visitor's choice and persist the whole table.
    ///
    /// The in-memory table only changes once the file write has succeeded, so
    /// a failed write leaves both exactly as they were.
    pub async fn set(&self, visitor: &str, theme: Theme) -> Result<StoredPreference, StoreError> {
        let _writer = self.write_lock.lock().await;

        let record = StoredPreference {
            theme,
            updated_at: Utc::now(),
        };
        let mut next = self.prefs.read().await.clone();
        next.insert(visitor.to_string(), record.clone());
        let expired = Self::prune(&mut next, self.retention, record.updated_at);
        if expired > 0 {
            tracing::debug!("Dropped {} expired preferences", expired);
        }

        self.save_to_disk(&next).await?;
        *self.prefs.write().await = next;

        tracing::debug!("Saved theme {} for visitor {}", theme, visitor);
        Ok(record)
    }

    pub async fn len(&self) -> usize {
        self.prefs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.prefs.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETENTION_DAYS: u32 = 365;

    fn store_in(dir: &Path) -> PreferenceStore {
        PreferenceStore::new(dir.to_path_buf(), RETENTION_DAYS)
    }

    #[test]
    fn visitor_ids_are_random_hex() {
        let a = new_visitor_id();
        let b = new_visitor_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn unknown_visitor_gets_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.is_empty().await);
        assert_eq!(store.theme_for(None).await, Theme::Dark);
        assert_eq!(store.theme_for(Some("nobody")).await, Theme::Dark);
    }

    #[tokio::test]
    async fn set_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.set("abc", Theme::Light).await.unwrap();
        assert_eq!(store.theme_for(Some("abc")).await, Theme::Light);

        let reloaded = store_in(dir.path());
        assert_eq!(reloaded.len().await, 1);
        let record = reloaded.get("abc").await.unwrap();
        assert_eq!(record.theme, Theme::Light);
        assert!(!dir.path().join(PREFERENCES_TMP_FILE).exists());
    }

    #[tokio::test]
    async fn overwrite_keeps_latest_choice() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let first = store.set("abc", Theme::Light).await.unwrap();
        let second = store.set("abc", Theme::Dark).await.unwrap();
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.theme_for(Some("abc")).await, Theme::Dark);
    }

    #[tokio::test]
    async fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let store = store_in(&nested);
        store.set("abc", Theme::Light).await.unwrap();
        assert!(nested.join(PREFERENCES_FILE).exists());
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "{not json").unwrap();
        let store = store_in(dir.path());
        assert!(store.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_all_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let writers: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                let theme = if i % 2 == 0 { Theme::Light } else { Theme::Dark };
                tokio::spawn(async move { store.set(&format!("visitor{}", i), theme).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await, 64);
        let reloaded = store_in(dir.path());
        assert_eq!(reloaded.len().await, 64);
        assert_eq!(reloaded.theme_for(Some("visitor10")).await, Theme::Light);
        assert_eq!(reloaded.theme_for(Some("visitor11")).await, Theme::Dark);
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be: every write fails
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = store_in(&blocker.join("data"));

        assert!(store.set("abc", Theme::Light).await.is_err());
        assert!(store.is_empty().await);
        assert_eq!(store.theme_for(Some("abc")).await, Theme::Dark);
    }

    #[tokio::test]
    async fn expired_records_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let now = Utc::now();
        let mut seeded = HashMap::new();
        seeded.insert(
            "stale".to_string(),
            StoredPreference {
                theme: Theme::Light,
                updated_at: now - Duration::days(400),
            },
        );
        seeded.insert(
            "recent".to_string(),
            StoredPreference {
                theme: Theme::Light,
                updated_at: now - Duration::days(10),
            },
        );
        fs::write(
            dir.path().join(PREFERENCES_FILE),
            serde_json::to_string(&seeded).unwrap(),
        )
        .unwrap();

        let store = store_in(dir.path());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.theme_for(Some("stale")).await, Theme::Dark);
        assert_eq!(store.theme_for(Some("recent")).await, Theme::Light);

        // The next write rewrites the file without the expired record
        store.set("new", Theme::Dark).await.unwrap();
        let on_disk = fs::read_to_string(dir.path().join(PREFERENCES_FILE)).unwrap();
        assert!(!on_disk.contains("stale"));
        assert!(on_disk.contains("recent"));
        assert!(on_disk.contains("new"));
    }
}
