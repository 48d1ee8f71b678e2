//! Persisted backend configuration
//!
//! The backend URL lives in a small YAML key-value file. Writers publish the
//! new value on a watch channel so the app can re-run its status check
//! without restarting.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::constants::{CONFIG_DIR_NAME, DEFAULT_API_URL, SETTINGS_FILE};

/// On-disk settings. Keys other than the URL are kept as-is on write.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asbot_api_url: Option<String>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_yaml::Value>,
}

/// Reads and writes the backend URL
pub struct ConfigStore {
    config_dir: PathBuf,
    changes: watch::Sender<String>,
}

impl ConfigStore {
    /// Store rooted at `~/.asbot`
    pub fn new() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Self::with_dir(config_dir)
    }

    /// Store rooted at an explicit directory
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        let store = ConfigStore {
            config_dir: config_dir.into(),
            changes: watch::Sender::new(String::new()),
        };
        store.changes.send_replace(store.get_api_url());
        store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Current backend URL, or the default when nothing usable is saved
    pub fn get_api_url(&self) -> String {
        self.load()
            .asbot_api_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Persist a new backend URL and notify subscribers.
    ///
    /// Returns `Ok(false)` without touching storage when `url` is missing or
    /// empty. Exactly one trailing `/` is stripped.
    pub fn set_api_url(&self, url: Option<&str>) -> Result<bool> {
        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return Ok(false),
        };
        let url = url.strip_suffix('/').unwrap_or(url);

        let mut values = self.load();
        values.asbot_api_url = Some(url.to_string());
        self.save(&values)?;

        tracing::info!(url, "Backend URL saved");
        self.changes.send_replace(url.to_string());
        Ok(true)
    }

    /// Receive every URL written through this store
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.changes.subscribe()
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    fn load(&self) -> Settings {
        let path = self.settings_path();
        if !path.exists() {
            return Settings::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings file");
                Settings::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read settings file");
                Settings::default()
            }
        }
    }

    fn save(&self, values: &Settings) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_yaml::to_string(values)?;
        fs::write(self.settings_path(), content)?;
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::API_URL_KEY;
    use tempfile::tempdir;

    #[test]
    fn test_default_url_when_unset() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        assert_eq!(store.get_api_url(), "http://localhost:8000");
    }

    #[test]
    fn test_strips_single_trailing_slash() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path());

        assert!(store.set_api_url(Some("http://x:8000/")).unwrap());
        assert_eq!(store.get_api_url(), "http://x:8000");

        store.set_api_url(Some("http://x:8000//")).unwrap();
        assert_eq!(store.get_api_url(), "http://x:8000/");
    }

    #[test]
    fn test_empty_or_missing_url_is_ignored() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        store.set_api_url(Some("http://pi.local:8000")).unwrap();

        assert!(!store.set_api_url(Some("")).unwrap());
        assert!(!store.set_api_url(None).unwrap());
        assert_eq!(store.get_api_url(), "http://pi.local:8000");
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempdir().unwrap();
        ConfigStore::with_dir(dir.path())
            .set_api_url(Some("http://10.0.0.5:8000"))
            .unwrap();

        let reopened = ConfigStore::with_dir(dir.path());
        assert_eq!(reopened.get_api_url(), "http://10.0.0.5:8000");

        let raw = fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(raw.contains(API_URL_KEY));
    }

    #[test]
    fn test_empty_persisted_value_uses_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "asbot_api_url: ''\n").unwrap();
        let store = ConfigStore::with_dir(dir.path());
        assert_eq!(store.get_api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_malformed_file_uses_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "- not\n- a map\n").unwrap();
        let store = ConfigStore::with_dir(dir.path());
        assert_eq!(store.get_api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_other_keys_are_preserved() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "theme: dark\n").unwrap();
        let store = ConfigStore::with_dir(dir.path());
        store.set_api_url(Some("http://x:8000")).unwrap();

        let raw = fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(raw.contains("theme: dark"));
    }

    #[test]
    fn test_non_string_keys_survive_write() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "poll_interval: 30\nverbose: true\n").unwrap();
        let store = ConfigStore::with_dir(dir.path());
        store.set_api_url(Some("http://x:8000")).unwrap();

        let raw = fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(raw.contains("poll_interval: 30"));
        assert!(raw.contains("verbose: true"));
        assert_eq!(store.get_api_url(), "http://x:8000");
    }

    #[test]
    fn test_subscribers_see_new_url() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path());
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_api_url(Some("http://x:8000/")).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "http://x:8000");

        store.set_api_url(None).unwrap();
        assert!(!rx.has_changed().unwrap());
    }
}
