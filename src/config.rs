use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::Level;

pub const APP_TITLE: &str = "CHAKSHU";

const LOG_ENV: &str = "CHAKSHU_LOG";
const CCTV_DELAY_ENV: &str = "CHAKSHU_CCTV_DELAY_MS";
const DEFAULT_CCTV_DELAY: Duration = Duration::from_millis(3000);
const DEFAULT_CCTV_IMAGES: [&str; 2] = ["/face.jpg", "/facetwo.jpg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub log_level: Level,
    /// Simulated processing time before the dummy CCTV results appear.
    pub cctv_delay: Duration,
    pub cctv_images: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: APP_TITLE.to_string(),
            log_level: Level::INFO,
            cctv_delay: DEFAULT_CCTV_DELAY,
            cctv_images: DEFAULT_CCTV_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns the config plus warnings for values that were ignored. The
    /// caller logs them once the subscriber is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(LOG_ENV) {
            match Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("ignoring {LOG_ENV}={raw:?}: unknown level")),
            }
        }

        if let Some(raw) = lookup(CCTV_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.cctv_delay = Duration::from_millis(ms),
                Err(err) => warnings.push(format!("ignoring {CCTV_DELAY_ENV}={raw:?}: {err}")),
            }
        }

        (config, warnings)
    }
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "chakshu", "chakshu")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let (config, warnings) = AppConfig::from_lookup(|_| None);

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cctv_delay, Duration::from_secs(3));
        assert_eq!(config.cctv_images, vec!["/face.jpg", "/facetwo.jpg"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let (config, warnings) = AppConfig::from_lookup(lookup_from(&[
            ("CHAKSHU_LOG", "debug"),
            ("CHAKSHU_CCTV_DELAY_MS", "250"),
        ]));

        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.cctv_delay, Duration::from_millis(250));
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let (config, warnings) = AppConfig::from_lookup(lookup_from(&[
            ("CHAKSHU_LOG", "loud"),
            ("CHAKSHU_CCTV_DELAY_MS", "soon"),
        ]));

        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn webview_dir_is_created_under_base() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        let base = std::env::temp_dir().join(format!("chakshu-webview-{nanos}"));

        let dir = ensure_webview_data_dir(&base).expect("should create webview dir");

        assert!(dir.is_dir());
        std::fs::remove_dir_all(&base).expect("should cleanup temp dir");
    }
}
