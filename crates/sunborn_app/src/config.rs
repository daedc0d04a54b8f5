use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sunborn_engine::{AllowlistSources, ListSource};
use sunborn_logging::sunborn_warn;

use crate::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "sunborn.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// http(s) URL or local file path of allowlist A.
    pub allowlist_a: String,
    /// http(s) URL or local file path of allowlist B.
    pub allowlist_b: String,
    /// Cosmetic delay before a check resolves; zero disables it.
    pub reveal_delay_ms: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowlist_a: "assets/sunborn-allowlist-a.csv".to_string(),
            allowlist_b: "assets/sunborn-allowlist-b.csv".to_string(),
            reveal_delay_ms: 800,
            log_destination: LogDestination::File,
        }
    }
}

impl AppConfig {
    pub fn sources(&self) -> AllowlistSources {
        AllowlistSources {
            a: parse_source(&self.allowlist_a),
            b: parse_source(&self.allowlist_b),
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Read the config file, falling back to defaults when it is missing or
/// malformed. A malformed file is logged, not fatal.
pub fn load_or_default(path: &Path) -> AppConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            sunborn_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            sunborn_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

fn parse_source(raw: &str) -> ListSource {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        ListSource::Url(raw.to_string())
    } else {
        ListSource::File(PathBuf::from(raw))
    }
}
