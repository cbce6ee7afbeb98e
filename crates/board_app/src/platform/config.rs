use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use board_engine::ClientSettings;
use board_logging::board_info;
use serde::{Deserialize, Serialize};

/// On-disk shape of `board.ron`. Every field is optional; unset fields keep
/// the client defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub base_url: Option<String>,
    pub page_path: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_page_bytes: Option<u64>,
}

impl AppConfig {
    /// Command-line overrides win over the file.
    pub(crate) fn into_settings(
        self,
        base_url: Option<String>,
        page_path: Option<String>,
    ) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            base_url: base_url.or(self.base_url).unwrap_or(defaults.base_url),
            page_path: page_path.or(self.page_path).unwrap_or(defaults.page_path),
            connect_timeout: self
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            request_timeout: self
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_page_bytes: self.max_page_bytes.unwrap_or(defaults.max_page_bytes),
        }
    }
}

pub(crate) fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            board_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    board_info!("Loaded config from {:?}", path);
    Ok(config)
}
