use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ai::media::{DEFAULT_AVATAR_BASE_URL, DEFAULT_IMAGE_BASE_URL};

pub const DEFAULT_AI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackedConfig {
    pub db_path: String,
    pub log_dir: String,
    pub ai_api_key: Option<String>,
    pub ai_endpoint: String,
    pub persist_interval_ms: u64,
    pub toast_ttl_ms: u64,
    pub avatar_base_url: String,
    pub image_base_url: String,
}

impl Default for BackedConfig {
    fn default() -> Self {
        Self {
            db_path: "backed.db".to_string(),
            log_dir: "logs".to_string(),
            ai_api_key: None,
            ai_endpoint: DEFAULT_AI_ENDPOINT.to_string(),
            persist_interval_ms: 500,
            toast_ttl_ms: 3000,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

// Keeps the API key out of logs
impl Debug for BackedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackedConfig")
            .field("db_path", &self.db_path)
            .field("log_dir", &self.log_dir)
            .field("ai_api_key", &self.ai_api_key.as_ref().map(|_| "<redacted>"))
            .field("ai_endpoint", &self.ai_endpoint)
            .field("persist_interval_ms", &self.persist_interval_ms)
            .field("toast_ttl_ms", &self.toast_ttl_ms)
            .field("avatar_base_url", &self.avatar_base_url)
            .field("image_base_url", &self.image_base_url)
            .finish()
    }
}

impl BackedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset or invalid values keep their default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let ai_api_key = lookup("BACKED_AI_API_KEY")
            .or_else(|| lookup("GOOGLE_AI_API_KEY"))
            .filter(|key| !key.trim().is_empty());
        if ai_api_key.is_none() {
            log::warn!("No AI API key set, content generation is disabled");
        }

        Self {
            db_path: try_load(&lookup, "BACKED_DB_PATH", defaults.db_path),
            log_dir: try_load(&lookup, "BACKED_LOG_DIR", defaults.log_dir),
            ai_api_key,
            ai_endpoint: try_load(&lookup, "BACKED_AI_ENDPOINT", defaults.ai_endpoint),
            persist_interval_ms: try_load(&lookup, "BACKED_PERSIST_INTERVAL_MS", defaults.persist_interval_ms),
            toast_ttl_ms: try_load(&lookup, "BACKED_TOAST_TTL_MS", defaults.toast_ttl_ms),
            avatar_base_url: defaults.avatar_base_url,
            image_base_url: defaults.image_base_url,
        }
    }

    pub fn persist_interval(&self) -> Duration {
        Duration::from_millis(self.persist_interval_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        log::info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        log::warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
