//! Runtime settings read from the environment (and `.env`)

use di::inject;
use di::injectable;
use std::env;
use std::str::FromStr;
use std::sync::Mutex;

pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Settings installed by integration tests, picked up by the DI-created instance.
static TEST_SETTINGS: Mutex<Option<Settings>> = Mutex::new(None);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Token for the hosted inference API. `None` when unset or blank.
    pub hf_token: Option<String>,
    pub model: String,
    /// Base of the OpenAI-compatible API, without a trailing slash.
    pub base_url: String,
    pub max_tokens: u32,
    pub listen_addr: String,
    pub allowed_origins: Vec<String>,
}

#[injectable]
impl Settings {
    #[inject]
    pub fn create() -> Settings {
        if let Some(settings) = TEST_SETTINGS
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
        {
            return settings;
        }

        dotenvy::dotenv().ok();
        Settings::from_env()
    }
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let hf_token = lookup("HF_TOKEN")
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty());

        let model = lookup("HF_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        let base_url = lookup("HF_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let max_tokens = lookup("HF_MAX_TOKENS")
            .and_then(|s| u32::from_str(s.trim()).ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let listen_addr =
            lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_owned())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect();

        Settings {
            hf_token,
            model,
            base_url,
            max_tokens,
            listen_addr,
            allowed_origins,
        }
    }

    /// Makes every DI-created `Settings` a copy of `settings` until cleared.
    ///
    /// `more-di` has no way to register a prebuilt instance through `#[injectable]`,
    /// so integration tests go through this hook.
    pub fn set_test_settings(settings: Settings) {
        if let Ok(mut guard) = TEST_SETTINGS.lock() {
            *guard = Some(settings);
        }
    }

    pub fn clear_test_settings() {
        if let Ok(mut guard) = TEST_SETTINGS.lock() {
            *guard = None;
        }
    }
}
