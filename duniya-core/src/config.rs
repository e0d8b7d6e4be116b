use std::time::Duration;

use tracing::info;

/// Hosted API default. Override with `DUNIYA_API_URL` for dev/self-hosted
/// deployments (the dev server listens on http://localhost:5000).
const DEFAULT_API_URL: &str = "https://eventduniya-server.onrender.com";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the marketplace API, without a trailing slash.
    pub api_url: String,
    /// Timeout applied to every outgoing request. Without one, a request
    /// that never resolves leaves a view loading forever.
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment. Dev mode (a loadable `.env`
    /// file or `DUNIYA_DEV_MODE`) makes `.env` entries visible here.
    pub fn load() -> Self {
        let dev_mode = std::env::var("DUNIYA_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Config loaded in dev mode");
        }

        let api_url =
            std::env::var("DUNIYA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = std::env::var("DUNIYA_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Config pointing at a specific API instance (tests, self-hosted).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
