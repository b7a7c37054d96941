use std::env;

/// Default upstream base URL (OpenWeather).
pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org";

/// Upstream provider configuration, read once at startup and passed to the
/// clients explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the weather provider, without a trailing slash.
    pub api_base_url: String,

    /// API key for the weather provider. May be empty.
    pub api_key: String,
}

impl Config {
    /// Read configuration from the `API_BASE_URL` and `API_KEY` environment
    /// variables.
    ///
    /// A missing API key is logged as a warning but does not prevent
    /// startup: upstream requests will be attempted and fail.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let api_key = env::var("API_KEY").unwrap_or_default();

        let config = Self { api_base_url, api_key };
        config.warn_if_unconfigured();
        config
    }

    pub fn warn_if_unconfigured(&self) {
        if self.api_key.is_empty() {
            tracing::warn!("API_KEY is not set; upstream weather requests will fail");
        }
    }
}
