//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Upstream check-in API base URL, without a trailing slash.
    pub api_url: String,
    /// Value injected as `x-customrequired-header` on proxied requests.
    pub custom_header: Option<String>,
    pub timeouts: ApiTimeouts,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `CHECKIN_API_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CUSTOM_REQUEST_HEADER`: no header injected when absent
    /// - `CHECKIN_API_TIMEOUT_SECS`: default 30
    /// - `CHECKIN_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API URL is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the API URL is missing or a value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_url = var("CHECKIN_API_URL")
            .ok_or(ConfigError::Missing { var: "CHECKIN_API_URL" })?
            .trim_end_matches('/')
            .to_owned();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "CHECKIN_API_URL", value: api_url });
        }

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let timeouts = ApiTimeouts {
            request_secs: parse_or("CHECKIN_API_TIMEOUT_SECS", var("CHECKIN_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "CHECKIN_API_CONNECT_TIMEOUT_SECS",
                var("CHECKIN_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_API_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, api_url, custom_header: var("CUSTOM_REQUEST_HEADER"), timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
