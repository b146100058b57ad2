//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest` client for the upstream check-in API and the
//! parsed host configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an HTTP client honouring the configured timeouts.
    /// Redirects are handed back to the caller so `Location` and `Set-Cookie`
    /// on a 3xx reach the browser.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
