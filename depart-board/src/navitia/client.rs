//! Navitia HTTP client.
//!
//! Issues the single departures request the board is built from. One
//! attempt, no retry, no cancellation; the platform's default timeout
//! applies. Authentication is a static `Authorization` header carrying
//! the injected API key.

use reqwest::header;
use tracing::debug;

use crate::domain::Departure;

use super::convert::decode_departures;
use super::error::NavitiaError;

/// Default base URL for the Navitia SNCF coverage.
const DEFAULT_BASE_URL: &str = "https://api.sncf.com/v1/coverage/sncf";

/// Stop area the board monitors (Paris Gare de Lyon).
const STOP_AREA_ID: &str = "SNCF:87686006";

/// Fixed datetime filter for the departures query.
const QUERY_DATETIME: &str = "20250119T120000";

/// Configuration for the Navitia client.
#[derive(Debug, Clone)]
pub struct NavitiaConfig {
    /// API key sent as the `Authorization` header value
    pub api_key: String,
    /// Base URL for the API (defaults to the SNCF coverage)
    pub base_url: String,
}

impl NavitiaConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Navitia departures client.
#[derive(Debug, Clone)]
pub struct NavitiaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NavitiaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NavitiaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }

    /// Fetch upcoming departures for the monitored stop area.
    ///
    /// A non-success status becomes `BadStatus`; a transport failure
    /// becomes `Timeout` or `Network`; a body that does not decode into
    /// departures becomes `BadBody`.
    pub async fn fetch_departures(&self) -> Result<Vec<Departure>, NavitiaError> {
        let url = format!(
            "{}/stop_areas/stop_area:{}/departures",
            self.base_url, STOP_AREA_ID
        );
        debug!(%url, "requesting departures");

        let response = self
            .http
            .get(&url)
            .query(&[("datetime", QUERY_DATETIME)])
            .header(header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(NavitiaError::BadStatus(status.as_u16()));
        }

        let body = response.text().await?;

        decode_departures(&body).map_err(NavitiaError::from)
    }
}
