//! Reverse geocoding of the user's position to a street address.

use std::future::Future;
use std::time::Duration;

use firstaid_core::Coordinates;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::AssistError;

/// Turns coordinates into a human-readable address.
///
/// Implementations never fail outward: an unknown position or an unreachable
/// service yields `None` and the caller falls back to showing raw coordinates.
pub trait ReverseGeocoder: Send + Sync {
    fn reverse_geocode(&self, coords: Coordinates) -> impl Future<Output = Option<String>> + Send;
}

/// `jsonv2` reply from the Nominatim `/reverse` endpoint.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the OpenStreetMap Nominatim `/reverse` endpoint.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`AssistError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`AssistError::Geocode`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, AssistError> {
        // Nominatim's usage policy rejects requests without an identifying agent.
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| AssistError::Geocode(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    fn reverse_url(&self, coords: Coordinates) -> Result<Url, AssistError> {
        let mut url = self
            .base_url
            .join("reverse")
            .map_err(|e| AssistError::Geocode(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &coords.lat().to_string())
            .append_pair("lon", &coords.lon().to_string());
        Ok(url)
    }

    /// Looks up the address for `coords`.
    ///
    /// `Ok(None)` means the service answered but knows no address there.
    ///
    /// # Errors
    ///
    /// - [`AssistError::Http`] on network failure or a non-2xx status.
    /// - [`AssistError::Geocode`] if the body is not the expected JSON.
    pub async fn lookup(&self, coords: Coordinates) -> Result<Option<String>, AssistError> {
        let url = self.reverse_url(coords)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let parsed: ReverseResponse = serde_json::from_str(&body)
            .map_err(|e| AssistError::Geocode(format!("unexpected reverse response: {e}")))?;

        if let Some(reason) = parsed.error {
            tracing::debug!(%coords, reason = %reason, "no address for position");
            return Ok(None);
        }
        Ok(parsed
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse_geocode(&self, coords: Coordinates) -> Option<String> {
        match self.lookup(coords).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(error = %e, %coords, "reverse geocoding failed");
                None
            }
        }
    }
}
