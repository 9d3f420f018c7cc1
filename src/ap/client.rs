// ActivityPub HTTP client — unauthenticated JSON fetches.
//
// A thin reqwest wrapper with a single generic fetch helper. Fediverse
// servers vary in what they return without content negotiation, so the
// actor fetch sends an explicit Accept header; outbox and page fetches
// go out bare. No retries anywhere — a failed fetch fails the run.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// Accept header for actor lookups. Servers prefer `activity+json`, fall
/// back to `ld+json` with the activitystreams profile, then plain JSON.
pub const ACTIVITY_ACCEPT: &str = "application/activity+json, \
     application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\", \
     application/json";

/// Per-request timeout. Covers connect, send, and body read.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Unauthenticated HTTP client for ActivityPub document fetches.
pub struct ApClient {
    client: reqwest::Client,
}

impl ApClient {
    /// Create a new client with the fixed fetch timeout.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fedicheck/0.1 (compatibility probe)")
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET a URL and parse the body as a generic JSON value.
    ///
    /// `accept` optionally sets the Accept header (pass
    /// [`ACTIVITY_ACCEPT`] for actor documents). The body is decoded as
    /// UTF-8 before parsing so a bad encoding and bad JSON surface as
    /// distinct errors.
    pub async fn fetch_json(&self, url: &str, accept: Option<&str>) -> Result<Value> {
        debug!(url = url, "GET request");

        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header("Accept", accept);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GET {url} returned {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        let text = std::str::from_utf8(&bytes)
            .with_context(|| format!("Response from {url} is not valid UTF-8"))?;

        serde_json::from_str(text).with_context(|| format!("Response from {url} is not valid JSON"))
    }
}
