//! OMDb enrichment client.
//!
//! This crate fetches Plot and Poster_URL for each ranked title from
//! the OMDb HTTP API. It handles:
//! - Per-call lookup by IMDb id with an explicit API key
//! - Decoding the OMDb JSON payload, including its own
//!   `"Response": "False"` negative-result convention
//! - Per-item failure tolerance: a failed lookup degrades that item
//!   to `N/A` fields and the run continues
//! - A mandatory sleep after every call as a self-imposed rate limit
//!
//! The [`MetadataSource`] trait is the seam for tests: the enrichment
//! loop only sees the trait, so a stub can script successes, negative
//! results, and transport errors per id.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const NOT_AVAILABLE: &str = "N/A";

/// Pause after every OMDb call, success or failure
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

const CALL_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Errors a single OMDb lookup can produce.
///
/// These never escape [`enrich_all`]; they exist so the loop can log
/// what went wrong before degrading the item.
#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("Request to OMDb failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OMDb returned an undecodable payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The slice of the OMDb payload this pipeline uses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbResponse {
    /// OMDb's own status indicator: "True" or "False"
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl OmdbResponse {
    /// An absent status field counts as success; only an explicit
    /// "False" is a negative result.
    fn is_success(&self) -> bool {
        self.response != "False"
    }
}

/// The two fields enrichment adds to a report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub plot: String,
    pub poster_url: String,
}

impl Enrichment {
    fn not_available() -> Self {
        Self {
            plot: NOT_AVAILABLE.to_string(),
            poster_url: NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<OmdbResponse> for Enrichment {
    fn from(response: OmdbResponse) -> Self {
        // A negative result masks plot/poster even if the keys exist.
        if !response.is_success() {
            return Self::not_available();
        }
        Self {
            plot: response.plot.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            poster_url: response.poster.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// A per-title metadata lookup.
///
/// [`OmdbClient`] is the real implementation; tests substitute stubs.
pub trait MetadataSource {
    fn lookup(
        &self,
        imdb_id: &str,
    ) -> impl std::future::Future<Output = Result<OmdbResponse, OmdbError>> + Send;
}

/// HTTP client for the OMDb API.
///
/// The API key is an explicit constructor parameter, not ambient
/// process state, and each call is bounded by a 10 second timeout.
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, OmdbError> {
        let client = reqwest::Client::builder().timeout(CALL_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Override the endpoint (used against local test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl MetadataSource for OmdbClient {
    async fn lookup(&self, imdb_id: &str) -> Result<OmdbResponse, OmdbError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("i", imdb_id),
                ("apikey", self.api_key.as_str()),
                ("plot", "short"),
                ("r", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Enrich every id, strictly sequentially, one attempt each.
///
/// The result is aligned with `ids`. A transport or decode failure
/// degrades only its own item to `N/A` fields; the delay applies after
/// every call, success or failure, to respect the service's rate
/// limits.
pub async fn enrich_all<S: MetadataSource>(
    source: &S,
    ids: &[String],
    delay: Duration,
) -> Vec<Enrichment> {
    let mut enriched = Vec::with_capacity(ids.len());
    for (idx, id) in ids.iter().enumerate() {
        let item = match source.lookup(id).await {
            Ok(response) => Enrichment::from(response),
            Err(err) => {
                warn!("Enrichment failed for {id}: {err}");
                Enrichment::not_available()
            }
        };
        enriched.push(item);

        if (idx + 1) % 25 == 0 {
            info!("Enriched {}/{} titles", idx + 1, ids.len());
        }
        tokio::time::sleep(delay).await;
    }
    enriched
}
