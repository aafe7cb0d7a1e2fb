/*!
 * Wikipedia-backed lexical lookup.
 *
 * Queries the Wikipedia search API for a term and reads the result
 * snippets: a biography almost always says "born", while venues and
 * institutions read as places. Empty results are no signal, and callers
 * fall open to "person" on any error.
 */

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::capabilities::{LexicalClass, LexicalLookup};
use crate::errors::CapabilityError;

/// Default Wikipedia API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Lexical lookup client over the Wikipedia search API.
#[derive(Debug)]
pub struct WikiLookup {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl WikiLookup {
    /// Create a lookup client with a bounded request timeout.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, CapabilityError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CapabilityError::RequestFailed(e.to_string()))?;
        Ok(WikiLookup {
            client,
            endpoint: endpoint.to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }
}

#[async_trait]
impl LexicalLookup for WikiLookup {
    async fn classify_term(&self, term: &str) -> Result<Option<LexicalClass>, CapabilityError> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("action", "query"),
                ("list", "search"),
                ("format", "json"),
                ("srsearch", term),
            ],
        )
        .map_err(|e| CapabilityError::RequestFailed(e.to_string()))?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CapabilityError::Timeout(self.timeout_secs)
            } else {
                CapabilityError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CapabilityError::ApiError {
                status_code: status.as_u16(),
                message: status.to_string(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| CapabilityError::ParseError(e.to_string()))?;

        let results = payload
            .get("query")
            .and_then(|q| q.get("search"))
            .and_then(|s| s.as_array());
        let results = match results {
            Some(r) if !r.is_empty() => r,
            // Nothing found: no usable signal
            _ => return Ok(None),
        };

        let snippets = results
            .iter()
            .filter_map(|r| r.get("snippet").and_then(|s| s.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        debug!("lookup for {:?} returned {} result(s)", term, results.len());

        if snippets.contains("born") {
            Ok(Some(LexicalClass::Person))
        } else {
            // "founded" and everything else read as a place/organization
            Ok(Some(LexicalClass::Place))
        }
    }
}
