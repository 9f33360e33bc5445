use super::CruxRecord;
use super::record::{QueryRequest, QueryResponse};
use crate::Result;
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::StatusCode;

const LOG_TARGET: &str = "     fetch";

/// Default base URL for the `CrUX` API
pub const CRUX_BASE_URL: &str = "https://chromeuxreport.googleapis.com";

const QUERY_RECORD_PATH: &str = "/v1/records:queryRecord";

/// Upper bound on a single `CrUX` request, including reading the body
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Failure to retrieve a record for one URL. None of these are retried.
///
/// Transport errors never carry the request URL, which contains the API key.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read
    #[error("the HTTP request failed")]
    Transport(#[source] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("received an error while fetching CrUX data (HTTP {status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The API answered 200 OK but the body is not a `CrUX` record
    #[error("unable to decode the CrUX response")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Returns `true` if the request was abandoned because it ran past the timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Client for the `CrUX` `queryRecord` endpoint
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl Fetcher {
    /// Create a fetcher using [`DEFAULT_REQUEST_TIMEOUT`].
    ///
    /// `base_url` replaces [`CRUX_BASE_URL`] when given.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("crux-check")
            .timeout(timeout)
            .build()
            .into_app_err("unable to create the HTTP client")?;

        let base_url = base_url.unwrap_or(CRUX_BASE_URL).trim_end_matches('/');

        Ok(Self {
            client,
            endpoint: format!("{base_url}{QUERY_RECORD_PATH}"),
        })
    }

    /// Query the `CrUX` API for `target_url`.
    ///
    /// The URL is sent as-is. When `verbose` is set the request, the raw response and the
    /// decoded record are logged.
    pub async fn fetch(&self, api_key: &str, target_url: &str, verbose: bool) -> Result<CruxRecord, FetchError> {
        log::debug!(target: LOG_TARGET, "Querying '{}' for '{target_url}'", self.endpoint);

        let body = QueryRequest { url: target_url };

        if verbose {
            log::info!(target: LOG_TARGET, "Sending request:\nPOST {}?key=<redacted>\n{body:?}", self.endpoint);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| FetchError::Transport(e.without_url()))?;

        if status != StatusCode::OK {
            log::debug!(target: LOG_TARGET, "'{target_url}' returned HTTP {status}");
            return Err(FetchError::Api { status, body: text });
        }

        if verbose {
            log::info!(target: LOG_TARGET, "Received CrUX data:\n{text}");
        }

        let record = serde_json::from_str::<QueryResponse>(&text).map_err(FetchError::Decode)?.record;

        if verbose {
            log::info!(target: LOG_TARGET, "Parsed CrUX record:\n{record:#?}");
        }

        Ok(record)
    }
}
