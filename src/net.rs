// src/net.rs
//
// Query dispatcher: builds the search query string and issues one blocking
// GET against the remote service. Callers run this off the UI thread and
// feed the outcome into the result store.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::config::consts::{BASE_URL, NGROK_SKIP_HEADER, REQUEST_TIMEOUT_SECS, SEARCH_PATH};
use crate::config::options::{SearchForm, SearchMode};
use crate::error::FetchError;
use crate::store::Record;

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(NGROK_SKIP_HEADER, HeaderValue::from_static("true"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    /// One search round trip. Blank forms are refused locally; the service
    /// never sees an empty query.
    pub fn search(&self, form: &SearchForm, mode: SearchMode) -> Result<Vec<Record>, FetchError> {
        let pairs = form.query_pairs(mode);
        if pairs.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        logf!("Net: GET {} ({} param(s))", url, pairs.len());

        let resp = self.client.get(&url).query(&pairs).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = resp.text()?;
        serde_json::from_str(&body).map_err(FetchError::Decode)
    }
}
