//! Reqwest-backed Google Sheets source adapter.
//!
//! This adapter owns transport details only: request URL construction,
//! timeout and HTTP error mapping, and JSON decoding into flat name lists.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::dto::ValueRangeDto;
use crate::config::SheetConfig;
use crate::error::FetchError;
use crate::source::NameSource;

/// Per-request timeout used by [`GoogleSheetsSource::with_default_timeout`].
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Name source that reads ranges through the Google Sheets v4 values API.
#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    client: Client,
}

impl GoogleSheetsSource {
    /// Build an adapter using a blocking reqwest client with an explicit
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Build an adapter with the [`DEFAULT_FETCH_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_default_timeout() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_FETCH_TIMEOUT)
    }
}

impl NameSource for GoogleSheetsSource {
    fn fetch(&self, range: &str, config: &SheetConfig) -> Result<Vec<String>, FetchError> {
        let url = build_values_url(config, range)?;
        debug!(range, sheet = config.sheet_name(), "requesting name list");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_names(body.as_ref())
    }
}

/// Builds `{url}{id}/values/{sheet}!{range}/?key={api_key}`.
///
/// The base and spreadsheet id are parsed first; `{sheet}!{range}` is then
/// pushed as a single path segment so reserved characters in the sheet name
/// are percent-encoded instead of read as URL structure.
fn build_values_url(config: &SheetConfig, range: &str) -> Result<Url, FetchError> {
    let raw = format!("{base}{id}/values/", base = config.url(), id = config.id());
    let mut url = Url::parse(&raw).map_err(|error| {
        FetchError::invalid_request(format!("invalid sheet URL '{raw}': {error}"))
    })?;
    url.path_segments_mut()
        .map_err(|()| {
            FetchError::invalid_request(format!("sheet URL '{raw}' cannot be a base"))
        })?
        .pop_if_empty()
        .push(&format!("{sheet}!{range}", sheet = config.sheet_name()))
        .push("");
    url.query_pairs_mut().append_pair("key", config.api_key());
    Ok(url)
}

fn parse_names(body: &[u8]) -> Result<Vec<String>, FetchError> {
    let decoded: ValueRangeDto = serde_json::from_slice(body).map_err(|error| {
        FetchError::decode(format!("invalid sheet values payload: {error}"))
    })?;
    Ok(decoded.into_names())
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::timeout(error.to_string())
    } else {
        FetchError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> FetchError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => FetchError::timeout(message),
        _ => FetchError::status(message),
    }
}

/// Collapses whitespace and caps the body at a short preview for messages.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 120;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let head: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{head}...")
    } else {
        compact
    }
}
