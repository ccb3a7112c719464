//! HTTP retrieval of listing pages.
//!
//! Each call to [`Fetcher::fetch`] performs exactly one GET. The body is
//! returned for every HTTP response, whatever its status; only failures to
//! complete the request are errors.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{info, instrument, warn};
use url::Url;

use crate::error::ScrapeError;

/// A response body with the charset its `Content-Type` header declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub body: Vec<u8>,
    pub charset: Option<String>,
}

/// Thin wrapper around a [`reqwest::Client`] with an optional request timeout.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher. `None` leaves requests without a timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetch `url` and return the raw response body and its declared charset.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::InvalidUrl`] if `url` is not an absolute URL
    /// - [`ScrapeError::Network`] if the request or body read fails or times out
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Page, ScrapeError> {
        let parsed = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Non-success status; using body anyway");
        }

        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_param);

        let body = response.bytes().await?;
        info!(%status, bytes = body.len(), charset = ?charset, "Fetched page");
        Ok(Page {
            body: body.to_vec(),
            charset,
        })
    }
}

/// The `charset` parameter of a `Content-Type` value, unquoted.
fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
            .filter(|v| !v.is_empty())
    })
}
