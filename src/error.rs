//! Error type shared by the fetch, parse and configuration stages.
//!
//! Missing fields inside a page are never errors: the extractor substitutes
//! the field's fallback text instead. Everything here either stops a run
//! before the request is made (bad URL, bad schema, unknown site, unreadable
//! config) or reports that the page could not be fetched or parsed.

use thiserror::Error;

/// Errors surfaced by a scraping run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The HTTP request could not be completed (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into a document.
    #[error("parse error: {0}")]
    Parse(String),

    /// The target URL is not a well-formed absolute URL.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An extraction schema violates its invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// No site in the catalog carries the requested id.
    #[error("unknown site {0}; run with --list-sites to see the available ids")]
    UnknownSite(u8),

    /// The site catalog file could not be read or parsed.
    #[error("config error in {path}: {message}")]
    Config { path: String, message: String },
}
