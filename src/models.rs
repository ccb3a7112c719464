//! Data models for extracted articles.
//!
//! - [`Record`]: one article card as pulled from a listing page
//! - [`ResultSet`]: the records of one page, in document order
//! - [`Listing`]: a result set together with where and when it was fetched

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One article extracted from a listing page.
///
/// Every field holds either real text or the schema's fallback for that
/// field, so none of them is ever empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// The article headline.
    pub title: String,
    /// The teaser or excerpt shown under the headline.
    pub description: String,
    /// The publication date exactly as the page prints it.
    pub date: String,
}

/// Records of a single page, ordered as their containers appear in the document.
pub type ResultSet = Vec<Record>;

/// The outcome of scraping one site.
#[derive(Debug, Deserialize, Serialize)]
pub struct Listing {
    /// Human-readable site name.
    pub site: String,
    /// The page that was fetched.
    pub url: String,
    /// When the page was fetched.
    pub fetched_at: DateTime<Utc>,
    /// Extracted records in document order.
    pub records: ResultSet,
}
