//! Parsed HTML document handed to the extractor.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use scraper::Html;
use tracing::warn;

use crate::error::ScrapeError;
use crate::fetcher::Page;

/// A read-only HTML tree built from a response body.
///
/// The tree lives for one extraction pass; nothing mutates it.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Decode a fetched page and parse it.
    ///
    /// The body is decoded with the declared charset (UTF-8 when absent or
    /// unrecognised; a byte-order mark wins over both). Malformed byte
    /// sequences become U+FFFD and the HTML parser recovers from any markup,
    /// so the only failure is a charset whose content cannot be decoded at
    /// all (labels that map to the WHATWG "replacement" encoding).
    pub fn parse(page: &Page) -> Result<Self, ScrapeError> {
        let encoding = page
            .charset
            .as_deref()
            .map(|label| {
                Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
                    warn!(charset = label, "Unknown charset; decoding as UTF-8");
                    UTF_8
                })
            })
            .unwrap_or(UTF_8);

        if encoding == REPLACEMENT && !page.body.is_empty() {
            return Err(ScrapeError::Parse(format!(
                "charset {:?} cannot be decoded",
                page.charset.as_deref().unwrap_or_default()
            )));
        }

        let (text, used, had_errors) = encoding.decode(&page.body);
        if had_errors {
            warn!(encoding = used.name(), "Body had malformed sequences; replaced");
        }
        Ok(Self::from_html(&text))
    }

    pub fn from_html(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}
