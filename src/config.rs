//! Loading extra sites from a YAML file.
//!
//! The file has a single `sites` list; each entry has the same shape as
//! [`Site`](crate::scrapers::Site):
//!
//! ```yaml
//! sites:
//!   - id: 4
//!     name: Example
//!     url: https://example.com/news
//!     schema:
//!       container: ".post"
//!       title: { probes: [{ selector: "h2" }], fallback: "no title" }
//!       description: { probes: [{ selector: "p" }], fallback: "no description" }
//!       date:
//!         probes:
//!           - selector: "time"
//!           - { selector: ".stamp", parent: true }
//!         fallback: "no date"
//! ```

use tokio::fs;
use tracing::{info, instrument};

use crate::error::ScrapeError;
use crate::scrapers::SiteCatalog;

/// Parse a catalog from YAML text. `origin` only labels errors.
pub fn parse_catalog(yaml: &str, origin: &str) -> Result<SiteCatalog, ScrapeError> {
    let catalog: SiteCatalog = serde_yaml::from_str(yaml).map_err(|e| ScrapeError::Config {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    for site in &catalog.sites {
        site.schema.compile().map_err(|e| ScrapeError::Config {
            path: origin.to_string(),
            message: format!("site {} ({}): {e}", site.id, site.name),
        })?;
    }
    Ok(catalog)
}

/// Build the catalog for a run: the built-in sites, plus those in `path` if given.
#[instrument(level = "info")]
pub async fn load_catalog(path: Option<&str>) -> Result<SiteCatalog, ScrapeError> {
    let mut catalog = SiteCatalog::builtin();

    if let Some(path) = path {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| ScrapeError::Config {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let extra = parse_catalog(&yaml, path)?;
        info!(count = extra.sites.len(), "Loaded sites from config");
        catalog.merge(extra);
    }

    Ok(catalog)
}
