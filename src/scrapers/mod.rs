//! News sites the scraper knows about.
//!
//! Every site is data: a URL plus an [`ExtractionSchema`]. Nothing in the
//! extractor is specific to a site.
//!
//! # Built-in Sites
//!
//! | Id | Site | Module |
//! |----|------|--------|
//! | 1 | The Hacker News | [`thehackernews`] |
//! | 2 | WebAslan (sondakika.com) | [`webaslan`] |
//! | 3 | Security Intelligence | [`securityintelligence`] |
//!
//! More sites can be supplied through a YAML config file; see
//! [`crate::config`].

pub mod securityintelligence;
pub mod thehackernews;
pub mod webaslan;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::document::Document;
use crate::error::ScrapeError;
use crate::extractor::extract;
use crate::fetcher::Fetcher;
use crate::models::Listing;
use crate::schema::ExtractionSchema;

pub const TITLE_NOT_FOUND: &str = "Başlık Bulunamadı";
pub const DESCRIPTION_NOT_FOUND: &str = "Açıklama Bulunamadı";
pub const DATE_NOT_FOUND: &str = "Tarih Bulunamadı";

/// A listing page and the schema used to read it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Site {
    pub id: u8,
    pub name: String,
    pub url: String,
    pub schema: ExtractionSchema,
}

/// The set of sites selectable by id.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCatalog {
    pub sites: Vec<Site>,
}

impl SiteCatalog {
    /// The three built-in sites.
    pub fn builtin() -> Self {
        Self {
            sites: vec![
                thehackernews::site(),
                webaslan::site(),
                securityintelligence::site(),
            ],
        }
    }

    /// Add `other`'s sites; a site whose id already exists replaces the old one.
    pub fn merge(&mut self, other: SiteCatalog) {
        for site in other.sites {
            match self.sites.iter_mut().find(|s| s.id == site.id) {
                Some(existing) => {
                    debug!(id = site.id, name = %site.name, "Overriding site");
                    *existing = site;
                }
                None => self.sites.push(site),
            }
        }
        self.sites.sort_by_key(|s| s.id);
    }

    pub fn find(&self, id: u8) -> Result<&Site, ScrapeError> {
        self.sites
            .iter()
            .find(|s| s.id == id)
            .ok_or(ScrapeError::UnknownSite(id))
    }
}

/// Fetch `site`'s page and extract its records.
///
/// The schema is compiled before the request so a broken schema never costs a
/// round trip.
#[instrument(level = "info", skip_all, fields(site = %site.name, url = %site.url))]
pub async fn scrape(fetcher: &Fetcher, site: &Site) -> Result<Listing, ScrapeError> {
    let schema = site.schema.compile()?;
    let fetched_at = Utc::now();
    let page = fetcher.fetch(&site.url).await?;
    let document = Document::parse(&page)?;
    let records = extract(&document, &schema);

    info!(count = records.len(), "Scraped site");
    Ok(Listing {
        site: site.name.clone(),
        url: site.url.clone(),
        fetched_at,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::testing::{serve_bytes, serve_once};
    use crate::schema::FieldSpec;

    fn custom(id: u8, name: &str) -> Site {
        Site {
            id,
            name: name.to_string(),
            url: "https://example.com/news".to_string(),
            schema: ExtractionSchema {
                container: ".post".to_string(),
                title: FieldSpec::new("h2", "no title"),
                description: FieldSpec::new("p", "no description"),
                date: FieldSpec::new("time", "no date"),
            },
        }
    }

    #[test]
    fn test_builtin_ids() {
        let catalog = SiteCatalog::builtin();
        let ids: Vec<u8> = catalog.sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.find(1).unwrap().url, thehackernews::URL);
        assert_eq!(catalog.find(2).unwrap().url, webaslan::URL);
        assert_eq!(catalog.find(3).unwrap().url, securityintelligence::URL);
    }

    #[test]
    fn test_builtin_schemas_compile() {
        for site in SiteCatalog::builtin().sites {
            assert!(site.schema.compile().is_ok(), "{} failed to compile", site.name);
            assert_eq!(site.schema.date.fallback, DATE_NOT_FOUND);
        }
    }

    #[test]
    fn test_unknown_site() {
        let catalog = SiteCatalog::builtin();
        assert!(matches!(catalog.find(0), Err(ScrapeError::UnknownSite(0))));
        assert!(matches!(catalog.find(4), Err(ScrapeError::UnknownSite(4))));
    }

    #[test]
    fn test_merge_adds_and_overrides() {
        let mut catalog = SiteCatalog::builtin();
        catalog.merge(SiteCatalog {
            sites: vec![custom(5, "Five"), custom(2, "Replacement")],
        });

        let ids: Vec<u8> = catalog.sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
        assert_eq!(catalog.find(2).unwrap().name, "Replacement");
        assert_eq!(catalog.find(5).unwrap().name, "Five");
    }

    #[tokio::test]
    async fn test_scrape_end_to_end() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"<html><body>
                 <div class="post"><h2>One</h2><p>First body</p><time>Mon</time></div>
                 <div class="post"><h2>Two</h2><p>Second body</p></div>
               </body></html>"#,
        )
        .await;
        let mut site = custom(9, "Local");
        site.url = url.clone();

        let fetcher = Fetcher::new(Some(std::time::Duration::from_secs(5))).unwrap();
        let listing = scrape(&fetcher, &site).await.unwrap();

        assert_eq!(listing.site, "Local");
        assert_eq!(listing.url, url);
        assert_eq!(listing.records.len(), 2);
        assert_eq!(listing.records[0].title, "One");
        assert_eq!(listing.records[0].date, "Mon");
        assert_eq!(listing.records[1].description, "Second body");
        assert_eq!(listing.records[1].date, "no date");
    }

    #[tokio::test]
    async fn test_scrape_invalid_schema_fails_before_fetch() {
        let mut site = custom(9, "Broken");
        site.url = "http://127.0.0.1:1/".to_string();
        site.schema.container = String::new();

        let fetcher = Fetcher::new(None).unwrap();
        let err = scrape(&fetcher, &site).await.unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSchema(_)));
    }

    #[tokio::test]
    async fn test_scrape_turkish_charset_page() {
        let url = serve_bytes(
            "HTTP/1.1 200 OK",
            "text/html; charset=iso-8859-9",
            b"<html><body><div class=\"post\"><h2>G\xfcncel</h2><p>A\xe7\xfdklama</p></div></body></html>",
        )
        .await;
        let mut site = custom(9, "Latin");
        site.url = url;

        let fetcher = Fetcher::new(Some(std::time::Duration::from_secs(5))).unwrap();
        let listing = scrape(&fetcher, &site).await.unwrap();

        assert_eq!(listing.records.len(), 1);
        assert_eq!(listing.records[0].title, "Güncel");
        assert_eq!(listing.records[0].description, "Açıklama");
        assert_eq!(listing.records[0].date, "no date");
    }
}
