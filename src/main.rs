//! # News Scraper
//!
//! Fetches the article listing of a news site and prints the title,
//! description and publication date of every article on it.
//!
//! ## Usage
//!
//! ```sh
//! news_scraper --website 2 --date false
//! ```
//!
//! ## Architecture
//!
//! A run is a straight line:
//! 1. **Resolve**: pick the site by id from the built-in and configured sites
//! 2. **Fetch**: one HTTP GET for the listing page
//! 3. **Parse**: turn the body into an HTML document
//! 4. **Extract**: apply the site's schema, one record per article card
//! 5. **Output**: print records as text or JSON

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod document;
mod error;
mod extractor;
mod fetcher;
mod models;
mod outputs;
mod schema;
mod scrapers;
mod utils;

use cli::Cli;
use fetcher::Fetcher;
use outputs::{Format, json, text};
use scrapers::SiteCatalog;
use utils::truncate_for_log;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr keeps stdout for results) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let catalog = match config::load_catalog(args.config.as_deref()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "Failed to load site catalog");
            return Err(e.into());
        }
    };

    if args.list_sites {
        print_sites(&catalog);
        return Ok(());
    }

    let site = match catalog.find(args.website) {
        Ok(site) => site,
        Err(e) => {
            error!(website = args.website, "Invalid site selection");
            return Err(e.into());
        }
    };

    let fetcher = match Fetcher::new(args.timeout.map(Duration::from_secs)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            return Err(e.into());
        }
    };
    let listing = match scrapers::scrape(&fetcher, site).await {
        Ok(listing) => listing,
        Err(e) => {
            error!(site = %site.name, url = %site.url, error = %e, "Failed to scrape site");
            return Err(e.into());
        }
    };

    let rendered = match args.format {
        Format::Text => text::render(&listing.records, args.date),
        Format::Json => match json::render(&listing, args.date) {
            Ok(out) => out + "\n",
            Err(e) => {
                error!(error = %e, "Failed to render JSON");
                return Err(e.into());
            }
        },
    };
    debug!(preview = %truncate_for_log(&rendered, 300), "Rendered output");
    print!("{rendered}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        records = listing.records.len(),
        "Execution complete"
    );

    Ok(())
}

fn print_sites(catalog: &SiteCatalog) {
    for site in &catalog.sites {
        println!("{}: {} ({})", site.id, site.name, site.url);
    }
}
