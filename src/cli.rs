//! Command-line interface definitions for the news scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::{ArgAction, Parser};

use crate::outputs::Format;

/// Command-line arguments for the news scraper.
///
/// # Examples
///
/// ```sh
/// # The Hacker News, with dates
/// news_scraper
///
/// # WebAslan without dates
/// news_scraper --website 2 --date false
///
/// # A site defined in a config file, as JSON
/// news_scraper -c sites.yaml -w 4 -f json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News site to scrape (1: The Hacker News, 2: WebAslan, 3: Security Intelligence)
    #[arg(short, long, default_value_t = 1)]
    pub website: u8,

    /// Print publication dates (`--date` alone means true)
    #[arg(
        short,
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub date: bool,

    /// Optional path to a YAML file with additional site definitions
    #[arg(short, long, env = "NEWS_SCRAPER_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// List the available sites and exit
    #[arg(short, long)]
    pub list_sites: bool,
}
