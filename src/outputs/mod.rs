//! Rendering extracted listings for standard output.
//!
//! # Submodules
//!
//! - [`text`]: numbered `Başlık N: …` lines, one block per record
//! - [`json`]: the whole [`Listing`](crate::models::Listing) as pretty JSON
//!
//! Both renderers honour the `--date` switch: with dates disabled the date
//! of every record is left out.

pub mod json;
pub mod text;

use clap::ValueEnum;

/// Output formats selectable with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}
