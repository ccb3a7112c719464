//! Plain-text output, one labelled line per field.
//!
//! ```text
//! Başlık 1: Hackers Exploit Router Flaw
//! Açıklama 1: Attackers are abusing a critical bug.
//! Tarih 1: Oct 19, 2026
//! ```

use std::fmt::Write;

use crate::models::Record;

const TITLE_LABEL: &str = "Başlık";
const DESCRIPTION_LABEL: &str = "Açıklama";
const DATE_LABEL: &str = "Tarih";

/// Render records with 1-based indices. Date lines are skipped unless `include_dates`.
pub fn render(records: &[Record], include_dates: bool) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let n = i + 1;
        writeln!(out, "{TITLE_LABEL} {n}: {}", record.title).unwrap();
        writeln!(out, "{DESCRIPTION_LABEL} {n}: {}", record.description).unwrap();
        if include_dates {
            writeln!(out, "{DATE_LABEL} {n}: {}", record.date).unwrap();
        }
    }
    out
}
