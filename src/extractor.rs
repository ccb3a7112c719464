//! Applies an extraction schema to a parsed document.
//!
//! One [`Record`] is produced per container match, in document order. Each
//! field tries its probes in turn and takes the first non-empty text; if none
//! produces text the field's fallback is used. Extraction cannot fail.

use itertools::Itertools;
use scraper::ElementRef;
use tracing::{debug, instrument};

use crate::document::Document;
use crate::models::{Record, ResultSet};
use crate::schema::{CompiledField, CompiledProbe, CompiledSchema};
use crate::utils::collapse_whitespace;

/// Extract every record described by `schema` from `doc`.
///
/// A document without any container match yields an empty result set.
#[instrument(level = "debug", skip_all)]
pub fn extract(doc: &Document, schema: &CompiledSchema) -> ResultSet {
    let records: ResultSet = doc
        .html()
        .select(&schema.container)
        .map(|container| Record {
            title: resolve_field(container, &schema.title),
            description: resolve_field(container, &schema.description),
            date: resolve_field(container, &schema.date),
        })
        .collect();

    debug!(count = records.len(), "Extracted records");
    records
}

fn resolve_field(container: ElementRef<'_>, field: &CompiledField) -> String {
    field
        .probes
        .iter()
        .map(|probe| probe_text(container, probe))
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| field.fallback.clone())
}

fn probe_text(container: ElementRef<'_>, probe: &CompiledProbe) -> String {
    let mut matches = container.select(&probe.selector);

    if probe.parent {
        return matches
            .next()
            .and_then(|marker| marker.parent())
            .and_then(ElementRef::wrap)
            .map(element_text)
            .unwrap_or_default();
    }

    matches
        .map(element_text)
        .filter(|text| !text.is_empty())
        .join(" ")
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
