//! Declarative extraction schemas.
//!
//! A schema names the element that roots each article card (the
//! *container*) and, for each of the three record fields, an ordered list of
//! [`Probe`]s plus a fallback string. Schemas are plain data: they can be
//! written as Rust literals (see [`crate::scrapers`]) or loaded from YAML.
//!
//! Before use a schema is [compiled](ExtractionSchema::compile), which checks
//! its invariants and parses every selector once.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScrapeError;

/// The three fields every record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Title,
    Description,
    Date,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Title, FieldName::Description, FieldName::Date];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Description => "description",
            FieldName::Date => "date",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attempt at locating a field inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Probe {
    /// CSS selector evaluated against the container's descendants.
    pub selector: String,
    /// Read the text of the first match's parent element instead of the matches.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub parent: bool,
}

impl Probe {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            parent: false,
        }
    }

    pub fn parent_of(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            parent: true,
        }
    }
}

/// How to resolve a single field: probes tried in order, then the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldSpec {
    pub probes: Vec<Probe>,
    pub fallback: String,
}

impl FieldSpec {
    /// A field located by a single selector.
    pub fn new(selector: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            probes: vec![Probe::new(selector)],
            fallback: fallback.into(),
        }
    }

    /// Append another probe, tried after the existing ones.
    pub fn or_else(mut self, probe: Probe) -> Self {
        self.probes.push(probe);
        self
    }
}

/// A container selector plus the field specs for title, description and date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractionSchema {
    pub container: String,
    pub title: FieldSpec,
    pub description: FieldSpec,
    pub date: FieldSpec,
}

impl ExtractionSchema {
    pub fn field(&self, name: FieldName) -> &FieldSpec {
        match name {
            FieldName::Title => &self.title,
            FieldName::Description => &self.description,
            FieldName::Date => &self.date,
        }
    }

    /// Validate the schema and parse all of its selectors.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidSchema`] if a selector is empty or not
    /// valid CSS, a field has no probes, or a fallback is empty.
    pub fn compile(&self) -> Result<CompiledSchema, ScrapeError> {
        let container = parse_selector("container", &self.container)?;
        let [title, description, date] =
            FieldName::ALL.map(|name| compile_field(name, self.field(name)));

        Ok(CompiledSchema {
            container,
            title: title?,
            description: description?,
            date: date?,
        })
    }
}

fn parse_selector(what: &str, selector: &str) -> Result<Selector, ScrapeError> {
    if selector.trim().is_empty() {
        return Err(ScrapeError::InvalidSchema(format!("{what} selector is empty")));
    }
    Selector::parse(selector).map_err(|e| {
        ScrapeError::InvalidSchema(format!("{what} selector {selector:?} is not valid CSS: {e}"))
    })
}

fn compile_field(name: FieldName, spec: &FieldSpec) -> Result<CompiledField, ScrapeError> {
    if spec.probes.is_empty() {
        return Err(ScrapeError::InvalidSchema(format!("{name} has no selectors")));
    }
    if spec.fallback.trim().is_empty() {
        return Err(ScrapeError::InvalidSchema(format!("{name} fallback is empty")));
    }

    let probes = spec
        .probes
        .iter()
        .map(|probe| {
            Ok(CompiledProbe {
                selector: parse_selector(name.as_str(), &probe.selector)?,
                parent: probe.parent,
            })
        })
        .collect::<Result<Vec<_>, ScrapeError>>()?;

    Ok(CompiledField {
        probes,
        fallback: spec.fallback.clone(),
    })
}

#[derive(Debug)]
pub(crate) struct CompiledProbe {
    pub(crate) selector: Selector,
    pub(crate) parent: bool,
}

#[derive(Debug)]
pub(crate) struct CompiledField {
    pub(crate) probes: Vec<CompiledProbe>,
    pub(crate) fallback: String,
}

/// A validated schema with its selectors parsed, ready for the extractor.
#[derive(Debug)]
pub struct CompiledSchema {
    pub(crate) container: Selector,
    pub(crate) title: CompiledField,
    pub(crate) description: CompiledField,
    pub(crate) date: CompiledField,
}
