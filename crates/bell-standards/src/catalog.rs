//! Standards catalog consumed by the generator.
//!
//! The catalog is an explicit value: [`StandardsCatalog::load`] reparses the
//! document on every call and falls back to the built-in table when the
//! document is unavailable or yields no indicators. It always contains the
//! synthetic `None` entry.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::defaults::{NO_DESCRIPTION, NONE_DESCRIPTION, default_indicators};
use crate::map::IndicatorMap;
use crate::ordering::{NONE_CODE, ordered_entries};
use crate::parser::{parse_document, parse_file};

/// Where the catalog's entries came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSource {
    /// Parsed from a standards document. `path` is `None` for in-memory text.
    Document { path: Option<PathBuf> },
    /// Built-in default table.
    Defaults { reason: FallbackReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Defaults were asked for explicitly.
    Requested,
    /// The document could not be read.
    DocumentUnavailable,
    /// The document was read but contained no indicator lines.
    NoIndicators,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document { path: Some(path) } => write!(f, "{}", path.display()),
            Self::Document { path: None } => f.write_str("in-memory document"),
            Self::Defaults { reason } => {
                let reason = match reason {
                    FallbackReason::Requested => "requested",
                    FallbackReason::DocumentUnavailable => "document unavailable",
                    FallbackReason::NoIndicators => "document has no indicators",
                };
                write!(f, "built-in defaults ({reason})")
            }
        }
    }
}

/// One row of the ordered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry<'a> {
    pub code: &'a str,
    pub description: &'a str,
}

/// Indicator lookup table with the synthetic `None` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardsCatalog {
    entries: IndicatorMap,
    source: CatalogSource,
}

impl StandardsCatalog {
    /// Load the catalog from the document at `path`, falling back to the
    /// built-in defaults. Never fails.
    pub fn load(path: &Path) -> Self {
        match parse_file(path) {
            Ok(parsed) => Self::from_indicators(
                &parsed.indicators,
                CatalogSource::Document {
                    path: Some(path.to_path_buf()),
                },
            ),
            Err(error) => {
                warn!(%error, "using built-in standards");
                Self::fallback(FallbackReason::DocumentUnavailable)
            }
        }
    }

    /// Build the catalog from in-memory document text.
    pub fn from_document(text: &str) -> Self {
        let parsed = parse_document(text);
        Self::from_indicators(&parsed.indicators, CatalogSource::Document { path: None })
    }

    /// The built-in default table.
    pub fn defaults() -> Self {
        Self::fallback(FallbackReason::Requested)
    }

    /// A document counts as empty when nothing but `None` lines remain.
    fn from_indicators(indicators: &IndicatorMap, source: CatalogSource) -> Self {
        let entries = with_none_entry(indicators);
        if entries.len() == 1 {
            warn!(%source, "standards document has no indicators, using built-in standards");
            return Self::fallback(FallbackReason::NoIndicators);
        }
        info!(%source, indicators = entries.len() - 1, "loaded standards catalog");
        Self { entries, source }
    }

    fn fallback(reason: FallbackReason) -> Self {
        Self {
            entries: with_none_entry(&default_indicators()),
            source: CatalogSource::Defaults { reason },
        }
    }

    /// Description for an exact, case-sensitive code match.
    ///
    /// Unknown codes return `"No description available"`.
    pub fn description_for(&self, code: &str) -> &str {
        self.entries.get(code).unwrap_or(NO_DESCRIPTION)
    }

    /// Every `(code, description)` pair in display order, `None` first.
    pub fn ordered_catalog(&self) -> Vec<CatalogEntry<'_>> {
        ordered_entries(self.entries.iter())
            .into_iter()
            .map(|(code, description)| CatalogEntry { code, description })
            .collect()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains(code)
    }

    /// Number of entries, the `None` entry included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the `None` entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Defaults { .. })
    }

    /// Entries in encounter order, `None` first.
    pub fn entries(&self) -> &IndicatorMap {
        &self.entries
    }
}

/// Prepend the synthetic `None` entry, dropping any `None` from `indicators`.
fn with_none_entry(indicators: &IndicatorMap) -> IndicatorMap {
    let mut entries = IndicatorMap::new();
    entries.insert(NONE_CODE, NONE_DESCRIPTION);
    for (code, description) in indicators.iter() {
        if code == NONE_CODE {
            debug!("document defines a `None` indicator, keeping the built-in entry");
            continue;
        }
        entries.insert(code, description);
    }
    entries
}
