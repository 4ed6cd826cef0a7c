//! Standards document parsing and the standards catalog.
//!
//! This crate provides:
//!
//! - **Parser** for the three-level standards document
//!   (domain -> standard -> performance indicator)
//! - **Ordering** of indicator codes for display (numeric tuple order)
//! - **Catalog** facade with the `None` entry and built-in fallback table
//!
//! # Document Format
//!
//! ```text
//! ## Domain 2 - Algorithms and Programming
//! ### Standard 2.3 - Develop and debug programs
//! * **2.3.7** Debug errors to ensure functionality
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use bell_standards::{StandardsCatalog, standards_file};
//!
//! let catalog = StandardsCatalog::load(&standards_file(None));
//! for entry in catalog.ordered_catalog() {
//!     println!("{} {}", entry.code, entry.description);
//! }
//! ```

#![deny(unsafe_code)]

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod map;
pub mod ordering;
pub mod parser;
pub mod paths;

pub use catalog::{CatalogEntry, CatalogSource, FallbackReason, StandardsCatalog};
pub use defaults::{DEFAULT_STANDARDS, NO_DESCRIPTION, NONE_DESCRIPTION, default_indicators};
pub use error::{Result, StandardsError};
pub use map::IndicatorMap;
pub use ordering::{NONE_CODE, compare_codes, ordered_codes, ordered_entries};
pub use parser::{
    IssueKind, ParseReport, ParsedStandards, SectionIssue, load_indicators, parse_document,
    parse_file,
};
pub use paths::{STANDARDS_ENV_VAR, default_standards_file, standards_file};
