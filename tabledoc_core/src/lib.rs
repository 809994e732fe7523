//! `tabledoc_core` recovers table schemas from semi-structured markdown
//! documentation. It scans per-environment documentation corpora (Defender
//! XDR advanced-hunting tables, Azure Monitor / Sentinel table references),
//! parses each table document with a tolerant line-oriented extractor, and
//! aggregates everything into a single environment → table → column → type
//! mapping.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Environment registry (corpus root, sandbox dir, document glob)
//!   → Aggregator (enumerates matching documents in sorted order)
//!   → Include resolver (splices [!INCLUDE] targets onto the document text)
//!   → Table extractor (two-state line scan: heading, columns block, rows)
//!   → Type normalizer (alias rewrites into the closed Kusto vocabulary)
//!   → Additional-columns overlay (manually curated column fixes)
//! ```
//!
//! ## Modules
//!
//! - [`environment`] — The built-in corpus registry: directory layout, glob
//!   pattern, sandbox boundary, magic functions, and acquisition hint per
//!   environment.
//! - [`aggregate`] — Drives extraction across a corpus and merges the
//!   results into an [`EnvironmentResult`] per environment.
//!
//! ## Key Types
//!
//! - [`ColumnType`] — The closed scalar type vocabulary, with
//!   documentation-alias normalization.
//! - [`TableDetails`] — The name and column map extracted from one document.
//! - [`Environment`] — One documentation corpus and its conventions.
//! - [`TabledocError`] — All fatal conditions; every error aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use tabledoc_core::extract_schemas;
//!
//! let results = extract_schemas(
//! 	Path::new("."),
//! 	&[],
//! 	Path::new("additional_columns.json"),
//! )
//! .unwrap();
//!
//! for (environment, result) in &results {
//! 	println!("{environment}: {} tables", result.tables.len());
//! }
//! ```

pub use aggregate::*;
pub use environment::*;
pub use error::*;
pub use extract::*;
pub use include::*;
pub use types::*;

pub mod aggregate;
pub mod environment;
mod error;
mod extract;
mod include;
mod types;
