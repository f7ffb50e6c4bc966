//! Core data models and readers shared by the hemeqc crates.
//!
//! The tools in this workspace all start the same way: a delimited text file
//! (optionally gzip'd) is read into rows, a column-name line is located, and
//! rows are keyed by chromosome and position. This crate holds the pieces of
//! that shared by every tool:
//!
//! - [`models::Region`]: one inclusive interval from a BED-style file
//! - [`models::ChromKey`]: a sortable chromosome name
//! - [`models::VariantType`]: variant class, with the indel position shift
//! - [`models::TabularFile`]: a header block, a column-name line and data rows
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{HemeQcError, Result};
