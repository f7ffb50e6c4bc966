//! # Sample sheets for Heme-STAMP runs
//!
//! Reads a run coversheet (tab separated export) and writes the
//! `sample<TAB>barcode` file the analysis pipeline expects. Patient names are
//! shortened to last name plus initials, the HD701 control gets the run
//! number, and duplicate names are numbered.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use hemeqc_sample2barcode::Coversheet;
//!
//! let coversheet = Coversheet::read(Path::new("HEME0142_coversheet.txt")).unwrap();
//! let out = coversheet.output_path(None);
//! coversheet.write_sample2barcode_file(&out).unwrap();
//! ```
pub mod consts;
pub mod coversheet;
pub mod naming;

// Re-exports
pub use coversheet::Coversheet;
pub use naming::{CoversheetEntry, SampleNamer};
