//! Panel mutation report comparison for hemeqc.
//!
//! A [`VariantReport`] holds the rows of a targeted-panel mutation report
//! (for the HD701 control, typically). Each row is looked up in the exome
//! truth data by chromosome and position, and the result is written either
//! as an annotated copy of the report or as a ranked truth file.
//!
pub mod consts;
pub mod report;

// re-exports
pub use report::{ReportRow, VariantReport};
