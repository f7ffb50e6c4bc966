//! Exome "truth" data for hemeqc.
//!
//! Exome variant tables (tab separated, free-form header block, then a
//! column-name line) are loaded into an [`ExomeData`], which keys every row by
//! chromosome and position. Insertions and deletions are keyed one base to
//! the right of their declared position so they line up with panel calls.
//!
//! Two consumers sit on top of the index:
//!
//! - [`ExomeData::confirm`]: how strongly the exome backs a variant seen
//!   elsewhere (see [`Confirmation`])
//! - [`ExomeData::write_roi_table`]: export only the variants inside a set of
//!   regions of interest, deduplicated
//!
pub mod confirmation;
pub mod consts;
pub mod exome_data;
pub mod record;
pub mod roi;

// re-exports
pub use confirmation::Confirmation;
pub use exome_data::{ExomeData, LoadOptions, MissingField};
pub use record::ExomeRecord;
