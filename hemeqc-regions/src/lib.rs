//! Region-of-interest membership for hemeqc.
//!
//! Regions are loaded from a four column, tab separated file (chromosome,
//! start, end, comment; no header; both bounds inclusive) and grouped per
//! chromosome by start position. Queries answer a single question: does a
//! position fall inside any region?
//!
//! ## Quick Start
//!
//! ```rust
//! use hemeqc_core::models::Region;
//! use hemeqc_regions::{RegionIndex, RegionMembership};
//!
//! let index = RegionIndex::from(vec![Region {
//!     chr: "chr1".to_string(),
//!     start: 100,
//!     end: 200,
//!     comment: Some("region_A".to_string()),
//! }]);
//!
//! assert!(index.contains("chr1", 150));
//! assert!(!index.contains("chr1", 250));
//! assert!(!index.contains("chr2", 150));
//! ```

/// Per-chromosome region index.
///
/// See [`RegionIndex`] for details.
pub mod region_index;

/// Core trait for membership queries.
///
/// See [`RegionMembership`].
pub mod traits;

// re-exports
pub use self::region_index::RegionIndex;
pub use self::traits::RegionMembership;
