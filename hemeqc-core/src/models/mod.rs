pub mod chrom;
pub mod region;
pub mod table;
pub mod variant_type;

// re-export for cleaner imports
pub use self::chrom::ChromKey;
pub use self::region::Region;
pub use self::table::{Columns, TabularFile};
pub use self::variant_type::VariantType;
