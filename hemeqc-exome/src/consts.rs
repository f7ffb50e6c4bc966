pub const ROI_CMD: &str = "roi";

pub const GENE_FIELD: &str = "Gene";
pub const CHROM_FIELD: &str = "Chromosome";
pub const POS_FIELD: &str = "Position (GRCh37)";
pub const TYPE_FIELD: &str = "Type";
pub const VARIANT_FIELD: &str = "Variant";
// the quotes are part of the column name in the exported sheets
pub const VAF_FIELD: &str = "\"Expected Allelic Frequency, %\"";

/// Columns every exome table should carry. The last one also marks the
/// column-name line.
pub const REQUIRED_COLS: [&str; 8] = [
    GENE_FIELD,
    CHROM_FIELD,
    POS_FIELD,
    "Ref.",
    "Alt.",
    TYPE_FIELD,
    "HGVS DNA change",
    "HGVS AA change",
];

pub const HEADER_MARKER: &str = REQUIRED_COLS[REQUIRED_COLS.len() - 1];

/// Leading required columns that identify a variant when exporting.
pub const DEDUPE_COLS: usize = REQUIRED_COLS.len() - 2;
