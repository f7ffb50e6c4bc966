pub const COMPARE_CMD: &str = "compare";

pub const GENE_FIELD: &str = "Gene";
pub const CHROM_FIELD: &str = "Chr";
pub const POS_FIELD: &str = "Position";

/// Columns every panel report should carry. The first one also marks the
/// column-name line.
pub const REQUIRED_COLS: [&str; 9] = [
    GENE_FIELD,
    CHROM_FIELD,
    POS_FIELD,
    "Ref Transcript",
    "Ref",
    "Var",
    "CDS Change",
    "AA Change",
    "Whitelist",
];

pub const HEADER_MARKER: &str = REQUIRED_COLS[0];

/// Column appended to annotated reports.
pub const ANNOTATION_FIELD: &str = "Horizon";
pub const EXPECTED_FIELD: &str = "is_expected";
pub const ARTIFACT_FIELD: &str = "Artifact?";

///
/// Name a report column takes in a truth file header. Columns without a
/// mapping keep their name.
///
pub fn truth_field_name(field: &str) -> &str {
    match field {
        "Gene" => "gene",
        "Chr" => "chr",
        "Position" => "position",
        "Ref Transcript" => "ref_transcript",
        "Ref" => "ref",
        "Var" => "var",
        "CDS Change" => "HGVS",
        "AA Change" => "protein",
        "Whitelist" => "whitelist",
        "Horizon" => "horizon",
        "Artifact?" => "artifact",
        other => other,
    }
}
