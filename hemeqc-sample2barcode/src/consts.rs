use once_cell::sync::Lazy;
use regex::Regex;

pub const SAMPLE2BARCODE_CMD: &str = "sample2barcode";

pub const NAME_FIELD: &str = "Name";
pub const LAB_FIELD: &str = "lab#";
pub const MRN_FIELD: &str = "mrn#";
pub const BARCODE_FIELD: &str = "barcode";

/// Cells that together mark the column-name row of a coversheet.
pub const HEADER_FIELDS: [&str; 3] = [NAME_FIELD, LAB_FIELD, MRN_FIELD];

/// Validation samples may carry one of these, followed by `_`, in front of
/// the patient name.
pub const SAMPLETYPES: [&str; 6] = ["PB", "NormalPB", "BMA", "NormalBMA", "FFPE", "NormalFFPE"];

pub const CONTROL_NAME: &str = "hd701";
pub const CONTROL_PREFIX: &str = "HD701_HEME";

pub const DEFAULT_OUT: &str = "sample2barcode.txt";
pub const RUN_OUT_PREFIX: &str = "sample2barcode_HEME";
pub const RUN_OUT_EXT: &str = ".txt";

/// Longest letter suffix kept on a run number (`0142b`).
pub const MAX_RUN_SUFFIX: usize = 4;

pub static RUN_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:heme|stamp)\s*[id:\s]*[\s_]*([0-9]+)([a-z]*)[\s_]*\b")
        .expect("run number pattern is valid")
});

pub static FIRST_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])[a-z]*").expect("first name pattern is valid"));

pub static SPACES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("whitespace pattern is valid"));
