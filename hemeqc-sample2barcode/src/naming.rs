use fxhash::FxHashMap as HashMap;
use log::warn;

use crate::consts::*;

/// One sample line of a coversheet, cells trimmed where they get used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoversheetEntry {
    pub name: String,
    pub lab: String,
    pub mrn: String,
    pub barcode: String,
}

///
/// Pull the run number out of a coversheet line: digits after `HEME` or
/// `STAMP`, zero padded to four places, plus a short letter suffix.
///
pub fn parse_run_number(line: &str) -> Option<String> {
    let caps = RUN_NUMBER_RE.captures(line)?;

    let digits = caps.get(1)?.as_str().trim_start_matches('0');
    let mut run = format!("{:0>4}", digits);

    if let Some(suffix) = caps.get(2) {
        let suffix = suffix.as_str();
        if !suffix.is_empty() && suffix.chars().count() <= MAX_RUN_SUFFIX {
            run.push_str(suffix);
        }
    }

    Some(run)
}

fn is_separator(b: u8) -> bool {
    b == b'_' || b == b','
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

///
/// Find the first run of `_`/`,` (plus trailing whitespace) at or after
/// `from` that is not followed by `research`. Shorter runs are tried before
/// giving up on a start position, so `a__research` splits as `a` /
/// `_research`.
///
fn find_name_separator(name: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = name.as_bytes();

    for start in from..bytes.len() {
        if !is_separator(bytes[start]) {
            continue;
        }

        let mut run_end = start;
        while run_end < bytes.len() && is_separator(bytes[run_end]) {
            run_end += 1;
        }

        for sep_end in (start + 1..=run_end).rev() {
            let mut space_end = sep_end;
            while space_end < bytes.len() && is_space(bytes[space_end]) {
                space_end += 1;
            }
            for end in (sep_end..=space_end).rev() {
                if !name[end..].starts_with("research") {
                    return Some((start, end));
                }
            }
        }
    }

    None
}

///
/// Split a name on `_`/`,` separators at most `max_splits` times. Research
/// samples (`xyz_research`) are not split at their suffix.
///
pub fn split_name(name: &str, max_splits: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut from = 0;

    while parts.len() < max_splits {
        match find_name_separator(name, from) {
            Some((start, end)) => {
                parts.push(&name[from..start]);
                from = end;
            }
            None => break,
        }
    }

    parts.push(&name[from..]);
    parts
}

///
/// Reduce a patient name to last name plus first-name initials, with the
/// validation sample type (if any) split off.
///
fn short_patient_name(name: &str) -> (Option<&'static str>, String) {
    let mut names = split_name(name, 1);
    let mut last = names.remove(0);

    let mut sample_type = None;
    if let Some(st) = SAMPLETYPES.iter().find(|st| **st == last) {
        sample_type = Some(*st);
        names = split_name(name, 2).split_off(1);
        last = match names.is_empty() {
            true => "",
            false => names.remove(0),
        };
    }

    let first = names.pop().unwrap_or_default();
    let first = FIRST_NAME_RE.replace_all(first, "${1}");
    let short = SPACES_RE.replace_all(&format!("{}{}", last, first), "").into_owned();

    (sample_type, short)
}

/// Drop everything but ASCII letters, digits, `-` and `_`.
pub fn sanitize_sample_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

///
/// Turns coversheet entries into unique sample names for one run.
///
#[derive(Debug, Clone, Default)]
pub struct SampleNamer {
    run_number: Option<String>,
    seen: HashMap<String, usize>,
}

impl SampleNamer {
    pub fn new(run_number: Option<&str>) -> Self {
        SampleNamer {
            run_number: run_number.map(|r| r.to_string()),
            seen: HashMap::default(),
        }
    }

    fn is_control_with_run(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        match &self.run_number {
            Some(run) => {
                lower.starts_with(CONTROL_NAME)
                    && lower[CONTROL_NAME.len()..].contains(&run.to_ascii_lowercase())
            }
            None => false,
        }
    }

    ///
    /// Sample name for `entry`. Names handed out before are suffixed with
    /// `-2`, `-3`, ... so every call returns a name not returned yet.
    ///
    pub fn sample_name(&mut self, entry: &CoversheetEntry) -> String {
        let name = entry.name.replace([',', '('], "_").replace(')', "");
        let lab = entry.lab.trim();
        let mut mrn = entry.mrn.trim();

        if !mrn.is_empty() && !mrn.bytes().all(|b| b.is_ascii_digit()) {
            warn!("MRN not digit '{}'", mrn);
            mrn = "";
        }

        let sample = if self.is_control_with_run(&name) {
            name.clone()
        } else if name.to_ascii_lowercase().starts_with(CONTROL_NAME) {
            format!(
                "{}{}",
                CONTROL_PREFIX,
                self.run_number.as_deref().unwrap_or_default()
            )
        } else if !lab.is_empty() || !mrn.is_empty() {
            let (sample_type, short) = short_patient_name(&name);
            let lab = match short.contains(lab) {
                true => "",
                false => lab,
            };
            let sample = [short.as_str(), lab, mrn].join("_");
            match sample_type {
                Some(st) => format!("{}_{}", st, sample),
                None => sample,
            }
        } else {
            name.clone()
        };

        let mut sample = sanitize_sample_name(&sample);

        if let Some(count) = self.seen.get_mut(&sample) {
            *count += 1;
            sample = format!("{}-{}", sample, count);
        }
        self.seen.insert(sample.clone(), 1);

        sample
    }
}
