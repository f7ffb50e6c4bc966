use std::fmt::{self, Display};

use crate::errors::{HemeQcError, Result};
use crate::utils::{is_blank_row, split_row};

///
/// Region struct, one line of a region-of-interest file.
///
/// Both `start` and `end` are inclusive.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub comment: Option<String>,
}

impl Region {
    ///
    /// Parse one line of a four column (chrom, start, end, comment) region
    /// file. Blank lines give `Ok(None)`.
    ///
    /// # Arguments:
    /// - line: the raw line
    /// - line_number: 1-based line number, used in error messages
    pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Region>> {
        let parts = split_row(line);
        if is_blank_row(&parts) {
            return Ok(None);
        }

        let start = parse_coordinate(&parts, 1, "start", line_number)?;
        let end = parse_coordinate(&parts, 2, "end", line_number)?;

        if start > end {
            return Err(HemeQcError::InvertedRegion {
                line: line_number,
                start,
                end,
            });
        }

        Ok(Some(Region {
            chr: parts[0].to_owned(),
            start,
            end,
            comment: parts.get(3).filter(|s| !s.is_empty()).cloned(),
        }))
    }

    ///
    /// Check whether a position falls inside the region, both ends included
    ///
    pub fn contains(&self, position: u32) -> bool {
        position >= self.start && position <= self.end
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.comment
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

fn parse_coordinate(parts: &[String], index: usize, name: &str, line_number: usize) -> Result<u32> {
    let value = parts
        .get(index)
        .map(|s| s.trim())
        .ok_or_else(|| HemeQcError::RegionParseError {
            line: line_number,
            reason: format!("missing {} field", name),
        })?;

    value.parse::<u32>().map_err(|_| HemeQcError::RegionParseError {
        line: line_number,
        reason: format!("{} is not an integer: {:?}", name, value),
    })
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
