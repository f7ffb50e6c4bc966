use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{HemeQcError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| HemeQcError::FileReadError {
        path: path.to_owned(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Lines of a reader with the line terminator removed, like
/// [`BufRead::lines`]. Bytes that are not valid UTF-8 (spreadsheet exports in
/// Latin-1 or cp1252) become `U+FFFD` instead of failing the read.
///
pub fn read_lines_lossy<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

/// Iterator returned by [`read_lines_lossy`].
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

///
/// Split a data line into its tab separated cells. Only the line terminator
/// is removed, so trailing empty cells survive.
///
pub fn split_row(line: &str) -> Vec<String> {
    line.trim_end_matches(['\n', '\r'])
        .split('\t')
        .map(|s| s.to_string())
        .collect()
}

///
/// Split a column-name line. Unlike data lines, all trailing whitespace
/// (including stray tabs) is dropped first.
///
pub fn split_header(line: &str) -> Vec<String> {
    line.trim_end().split('\t').map(|s| s.to_string()).collect()
}

/// True when every cell of the row is empty.
pub fn is_blank_row<S: AsRef<str>>(cells: &[S]) -> bool {
    cells.iter().all(|c| c.as_ref().is_empty())
}

///
/// Parse a position that must be a non-empty run of ASCII digits.
///
/// `str::parse` alone would also accept a leading `+`, which the tables we
/// read never use for positions.
///
pub fn parse_position(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u32>().ok()
}
