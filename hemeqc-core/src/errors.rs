use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HemeQcError {
    #[error("Can't read file {path:?}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't write file {path:?}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing region on line {line}: {reason}")]
    RegionParseError { line: usize, reason: String },

    #[error("Region start is greater than end on line {line}: {start} > {end}")]
    InvertedRegion { line: usize, start: u32, end: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HemeQcError>;
