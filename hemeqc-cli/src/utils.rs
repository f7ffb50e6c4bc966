use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

///
/// Get a buffered writer for `path`, or for stdout when there is no path.
///
pub fn get_dynamic_writer(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let inner: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Couldn't create file: {:?}", path))?,
        ),
        None => Box::new(io::stdout()),
    };

    Ok(BufWriter::new(inner))
}
