use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use hemeqc_core::models::Columns;
use hemeqc_core::utils::{get_dynamic_reader, read_lines_lossy, split_row};
use hemeqc_core::{HemeQcError, Result};

use crate::consts::*;
use crate::naming::{CoversheetEntry, SampleNamer, parse_run_number};

///
/// A Heme-STAMP run coversheet, exported as tab separated text.
///
/// Lines before the column-name row are searched for the run number; rows
/// after it with both a `Name` and a `barcode` are samples.
///
#[derive(Debug, Clone, Default)]
pub struct Coversheet {
    pub path: Option<PathBuf>,
    run_number: Option<String>,
    columns: Option<Columns>,
    entries: Vec<CoversheetEntry>,
}

impl Coversheet {
    pub fn read(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        let mut coversheet = Coversheet::from_reader(reader)?;
        coversheet.path = Some(path.to_owned());
        Ok(coversheet)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut coversheet = Coversheet::default();

        for line in read_lines_lossy(reader) {
            let line = line?;
            let mut cells = split_row(&line);
            while cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }

            match &coversheet.columns {
                Some(columns) if !cells.is_empty() => {
                    let name = columns.get(&cells, NAME_FIELD).unwrap_or_default();
                    let barcode = columns.get(&cells, BARCODE_FIELD).unwrap_or_default();
                    if name.is_empty() || barcode.is_empty() {
                        continue;
                    }

                    let entry = CoversheetEntry {
                        name: name.to_string(),
                        lab: columns.get(&cells, LAB_FIELD).unwrap_or_default().to_string(),
                        mrn: columns.get(&cells, MRN_FIELD).unwrap_or_default().to_string(),
                        barcode: barcode.trim().to_string(),
                    };
                    coversheet.entries.push(entry);
                }
                _ if HEADER_FIELDS.iter().all(|f| cells.iter().any(|c| c.as_str() == *f)) => {
                    coversheet.columns = Some(Columns::new(cells));
                }
                _ => {
                    if let Some(run) = parse_run_number(&cells.join("\t")) {
                        coversheet.run_number = Some(run);
                    }
                }
            }
        }

        Ok(coversheet)
    }

    /// Whether a column-name row was found.
    pub fn is_recognized(&self) -> bool {
        self.columns.is_some()
    }

    pub fn run_number(&self) -> Option<&str> {
        self.run_number.as_deref()
    }

    pub fn entries(&self) -> &[CoversheetEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// `(sample, barcode)` pairs, one per entry, in coversheet order.
    ///
    pub fn sample2barcode(&self) -> Vec<(String, String)> {
        let mut namer = SampleNamer::new(self.run_number());

        self.entries
            .iter()
            .map(|entry| {
                let sample = namer.sample_name(entry);
                debug!("{:50}\t{}", sample, entry.name);
                (sample, entry.barcode.clone())
            })
            .collect()
    }

    ///
    /// Where the sample2barcode file goes: `outdir` if given, else next to
    /// the coversheet.
    ///
    pub fn output_path(&self, outdir: Option<&Path>) -> PathBuf {
        let dir = match outdir {
            Some(dir) => dir.to_path_buf(),
            None => self
                .path
                .as_deref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
        };

        let file_name = match &self.run_number {
            Some(run) => format!("{}{}{}", RUN_OUT_PREFIX, run, RUN_OUT_EXT),
            None => DEFAULT_OUT.to_string(),
        };

        dir.join(file_name)
    }

    ///
    /// Write `sample<TAB>barcode` lines. Returns the number of lines written.
    ///
    pub fn write_sample2barcode<W: Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        let pairs = self.sample2barcode();
        for (sample, barcode) in &pairs {
            writeln!(writer, "{}\t{}", sample, barcode)?;
        }
        Ok(pairs.len())
    }

    pub fn write_sample2barcode_file(&self, path: &Path) -> Result<usize> {
        let write_err = |source| HemeQcError::FileWriteError {
            path: path.to_owned(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        let n = self.write_sample2barcode(&mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        Ok(n)
    }
}

impl TryFrom<&Path> for Coversheet {
    type Error = HemeQcError;

    fn try_from(value: &Path) -> Result<Self> {
        Coversheet::read(value)
    }
}
