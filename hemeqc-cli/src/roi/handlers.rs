use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hemeqc_exome::{ExomeData, LoadOptions};
use hemeqc_regions::RegionIndex;

use crate::utils::get_dynamic_writer;

pub fn run_roi(matches: &ArgMatches) -> Result<()> {
    let bedfile = matches
        .get_one::<String>("bedfile")
        .context("A path to a region file is required.")?;

    let exomefiles: Vec<PathBuf> = matches
        .get_many::<String>("exomefiles")
        .context("At least one exome data file is required.")?
        .map(PathBuf::from)
        .collect();

    let output = matches.get_one::<String>("output").map(Path::new);

    let options = LoadOptions {
        normalize_indels: !matches.get_flag("raw-positions"),
    };

    let regions = RegionIndex::try_from(Path::new(bedfile))
        .with_context(|| format!("Failed to load regions from {}", bedfile))?;
    let exome = ExomeData::from_files(&exomefiles, options)?;

    let mut writer = get_dynamic_writer(output)?;
    exome.write_roi_table(&mut writer, &regions)?;
    writer.flush()?;

    if let Some(output) = output {
        info!("  Writing {}", output.display());
    }

    Ok(())
}
