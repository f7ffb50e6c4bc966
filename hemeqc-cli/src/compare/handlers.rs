use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use hemeqc_exome::{ExomeData, LoadOptions};
use hemeqc_report::VariantReport;

use crate::utils::get_dynamic_writer;

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let report = matches
        .get_one::<String>("report")
        .context("A path to a mutation report is required.")?;

    let exomefiles: Vec<PathBuf> = matches
        .get_many::<String>("exomefiles")
        .context("At least one exome data file is required.")?
        .map(PathBuf::from)
        .collect();

    let outfile = matches.get_one::<String>("outfile").map(Path::new);
    let truthfile = matches.get_one::<String>("truthfile").map(Path::new);

    let report = VariantReport::try_from(Path::new(report))
        .with_context(|| format!("Failed to load mutation report {}", report))?;
    let exome = ExomeData::from_files(&exomefiles, LoadOptions::default())?;

    // with no output requested at all, the annotated report goes to stdout
    if outfile.is_some() || truthfile.is_none() {
        if let Some(outfile) = outfile {
            info!("  Writing {}", outfile.display());
        }
        let mut writer = get_dynamic_writer(outfile)?;
        report.write_annotated_report(&mut writer, &exome)?;
        writer.flush()?;
    }

    if let Some(truthfile) = truthfile {
        info!("  Writing {}", truthfile.display());
        let mut writer = get_dynamic_writer(Some(truthfile))?;
        report.write_truth_file(&mut writer, &exome)?;
        writer.flush()?;
    }

    Ok(())
}
