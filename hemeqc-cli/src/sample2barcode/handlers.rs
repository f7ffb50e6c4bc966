use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use hemeqc_sample2barcode::Coversheet;

pub fn run_sample2barcode(matches: &ArgMatches) -> Result<()> {
    let coversheets = matches
        .get_many::<String>("coversheets")
        .context("At least one coversheet is required.")?;

    let outdir = matches.get_one::<String>("outdir").map(Path::new);
    if let Some(outdir) = outdir {
        fs::create_dir_all(outdir).with_context(|| {
            format!(
                "There was an error creating the output directory: {:?}",
                outdir
            )
        })?;
    }

    for coversheet in coversheets {
        info!("Coversheet {}", coversheet);
        let sheet = Coversheet::read(Path::new(coversheet))
            .with_context(|| format!("Failed to read coversheet {}", coversheet))?;

        if !sheet.is_recognized() {
            warn!("  Unrecognized format {}", coversheet);
            continue;
        }
        if sheet.is_empty() {
            warn!("  No data {}", coversheet);
            continue;
        }

        let outfile = sheet.output_path(outdir);
        info!("  Writing {}", outfile.display());
        sheet.write_sample2barcode_file(&outfile)?;
    }

    Ok(())
}
