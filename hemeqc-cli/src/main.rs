mod compare;
mod roi;
mod sample2barcode;
mod utils;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "hemeqc";

    pub const DEBUG_FLAG: &str = "debug";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Quality control tools for Heme-STAMP runs: exome truth data, HD701 report comparison and sample sheets.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(consts::DEBUG_FLAG)
                .long("debug")
                .help("Write debugging messages")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(roi::cli::create_roi_cli())
        .subcommand(compare::cli::create_compare_cli())
        .subcommand(sample2barcode::cli::create_sample2barcode_cli())
}

fn init_logging(debug: bool) {
    let level = match debug {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();

    // too few arguments: show usage and leave without an error status
    let matches = match app.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand => {
                e.print()?;
                return Ok(());
            }
            _ => e.exit(),
        },
    };

    init_logging(matches.get_flag(consts::DEBUG_FLAG));

    match matches.subcommand() {
        //
        // REGIONS OF INTEREST
        //
        Some((roi::cli::ROI_CMD, matches)) => {
            roi::handlers::run_roi(matches)?;
        }

        //
        // HD701 REPORT COMPARISON
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches)?;
        }

        //
        // SAMPLE SHEETS
        //
        Some((sample2barcode::cli::SAMPLE2BARCODE_CMD, matches)) => {
            sample2barcode::handlers::run_sample2barcode(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
