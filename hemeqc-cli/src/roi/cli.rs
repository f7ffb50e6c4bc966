use clap::{Arg, Command, arg};

pub use hemeqc_exome::consts::ROI_CMD;

pub fn create_roi_cli() -> Command {
    Command::new(ROI_CMD)
        .about("Keep only the exome variants that fall inside regions of interest.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("bedfile")
                .required(true)
                .help("Regions of interest: chromosome, start, end, comment (tab separated)"),
        )
        .arg(
            Arg::new("exomefiles")
                .required(true)
                .num_args(1..)
                .help("Exome data file(s)"),
        )
        .arg(arg!(-o --output <output> "Write the table here instead of stdout"))
        .arg(arg!(--"raw-positions" "Key insertions and deletions at their declared position"))
}
