use clap::{Arg, Command, arg};

pub use hemeqc_sample2barcode::consts::SAMPLE2BARCODE_CMD;

pub fn create_sample2barcode_cli() -> Command {
    Command::new(SAMPLE2BARCODE_CMD)
        .about("Create sample2barcode.txt files from Heme-STAMP coversheets.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("coversheets")
                .required(true)
                .num_args(1..)
                .help("Heme-STAMP coversheets (tab separated export)"),
        )
        .arg(arg!(-o --outdir <outdir> "Directory to save output file(s)"))
}
