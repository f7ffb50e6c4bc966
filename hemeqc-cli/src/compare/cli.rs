use clap::{Arg, Command, arg};

pub use hemeqc_report::consts::COMPARE_CMD;

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Compare an HD701 panel report to variants in exome data.")
        .arg_required_else_help(true)
        .arg(Arg::new("report").required(true).help("HD701 mutation report"))
        .arg(
            Arg::new("exomefiles")
                .required(true)
                .num_args(1..)
                .help("Exome data file(s)"),
        )
        .arg(arg!(-o --outfile <outfile> "Create annotated mutation report file"))
        .arg(arg!(-t --truthfile <truthfile> "Create truth file"))
}
