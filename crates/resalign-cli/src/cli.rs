use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "resalign - convert DDG and H++ reports to CSV, align them by residue number and compute per-residue statistics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Analysis configuration file in TOML format.
    /// Values given on the command line take precedence over it.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a DDG or H++ text report to CSV.
    Convert(ConvertArgs),
    /// Align several H++ reports by residue number into one CSV table.
    Align(AlignArgs),
    /// Write the mean DDG of every residue in a DDG report.
    Average(AverageArgs),
    /// Count significantly positive and negative DDG values per residue.
    Significance(SignificanceArgs),
    /// Write the per-residue difference of mean DDG between two DDG reports.
    Compare(CompareArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Mutation-scan report: chain, wild-type, residue number, mutant, ddG
    Ddg,
    /// H++ pKa report: residue label, pK intrinsic, pK half
    Hpp,
}

/// H++ parsing overrides shared by `convert` and `align`.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct HppArgs {
    /// Number of title and header lines before the first H++ data row.
    #[arg(long, value_name = "INT")]
    pub preamble_lines: Option<usize>,

    /// Read H++ rows to the end of the file instead of stopping when the
    /// first residue label appears again.
    #[arg(long)]
    pub read_to_end: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Format of the input report.
    #[arg(value_enum)]
    pub kind: ReportKind,

    /// Path to the input text report.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the output CSV file. For H++ reports the table is named
    /// after this file.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    #[command(flatten)]
    pub hpp: HppArgs,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Comma-separated H++ reports (text or CSV), in output column order.
    /// Example: --inputs "wt.txt,mut1.txt,mut2.csv"
    #[arg(short, long, required = true, value_name = "LIST")]
    pub inputs: String,

    /// Comma-separated paths for per-input CSV copies, one per input.
    #[arg(long, value_name = "LIST")]
    pub csv_outputs: Option<String>,

    /// Path for the aligned CSV table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub hpp: HppArgs,
}

#[derive(Args, Debug)]
pub struct AverageArgs {
    /// Path to the DDG text report.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the per-residue mean CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Leave residues without observations out instead of failing.
    #[arg(long)]
    pub omit_empty: bool,
}

#[derive(Args, Debug)]
pub struct SignificanceArgs {
    /// Path to the DDG text report.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the significance count CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the significance cutoff from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First DDG text report; the difference is first minus second.
    #[arg(value_name = "FIRST")]
    pub first: PathBuf,

    /// Second DDG text report.
    #[arg(value_name = "SECOND")]
    pub second: PathBuf,

    /// Path for the comparison CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Leave residues without observations out instead of failing.
    #[arg(long)]
    pub omit_empty: bool,
}
