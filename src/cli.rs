use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diamond")]
#[command(about = "Disease module detection via greedy hypergeometric expansion", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a seed set into a disease module
    Expand {
        /// Network file (edge list or STRING-like scored TSV)
        network: PathBuf,

        /// Seeds file (one identifier per line, commas accepted)
        #[arg(short, long)]
        seeds: PathBuf,

        /// Number of nodes to add (X)
        #[arg(short = 'n', long = "num", default_value = "200")]
        num: usize,

        /// Seed weight alpha; values below 1 are clamped to 1
        #[arg(short, long, default_value = "1")]
        alpha: u64,

        /// Minimum confidence score for scored networks
        #[arg(long = "score-threshold", default_value = "400.0")]
        score_threshold: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity (-v: per-candidate scoring detail)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Show network statistics and seed coverage without expanding
    Inspect {
        /// Network file (edge list or STRING-like scored TSV)
        network: PathBuf,

        /// Seeds file to check coverage for
        #[arg(short, long)]
        seeds: Option<PathBuf>,

        /// Minimum confidence score for scored networks
        #[arg(long = "score-threshold", default_value = "400.0")]
        score_threshold: f64,

        /// Increase verbosity
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => crate::io::output::OutputFormat::Text,
            OutputFormat::Tsv => crate::io::output::OutputFormat::Tsv,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
