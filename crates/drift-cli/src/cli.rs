use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "drift",
    about = "Structural comparison of configuration snapshots",
    version,
)]
pub struct Cli {
    /// First snapshot.
    pub first: PathBuf,
    /// Second snapshot.
    pub second: PathBuf,
    /// Third snapshot.
    pub third: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
