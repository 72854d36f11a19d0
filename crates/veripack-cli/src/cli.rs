//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "veripack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Archive files to verify (default: every *.zip in the archive
    /// directory)
    #[arg(value_name = "ARCHIVE")]
    pub archives: Vec<PathBuf>,

    /// Repository root the default directories are derived from
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Directory containing checksum manifests (default: <ROOT>/reports)
    #[arg(long, value_name = "DIR")]
    pub manifest_dir: Option<PathBuf>,

    /// Directory scanned for archives when none are given (default:
    /// <ROOT>/dist)
    #[arg(long, value_name = "DIR")]
    pub archive_dir: Option<PathBuf>,

    /// Print an [ok] line for every matched entry
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress everything except mismatches and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
