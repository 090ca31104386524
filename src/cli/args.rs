use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qclcd-loader")]
#[command(about = "Loader for NOAA QCLCD monthly weather extracts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one monthly extract and load it into the document sink
    Load {
        #[arg(
            help = "Extract directory; the trailing 6 characters encode the period (e.g. data/QCLCD201712)"
        )]
        input: PathBuf,

        #[arg(
            short,
            long,
            default_value = "output",
            help = "Directory for the JSON Lines document files"
        )]
        output_dir: PathBuf,

        #[arg(long, help = "Suppress progress output")]
        quiet: bool,
    },

    /// Parse one monthly extract without writing any output
    Validate {
        #[arg(help = "Extract directory (e.g. data/QCLCD201712)")]
        input: PathBuf,

        #[arg(long, help = "Suppress progress output")]
        quiet: bool,
    },
}
