use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_SAMPLE_SIZE, MAX_HOUR, MIN_HOUR};

#[derive(Parser)]
#[command(name = "bikeshare-analytics")]
#[command(about = "Bike-sharing demand analytics over the Washington DC rental dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the demand dashboard for a filtered slice of the dataset
    Report {
        #[arg(short, long, help = "Input rental CSV file")]
        input: PathBuf,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Years to include, comma separated [default: every year in the dataset]"
        )]
        years: Option<Vec<i32>>,

        #[arg(
            long,
            default_value = "all",
            help = "Season filter: all, spring, summer, fall, winter"
        )]
        season: String,

        #[arg(long, default_value_t = MIN_HOUR, help = "First hour of day to include (inclusive)")]
        hour_start: u32,

        #[arg(long, default_value_t = MAX_HOUR, help = "Last hour of day to include (inclusive)")]
        hour_end: u32,

        #[arg(long, default_value = "text", help = "Output format: text or json")]
        format: String,

        #[arg(long, help = "Read the CSV through a memory map")]
        mmap: bool,
    },

    /// Display an overview of the dataset
    Info {
        #[arg(short, long, help = "Input rental CSV file")]
        input: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample: usize,
    },

    /// Parse and derive the full dataset without reporting
    Validate {
        #[arg(short, long, help = "Input rental CSV file")]
        input: PathBuf,
    },
}
