use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use forma_domain::DEFAULT_TOP_N;
use log::LevelFilter;

use crate::output::Format;

#[derive(Parser, Debug)]
#[command(name = "forma", version, about = "Running splits and lift rankings")]
pub struct Cli {
    /// Increase logging verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, env = "FORMA_FORMAT", default_value_t = Format::Json, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Divide a run into kilometer splits
    Splits {
        /// Total distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance_km: f64,
        /// Total duration in seconds, distributed over the splits
        #[arg(short, long, allow_negative_numbers = true)]
        duration: Option<f64>,
    },
    /// Rank lift attempts read as a JSON array
    Score {
        /// JSON file with lift attempts (stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Number of best sets per muscle category
        #[arg(short = 'n', long, env = "FORMA_TOP_N", default_value_t = DEFAULT_TOP_N)]
        top: usize,
        /// Report personal records instead of best sets
        #[arg(long)]
        pr: bool,
    },
    /// Rank the sets of a workout read as JSON
    Workout {
        /// JSON file with the workout (stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Number of best sets per muscle category
        #[arg(short = 'n', long, env = "FORMA_TOP_N", default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },
    /// Check manually edited splits read as a JSON array
    CheckSplits {
        /// JSON file with splits (stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
