//! Command-line arguments

use crate::algorithms::Algorithm;
use crate::constants::{DEFAULT_ARRAY_SIZE, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::snapshot::Value;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sortty")]
#[command(version, about = "Step through sorting and searching algorithms in the terminal")]
#[command(after_help = "KEYS:
  Space        play / pause          ←/→      step back / forward
  1-9          step forward N        Enter    jump to end
  Backspace    jump to start         r / s    new array / shuffle
  a / A, Tab   next / prev algorithm m        toggle sort / search
  + / -        speed                 [ / ]    array size
  t            type a search target  q        quit

EXAMPLES:
  sortty --algorithm quick --size 40
  sortty --algorithm binary --values 9,3,7,1,5 --target 7 --print
  sortty --algorithm bitonic --seed 42")]
pub struct Cli {
    /// Algorithm id (see --list)
    #[arg(short, long, default_value = "bubble", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Number of random values
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Explicit input values instead of a random array
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Option<Vec<Value>>,

    /// Search target (picked from the array when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<Value>,

    /// Do not insert an absent target into the array
    #[arg(long)]
    pub keep_absent: bool,

    /// Seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Playback speed; steps are max(10, 200 - speed) ms apart
    #[arg(long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u16).range(i64::from(MIN_SPEED)..=i64::from(MAX_SPEED)))]
    pub speed: u16,

    /// Print the step sequence and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List the available algorithms and exit
    #[arg(long)]
    pub list: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
