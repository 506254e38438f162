//! Command-line arguments and the run loop

mod run;

pub use run::run;

use crate::constants::{DEFAULT_A, DEFAULT_B, DEFAULT_NAME};
use crate::output::OutputFormat;
use clap::Parser;

/// Print the sum of two integers and a greeting
#[derive(Debug, Parser)]
#[command(name = "hello-sum", version, about)]
pub struct Cli {
    /// First operand
    #[arg(short = 'a', long, default_value_t = DEFAULT_A, allow_negative_numbers = true)]
    pub first: i32,

    /// Second operand
    #[arg(short = 'b', long, default_value_t = DEFAULT_B, allow_negative_numbers = true)]
    pub second: i32,

    /// Name to greet
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Print the report as a single JSON object
    #[arg(long)]
    pub json: bool,

    /// Suppress informational output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Reject overflowing sums and names with control characters
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parameters of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub a: i32,
    pub b: i32,
    pub name: String,
    pub format: OutputFormat,
    pub quiet: bool,
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            name: DEFAULT_NAME.to_string(),
            format: OutputFormat::Text,
            quiet: false,
            strict: false,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            a: cli.first,
            b: cli.second,
            name: cli.name.clone(),
            format: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            quiet: cli.quiet,
            strict: cli.strict,
        }
    }
}
