//! Report rendering and quiet mode
//!
//! The report (sum and greeting) is the only thing written to stdout.
//! Everything else goes through `info_print!` / `warn_print!` on stderr and
//! is suppressed in quiet mode.

use crate::constants::SUM_PREFIX;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppresses informational output)
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if not in quiet mode
pub fn print_info(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a warning to stderr only if not in quiet mode
pub fn print_warn(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a message only if not in quiet mode
#[macro_export]
macro_rules! info_print {
    ($($arg:tt)*) => {
        $crate::output::print_info(format_args!($($arg)*));
    };
}

/// Print to stderr only if not in quiet mode (for warnings)
#[macro_export]
macro_rules! warn_print {
    ($($arg:tt)*) => {
        $crate::output::print_warn(format_args!($($arg)*));
    };
}

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Sum: <n>` and the greeting on two lines
    #[default]
    Text,
    /// One JSON object on a single line
    Json,
}

/// Values computed by one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sum: i32,
    pub greeting: String,
}

impl Report {
    /// Write the report in `format`. Each line is newline-terminated.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                writeln!(out, "{}{}", SUM_PREFIX, self.sum)?;
                writeln!(out, "{}", self.greeting)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self).map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
