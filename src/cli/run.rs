use super::Config;
use crate::arith::{add, checked_add};
use crate::error::Result;
use crate::greet::{greet, validate_name};
use crate::output::Report;
use std::io::Write;

/// Compute the sum, then the greeting, and write both to `out`.
///
/// Nothing is written unless both values were produced, so a strict-mode
/// failure leaves `out` untouched.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Report> {
    tracing::info!(a = config.a, b = config.b, name = %config.name, "starting run");

    let sum = if config.strict {
        checked_add(config.a, config.b)?
    } else {
        add(config.a, config.b)
    };
    tracing::debug!(sum, "computed sum");

    if config.strict {
        validate_name(&config.name)?;
    }
    let greeting = greet(&config.name);
    tracing::debug!(%greeting, "built greeting");

    let report = Report { sum, greeting };
    report.write_to(out, config.format)?;

    tracing::info!("run finished");
    Ok(report)
}
