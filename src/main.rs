use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use hello_sum::cli::{self, Cli, Config};
use hello_sum::{info_print, logging, output};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    // Quiet must be set first so logging setup warnings honour it
    output::set_quiet(config.quiet);
    logging::init(cli.verbose);
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> Result<()> {
    if config.strict {
        info_print!("{}", "strict mode: validating input".dimmed());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(config, &mut out).context("hello-sum run failed")?;

    Ok(())
}
