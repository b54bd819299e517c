//! Command-line entry point printing a block of generated names.
//!
//! This binary delegates to `sheet_names::cli` for settings and generation,
//! keeping the behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use sheet_names::GoogleSheetsSource;
use sheet_names::cli::{CliError, NameSettings, run};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match generate() {
        Ok(block) => match write_block(&mut io::stdout().lock(), &block) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(error = %err, "writing names to stdout failed");
                report(&format!("failed to write names: {err}"));
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!(error = %err, "name generation failed");
            report(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
        drop(write_err);
    }
}

fn generate() -> Result<String, CliError> {
    let settings = NameSettings::load_from_iter(env::args_os()).map_err(|err| {
        CliError::Settings {
            message: err.to_string(),
        }
    })?;
    let source = GoogleSheetsSource::new(settings.timeout()).map_err(|err| CliError::Client {
        message: err.to_string(),
    })?;
    run(&settings, &source)
}

fn write_block(out: &mut impl Write, block: &str) -> io::Result<()> {
    out.write_all(block.as_bytes())?;
    out.flush()
}
