//! podpublish - print-on-demand design uploader
//!
//! Command-line entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use podpublish_lib::utils::{logging, report};
use podpublish_lib::Cli;

fn main() -> ExitCode {
    // Load .env before clap reads env-backed flags
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(&cli.log_level, cli.log_format) {
        let _ = report::write_error(&mut io::stderr(), &err);
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Could not load .env file"),
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = report::write_error(&mut io::stderr(), &anyhow::Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(podpublish_lib::run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report::write_error(&mut io::stderr(), &err);
            ExitCode::FAILURE
        }
    }
}
