mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tablehawk_core::Clock;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    init_tracing();

    // The local UTC offset must be read while the process is still
    // single-threaded; drop times are local wall-clock times.
    let clock = Clock::system();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::from(10);
        }
    };

    match runtime.block_on(run(clock)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(clock: Clock) -> Result<(), CliError> {
    let cli = Cli::parse();
    commands::run(&cli, clock).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tablehawk=info,tablehawk_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
