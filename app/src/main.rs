use std::process::ExitCode;

use bisect_app::cli::{execute, Cli};
use bisect_app::config::AppConfig;
use bisect_app::logging;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_filter);

    match execute(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
