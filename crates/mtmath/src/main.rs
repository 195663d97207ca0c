//! mtmath: arbitrary-precision integer and rational calculator.

use std::process::ExitCode;

use mtmath_cli::ui::print_error;
use mtmath_core::exit_codes;
use mtmath_lib::{app, config, errors};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const GENERIC: u8 = exit_codes::ERROR_GENERIC as u8;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            let code = errors::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(GENERIC))
        }
    }
}
