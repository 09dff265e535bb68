//! `nginx-entrypoint` — container entry point for the static frontend image.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `ENTRYPOINT_*` environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Render `config.json` and the nginx config, then `exec` nginx.

mod bootstrap;
mod config;
mod files;
mod launch;
mod telemetry;

use std::process::ExitCode;

use tracing::error;

use crate::config::Config;
use crate::launch::Exec;

/// `EX_CONFIG` from `sysexits.h`.
const EXIT_CONFIG: u8 = 78;
/// `EX_SOFTWARE` from `sysexits.h`.
const EXIT_SOFTWARE: u8 = 70;

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Telemetry is not yet up; write to stderr directly.
            eprintln!("ERROR: entrypoint configuration invalid: {e:#}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    if let Err(e) = telemetry::init(&cfg.log_level) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::from(EXIT_SOFTWARE);
    }

    // -----------------------------------------------------------------------
    // 3. Render + launch
    // -----------------------------------------------------------------------
    match bootstrap::run(&cfg, common::load_environment, &Exec) {
        Ok(never) => match never {},
        Err(e) => {
            error!(error = %e, exit_code = e.exit_code(), "entrypoint failed");
            ExitCode::from(e.exit_code())
        }
    }
}
