//! composegen: Generate and incrementally update Docker Compose service
//! definitions with a companion env file.

pub mod app;
pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use domain::StderrDiagnostics;

pub use domain::{AppError, BuildArgsOutcome, Diagnostics, GenerateOptions};

/// Run the full generation pipeline for one service.
///
/// Rebuilds the env file's managed region and merges the service definition
/// into the compose document; re-running with the same options is a no-op.
pub fn generate(options: &GenerateOptions) -> Result<(), AppError> {
    app::commands::generate::execute(options, &StderrDiagnostics::new(false))
}

/// Rewrite `services.<service>.build.args` from the env file's marked
/// regions.
///
/// Returns `BuildArgsOutcome::NoArgsFound` (a deliberate early success)
/// when no declarations exist; the compose file is then left untouched.
pub fn generate_build_args(
    compose_file: &Path,
    env_file: &Path,
    service: &str,
) -> Result<BuildArgsOutcome, AppError> {
    app::commands::build_args::execute(
        compose_file,
        env_file,
        service,
        &StderrDiagnostics::new(false),
    )
}
