use std::path::Path;

use crate::domain::{AppError, BuildArgsOutcome, Diagnostics};
use crate::services::build_args;

/// Execute the build-args mode: rewrite `build.args` from the env file.
pub fn execute(
    compose_file: &Path,
    env_file: &Path,
    service: &str,
    diag: &dyn Diagnostics,
) -> Result<BuildArgsOutcome, AppError> {
    build_args::generate(compose_file, env_file, service, diag)
}
