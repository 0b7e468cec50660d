use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, BuildArgsOutcome, Diagnostics};
use crate::services::compose_document::ComposeDocument;
use crate::services::generators::{build_args_end as region_end, build_args_start as region_start};

/// Collect `KEY=value` declarations from every marked region for `service`.
///
/// Blank and comment lines inside a region are skipped; a non-comment line
/// without `=` is fatal, since it breaks the env-file/document contract.
pub fn extract_declarations(
    env_file: &Path,
    service: &str,
    text: &str,
) -> Result<Vec<String>, AppError> {
    let start = region_start(service);
    let end = region_end(service);

    let mut keys: Vec<String> = Vec::new();
    let mut in_region = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed == start {
            in_region = true;
            continue;
        }
        if trimmed == end {
            in_region = false;
            continue;
        }
        if !in_region || trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, _value)) = trimmed.split_once('=') else {
            return Err(AppError::MalformedBuildArg {
                file: env_file.display().to_string(),
                line: trimmed.to_string(),
            });
        };
        let key = key.to_string();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    Ok(keys)
}

/// Rewrite `services.<service>.build.args` from the env file's marked regions.
///
/// An empty result is a deliberate early success: a warning is emitted, the
/// document is left untouched, and the caller exits 0.
pub fn generate(
    compose_file: &Path,
    env_file: &Path,
    service: &str,
    diag: &dyn Diagnostics,
) -> Result<BuildArgsOutcome, AppError> {
    let mut doc = ComposeDocument::load_required(compose_file)?;
    let text = fs::read_to_string(env_file)?;

    let keys = extract_declarations(env_file, service, &text)?;
    if keys.is_empty() {
        diag.warn(&format!(
            "No build arguments found in '{env}' for service '{service}'.\n\
             Please make sure the file contains the following lines:\n\
             {start}\n\
             # ENV_VAR_1=value1\n\
             # ENV_VAR_2=value2\n\
             # ...\n\
             {end}\n\
             Skipping the update of '{compose}'.",
            env = env_file.display(),
            start = region_start(service),
            end = region_end(service),
            compose = compose_file.display(),
        ));
        return Ok(BuildArgsOutcome::NoArgsFound);
    }

    let mut args = Mapping::new();
    for key in &keys {
        args.insert(Value::String(key.clone()), Value::String(format!("${{{key}}}")));
    }
    doc.set_service(service, &["build", "args"], Value::Mapping(args));
    doc.save(compose_file)?;

    diag.debug(&format!(
        "Wrote {count} build argument(s) for service '{service}' to '{compose}'.",
        count = keys.len(),
        compose = compose_file.display(),
    ));
    Ok(BuildArgsOutcome::Updated { keys })
}
