use serde_yaml::Value;

use crate::domain::{AppError, Diagnostics, GenerateOptions};
use crate::services::generators::PIPELINE;
use crate::services::{entrypoint, ComposeDocument, EnvSession};

/// Execute a full generation run.
///
/// Loads (or starts) the compose document, resets the env file's managed
/// region, runs every generator in the fixed pipeline order, appends extra
/// volumes and the optional entrypoint wrapper, then finalizes the env file
/// and serializes the document — each file written once at the top level.
pub fn execute(opts: &GenerateOptions, diag: &dyn Diagnostics) -> Result<(), AppError> {
    let compose_from_scratch = opts.from_scratch || !opts.compose_file.exists();
    let mut doc = ComposeDocument::load(&opts.compose_file, compose_from_scratch)?;
    let session = EnvSession::open(&opts.env_file, opts.from_scratch)?;

    for stage in PIPELINE {
        stage.apply(opts, &mut doc, diag)?;
    }

    for volume in &opts.volumes_append {
        doc.push_volume(&opts.service_name, volume)?;
        diag.debug(&format!("Added a new volume '{volume}'"));
    }

    if opts.entrypoint {
        apply_entrypoint(opts, &mut doc, diag)?;
    }

    session.finalize()?;
    doc.save(&opts.compose_file)?;
    Ok(())
}

/// Wrap the container command in the generated entrypoint script.
fn apply_entrypoint(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();
    let script_path = opts.entrypoint_path.display().to_string();

    doc.push_volume(service, &format!("{script_path}:/entrypoint.sh:ro"))?;
    diag.debug(&format!("Added a new volume '{script_path}:/entrypoint.sh:ro'"));
    diag.debug("Added entrypoint with 'zsh -i'");
    doc.set_service(
        service,
        &["entrypoint"],
        Value::Sequence(vec![Value::from("zsh"), Value::from("-i"), Value::from("/entrypoint.sh")]),
    );

    entrypoint::write_template(&opts.entrypoint_path, diag)?;

    doc.set_service(
        service,
        &["command"],
        Value::Sequence(vec![Value::from("zsh"), Value::from("-i")]),
    );
    Ok(())
}
