use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

use super::{build_args_end, build_args_start};

/// Baseline service settings: env file wiring, build context, restart and
/// terminal flags, resource limits, image and container names.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    doc.set_service(service, &["env_file"], opts.env_file.display().to_string());

    ensure_content(
        &opts.env_file,
        &ManagedContent::block([
            build_args_start(service),
            "DOCKER_BUILDKIT=1".to_string(),
            build_args_end(service),
        ]),
        true,
        diag,
    );

    doc.set_service(service, &["build", "context"], ".");
    doc.set_service(service, &["build", "dockerfile"], "Dockerfile");
    doc.set_service(service, &["restart"], "always");
    doc.set_service(service, &["stdin_open"], true);
    doc.set_service(service, &["tty"], true);

    if opts.privileged {
        doc.set_service(service, &["privileged"], true);
    }
    if opts.ipc_host {
        doc.set_service(service, &["ipc"], "host");
    }

    doc.set_service(service, &["deploy", "resources", "limits", "cpus"], opts.cpu_limit);
    diag.debug(&format!("Setting CPU limit to {} for service '{service}'", opts.cpu_limit));
    doc.set_service(
        service,
        &["deploy", "resources", "limits", "memory"],
        opts.memory_limit.as_str(),
    );
    diag.debug(&format!("Setting memory limit to {} for service '{service}'", opts.memory_limit));
    doc.set_service(
        service,
        &["deploy", "resources", "reservations", "cpus"],
        opts.cpu_reservation,
    );
    doc.set_service(
        service,
        &["deploy", "resources", "reservations", "memory"],
        opts.memory_reservation.as_str(),
    );

    doc.set_service(service, &["image"], opts.image_name());
    doc.set_service(service, &["container_name"], opts.container());

    Ok(())
}
