use serde_yaml::Value;

use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

use super::{build_args_end, build_args_start};

/// Host networking for both build time and runtime.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    ensure_content(
        &opts.env_file,
        &ManagedContent::block([
            "# Networking".to_string(),
            build_args_start(service),
            "BUILDTIME_NETWORK_MODE=host".to_string(),
            build_args_end(service),
            "RUNTIME_NETWORK_MODE=host".to_string(),
        ]),
        true,
        diag,
    );

    doc.set_service(service, &["build", "network"], "${BUILDTIME_NETWORK_MODE}");
    doc.set_service(service, &["network_mode"], "${RUNTIME_NETWORK_MODE}");
    doc.set_service(
        service,
        &["extra_hosts"],
        Value::Sequence(vec![Value::from("host.docker.internal:host-gateway")]),
    );
    Ok(())
}
