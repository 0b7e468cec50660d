use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::host;
use crate::services::line_editor::ensure_content;

use super::{build_args_end, build_args_start};

/// User mapping: uid/gid block in the env file, `user` field in the document.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();
    let (uid, gid) = host::user_ids();

    ensure_content(
        &opts.env_file,
        &ManagedContent::block([
            "# User".to_string(),
            build_args_start(service),
            format!("DOCKER_USER={service}"),
            format!("DOCKER_HOME=/home/{service}"),
            format!("DOCKER_UID={uid}"),
            format!("DOCKER_GID={gid}"),
            build_args_end(service),
        ]),
        true,
        diag,
    );

    doc.set_service(service, &["user"], "${DOCKER_UID}:${DOCKER_GID}");
    Ok(())
}
