use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

/// Wayland display passthrough: display variable and socket mount.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    ensure_content(
        &opts.env_file,
        &ManagedContent::line(r#"WAYLAND_DISPLAY="${WAYLAND_DISPLAY}""#),
        opts.wayland,
        diag,
    );

    if doc.ensure_volume(service, &opts.wayland_volume, opts.wayland)? {
        if opts.wayland {
            diag.debug(&format!("Added Wayland socket mount for service '{service}'"));
        } else {
            diag.debug(&format!("Removed Wayland socket mount from service '{service}'"));
        }
    }
    Ok(())
}
