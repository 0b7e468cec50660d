use std::env;

use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

/// X11 display passthrough: display variables, socket and authority mounts.
///
/// The authority volume comes from the explicit flag, else from `$XAUTHORITY`
/// as `<path>:<path>:rw`; when neither resolves the generator reports the
/// condition and proceeds without an authority mount. Disabling removes both
/// mounts if present (a run that never enabled X11 is left untouched).
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    ensure_content(&opts.env_file, &ManagedContent::line(r#"DISPLAY="${DISPLAY}""#), opts.x11, diag);
    ensure_content(
        &opts.env_file,
        &ManagedContent::line(r#"XAUTHORITY="${XAUTHORITY}""#),
        opts.x11,
        diag,
    );

    let authority_volume = opts.x11_authority_volume.clone().or_else(|| match env::var("XAUTHORITY") {
        Ok(path) => Some(format!("{path}:{path}:rw")),
        Err(_) => {
            diag.error("X11 authority file is not given.");
            None
        }
    });

    if opts.x11 {
        if doc.ensure_volume(service, &opts.x11_socket_volume, true)? {
            diag.debug(&format!("Added X11 socket mount for service '{service}'"));
        }
        if let Some(authority) = &authority_volume {
            if doc.ensure_volume(service, authority, true)? {
                diag.debug(&format!("Added X11 authority file mount for service '{service}'"));
            }
        }
        // Reference: https://github.com/mviereck/x11docker/wiki/Short-setups-to-provide-X-display-to-container
        diag.debug("Using host IPC");
        doc.set_service(service, &["ipc"], "host");
    } else {
        if doc.ensure_volume(service, &opts.x11_socket_volume, false)? {
            diag.debug(&format!("Removed X11 socket mount from service '{service}'"));
        }
        if let Some(authority) = &authority_volume {
            if doc.ensure_volume(service, authority, false)? {
                diag.debug(&format!("Removed X11 authority file mount from service '{service}'"));
            }
        }
    }
    Ok(())
}
