use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

/// DBus passthrough: session bus address variable and socket mount.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    ensure_content(
        &opts.env_file,
        &ManagedContent::line(r#"DBUS_SESSION_BUS_ADDRESS="$DBUS_SESSION_BUS_ADDRESS""#),
        opts.dbus,
        diag,
    );

    if opts.dbus {
        doc.set_service(service, &["privileged"], true);
        if doc.ensure_volume(service, &opts.dbus_volume, true)? {
            diag.debug(&format!("Added DBus socket mount for service '{service}'"));
        }
    } else if doc.ensure_volume(service, &opts.dbus_volume, false)? {
        diag.debug(&format!("Removed DBus socket mount from service '{service}'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_options, CollectingDiagnostics};
    use serde_yaml::Value;
    use tempfile::tempdir;

    #[test]
    fn enabled_sets_privileged_and_mounts_socket() {
        let dir = tempdir().unwrap();
        let mut opts = test_options(dir.path());
        opts.dbus = true;
        std::fs::write(&opts.env_file, "").unwrap();
        let mut doc = ComposeDocument::empty();
        doc.set(&["services", "api", "volumes"], Value::Sequence(Vec::new()));
        let diag = CollectingDiagnostics::default();

        apply(&opts, &mut doc, &diag).unwrap();

        assert_eq!(doc.get(&["services", "api", "privileged"]), Some(&Value::from(true)));
        let volumes = doc.get(&["services", "api", "volumes"]).unwrap().as_sequence().unwrap();
        assert_eq!(volumes, &vec![Value::from(opts.dbus_volume.clone())]);
        assert!(std::fs::read_to_string(&opts.env_file)
            .unwrap()
            .contains("DBUS_SESSION_BUS_ADDRESS"));
    }

    #[test]
    fn disabled_removes_mount_if_present() {
        let dir = tempdir().unwrap();
        let mut opts = test_options(dir.path());
        std::fs::write(&opts.env_file, "").unwrap();
        let mut doc = ComposeDocument::empty();
        doc.set(
            &["services", "api", "volumes"],
            Value::Sequence(vec![Value::from(opts.dbus_volume.clone())]),
        );
        let diag = CollectingDiagnostics::default();

        opts.dbus = false;
        apply(&opts, &mut doc, &diag).unwrap();
        assert!(doc.get(&["services", "api", "volumes"]).unwrap().as_sequence().unwrap().is_empty());
    }
}
