use serde_yaml::Value;

use crate::domain::{AppError, Diagnostics, GenerateOptions};
use crate::services::compose_document::ComposeDocument;
use crate::services::host;

const DEFAULT_MOUNTS: [&str; 6] = [
    "~/Projects:${DOCKER_HOME}/Projects:rw",
    "~/Documents:${DOCKER_HOME}/Documents:rw",
    "~/Datasets:${DOCKER_HOME}/Datasets:rw",
    "~/Pictures:${DOCKER_HOME}/Pictures:rw",
    "~/Videos:${DOCKER_HOME}/Videos:rw",
    "~/.ssh:${DOCKER_HOME}/.ssh:ro",
];

/// Overwrite the service's volume list with the fixed default set.
///
/// This replaces whatever was there wholesale; it must run before any stage
/// that appends or removes individual entries.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    _diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let runtime_dir = host::runtime_dir();

    let mut volumes: Vec<Value> = DEFAULT_MOUNTS.iter().map(|m| Value::from(*m)).collect();
    volumes.push(Value::from(format!("{runtime_dir}:{runtime_dir}:rw")));

    doc.set_service(opts.service_name.as_str(), &["volumes"], Value::Sequence(volumes));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_options, CollectingDiagnostics};
    use tempfile::tempdir;

    #[test]
    fn replaces_any_previous_volume_list() {
        let dir = tempdir().unwrap();
        let opts = test_options(dir.path());
        let mut doc = ComposeDocument::empty();
        doc.set(&["services", "api", "volumes"], Value::Sequence(vec![Value::from("stale:stale:rw")]));
        let diag = CollectingDiagnostics::default();

        apply(&opts, &mut doc, &diag).unwrap();

        let volumes = doc.get(&["services", "api", "volumes"]).unwrap().as_sequence().unwrap();
        assert_eq!(volumes.len(), DEFAULT_MOUNTS.len() + 1);
        assert!(!volumes.contains(&Value::from("stale:stale:rw")));
        assert_eq!(volumes[0], Value::from("~/Projects:${DOCKER_HOME}/Projects:rw"));
        assert!(volumes[volumes.len() - 1].as_str().unwrap().ends_with(":rw"));
    }
}
