use serde::Serialize;
use serde_yaml::Value;

use crate::domain::{AppError, Diagnostics, GenerateOptions, ManagedContent};
use crate::services::compose_document::ComposeDocument;
use crate::services::line_editor::ensure_content;

#[derive(Debug, Serialize)]
struct DeviceReservation {
    capabilities: Vec<String>,
    count: String,
    driver: String,
}

/// NVIDIA GPU passthrough: runtime selection and a device reservation.
pub fn apply(
    opts: &GenerateOptions,
    doc: &mut ComposeDocument,
    diag: &dyn Diagnostics,
) -> Result<(), AppError> {
    let service = opts.service_name.as_str();

    ensure_content(
        &opts.env_file,
        &ManagedContent::block(["NVIDIA_VISIBLE_DEVICES=all", "NVIDIA_DRIVER_CAPABILITIES=all"]),
        opts.nvidia,
        diag,
    );

    if !opts.nvidia {
        return Ok(());
    }

    diag.debug(&format!("Use nvidia container runtime for service '{service}'."));
    doc.set_service(service, &["runtime"], "nvidia");

    diag.debug(&format!(
        "Deploy all NVIDIA GPU Devices with GPU capabilities for service '{service}'."
    ));
    let reservation = DeviceReservation {
        capabilities: vec!["gpu".to_string()],
        count: "all".to_string(),
        driver: "nvidia".to_string(),
    };
    let devices: Value =
        serde_yaml::to_value(vec![reservation]).map_err(|e| AppError::ParseError {
            what: "GPU device reservation".to_string(),
            details: e.to_string(),
        })?;
    doc.set_service(service, &["deploy", "resources", "reservations", "devices"], devices);

    Ok(())
}
