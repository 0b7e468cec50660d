use std::path::PathBuf;

/// Resolved command-line arguments for a full generation run.
///
/// Read-only input to every feature generator; defaults derived from host
/// introspection are resolved before this struct is built.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub compose_file: PathBuf,
    pub env_file: PathBuf,
    pub service_name: String,
    pub image: Option<String>,
    pub container_name: Option<String>,
    pub from_scratch: bool,
    pub privileged: bool,
    pub ipc_host: bool,
    pub nvidia: bool,
    pub wayland: bool,
    pub x11: bool,
    pub dbus: bool,
    pub cpu_limit: f64,
    pub memory_limit: String,
    pub cpu_reservation: f64,
    pub memory_reservation: String,
    pub wayland_volume: String,
    pub x11_socket_volume: String,
    pub x11_authority_volume: Option<String>,
    pub dbus_volume: String,
    pub volumes_append: Vec<String>,
    pub entrypoint: bool,
    pub entrypoint_path: PathBuf,
}

impl GenerateOptions {
    /// Image name, defaulting to `<service>:latest`.
    pub fn image_name(&self) -> String {
        self.image.clone().unwrap_or_else(|| format!("{}:latest", self.service_name))
    }

    /// Container name, defaulting to the service name.
    pub fn container(&self) -> String {
        self.container_name.clone().unwrap_or_else(|| self.service_name.clone())
    }
}

/// Result of one Build-Args Extractor invocation.
///
/// The empty case is a deliberate early success: the orchestrator exits 0
/// without writing the compose document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildArgsOutcome {
    /// `build.args` written with the extracted keys, in declaration order.
    Updated { keys: Vec<String> },
    /// No marked declarations found; the document was left untouched.
    NoArgsFound,
}
