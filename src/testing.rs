//! Shared test doubles and fixtures.

use std::cell::RefCell;
use std::path::Path;

use crate::domain::{Diagnostics, GenerateOptions};

/// Diagnostics sink that records every message per level.
#[derive(Debug, Default)]
pub(crate) struct CollectingDiagnostics {
    debugs: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl CollectingDiagnostics {
    pub(crate) fn debugs(&self) -> Vec<String> {
        self.debugs.borrow().clone()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub(crate) fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn debug(&self, message: &str) {
        self.debugs.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Options for service `api` rooted in a test directory, all toggles off.
pub(crate) fn test_options(dir: &Path) -> GenerateOptions {
    GenerateOptions {
        compose_file: dir.join("docker-compose.yml"),
        env_file: dir.join(".env"),
        service_name: "api".to_string(),
        image: None,
        container_name: None,
        from_scratch: false,
        privileged: false,
        ipc_host: false,
        nvidia: false,
        wayland: false,
        x11: false,
        dbus: false,
        cpu_limit: 4.0,
        memory_limit: "8.00G".to_string(),
        cpu_reservation: 0.25,
        memory_reservation: "1.00G".to_string(),
        wayland_volume: "$XDG_RUNTIME_DIR/$WAYLAND_DISPLAY:/tmp/$WAYLAND_DISPLAY:rw".to_string(),
        x11_socket_volume: "/tmp/.X11-unix:/tmp/.X11-unix:rw".to_string(),
        x11_authority_volume: None,
        dbus_volume: "/run/user/1000/bus:/run/user/1000/bus:rw".to_string(),
        volumes_append: Vec::new(),
        entrypoint: false,
        entrypoint_path: dir.join("entrypoint.sh"),
    }
}
