//! Feature generators: one pipeline stage per concern.
//!
//! Every stage edits the env file through the line editor and the compose
//! document through path upserts, and is independently idempotent. The stage
//! order is part of the pipeline's public contract: `DefaultVolumes` rewrites
//! the service's volume list wholesale, so every stage that edits volumes
//! incrementally must come after it.

mod basic;
mod dbus;
mod networking;
mod nvidia;
mod user;
mod volumes;
mod wayland;
mod x11;

use crate::domain::{AppError, Diagnostics, GenerateOptions};
use crate::services::compose_document::ComposeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Basic,
    User,
    DefaultVolumes,
    Networking,
    Nvidia,
    Wayland,
    X11,
    Dbus,
}

/// Fixed generator order for a full run.
pub const PIPELINE: [Stage; 8] = [
    Stage::Basic,
    Stage::User,
    Stage::DefaultVolumes,
    Stage::Networking,
    Stage::Nvidia,
    Stage::Wayland,
    Stage::X11,
    Stage::Dbus,
];

impl Stage {
    pub fn apply(
        self,
        opts: &GenerateOptions,
        doc: &mut ComposeDocument,
        diag: &dyn Diagnostics,
    ) -> Result<(), AppError> {
        match self {
            Stage::Basic => basic::apply(opts, doc, diag),
            Stage::User => user::apply(opts, doc, diag),
            Stage::DefaultVolumes => volumes::apply(opts, doc, diag),
            Stage::Networking => networking::apply(opts, doc, diag),
            Stage::Nvidia => nvidia::apply(opts, doc, diag),
            Stage::Wayland => wayland::apply(opts, doc, diag),
            Stage::X11 => x11::apply(opts, doc, diag),
            Stage::Dbus => dbus::apply(opts, doc, diag),
        }
    }
}

/// Marker opening a per-service build-args region inside the env file.
pub(crate) fn build_args_start(service: &str) -> String {
    format!("# >>> as services.{service}.build.args")
}

/// Marker closing a per-service build-args region inside the env file.
pub(crate) fn build_args_end(service: &str) -> String {
    format!("# <<< as services.{service}.build.args")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(stage: Stage) -> usize {
        PIPELINE.iter().position(|&s| s == stage).unwrap()
    }

    #[test]
    fn basic_runs_first() {
        assert_eq!(position(Stage::Basic), 0);
    }

    #[test]
    fn default_volumes_precedes_every_volume_editing_stage() {
        // DefaultVolumes overwrites the list wholesale; running it after any
        // of these would silently drop their entries.
        for stage in [Stage::Nvidia, Stage::Wayland, Stage::X11, Stage::Dbus] {
            assert!(position(Stage::DefaultVolumes) < position(stage));
        }
    }

    #[test]
    fn pipeline_covers_every_stage_once() {
        let mut seen = PIPELINE.to_vec();
        seen.dedup();
        assert_eq!(seen.len(), PIPELINE.len());
    }
}
