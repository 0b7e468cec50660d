pub mod build_args;
pub mod compose_document;
pub mod entrypoint;
pub mod env_session;
pub mod generators;
pub mod git_identity;
pub mod host;
pub mod line_editor;

pub use compose_document::ComposeDocument;
pub use env_session::EnvSession;
