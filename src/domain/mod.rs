pub mod content;
pub mod diagnostics;
pub mod error;
pub mod options;

pub use content::ManagedContent;
pub use diagnostics::{Diagnostics, StderrDiagnostics};
pub use error::AppError;
pub use options::{BuildArgsOutcome, GenerateOptions};
