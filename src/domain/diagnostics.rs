/// Diagnostics sink threaded through every component of one invocation.
///
/// Non-fatal conditions (skipped edits, missing lookups) are reported here
/// rather than aborting the run; fatal conditions travel as `AppError`.
pub trait Diagnostics {
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Stderr-backed sink used by the binary.
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnostics {
    verbose: bool,
}

impl StderrDiagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn debug(&self, message: &str) {
        if self.verbose {
            eprintln!("debug: {message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}
