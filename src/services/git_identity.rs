use std::process::Command;

use crate::domain::AppError;

/// Git identity baked into generated entrypoint scripts.
#[derive(Debug, Clone)]
pub struct GitIdentity {
    pub user_name: String,
    pub user_email: String,
}

impl GitIdentity {
    /// Read `user.name` and `user.email` from the global git config, once.
    pub fn from_global_config() -> Result<Self, AppError> {
        Ok(Self {
            user_name: run_git(&["config", "--global", "user.name"])?,
            user_email: run_git(&["config", "--global", "user.email"])?,
        })
    }
}

fn run_git(args: &[&str]) -> Result<String, AppError> {
    let output = Command::new("git").args(args).output().map_err(|e| AppError::GitError {
        command: format!("git {}", args.join(" ")),
        details: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::GitError {
            command: format!("git {}", args.join(" ")),
            details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_command_reports_git_error() {
        let err = run_git(&["config", "--global", "no.such.key.composegen"]).unwrap_err();
        assert!(matches!(err, AppError::GitError { .. }));
    }
}
