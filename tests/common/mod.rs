//! Shared testing utilities for composegen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a usable global git identity.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        fs::write(
            root.path().join(".gitconfig"),
            "[user]\n\tname = Test User\n\temail = test@example.com\n",
        )
        .expect("Failed to write test .gitconfig");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `composegen` binary.
    ///
    /// HOME points at the emulated home (with a deterministic git identity)
    /// and display-related variables are pinned so runs compare byte-equal.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("composegen").expect("binary under test exists");
        cmd.current_dir(&self.work_dir);
        cmd.env("HOME", self.root.path());
        cmd.env("GIT_CONFIG_NOSYSTEM", "1");
        cmd.env("XDG_RUNTIME_DIR", "/run/user/1000");
        cmd.env_remove("XAUTHORITY");
        cmd
    }

    /// Build a generate-mode command for service `api` with extra args.
    pub fn generate(&self, extra: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--service-name", "api"]);
        cmd.args(extra);
        cmd
    }

    pub fn compose_path(&self) -> PathBuf {
        self.work_dir.join("docker-compose.yml")
    }

    pub fn env_path(&self) -> PathBuf {
        self.work_dir.join(".env")
    }

    pub fn read_compose(&self) -> String {
        fs::read_to_string(self.compose_path()).expect("compose file readable")
    }

    pub fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("env file readable")
    }
}
