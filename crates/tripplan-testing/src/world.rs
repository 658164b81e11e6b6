//! TestWorld pattern for CLI integration tests.
//!
//! Each world owns a temp directory used as the data dir and pins the
//! environment the binary sees, so tests never read the developer's config or
//! clock.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BIN_NAME: &str = "tripplan";

/// Environment values the binary reads; cleared unless a test sets them.
const MANAGED_ENV: [&str; 4] = [
    "TRIPPLAN_API_URL",
    "TRIPPLAN_PATH",
    "TRIPPLAN_TODAY",
    "RUST_LOG",
];

/// Isolated environment for running the `tripplan` binary.
///
/// # Example
/// ```no_run
/// use tripplan_testing::TestWorld;
///
/// let world = TestWorld::new().with_today("2024-05-10");
/// let result = world
///     .run(&["check", "--from", "Oslo", "--to", "Rome", "--departure", "2024-06-01"])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".tripplan");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Pin the date the binary treats as today.
    pub fn with_today(self, date: &str) -> Self {
        self.with_env("TRIPPLAN_TODAY", date)
    }

    /// Point the binary at a planning service through the environment.
    pub fn with_api_url(self, url: impl Into<String>) -> Self {
        self.with_env("TRIPPLAN_API_URL", url)
    }

    /// Write config.toml content directly.
    pub fn write_raw_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    pub fn read_config(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.config_path())?)
    }

    /// Configure a CLI command with this world's data dir and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());

        for key in MANAGED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the binary with `args` and capture its output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_stdin(args, "")
    }

    /// Execute the binary with `args`, feeding `stdin` to it.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin(BIN_NAME)
            .map_err(|e| anyhow::anyhow!("Failed to find {} binary: {}", BIN_NAME, e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
