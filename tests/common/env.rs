//! Test environment for isolated static-import runs.
//!
//! Provides `TestEnv` - a temp project directory (the working directory of
//! every run) plus a temp HOME, so user config never leaks into tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::ASSET_DIR;

/// Variables cleared before every run
const ISOLATED_VARS: &[&str] = &[
    "RUST_LOG",
    "STATIC_IMPORT_ASSET_DIR",
    "STATIC_IMPORT_ATOMIC_WRITES",
    "STATIC_IMPORT_VERBOSITY",
    "STATIC_IMPORT_FORMAT",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory used as the working directory
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, no asset directory
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_static-import")),
        }
    }

    /// Project with `assets/img/` already created
    pub fn with_asset_dir() -> Self {
        let env = Self::new();
        env.create_dir(ASSET_DIR);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Path of an imported asset under the default asset directory
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.project_path(ASSET_DIR).join(file_name)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run the CLI from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute static-import");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative_path: &str, content: &[u8]) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Create a directory (and parents) in the project
    pub fn create_dir(&self, relative_path: &str) {
        std::fs::create_dir_all(self.project_path(relative_path))
            .expect("Failed to create directory");
    }

    /// Names of all entries in a project directory, sorted
    pub fn list_dir(&self, relative_path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.project_path(relative_path))
            .expect("Failed to read directory")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
