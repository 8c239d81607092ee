//! Test utilities for action-inouts integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Descriptor used by most tests
pub const ACTION_YML: &str = r#"
name: Build image
description: Build a container image
inputs:
  repoToken:
    description: Auth token
    required: true
outputs:
  buildId:
    description: "The build id\\nused later"
    required: false
runs:
  using: node20
  main: dist/index.js
"#;

/// Creates a temporary install root holding `action_yml` and an empty
/// `src/generated` directory
pub fn create_install_root(action_yml: Option<&str>) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path().to_path_buf();
    if let Some(content) = action_yml {
        fs::write(root.join("action.yml"), content)?;
    }
    fs::create_dir_all(root.join("src").join("generated"))?;
    Ok((temp_dir, root))
}

/// Default output location inside an install root
pub fn default_output(root: &Path) -> PathBuf {
    root.join("src").join("generated").join("inputs-outputs.ts")
}

/// Runs the CLI against `root` with the given arguments
pub fn run_cli(root: &Path, args: &[&str]) -> anyhow::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_action-inouts"))
        .args(args)
        .env("ACTION_INOUTS_ROOT", root)
        .env_remove("ACTION_INOUTS_TEMPLATE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .context("Failed to run action-inouts")
}

/// Workspace root of this repository
pub fn workspace_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .context("Failed to determine workspace root directory")
}
