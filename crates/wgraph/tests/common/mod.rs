//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the wgraph binary built for this test run
pub fn get_wgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wgraph"))
}

/// Run the wgraph binary directly in the specified directory
pub fn run_wgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(get_wgraph_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wgraph binary")
}

/// Run wgraph and assert it succeeded, returning stdout
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_wgraph_in_dir(dir, args);
    assert!(
        output.status.success(),
        "wgraph {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Run wgraph and assert it failed, returning stderr
pub fn run_err(dir: &Path, args: &[&str]) -> String {
    let output = run_wgraph_in_dir(dir, args);
    assert!(
        !output.status.success(),
        "wgraph {args:?} unexpectedly succeeded: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Run wgraph with `--json` and parse stdout
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_ok(dir, &full);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

/// Write a graph file in the working directory
pub fn write_graph(dir: &Path, text: &str) {
    std::fs::write(dir.join("graph.txt"), text).expect("Failed to write graph file");
}

/// Read the working graph file back
pub fn read_graph(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("graph.txt")).expect("Failed to read graph file")
}
