//! Common test utilities for CLI integration tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Runs the docview binary with `args`, feeding `stdin` to it.
pub(crate) fn run_docview(args: &[&str], stdin: &str) -> Output {
    let mut process = Command::new(env!("CARGO_BIN_EXE_docview"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn docview binary");

    process
        .stdin
        .take()
        .expect("Failed to capture stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    process
        .wait_with_output()
        .expect("Failed to wait for docview")
}

/// Stdout of a successful run.
pub(crate) fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "docview failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}
