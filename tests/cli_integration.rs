//! Integration tests for the `tl` binary.
//!
//! The TUI needs a real terminal, so these only cover what happens before
//! it starts: argument parsing and config loading.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tl"))
        .args(args)
        .output()
        .expect("failed to run tl")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn version_flag() {
    let out = tl(&["--version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("tl "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_flags() {
    let out = tl(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for flag in ["--config", "--dark", "--filter", "--log-level", "--log-dir"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn unknown_filter_is_a_usage_error() {
    let out = tl(&["--filter", "done"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("unknown filter 'done'"));
}

#[test]
fn missing_config_file_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.toml");
    let out = tl(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.starts_with("error: could not read"));
    assert!(err.contains("missing.toml"));
}

#[test]
fn invalid_date_format_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();
    let out = tl(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid date_format '%Q'"));
}

#[test]
fn malformed_config_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[ui\ndark_mode = true\n").unwrap();
    let out = tl(&["--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("could not parse"));
}
