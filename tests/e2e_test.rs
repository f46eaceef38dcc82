//! End-to-end tests for the CLI
//!
//! The binary runs against a shell-script stand-in for pkg(8) written into a
//! temporary directory and selected with `--pkg`.
#![cfg(unix)]

mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::fake_pkg::{write_failing_pkg, write_fake_pkg};

const PACKAGES: &str = "A\nB\nC\nD\n";
const PAIRS: &str = "C::A\nC::B\nD::A\nD::B\nD::C\n";

const EXPECTED_GRAPH: &str = "\
### Root nodes:
###
#
#  p3 D
digraph {
  p0 [label=\"A\"];
  p1 [label=\"B\"];
  p2 [label=\"C\"];
  p3 [label=\"D\"];
  p2 -> p0;
  p2 -> p1;
  p3 -> p2;
}
";

mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg("--pkg")
            .arg(&pkg)
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pkg-depgraph").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pkg-depgraph").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pkg-depgraph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 1: pkg binary missing
    #[test]
    fn test_exit_code_missing_pkg() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .args(["--pkg", "/nonexistent/sbin/pkg"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("pkg binary unavailable"));
    }

    /// Exit code 1: pkg query fails
    #[test]
    fn test_exit_code_query_failure() {
        let dir = TempDir::new().unwrap();
        let pkg = write_failing_pkg(dir.path(), "pkg: database is locked", 75);

        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg("--pkg")
            .arg(&pkg)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Package query failed"))
            .stderr(predicate::str::contains("pkg: database is locked"));
    }

    /// Exit code 1: closure names a package that is not installed
    #[test]
    fn test_exit_code_unknown_package() {
        let dir = TempDir::new().unwrap();
        let pkg = write_fake_pkg(dir.path(), "A\n", "A::ghost\n");

        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg("--pkg")
            .arg(&pkg)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Unknown package: ghost"));
    }

    /// Exit code 1: pair line without separator
    #[test]
    fn test_exit_code_malformed_output() {
        let dir = TempDir::new().unwrap();
        let pkg = write_fake_pkg(dir.path(), "A\nB\n", "A B\n");

        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg("--pkg")
            .arg(&pkg)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Malformed package query line"));
    }
}

#[test]
fn test_e2e_graph_output() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

    cargo_bin_cmd!("pkg-depgraph")
        .current_dir(dir.path())
        .arg("--pkg")
        .arg(&pkg)
        .assert()
        .success()
        .stdout(EXPECTED_GRAPH);
}

#[test]
fn test_e2e_roots_output() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

    for flag in ["--roots", "-r"] {
        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg(flag)
            .arg("--pkg")
            .arg(&pkg)
            .assert()
            .success()
            .stdout("D\n");
    }
}

#[test]
fn test_e2e_raw_output_keeps_implied_edges() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

    cargo_bin_cmd!("pkg-depgraph")
        .current_dir(dir.path())
        .arg("--raw")
        .arg("--pkg")
        .arg(&pkg)
        .assert()
        .success()
        .stdout(predicate::str::contains("  p3 -> p0;\n"))
        .stdout(predicate::str::contains("  p3 -> p1;\n"))
        .stdout(predicate::str::contains("#  p3 D\n"));
}

#[test]
fn test_e2e_output_is_deterministic() {
    let dir = TempDir::new().unwrap();
    // Unsorted query output must not change the rendering
    let pkg = write_fake_pkg(dir.path(), "D\nB\nC\nA\n", "D::C\nC::B\nD::B\nC::A\nD::A\n");

    let run = || {
        cargo_bin_cmd!("pkg-depgraph")
            .current_dir(dir.path())
            .arg("--pkg")
            .arg(&pkg)
            .output()
            .unwrap()
            .stdout
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(String::from_utf8(first).unwrap(), EXPECTED_GRAPH);
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);
    let output_path = dir.path().join("roots.txt");

    cargo_bin_cmd!("pkg-depgraph")
        .current_dir(dir.path())
        .arg("-r")
        .arg("--pkg")
        .arg(&pkg)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(output_path).unwrap(), "D\n");
}

#[test]
fn test_e2e_verbose_reports_on_stderr_only() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

    cargo_bin_cmd!("pkg-depgraph")
        .current_dir(dir.path())
        .args(["-v", "-r"])
        .arg("--pkg")
        .arg(&pkg)
        .assert()
        .success()
        .stdout("D\n")
        .stderr(predicate::str::contains("Detected 4 package(s)"))
        .stderr(predicate::str::contains("5 closure edge(s) to 3 direct edge(s)"));
}

#[test]
fn test_e2e_quiet_by_default() {
    let dir = TempDir::new().unwrap();
    let pkg = write_fake_pkg(dir.path(), PACKAGES, PAIRS);

    cargo_bin_cmd!("pkg-depgraph")
        .current_dir(dir.path())
        .arg("-r")
        .arg("--pkg")
        .arg(&pkg)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
