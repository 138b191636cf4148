//! Tests for the `semver-sync` binary.

mod common;

use common::{FOO_MANIFEST, Workspace};
use semver_sync::DUPLICATES_HEADER;
use std::process::{Command, Output};

fn run(workspace: &Workspace, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semver-sync"))
        .args(args)
        .current_dir(workspace.root())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run semver-sync binary")
}

#[test]
fn test_reconciles_current_directory() {
    let workspace = Workspace::reference();

    let output = run(&workspace, &[]);

    assert!(output.status.success());
    assert_eq!(
        workspace.json("packages/foo/package.json")["dependencies"]["lodash"],
        "^4.2.33"
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        format!(
            "{DUPLICATES_HEADER}\n\
             lodash: ^4.1.665, ^4.2.33, ^4.0.0, ^4.1.234\n\
             react: ~0.14.3 || ^15.0.0, ^0.14.3 || ^15.5.0, 0.14.x || ^15.5.0\n"
        )
    );
}

#[test]
fn test_second_run_prints_nothing() {
    let workspace = Workspace::reference();
    assert!(run(&workspace, &[]).status.success());

    let output = run(&workspace, &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prints_duplicates() {
    let workspace = Workspace::new();
    workspace.write(
        "packages/foo/package.json",
        r#"{"dependencies":{"react":"15.5.0"}}"#,
    );
    workspace.write(
        "packages/bar/package.json",
        r#"{"dependencies":{"react":"15.6.1"}}"#,
    );

    let output = run(&workspace, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{DUPLICATES_HEADER}\nreact: 15.6.1, 15.5.0\n"));
}

#[test]
fn test_pattern_argument() {
    let workspace = Workspace::new();
    workspace.write(
        "libs/a/package.json",
        r#"{"dependencies":{"ms":"^2.0.0"}}"#,
    );
    workspace.write(
        "libs/b/package.json",
        r#"{"dependencies":{"ms":"^2.1.1"}}"#,
    );

    let output = run(&workspace, &["libs/*/package.json"]);

    assert!(output.status.success());
    assert_eq!(
        workspace.read("libs/a/package.json"),
        r#"{"dependencies":{"ms":"^2.1.1"}}"#
    );
}

#[test]
fn test_no_root_flag() {
    let workspace = Workspace::reference();
    let root_before = workspace.read("package.json");

    let output = run(&workspace, &["--no-root"]);

    assert!(output.status.success());
    assert_eq!(workspace.read("package.json"), root_before);
}

#[test]
fn test_malformed_manifest_fails() {
    let workspace = Workspace::reference();
    workspace.write("packages/broken/package.json", "not json");

    let output = run(&workspace, &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("packages/broken/package.json"));
    assert_eq!(workspace.read("packages/foo/package.json"), FOO_MANIFEST);
}
