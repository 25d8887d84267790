//! Integration tests for docdelta
//!
//! These build real archive trees on disk and drive the binary end to end.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn write_manifest(root: &Path, relative: &str, identifier: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        format!(r#"{{"identifier":{{"url":"{identifier}"}},"schemaVersion":{{"major":0}}}}"#),
    )
    .unwrap();
}

fn run(args: &[&str], paths: &[&Path]) -> std::process::Output {
    let mut command = Command::new("cargo");
    command.args(["run", "--quiet", "--"]).args(args);
    for path in paths {
        command.arg(path);
    }
    command
        .current_dir(".")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn cli_reports_usage() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("docdelta"));
    assert!(stdout.contains("Diff and combine rendered documentation archives"));
}

#[test]
fn diff_writes_a_changelog_beside_the_older_archive() {
    let temp = TempDir::new().unwrap();
    let old_root = temp.path().join("Old.docarchive");
    let new_root = temp.path().join("New.docarchive");

    write_manifest(
        &old_root,
        "data/documentation/WidgetKit/Button.json",
        "doc://pkg/documentation/WidgetKit/Button",
    );
    write_manifest(
        &old_root,
        "data/documentation/WidgetKit/Timer.json",
        "doc://pkg/documentation/WidgetKit/Timer",
    );
    write_manifest(
        &new_root,
        "data/documentation/WidgetKit/Button.json",
        "doc://pkg/documentation/WidgetKit/Button",
    );
    write_manifest(
        &new_root,
        "data/documentation/WidgetKit/Clock.json",
        "doc://pkg/documentation/WidgetKit/Clock",
    );

    let output = run(
        &["diff", "--old-version", "1.0", "--new-version", "2.0"],
        &[&old_root, &new_root],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let changelog = fs::read_to_string(temp.path().join("WidgetKit_ChangeLog.md")).unwrap();
    assert!(changelog.contains("# `WidgetKit` Updates"));
    assert!(changelog.contains("This changelog compares the 1.0 and 2.0 snapshots of `WidgetKit`."));
    assert!(changelog.contains("- <doc:documentation/WidgetKit/Clock/>"));
    assert!(changelog.contains("- <doc:documentation/WidgetKit/Timer/>"));
    assert!(!changelog.contains("Button"));
}

#[test]
fn diff_of_unreadable_roots_yields_an_empty_changelog() {
    // Both walks are lenient on missing roots, so diffing two of them
    // produces an empty changelog under the placeholder name.
    let temp = TempDir::new().unwrap();
    let old_root = temp.path().join("Old.docarchive");
    let new_root = temp.path().join("New.docarchive");

    let output = run(&["diff"], &[&old_root, &new_root]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let changelog = fs::read_to_string(temp.path().join("Framework_ChangeLog.md")).unwrap();
    assert!(changelog.contains("# `Framework` Updates"));
    assert!(!changelog.contains("- <"));
}

#[test]
fn merge_combines_archives_and_rejects_bad_requests() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("Widgets.docarchive");
    let second = temp.path().join("Gadgets.docarchive");

    write_manifest(
        &first,
        "data/documentation/Widgets/Button.json",
        "doc://widgets/documentation/Widgets/Button",
    );
    write_manifest(
        &second,
        "data/documentation/Gadgets/Dial.json",
        "doc://gadgets/documentation/Gadgets/Dial",
    );

    let combined = temp.path().join("Combined.docarchive");
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "merge"])
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&combined)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined
        .join("Widgets/data/documentation/Widgets/Button.json")
        .is_file());
    assert!(combined
        .join("Gadgets/data/documentation/Gadgets/Dial.json")
        .is_file());

    // A request with a bad output parent fails without creating anything.
    let bad_output = temp.path().join("missing/Combined.docarchive");
    let failure = Command::new("cargo")
        .args(["run", "--quiet", "--", "merge"])
        .arg(&first)
        .arg("--output")
        .arg(&bad_output)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(!failure.status.success());
    assert!(!bad_output.exists());
}
