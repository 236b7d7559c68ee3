//! End-to-end tests running the compiled binary against script files

use std::fs;
use std::process::Command;

fn ideograph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ideograph"))
}

#[test]
fn test_render_script_file_to_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("demo.ideo");
    let svg = dir.path().join("demo.svg");

    fs::write(
        &script,
        "# demo map\nadd 1 \"Branch A\"\nselect 2\nadd 2 \"Leaf\"\ntheme dark\nzoom in\n",
    )
    .unwrap();

    let status = ideograph()
        .args(["render", "--input"])
        .arg(&script)
        .arg("--output")
        .arg(&svg)
        .args(["--theme", "dark"])
        .status()
        .unwrap();
    assert!(status.success());

    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("Branch A"));
    assert!(content.contains("Leaf"));
}

#[test]
fn test_render_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("demo.ideo");
    fs::write(&script, "add 1 \"Only Branch\"\n").unwrap();

    let output = ideograph()
        .args(["render", "--input"])
        .arg(&script)
        .args(["--output", "-"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains("Only Branch"));
}

#[test]
fn test_validate_rejects_bad_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("bad.ideo");
    fs::write(&script, "summon dragons\n").unwrap();

    let status = ideograph()
        .args(["validate", "--input"])
        .arg(&script)
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn test_inspect_json_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("demo.ideo");
    fs::write(&script, "add 1 \"A\"\nadd 1 \"B\"\nremove 1\n").unwrap();

    let output = ideograph()
        .args(["inspect", "--json", "--input"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["node_count"], 3);
    assert_eq!(json["connection_count"], 2);
    assert_eq!(json["applied"], 2);
    assert_eq!(json["rejections"].as_array().unwrap().len(), 1);
}
