use std::io::Write;
use std::process::{Command, Output};

use tempfile::{Builder, NamedTempFile};

fn config(contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn typestyle(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typestyle"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

const CLEAN: &str = r##"
typography-colors:
  ink: "#141414"
ui-font-text-styles:
  body: { font-name: Avenir, point-size: 16, text-color: ink }
  title: { extends: body, point-size: 28 }
"##;

const BROKEN: &str = r#"
ui-font-text-styles:
  body: { point-size: 16 }
  a: { extends: b }
  b: { extends: a }
"#;

#[test]
fn check_clean_config_succeeds() {
    let file = config(CLEAN);
    let output = typestyle(&["check", file.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("2 resolved, 0 failed"));
}

#[test]
fn check_broken_config_fails() {
    let file = config(BROKEN);
    let output = typestyle(&["check", file.path().to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("cyclic-reference"));
    assert!(stdout.contains("1 resolved, 2 failed"));
}

#[test]
fn show_json_for_one_style() {
    let file = config(CLEAN);
    let output = typestyle(&[
        "show",
        file.path().to_str().unwrap(),
        "--style",
        "title",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["styles"]["title"]["font-name"], "Avenir");
    assert_eq!(value["styles"]["title"]["text-color"], "#141414");
    assert!(value["styles"].get("body").is_none());
}

#[test]
fn show_unknown_style_is_an_error() {
    let file = config(CLEAN);
    let output = typestyle(&["show", file.path().to_str().unwrap(), "--style", "nope"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("no style named 'nope'"));
}

#[test]
fn missing_file_is_reported() {
    let output = typestyle(&["check", "/no/such/styles.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("could not load configuration"));
}
