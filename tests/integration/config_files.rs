// tests/integration/config_files.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, filter_cmd};

const INPUT: &str = "#define XY_Open(p) \\\n  open(p)\nint XY_Open_(const char *p);\nint PI_Open_(void);\n";
const OUTPUT: &str = "int XY_Open(const char *p);\nint PI_Open_(void);\n";

#[test]
fn yaml_config_sets_prefix() {
    let ws = TempWorkspace::new();
    let config = ws.write_file("filter.yaml", "marker_prefix: XY_\n");

    filter_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(OUTPUT);
}

#[test]
fn json_config_sets_prefix() {
    let ws = TempWorkspace::new();
    let config = ws.write_file("filter.json", r#"{"marker_prefix": "XY_"}"#);

    filter_cmd()
        .args(["-c"])
        .arg(&config)
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout(OUTPUT);
}

#[test]
fn prefix_flag_beats_config_file() {
    let ws = TempWorkspace::new();
    let config = ws.write_file("filter.json", r#"{"marker_prefix": "XY_"}"#);

    filter_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--prefix", "PI_"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("#define XY_Open(p) \\\n  open(p)\nint XY_Open_(const char *p);\nint PI_Open(void);\n");
}

#[test]
fn invalid_config_fails() {
    let ws = TempWorkspace::new();
    let config = ws.write_file("filter.json", r#"{"macro_param_allowed_chars": "[a-"}"#);

    filter_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("int x;\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn unsupported_config_extension_fails() {
    let ws = TempWorkspace::new();
    let config = ws.write_file("filter.toml", "marker_prefix = 'XY_'\n");

    filter_cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("int x;\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported configuration format"));
}
