// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{PILOT_FILTERED, PILOT_HEADER, TempWorkspace, filter_cmd};

#[test]
fn shows_help() {
    filter_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("doxygen_filter"));
}

#[test]
fn filters_named_file_to_stdout() {
    let ws = TempWorkspace::new();
    let input = ws.write_file("pilot.h", PILOT_HEADER);

    filter_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(PILOT_FILTERED);
}

#[test]
fn dash_reads_stdin() {
    filter_cmd()
        .arg("-")
        .write_stdin(PILOT_HEADER)
        .assert()
        .success()
        .stdout(PILOT_FILTERED);
}

#[test]
fn no_argument_reads_stdin() {
    filter_cmd()
        .write_stdin("int PI_Foobar_(int a, int b);\nint t;")
        .assert()
        .success()
        .stdout("int PI_Foobar(int a, int b);\nint t;");
}

#[test]
fn batch_mode_gives_same_output() {
    filter_cmd()
        .args(["--mode", "batch"])
        .write_stdin(PILOT_HEADER)
        .assert()
        .success()
        .stdout(PILOT_FILTERED);
}

#[test]
fn writes_output_file() {
    let ws = TempWorkspace::new();
    let input = ws.write_file("pilot.h", PILOT_HEADER);
    let output = ws.path().join("out.h");

    filter_cmd()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(ws.read_file("out.h"), PILOT_FILTERED);
}

#[test]
fn missing_input_fails_with_exit_code_one() {
    let ws = TempWorkspace::new();
    filter_cmd()
        .arg(ws.path().join("absent.h"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn too_many_arguments_is_usage_error() {
    filter_cmd()
        .args(["a.h", "b.h"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn no_rename_keeps_underscores() {
    filter_cmd()
        .arg("--no-rename")
        .write_stdin("#define PI_A(x) \\\n  x\nint PI_A_(int x);\n")
        .assert()
        .success()
        .stdout("int PI_A_(int x);\n");
}

#[test]
fn no_suppress_keeps_macros() {
    filter_cmd()
        .arg("--no-suppress")
        .write_stdin("#define PI_A(x) PI_A_(x)\n")
        .assert()
        .success()
        .stdout("#define PI_A(x) PI_A(x)\n");
}

#[test]
fn stats_go_to_stderr() {
    filter_cmd()
        .arg("--stats")
        .write_stdin(PILOT_HEADER)
        .assert()
        .success()
        .stdout(PILOT_FILTERED)
        .stderr(predicate::str::contains("macros=2").and(predicate::str::contains("renamed=2")));
}

#[test]
fn prefix_flag_changes_marker() {
    filter_cmd()
        .args(["--prefix", "MPI_"])
        .write_stdin("#define MPI_Send(b) \\\n  b\nint MPI_Send_(void *b);\nint PI_Keep_(void);\n")
        .assert()
        .success()
        .stdout("int MPI_Send(void *b);\nint PI_Keep_(void);\n");
}

#[test]
fn crlf_header_from_file() {
    let ws = TempWorkspace::new();
    let input = ws.write_file(
        "crlf.h",
        "#define PI_Write(c, f) \\\r\n    PI_Write_(c, f)\r\nint PI_Write_(PI_CHANNEL *c, const char *f);\r\n",
    );

    filter_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout("int PI_Write(PI_CHANNEL *c, const char *f);\r\n");
}
