use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("vancdump"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden(case: &str, file: &str) -> std::path::PathBuf {
    repo_root().join("tests").join("golden").join(case).join(file)
}

fn expected(case: &str) -> String {
    std::fs::read_to_string(golden(case, "expected.txt")).expect("read expected")
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("rcwt").and(contains("vanc")));
}

#[test]
fn rcwt_matches_golden_on_stdout() {
    let assert = cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), expected("rcwt_basic"));
}

#[test]
fn rcwt_reads_stdin() {
    let input = std::fs::read(golden("rcwt_basic", "input.rcwt")).expect("read input");
    let assert = cmd()
        .arg("rcwt")
        .arg("-")
        .write_stdin(input)
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), expected("rcwt_basic"));
}

#[test]
fn rcwt_start_at_zero_shifts_first_record() {
    let assert = cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .arg("--start-at-zero")
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert!(stdout.starts_with("0.000: fc9420 fc94ae\n"));
    assert!(stdout.contains("1.035: fc942f"));
}

#[test]
fn rcwt_negative_offset_is_accepted() {
    let assert = cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .arg("--offset-ms")
        .arg("-1000")
        .assert()
        .success();
    assert!(stdout_of(&assert).starts_with("0.000:"));
}

#[test]
fn rcwt_rounds_to_frame_rate() {
    let assert = cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .arg("--round-to-fps")
        .arg("25")
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert!(stdout.contains("1.040: fc9420 fc94ae fcc8e5"));
    assert!(!stdout.contains("1.033:"));
}

#[test]
fn rcwt_unknown_frame_rate_is_rejected() {
    cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .arg("--round-to-fps")
        .arg("31")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("unknown frame rate"));
}

#[test]
fn rcwt_rejects_non_rcwt_input() {
    cmd()
        .arg("rcwt")
        .arg(golden("mcc_basic", "input.mcc"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.rcwt");

    cmd()
        .arg("rcwt")
        .arg(missing)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn vanc_from_mxf_matches_golden() {
    let assert = cmd()
        .arg("vanc")
        .arg("--mxf-data-stream")
        .arg(golden("mxf_basic", "input.mxf.dat"))
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), expected("mxf_basic"));
}

#[test]
fn vanc_from_mcc_matches_golden() {
    let assert = cmd()
        .arg("vanc")
        .arg("--mcc")
        .arg(golden("mcc_basic", "input.mcc"))
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), expected("mcc_basic"));
}

#[test]
fn vanc_requires_a_source() {
    cmd().arg("vanc").assert().failure().code(2);
}

#[test]
fn vanc_sources_conflict() {
    cmd()
        .arg("vanc")
        .arg("--mxf-data-stream")
        .arg(golden("mxf_basic", "input.mxf.dat"))
        .arg("--mcc")
        .arg(golden("mcc_basic", "input.mcc"))
        .assert()
        .failure()
        .code(2)
        .stderr(contains("cannot be used with"));
}

#[test]
fn output_file_reports_ok() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("nested").join("out.txt");

    cmd()
        .arg("vanc")
        .arg("--mxf-data-stream")
        .arg(golden("mxf_basic", "input.mxf.dat"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(contains("OK: 4 records, 3 lines"));

    let written = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(written, expected("mxf_basic"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("out.txt");

    cmd()
        .arg("rcwt")
        .arg(golden("rcwt_basic", "input.rcwt"))
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn summary_writes_json_counts() {
    let temp = TempDir::new().expect("tempdir");
    let summary = temp.path().join("summary.json");

    cmd()
        .arg("vanc")
        .arg("--mcc")
        .arg(golden("mcc_basic", "input.mcc"))
        .arg("--summary")
        .arg(&summary)
        .assert()
        .success();

    let data = std::fs::read_to_string(&summary).expect("read summary");
    let json: Value = serde_json::from_str(&data).expect("valid json");
    assert_eq!(json["attributes"], 5);
    assert_eq!(json["records"], 4);
    assert_eq!(json["dropped"], 1);
    assert_eq!(json["lines_written"], 8);
}

#[test]
fn output_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("captions.rcwt");
    std::fs::copy(golden("rcwt_basic", "input.rcwt"), &input).expect("copy input");

    cmd()
        .arg("rcwt")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("output path must differ from input"));
}

#[test]
fn glob_input_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::copy(
        golden("rcwt_basic", "input.rcwt"),
        temp.path().join("only.rcwt"),
    )
    .expect("copy input");
    let pattern = temp.path().join("*.rcwt");

    let assert = cmd().arg("rcwt").arg(pattern).assert().success();
    assert_eq!(stdout_of(&assert), expected("rcwt_basic"));
}

#[test]
fn glob_input_with_multiple_matches_fails() {
    let temp = TempDir::new().expect("tempdir");
    for name in ["a.rcwt", "b.rcwt"] {
        std::fs::copy(golden("rcwt_basic", "input.rcwt"), temp.path().join(name))
            .expect("copy input");
    }
    let pattern = temp.path().join("*.rcwt");

    cmd()
        .arg("rcwt")
        .arg(pattern)
        .assert()
        .failure()
        .code(2)
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn long_version_carries_build_stamp() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
