use std::fs;
use std::process::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_looptasks"))
        .args(args)
        .output()
        .expect("run failed");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn missing_matrix_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.json");
    let (ok, stderr) = run(&["rotate", "--input", input.to_str().unwrap()]);
    assert!(!ok);
    assert!(stderr.contains("Check that the file exists"));
}

#[test]
fn ragged_matrix_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ragged.json");
    fs::write(&input, "[[1,2,3],[4,5]]").unwrap();
    let (ok, stderr) = run(&["rotate", "--input", input.to_str().unwrap()]);
    assert!(!ok);
    assert!(stderr.contains("Only square matrices rotate"));
}

#[test]
fn malformed_json_rejected() {
    let (ok, stderr) = run(&["rotate", "--matrix", "[[1,2],"]);
    assert!(!ok);
    assert!(stderr.contains("parsing matrix"));
}

#[test]
fn both_matrix_sources_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("m.json");
    fs::write(&input, "[[1]]").unwrap();
    let (ok, stderr) = run(&["rotate", "--input", input.to_str().unwrap(), "--matrix", "[[1]]"]);
    assert!(!ok);
    assert!(stderr.contains("exactly one of --input or --matrix"));
}

#[test]
fn digit_out_of_range() {
    let (ok, stderr) = run(&["contains", "123", "12"]);
    assert!(!ok);
    assert!(stderr.contains("not a single decimal digit"));
}
