use std::fs;
use std::process::Command;

fn looptasks(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_looptasks"))
        .args(args)
        .env_remove("LOOPTASKS_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run failed")
}

fn stdout(args: &[&str]) -> String {
    let output = looptasks(args);
    assert!(output.status.success(), "{args:?} failed: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn scalar_commands() {
    assert_eq!(stdout(&["positive", "-5"]), "false");
    assert_eq!(stdout(&["max", "-0.1", "0", "0.2"]), "0.2");
    assert_eq!(stdout(&["queen", "1", "1", "5", "5"]), "true");
    assert_eq!(stdout(&["isosceles", "2", "2", "5"]), "false");
    assert_eq!(stdout(&["roman", "26"]), "XXVI");
    assert_eq!(stdout(&["words", "-10.5"]), "minus one zero point five");
    assert_eq!(stdout(&["palindrome", "abcba"]), "true");
    assert_eq!(stdout(&["index-of", "qwerty", "p"]), "-1");
    assert_eq!(stdout(&["contains", "-123450", "0"]), "true");
    assert_eq!(stdout(&["balance", "1", "2", "5", "3", "0"]), "2");
    assert_eq!(stdout(&["shuffle", "012345", "3"]), "031425");
    assert_eq!(stdout(&["nearest-bigger", "321321"]), "322113");
}

#[test]
fn large_triangle_sides() {
    let max = i64::MAX.to_string();
    assert_eq!(stdout(&["isosceles", &max, &max, "1"]), "true");
}

#[test]
fn queen_accepts_negative_coordinates() {
    assert_eq!(stdout(&["queen", "-3", "-3", "2", "2"]), "true");
    assert_eq!(stdout(&["queen", "-3", "0", "2", "1"]), "false");
}

#[test]
fn sort_accepts_negatives() {
    assert_eq!(stdout(&["sort", "-2", "9", "5", "-3"]), "-3 -2 5 9");
}

#[test]
fn spiral_as_json() {
    assert_eq!(stdout(&["spiral", "3", "--json"]), "[[1,2,3],[8,9,4],[7,6,5]]");
}

#[test]
fn rotate_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("matrix.json");
    fs::write(&input, "[[1,2,3],[4,5,6],[7,8,9]]").unwrap();
    assert_eq!(
        stdout(&["rotate", "--input", input.to_str().unwrap()]),
        "7 4 1\n8 5 2\n9 6 3"
    );
}

#[test]
fn rotate_inline_json() {
    assert_eq!(
        stdout(&["--json", "rotate", "--matrix", "[[1,2],[3,4]]"]),
        "[[3,1],[4,2]]"
    );
}

#[test]
fn roman_out_of_range_fails() {
    let output = looptasks(&["roman", "40"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("from 1 to 39"));
}
