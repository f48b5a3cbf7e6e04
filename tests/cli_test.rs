//! Integration tests for the recase binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn recase() -> Command {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.env_remove("RECASE_TO").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_convert_arguments() {
    recase()
        .args(["--to", "camel", "first_name", "last-name"])
        .assert()
        .success()
        .stdout("firstName\nlastName\n");
}

#[test]
fn test_convert_url_to_dot_case() {
    recase()
        .args(["-t", "dot.case", "Api/Users/32/SomeActionToDo?Param=%A%"])
        .assert()
        .success()
        .stdout("api/users/32/some.action.to.do?param=%a%\n");
}

#[test]
fn test_convert_stdin() {
    recase()
        .args(["--to", "train", "--stdin"])
        .write_stdin("first name\nhttp_request\n")
        .assert()
        .success()
        .stdout("First-Name\nHttp-Request\n");
}

#[test]
fn test_json_conversions() {
    recase()
        .args(["--to", "pascal", "-o", "json", "first_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\": \"FirstName\""));
}

#[test]
fn test_unknown_case_is_rejected() {
    recase()
        .args(["--to", "shouty", "word"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case"));
}

#[test]
fn test_no_input_fails() {
    recase()
        .args(["--to", "snake"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input specified"));
}

#[test]
fn test_check_reports_violations() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("main.py");
    fs::write(&file, "def doThing(item_count):\n    return item_count\n").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "snake", "--check", "--no-color", "main.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1:5 doThing → do_thing"))
        .stdout(predicate::str::contains("1 identifier to rename in 1 file"));
}

#[test]
fn test_check_no_fail() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "badName").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "snake", "--check", "--no-fail", "--no-color", "a.txt"])
        .assert()
        .success();
}

#[test]
fn test_check_all_paths_missing_fails() {
    let dir = tempdir().unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "snake", "--check", "--no-color", "nope.rs", "gone/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("None of the given paths exist"))
        .stdout(predicate::str::contains("All identifiers follow").not());
}

#[test]
fn test_check_warns_about_missing_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "good_name").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "snake", "--check", "--no-color", "a.txt", "nope.rs"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping missing path: nope.rs"));
}

#[test]
fn test_fix_rewrites_files() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("style.css");
    fs::write(&file, ".navBar { maxWidth: 10px; }\n").unwrap();

    recase()
        .current_dir(dir.path())
        .args(["--to", "kebab", "--fix", "--no-color", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 renames applied to 1 file"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        ".nav-bar { max-width: 10px; }\n"
    );
}

#[test]
fn test_local_config_sets_default_case() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".recase.toml"), "default_case = \"kebab\"\n").unwrap();

    recase()
        .current_dir(dir.path())
        .arg("someValue")
        .assert()
        .success()
        .stdout("some-value\n");
}

#[test]
fn test_list_cases() {
    recase()
        .args(["--no-color", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("train    Example-Word"));
}

#[test]
fn test_inspect() {
    recase()
        .args(["--no-color", "inspect", "first_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(matches: snake)"))
        .stdout(predicate::str::contains("camel    firstName"));
}
