use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("sample.txt");

    cmd.assert().success().stdout(str::contains("is 25272."));
}

#[test]
fn part2_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("no_such_input.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(no_such_input.txt)."));
}
