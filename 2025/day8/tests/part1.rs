use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt").arg("10").arg("3");

    cmd.assert().success().stdout(str::contains("is 40."));
}

#[test]
fn part1_fails_when_too_few_circuits_left() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("sample.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect at least 3 cluster(s), given 1."));
}

#[test]
fn part1_reports_malformed_line() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/data/malformed.txt").arg("1").arg("1");

    cmd.assert()
        .failure()
        .stderr(str::contains("line 3"))
        .stderr(str::contains("906,360"));
}
