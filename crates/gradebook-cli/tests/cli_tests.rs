//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATA: &str = "\
Java_Mar_2017 Petrov12_22 88 92 75
Java_Mar_2017 Ivanov05_10 101 50
Java_Mar_2017 Georgieva07_07 40 45
Java_Mar_2017 Kirova20_20 88 92 75
C#_Feb_2016 Petrov12_22 100 100
";

fn gradebook() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("gradebook").unwrap()
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("db.txt"), DATA).unwrap();
    dir
}

#[test]
fn show_course_listing() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["show", "--file", "db.txt", "--course", "Java_Mar_2017"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Java_Mar_2017:"))
        .stdout(predicate::str::contains("Petrov12_22 - [88, 92, 75]"))
        .stdout(predicate::str::contains("Ivanov05_10").not())
        .stderr(predicate::str::contains("not in the range of 0 - 100 at line 2"));
}

#[test]
fn show_single_student_json() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args([
            "show",
            "--file",
            "db.txt",
            "--course",
            "C#_Feb_2016",
            "--student",
            "Petrov12_22",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Petrov12_22\""))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn show_unknown_course_is_a_diagnostic() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["show", "--file", "db.txt", "--course", "Go_Apr_2019"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("does not exist in the data base"));
}

#[test]
fn filter_excellent_with_take() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args([
            "filter",
            "--file",
            "db.txt",
            "--course",
            "Java_Mar_2017",
            "--filter",
            "excellent",
            "--take",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Petrov12_22"))
        .stdout(predicate::str::contains("Kirova20_20").not());
}

#[test]
fn filter_unknown_name() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args([
            "filter",
            "--file",
            "db.txt",
            "--course",
            "Java_Mar_2017",
            "--filter",
            "brilliant",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("excellent/average/poor"));
}

#[test]
fn order_descending_is_stable() {
    let dir = data_dir();

    let output = gradebook()
        .current_dir(dir.path())
        .args([
            "order",
            "--file",
            "db.txt",
            "--course",
            "Java_Mar_2017",
            "--order",
            "descending",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let names: Vec<_> = stdout
        .lines()
        .map(|l| l.split(" - ").next().unwrap())
        .collect();
    assert_eq!(names, vec!["Petrov12_22", "Kirova20_20", "Georgieva07_07"]);
}

#[test]
fn invalid_take_is_rejected_by_clap() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args([
            "order",
            "--file",
            "db.txt",
            "--course",
            "Java_Mar_2017",
            "--order",
            "ascending",
            "--take",
            "lots",
        ])
        .assert()
        .failure();
}

#[test]
fn summary_table() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["summary", "--file", "db.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Java_Mar_2017"))
        .stdout(predicate::str::contains("C#_Feb_2016"))
        .stdout(predicate::str::contains("Best student"));
}

#[test]
fn validate_reports_problems() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["validate", "--file", "db.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 students in 2 courses"))
        .stdout(predicate::str::contains("[INVALID_SCORE]"))
        .stdout(predicate::str::contains("1 problem(s) found (1 rejected record(s))"));
}

#[test]
fn validate_separates_rejected_records_from_other_problems() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("db.txt"),
        "\
Java_Mar_2017 Petrov12_22 88
Java_Mar_2017 Petrov12_22 90
Java_Mar_2017 Ivanov05_10 1 2 3 4 5 6
",
    )
    .unwrap();

    gradebook()
        .current_dir(dir.path())
        .args(["validate", "--file", "db.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[STUDENT_ALREADY_ENROLLED_IN_GIVEN_COURSE]"))
        .stdout(predicate::str::contains("[INVALID_NUMBER_OF_SCORES]"))
        .stdout(predicate::str::contains("2 problem(s) found (1 rejected record(s))"));
}

#[test]
fn validate_strict_fails_on_problems() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["validate", "--file", "db.txt", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_data_file_is_fatal() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args(["show", "--file", "nope.txt", "--course", "Java_Mar_2017"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read data file"));
}

#[test]
fn config_data_dir_is_used() {
    let data = data_dir();
    let work = TempDir::new().unwrap();
    std::fs::write(
        work.path().join("gradebook.toml"),
        format!("data_dir = {:?}\n", data.path().display().to_string()),
    )
    .unwrap();

    gradebook()
        .current_dir(work.path())
        .env_remove("GRADEBOOK_DATA_DIR")
        .args(["show", "--file", "db.txt", "--course", "C#_Feb_2016"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Petrov12_22 - [100, 100]"));
}

#[test]
fn missing_explicit_config_is_fatal() {
    let dir = data_dir();

    gradebook()
        .current_dir(dir.path())
        .args([
            "summary",
            "--file",
            "db.txt",
            "--config",
            "absent.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
