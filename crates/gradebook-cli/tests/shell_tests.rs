//! Interactive shell tests, driving the binary through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATA: &str = "\
Java_Mar_2017 Petrov12_22 88 92 75
Java_Mar_2017 Georgieva07_07 20 25
Java_Mar_2017 Petrov12_22 90
C#_Feb_2016 Petrov12_22 100 100
";

fn shell(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GRADEBOOK_DATA_DIR")
        .args(["shell", "--data-dir"])
        .arg(dir.path());
    cmd
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("db.txt"), DATA).unwrap();
    dir
}

#[test]
fn load_show_and_quit() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("readdb db.txt\nshow Java_Mar_2017\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data read."))
        .stdout(predicate::str::contains("Java_Mar_2017:"))
        .stdout(predicate::str::contains("Petrov12_22 - [90]"))
        .stderr(predicate::str::contains(
            "Student Petrov12_22 is already enrolled in course Java_Mar_2017.",
        ));
}

#[test]
fn queries_before_load_report_not_initialized() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("show Java_Mar_2017\ndropdb\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Data is not initialized!").count(2));
}

#[test]
fn double_load_is_rejected() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("readdb db.txt\nreaddb db.txt\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data read.").count(1))
        .stderr(predicate::str::contains("Data is already initialized!"));
}

#[test]
fn drop_then_reload() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("readdb db.txt\ndropdb\nreaddb db.txt\nshow C#_Feb_2016 Petrov12_22\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data dropped."))
        .stdout(predicate::str::contains("Data read.").count(2))
        .stdout(predicate::str::contains("Petrov12_22 - [100, 100]"));
}

#[test]
fn filter_and_order_verbs() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin(
            "readdb db.txt\n\
             filter Java_Mar_2017 poor take all\n\
             order Java_Mar_2017 alphabetical take 1\n\
             filter Java_Mar_2017 poor take 0\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Georgieva07_07 - [20, 25]").count(2));
}

#[test]
fn invalid_commands_do_not_end_the_session() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("readdb db.txt\nfrobnicate\norder Java_Mar_2017 sideways\nfilter Java_Mar_2017 poor take x\ncourses\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("The command 'frobnicate' is invalid"))
        .stderr(predicate::str::contains("does not exist in the context"))
        .stderr(predicate::str::contains("take command expected"))
        .stdout(predicate::str::contains("C#_Feb_2016"));
}

#[test]
fn missing_file_does_not_end_the_session() {
    let dir = data_dir();

    shell(&dir)
        .write_stdin("readdb missing.txt\nreaddb db.txt\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to read data file"))
        .stdout(predicate::str::contains("Data read."));
}

#[test]
fn ls_lists_data_directory() {
    let dir = data_dir();
    std::fs::create_dir(dir.path().join("archive")).unwrap();
    std::fs::write(dir.path().join("archive").join("old.txt"), "").unwrap();

    shell(&dir)
        .write_stdin("ls 2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("archive/"))
        .stdout(predicate::str::contains("db.txt"))
        .stdout(predicate::str::contains("old.txt"));
}
