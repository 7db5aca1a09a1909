//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reportgen() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("reportgen").unwrap();
    cmd.env_remove("REPORTGEN_DATA_DIR");
    cmd
}

/// Run `reportgen init` in a fresh directory; HOME points there too so no
/// user-level config leaks in.
fn initialized_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    reportgen()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

fn generate_in(dir: &TempDir) -> Command {
    let mut cmd = reportgen();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("generate");
    cmd
}

#[test]
fn help_output() {
    reportgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate Diagnostic, Progress, or Feedback report",
        ))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_output() {
    reportgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reportgen"));
}

#[test]
fn types_lists_every_report() {
    reportgen()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("diagnostic"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("feedback"));
}

#[test]
fn init_creates_config_and_sample_data() {
    let dir = TempDir::new().unwrap();

    reportgen()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created reportgen.toml"))
        .stdout(predicate::str::contains("student-responses.json"));

    assert!(dir.path().join("reportgen.toml").exists());
    for file in [
        "students.json",
        "assessments.json",
        "questions.json",
        "student-responses.json",
    ] {
        assert!(dir.path().join("data").join(file).exists(), "{file} missing");
    }
}

#[test]
fn init_skips_existing_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reportgen.toml"), "# mine\n").unwrap();

    reportgen()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("reportgen.toml already exists, skipping."));

    let content = std::fs::read_to_string(dir.path().join("reportgen.toml")).unwrap();
    assert_eq!(content, "# mine\n");
}

#[test]
fn diagnostic_report_from_sample_data() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student1", "--report", "diagnostic"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tony Stark recently completed Numeracy assessment on 16th December 2021 10:46 AM",
        ))
        .stdout(predicate::str::contains(
            "Tony Stark got 6 out of 12 correct. Details by strand given below:",
        ))
        .stdout(predicate::str::contains("Measurement and Geometry: 3 out of 6 correct"))
        .stdout(predicate::str::contains("Number and Algebra: 3 out of 6 correct"))
        .stdout(predicate::str::contains("Report generated successfully!"));
}

#[test]
fn progress_report_from_sample_data() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student1", "--report", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tony Stark has completed Numeracy assessment 3 times in total.",
        ))
        .stdout(predicate::str::contains(
            "Date: 16th December 2019 10:46 AM, Raw Score: 1 out of 4",
        ))
        .stdout(predicate::str::contains(
            "Date: 16th December 2021 10:46 AM, Raw Score: 3 out of 4",
        ))
        .stdout(predicate::str::contains(
            "Tony Stark got 2 more correct in the recent completed assessment than the oldest",
        ));
}

#[test]
fn feedback_report_from_sample_data() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student1", "--report", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tony Stark got 3 out of 4 correct. Feedback for wrong answers given below",
        ))
        .stdout(predicate::str::contains(
            "Question 1: How many millimetres are in 3.5 centimetres?",
        ))
        .stdout(predicate::str::contains("Your answer: B with value 3.5"))
        .stdout(predicate::str::contains("Correct answer: C with value 35"))
        .stdout(predicate::str::contains(
            "Hint: There are 10 millimetres in 1 centimetre.",
        ));
}

#[test]
fn feedback_congratulates_a_perfect_attempt() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student2", "--report", "feedback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Steve Rogers got 4 out of 4 correct."))
        .stdout(predicate::str::contains(
            "Excellent work! All questions were answered correctly.",
        ));
}

#[test]
fn prompts_when_arguments_are_missing() {
    let dir = initialized_dir();

    generate_in(&dir)
        .write_stdin("student1\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID: "))
        .stdout(predicate::str::contains("Select Report type to generate"))
        .stdout(predicate::str::contains("[3] Feedback"))
        .stdout(predicate::str::contains("times in total"));
}

#[test]
fn empty_report_answer_defaults_to_diagnostic() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student1"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Details by strand given below:"));
}

#[test]
fn unknown_student_gets_no_data_text() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student9", "--report", "diagnostic"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No completed assessments found for student ID: student9",
        ));
}

#[test]
fn unknown_report_type_fails() {
    let dir = initialized_dir();

    generate_in(&dir)
        .args(["--student", "student1", "--report", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown report type: summary"));
}

#[test]
fn missing_data_dir_fails() {
    let dir = TempDir::new().unwrap();

    generate_in(&dir)
        .args(["--student", "student1", "--report", "diagnostic"])
        .arg("--data-dir")
        .arg(dir.path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open data directory"));
}

#[test]
fn data_dir_env_var_is_honoured() {
    let dir = initialized_dir();
    let elsewhere = TempDir::new().unwrap();

    reportgen()
        .current_dir(elsewhere.path())
        .env("HOME", elsewhere.path())
        .env("REPORTGEN_DATA_DIR", dir.path().join("data"))
        .args(["generate", "--student", "student1", "--report", "diagnostic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tony Stark got 6 out of 12 correct."));
}

#[test]
fn explicit_config_file_is_used() {
    let dir = initialized_dir();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        format!("[data]\ndir = \"{}\"\n", dir.path().join("data").display()),
    )
    .unwrap();
    let elsewhere = TempDir::new().unwrap();

    reportgen()
        .current_dir(elsewhere.path())
        .env("HOME", elsewhere.path())
        .args(["generate", "--student", "student2", "--report", "progress"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Steve Rogers has completed Numeracy assessment 2 times in total.",
        ));
}

#[test]
fn missing_config_file_fails() {
    reportgen()
        .args(["generate", "--student", "student1", "--report", "diagnostic"])
        .args(["--config", "/no/such/reportgen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
