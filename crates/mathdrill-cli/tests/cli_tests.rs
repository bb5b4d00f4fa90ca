//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use mathdrill_core::generator::{generate_for_config, seeded_rng};
use mathdrill_core::model::{Difficulty, Operation, Question, QuizConfig};
use mathdrill_core::report::SessionReport;
use mathdrill_core::session::{QuizEvent, QuizState};

/// A command isolated from the user's real config and stored settings.
fn mathdrill(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mathdrill").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("MATHDRILL_DATA_DIR", home.path().join("data"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mental arithmetic practice"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathdrill"));
}

#[test]
fn generate_is_deterministic_with_seed() {
    let home = TempDir::new().unwrap();
    let args = [
        "generate", "--ops", "add,mul", "--difficulty", "easy", "--count", "10", "--seed", "7",
    ];
    let first = stdout_of(mathdrill(&home).args(args));
    let second = stdout_of(mathdrill(&home).args(args));

    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 10);
    assert!(first.lines().all(|l| l.contains(" + ") || l.contains(" × ")));
}

#[test]
fn generate_json_matches_library() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(mathdrill(&home).args([
        "generate", "--ops", "div", "--difficulty", "hard", "--count", "5", "--seed", "3", "--json",
    ]));
    let questions: Vec<Question> = serde_json::from_str(&out).unwrap();

    let config = QuizConfig {
        operations: [Operation::Division].into_iter().collect(),
        difficulty: Difficulty::Hard,
        question_count: 5,
        ..QuizConfig::default()
    };
    let expected = generate_for_config(&mut seeded_rng(3), &config).unwrap();
    assert_eq!(questions, expected);
}

#[test]
fn generate_without_operations_fails() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["generate", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select at least one operation"));
}

#[test]
fn generate_rejects_unknown_operation() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["generate", "--ops", "add,pow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported operation: pow"));
}

#[test]
fn check_correct_answer() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["check", "--answer", "5.004", "--expected", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn check_incorrect_answer_exits_nonzero() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["check", "--answer", "-7", "--expected", "-6.5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Incorrect. The correct answer was -6.5",
        ));
}

#[test]
fn check_invalid_answer() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["check", "--answer", "12abc", "--expected", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid number"));
}

#[test]
fn config_set_show_reset() {
    let home = TempDir::new().unwrap();

    mathdrill(&home)
        .args(["config", "set", "--ops", "sub,div", "--difficulty", "hard", "--timer", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));
    assert!(home.path().join("data/mentalMathConfig.json").exists());

    let shown = stdout_of(mathdrill(&home).args(["config", "show"]));
    let config: QuizConfig = serde_json::from_str(&shown).unwrap();
    assert_eq!(config.difficulty, Difficulty::Hard);
    assert!(config.timer_enabled);
    assert_eq!(config.timer_seconds, 15);
    assert_eq!(
        config.operation_list(),
        vec![Operation::Subtraction, Operation::Division]
    );

    mathdrill(&home).args(["config", "reset"]).assert().success();
    let shown = stdout_of(mathdrill(&home).args(["config", "show"]));
    let config: QuizConfig = serde_json::from_str(&shown).unwrap();
    assert_eq!(config, QuizConfig::default());
}

#[test]
fn malformed_stored_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("mentalMathConfig.json"), "{{{").unwrap();

    let shown = stdout_of(mathdrill(&home).args(["config", "show"]));
    let config: QuizConfig = serde_json::from_str(&shown).unwrap();
    assert_eq!(config, QuizConfig::default());
}

#[test]
fn play_scripted_quiz_to_the_end() {
    let home = TempDir::new().unwrap();
    let config = QuizConfig {
        operations: [Operation::Addition].into_iter().collect(),
        difficulty: Difficulty::Easy,
        question_count: 5,
        auto_advance: true,
        ..QuizConfig::default()
    };
    let answers: Vec<String> = generate_for_config(&mut seeded_rng(42), &config)
        .unwrap()
        .iter()
        .map(|q| q.correct_answer.to_string())
        .collect();
    let report_path = home.path().join("out/report.json");

    mathdrill(&home)
        .args([
            "play", "--ops", "add", "--difficulty", "easy", "--count", "5", "--no-timer",
            "--auto-advance", "--seed", "42", "--report",
        ])
        .arg(&report_path)
        .write_stdin(answers.join("\n") + "\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz Complete!"))
        .stdout(predicate::str::contains("Excellent!"))
        .stdout(predicate::str::contains("You answered 5 out of 5 questions correctly."));

    let report = SessionReport::load_json(&report_path).unwrap();
    assert_eq!(report.summary.correct_count, 5);
    assert_eq!(report.config, config);

    // The overrides become the stored configuration.
    let shown = stdout_of(mathdrill(&home).args(["config", "show"]));
    let stored: QuizConfig = serde_json::from_str(&shown).unwrap();
    assert_eq!(stored, config);
}

#[test]
fn play_waits_for_enter_after_wrong_answer() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args([
            "play", "--ops", "mul", "--difficulty", "easy", "--count", "5", "--seed", "1",
            "--format", "markdown",
        ])
        .write_stdin("-1\n\n-1\n\n-1\n\n-1\n\n-1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter for the next question"))
        .stdout(predicate::str::contains("Press Enter to see your results"))
        .stdout(predicate::str::contains("# Quiz results"))
        .stdout(predicate::str::contains("More practice needed!"));
}

#[test]
fn play_reports_invalid_input_and_abandons_on_eof() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["play", "--ops", "add", "--count", "5", "--seed", "9"])
        .write_stdin("banana\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid number"))
        .stderr(predicate::str::contains("Quiz abandoned."));
}

#[test]
fn report_renders_saved_session() {
    let home = TempDir::new().unwrap();
    let start = chrono::Utc::now();
    let mut state = QuizState::default();
    state
        .apply(QuizEvent::Start {
            questions: vec![Question {
                text: "9 ÷ 3".into(),
                correct_answer: 3.0,
                operation: Operation::Division,
                difficulty: Difficulty::Easy,
            }],
            at: start,
        })
        .unwrap();
    state.apply(QuizEvent::Submit { raw: "3", at: start }).unwrap();
    state.apply(QuizEvent::Advance { at: start }).unwrap();
    let QuizState::Finished(done) = state else {
        panic!("quiz did not finish");
    };
    let path = home.path().join("session.json");
    SessionReport::new(QuizConfig::default(), &done)
        .save_json(&path)
        .unwrap();

    mathdrill(&home)
        .args(["report", "--format", "md", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | 9 ÷ 3 | 3 | 3 |"));

    let html = home.path().join("session.html");
    mathdrill(&home)
        .args(["report", "--format", "html", "--input"])
        .arg(&path)
        .arg("--output")
        .arg(&html)
        .assert()
        .success();
    assert!(std::fs::read_to_string(&html).unwrap().contains("<html"));
}

#[test]
fn report_missing_file() {
    let home = TempDir::new().unwrap();
    mathdrill(&home)
        .args(["report", "--input", "no_such_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_config() {
    let home = TempDir::new().unwrap();

    mathdrill(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mathdrill.toml"));
    assert!(home.path().join("mathdrill.toml").exists());

    mathdrill(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn explicit_config_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    std::fs::write(
        &path,
        "seed = 5\n[defaults]\noperations = [\"subtraction\"]\nquestion_count = 5\n",
    )
    .unwrap();

    let out = stdout_of(mathdrill(&home).arg("--config").arg(&path).arg("generate"));
    assert_eq!(out.lines().count(), 5);
    assert!(out.lines().all(|l| l.contains(" - ")));

    let again = stdout_of(mathdrill(&home).arg("--config").arg(&path).arg("generate"));
    assert_eq!(out, again);
}
