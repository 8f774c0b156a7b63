use cci_assessment::responses::parse_responses;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const RESPONSES: &str = r#"[
    { "questionId": "comm_clarity_1", "answer": { "option": "b" } },
    { "questionId": "comm_listening_1", "answer": { "likert": 5 } },
    { "questionId": "collab_trust_1", "value": 90 },
    { "questionId": "coach_harmony_1", "answer": { "likert": 2 } }
]"#;

fn cci(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cci"))
        .args(args)
        .current_dir(dir)
        .env_remove("CCI_CONFIG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cci")
}

fn write_responses(dir: &Path) -> String {
    let path = dir.join("responses.json");
    fs::write(&path, RESPONSES).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_fixture_answers_match_question_types() {
    let responses = parse_responses(RESPONSES, Path::new("responses.json"))
        .expect("every fixture answer should normalize");
    assert_eq!(responses.len(), 4);
    assert_eq!(responses[3].value, 40.0);
}

#[test]
fn test_score_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let responses = write_responses(temp_dir.path());

    let output = cci(temp_dir.path(), &["score", &responses, "--format", "json"]);
    assert!(
        output.status.success(),
        "score failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["communicationScore"], 100.0);
    assert_eq!(json["collaborationScore"], 90.0);
    assert_eq!(json["communicationStyle"], "Empathic Clarifier");
    assert_eq!(json["coachScores"]["harmony_followthrough"], 40.0);
    assert_eq!(json["coachDimensions"].as_array().unwrap().len(), 5);
    assert!(json["toolVersion"].is_string());
}

#[test]
fn test_score_markdown_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let responses = write_responses(temp_dir.path());
    let report = temp_dir.path().join("reports").join("profile.md");

    let output = cci(
        temp_dir.path(),
        &[
            "score",
            &responses,
            "-f",
            "markdown",
            "-o",
            report.to_str().unwrap(),
        ],
    );
    assert!(
        output.status.success(),
        "score failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = fs::read_to_string(&report).expect("report should be written");
    assert!(content.starts_with("# CCI Assessment Results"));
    assert!(content.contains("## COACH Framework"));
    assert!(!content.contains('\u{1b}'), "file output must not carry ANSI codes");
}

#[test]
fn test_score_terminal_output() {
    let temp_dir = TempDir::new().unwrap();
    let responses = write_responses(temp_dir.path());

    let output = cci(temp_dir.path(), &["score", &responses, "--plain"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Empathic Clarifier"));
    assert!(stdout.contains("Trust Building"));
}

#[test]
fn test_score_uses_discovered_config_weights() {
    let temp_dir = TempDir::new().unwrap();
    let responses = write_responses(temp_dir.path());
    fs::write(
        temp_dir.path().join(".cci.toml"),
        "[scoring.weights]\ncommunication = 1.0\ncollaboration = 0.0\ncontextual = 0.0\ncoach = 0.0\n",
    )
    .unwrap();

    let output = cci(temp_dir.path(), &["score", &responses, "-f", "json"]);
    assert!(
        output.status.success(),
        "score failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["overallScore"], 100.0);
}

#[test]
fn test_score_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = cci(temp_dir.path(), &["score", "does-not-exist.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.json"));
}

#[test]
fn test_score_rejects_out_of_range_likert() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{ "questionId": "comm_listening_1", "answer": { "likert": 9 } }]"#,
    )
    .unwrap();

    let output = cci(temp_dir.path(), &["score", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("comm_listening_1"));
}

#[test]
fn test_questions_json_by_category() {
    let temp_dir = TempDir::new().unwrap();
    let output = cci(
        temp_dir.path(),
        &["questions", "--category", "coach", "--format", "json"],
    );
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions.iter().all(|q| q["category"] == "coach"));
}

#[test]
fn test_questions_unknown_category_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = cci(temp_dir.path(), &["questions", "--category", "leadership"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("leadership"));
}

#[test]
fn test_validate_catalog_passes() {
    let temp_dir = TempDir::new().unwrap();
    let output = cci(temp_dir.path(), &["validate-catalog"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Catalog OK: 15 questions"));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    let first = cci(temp_dir.path(), &["init"]);
    assert!(first.status.success());
    assert!(temp_dir.path().join(".cci.toml").exists());

    let second = cci(temp_dir.path(), &["init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = cci(temp_dir.path(), &["init", "--force"]);
    assert!(forced.status.success());
}
