//! Command-line action tests against seed files.

use std::io::{self, Write};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use common::AppError;
use user_service_lib::{open_registry, run_action, Action};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn default_seed() -> NamedTempFile {
    seed_file(
        &serde_json::json!([
            {"name": "Alex", "birth_date": "1989-02-04"},
            {"name": "Ann", "birth_date": "1991-12-16"},
            {"name": "Max", "birth_date": "2003-02-04"}
        ])
        .to_string(),
    )
}

fn run(action: Action, seed: Option<&NamedTempFile>, input: &str) -> Result<String, AppError> {
    let mut output = Vec::new();
    run_action(
        action,
        seed.map(|file| file.path()),
        io::Cursor::new(input),
        &mut output,
    )?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_list_seeded_users() {
    let seed = default_seed();
    let output = run(Action::List, Some(&seed), "").unwrap();

    assert_eq!(
        output,
        "Alex (1989-02-04)\nAnn (1991-12-16)\nMax (2003-02-04)\n"
    );
}

#[test]
fn test_list_without_seed() {
    let output = run(Action::List, None, "").unwrap();
    assert_eq!(output, "no users\n");
}

#[test]
fn test_birthdays_from_seed() {
    let seed = default_seed();
    let output = run(Action::Birthdays { on: date(2025, 2, 4) }, Some(&seed), "").unwrap();

    assert_eq!(output, "Alex (1989-02-04)\nMax (2003-02-04)\n");
}

#[test]
fn test_check_rejects_seed() {
    let seed = seed_file(r#"[{"name": "Alex", "birth_date": "1990-06-01"}]"#);
    let action = Action::Check {
        name: "Alex".to_string(),
        birth_date: date(1989, 2, 4),
        on: date(2024, 2, 4),
    };

    let err = run(action, Some(&seed), "").unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.user_message(), "check does not use a seed file");
}

#[test]
fn test_check_without_seed() {
    let action = Action::Check {
        name: "Alex".to_string(),
        birth_date: date(1989, 2, 4),
        on: date(2024, 2, 4),
    };

    assert_eq!(run(action, None, "").unwrap(), "yes\n");
}

#[test]
fn test_check_with_empty_name_fails() {
    let action = Action::Check {
        name: String::new(),
        birth_date: date(1989, 2, 4),
        on: date(2024, 2, 4),
    };

    let err = run(action, None, "").unwrap_err();
    assert_eq!(err.user_message(), "Name could not be empty or null");
}

#[test]
fn test_shell_starts_from_seed() {
    let seed = default_seed();
    let output = run(Action::Shell, Some(&seed), "remove Alex\nlist\n").unwrap();

    assert_eq!(
        output,
        "removed 1 user(s)\nAnn (1991-12-16)\nMax (2003-02-04)\n"
    );
}

#[test]
fn test_invalid_seed_record_is_rejected() {
    let seed = seed_file(r#"[{"name": "", "birth_date": "1989-02-04"}]"#);

    let err = run(Action::List, Some(&seed), "").unwrap_err();
    assert!(matches!(err, AppError::Field(_)));
    assert_eq!(err.user_message(), "Name could not be empty or null");
}

#[test]
fn test_malformed_seed_is_rejected() {
    let seed = seed_file("{ not json");

    let err = run(Action::List, Some(&seed), "").unwrap_err();
    assert_eq!(err.code(), "SEED_ERROR");
}

#[test]
fn test_missing_seed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("users.json");

    let err = open_registry(Some(&missing)).err().unwrap();
    assert!(matches!(err, AppError::Io(_)));
}
