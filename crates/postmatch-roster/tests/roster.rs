use std::io::Write;

use postmatch_core::find_best_match;
use postmatch_model::{MatchResult, PostmatchError};
use postmatch_roster::{RosterSource, demo_roster};

#[test]
fn demo_roster_end_to_end() {
    let roster = RosterSource::Demo.load().expect("demo roster");

    let result = find_best_match("CALLE GRAN VIA 31 28013 MADRID", &roster);
    let record = result.record().expect("match");
    assert_eq!(record.display_name(), "María García");
    assert!(result.score().unwrap_or_default() >= 0.9);

    let result = find_best_match("Unrelated text with no address content", &roster);
    assert_eq!(result, MatchResult::NoMatch);
}

#[test]
fn csv_roster_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "name,email,address\n\
         Sin correo,,\"Avda. Diagonal 423, 08036 Barcelona\"\n\
         Juan Rodríguez,demo_juan@example.com,\"Avda. Diagonal 423, 08036 Barcelona\"\n"
    )
    .expect("write roster");

    let roster = RosterSource::from_path(Some(file.path().to_path_buf()))
        .load()
        .expect("csv roster");
    assert_eq!(roster.len(), 1);

    let result = find_best_match("AVDA DIAGONAL 423 08036 BARCELONA", &roster);
    assert_eq!(
        result.record().map(|r| r.email.as_str()),
        Some("demo_juan@example.com")
    );
}

#[test]
fn missing_file_is_an_error() {
    let source = RosterSource::from_path(Some("/nonexistent/roster.csv".into()));
    assert!(matches!(source.load(), Err(PostmatchError::Io(_))));
}

#[test]
fn demo_roster_order_is_stable() {
    let emails: Vec<_> = demo_roster().into_iter().map(|r| r.email).collect();
    assert_eq!(
        emails,
        vec![
            "demo_maria@example.com",
            "demo_juan@example.com",
            "demo_carmen@example.com",
            "demo_jose@example.com",
            "demo_ana@example.com",
        ]
    );
}
