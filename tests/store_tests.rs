//! Session store tests

use std::fs;

use tempfile::TempDir;

use tui_breakout::core::OutcomeSink;
use tui_breakout::store::ScoreStore;
use tui_breakout::types::SessionOutcome;

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("session.json")
}

#[test]
fn test_missing_file_loads_as_empty_record() {
    let dir = TempDir::new().unwrap();
    let store = ScoreStore::open(store_path(&dir));

    assert_eq!(store.high_score(), 0);
    assert_eq!(store.record().last_score, 0);
    assert_eq!(store.record().outcome(), None);
}

#[test]
fn test_malformed_file_loads_as_empty_record() {
    let dir = TempDir::new().unwrap();
    fs::write(store_path(&dir), "not json at all").unwrap();

    let store = ScoreStore::open(store_path(&dir));
    assert_eq!(store.high_score(), 0);
}

#[test]
fn test_malformed_numeric_value_loads_as_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(store_path(&dir), r#"{"highScore": "nine thousand"}"#).unwrap();

    let store = ScoreStore::open(store_path(&dir));
    assert_eq!(store.high_score(), 0);
}

#[test]
fn test_unknown_result_type_is_not_an_outcome() {
    let dir = TempDir::new().unwrap();
    fs::write(
        store_path(&dir),
        r#"{"highScore": 100, "lastScore": 100, "resultType": "won"}"#,
    )
    .unwrap();

    let store = ScoreStore::open(store_path(&dir));
    assert_eq!(store.high_score(), 100);
    assert_eq!(store.record().outcome(), None);
}

#[test]
fn test_record_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = ScoreStore::open(store_path(&dir));
        store.record_high_score(300);
        store.record_outcome(300, SessionOutcome::Clear);
    }

    let store = ScoreStore::open(store_path(&dir));
    assert_eq!(store.high_score(), 300);
    assert_eq!(store.record().last_score, 300);
    assert_eq!(store.record().outcome(), Some(SessionOutcome::Clear));
}

#[test]
fn test_persisted_keys_keep_their_names() {
    let dir = TempDir::new().unwrap();
    let mut store = ScoreStore::open(store_path(&dir));
    store.record_high_score(10);
    store.record_outcome(10, SessionOutcome::Over);

    let contents = fs::read_to_string(store_path(&dir)).unwrap();
    assert!(contents.contains("\"highScore\""));
    assert!(contents.contains("\"lastScore\""));
    assert!(contents.contains("\"resultType\""));
    assert!(contents.contains("\"over\""));
}

#[test]
fn test_high_score_never_decreases() {
    let dir = TempDir::new().unwrap();

    let mut store = ScoreStore::open(store_path(&dir));
    store.record_high_score(50);
    store.record_high_score(30);
    assert_eq!(store.high_score(), 50);

    // The lower value must not have reached the disk either.
    let reopened = ScoreStore::open(store_path(&dir));
    assert_eq!(reopened.high_score(), 50);
}

#[test]
fn test_reload_picks_up_what_was_persisted() {
    let dir = TempDir::new().unwrap();

    let mut writer = ScoreStore::open(store_path(&dir));
    let mut reader = ScoreStore::open(store_path(&dir));
    assert_eq!(reader.record().outcome(), None);

    writer.record_outcome(700, SessionOutcome::Over);

    let record = reader.reload();
    assert_eq!(record.last_score, 700);
    assert_eq!(record.outcome(), Some(SessionOutcome::Over));
}

#[test]
fn test_outcome_is_stored_in_its_string_form() {
    let dir = TempDir::new().unwrap();
    let mut store = ScoreStore::open(store_path(&dir));

    store.record_outcome(0, SessionOutcome::Over);
    assert_eq!(store.record().result_type.as_deref(), Some("over"));

    store.record_outcome(0, SessionOutcome::Clear);
    assert_eq!(store.record().result_type.as_deref(), Some("clear"));
}
