//! History stored in a database file survives reopening.

use checkers_ai::Difficulty;
use checkers_core::Color;
use checkers_engine::GameOutcome;
use checkers_history::{HistoryStore, NewGameRecord, PlayerType, SqliteHistoryStore};
use tempfile::TempDir;

#[test]
fn records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("history.db");

    let saved = {
        let store = SqliteHistoryStore::open(&path).unwrap();
        let outcome = GameOutcome {
            winner: Color::Cyan,
            move_count: 57,
        };
        let record = NewGameRecord::from_outcome(&outcome, "TRINITY", Color::Cyan, Difficulty::Hard);
        store.save(&record).unwrap()
    };
    assert!(path.exists());

    let store = SqliteHistoryStore::open(&path).unwrap();
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], saved);
    assert_eq!(listed[0].winner, PlayerType::Player);
    assert_eq!(listed[0].difficulty, Difficulty::Hard);
    assert_eq!(listed[0].moves, 57);
}

#[test]
fn reopening_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.db");

    let store = SqliteHistoryStore::open(&path).unwrap();
    for (name, moves) in [("ONE", 11), ("TWO", 22)] {
        store
            .save(&NewGameRecord {
                player_name: name.to_string(),
                winner: PlayerType::Ai,
                difficulty: Difficulty::Easy,
                moves,
            })
            .unwrap();
    }
    drop(store);

    let store = SqliteHistoryStore::open(&path).unwrap();
    let names: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.player_name)
        .collect();
    assert_eq!(names, vec!["TWO", "ONE"]);
}
