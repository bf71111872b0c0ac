//! SQLite-backed history store.

use crate::{GameRecord, HistoryError, HistoryStore, NewGameRecord};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::Connection;
use std::path::Path;
use uuid::Uuid;

/// Game history kept in a SQLite database.
///
/// # Example
///
/// ```
/// use checkers_ai::Difficulty;
/// use checkers_history::{HistoryStore, NewGameRecord, PlayerType, SqliteHistoryStore};
///
/// let store = SqliteHistoryStore::open_in_memory()?;
/// store.save(&NewGameRecord {
///     player_name: "GUEST".to_string(),
///     winner: PlayerType::Player,
///     difficulty: Difficulty::Easy,
///     moves: 27,
/// })?;
/// assert_eq!(store.list()?.len(), 1);
/// # Ok::<(), checkers_history::HistoryError>(())
/// ```
pub struct SqliteHistoryStore {
    conn: Connection,
}

impl SqliteHistoryStore {
    /// Opens or creates a database at `path`.
    ///
    /// Missing parent directories are created and the schema is initialized
    /// on first open.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the database
    /// cannot be opened, or schema initialization fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.init_schema()?;
        tracing::debug!(path = %path.display(), "opened history database");
        Ok(store)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self, HistoryError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), HistoryError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS games (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                player_name TEXT NOT NULL,
                winner TEXT NOT NULL,
                difficulty TEXT NOT NULL,
                moves INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }
}

impl HistoryStore for SqliteHistoryStore {
    fn save(&self, record: &NewGameRecord) -> Result<GameRecord, HistoryError> {
        let stored = GameRecord {
            id: Uuid::new_v4(),
            player_name: record.player_name.clone(),
            winner: record.winner,
            difficulty: record.difficulty,
            moves: record.moves,
            // Stored with microsecond precision.
            created_at: Utc::now().trunc_subsecs(6),
        };

        self.conn.execute(
            "INSERT INTO games (id, player_name, winner, difficulty, moves, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                stored.id.to_string(),
                &stored.player_name,
                stored.winner.as_str(),
                stored.difficulty.as_str(),
                i64::from(stored.moves),
                stored
                    .created_at
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        )?;

        tracing::info!(
            id = %stored.id,
            player = %stored.player_name,
            winner = %stored.winner,
            moves = stored.moves,
            "saved game record"
        );
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<GameRecord>, HistoryError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, player_name, winner, difficulty, moves, created_at
             FROM games ORDER BY seq DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, u32>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let records = rows
            .map(|row| -> Result<GameRecord, HistoryError> {
                let (id, player_name, winner, difficulty, moves, created_at) = row?;
                Ok(GameRecord {
                    id: Uuid::parse_str(&id)?,
                    player_name,
                    winner: winner.parse()?,
                    difficulty: difficulty.parse()?,
                    moves,
                    created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
                })
            })
            .collect();
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerType;
    use checkers_ai::Difficulty;

    fn record(name: &str, winner: PlayerType, moves: u32) -> NewGameRecord {
        NewGameRecord {
            player_name: name.to_string(),
            winner,
            difficulty: Difficulty::Medium,
            moves,
        }
    }

    #[test]
    fn open_creates_table() {
        let store = SqliteHistoryStore::open_in_memory().expect("in-memory store");
        let count: i32 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='games'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn save_returns_what_list_reads_back() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        let saved = store.save(&record("NEO", PlayerType::Player, 42)).unwrap();
        assert_eq!(saved.player_name, "NEO");
        assert_eq!(saved.winner, PlayerType::Player);
        assert_eq!(saved.moves, 42);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![saved]);
    }

    #[test]
    fn list_is_newest_first() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        let first = store.save(&record("A", PlayerType::Ai, 10)).unwrap();
        let second = store.save(&record("B", PlayerType::Player, 20)).unwrap();
        let third = store.save(&record("C", PlayerType::Ai, 30)).unwrap();

        let ids: Vec<Uuid> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn ids_are_unique() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        let a = store.save(&record("A", PlayerType::Ai, 1)).unwrap();
        let b = store.save(&record("A", PlayerType::Ai, 1)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn corrupt_rows_are_reported() {
        let store = SqliteHistoryStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO games (id, player_name, winner, difficulty, moves, created_at)
                 VALUES (?1, 'X', 'draw', 'easy', 3, '2024-01-01T00:00:00Z')",
                [Uuid::new_v4().to_string()],
            )
            .unwrap();
        assert!(matches!(store.list(), Err(HistoryError::PlayerType(_))));
    }
}
