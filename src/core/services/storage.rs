use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{BACKUP_STORAGE_KEY, SCHEMA_VERSION, STORAGE_KEY};
use crate::core::models::Board;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key {0}")]
    Read(String),
    #[error("failed to write key {0}")]
    Write(String),
    #[error("failed to serialize board: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored board is not valid: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("stored board has unsupported version {0}")]
    UnsupportedVersion(u32),
    #[error("stored board lists the same project more than once")]
    DuplicateIds,
}

/// String key/value persistence the board is written to.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` of the current browser profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Serialize)]
struct StoredBoardRef<'a> {
    version: u32,
    board: &'a Board,
}

#[derive(Deserialize)]
struct StoredBoard {
    version: u32,
    board: Board,
}

/// Where the board in memory came from after startup.
#[derive(Debug)]
pub enum LoadOutcome {
    Stored,
    /// Unversioned board from before the envelope existed.
    Migrated,
    /// Nothing stored yet.
    Seeded,
    /// Stored data was unusable and the seed board replaced it.
    Recovered(StorageError),
}

pub fn encode_board(board: &Board) -> Result<String, StorageError> {
    serde_json::to_string(&StoredBoardRef { version: SCHEMA_VERSION, board })
        .map_err(StorageError::Serialize)
}

/// Decode a stored board. The flag is true for the legacy unversioned layout.
pub fn decode_board(raw: &str) -> Result<(Board, bool), StorageError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(StorageError::Parse)?;

    let (board, legacy) = if value.get("version").is_some() {
        let stored: StoredBoard = serde_json::from_value(value).map_err(StorageError::Parse)?;
        if stored.version != SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion(stored.version));
        }
        (stored.board, false)
    } else {
        let board: Board = serde_json::from_value(value).map_err(StorageError::Parse)?;
        (board, true)
    };

    if board.contains_duplicate_ids() {
        return Err(StorageError::DuplicateIds);
    }
    Ok((board, legacy))
}

pub fn save_board<S: KeyValueStore + ?Sized>(store: &S, board: &Board) -> Result<(), StorageError> {
    let raw = encode_board(board)?;
    store.set(STORAGE_KEY, &raw)
}

/// Read the board, falling back to the seed board when nothing usable is
/// stored. Any board not read back verbatim is written immediately; an
/// unreadable one is first copied to the backup key.
pub fn load_board<S: KeyValueStore + ?Sized>(store: &S, now: DateTime<Utc>) -> (Board, LoadOutcome) {
    let (board, outcome) = match store.get(STORAGE_KEY) {
        Ok(None) => (Board::seed(now), LoadOutcome::Seeded),
        Ok(Some(raw)) => match decode_board(&raw) {
            Ok((board, false)) => return (board, LoadOutcome::Stored),
            Ok((board, true)) => (board, LoadOutcome::Migrated),
            Err(e) => {
                if let Err(backup_err) = store.set(BACKUP_STORAGE_KEY, &raw) {
                    log::error!("Failed to back up unreadable board: {}", backup_err);
                }
                (Board::seed(now), LoadOutcome::Recovered(e))
            }
        },
        Err(e) => (Board::seed(now), LoadOutcome::Recovered(e)),
    };

    if let Err(e) = save_board(store, &board) {
        log::error!("Failed to persist board after load: {}", e);
    }
    (board, outcome)
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::core::models::{ColumnId, Project, ProjectFile};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn stored(store: &MemoryStore) -> String {
        store.raw(STORAGE_KEY).unwrap()
    }

    #[test]
    fn first_run_seeds_and_persists() {
        let store = MemoryStore::default();
        let (board, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Seeded));
        assert_eq!(board, Board::seed(now()));
        let (persisted, legacy) = decode_board(&stored(&store)).unwrap();
        assert!(!legacy);
        assert_eq!(persisted, board);
    }

    #[test]
    fn round_trip_preserves_columns_fields_and_order() {
        let mut board = Board::seed(now());
        let mut extra = Project::draft(now());
        extra.title = "Brochure".to_string();
        extra.add_file(ProjectFile::new("logo.png".into(), "image/png".into(), "blob:x".into()));
        let item = extra.add_line_item();
        extra.set_line_item_cost(&item, 1250.5);
        board.insert_new(extra);
        board.move_project(ColumnId::Progress, 0, ColumnId::Archived, 0, now());

        let store = MemoryStore::default();
        save_board(&store, &board).unwrap();
        let (reloaded, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Stored));
        assert_eq!(reloaded, board);
    }

    #[test]
    fn legacy_layout_is_migrated_into_envelope() {
        let board = Board::seed(now());
        let store = MemoryStore::with(STORAGE_KEY, &serde_json::to_string(&board).unwrap());

        let (loaded, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Migrated));
        assert_eq!(loaded, board);
        assert!(stored(&store).starts_with(r#"{"version":1,"#));
    }

    #[test]
    fn malformed_json_falls_back_to_seed() {
        let store = MemoryStore::with(STORAGE_KEY, "{not json");
        let (board, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Recovered(StorageError::Parse(_))));
        assert_eq!(board, Board::seed(now()));
        assert!(decode_board(&stored(&store)).is_ok());
        assert_eq!(store.raw(BACKUP_STORAGE_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn readable_board_leaves_no_backup() {
        let store = MemoryStore::default();
        save_board(&store, &Board::seed(now())).unwrap();
        load_board(&store, now());
        assert_eq!(store.raw(BACKUP_STORAGE_KEY), None);
    }

    #[test]
    fn legacy_board_with_cleared_due_date_is_kept() {
        let mut board = Board::seed(now());
        let mut project = Project::draft(now());
        project.title = "Client Work".to_string();
        board.insert_new(project);
        let mut value = serde_json::to_value(&board).unwrap();
        value["new"][1]["dueDate"] = serde_json::json!("");
        let store = MemoryStore::with(STORAGE_KEY, &value.to_string());

        let (loaded, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Migrated));
        assert_eq!(loaded.new[1].title, "Client Work");
        assert_eq!(loaded.new[1].due_date, None);
        assert_eq!(loaded.new[0].due_date, board.new[0].due_date);

        let (persisted, legacy) = decode_board(&stored(&store)).unwrap();
        assert!(!legacy);
        assert_eq!(persisted, loaded);
    }

    #[test]
    fn unknown_version_falls_back_to_seed() {
        let store = MemoryStore::with(STORAGE_KEY, r#"{"version":7,"board":{}}"#);
        let (_, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Recovered(StorageError::UnsupportedVersion(7))));
    }

    #[test]
    fn unexpected_shape_is_rejected() {
        assert!(matches!(decode_board(r#"{"todo":[]}"#), Err(StorageError::Parse(_))));
        assert!(matches!(decode_board("[1,2,3]"), Err(StorageError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut board = Board::seed(now());
        let copy = board.new[0].clone();
        board.archived.push(copy);
        let raw = encode_board(&board).unwrap();
        assert!(matches!(decode_board(&raw), Err(StorageError::DuplicateIds)));
    }

    #[test]
    fn write_failure_does_not_lose_loaded_board() {
        let store = MemoryStore { fail_writes: true, ..Default::default() };
        let (board, outcome) = load_board(&store, now());
        assert!(matches!(outcome, LoadOutcome::Seeded));
        assert_eq!(board.len(), 2);
        assert!(save_board(&store, &board).is_err());
    }
}
