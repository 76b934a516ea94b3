use std::sync::Arc;

use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{Board, Project};
use crate::core::services::{load_board, KeyValueStore, LoadOutcome, LocalStorage};
use crate::features::kanban::dnd::MoveRequest;
use crate::features::kanban::services::{delete_project, insert_project, move_project, update_project};

type SharedStorage = Arc<dyn KeyValueStore + Send + Sync>;

/// Single source of truth for the board and the modal it drives.
///
/// Every board mutation goes through one of these methods and ends with an
/// explicit write of the whole board to storage.
#[derive(Clone, Copy)]
pub struct BoardStore {
    pub board: RwSignal<Board>,
    /// Project bound to the modal: an existing one, or an unsaved draft.
    pub selected: RwSignal<Option<Project>>,
    pub modal_open: RwSignal<bool>,
    /// True while `selected` is a draft not yet on the board.
    pub creating: RwSignal<bool>,
    storage: StoredValue<SharedStorage>,
}

impl BoardStore {
    /// Restore the board from storage, seeding it on first run.
    pub fn initialize(storage: SharedStorage) -> Self {
        let (board, outcome) = load_board(storage.as_ref(), Utc::now());
        match &outcome {
            LoadOutcome::Stored => log::info!("Loaded board with {} projects", board.len()),
            LoadOutcome::Migrated => log::info!("Migrated unversioned board with {} projects", board.len()),
            LoadOutcome::Seeded => log::info!("No stored board, seeded demo projects"),
            LoadOutcome::Recovered(e) => log::warn!("Stored board unusable ({}), replaced with demo projects", e),
        }

        Self {
            board: RwSignal::new(board),
            selected: RwSignal::new(None),
            modal_open: RwSignal::new(false),
            creating: RwSignal::new(false),
            storage: StoredValue::new(storage),
        }
    }

    pub fn move_project(&self, request: MoveRequest) {
        let storage = self.storage.get_value();
        move_project(storage.as_ref(), self.board, request);
    }

    /// Open the modal on a fresh draft. The draft only reaches the board on save.
    pub fn create_project(&self) {
        let draft = Project::draft(Utc::now());
        self.creating.set(true);
        self.selected.set(Some(draft));
        self.modal_open.set(true);
    }

    pub fn save_project(&self, mut project: Project) {
        project.touch(Utc::now());
        let storage = self.storage.get_value();
        if self.creating.get_untracked() {
            insert_project(storage.as_ref(), self.board, project);
            self.creating.set(false);
        } else {
            update_project(storage.as_ref(), self.board, project);
        }
        self.close_modal();
    }

    pub fn delete_project(&self, project_id: &str) {
        let storage = self.storage.get_value();
        delete_project(storage.as_ref(), self.board, project_id);
        self.close_modal();
    }

    pub fn select(&self, project: Project) {
        self.creating.set(false);
        self.selected.set(Some(project));
        self.modal_open.set(true);
    }

    /// Close without saving; a pending draft is discarded.
    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.selected.set(None);
        self.creating.set(false);
    }
}

/// Create the store against browser local storage and share it via context.
pub fn provide_board_store() -> BoardStore {
    let store = BoardStore::initialize(Arc::new(LocalStorage));
    provide_context(store);
    store
}

pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
