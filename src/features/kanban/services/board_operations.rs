use chrono::Utc;
use leptos::prelude::*;

use crate::core::models::{Board, Project};
use crate::core::services::{save_board, KeyValueStore};
use crate::features::kanban::dnd::MoveRequest;

// Write the whole board; failures are logged and the in-memory board stays authoritative
pub fn persist_board(store: &dyn KeyValueStore, board_signal: RwSignal<Board>) {
    board_signal.with_untracked(|board| {
        if let Err(e) = save_board(store, board) {
            log::error!("Failed to save board: {}", e);
        }
    });
}

// Apply a finished drag gesture
pub fn move_project(store: &dyn KeyValueStore, board_signal: RwSignal<Board>, request: MoveRequest) {
    let mut moved = false;
    board_signal.update(|board| {
        moved = board.move_project(
            request.from.column,
            request.from.index,
            request.to.column,
            request.to.index,
            Utc::now(),
        );
    });

    if moved {
        log::debug!(
            "Moved project {}[{}] -> {}[{}]",
            request.from.column.as_str(),
            request.from.index,
            request.to.column.as_str(),
            request.to.index
        );
        persist_board(store, board_signal);
    } else {
        log::warn!("Ignoring move from missing slot {}[{}]", request.from.column.as_str(), request.from.index);
    }
}

// Add a newly created project to the end of the "new" column
pub fn insert_project(store: &dyn KeyValueStore, board_signal: RwSignal<Board>, project: Project) {
    log::info!("Created project {}", project.id);
    board_signal.update(|board| board.insert_new(project));
    persist_board(store, board_signal);
}

// Replace an edited project where it currently sits
pub fn update_project(store: &dyn KeyValueStore, board_signal: RwSignal<Board>, project: Project) {
    let project_id = project.id.clone();
    let mut replaced = false;
    board_signal.update(|board| replaced = board.replace(project));

    if replaced {
        log::info!("Saved project {}", project_id);
        persist_board(store, board_signal);
    } else {
        log::warn!("Project {} not found on board, edit dropped", project_id);
    }
}

// Remove a project from whichever column holds it
pub fn delete_project(store: &dyn KeyValueStore, board_signal: RwSignal<Board>, project_id: &str) {
    let mut removed = false;
    board_signal.update(|board| removed = board.remove(project_id).is_some());

    if removed {
        log::info!("Deleted project {}", project_id);
        persist_board(store, board_signal);
    } else {
        log::debug!("Delete of unknown project {} ignored", project_id);
    }
}
