use leptos::prelude::*;

use crate::core::models::ColumnId;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::dnd::{make_on_board_dragover, BoardDnd, MoveRequest};
use crate::features::kanban::hooks::use_board_store;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board_store();
    let dnd = BoardDnd::new(Callback::new(move |request: MoveRequest| store.move_project(request)));

    view! {
        <div
            class="kanban-board"
            class:dragging=move || dnd.is_dragging()
            on:dragover=make_on_board_dragover(dnd)
        >
            {ColumnId::ALL.into_iter()
                .map(|column| view! { <KanbanColumn column=column dnd=dnd /> })
                .collect_view()}
        </div>
    }
}
