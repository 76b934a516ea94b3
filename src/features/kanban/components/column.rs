use leptos::prelude::*;

use crate::core::models::ColumnId;
use crate::features::kanban::components::ProjectCard;
use crate::features::kanban::dnd::{
    make_on_card_dragover, make_on_column_dragover, make_on_dragend, make_on_dragstart, make_on_drop, BoardDnd,
};
use crate::features::kanban::hooks::use_board_store;

#[component]
pub fn KanbanColumn(column: ColumnId, dnd: BoardDnd) -> impl IntoView {
    let store = use_board_store();
    let projects = Memo::new(move |_| store.board.with(|board| board.column(column).clone()));
    let len = Signal::derive(move || projects.with(|p| p.len()));

    view! {
        <div class=format!("kanban-column {}", column.accent_class())>
            <div class="column-header">
                <h3>{column.title()}</h3>
                <span class="project-count">{move || len.get()}</span>
            </div>
            <div
                class="column-content"
                class:drag-over=move || dnd.is_target_column(column)
                on:dragover=make_on_column_dragover(dnd, column, len)
                on:drop=make_on_drop(dnd)
            >
                {move || {
                    projects.get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let project_id = project.id.clone();
                            let project_for_click = project.clone();
                            let activate = Callback::new(move |_: ()| {
                                if !dnd.click_suppressed() {
                                    store.select(project_for_click.clone());
                                }
                            });

                            view! {
                                <div
                                    class="card-slot"
                                    draggable="true"
                                    class:dragging=move || dnd.is_origin(column, index)
                                    on:dragstart=make_on_dragstart(dnd, column, index, project_id)
                                    on:dragover=make_on_card_dragover(dnd, column, index)
                                    on:dragend=make_on_dragend(dnd)
                                >
                                    <ProjectCard project=project on_activate=activate />
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
