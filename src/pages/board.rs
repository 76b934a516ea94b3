use leptos::prelude::*;

use crate::components::ProjectModal;
use crate::core::models::Project;
use crate::features::kanban::hooks::provide_board_store;
use crate::features::kanban::{BoardHeader, KanbanBoard};

#[component]
pub fn BoardPage() -> impl IntoView {
    let store = provide_board_store();

    let on_save = Callback::new(move |project: Project| store.save_project(project));
    let on_delete = Callback::new(move |project_id: String| store.delete_project(&project_id));
    let on_close = Callback::new(move |_: ()| store.close_modal());

    view! {
        <div class="kanban-page">
            <div class="main-content">
                <BoardHeader />
                <KanbanBoard />
            </div>

            {move || {
                if !store.modal_open.get() {
                    return None;
                }
                store.selected.get().map(|project| view! {
                    <ProjectModal
                        project=project
                        on_save=on_save
                        on_delete=on_delete
                        on_close=on_close
                    />
                })
            }}
        </div>
    }
}
