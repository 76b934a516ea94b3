use leptos::prelude::*;

use crate::features::kanban::hooks::use_board_store;

#[component]
pub fn BoardHeader() -> impl IntoView {
    let store = use_board_store();

    view! {
        <header class="kanban-header">
            <div class="kanban-header-left">
                <h1>"Project Dashboard"</h1>
                <p class="kanban-subtitle">"Manage your projects with an intuitive Kanban workflow"</p>
            </div>
            <div class="kanban-actions">
                <button class="btn-primary kanban-header-btn" on:click=move |_| store.create_project()>
                    "+ New Project"
                </button>
            </div>
        </header>
    }
}
