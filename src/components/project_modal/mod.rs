use chrono::Utc;
use leptos::html::Dialog;
use leptos::prelude::*;

use crate::core::models::Project;

mod billing_tab;
mod details_tab;
mod files_tab;

use billing_tab::BillingTab;
use details_tab::DetailsTab;
use files_tab::FilesTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalTab {
    Details,
    Files,
    Billing,
}

impl ModalTab {
    fn label(&self) -> &'static str {
        match self {
            ModalTab::Details => "Project Details",
            ModalTab::Files => "Files & Documents",
            ModalTab::Billing => "Billing",
        }
    }

    fn all() -> [ModalTab; 3] {
        [ModalTab::Details, ModalTab::Files, ModalTab::Billing]
    }
}

/// Tabbed editor for one project. Edits go to a working copy and only
/// leave the modal through `on_save`; closing discards them.
#[component]
pub fn ProjectModal(
    project: Project,
    #[prop(into)] on_save: Callback<Project>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let working = RwSignal::new(project);
    let active_tab = RwSignal::new(ModalTab::Details);
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if !dialog.open() {
                let _ = dialog.show_modal();
            }
        }
    });

    let handle_save = move |_| {
        let mut project = working.get_untracked();
        project.touch(Utc::now());
        on_save.run(project);
    };

    let handle_delete = move |_| {
        on_delete.run(working.with_untracked(|p| p.id.clone()));
    };

    view! {
        <dialog
            node_ref=dialog_ref
            class="modal project-modal"
            on:cancel=move |ev: web_sys::Event| {
                // Escape closes through the board so the selection is cleared too
                ev.prevent_default();
                on_close.run(());
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <div>
                        <h2>{move || working.with(|p| p.title.clone())}</h2>
                        <p class="modal-subtitle">
                            {move || working.with(|p| {
                                if p.company.is_empty() { "No Company".to_string() } else { p.company.clone() }
                            })}
                        </p>
                    </div>
                    <div class="modal-header-actions">
                        <button class="btn-primary" on:click=handle_save>"Save"</button>
                        <button class="btn-danger" title="Delete project" on:click=handle_delete>"🗑"</button>
                        <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                </div>

                <div class="modal-tabs">
                    {ModalTab::all().into_iter().map(|tab| view! {
                        <button
                            class="modal-tab"
                            class:active=move || active_tab.get() == tab
                            on:click=move |_| active_tab.set(tab)
                        >{tab.label()}</button>
                    }).collect_view()}
                </div>

                <div class="modal-body">
                    {move || match active_tab.get() {
                        ModalTab::Details => view! { <DetailsTab working=working /> }.into_any(),
                        ModalTab::Files => view! { <FilesTab working=working /> }.into_any(),
                        ModalTab::Billing => view! { <BillingTab working=working /> }.into_any(),
                    }}
                </div>
            </div>
        </dialog>
    }
}
