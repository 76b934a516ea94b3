use leptos::html::Input;
use leptos::prelude::*;

use crate::core::models::{Project, ProjectFile};
use crate::core::services::{download_file, files_from_input, preview_file, FileKind};

#[component]
pub fn FilesTab(working: RwSignal<Project>) -> impl IntoView {
    let input_ref: NodeRef<Input> = NodeRef::new();

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let handle_upload = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        match files_from_input(&input) {
            Ok(files) => {
                log::debug!("Attached {} files", files.len());
                working.update(|p| files.into_iter().for_each(|f| p.add_file(f)));
            }
            Err(e) => log::error!("Failed to read selected files: {}", e),
        }
    };

    let has_files = move || working.with(|p| !p.files.is_empty());

    view! {
        <div class="tab-panel files-tab">
            <div class="tab-toolbar">
                <label>"Files & Documents"</label>
                <button class="btn-secondary" on:click=open_picker>"⇪ Upload Files"</button>
            </div>

            <input node_ref=input_ref type="file" multiple class="hidden" on:change=handle_upload />

            <Show
                when=has_files
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No files uploaded yet"</p>
                        <p class="empty-hint">"Click \"Upload Files\" to add documents"</p>
                    </div>
                }
            >
                <div class="file-list">
                    <For
                        each=move || working.with(|p| p.files.clone())
                        key=|file| file.id.clone()
                        children=move |file: ProjectFile| file_row(working, file)
                    />
                </div>
            </Show>
        </div>
    }
}

fn file_row(working: RwSignal<Project>, file: ProjectFile) -> impl IntoView {
    let icon = FileKind::from_mime(&file.mime_type).icon();
    let for_preview = file.clone();
    let for_download = file.clone();
    let file_id = file.id.clone();

    view! {
        <div class="file-row">
            <div class="file-info">
                <span class="file-icon">{icon}</span>
                <span class="file-name">{file.name.clone()}</span>
            </div>
            <div class="file-actions">
                <button class="btn-secondary btn-small" on:click=move |_| {
                    if let Err(e) = preview_file(&for_preview) {
                        log::warn!("Preview of {} failed: {}", for_preview.name, e);
                    }
                }>"👁 Preview"</button>
                <button class="btn-secondary btn-small" on:click=move |_| {
                    if let Err(e) = download_file(&for_download) {
                        log::warn!("Download of {} failed: {}", for_download.name, e);
                    }
                }>"⭳ Download"</button>
                <button class="btn-danger btn-small" title="Remove file" on:click=move |_| {
                    working.update(|p| p.remove_file(&file_id));
                }>"×"</button>
            </div>
        </div>
    }
}
