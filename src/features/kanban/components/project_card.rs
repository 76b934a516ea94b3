use chrono::Utc;
use leptos::prelude::*;

use crate::core::format::format_due_date;
use crate::core::models::Project;

/// Summary card for one project. Stateless; clicking emits `on_activate`.
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] on_activate: Callback<()>,
) -> impl IntoView {
    let badge = project.priority.badge();
    let overdue = project.is_overdue(Utc::now());
    let company = if project.company.is_empty() {
        "No Company".to_string()
    } else {
        project.company.clone()
    };
    let file_count = project.files.len();
    let due = project.due_date.map(format_due_date).unwrap_or_else(|| "No due date".to_string());

    view! {
        <div class="project-card clickable" on:click=move |_| on_activate.run(())>
            <div class="card-header">
                <div class="card-heading">
                    <h4 class="card-title">{project.title.clone()}</h4>
                    <div class="card-company">
                        <span class="card-icon">"🏢"</span>
                        <span class="truncate">{company}</span>
                    </div>
                </div>
                <div class=format!("priority-badge {}", badge.class)>
                    <span class="badge-icon">{badge.icon}</span>
                    {badge.label}
                </div>
            </div>

            {(!project.description.is_empty()).then(|| view! {
                <p class="card-description">{project.description.clone()}</p>
            })}

            <div class="card-footer">
                <div class="card-due" class:overdue=overdue>
                    <span class="card-icon">"📅"</span>
                    <span>{due}</span>
                    {overdue.then(|| view! { <span class="overdue-flag" title="Overdue">"⚠️"</span> })}
                </div>
                {(file_count > 0).then(|| view! {
                    <div class="card-files" title="Attached files">
                        <span class="card-icon">"📄"</span>
                        <span>{file_count}</span>
                    </div>
                })}
            </div>

            {(!project.client_name.is_empty()).then(|| view! {
                <div class="card-client">"Client: " {project.client_name.clone()}</div>
            })}
        </div>
    }
}
