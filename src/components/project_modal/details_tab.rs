use leptos::prelude::*;

use crate::core::format::format_timestamp;
use crate::core::models::{parse_due_date, Priority, Project};

#[component]
pub fn DetailsTab(working: RwSignal<Project>) -> impl IntoView {
    view! {
        <div class="tab-panel details-tab">
            <div class="form-grid">
                <div class="form-group">
                    <label for="title">"Project Title"</label>
                    <input
                        id="title"
                        type="text"
                        prop:value=move || working.with(|p| p.title.clone())
                        on:input=move |ev| working.update(|p| p.title = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="company">"Company"</label>
                    <input
                        id="company"
                        type="text"
                        prop:value=move || working.with(|p| p.company.clone())
                        on:input=move |ev| working.update(|p| p.company = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="priority">"Priority"</label>
                    <select
                        id="priority"
                        prop:value=move || working.with(|p| p.priority.as_str())
                        on:change=move |ev| {
                            if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                working.update(|p| p.priority = priority);
                            }
                        }
                    >
                        {Priority::all().into_iter().map(|priority| view! {
                            <option
                                value=priority.as_str()
                                selected=move || working.with(|p| p.priority == priority)
                            >{priority.option_label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="dueDate">"Due Date"</label>
                    <input
                        id="dueDate"
                        type="date"
                        prop:value=move || working.with(|p| {
                            p.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
                        })
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if value.is_empty() {
                                working.update(|p| p.due_date = None);
                            } else if let Some(date) = parse_due_date(&value) {
                                working.update(|p| p.due_date = Some(date));
                            }
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="description">"Project Description"</label>
                <textarea
                    id="description"
                    rows="4"
                    placeholder="Detailed description of the project..."
                    prop:value=move || working.with(|p| p.description.clone())
                    on:input=move |ev| working.update(|p| p.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label for="clientName">"Client Name"</label>
                    <input
                        id="clientName"
                        type="text"
                        prop:value=move || working.with(|p| p.client_name.clone())
                        on:input=move |ev| working.update(|p| p.client_name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="clientMobile">"Client Mobile"</label>
                    <input
                        id="clientMobile"
                        type="text"
                        placeholder="+1 (555) 123-4567"
                        prop:value=move || working.with(|p| p.client_mobile.clone())
                        on:input=move |ev| working.update(|p| p.client_mobile = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-grid timestamps">
                <div>
                    <strong>"Created: "</strong>
                    {move || working.with(|p| format_timestamp(p.created_at))}
                </div>
                <div>
                    <strong>"Last Updated: "</strong>
                    {move || working.with(|p| format_timestamp(p.updated_at))}
                </div>
            </div>
        </div>
    }
}
