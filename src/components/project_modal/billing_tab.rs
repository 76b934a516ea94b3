use leptos::prelude::*;

use crate::config::CURRENCY_SYMBOL;
use crate::core::format::format_currency;
use crate::core::models::{parse_cost, LineItem, Project};
use crate::core::services::{print_document, render_invoice_html};

#[component]
pub fn BillingTab(working: RwSignal<Project>) -> impl IntoView {
    let has_items = move || working.with(|p| !p.line_items.is_empty());

    let print_invoice = move |_| {
        let html = working.with_untracked(render_invoice_html);
        if let Err(e) = print_document(&html) {
            log::warn!("Could not print invoice: {}", e);
        }
    };

    view! {
        <div class="tab-panel billing-tab">
            <div class="tab-toolbar">
                <label>"Line Items"</label>
                <button class="btn-secondary" on:click=move |_| {
                    working.update(|p| { p.add_line_item(); });
                }>"+ Add Line Item"</button>
            </div>

            <Show
                when=has_items
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"No line items added yet"</p>
                        <p class="empty-hint">"Click \"Add Line Item\" to start building your invoice"</p>
                    </div>
                }
            >
                <div class="line-items">
                    <For
                        each=move || working.with(|p| p.line_items.clone())
                        key=|item| item.id.clone()
                        children=move |item: LineItem| line_item_row(working, item)
                    />
                </div>

                <div class="invoice-total">
                    "Total: " {move || working.with(|p| format_currency(p.invoice_total()))}
                </div>

                <div class="invoice-actions">
                    <button class="btn-primary" on:click=print_invoice>"🖶 Print Invoice"</button>
                </div>
            </Show>
        </div>
    }
}

fn line_item_row(working: RwSignal<Project>, item: LineItem) -> impl IntoView {
    let id_for_description = item.id.clone();
    let id_for_cost = item.id.clone();
    let id_for_remove = item.id.clone();

    view! {
        <div class="line-item-row">
            <input
                type="text"
                class="line-item-description"
                placeholder="Description..."
                prop:value=item.description.clone()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    working.update(|p| p.set_line_item_description(&id_for_description, text));
                }
            />
            <div class="line-item-cost">
                <span class="currency-prefix">{CURRENCY_SYMBOL}</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0"
                    prop:value=item.cost.to_string()
                    on:input=move |ev| {
                        let cost = parse_cost(&event_target_value(&ev));
                        working.update(|p| p.set_line_item_cost(&id_for_cost, cost));
                    }
                />
            </div>
            <button class="btn-danger btn-small" title="Remove line item" on:click=move |_| {
                working.update(|p| p.remove_line_item(&id_for_remove));
            }>"×"</button>
        </div>
    }
}
