//! Comic Details Dialog Component
//!
//! Read-only view of one catalog row.

use comic_admin_core::catalog::CatalogRow;
use comic_admin_core::domain::schema::{format_date, format_euro};
use leptos::prelude::*;

#[component]
pub fn ComicDetailsDialog(
    row: CatalogRow,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
    on_edit: impl Fn(CatalogRow) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let details = [
        ("Author", row.author.clone()),
        ("Publisher", row.publisher.clone()),
        ("Genre", row.genre.label().to_string()),
        ("Published", format_date(row.published_on)),
        ("Price", row.price.map(format_euro).unwrap_or_else(|| "N/A".to_string())),
        ("Condition", row.condition.map(|c| c.label().to_string()).unwrap_or_else(|| "-".to_string())),
        ("Available", if row.available { "Yes" } else { "No" }.to_string()),
        ("Auctionable", if row.auctionable { "Yes" } else { "No" }.to_string()),
    ];
    let description = row.description.clone().filter(|d| !d.trim().is_empty());
    let title = row.title.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">{title}</h3>
                <dl class="details">
                    {details.into_iter().map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    }).collect_view()}
                </dl>
                {description.map(|text| view! { <p class="description">{text}</p> })}
                <div class="form-actions">
                    <button class="btn" on:click=move |_| on_close()>"Close"</button>
                    <button class="btn btn-primary" on:click=move |_| on_edit(row.clone())>"Edit"</button>
                </div>
            </div>
        </div>
    }
}
