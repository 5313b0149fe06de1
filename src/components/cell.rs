//! Table cell rendering

use comic_admin_core::domain::schema::Cell;
use leptos::prelude::*;

pub fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Cell::Badge { text, tone } => view! { <span class=tone.css_class()>{text}</span> }.into_any(),
        Cell::Tags { shown, .. } if shown.is_empty() => {
            view! { <span class="muted">"Nessun fumetto"</span> }.into_any()
        }
        Cell::Tags { shown, more } => view! {
            <div class="tag-list">
                {shown.into_iter().map(|tag| view! { <span class="badge badge-outline">{tag}</span> }).collect_view()}
                {(more > 0).then(|| view! { <span class="badge badge-gray">{format!("+{} altri", more)}</span> })}
            </div>
        }
        .into_any(),
    }
}
