//! Entity Table
//!
//! Renders any `Resource` list through its column schema.

use comic_admin_core::{EntityId, Resource};
use leptos::prelude::*;

use super::render_cell;

/// Table of `items` with edit/delete actions per row
///
/// Delete fires immediately; there is no confirmation step.
#[component]
pub fn EntityTable<T: Resource>(
    items: Memo<Vec<T>>,
    on_edit: impl Fn(T) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(EntityId) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let columns = T::columns();
    let headers = columns
        .iter()
        .map(|column| view! { <th>{column.header}</th> })
        .collect_view();
    let span = (columns.len() + 1).to_string();

    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    {headers}
                    <th class="actions">"Azioni"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = items.get();
                    if rows.is_empty() {
                        return view! {
                            <tr>
                                <td class="empty" colspan=span.clone()>"Nessun elemento trovato"</td>
                            </tr>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|item| {
                            let cells = columns
                                .iter()
                                .map(|column| view! { <td>{render_cell((column.render)(&item))}</td> })
                                .collect_view();
                            let id = item.id();
                            view! {
                                <tr>
                                    {cells}
                                    <td class="actions">
                                        <button class="btn btn-small" on:click=move |_| on_edit(item.clone())>
                                            "Modifica"
                                        </button>
                                        {id.map(|id| view! {
                                            <button class="btn btn-small btn-danger" on:click=move |_| on_delete(id)>
                                                "Elimina"
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
