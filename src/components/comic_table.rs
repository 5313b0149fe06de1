//! Comic Table Component
//!
//! One page of catalog rows with sortable headers.

use comic_admin_core::catalog::{CatalogRow, SortColumn, SortState};
use comic_admin_core::domain::schema::{format_euro, Cell, Tone};
use leptos::prelude::*;

use super::render_cell;

fn row_cells(row: &CatalogRow) -> Vec<Cell> {
    vec![
        Cell::Strong(row.title.clone()),
        Cell::text(row.author.clone()),
        Cell::text(row.publisher.clone()),
        Cell::badge(row.genre.label(), row.genre.tone()),
        Cell::text(row.price.map(format_euro).unwrap_or_else(|| "N/A".to_string())),
        Cell::text(row.year().map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())),
        match row.condition {
            Some(condition) => Cell::badge(condition.label(), condition.tone()),
            None => Cell::text("-"),
        },
        if row.available {
            Cell::badge("Available", Tone::Green)
        } else {
            Cell::badge("Unavailable", Tone::Gray)
        },
    ]
}

#[component]
pub fn ComicTable(
    rows: Memo<Vec<CatalogRow>>,
    sort: Signal<SortState>,
    on_sort: impl Fn(SortColumn) + Copy + Send + Sync + 'static,
    on_view: impl Fn(CatalogRow) + Copy + Send + Sync + 'static,
    on_edit: impl Fn(CatalogRow) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(CatalogRow) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <table class="entity-table comic-table">
            <thead>
                <tr>
                    {SortColumn::ALL.into_iter().map(|column| view! {
                        <th class="sortable" on:click=move |_| on_sort(column)>
                            {column.header()}
                            " "
                            {move || sort.get().indicator(column)}
                        </th>
                    }).collect_view()}
                    <th class="actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || rows.get().into_iter().map(|row| {
                    let cells = row_cells(&row)
                        .into_iter()
                        .map(|cell| view! { <td>{render_cell(cell)}</td> })
                        .collect_view();
                    let (view_row, edit_row, delete_row) = (row.clone(), row.clone(), row);
                    view! {
                        <tr>
                            {cells}
                            <td class="actions">
                                <button class="btn btn-small" on:click=move |_| on_view(view_row.clone())>"View"</button>
                                <button class="btn btn-small" on:click=move |_| on_edit(edit_row.clone())>"Edit"</button>
                                <button class="btn btn-small btn-danger" on:click=move |_| on_delete(delete_row.clone())>"Delete"</button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
