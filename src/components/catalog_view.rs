//! Catalog View
//!
//! Copies joined with their comics, with search/filter, sortable paged
//! table, statistics and a comic form. Outcomes are reported as toasts.

use comic_admin_core::catalog::{
    self, build_rows, pagination, CatalogFilter, CatalogRow, CatalogStats, FilterOptions,
    SortColumn,
};
use comic_admin_core::domain::schema::FormField;
use comic_admin_core::domain::{Comic, ComicCopy, Resource};
use comic_admin_core::manager::{self, ActionError, Stage};
use comic_admin_core::{ApiClient, Notice};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{
    ComicDetailsDialog, EntityFormDialog, ComicTable, FilterPanel, PaginationBar,
    StatisticsPanel,
};
use crate::context::{use_app_context, AppContext};
use crate::store::{use_catalog_store, CatalogStateStoreFields, CatalogStore, ComicForm};

async fn fetch_catalog(client: &ApiClient) -> Result<(Vec<Comic>, Vec<ComicCopy>), ActionError> {
    let comics = manager::load::<Comic, _>(client).await?;
    let copies = manager::load::<ComicCopy, _>(client).await?;
    Ok((comics, copies))
}

/// Copies change when their comic does; refetch them after a comic mutation
async fn refresh_copies(client: &ApiClient, store: CatalogStore, ctx: AppContext) {
    match manager::load::<ComicCopy, _>(client).await {
        Ok(copies) => store.copies().set(copies),
        Err(err) => ctx.notify(Notice::load_failed(&err.source)),
    }
}

#[component]
pub fn CatalogView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let page_size = ctx.page_size();
    let saving = RwSignal::new(false);

    // Derived views
    let rows = Memo::new(move |_| build_rows(&store.comics().read(), &store.copies().read()));
    let visible = Memo::new(move |_| {
        rows.with(|r| catalog::arrange(r, &store.filter().read(), store.sort().get()))
    });
    let stats = Memo::new(move |_| rows.with(|r| CatalogStats::from_rows(r)));
    let options = Memo::new(move |_| rows.with(|r| FilterOptions::from_rows(r)));
    let total_pages =
        Memo::new(move |_| pagination::total_pages(visible.with(|v| v.len()), page_size));
    let current_page =
        Memo::new(move |_| pagination::clamp_page(store.page().get(), total_pages.get()));
    let page_rows = Memo::new(move |_| {
        visible.with(|v| pagination::page_slice(v, current_page.get(), page_size).to_vec())
    });
    let loading = Memo::new(move |_| store.loading().get());
    let has_rows = Memo::new(move |_| rows.with(|r| !r.is_empty()));
    let form_open = Memo::new(move |_| store.form().with(|f| f.is_some()));

    let fetch = move |announce: bool| {
        store.loading().set(true);
        let client = ctx.client();
        spawn_local(async move {
            match fetch_catalog(&client).await {
                Ok((comics, copies)) => {
                    let count = comics.len();
                    store.comics().set(comics);
                    store.copies().set(copies);
                    if announce {
                        ctx.notify(Notice::loaded(count));
                    }
                }
                Err(err) => {
                    log::error!("catalog {}", err);
                    store.comics().set(Vec::new());
                    store.copies().set(Vec::new());
                    if announce {
                        ctx.notify(Notice::load_failed(&err.source));
                    }
                }
            }
            store.loading().set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| fetch(true));

    let save = move || {
        let Some(form) = store.form().get_untracked() else { return };
        let created = form.editing.is_none();
        saving.set(true);
        let client = ctx.client();
        spawn_local(async move {
            match manager::save(&client, form.editing, &form.draft).await {
                Ok(comics) => {
                    store.comics().set(comics);
                    store.form().set(None);
                    refresh_copies(&client, store, ctx).await;
                    ctx.notify(Notice::saved(&form.draft.title, created));
                }
                Err(err) if err.stage == Stage::Load => {
                    store.form().set(None);
                    ctx.notify(Notice::load_failed(&err.source));
                }
                Err(err) => ctx.notify(Notice::save_failed(&err.source, created)),
            }
            saving.set(false);
        });
    };

    let delete = move |row: CatalogRow| {
        let Some(id) = row.comic_id else { return };
        let client = ctx.client();
        spawn_local(async move {
            match manager::remove::<Comic, _>(&client, id).await {
                Ok(comics) => {
                    store.comics().set(comics);
                    refresh_copies(&client, store, ctx).await;
                    ctx.notify(Notice::deleted(&row.title));
                }
                Err(err) if err.stage == Stage::Load => ctx.notify(Notice::load_failed(&err.source)),
                Err(err) => ctx.notify(Notice::delete_failed(&err.source)),
            }
        });
    };

    let search = move |filter: CatalogFilter| {
        store.filter().set(filter);
        store.page().set(1);
    };
    let sort_by = move |column: SortColumn| store.sort().update(|s| *s = s.toggle(column));
    let view_row = move |row: CatalogRow| store.selected().set(Some(row));
    let edit_row = move |row: CatalogRow| {
        store.selected().set(None);
        store.form().set(Some(ComicForm::edit(row.comic())));
    };
    let edit_field = move |field: FormField<Comic>, value: String| {
        store.form().update(|form| {
            if let Some(form) = form {
                (field.write)(&mut form.draft, &value);
            }
        });
    };
    let close_form = move || store.form().set(None);

    view! {
        <section class="catalog">
            <header class="manager-header">
                <h2>"Comic Book Store Management"</h2>
                <button
                    class="btn btn-primary"
                    on:click=move |_| store.form().set(Some(ComicForm::new_comic()))
                >
                    "+ Add New Comic Book"
                </button>
            </header>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading comic books..."</div> }.into_any()
                } else if !has_rows.get() {
                    view! {
                        <div class="card backend-required">
                            <div class="backend-icon">"🔌"</div>
                            <h3>"Backend Server Required"</h3>
                            <p>
                                "To view and manage comic books, start the backend server at "
                                <code>{ctx.api_base_url()}</code>
                            </p>
                            <button class="btn" on:click=move |_| fetch(true)>
                                "🔄 Retry Connection"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card">
                            <h3>"Search & Filter"</h3>
                            <FilterPanel options=options on_search=search />
                        </div>
                        <div class="card">
                            <ComicTable
                                rows=page_rows
                                sort=Signal::derive(move || store.sort().get())
                                on_sort=sort_by
                                on_view=view_row
                                on_edit=edit_row
                                on_delete=delete
                            />
                            <PaginationBar
                                current=current_page
                                total=total_pages
                                on_select=move |page| store.page().set(page)
                            />
                            <p class="muted">
                                {move || format!("{} of {} comic books", visible.with(|v| v.len()), rows.with(|r| r.len()))}
                            </p>
                        </div>
                        <StatisticsPanel stats=stats />
                    }
                    .into_any()
                }
            }}

            {move || store.selected().get().map(|row| view! {
                <ComicDetailsDialog
                    row=row
                    on_close=move || store.selected().set(None)
                    on_edit=edit_row
                />
            })}

            <Show when=move || form_open.get()>
                <EntityFormDialog
                    title=Signal::derive(move || {
                        store.form().with(|f| f.as_ref().map(ComicForm::title).unwrap_or_default())
                    })
                    draft=Signal::derive(move || {
                        store.form().with(|f| f.as_ref().map(|f| f.draft.clone()).unwrap_or_else(Comic::draft))
                    })
                    busy=saving.into()
                    on_input=edit_field
                    on_submit=save
                    on_cancel=close_form
                />
            </Show>
        </section>
    }
}
