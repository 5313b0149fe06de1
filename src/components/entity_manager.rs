//! Entity Manager View
//!
//! One generic list/create/edit/delete screen, instantiated per entity kind.
//! State lives in a `ManagerState` signal; backend calls run on the browser
//! event loop and write their outcome back with `try_update`, so a response
//! arriving after the tab was switched away is dropped.

use std::marker::PhantomData;

use comic_admin_core::domain::schema::FormField;
use comic_admin_core::manager::{self, ManagerState};
use comic_admin_core::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{EntityFormDialog, EntityTable};
use crate::context::use_app_context;

/// Manager screen for `T`, e.g. `<EntityManager<Comic>/>`
#[component]
pub fn EntityManager<T: Resource>(#[prop(optional)] _kind: PhantomData<T>) -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ManagerState::<T>::new());
    let labels = T::KIND.labels();

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let dialog_open = Memo::new(move |_| state.with(|s| s.dialog_open));

    let refresh = move || {
        state.update(|s| s.begin());
        let client = ctx.client();
        spawn_local(async move {
            let result = manager::load::<T, _>(&client).await;
            let _ = state.try_update(|s| s.finish_load(result));
        });
    };

    // Load on mount
    Effect::new(move |_| refresh());

    let submit = move || {
        let (editing, draft) = state.with_untracked(|s| (s.editing, s.draft.clone()));
        state.update(|s| s.begin());
        let client = ctx.client();
        spawn_local(async move {
            let result = manager::save(&client, editing, &draft).await;
            let _ = state.try_update(|s| s.finish_save(result));
        });
    };

    let delete = move |id: EntityId| {
        state.update(|s| s.begin());
        let client = ctx.client();
        spawn_local(async move {
            let result = manager::remove::<T, _>(&client, id).await;
            let _ = state.try_update(|s| s.finish_delete(result));
        });
    };

    let edit = move |item: T| state.update(|s| s.open_edit(&item));
    let edit_field = move |field: FormField<T>, value: String| {
        state.update(|s| s.edit_field(&field, &value));
    };
    let close = move || state.update(|s| s.close_dialog());

    view! {
        <section class="entity-manager">
            <header class="manager-header">
                <h2>{labels.title}</h2>
                <div class="manager-actions">
                    <button class="btn" disabled=move || loading.get() on:click=move |_| refresh()>
                        "Aggiorna"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| state.update(|s| s.open_new())>
                        "+ " {labels.new_action}
                    </button>
                </div>
            </header>

            {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

            <Show when=move || loading.get() && items.with(|i| i.is_empty())>
                <div class="loading">"Caricamento..."</div>
            </Show>

            <EntityTable items=items on_edit=edit on_delete=delete/>

            <Show when=move || dialog_open.get()>
                <EntityFormDialog
                    title=Signal::derive(move || state.with(|s| s.dialog_title()))
                    draft=Signal::derive(move || state.with(|s| s.draft.clone()))
                    busy=loading.into()
                    on_input=edit_field
                    on_submit=submit
                    on_cancel=close
                />
            </Show>
        </section>
    }
}
