//! Filter Panel Component
//!
//! Edits a local copy of the catalog filter; "Search" applies it. Range
//! inputs commit on change so partial numbers are not rewritten mid-typing.

use std::str::FromStr;

use comic_admin_core::catalog::{CatalogFilter, FilterOptions};
use comic_admin_core::domain::{ComicCategory, CopyCondition};
use leptos::prelude::*;

use crate::store::{use_catalog_store, CatalogStateStoreFields};

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_bound<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn show_bound<T: ToString>(bound: Option<T>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}

/// `<select>` over `(value, label)` choices with an "all" entry
fn choice_select(
    all_label: &'static str,
    choices: impl Fn() -> Vec<(String, String)> + Send + Sync + 'static,
    current: impl Fn() -> String + Copy + Send + Sync + 'static,
    on_pick: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select on:change=move |ev| on_pick(event_target_value(&ev))>
            <option value="" selected=move || current().is_empty()>{all_label}</option>
            {move || choices().into_iter().map(|(value, label)| {
                let selected_value = value.clone();
                view! {
                    <option value=value selected=move || current() == selected_value>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn FilterPanel(
    options: Memo<FilterOptions>,
    on_search: impl Fn(CatalogFilter) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let store = use_catalog_store();
    let draft = RwSignal::new(store.filter().get_untracked());

    let search = move || on_search(draft.get_untracked());
    let reset = move || {
        draft.set(CatalogFilter::default());
        on_search(CatalogFilter::default());
    };

    let same = |v: &String| (v.clone(), v.clone());

    view! {
        <form
            class="filter-panel"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                search();
            }
        >
            <div class="filter-row">
                <input
                    type="text"
                    placeholder="Search by title..."
                    prop:value=move || draft.with(|f| f.title.clone())
                    on:input=move |ev| draft.update(|f| f.title = event_target_value(&ev))
                />
                {choice_select(
                    "All Authors",
                    move || options.with(|o| o.authors.iter().map(same).collect()),
                    move || draft.with(|f| f.author.clone().unwrap_or_default()),
                    move |value| draft.update(|f| f.author = non_empty(value)),
                )}
                {choice_select(
                    "All Publishers",
                    move || options.with(|o| o.publishers.iter().map(same).collect()),
                    move || draft.with(|f| f.publisher.clone().unwrap_or_default()),
                    move |value| draft.update(|f| f.publisher = non_empty(value)),
                )}
                {choice_select(
                    "All Genres",
                    move || options.with(|o| {
                        o.genres.iter().map(|g| (g.code().to_string(), g.label().to_string())).collect()
                    }),
                    move || draft.with(|f| f.genre.map(|g| g.code().to_string()).unwrap_or_default()),
                    move |value| draft.update(|f| f.genre = ComicCategory::from_code(&value)),
                )}
                {choice_select(
                    "All Conditions",
                    || {
                        CopyCondition::options()
                            .into_iter()
                            .map(|(code, label)| (code.to_string(), label.to_string()))
                            .collect()
                    },
                    move || draft.with(|f| f.condition.map(|c| c.code().to_string()).unwrap_or_default()),
                    move |value| draft.update(|f| f.condition = CopyCondition::from_code(&value)),
                )}
            </div>

            <div class="filter-row">
                <label>
                    "Price (€) "
                    <input
                        type="number" step="0.01" min="0" placeholder="min"
                        prop:value=move || draft.with(|f| show_bound(f.min_price))
                        on:change=move |ev| draft.update(|f| f.min_price = parse_bound(&event_target_value(&ev)))
                    />
                    " - "
                    <input
                        type="number" step="0.01" min="0" placeholder="max"
                        prop:value=move || draft.with(|f| show_bound(f.max_price))
                        on:change=move |ev| draft.update(|f| f.max_price = parse_bound(&event_target_value(&ev)))
                    />
                </label>
                <label>
                    "Year "
                    <input
                        type="number" step="1" placeholder="from"
                        prop:value=move || draft.with(|f| show_bound(f.min_year))
                        on:change=move |ev| draft.update(|f| f.min_year = parse_bound(&event_target_value(&ev)))
                    />
                    " - "
                    <input
                        type="number" step="1" placeholder="to"
                        prop:value=move || draft.with(|f| show_bound(f.max_year))
                        on:change=move |ev| draft.update(|f| f.max_year = parse_bound(&event_target_value(&ev)))
                    />
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|f| f.available_only)
                        on:change=move |ev| draft.update(|f| f.available_only = event_target_checked(&ev))
                    />
                    " Available Only"
                </label>
            </div>

            <div class="form-actions">
                <button type="button" class="btn" on:click=move |_| reset()>"Reset"</button>
                <button type="submit" class="btn btn-primary">"Search"</button>
            </div>
        </form>
    }
}
