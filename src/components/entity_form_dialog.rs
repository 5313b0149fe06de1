//! Entity Form Dialog
//!
//! Modal form built from a `Resource`'s field schema. Used by the entity
//! managers and by the catalog for comics.

use comic_admin_core::domain::schema::{parse_flag, FieldKind, FormField};
use comic_admin_core::Resource;
use leptos::prelude::*;

/// Modal with one input per form field
///
/// `on_input` receives raw input text; the field's writer parses it.
#[component]
pub fn EntityFormDialog<T: Resource>(
    title: Signal<&'static str>,
    draft: Signal<T>,
    busy: Signal<bool>,
    on_input: impl Fn(FormField<T>, String) + Copy + Send + Sync + 'static,
    on_submit: impl Fn() + Copy + Send + Sync + 'static,
    on_cancel: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let fields = T::form_fields()
        .into_iter()
        .map(|field| {
            let value = move || draft.with(|d| (field.read)(d));
            view! {
                <div class="form-field">
                    <label for=field.name>
                        {field.label}
                        {field.required.then_some(" *")}
                    </label>
                    {field_input(field, value, on_input)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">{move || title.get()}</h3>
                <form
                    class="entity-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_submit();
                    }
                >
                    {fields}
                    <div class="form-actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel()>
                            "Annulla"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Salvataggio..." } else { "Salva" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input<T: Resource>(
    field: FormField<T>,
    value: impl Fn() -> String + Copy + Send + Sync + 'static,
    on_input: impl Fn(FormField<T>, String) + Copy + Send + Sync + 'static,
) -> AnyView {
    match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=field.name
                rows="3"
                required=field.required
                prop:value=value
                on:input=move |ev| on_input(field, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=field.name
                required=field.required
                on:change=move |ev| on_input(field, event_target_value(&ev))
            >
                {options()
                    .into_iter()
                    .map(|(code, label)| view! {
                        <option value=code selected=move || value() == code>{label}</option>
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Toggle => view! {
            <input
                id=field.name
                type="checkbox"
                prop:checked=move || parse_flag(&value())
                on:change=move |ev| on_input(field, event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        // Numbers commit on change; parsing "12." mid-typing would drop the dot
        kind @ (FieldKind::Integer | FieldKind::Decimal) => view! {
            <input
                id=field.name
                type=kind.input_type()
                step=kind.step()
                required=field.required
                prop:value=value
                on:change=move |ev| on_input(field, event_target_value(&ev))
            />
        }
        .into_any(),
        kind => view! {
            <input
                id=field.name
                type=kind.input_type()
                required=field.required
                prop:value=value
                on:input=move |ev| on_input(field, event_target_value(&ev))
            />
        }
        .into_any(),
    }
}
