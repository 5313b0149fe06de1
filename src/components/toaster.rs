//! Toaster Component
//!
//! Renders the toast queue from `AppContext`.

use comic_admin_core::NoticeTone;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.tone {
                        NoticeTone::Success => "toast",
                        NoticeTone::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.notice.title}</strong>
                                <p class="toast-description">{toast.notice.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
