//! Tab Bar Component
//!
//! Switches between the catalog and the entity managers.

use comic_admin_core::EntityKind;
use leptos::prelude::*;

/// One tab of the container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Catalog,
    Manager(EntityKind),
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Catalog => "Catalogo",
            Tab::Manager(kind) => kind.labels().tab,
        }
    }

    /// Catalog first, then managers in backend order
    pub fn all() -> Vec<Tab> {
        std::iter::once(Tab::Catalog)
            .chain(EntityKind::ALL.into_iter().map(Tab::Manager))
            .collect()
    }
}

/// Tab Bar component
#[component]
pub fn TabBar(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::all().into_iter().map(|tab| {
                let is_active = move || active_tab.get() == tab;
                let tab_class = move || {
                    if is_active() { "tab active" } else { "tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
