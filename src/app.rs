//! Comic Store Admin App
//!
//! Tab container: the catalog view plus one manager per entity kind.

use comic_admin_core::domain::{
    Auction, Comic, ComicCopy, Order, OrderDetail, Subscription, User, Wishlist,
};
use comic_admin_core::{AppConfig, EntityKind};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CatalogView, EntityManager, Tab, TabBar, Toaster};
use crate::context::AppContext;
use crate::store::CatalogState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(Store::new(CatalogState::new()));

    let (active_tab, set_active_tab) = signal(Tab::Catalog);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Gestione Entità"</h1>
                <p class="subtitle">"Gestisci tutte le entità del sistema di gestione fumetti"</p>
            </header>

            <TabBar active_tab=active_tab set_active_tab=set_active_tab />

            // Inactive tabs are unmounted; a manager refetches when shown again
            <main class="main-content">
                {move || match active_tab.get() {
                    Tab::Catalog => view! { <CatalogView /> }.into_any(),
                    Tab::Manager(kind) => manager_view(kind),
                }}
            </main>

            <Toaster />
        </div>
    }
}

fn manager_view(kind: EntityKind) -> AnyView {
    match kind {
        EntityKind::Users => view! { <EntityManager<User>/> }.into_any(),
        EntityKind::Comics => view! { <EntityManager<Comic>/> }.into_any(),
        EntityKind::Copies => view! { <EntityManager<ComicCopy>/> }.into_any(),
        EntityKind::Auctions => view! { <EntityManager<Auction>/> }.into_any(),
        EntityKind::Orders => view! { <EntityManager<Order>/> }.into_any(),
        EntityKind::OrderDetails => view! { <EntityManager<OrderDetail>/> }.into_any(),
        EntityKind::Wishlists => view! { <EntityManager<Wishlist>/> }.into_any(),
        EntityKind::Subscriptions => view! { <EntityManager<Subscription>/> }.into_any(),
    }
}
