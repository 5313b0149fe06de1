//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the catalog
//! tab lives here; entity managers keep their own state.

use comic_admin_core::catalog::{CatalogFilter, CatalogRow, SortState};
use comic_admin_core::domain::{Comic, ComicCopy, Resource};
use comic_admin_core::EntityId;
use leptos::prelude::*;
use reactive_stores::Store;

/// Comic being created or edited from the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct ComicForm {
    /// `Some` when editing a stored comic
    pub editing: Option<EntityId>,
    pub draft: Comic,
}

impl ComicForm {
    pub fn new_comic() -> Self {
        Self { editing: None, draft: Comic::draft() }
    }

    pub fn edit(comic: Comic) -> Self {
        Self { editing: comic.id, draft: comic }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() { "Edit Comic Book" } else { "Add New Comic Book" }
    }
}

/// Catalog tab state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Last fetched comics, backend order
    pub comics: Vec<Comic>,
    /// Last fetched copies, backend order
    pub copies: Vec<ComicCopy>,
    /// A fetch is in flight
    pub loading: bool,
    pub filter: CatalogFilter,
    pub sort: SortState,
    /// Current page, 1-based
    pub page: usize,
    /// Row shown in the details dialog
    pub selected: Option<CatalogRow>,
    /// Open comic form
    pub form: Option<ComicForm>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            loading: true,
            page: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}
