//! UI Components
//!
//! Leptos components for the tab container, the generic entity manager and
//! the catalog view.

mod cell;
mod entity_manager;
mod entity_form_dialog;
mod entity_table;
mod tab_bar;
mod toaster;
mod catalog_view;
mod filter_panel;
mod comic_table;
mod pagination_bar;
mod statistics_panel;
mod comic_details_dialog;

pub use cell::render_cell;
pub use entity_manager::EntityManager;
pub use entity_form_dialog::EntityFormDialog;
pub use entity_table::EntityTable;
pub use tab_bar::{Tab, TabBar};
pub use toaster::Toaster;
pub use catalog_view::CatalogView;
pub use filter_panel::FilterPanel;
pub use comic_table::ComicTable;
pub use pagination_bar::PaginationBar;
pub use statistics_panel::StatisticsPanel;
pub use comic_details_dialog::ComicDetailsDialog;
