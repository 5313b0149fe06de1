//! Catalog
//!
//! Client-side view over already fetched comics and copies: a joined read
//! model, then filter, sort, page and count it. Nothing here talks to the
//! backend.

mod filter;
mod listing;
pub mod pagination;
mod sort;
mod stats;

pub use filter::{CatalogFilter, FilterOptions};
pub use listing::{build_rows, CatalogRow};
pub use pagination::PageLink;
pub use sort::{SortColumn, SortDirection, SortState};
pub use stats::{CatalogStats, Count};

/// Filtered then sorted rows, ready to paginate
pub fn arrange(rows: &[CatalogRow], filter: &CatalogFilter, sort: SortState) -> Vec<CatalogRow> {
    let mut visible = filter.apply(rows);
    sort.sort(&mut visible);
    visible
}
