//! Catalog rows
//!
//! One row per copy, joined with its comic. A comic with no copies still
//! shows up once, unpriced and unavailable.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::domain::{Comic, ComicCategory, ComicCopy, CopyCondition, EntityId};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub comic_id: Option<EntityId>,
    pub copy_id: Option<EntityId>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub genre: ComicCategory,
    pub description: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub auctionable: bool,
    pub price: Option<f64>,
    pub condition: Option<CopyCondition>,
    pub available: bool,
}

impl CatalogRow {
    pub fn new(comic: &Comic, copy: Option<&ComicCopy>) -> Self {
        Self {
            comic_id: comic.id,
            copy_id: copy.and_then(|c| c.id),
            title: comic.title.clone(),
            author: comic.author.clone(),
            publisher: comic.publisher.clone(),
            genre: comic.category,
            description: comic.description.clone(),
            published_on: comic.published_on,
            auctionable: comic.auctionable,
            price: copy.map(|c| c.price),
            condition: copy.map(|c| c.condition),
            available: copy.map(|c| c.available).unwrap_or(false),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.published_on.map(|d| d.year())
    }

    /// The comic half of the row, for editing
    pub fn comic(&self) -> Comic {
        Comic {
            id: self.comic_id,
            title: self.title.clone(),
            author: self.author.clone(),
            publisher: self.publisher.clone(),
            description: self.description.clone(),
            published_on: self.published_on,
            auctionable: self.auctionable,
            category: self.genre,
        }
    }

    /// Stable identity for keyed rendering
    pub fn key(&self) -> (Option<EntityId>, Option<EntityId>) {
        (self.comic_id, self.copy_id)
    }
}

/// Join copies with their comics
///
/// Copies come first in backend order; a copy whose comic is neither
/// embedded nor fetched is dropped.
pub fn build_rows(comics: &[Comic], copies: &[ComicCopy]) -> Vec<CatalogRow> {
    let mut rows = Vec::with_capacity(copies.len() + comics.len());
    let mut covered = HashSet::new();

    for copy in copies {
        let comic = copy.comic.as_ref().or_else(|| {
            let id = copy.comic_ref()?;
            comics.iter().find(|c| c.id == Some(id))
        });
        match comic {
            Some(comic) => {
                covered.insert(comic.id);
                rows.push(CatalogRow::new(comic, Some(copy)));
            }
            None => log::debug!("copy {:?} has no known comic", copy.id),
        }
    }

    rows.extend(
        comics
            .iter()
            .filter(|c| !covered.contains(&c.id))
            .map(|c| CatalogRow::new(c, None)),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;

    fn comic(id: EntityId, title: &str) -> Comic {
        Comic { id: Some(id), title: title.to_string(), ..Comic::draft() }
    }

    fn copy(id: EntityId, comic_id: EntityId, price: f64) -> ComicCopy {
        ComicCopy { id: Some(id), comic_id, price, ..ComicCopy::draft() }
    }

    #[test]
    fn test_copies_join_by_foreign_key() {
        let comics = vec![comic(1, "Tex"), comic(2, "Zagor")];
        let copies = vec![copy(10, 2, 4.5), copy(11, 2, 3.0)];

        let rows = build_rows(&comics, &copies);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].title, "Zagor");
        assert_eq!(rows[0].price, Some(4.5));
        assert_eq!(rows[2].title, "Tex");
        assert_eq!(rows[2].price, None);
        assert!(!rows[2].available);
    }

    #[test]
    fn test_embedded_comic_wins() {
        let comics = vec![comic(1, "Tex")];
        let mut embedded = copy(10, 1, 2.0);
        embedded.comic = Some(comic(1, "Tex Willer"));

        let rows = build_rows(&comics, &[embedded]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Tex Willer");
    }

    #[test]
    fn test_orphan_copy_dropped() {
        let rows = build_rows(&[], &[copy(10, 99, 1.0)]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_row_comic_round_trip() {
        let mut original = comic(5, "Dylan Dog");
        original.published_on = NaiveDate::from_ymd_opt(1986, 10, 1);
        let row = CatalogRow::new(&original, None);
        assert_eq!(row.comic(), original);
        assert_eq!(row.year(), Some(1986));
    }
}
