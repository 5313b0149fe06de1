//! Catalog filter
//!
//! Each set criterion is an independent predicate; they run one after the
//! other, so applying a filter twice changes nothing and the order of
//! criteria does not matter.

use crate::domain::{ComicCategory, CopyCondition};

use super::listing::CatalogRow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Case-insensitive substring of the title; empty matches everything
    pub title: String,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<ComicCategory>,
    pub condition: Option<CopyCondition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub available_only: bool,
}

type Predicate<'a> = Box<dyn Fn(&CatalogRow) -> bool + 'a>;

/// Inclusive range check; a missing value fails any set bound
fn within<T: PartialOrd + Copy>(value: Option<T>, min: Option<T>, max: Option<T>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    match value {
        Some(v) => min.map_or(true, |m| v >= m) && max.map_or(true, |m| v <= m),
        None => false,
    }
}

impl CatalogFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn predicates(&self) -> Vec<Predicate<'_>> {
        let mut chain: Vec<Predicate<'_>> = Vec::new();

        let needle = self.title.trim().to_lowercase();
        if !needle.is_empty() {
            chain.push(Box::new(move |row: &CatalogRow| {
                row.title.to_lowercase().contains(&needle)
            }));
        }
        if let Some(author) = &self.author {
            chain.push(Box::new(move |row: &CatalogRow| &row.author == author));
        }
        if let Some(publisher) = &self.publisher {
            chain.push(Box::new(move |row: &CatalogRow| &row.publisher == publisher));
        }
        if let Some(genre) = self.genre {
            chain.push(Box::new(move |row: &CatalogRow| row.genre == genre));
        }
        if let Some(condition) = self.condition {
            chain.push(Box::new(move |row: &CatalogRow| row.condition == Some(condition)));
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            chain.push(Box::new(move |row: &CatalogRow| {
                within(row.price, self.min_price, self.max_price)
            }));
        }
        if self.min_year.is_some() || self.max_year.is_some() {
            chain.push(Box::new(move |row: &CatalogRow| {
                within(row.year(), self.min_year, self.max_year)
            }));
        }
        if self.available_only {
            chain.push(Box::new(move |row: &CatalogRow| row.available));
        }
        chain
    }

    pub fn matches(&self, row: &CatalogRow) -> bool {
        self.predicates().iter().all(|p| p(row))
    }

    /// Rows passing every criterion, in input order
    pub fn apply(&self, rows: &[CatalogRow]) -> Vec<CatalogRow> {
        let mut kept = rows.to_vec();
        for predicate in self.predicates() {
            kept.retain(|row| predicate(row));
        }
        kept
    }
}

/// Choices offered by the filter selects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub authors: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<ComicCategory>,
}

impl FilterOptions {
    /// Sorted, de-duplicated values present in `rows`
    pub fn from_rows(rows: &[CatalogRow]) -> Self {
        fn distinct<T: Ord + Clone>(values: impl Iterator<Item = T>) -> Vec<T> {
            let mut values: Vec<T> = values.collect();
            values.sort();
            values.dedup();
            values
        }

        let mut genres: Vec<ComicCategory> = Vec::new();
        for row in rows {
            if !genres.contains(&row.genre) {
                genres.push(row.genre);
            }
        }
        genres.sort_by_key(|g| g.code());

        Self {
            authors: distinct(rows.iter().map(|r| r.author.clone()).filter(|a| !a.is_empty())),
            publishers: distinct(
                rows.iter().map(|r| r.publisher.clone()).filter(|p| !p.is_empty()),
            ),
            genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comic, Resource};
    use chrono::NaiveDate;

    fn row(title: &str, author: &str, year: i32, price: Option<f64>) -> CatalogRow {
        let comic = Comic {
            id: Some(1),
            title: title.into(),
            author: author.into(),
            published_on: NaiveDate::from_ymd_opt(year, 1, 1),
            ..Comic::draft()
        };
        let mut row = CatalogRow::new(&comic, None);
        row.price = price;
        row.available = price.is_some();
        row
    }

    fn sample() -> Vec<CatalogRow> {
        vec![
            row("Tex", "Bonelli", 1948, Some(5.0)),
            row("Zagor", "Nolitta", 1961, Some(3.5)),
            row("Dylan Dog", "Sclavi", 1986, None),
        ]
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let filter = CatalogFilter { title: "dyLAN".into(), ..Default::default() };
        let rows = filter.apply(&sample());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Dylan Dog");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CatalogFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn test_price_bound_excludes_unpriced() {
        let filter = CatalogFilter { max_price: Some(4.0), ..Default::default() };
        let titles: Vec<_> = filter.apply(&sample()).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Zagor"]);
    }

    #[test]
    fn test_year_range_inclusive() {
        let filter = CatalogFilter { min_year: Some(1961), max_year: Some(1986), ..Default::default() };
        assert_eq!(filter.apply(&sample()).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let filter = CatalogFilter {
            author: Some("Bonelli".into()),
            available_only: true,
            ..Default::default()
        };
        let once = filter.apply(&sample());
        assert_eq!(filter.apply(&once), once);
    }

    #[test]
    fn test_independent_criteria_commute() {
        let by_year = CatalogFilter { min_year: Some(1950), ..Default::default() };
        let by_stock = CatalogFilter { available_only: true, ..Default::default() };
        let a = by_stock.apply(&by_year.apply(&sample()));
        let b = by_year.apply(&by_stock.apply(&sample()));
        assert_eq!(a, b);
        assert!(a.iter().all(|r| by_year.matches(r) && by_stock.matches(r)));
    }

    #[test]
    fn test_filter_options_sorted_unique() {
        let mut rows = sample();
        rows.push(row("Tex Willer", "Bonelli", 1950, None));
        let options = FilterOptions::from_rows(&rows);
        assert_eq!(options.authors, vec!["Bonelli", "Nolitta", "Sclavi"]);
        assert_eq!(options.genres, vec![ComicCategory::Fantasy]);
    }
}
