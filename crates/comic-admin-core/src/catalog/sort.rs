//! Catalog sorting
//!
//! Single-key and stable: rows that compare equal keep their relative order
//! in both directions.

use std::cmp::Ordering;

use super::listing::CatalogRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Author,
    Publisher,
    Genre,
    Price,
    Year,
    Condition,
    Availability,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Title,
        SortColumn::Author,
        SortColumn::Publisher,
        SortColumn::Genre,
        SortColumn::Price,
        SortColumn::Year,
        SortColumn::Condition,
        SortColumn::Availability,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Title => "Title",
            SortColumn::Author => "Author",
            SortColumn::Publisher => "Publisher",
            SortColumn::Genre => "Genre",
            SortColumn::Price => "Price",
            SortColumn::Year => "Year",
            SortColumn::Condition => "Condition",
            SortColumn::Availability => "Status",
        }
    }

    fn compare(self, a: &CatalogRow, b: &CatalogRow) -> Ordering {
        match self {
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortColumn::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
            SortColumn::Publisher => a.publisher.to_lowercase().cmp(&b.publisher.to_lowercase()),
            SortColumn::Genre => a.genre.code().cmp(b.genre.code()),
            // unpriced rows sort before priced ones
            SortColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortColumn::Year => a.year().cmp(&b.year()),
            SortColumn::Condition => {
                a.condition.map(|c| c.code()).cmp(&b.condition.map(|c| c.code()))
            }
            // unavailable rows first when ascending
            SortColumn::Availability => a.available.cmp(&b.available),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { column: SortColumn::Title, direction: SortDirection::Asc }
    }
}

impl SortState {
    /// Header click: the active ascending column flips to descending,
    /// anything else sorts ascending
    pub fn toggle(self, column: SortColumn) -> Self {
        let direction = if self.column == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { column, direction }
    }

    /// Arrow shown next to the header of `column`, if it is active
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        match (self.column == column, self.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => "↑",
            (true, SortDirection::Desc) => "↓",
        }
    }

    pub fn sort(&self, rows: &mut [CatalogRow]) {
        let column = self.column;
        match self.direction {
            SortDirection::Asc => rows.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Desc => rows.sort_by(|a, b| column.compare(b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comic, Resource};

    fn row(title: &str, author: &str, price: Option<f64>) -> CatalogRow {
        let comic = Comic { title: title.into(), author: author.into(), ..Comic::draft() };
        let mut row = CatalogRow::new(&comic, None);
        row.price = price;
        row
    }

    fn titles(rows: &[CatalogRow]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_toggle() {
        let state = SortState::default();
        let desc = state.toggle(SortColumn::Title);
        assert_eq!(desc.direction, SortDirection::Desc);
        assert_eq!(desc.toggle(SortColumn::Title).direction, SortDirection::Asc);

        let by_price = desc.toggle(SortColumn::Price);
        assert_eq!(by_price, SortState { column: SortColumn::Price, direction: SortDirection::Asc });
    }

    #[test]
    fn test_strings_ignore_case() {
        let mut rows = vec![row("zagor", "", None), row("Alan Ford", "", None), row("Tex", "", None)];
        SortState::default().sort(&mut rows);
        assert_eq!(titles(&rows), vec!["Alan Ford", "Tex", "zagor"]);
    }

    #[test]
    fn test_stable_in_both_directions() {
        let mut rows = vec![
            row("A", "Bonelli", None),
            row("B", "Sclavi", None),
            row("C", "Bonelli", None),
        ];
        let by_author = SortState { column: SortColumn::Author, direction: SortDirection::Asc };
        by_author.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["A", "C", "B"]);

        by_author.toggle(SortColumn::Author).sort(&mut rows);
        assert_eq!(titles(&rows), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_availability_sorts_like_other_columns() {
        let mut rows = vec![row("A", "", None), row("B", "", None), row("C", "", None)];
        rows[0].available = true;
        rows[2].available = true;

        let by_status = SortState::default().toggle(SortColumn::Availability);
        assert_eq!(by_status.indicator(SortColumn::Availability), "↑");
        by_status.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["B", "A", "C"]);

        by_status.toggle(SortColumn::Availability).sort(&mut rows);
        assert_eq!(titles(&rows), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_unpriced_first() {
        let mut rows = vec![row("A", "", Some(9.0)), row("B", "", None), row("C", "", Some(2.0))];
        SortState { column: SortColumn::Price, direction: SortDirection::Asc }.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["B", "C", "A"]);
    }
}
