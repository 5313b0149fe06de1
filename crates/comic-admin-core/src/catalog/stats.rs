//! Catalog statistics

use std::collections::HashMap;

use super::listing::CatalogRow;

/// Entries kept per ranking
const TOP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub authors: Vec<Count>,
    pub publishers: Vec<Count>,
    pub genres: Vec<Count>,
    /// Only rows backed by a copy have a condition
    pub conditions: Vec<Count>,
    pub available: usize,
    pub unavailable: usize,
}

/// Count labels, most frequent first, ties by label
fn ranking<'a>(labels: impl Iterator<Item = &'a str>, limit: Option<usize>) -> Vec<Count> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut ranked: Vec<Count> = counts
        .into_iter()
        .map(|(label, count)| Count { label: label.to_string(), count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

impl CatalogStats {
    pub fn from_rows(rows: &[CatalogRow]) -> Self {
        let available = rows.iter().filter(|r| r.available).count();
        Self {
            authors: ranking(rows.iter().map(|r| r.author.as_str()), Some(TOP)),
            publishers: ranking(rows.iter().map(|r| r.publisher.as_str()), Some(TOP)),
            genres: ranking(rows.iter().map(|r| r.genre.label()), Some(TOP)),
            conditions: ranking(rows.iter().filter_map(|r| r.condition).map(|c| c.label()), None),
            available,
            unavailable: rows.len() - available,
        }
    }

    pub fn total(&self) -> usize {
        self.available + self.unavailable
    }

    /// 0 for an empty catalog
    pub fn available_percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.available as f64 * 100.0 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comic, ComicCopy, CopyCondition, Resource};

    fn row(author: &str, copy: Option<(CopyCondition, bool)>) -> CatalogRow {
        let comic = Comic { author: author.into(), ..Comic::draft() };
        let copy = copy.map(|(condition, available)| ComicCopy {
            condition,
            available,
            ..ComicCopy::draft()
        });
        CatalogRow::new(&comic, copy.as_ref())
    }

    #[test]
    fn test_rankings() {
        let rows = vec![
            row("Sclavi", Some((CopyCondition::Used, true))),
            row("Bonelli", Some((CopyCondition::New, false))),
            row("Sclavi", Some((CopyCondition::New, true))),
            row("Altan", None),
        ];
        let stats = CatalogStats::from_rows(&rows);

        assert_eq!(stats.authors[0], Count { label: "Sclavi".into(), count: 2 });
        assert_eq!(stats.authors[1].label, "Altan");
        assert_eq!(stats.conditions.iter().map(|c| c.count).sum::<usize>(), 3);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.unavailable, 2);
        assert_eq!(stats.available_percentage(), 50.0);
    }

    #[test]
    fn test_top_ten_only() {
        let names: Vec<String> = (0..12).map(|i| format!("Autore {:02}", i)).collect();
        let rows: Vec<_> = names.iter().map(|n| row(n, None)).collect();
        assert_eq!(CatalogStats::from_rows(&rows).authors.len(), 10);
    }

    #[test]
    fn test_empty_catalog() {
        let stats = CatalogStats::from_rows(&[]);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.available_percentage(), 0.0);
    }
}
