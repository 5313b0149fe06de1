//! Catalog end to end: fetched records through filter, sort and paging

use chrono::NaiveDate;
use comic_admin_core::catalog::{
    self, build_rows, pagination, CatalogFilter, CatalogStats, SortColumn, SortState,
};
use comic_admin_core::domain::{Comic, ComicCopy, CopyCondition, Resource};
use comic_admin_core::manager::{self, MockBackend};

fn comic(id: i64, title: &str, year: i32) -> Comic {
    Comic {
        id: Some(id),
        title: title.to_string(),
        author: format!("Autore {}", id),
        publisher: "Bonelli".to_string(),
        published_on: NaiveDate::from_ymd_opt(year, 6, 1),
        ..Comic::draft()
    }
}

#[tokio::test]
async fn test_year_filter_over_three_comics() {
    let backend = MockBackend::with_items(vec![
        comic(1, "Tex", 1948),
        comic(2, "Zagor", 1961),
        comic(3, "Dylan Dog", 1986),
    ]);
    let comics: Vec<Comic> = manager::load(&backend).await.unwrap();
    let rows = build_rows(&comics, &[]);
    assert_eq!(rows.len(), 3);

    let filter = CatalogFilter { min_year: Some(1950), ..Default::default() };
    let visible = catalog::arrange(&rows, &filter, SortState::default());

    let titles: Vec<_> = visible.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Dylan Dog", "Zagor"]);
    assert_eq!(pagination::total_pages(visible.len(), 10), 1);
    assert_eq!(pagination::total_pages(visible.len(), 1), 2);
}

#[test]
fn test_copies_paginate_and_count() {
    let comics: Vec<Comic> = (1..=4).map(|i| comic(i, &format!("Numero {}", i), 1990)).collect();
    let copies: Vec<ComicCopy> = (1..=24)
        .map(|i| ComicCopy {
            id: Some(100 + i),
            comic_id: (i % 4) + 1,
            price: i as f64,
            available: i % 3 != 0,
            condition: if i % 2 == 0 { CopyCondition::New } else { CopyCondition::Used },
            comic: None,
        })
        .collect();

    let rows = build_rows(&comics, &copies);
    assert_eq!(rows.len(), 24);

    let sort = SortState::default().toggle(SortColumn::Price).toggle(SortColumn::Price);
    let visible = catalog::arrange(&rows, &CatalogFilter::default(), sort);
    assert_eq!(visible[0].price, Some(24.0));

    let pages = pagination::total_pages(visible.len(), 10);
    assert_eq!(pages, 3);
    assert_eq!(pagination::page_slice(&visible, pages, 10).len(), 4);

    let stats = CatalogStats::from_rows(&rows);
    assert_eq!(stats.available, 16);
    assert_eq!(stats.conditions.len(), 2);
    assert_eq!(stats.publishers[0].count, 24);
}
