//! Pagination
//!
//! Pages are 1-based.

/// Entry of the page navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Links shown without any ellipsis
const MAX_VISIBLE_PAGES: usize = 5;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp `page` into `1..=total` (1 when there are no pages)
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// First and last page always, the current page with its neighbours, and
/// an ellipsis for each gap
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }

    let current = clamp_page(current, total);
    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 3 {
        end = 4;
    }
    if current >= total - 2 {
        start = total - 3;
    }

    let mut links = vec![PageLink::Page(1)];
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total - 1 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total));
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=23).collect();
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&items, 4, 10).is_empty());
    }

    #[test]
    fn test_few_pages_listed_plainly() {
        assert_eq!(page_links(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn test_links_near_start() {
        assert_eq!(page_links(1, 10), vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_links_in_middle() {
        assert_eq!(
            page_links(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_links_near_end() {
        assert_eq!(page_links(9, 10), vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
    }
}
