use serde::Serialize;

/// Number of rows rendered per table page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Pages shown on each side of the current page in the pager.
const PAGE_WINDOW: usize = 2;

/// Page selection applied to a list query (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first item on the selected page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// A single page of items along with the pager layout.
///
/// `pages` lists the page numbers to render; `None` marks a gap that the
/// template renders as an ellipsis.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        let page = page.max(1);
        Self {
            items,
            page,
            pages: page_window(page, total_pages),
        }
    }
}

fn page_window(current: usize, total_pages: usize) -> Vec<Option<usize>> {
    let mut pages = Vec::new();
    if total_pages == 0 {
        return pages;
    }

    let start = current.saturating_sub(PAGE_WINDOW).clamp(1, total_pages);
    let end = current.saturating_add(PAGE_WINDOW).min(total_pages);

    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }

    pages.extend((start..=end).map(Some));

    if end < total_pages {
        if end + 1 < total_pages {
            pages.push(None);
        }
        pages.push(Some(total_pages));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_without_gaps_for_small_totals() {
        let paginated = Paginated::new(vec![1, 2, 3], 2, 3);

        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn window_inserts_gaps_around_current_page() {
        let paginated = Paginated::new(Vec::<i32>::new(), 10, 20);

        assert_eq!(
            paginated.pages,
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn empty_result_has_no_pages() {
        let paginated = Paginated::new(Vec::<i32>::new(), 1, 0);

        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn offset_treats_page_zero_as_first() {
        let pagination = Pagination {
            page: 0,
            per_page: 20,
        };

        assert_eq!(pagination.offset(), 0);
        assert_eq!(
            Pagination {
                page: 3,
                per_page: 20
            }
            .offset(),
            40
        );
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), usize::MAX);

        let paginated = Paginated::new(Vec::<i32>::new(), usize::MAX, 3);
        assert_eq!(paginated.pages, vec![Some(1), None, Some(3)]);
    }
}
