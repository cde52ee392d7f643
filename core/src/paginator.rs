//! Page-window arithmetic over the collection store.
//!
//! Pages are 1-based. `visible_slice` and `page_count` are pure; `Pagination`
//! holds the page size and current page and keeps the current page inside
//! `[1, max(1, page_count)]`.

/// Page size used by the board when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Items `[(page-1)*size, page*size)` of `items`, clamped to its length.
///
/// Page 0, a zero page size, or a page past the end all yield an empty slice.
pub fn visible_slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size).min(items.len());
    let end = current_page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero for an empty collection.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// A page size of zero is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        visible_slice(items, self.current_page, self.page_size)
    }

    /// Page numbers for the pagination bar, `1..=page_count`.
    pub fn page_numbers(&self, len: usize) -> std::ops::RangeInclusive<usize> {
        1..=self.page_count(len)
    }

    /// Move to page `n`, clamped to the pages that exist for `len` items.
    pub fn go_to_page(&mut self, n: usize, len: usize) {
        self.current_page = n;
        self.clamp(len);
    }

    pub fn next_page(&mut self, len: usize) {
        self.go_to_page(self.current_page.saturating_add(1), len);
    }

    pub fn previous_page(&mut self, len: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), len);
    }

    /// Pull the current page back inside `[1, max(1, page_count)]`.
    pub fn clamp(&mut self, len: usize) {
        let last = self.page_count(len).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_concatenate_back_to_the_whole() {
        for len in [0usize, 1, 9, 10, 11, 25, 100] {
            let items: Vec<usize> = (0..len).collect();
            for size in [1usize, 3, 10, 50] {
                let rebuilt: Vec<usize> = (1..=page_count(len, size))
                    .flat_map(|p| visible_slice(&items, p, size).iter().copied())
                    .collect();
                assert_eq!(rebuilt, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn last_partial_page_of_twenty_five() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(page_count(items.len(), 10), 3);
        assert_eq!(visible_slice(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_beyond_data_is_empty() {
        let items = [1, 2, 3];
        assert!(visible_slice(&items, 2, 10).is_empty());
        assert!(visible_slice(&items, 0, 10).is_empty());
        assert!(visible_slice(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn go_to_page_clamps_to_existing_pages() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(7, 25);
        assert_eq!(pagination.current_page(), 3);
        pagination.go_to_page(0, 25);
        assert_eq!(pagination.current_page(), 1);
        pagination.go_to_page(2, 0);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn clamp_after_shrink_keeps_page_non_blank() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(3, 21);
        assert_eq!(pagination.current_page(), 3);
        pagination.clamp(20);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn next_and_previous_stop_at_the_edges() {
        let mut pagination = Pagination::new(10);
        pagination.previous_page(25);
        assert_eq!(pagination.current_page(), 1);
        pagination.next_page(25);
        pagination.next_page(25);
        pagination.next_page(25);
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        assert_eq!(Pagination::new(0).page_size(), 1);
        assert_eq!(Pagination::default().page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_numbers_cover_every_page() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.page_numbers(25).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(pagination.page_numbers(0).count(), 0);
    }
}
