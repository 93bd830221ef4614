//! Pagination and selection state of a [`DataTable`](super::DataTable),
//! kept free of rendering so it can be tested directly.

use std::collections::BTreeSet;
use std::ops::Range;

/// Page position shown by the pager, in either pagination mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based.
    pub page: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Position with `page` clamped into `1..=max(1, total_pages)`.
    pub fn new(page: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// The page one step forward or back, or `None` past either end or while
    /// a fetch is in flight.
    pub fn step(&self, forward: bool, loading: bool) -> Option<usize> {
        if loading {
            None
        } else if forward {
            self.can_next().then(|| self.page + 1)
        } else {
            self.can_prev().then(|| self.page - 1)
        }
    }
}

/// `max(1, ceil(len / rows_per_page))`.
pub fn total_pages(len: usize, rows_per_page: usize) -> usize {
    len.div_ceil(rows_per_page.max(1)).max(1)
}

/// Local pagination plus the selection set over row keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    page: usize,
    rows_per_page: usize,
    selected: BTreeSet<String>,
}

impl TableState {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 1,
            rows_per_page: rows_per_page.max(1),
            selected: BTreeSet::new(),
        }
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Current position for a dataset of `len` rows.
    pub fn page_info(&self, len: usize) -> PageInfo {
        PageInfo::new(self.page, total_pages(len, self.rows_per_page))
    }

    /// Indices of the rows on the current page.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let page = self.page_info(len).page;
        let start = ((page - 1) * self.rows_per_page).min(len);
        let end = (start + self.rows_per_page).min(len);
        start..end
    }

    /// Pull the current page back into range after the data shrank.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page_info(len).page;
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 1;
    }

    pub fn next(&mut self, len: usize) {
        let info = self.page_info(len);
        if info.can_next() {
            self.page = info.page + 1;
        }
    }

    pub fn prev(&mut self, len: usize) {
        let info = self.page_info(len);
        if info.can_prev() {
            self.page = info.page - 1;
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.selected.remove(key) {
            self.selected.insert(key.to_string());
        }
    }

    /// Whether every key of a non-empty dataset is selected.
    pub fn all_selected(&self, keys: &[String]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.selected.contains(key))
    }

    /// Select every row of the dataset, or clear if all already are.
    pub fn toggle_all(&mut self, keys: &[String]) {
        if self.all_selected(keys) {
            self.selected.clear();
        } else {
            self.selected = keys.iter().cloned().collect();
        }
    }

    /// Drop keys no longer present in the dataset.
    pub fn retain(&mut self, keys: &[String]) {
        let present: BTreeSet<&str> = keys.iter().map(String::as_str).collect();
        self.selected.retain(|key| present.contains(key.as_str()));
    }

    /// Selected keys that exist in `keys`, in dataset order.
    pub fn selection(&self, keys: &[String]) -> Vec<String> {
        keys.iter()
            .filter(|key| self.selected.contains(*key))
            .cloned()
            .collect()
    }
}

/// Columns shown in the compact card view.
///
/// `hidden[i]` is column `i`'s hide-on-mobile flag. When any column sets it,
/// every column without it is shown; otherwise only the first `limit`.
pub fn mobile_columns(hidden: &[bool], limit: usize) -> Vec<usize> {
    let visible = (0..hidden.len()).filter(|&i| !hidden[i]);
    if hidden.iter().any(|&h| h) {
        visible.collect()
    } else {
        visible.take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> Vec<String> {
        (1..=n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(23, 5), 5);
        assert_eq!(total_pages(20, 5), 4);
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_empty_table_has_one_page_and_no_navigation() {
        let state = TableState::new(5);
        let info = state.page_info(0);
        assert_eq!(info, PageInfo { page: 1, total_pages: 1 });
        assert!(!info.can_prev());
        assert!(!info.can_next());
        assert_eq!(state.page_range(0), 0..0);
    }

    #[test]
    fn test_paging_through_23_rows() {
        let mut state = TableState::new(5);
        assert!(!state.page_info(23).can_prev());
        for _ in 0..10 {
            state.next(23);
        }
        let info = state.page_info(23);
        assert_eq!(info.page, 5);
        assert!(!info.can_next());
        assert_eq!(state.page_range(23), 20..23);

        state.prev(23);
        assert_eq!(state.page_range(23), 15..20);
    }

    #[test]
    fn test_step_between_pages() {
        let first = PageInfo::new(1, 3);
        assert_eq!(first.step(false, false), None);
        assert_eq!(first.step(true, false), Some(2));

        let middle = PageInfo::new(2, 3);
        assert_eq!(middle.step(false, false), Some(1));
        assert_eq!(middle.step(true, false), Some(3));
        assert_eq!(middle.step(true, true), None);
        assert_eq!(middle.step(false, true), None);

        let last = PageInfo::new(3, 3);
        assert_eq!(last.step(true, false), None);
        assert_eq!(last.step(false, false), Some(2));

        assert_eq!(PageInfo::new(1, 0).step(true, false), None);
    }

    #[test]
    fn test_rows_per_page_change_resets_page() {
        let mut state = TableState::new(5);
        state.next(23);
        state.next(23);
        state.set_rows_per_page(10);
        assert_eq!(state.page_info(23), PageInfo { page: 1, total_pages: 3 });
    }

    #[test]
    fn test_page_clamped_when_data_shrinks() {
        let mut state = TableState::new(5);
        for _ in 0..4 {
            state.next(23);
        }
        assert_eq!(state.page_range(7), 5..7);
        state.clamp(7);
        assert_eq!(state.page_info(7).page, 2);
        state.clamp(0);
        assert_eq!(state.page_info(0).page, 1);
    }

    #[test]
    fn test_select_all_twice_is_empty() {
        let keys = keys(23);
        let mut state = TableState::new(5);
        state.toggle_all(&keys);
        assert_eq!(state.selection(&keys).len(), 23);
        state.toggle_all(&keys);
        assert!(state.selection(&keys).is_empty());
    }

    #[test]
    fn test_select_all_from_partial_selects_everything() {
        let keys = keys(4);
        let mut state = TableState::new(5);
        state.toggle("2");
        assert!(!state.all_selected(&keys));
        state.toggle_all(&keys);
        assert!(state.all_selected(&keys));
        assert!(!state.all_selected(&[]));
    }

    #[test]
    fn test_selection_follows_dataset() {
        let mut state = TableState::new(5);
        state.toggle_all(&keys(5));
        let remaining = vec!["5".to_string(), "1".to_string()];
        assert_eq!(state.selection(&remaining), remaining);

        state.retain(&remaining);
        state.toggle("1");
        assert_eq!(state.selection(&keys(5)), vec!["5".to_string()]);
    }

    #[test]
    fn test_mobile_columns() {
        assert_eq!(mobile_columns(&[false, false, false, false], 2), vec![0, 1]);
        assert_eq!(mobile_columns(&[false, true, false, false], 2), vec![0, 2, 3]);
        assert_eq!(mobile_columns(&[true, true], 2), Vec::<usize>::new());
    }
}
