//! Display-side mirror of the contact list. The view keeps the filtered row
//! order, the active search query, and the highlighted row, and maps display
//! rows back to store positions. Rows store their originating index rather
//! than assuming display position equals store position, which is what keeps
//! mutations through a filtered list targeting the right record.

use crate::models::Contact;

/// Filterable, selectable projection of the contact list. Row indices held
/// here are only valid against the record slice most recently passed to
/// `refresh` or `set_filter`; after any store mutation the caller refreshes
/// before trusting a selection again.
pub struct ContactView {
    /// Store indices of the rows currently displayed, in store order.
    rows: Vec<usize>,
    /// Active search query, if any. Matching is a case-insensitive substring
    /// test against the name field only.
    filter: Option<String>,
    /// Highlighted row position within `rows`.
    selected: usize,
}

impl ContactView {
    pub fn new(records: &[Contact]) -> Self {
        let mut view = Self {
            rows: Vec::new(),
            filter: None,
            selected: 0,
        };
        view.refresh(records);
        view
    }

    /// Recompute the displayed rows from the full record list, honoring the
    /// current filter. Always a full recompute; the lists involved are small
    /// enough that incremental diffing would buy nothing.
    pub fn refresh(&mut self, records: &[Contact]) {
        let query = self
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.rows = match query {
            Some(q) => records
                .iter()
                .enumerate()
                .filter(|(_, c)| c.name.to_lowercase().contains(&q))
                .map(|(idx, _)| idx)
                .collect(),
            None => (0..records.len()).collect(),
        };
        self.clamp_selection();
    }

    /// Replace the search query and recompute. `None` or a blank query shows
    /// the full list.
    pub fn set_filter(&mut self, filter: Option<String>, records: &[Contact]) {
        self.filter = filter;
        self.refresh(records);
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Store index behind the highlighted row, if a row is highlighted.
    pub fn selected_store_index(&self) -> Option<usize> {
        self.rows.get(self.selected).copied()
    }

    /// Display position of the highlighted row.
    pub fn selected_row(&self) -> usize {
        self.selected
    }

    /// Store indices of all displayed rows, in display order.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected = 0;
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected = self.rows.len() - 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            ..Contact::default()
        }
    }

    fn names() -> Vec<Contact> {
        vec![
            contact("Alice Archer"),
            contact("Bob Builder"),
            contact("Carol Archer"),
            contact("Дмитрий"),
        ]
    }

    #[test]
    fn empty_filter_shows_everything_in_store_order() {
        let records = names();
        let view = ContactView::new(&records);
        assert_eq!(view.rows(), &[0, 1, 2, 3]);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_name() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.set_filter(Some("archer".into()), &records);
        assert_eq!(view.rows(), &[0, 2]);

        // Every displayed row matches, every hidden row does not.
        for (idx, c) in records.iter().enumerate() {
            let shown = view.rows().contains(&idx);
            assert_eq!(shown, c.name.to_lowercase().contains("archer"));
        }
    }

    #[test]
    fn filter_lowercases_unicode_names() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.set_filter(Some("ДМИТРИЙ".into()), &records);
        assert_eq!(view.rows(), &[3]);
    }

    #[test]
    fn blank_query_restores_the_full_list() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.set_filter(Some("   ".into()), &records);
        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn selection_resolves_to_store_index_through_a_filter() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.set_filter(Some("archer".into()), &records);
        view.move_selection(1);
        // Second displayed row is Carol, store index 2, not display index 1.
        assert_eq!(view.selected_store_index(), Some(2));
    }

    #[test]
    fn refresh_after_delete_clamps_the_selection() {
        let mut records = names();
        let mut view = ContactView::new(&records);
        view.select_last();
        records.pop();
        view.refresh(&records);
        assert_eq!(view.selected_store_index(), Some(records.len() - 1));
    }

    #[test]
    fn selection_movement_clamps_at_both_ends() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.move_selection(-5);
        assert_eq!(view.selected_row(), 0);
        view.move_selection(100);
        assert_eq!(view.selected_row(), records.len() - 1);
    }

    #[test]
    fn empty_result_reports_no_selection() {
        let records = names();
        let mut view = ContactView::new(&records);
        view.set_filter(Some("zzz".into()), &records);
        assert!(view.is_empty());
        assert_eq!(view.selected_store_index(), None);
    }
}
