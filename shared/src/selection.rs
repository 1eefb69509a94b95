//! Row selection on the categorization screen.

use crate::Transaction;

/// Keyboard modifiers held while clicking a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
}

impl ClickModifiers {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn toggle() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn range() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Selected transaction ids, in the order they were selected.
/// The last id is the anchor for shift-click ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn last_selected(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that are no longer in the listed transactions
    pub fn retain_visible(&mut self, visible: &[Transaction]) {
        self.ids
            .retain(|id| visible.iter().any(|transaction| &transaction.id == id));
    }

    /// Applies a row click. `visible` is the list in its current display
    /// order and defines what a shift-click range covers.
    pub fn click(&mut self, id: &str, modifiers: ClickModifiers, visible: &[Transaction]) {
        if modifiers.shift && !self.is_empty() {
            self.extend_to(id, visible);
        } else if modifiers.ctrl || modifiers.meta {
            self.toggle(id);
        } else {
            self.select_only(id);
        }
    }

    fn select_only(&mut self, id: &str) {
        self.ids = vec![id.to_string()];
    }

    fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|selected| selected != id);
        } else {
            self.ids.push(id.to_string());
        }
    }

    fn extend_to(&mut self, id: &str, visible: &[Transaction]) {
        let position = |target: &str| visible.iter().position(|transaction| transaction.id == target);

        let (Some(anchor), Some(clicked)) = (self.last_selected().and_then(position), position(id)) else {
            self.select_only(id);
            return;
        };

        let (start, end) = (anchor.min(clicked), anchor.max(clicked));
        for transaction in &visible[start..=end] {
            if !self.contains(&transaction.id) {
                self.ids.push(transaction.id.clone());
            }
        }

        // the clicked row becomes the next anchor
        self.ids.retain(|selected| selected != id);
        self.ids.push(id.to_string());
    }
}

/// Sum of the amounts of the selected transactions
pub fn selected_total(transactions: &[Transaction], selection: &Selection) -> f64 {
    selection
        .ids()
        .iter()
        .filter_map(|id| transactions.iter().find(|transaction| &transaction.id == id))
        .map(|transaction| transaction.amount)
        .sum()
}

/// Number of transactions with an empty, missing or blank category
pub fn uncategorized_count(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|transaction| transaction.is_uncategorized())
        .count()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::format_amount;
    use crate::test_utils::transaction;

    fn rows(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|index| transaction(&format!("tx{}", index), index as f64, None))
            .collect()
    }

    fn id_set(selection: &Selection) -> BTreeSet<String> {
        selection.ids().iter().cloned().collect()
    }

    #[test]
    fn test_plain_click_replaces_selection() {
        let visible = rows(5);
        let mut selection = Selection::new();
        selection.click("tx1", ClickModifiers::plain(), &visible);
        selection.click("tx3", ClickModifiers::plain(), &visible);

        assert_eq!(selection.ids(), ["tx3"]);
    }

    #[test]
    fn test_ctrl_and_meta_click_toggle() {
        let visible = rows(5);
        let mut selection = Selection::new();
        selection.click("tx1", ClickModifiers::plain(), &visible);
        selection.click("tx3", ClickModifiers::toggle(), &visible);
        assert_eq!(selection.ids(), ["tx1", "tx3"]);

        let meta = ClickModifiers { meta: true, ..ClickModifiers::default() };
        selection.click("tx1", meta, &visible);
        assert_eq!(selection.ids(), ["tx3"]);
    }

    #[test]
    fn test_shift_click_selects_range() {
        let visible = rows(6);
        let mut selection = Selection::new();
        selection.click("tx1", ClickModifiers::plain(), &visible);
        selection.click("tx4", ClickModifiers::range(), &visible);

        assert_eq!(
            id_set(&selection),
            ["tx1", "tx2", "tx3", "tx4"].iter().map(|id| id.to_string()).collect()
        );
        assert_eq!(selection.last_selected(), Some("tx4"));
    }

    #[test]
    fn test_shift_click_is_symmetric() {
        let visible = rows(8);
        for (a, b) in [("tx1", "tx5"), ("tx6", "tx2"), ("tx3", "tx3")] {
            let mut forward = Selection::new();
            forward.click(a, ClickModifiers::plain(), &visible);
            forward.click(b, ClickModifiers::range(), &visible);

            let mut backward = Selection::new();
            backward.click(b, ClickModifiers::plain(), &visible);
            backward.click(a, ClickModifiers::range(), &visible);

            assert_eq!(id_set(&forward), id_set(&backward));
        }
    }

    #[test]
    fn test_shift_click_unions_without_duplicates() {
        let visible = rows(8);
        let mut selection = Selection::new();
        selection.click("tx0", ClickModifiers::plain(), &visible);
        selection.click("tx6", ClickModifiers::toggle(), &visible);
        selection.click("tx4", ClickModifiers::range(), &visible);

        assert_eq!(selection.len(), 4);
        assert_eq!(
            id_set(&selection),
            ["tx0", "tx4", "tx5", "tx6"].iter().map(|id| id.to_string()).collect()
        );
    }

    #[test]
    fn test_shift_click_follows_display_order() {
        let mut visible = rows(4);
        visible.reverse();
        let mut selection = Selection::new();
        selection.click("tx3", ClickModifiers::plain(), &visible);
        selection.click("tx2", ClickModifiers::range(), &visible);

        assert_eq!(id_set(&selection).len(), 2);
    }

    #[test]
    fn test_shift_click_with_empty_selection_is_plain() {
        let visible = rows(4);
        let mut selection = Selection::new();
        selection.click("tx2", ClickModifiers::range(), &visible);

        assert_eq!(selection.ids(), ["tx2"]);
    }

    #[test]
    fn test_shift_click_with_missing_anchor_is_plain() {
        let visible = rows(4);
        let mut selection = Selection::new();
        selection.click("gone", ClickModifiers::plain(), &[]);
        selection.click("tx2", ClickModifiers::range(), &visible);

        assert_eq!(selection.ids(), ["tx2"]);
    }

    #[test]
    fn test_retain_visible_drops_missing_rows() {
        let visible = rows(4);
        let mut selection = Selection::new();
        selection.click("tx0", ClickModifiers::plain(), &visible);
        selection.click("tx3", ClickModifiers::range(), &visible);

        selection.retain_visible(&visible[1..3]);
        assert_eq!(selection.ids(), ["tx1", "tx2"]);
    }

    #[test]
    fn test_selected_total() {
        let transactions = vec![
            transaction("a", 12.50, None),
            transaction("b", 7.30, None),
            transaction("c", 100.0, None),
        ];
        let mut selection = Selection::new();
        selection.click("a", ClickModifiers::plain(), &transactions);
        selection.click("b", ClickModifiers::toggle(), &transactions);

        assert_eq!(format_amount(selected_total(&transactions, &selection)), "19.80");
    }

    #[test]
    fn test_selected_total_skips_unknown_ids() {
        let transactions = vec![transaction("a", 5.0, None)];
        let mut selection = Selection::new();
        selection.click("a", ClickModifiers::plain(), &transactions);
        selection.click("zzz", ClickModifiers::toggle(), &transactions);

        assert_eq!(selected_total(&transactions, &selection), 5.0);
    }

    #[test]
    fn test_uncategorized_count() {
        let transactions = vec![
            transaction("a", 1.0, None),
            transaction("b", 1.0, Some("")),
            transaction("c", 1.0, Some("  ")),
            transaction("d", 1.0, Some("BILLS")),
        ];

        assert_eq!(uncategorized_count(&transactions), 3);
    }
}
