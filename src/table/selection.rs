//! Row Selection
//!
//! Single-row selection. Clicking a row always selects it; the row checkbox
//! toggles it. Both return the post-transition value so the caller can report it.

use super::row::RowId;

/// At most one selected row id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: Option<RowId>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected row id
    pub fn selected(&self) -> Option<&RowId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().map(AsRef::<str>::as_ref) == Some(id)
    }

    /// Row click: select `id` unconditionally
    pub fn select(&mut self, id: RowId) -> Option<RowId> {
        self.selected = Some(id);
        self.selected.clone()
    }

    /// Checkbox toggle: clear if `id` is selected, otherwise select it
    pub fn toggle(&mut self, id: RowId) -> Option<RowId> {
        if self.is_selected(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        self.selected.clone()
    }

    /// Clear without reporting
    pub fn reset(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_is_unconditional() {
        let mut selection = RowSelection::new();
        assert_eq!(selection.select("1".into()).as_deref().map(|s| &**s), Some("1"));
        assert_eq!(selection.select("1".into()).as_deref().map(|s| &**s), Some("1"));
        assert!(selection.is_selected("1"));
        assert_eq!(selection.select("2".into()).as_deref().map(|s| &**s), Some("2"));
        assert!(!selection.is_selected("1"));
    }

    #[test]
    fn toggle_flips() {
        let mut selection = RowSelection::new();
        assert_eq!(selection.toggle("2".into()).as_deref().map(|s| &**s), Some("2"));
        assert_eq!(selection.toggle("2".into()), None);
        assert_eq!(selection.toggle("2".into()).as_deref().map(|s| &**s), Some("2"));
    }

    #[test]
    fn toggle_other_row_moves_selection() {
        let mut selection = RowSelection::new();
        selection.select("1".into());
        assert_eq!(selection.toggle("2".into()).as_deref().map(|s| &**s), Some("2"));
        assert!(!selection.is_selected("1"));
    }

    #[test]
    fn reset_clears() {
        let mut selection = RowSelection::new();
        selection.select("1".into());
        selection.reset();
        assert!(selection.selected().is_none());
    }
}
