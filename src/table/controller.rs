//! Table Controller
//!
//! Pairs a [`TableEngine`] with the single-row selection and decides what the
//! header row and body show. Holds no UI handles, so every interaction can be
//! driven directly.

use std::sync::Arc;

use super::header::Header;
use super::pagination::PageAction;
use super::row::{Row, RowId};
use super::selection::RowSelection;
use super::state::TableEngine;

/// Number of leading data cells drawn pinned/highlighted
pub const DEFAULT_PINNED_CELLS: usize = 2;

/// A body row together with its selection flag
pub struct RowView<'a, R> {
    pub row: Row<'a, R>,
    pub selected: bool,
}

/// What the table body renders
pub enum BodyPlan<'a, R> {
    /// A single "No results." row spanning the whole table
    Empty,
    /// One entry per row of the current page
    Rows(Vec<RowView<'a, R>>),
}

/// Engine + selection state behind the DataTable
pub struct TableController<E: TableEngine> {
    engine: E,
    selection: RowSelection,
    pinned_cells: usize,
}

impl<E: TableEngine> TableController<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            selection: RowSelection::new(),
            pinned_cells: DEFAULT_PINNED_CELLS,
        }
    }

    /// Set how many leading data cells are pinned
    pub fn with_pinned_cells(mut self, pinned_cells: usize) -> Self {
        self.pinned_cells = pinned_cells;
        self
    }

    pub fn set_pinned_cells(&mut self, pinned_cells: usize) {
        self.pinned_cells = pinned_cells;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Currently selected row id
    pub fn selected(&self) -> Option<&RowId> {
        self.selection.selected()
    }

    /// Replace the data; a new collection clears the selection without reporting
    pub fn set_data(&mut self, data: Arc<Vec<E::Record>>) -> bool {
        let changed = self.engine.set_data(data);
        if changed {
            if let Some(previous) = self.selection.selected() {
                tracing::debug!("Data replaced, clearing selection {}", previous);
            }
            self.selection.reset();
        }
        changed
    }

    /// Row click: select the row, then report the selection once
    pub fn click_row(&mut self, id: RowId, on_select: impl FnOnce(Option<RowId>)) {
        let selected = self.selection.select(id);
        tracing::debug!("Row clicked, selected: {:?}", selected);
        on_select(selected);
    }

    /// Row checkbox: toggle the row, then report the selection once
    pub fn toggle_row(&mut self, id: RowId, on_select: impl FnOnce(Option<RowId>)) {
        let selected = self.selection.toggle(id);
        tracing::debug!("Row checkbox toggled, selected: {:?}", selected);
        on_select(selected);
    }

    pub fn apply_page_action(&mut self, action: PageAction) {
        self.engine.apply_page_action(action);
        tracing::debug!("Page action {:?} -> {:?}", action, self.engine.pagination());
    }

    /// Whether the data cell at `cell_index` gets the pinned treatment
    pub fn is_pinned(&self, cell_index: usize) -> bool {
        cell_index < self.pinned_cells
    }

    /// Headers of every group, top level first, laid out in a single row
    pub fn header_row(&self) -> Vec<Header> {
        self.engine
            .header_groups()
            .into_iter()
            .flat_map(|group| group.headers)
            .collect()
    }

    /// Decide the body: rows of the current page or the empty placeholder
    pub fn body(&self) -> BodyPlan<'_, E::Record> {
        let rows = self.engine.row_model();
        if rows.is_empty() {
            return BodyPlan::Empty;
        }

        BodyPlan::Rows(
            rows.into_iter()
                .map(|row| {
                    let selected = self.selection.is_selected(&row.id);
                    RowView { row, selected }
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::ColumnDef;
    use crate::table::state::TableState;

    struct Person {
        id: &'static str,
        name: &'static str,
        age: u32,
    }

    type Controller = TableController<TableState<Person>>;

    fn columns() -> Vec<ColumnDef<Person>> {
        vec![
            ColumnDef::new("name", "Name").accessor(|p: &Person| p.name.into()),
            ColumnDef::new("age", "Age").accessor(|p: &Person| p.age.to_string().into()),
        ]
    }

    fn scenario_data() -> Arc<Vec<Person>> {
        Arc::new(vec![
            Person { id: "1", name: "Ann", age: 30 },
            Person { id: "2", name: "Bo", age: 40 },
        ])
    }

    fn controller(data: Arc<Vec<Person>>) -> Controller {
        TableController::new(TableState::new(columns(), data).with_row_id(|p, _| p.id.into()))
    }

    fn selected_ids(controller: &Controller) -> Vec<String> {
        match controller.body() {
            BodyPlan::Rows(rows) => rows
                .into_iter()
                .filter(|view| view.selected)
                .map(|view| view.row.id.to_string())
                .collect(),
            BodyPlan::Empty => Vec::new(),
        }
    }

    /// Collects every reported selection
    #[derive(Default)]
    struct Reports(Vec<Option<String>>);

    impl Reports {
        fn click(&mut self, controller: &mut Controller, id: &'static str) {
            controller.click_row(id.into(), |s| self.0.push(s.map(|id| id.to_string())));
        }

        fn toggle(&mut self, controller: &mut Controller, id: &'static str) {
            controller.toggle_row(id.into(), |s| self.0.push(s.map(|id| id.to_string())));
        }
    }

    #[test]
    fn scenario_click_click_toggle_replace() {
        let mut controller = controller(scenario_data());
        let mut reports = Reports::default();

        reports.click(&mut controller, "1");
        assert_eq!(controller.selected().map(|s| s.to_string()), Some("1".to_string()));

        reports.click(&mut controller, "2");
        assert_eq!(selected_ids(&controller), vec!["2"]);

        reports.toggle(&mut controller, "2");
        assert!(controller.selected().is_none());

        assert!(controller.set_data(Arc::new(Vec::new())));
        assert!(controller.selected().is_none());

        assert_eq!(
            reports.0,
            vec![Some("1".to_string()), Some("2".to_string()), None]
        );
        assert!(matches!(controller.body(), BodyPlan::Empty));
    }

    #[test]
    fn each_interaction_reports_exactly_once() {
        let mut controller = controller(scenario_data());
        let mut count = 0;

        controller.click_row("1".into(), |_| count += 1);
        assert_eq!(count, 1);
        controller.click_row("1".into(), |_| count += 1);
        assert_eq!(count, 2);
        controller.toggle_row("1".into(), |_| count += 1);
        assert_eq!(count, 3);
        controller.toggle_row("2".into(), |_| count += 1);
        assert_eq!(count, 4);
    }

    #[test]
    fn data_reset_reports_nothing() {
        let mut controller = controller(scenario_data());
        let mut reports = Reports::default();
        reports.click(&mut controller, "2");

        assert!(controller.set_data(scenario_data()));
        assert!(controller.set_data(Arc::new(Vec::new())));

        assert_eq!(reports.0, vec![Some("2".to_string())]);
        assert!(controller.selected().is_none());
    }

    #[test]
    fn click_same_row_is_idempotent() {
        let mut controller = controller(scenario_data());
        let mut reports = Reports::default();
        reports.click(&mut controller, "1");
        reports.click(&mut controller, "1");
        assert_eq!(reports.0, vec![Some("1".to_string()), Some("1".to_string())]);
        assert_eq!(selected_ids(&controller), vec!["1"]);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut controller = controller(scenario_data());
        let mut reports = Reports::default();
        reports.click(&mut controller, "2");
        reports.toggle(&mut controller, "2");
        reports.toggle(&mut controller, "2");
        assert_eq!(
            reports.0,
            vec![Some("2".to_string()), None, Some("2".to_string())]
        );
    }

    #[test]
    fn at_most_one_row_selected() {
        let mut controller = controller(scenario_data());
        let mut reports = Reports::default();
        assert!(selected_ids(&controller).is_empty());
        reports.click(&mut controller, "1");
        reports.toggle(&mut controller, "2");
        assert_eq!(selected_ids(&controller), vec!["2"]);
    }

    #[test]
    fn same_data_reference_keeps_selection() {
        let data = scenario_data();
        let mut controller = controller(data.clone());
        let mut reports = Reports::default();
        reports.click(&mut controller, "1");

        assert!(!controller.set_data(data));
        assert_eq!(selected_ids(&controller), vec!["1"]);
    }

    #[test]
    fn pinned_cells_policy() {
        let controller = controller(scenario_data());
        assert!(controller.is_pinned(0));
        assert!(controller.is_pinned(1));
        assert!(!controller.is_pinned(2));

        let controller = controller.with_pinned_cells(0);
        assert!(!controller.is_pinned(0));
    }

    #[test]
    fn grouped_headers_share_one_row() {
        let columns = vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::group(
                "contact",
                "Contact",
                vec![ColumnDef::new("city", "City"), ColumnDef::new("email", "Email")],
            ),
        ];
        let controller = TableController::new(TableState::<Person>::new(columns, scenario_data()));

        let row = controller.header_row();
        let ids: Vec<_> = row.iter().map(|h| h.column_id.to_string()).collect();
        assert_eq!(ids, vec!["name", "contact", "name", "city", "email"]);
        assert!(row[0].is_placeholder);
        assert_eq!(row[1].col_span, 2);
        assert!(row[2..].iter().all(|h| !h.is_placeholder && h.col_span == 1));
    }

    #[test]
    fn header_row_empty_when_all_columns_hidden() {
        let mut controller = controller(scenario_data());
        controller.engine_mut().set_column_visibility("name", false);
        controller.engine_mut().set_column_visibility("age", false);
        assert!(controller.header_row().is_empty());
    }

    #[test]
    fn body_follows_pagination() {
        let data: Arc<Vec<Person>> = Arc::new(
            (0..12)
                .map(|_| Person { id: "x", name: "Ann", age: 1 })
                .collect(),
        );
        let mut controller = TableController::new(TableState::new(columns(), data));
        controller.apply_page_action(PageAction::Next);

        match controller.body() {
            BodyPlan::Rows(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].row.id.to_string(), "10");
            }
            BodyPlan::Empty => panic!("expected rows"),
        }
    }
}
