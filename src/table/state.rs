//! Table State Engine
//!
//! Derives header groups and the paginated row model from column definitions and
//! a shared data collection. The renderer only talks to [`TableEngine`], so any
//! other table-state computation can be substituted behind it.

use std::collections::HashSet;
use std::sync::Arc;

use gpui::SharedString;

use super::column::ColumnDef;
use super::header::{build_header_groups, visible_leaves, HeaderGroup, LeafColumn};
use super::pagination::{PageAction, PageInfo, PaginationState};
use super::row::{index_row_id, Row, RowIdFn};

/// Table-state capability consumed by the DataTable
pub trait TableEngine: 'static {
    /// Record type of the data collection
    type Record: 'static;

    /// Column definitions, as supplied
    fn columns(&self) -> &[ColumnDef<Self::Record>];

    /// Replace the column definitions
    fn set_columns(&mut self, columns: Vec<ColumnDef<Self::Record>>);

    /// Replace the data collection; returns whether its identity changed
    fn set_data(&mut self, data: Arc<Vec<Self::Record>>) -> bool;

    /// Visible leaf columns, left to right
    fn visible_leaf_columns(&self) -> Vec<LeafColumn>;

    /// Show or hide a leaf column
    fn set_column_visibility(&mut self, column_id: &str, visible: bool);

    /// Header rows, top level first
    fn header_groups(&self) -> Vec<HeaderGroup>;

    /// Number of rows before pagination
    fn core_row_count(&self) -> usize;

    /// Rows of the current page
    fn row_model(&self) -> Vec<Row<'_, Self::Record>>;

    /// Pagination snapshot
    fn pagination(&self) -> PageInfo;

    /// Mutate pagination
    fn apply_page_action(&mut self, action: PageAction);
}

/// In-memory table state: core row model + pagination row model
pub struct TableState<R> {
    columns: Vec<ColumnDef<R>>,
    data: Arc<Vec<R>>,
    row_id: RowIdFn<R>,
    hidden_columns: HashSet<SharedString>,
    pagination: PaginationState,
}

impl<R: 'static> TableState<R> {
    pub fn new(columns: Vec<ColumnDef<R>>, data: Arc<Vec<R>>) -> Self {
        Self {
            columns,
            data,
            row_id: Box::new(index_row_id::<R>),
            hidden_columns: HashSet::new(),
            pagination: PaginationState::default(),
        }
    }

    /// Derive row ids from records instead of their index
    pub fn with_row_id(mut self, row_id: impl Fn(&R, usize) -> SharedString + 'static) -> Self {
        self.row_id = Box::new(row_id);
        self
    }

    fn core_row<'a>(&'a self, index: usize, record: &'a R) -> Row<'a, R> {
        Row {
            id: (self.row_id)(record, index),
            index,
            original: record,
        }
    }

    /// All rows before pagination
    pub fn core_row_model(&self) -> Vec<Row<'_, R>> {
        self.data
            .iter()
            .enumerate()
            .map(|(index, record)| self.core_row(index, record))
            .collect()
    }
}

impl<R: 'static> TableEngine for TableState<R> {
    type Record = R;

    fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    fn set_columns(&mut self, columns: Vec<ColumnDef<R>>) {
        self.columns = columns;
    }

    fn set_data(&mut self, data: Arc<Vec<R>>) -> bool {
        if Arc::ptr_eq(&self.data, &data) {
            return false;
        }
        self.data = data;
        self.pagination.reset_page_index();
        true
    }

    fn visible_leaf_columns(&self) -> Vec<LeafColumn> {
        visible_leaves(&self.columns, &|id: &str| !self.hidden_columns.contains(id))
    }

    fn set_column_visibility(&mut self, column_id: &str, visible: bool) {
        if visible {
            self.hidden_columns.remove(column_id);
        } else {
            self.hidden_columns.insert(SharedString::from(column_id.to_string()));
        }
    }

    fn header_groups(&self) -> Vec<HeaderGroup> {
        build_header_groups(&self.columns, &self.visible_leaf_columns())
    }

    fn core_row_count(&self) -> usize {
        self.data.len()
    }

    fn row_model(&self) -> Vec<Row<'_, R>> {
        let range = self.pagination.page_range(self.data.len());
        let start = range.start;
        self.data[range]
            .iter()
            .enumerate()
            .map(|(offset, record)| self.core_row(start + offset, record))
            .collect()
    }

    fn pagination(&self) -> PageInfo {
        self.pagination.info(self.data.len())
    }

    fn apply_page_action(&mut self, action: PageAction) {
        self.pagination.apply(action, self.data.len());
    }
}
