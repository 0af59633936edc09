//! Rows and Cells
//!
//! Borrowed views over the caller's records, as produced by the row models.

use gpui::SharedString;

use super::column::ColumnDef;

/// Row identifier
pub type RowId = SharedString;

/// Derives a row id from a record and its index in the data collection
pub type RowIdFn<R> = Box<dyn Fn(&R, usize) -> RowId>;

/// A row of the derived row model
pub struct Row<'a, R> {
    /// Row identifier
    pub id: RowId,
    /// Index in the full data collection
    pub index: usize,
    /// The caller's record
    pub original: &'a R,
}

impl<R> Clone for Row<'_, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            index: self.index,
            original: self.original,
        }
    }
}

impl<R> std::fmt::Debug for Row<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Context handed to cell renderers
pub struct CellContext<'a, R> {
    pub row: &'a Row<'a, R>,
    pub column: &'a ColumnDef<R>,
}

impl<R> CellContext<'_, R> {
    /// The column's accessor value for this row
    pub fn value(&self) -> Option<SharedString> {
        self.column.value(self.row.original)
    }

    /// The row's record
    pub fn record(&self) -> &R {
        self.row.original
    }
}

/// Default row id: the record's index in the data collection
pub fn index_row_id<R>(_record: &R, index: usize) -> RowId {
    index.to_string().into()
}
