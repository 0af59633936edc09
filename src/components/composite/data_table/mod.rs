//! DataTable Component
//!
//! A paginated, single-row-selectable data table.

pub mod data_table;
pub mod pagination;

pub use data_table::{DataTable, RowSelected};
pub use pagination::DataTablePagination;
