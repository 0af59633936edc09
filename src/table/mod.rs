//! Table State
//!
//! Column definitions, header groups, row models, pagination and selection.
//! Nothing in here touches a window; the DataTable component renders from it.

pub mod column;
pub mod controller;
pub mod header;
pub mod pagination;
pub mod row;
pub mod selection;
pub mod state;

pub use column::{ColumnDef, ColumnHeader, ColumnWidth, SpanWidth};
pub use controller::{BodyPlan, RowView, TableController};
pub use header::{Header, HeaderContext, HeaderGroup, LeafColumn};
pub use pagination::{PageAction, PageInfo, PaginationState};
pub use row::{CellContext, Row, RowId};
pub use selection::RowSelection;
pub use state::{TableEngine, TableState};
