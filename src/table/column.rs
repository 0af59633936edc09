//! Column Definition
//!
//! Defines table columns: header content, cell renderer, accessor and nesting.

use gpui::{AnyElement, IntoElement, SharedString};

use super::header::HeaderContext;
use super::row::CellContext;

/// Header content of a column
pub enum ColumnHeader {
    /// Plain text label
    Label(SharedString),
    /// Custom header renderer
    Render(Box<dyn Fn(&HeaderContext) -> AnyElement>),
    /// No header content
    Empty,
}

/// Column definition for the DataTable
pub struct ColumnDef<R> {
    /// Column identifier
    pub id: SharedString,
    /// Header content
    pub header: ColumnHeader,
    /// Value accessor, used when no cell renderer is set
    pub accessor: Option<Box<dyn Fn(&R) -> SharedString>>,
    /// Cell renderer
    pub cell: Option<Box<dyn Fn(&CellContext<'_, R>) -> AnyElement>>,
    /// Child columns; a column with children is a group and owns no cells
    pub columns: Vec<ColumnDef<R>>,
    /// Column width
    pub width: ColumnWidth,
}

/// Column width policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

/// Resolved width of a run of leaf columns (a header with a colspan, or a single cell)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanWidth {
    /// All spanned columns are fixed
    Fixed(f32),
    /// At least one spanned column is flexible; `max` is set only when every
    /// flexible column has one
    Flex { grow: f32, min: f32, max: Option<f32> },
}

impl SpanWidth {
    /// Combine the widths of the spanned leaf columns
    pub fn of(widths: impl IntoIterator<Item = ColumnWidth>) -> Self {
        let mut fixed = 0.0;
        let mut min_total = 0.0;
        let mut max_total = Some(0.0);
        let mut grow = 0.0;
        for width in widths {
            match width {
                ColumnWidth::Fixed(w) => fixed += w,
                ColumnWidth::Flex { min, max } => {
                    grow += 1.0;
                    min_total += min.unwrap_or(0.0);
                    max_total = max_total.zip(max).map(|(total, max)| total + max);
                }
            }
        }

        if grow == 0.0 {
            SpanWidth::Fixed(fixed)
        } else {
            SpanWidth::Flex {
                grow,
                min: fixed + min_total,
                max: max_total.map(|max| fixed + max),
            }
        }
    }
}

impl<R> ColumnDef<R> {
    /// Create a leaf column with a text header
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            header: ColumnHeader::Label(label.into()),
            accessor: None,
            cell: None,
            columns: Vec::new(),
            width: ColumnWidth::default(),
        }
    }

    /// Create a group column spanning `columns`
    pub fn group(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        columns: Vec<ColumnDef<R>>,
    ) -> Self {
        Self {
            columns,
            ..Self::new(id, label)
        }
    }

    /// Set the value accessor
    pub fn accessor(mut self, accessor: impl Fn(&R) -> SharedString + 'static) -> Self {
        self.accessor = Some(Box::new(accessor));
        self
    }

    /// Set the cell renderer
    pub fn cell(mut self, render: impl Fn(&CellContext<'_, R>) -> AnyElement + 'static) -> Self {
        self.cell = Some(Box::new(render));
        self
    }

    /// Replace the header with a custom renderer
    pub fn header(mut self, render: impl Fn(&HeaderContext) -> AnyElement + 'static) -> Self {
        self.header = ColumnHeader::Render(Box::new(render));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Whether this column owns cells
    pub fn is_leaf(&self) -> bool {
        self.columns.is_empty()
    }

    /// Read the accessor value for a record
    pub fn value(&self, record: &R) -> Option<SharedString> {
        self.accessor.as_ref().map(|accessor| accessor(record))
    }

    /// Render the header content; `None` means nothing is drawn
    pub fn render_header(&self, cx: &HeaderContext) -> Option<AnyElement> {
        match &self.header {
            ColumnHeader::Label(label) => Some(label.clone().into_any_element()),
            ColumnHeader::Render(render) => Some(render(cx)),
            ColumnHeader::Empty => None,
        }
    }

    /// Render a cell, falling back to the accessor value as text
    pub fn render_cell(&self, cx: &CellContext<'_, R>) -> Option<AnyElement> {
        match &self.cell {
            Some(render) => Some(render(cx)),
            None => cx.value().map(IntoElement::into_any_element),
        }
    }
}

/// Resolve a column by its index path in the definition tree
pub fn column_at<'a, R>(columns: &'a [ColumnDef<R>], path: &[usize]) -> Option<&'a ColumnDef<R>> {
    let (first, rest) = path.split_first()?;
    let mut column = columns.get(*first)?;
    for index in rest {
        column = column.columns.get(*index)?;
    }
    Some(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
    }

    #[test]
    fn span_width_all_fixed_sums() {
        let width = SpanWidth::of([ColumnWidth::Fixed(100.0), ColumnWidth::Fixed(50.0)]);
        assert_eq!(width, SpanWidth::Fixed(150.0));
    }

    #[test]
    fn span_width_mixed_is_flex() {
        let width = SpanWidth::of([
            ColumnWidth::Fixed(100.0),
            ColumnWidth::Flex { min: Some(40.0), max: None },
            ColumnWidth::default(),
        ]);
        assert_eq!(width, SpanWidth::Flex { grow: 2.0, min: 140.0, max: None });
    }

    #[test]
    fn span_width_keeps_max_when_all_flex_bounded() {
        let width = SpanWidth::of([
            ColumnWidth::Fixed(10.0),
            ColumnWidth::Flex { min: None, max: Some(100.0) },
            ColumnWidth::Flex { min: Some(20.0), max: Some(50.0) },
        ]);
        assert_eq!(width, SpanWidth::Flex { grow: 2.0, min: 30.0, max: Some(160.0) });
    }

    #[test]
    fn column_at_walks_nested_paths() {
        let columns: Vec<ColumnDef<Person>> = vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::group(
                "info",
                "Info",
                vec![ColumnDef::new("first", "First"), ColumnDef::new("last", "Last")],
            ),
        ];

        assert_eq!(column_at(&columns, &[0]).map(|c| &**c.id), Some("id"));
        assert_eq!(column_at(&columns, &[1, 1]).map(|c| &**c.id), Some("last"));
        assert!(column_at(&columns, &[1, 2]).is_none());
        assert!(column_at(&columns, &[]).is_none());
    }

    #[test]
    fn accessor_value() {
        let column = ColumnDef::<Person>::new("name", "Name").accessor(|p| p.name.into());
        assert_eq!(column.value(&Person { name: "Ann" }).as_deref().map(|s| &**s), Some("Ann"));
        assert!(ColumnDef::<Person>::new("x", "X").value(&Person { name: "Bo" }).is_none());
    }
}
