//! Header Groups
//!
//! Derives one header group per depth level from a (possibly nested) column tree.
//! Leaf columns always sit in the bottom group. A leaf that is shallower than the
//! deepest leaf is represented by placeholder headers in the levels between its
//! parent and the bottom, so every group spans the same set of leaf columns.

use std::ops::Range;

use gpui::SharedString;

use super::column::{ColumnDef, ColumnWidth};

/// A visible leaf column, addressed by its index path in the definition tree
#[derive(Debug, Clone, PartialEq)]
pub struct LeafColumn {
    pub id: SharedString,
    pub path: Vec<usize>,
    pub width: ColumnWidth,
}

impl LeafColumn {
    /// Nesting depth (0 for top-level columns)
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// One derived header cell
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub id: SharedString,
    pub column_id: SharedString,
    /// Index path of the column this header renders
    pub column_path: Vec<usize>,
    pub depth: usize,
    pub col_span: usize,
    pub is_placeholder: bool,
    /// Visible leaf columns spanned by this header
    pub leaves: Range<usize>,
}

/// One derived header row
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderGroup {
    pub id: SharedString,
    pub depth: usize,
    pub headers: Vec<Header>,
}

/// Context handed to custom header renderers
#[derive(Debug, Clone)]
pub struct HeaderContext {
    pub header_id: SharedString,
    pub column_id: SharedString,
    pub depth: usize,
    pub col_span: usize,
}

impl From<&Header> for HeaderContext {
    fn from(header: &Header) -> Self {
        Self {
            header_id: header.id.clone(),
            column_id: header.column_id.clone(),
            depth: header.depth,
            col_span: header.col_span,
        }
    }
}

/// Collect the leaf columns whose id passes `is_visible`, left to right
pub fn visible_leaves<R>(
    columns: &[ColumnDef<R>],
    is_visible: &dyn Fn(&str) -> bool,
) -> Vec<LeafColumn> {
    fn walk<R>(
        columns: &[ColumnDef<R>],
        prefix: &mut Vec<usize>,
        is_visible: &dyn Fn(&str) -> bool,
        out: &mut Vec<LeafColumn>,
    ) {
        for (index, column) in columns.iter().enumerate() {
            prefix.push(index);
            if column.is_leaf() {
                if is_visible(&column.id) {
                    out.push(LeafColumn {
                        id: column.id.clone(),
                        path: prefix.clone(),
                        width: column.width,
                    });
                }
            } else {
                walk(&column.columns, prefix, is_visible, out);
            }
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    walk(columns, &mut Vec::new(), is_visible, &mut out);
    out
}

#[derive(PartialEq)]
enum Slot<'a> {
    Column(&'a [usize]),
    Placeholder(usize),
}

/// Build header groups, top level first
pub fn build_header_groups<R>(columns: &[ColumnDef<R>], leaves: &[LeafColumn]) -> Vec<HeaderGroup> {
    let Some(max_depth) = leaves.iter().map(LeafColumn::depth).max() else {
        return Vec::new();
    };

    (0..=max_depth)
        .map(|depth| {
            let mut headers: Vec<Header> = Vec::new();
            let mut last_slot: Option<Slot<'_>> = None;

            for (leaf_index, leaf) in leaves.iter().enumerate() {
                let slot = if depth < leaf.depth() {
                    Slot::Column(&leaf.path[..=depth])
                } else if depth < max_depth {
                    Slot::Placeholder(leaf_index)
                } else {
                    Slot::Column(&leaf.path)
                };

                if last_slot.as_ref() == Some(&slot) {
                    if let Some(header) = headers.last_mut() {
                        header.col_span += 1;
                        header.leaves.end = leaf_index + 1;
                    }
                    continue;
                }

                let (column_path, is_placeholder) = match &slot {
                    Slot::Column(path) => (path.to_vec(), false),
                    Slot::Placeholder(_) => (leaf.path.clone(), true),
                };
                let column_id = super::column::column_at(columns, &column_path)
                    .map(|c| c.id.clone())
                    .unwrap_or_else(|| leaf.id.clone());
                let id = if is_placeholder {
                    format!("{depth}_{column_id}_placeholder")
                } else {
                    format!("{depth}_{column_id}")
                };

                headers.push(Header {
                    id: id.into(),
                    column_id,
                    column_path,
                    depth,
                    col_span: 1,
                    is_placeholder,
                    leaves: leaf_index..leaf_index + 1,
                });
                last_slot = Some(slot);
            }

            HeaderGroup {
                id: depth.to_string().into(),
                depth,
                headers,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    fn all_visible(_: &str) -> bool {
        true
    }

    fn flat() -> Vec<ColumnDef<Person>> {
        vec![ColumnDef::new("name", "Name"), ColumnDef::new("age", "Age")]
    }

    fn nested() -> Vec<ColumnDef<Person>> {
        vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::group(
                "info",
                "Info",
                vec![
                    ColumnDef::new("first", "First"),
                    ColumnDef::new("last", "Last"),
                ],
            ),
            ColumnDef::new("age", "Age"),
        ]
    }

    #[test]
    fn flat_columns_make_one_group() {
        let columns = flat();
        let leaves = visible_leaves(&columns, &all_visible);
        let groups = build_header_groups(&columns, &leaves);

        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].headers.iter().map(|h| &**h.column_id).collect();
        assert_eq!(ids, vec!["name", "age"]);
        assert!(groups[0].headers.iter().all(|h| h.col_span == 1 && !h.is_placeholder));
    }

    #[test]
    fn nested_columns_span_and_placeholders() {
        let columns = nested();
        let leaves = visible_leaves(&columns, &all_visible);
        let groups = build_header_groups(&columns, &leaves);

        assert_eq!(groups.len(), 2);

        let top = &groups[0].headers;
        assert_eq!(top.len(), 3);
        assert!(top[0].is_placeholder);
        assert_eq!(&**top[0].column_id, "id");
        assert_eq!(&**top[1].column_id, "info");
        assert_eq!(top[1].col_span, 2);
        assert_eq!(top[1].leaves, 1..3);
        assert!(!top[1].is_placeholder);
        assert!(top[2].is_placeholder);

        let bottom: Vec<_> = groups[1].headers.iter().map(|h| &**h.column_id).collect();
        assert_eq!(bottom, vec!["id", "first", "last", "age"]);
    }

    #[test]
    fn every_group_spans_all_leaves() {
        let columns = nested();
        let leaves = visible_leaves(&columns, &all_visible);
        for group in build_header_groups(&columns, &leaves) {
            let span: usize = group.headers.iter().map(|h| h.col_span).sum();
            assert_eq!(span, leaves.len());
        }
    }

    #[test]
    fn hidden_leaves_shrink_colspan() {
        let columns = nested();
        let leaves = visible_leaves(&columns, &|id: &str| id != "last");
        let groups = build_header_groups(&columns, &leaves);

        assert_eq!(&**groups[0].headers[1].column_id, "info");
        assert_eq!(groups[0].headers[1].col_span, 1);
    }

    #[test]
    fn hiding_whole_group_collapses_depth() {
        let columns = nested();
        let leaves = visible_leaves(&columns, &|id: &str| id != "first" && id != "last");
        let groups = build_header_groups(&columns, &leaves);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].headers.len(), 2);
    }

    #[test]
    fn no_visible_leaves_no_groups() {
        let columns = flat();
        let leaves = visible_leaves(&columns, &|_: &str| false);
        assert!(build_header_groups(&columns, &leaves).is_empty());
    }
}
