//! DataTable Component
//!
//! Renders a header row, the current page of rows and a pagination bar from a
//! [`TableEngine`]. Keeps a single selected row id: clicking a row selects it,
//! its checkbox toggles it, and replacing the data clears it without reporting.

use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, Div, EventEmitter,
    IntoElement, ParentElement, Render, Styled, Window,
};

use super::pagination::DataTablePagination;
use crate::components::primitives::checkbox::Checkbox;
use crate::config::TableConfig;
use crate::i18n::{t, Locale};
use crate::table::column::{column_at, ColumnDef, SpanWidth};
use crate::table::controller::{BodyPlan, RowView, TableController};
use crate::table::header::{Header, HeaderContext, LeafColumn};
use crate::table::pagination::PageAction;
use crate::table::row::{CellContext, RowId};
use crate::table::state::TableEngine;
use crate::theme::colors::TableColors;

const CHECKBOX_COLUMN_WIDTH: f32 = 40.0;

type RowSelectHandler = Rc<dyn Fn(Option<RowId>, &mut Window, &mut App) + 'static>;

/// Emitted after a row click or checkbox toggle, carrying the new selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelected {
    pub row_id: Option<RowId>,
}

/// DataTable component
pub struct DataTable<E: TableEngine> {
    controller: TableController<E>,
    locale: Locale,
    row_height: f32,
    header_height: f32,
    page_size_options: Vec<usize>,
    on_row_select: Option<RowSelectHandler>,
}

impl<E: TableEngine> EventEmitter<RowSelected> for DataTable<E> {}

impl<E: TableEngine> DataTable<E> {
    /// Create a new data table over `engine`
    pub fn new(engine: E, _cx: &mut Context<Self>) -> Self {
        let defaults = TableConfig::default();
        Self {
            controller: TableController::new(engine),
            locale: defaults.locale,
            row_height: defaults.row_height,
            header_height: defaults.header_height,
            page_size_options: defaults.page_size_options,
            on_row_select: None,
        }
    }

    /// Apply display settings and the initial page size
    pub fn apply_config(&mut self, config: &TableConfig, cx: &mut Context<Self>) {
        self.locale = config.locale;
        self.row_height = config.row_height;
        self.header_height = config.header_height;
        self.page_size_options = config.page_size_options.clone();
        self.controller.set_pinned_cells(config.pinned_cells);
        self.controller
            .apply_page_action(PageAction::SetPageSize(config.page_size));
        cx.notify();
    }

    /// Set the selection callback
    ///
    /// Runs synchronously inside this table's update, so it must not update the
    /// table itself; subscribe to [`RowSelected`] for that.
    pub fn on_row_select(
        &mut self,
        handler: impl Fn(Option<RowId>, &mut Window, &mut App) + 'static,
    ) {
        self.on_row_select = Some(Rc::new(handler));
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<ColumnDef<E::Record>>, cx: &mut Context<Self>) {
        self.controller.engine_mut().set_columns(columns);
        cx.notify();
    }

    /// Replace the data collection; a new collection clears the selection
    pub fn set_data(&mut self, data: Arc<Vec<E::Record>>, cx: &mut Context<Self>) {
        if self.controller.set_data(data) {
            tracing::info!(
                "DataTable data replaced ({} rows)",
                self.controller.engine().core_row_count()
            );
            cx.notify();
        }
    }

    /// Replace the rows with a fresh collection
    pub fn set_rows(&mut self, rows: Vec<E::Record>, cx: &mut Context<Self>) {
        self.set_data(Arc::new(rows), cx);
    }

    /// Set the label language
    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.locale = locale;
        cx.notify();
    }

    /// Show or hide a leaf column
    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool, cx: &mut Context<Self>) {
        self.controller
            .engine_mut()
            .set_column_visibility(column_id, visible);
        cx.notify();
    }

    fn click_row(&mut self, id: RowId, window: &mut Window, cx: &mut Context<Self>) {
        let handler = self.on_row_select.clone();
        self.controller
            .click_row(id, |selected| report(handler, selected, window, cx));
    }

    fn toggle_row(&mut self, id: RowId, window: &mut Window, cx: &mut Context<Self>) {
        let handler = self.on_row_select.clone();
        self.controller
            .toggle_row(id, |selected| report(handler, selected, window, cx));
    }

    fn paginate(&mut self, action: PageAction, cx: &mut Context<Self>) {
        self.controller.apply_page_action(action);
        cx.notify();
    }

    fn checkbox_cell(&self) -> Div {
        div()
            .w(px(CHECKBOX_COLUMN_WIDTH))
            .h_full()
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
    }

    /// Render the header row: select-all box, then the headers of every group
    fn render_header_row(&self, headers: &[Header], leaves: &[LeafColumn]) -> impl IntoElement {
        let columns = self.controller.engine().columns();

        // Decorative: always unchecked, no handler.
        let select_all = Checkbox::new("data-table-header-checkbox").checked(false);

        div()
            .w_full()
            .h(px(self.header_height))
            .flex()
            .items_center()
            .bg(TableColors::table_header_bg())
            .border_b_1()
            .border_color(TableColors::border())
            .overflow_hidden()
            .child(self.checkbox_cell().child(select_all))
            .children(headers.iter().map(|header| {
                let spanned = leaves.get(header.leaves.clone()).unwrap_or(&[]);
                let width = SpanWidth::of(spanned.iter().map(|leaf| leaf.width));

                let content = if header.is_placeholder {
                    None
                } else {
                    column_at(columns, &header.column_path)
                        .and_then(|column| column.render_header(&HeaderContext::from(header)))
                };

                sized(
                    div()
                        .h_full()
                        .px_3()
                        .flex()
                        .items_center()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(TableColors::text_secondary())
                        .overflow_hidden(),
                    width,
                )
                .children(content)
            }))
    }

    /// Render a data row
    fn render_row(
        &self,
        view: &RowView<'_, E::Record>,
        leaves: &[LeafColumn],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let RowView { row, selected } = view;
        let selected = *selected;
        let columns = self.controller.engine().columns();
        let row_id = row.id.clone();

        let toggle = cx.listener({
            let row_id = row_id.clone();
            move |this, _checked: &bool, window, cx| this.toggle_row(row_id.clone(), window, cx)
        });

        let cells = leaves.iter().enumerate().map(|(cell_index, leaf)| {
            let content = column_at(columns, &leaf.path)
                .and_then(|column| column.render_cell(&CellContext { row, column }));

            let mut cell = sized(
                div()
                    .h_full()
                    .px_3()
                    .flex()
                    .items_center()
                    .text_sm()
                    .text_color(TableColors::text_primary())
                    .overflow_hidden(),
                SpanWidth::of([leaf.width]),
            );
            if self.controller.is_pinned(cell_index) {
                cell = cell.bg(TableColors::table_cell_pinned());
            }
            cell.children(content)
        });

        let bg = if selected {
            TableColors::table_row_selected()
        } else {
            TableColors::content_bg()
        };

        div()
            .id(("data-table-row", row.index))
            .w_full()
            .h(px(self.row_height))
            .flex()
            .items_center()
            .bg(bg)
            .border_b_1()
            .border_color(TableColors::border())
            .cursor_pointer()
            .hover(|s| s.bg(TableColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, window, cx| {
                this.click_row(row_id.clone(), window, cx);
            }))
            .child(
                self.checkbox_cell().child(
                    Checkbox::new(("data-table-row-checkbox", row.index))
                        .checked(selected)
                        .on_change(move |checked, window, cx| toggle(&checked, window, cx)),
                ),
            )
            .children(cells)
    }

    /// Render the empty placeholder row
    fn render_empty(&self) -> impl IntoElement {
        div()
            .w_full()
            .h(px(96.0))
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(TableColors::text_muted())
            .child(t(self.locale, "table-no-results"))
    }
}

/// Run the selection callback, then emit [`RowSelected`]
fn report<E: TableEngine>(
    handler: Option<RowSelectHandler>,
    selected: Option<RowId>,
    window: &mut Window,
    cx: &mut Context<DataTable<E>>,
) {
    if let Some(handler) = handler {
        handler(selected.clone(), window, cx);
    }
    cx.emit(RowSelected { row_id: selected });
    cx.notify();
}

/// Apply a resolved span width to a cell
fn sized<T: Styled>(element: T, width: SpanWidth) -> T {
    match width {
        SpanWidth::Fixed(width) => element.w(px(width)).flex_none(),
        SpanWidth::Flex { grow, min, max } => {
            let mut element = element.flex_1().min_w(px(min));
            if let Some(max) = max {
                element = element.max_w(px(max));
            }
            element.style().flex_grow = Some(grow);
            element
        }
    }
}

impl<E: TableEngine> Render for DataTable<E> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let engine = self.controller.engine();
        let leaves = engine.visible_leaf_columns();
        let page = engine.pagination();
        let header_row = self
            .render_header_row(&self.controller.header_row(), &leaves)
            .into_any_element();

        let body: Vec<AnyElement> = match self.controller.body() {
            BodyPlan::Empty => vec![self.render_empty().into_any_element()],
            BodyPlan::Rows(rows) => rows
                .iter()
                .map(|view| self.render_row(view, &leaves, cx).into_any_element())
                .collect(),
        };

        let paginate = cx.listener(|this, action: &PageAction, _window, cx| {
            this.paginate(*action, cx);
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_4()
            // Table
            .child(
                div()
                    .w_full()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .bg(TableColors::content_bg())
                    .border_1()
                    .border_color(TableColors::border())
                    .rounded_md()
                    .overflow_hidden()
                    .child(header_row)
                    .child(
                        div()
                            .id("data-table-rows")
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_y_scroll()
                            .children(body),
                    ),
            )
            // Pagination
            .child(
                DataTablePagination::new(page, self.page_size_options.clone())
                    .locale(self.locale)
                    .on_action(move |action, window, cx| paginate(&action, window, cx)),
            )
    }
}
