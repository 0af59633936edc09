//! Pagination Component
//!
//! Page navigation and page size selection for the DataTable.

use std::rc::Rc;

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::components::primitives::button::Button;
use crate::i18n::{t, t_with, Locale};
use crate::table::pagination::{PageAction, PageInfo};
use crate::theme::colors::TableColors;

type PageActionHandler = Rc<dyn Fn(PageAction, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct DataTablePagination {
    info: PageInfo,
    page_size_options: Vec<usize>,
    locale: Locale,
    on_action: Option<PageActionHandler>,
}

impl DataTablePagination {
    /// Create a new pagination component
    pub fn new(info: PageInfo, page_size_options: Vec<usize>) -> Self {
        Self {
            info,
            page_size_options,
            locale: Locale::default(),
            on_action: None,
        }
    }

    /// Set the locale for labels
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the page action handler
    pub fn on_action(mut self, handler: impl Fn(PageAction, &mut Window, &mut App) + 'static) -> Self {
        self.on_action = Some(Rc::new(handler));
        self
    }

    fn action_button(
        &self,
        id: &'static str,
        label: &'static str,
        enabled: bool,
        action: PageAction,
    ) -> Button {
        let handler = self.on_action.clone();
        Button::icon(id, label)
            .disabled(!enabled)
            .on_click(move |_event, window, cx| {
                if let Some(handler) = &handler {
                    handler(action, window, cx);
                }
            })
    }
}

impl RenderOnce for DataTablePagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let info = self.info;
        let locale = self.locale;

        let page_sizes = self.page_size_options.iter().map(|&size| {
            let handler = self.on_action.clone();
            Button::ghost(("page-size", size), size.to_string())
                .selected(size == info.page_size)
                .on_click(move |_event, window, cx| {
                    if let Some(handler) = &handler {
                        handler(PageAction::SetPageSize(size), window, cx);
                    }
                })
        });

        div()
            .w_full()
            .px_2()
            .flex()
            .items_center()
            .justify_between()
            // Row count
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(TableColors::text_secondary())
                    .child(t_with(
                        locale,
                        "pagination-rows",
                        &[("count", info.row_count.to_string())],
                    )),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    // Rows per page
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(TableColors::text_primary())
                                    .child(t(locale, "pagination-rows-per-page")),
                            )
                            .children(page_sizes),
                    )
                    // Page info
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(TableColors::text_primary())
                            .child(t_with(
                                locale,
                                "pagination-page-of",
                                &[
                                    ("page", (info.page_index + 1).to_string()),
                                    ("count", info.page_count.to_string()),
                                ],
                            )),
                    )
                    // Page navigation
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(self.action_button("first-page", "«", info.can_previous, PageAction::First))
                            .child(self.action_button("prev-page", "‹", info.can_previous, PageAction::Previous))
                            .child(self.action_button("next-page", "›", info.can_next, PageAction::Next))
                            .child(self.action_button("last-page", "»", info.can_next, PageAction::Last)),
                    ),
            )
    }
}
