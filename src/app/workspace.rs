//! Workspace - Demo Window Content
//!
//! Hosts a DataTable over sample people, with buttons to reload or empty the
//! data, hide the email column and switch language, plus a status line showing
//! the last reported selection.

use std::sync::Arc;

use gpui::{
    div, prelude::*, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};

use crate::app::sample::{people_columns, sample_people, Person};
use crate::components::composite::data_table::{DataTable, RowSelected};
use crate::components::primitives::button::Button;
use crate::config::TableConfig;
use crate::i18n::{t, Locale};
use crate::table::row::RowId;
use crate::table::state::TableState;
use crate::theme::colors::TableColors;

/// Main demo view
pub struct Workspace {
    table: Entity<DataTable<TableState<Person>>>,
    locale: Locale,
    email_visible: bool,
    last_selection: Option<RowId>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(config: &TableConfig, cx: &mut Context<Self>) -> Self {
        let locale = config.locale;

        let table = cx.new(|cx| {
            let state = TableState::new(people_columns(locale), Arc::new(sample_people()))
                .with_row_id(|person: &Person, _| person.id.clone());
            let mut table = DataTable::new(state, cx);
            table.apply_config(config, cx);
            table.on_row_select(|row_id, _window, _cx| {
                tracing::info!("Row selection changed: {:?}", row_id);
            });
            table
        });

        let subscriptions = vec![cx.subscribe(&table, |this, _table, event: &RowSelected, cx| {
            this.last_selection = event.row_id.clone();
            cx.notify();
        })];

        Self {
            table,
            locale,
            email_visible: true,
            last_selection: None,
            _subscriptions: subscriptions,
        }
    }

    fn load_sample(&mut self, cx: &mut Context<Self>) {
        self.table.update(cx, |table, cx| table.set_rows(sample_people(), cx));
        self.last_selection = None;
        cx.notify();
    }

    fn clear_data(&mut self, cx: &mut Context<Self>) {
        self.table.update(cx, |table, cx| table.set_rows(Vec::new(), cx));
        self.last_selection = None;
        cx.notify();
    }

    fn toggle_email(&mut self, cx: &mut Context<Self>) {
        self.email_visible = !self.email_visible;
        let visible = self.email_visible;
        self.table
            .update(cx, |table, cx| table.set_column_visibility("email", visible, cx));
        cx.notify();
    }

    fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        self.locale = self.locale.toggled();
        let locale = self.locale;
        self.table.update(cx, |table, cx| {
            table.set_locale(locale, cx);
            table.set_columns(people_columns(locale), cx);
        });
        cx.notify();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.locale;
        let selected = self
            .last_selection
            .clone()
            .unwrap_or_else(|| t(locale, "demo-none"));

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .bg(TableColors::background())
            // Toolbar
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(TableColors::text_primary())
                            .child(t(locale, "app-title")),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(TableColors::text_secondary())
                                    .child(format!("{}: {}", t(locale, "demo-selected"), selected)),
                            )
                            .child(Button::outline("load-sample", t(locale, "demo-load-sample")).on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.load_sample(cx);
                                }),
                            ))
                            .child(Button::outline("toggle-email", t(locale, "demo-toggle-email")).on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.toggle_email(cx);
                                }),
                            ))
                            .child(Button::outline("clear-data", t(locale, "demo-clear-data")).on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.clear_data(cx);
                                }),
                            ))
                            .child(
                                Button::ghost(
                                    "toggle-locale",
                                    format!("{}: {}", t(locale, "demo-language"), locale.display_name()),
                                )
                                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.toggle_locale(cx);
                                })),
                            ),
                    ),
            )
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
    }
}
