//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::TableColors;

/// A checkbox component
///
/// Without a change handler the box is inert: it draws its state and ignores clicks.
/// Clicks on the box never reach the enclosing element.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the change handler; receives the requested new state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        let (checkbox_bg, border_color) = if checked {
            (TableColors::accent(), TableColors::accent())
        } else {
            (TableColors::input_bg(), TableColors::input_border())
        };

        let mut checkbox = div()
            .id(self.id)
            .size(px(16.0))
            .flex_none()
            .rounded_sm()
            .border_1()
            .border_color(border_color)
            .bg(checkbox_bg)
            .flex()
            .items_center()
            .justify_center()
            .text_color(TableColors::text_light())
            .text_size(px(11.0))
            .child(if checked { "✓" } else { "" });

        let on_change = self.on_change;
        if on_change.is_some() {
            checkbox = checkbox.cursor_pointer();
        }

        checkbox = checkbox.on_click(move |_event, window, cx| {
            cx.stop_propagation();
            if let Some(handler) = &on_change {
                handler(!checked, window, cx);
            }
        });

        checkbox
    }
}
