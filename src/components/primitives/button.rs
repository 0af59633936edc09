//! Button Component
//!
//! Text and glyph buttons for the toolbar and the pagination bar.

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::TableColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Visual style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Bordered, white fill
    #[default]
    Outline,
    /// No border or fill until hovered
    Ghost,
}

struct Palette {
    bg: Rgba,
    text: Rgba,
    hover: Rgba,
    border: Rgba,
}

impl ButtonStyle {
    fn palette(self, selected: bool) -> Palette {
        if selected {
            let active = TableColors::button_active_bg();
            return Palette {
                bg: active,
                text: TableColors::text_light(),
                hover: active,
                border: active,
            };
        }

        match self {
            ButtonStyle::Outline => Palette {
                bg: TableColors::button_bg(),
                text: TableColors::text_primary(),
                hover: TableColors::button_hover_bg(),
                border: TableColors::input_border(),
            },
            ButtonStyle::Ghost => Palette {
                bg: gpui::rgba(0x00000000),
                text: TableColors::text_secondary(),
                hover: TableColors::button_hover_bg(),
                border: gpui::rgba(0x00000000),
            },
        }
    }
}

/// A clickable label or glyph
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    style: ButtonStyle,
    selected: bool,
    square: bool,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: ButtonStyle::Outline,
            selected: false,
            square: false,
            disabled: false,
            on_click: None,
        }
    }

    /// Bordered text button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label)
    }

    /// Borderless text button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).style(ButtonStyle::Ghost)
    }

    /// Square bordered button showing a single glyph (pager arrows)
    pub fn icon(id: impl Into<ElementId>, glyph: impl Into<SharedString>) -> Self {
        let mut button = Self::new(id, glyph);
        button.square = true;
        button
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Draw as the active choice of a group
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let Palette {
            bg,
            text,
            hover,
            border,
        } = self.style.palette(self.selected);

        let base = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .bg(bg)
            .border_1()
            .border_color(border)
            .text_color(text)
            .rounded_md()
            .child(self.label);

        let base = if self.square {
            base.size(px(30.0)).text_size(px(14.0))
        } else {
            base.h(px(30.0)).px(px(10.0)).text_size(px(13.0))
        };

        if self.disabled {
            return base.opacity(0.5);
        }

        let base = base.cursor_pointer().hover(move |s| s.bg(hover));
        match self.on_click {
            Some(handler) => base.on_click(handler),
            None => base,
        }
    }
}
