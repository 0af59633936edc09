//! Colors - Table Theme Colors

use gpui::{rgb, Rgba};

/// Table color palette - All colors are accessed via associated functions
pub struct TableColors;

impl TableColors {
    // Accent
    /// Primary accent - Blue (checked checkboxes, focus)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Table background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xffffff) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Selected row
    pub fn table_row_selected() -> Rgba { rgb(0xe5e7eb) }
    /// Pinned leading cells
    pub fn table_cell_pinned() -> Rgba { rgb(0xf3f4f6) }

    // Button colors
    /// Outline button background
    pub fn button_bg() -> Rgba { rgb(0xffffff) }
    /// Outline button hover
    pub fn button_hover_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Selected option background
    pub fn button_active_bg() -> Rgba { rgb(0x1f2937) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}
