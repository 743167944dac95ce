//! Theme definitions for the wave loading demo
//!
//! Provides color constants, styling utilities, and the checkerboard
//! backdrop the preview is drawn on.

use eframe::egui::{self, Color32, Rounding, Stroke, Vec2};

use crate::style::Argb;

/// Background colors
pub mod background {
    use super::Color32;

    /// Main window background - off white
    pub const MAIN: Color32 = Color32::from_rgb(250, 250, 250);

    /// Panel background - light gray
    pub const PANEL: Color32 = Color32::from_rgb(238, 238, 238);

    /// Widget background (buttons, inputs)
    pub const WIDGET: Color32 = Color32::from_rgb(224, 224, 224);

    /// Widget background when hovered
    pub const WIDGET_HOVERED: Color32 = Color32::from_rgb(210, 210, 210);

    /// Widget background when active/pressed
    pub const WIDGET_ACTIVE: Color32 = Color32::from_rgb(189, 189, 189);

    /// Checkerboard squares behind the preview
    pub const CHECKER_LIGHT: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CHECKER_DARK: Color32 = Color32::from_rgb(230, 230, 230);
}

/// Text colors
pub mod text {
    use super::Color32;

    /// Primary text - near black
    pub const PRIMARY: Color32 = Color32::from_rgb(33, 33, 33);

    /// Secondary text - dimmed
    pub const SECONDARY: Color32 = Color32::from_rgb(117, 117, 117);

    /// Disabled text
    pub const DISABLED: Color32 = Color32::from_rgb(189, 189, 189);
}

/// UI accent colors
pub mod accent {
    use super::Color32;

    /// Primary accent - indigo
    pub const PRIMARY: Color32 = Color32::from_rgb(63, 81, 181);

    /// Success/active - green
    pub const SUCCESS: Color32 = Color32::from_rgb(76, 175, 80);

    /// Error - red
    pub const ERROR: Color32 = Color32::from_rgb(244, 67, 54);
}

/// Preset swatches offered next to the color pickers
pub const SWATCHES: [Argb; 6] = [
    Argb(0xFF21_2121),
    Argb(0xFF3F_51B5),
    Argb(0xFF00_9688),
    Argb(0xFFFF_5722),
    Argb(0xFFE9_1E63),
    Argb(0xFF8B_C34A),
];

/// Checkerboard square size
pub const CHECKER_SIZE: f32 = 10.0;

/// Standard rounding for UI elements
pub const ROUNDING: Rounding = Rounding {
    nw: 6.0,
    ne: 6.0,
    sw: 6.0,
    se: 6.0,
};

/// Smaller rounding for compact elements
pub const ROUNDING_SMALL: Rounding = Rounding {
    nw: 4.0,
    ne: 4.0,
    sw: 4.0,
    se: 4.0,
};

/// Apply the light demo theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = false;

    visuals.window_fill = background::MAIN;
    visuals.window_stroke = Stroke::new(1.0, background::WIDGET_ACTIVE);
    visuals.window_rounding = ROUNDING;
    visuals.panel_fill = background::MAIN;

    visuals.widgets.noninteractive.bg_fill = background::PANEL;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text::SECONDARY);
    visuals.widgets.noninteractive.rounding = ROUNDING_SMALL;

    visuals.widgets.inactive.bg_fill = background::WIDGET;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.inactive.rounding = ROUNDING_SMALL;

    visuals.widgets.hovered.bg_fill = background::WIDGET_HOVERED;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text::PRIMARY);
    visuals.widgets.hovered.rounding = ROUNDING_SMALL;

    visuals.widgets.active.bg_fill = background::WIDGET_ACTIVE;
    visuals.widgets.active.fg_stroke = Stroke::new(1.5, accent::PRIMARY);
    visuals.widgets.active.rounding = ROUNDING_SMALL;

    visuals.selection.bg_fill = accent::PRIMARY.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::PRIMARY);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    style.spacing.button_padding = Vec2::new(12.0, 6.0);
    style.spacing.slider_width = 220.0;

    ctx.set_style(style);
}

/// Checkerboard shapes so transparent parts of the preview stay visible
pub fn checkerboard(rect: egui::Rect) -> Vec<egui::Shape> {
    let mut shapes = vec![egui::Shape::rect_filled(rect, 0.0, background::CHECKER_LIGHT)];

    let columns = (rect.width() / CHECKER_SIZE).ceil() as usize;
    let rows = (rect.height() / CHECKER_SIZE).ceil() as usize;
    for row in 0..rows {
        for column in (row % 2..columns).step_by(2) {
            let min = rect.min + Vec2::new(column as f32, row as f32) * CHECKER_SIZE;
            let square = egui::Rect::from_min_size(min, Vec2::splat(CHECKER_SIZE)).intersect(rect);
            shapes.push(egui::Shape::rect_filled(square, 0.0, background::CHECKER_DARK));
        }
    }
    shapes
}
