//! Demo application for the wave loading widget
//!
//! Shows a single wave view next to controls for every setter: shape,
//! animation control, progress, border, amplitude and the three colors.

use std::time::Duration;

use eframe::egui::{self, color_picker, Align, Color32, Layout, RichText};

use super::theme;
use crate::style::{Argb, ShapeType, WaveStyle};
use crate::widgets::{wave_loading, WaveLoading, WaveLoadingConfig};

/// Wave cycle length used by the demo.
const DEMO_ANIM_DURATION: Duration = Duration::from_millis(3000);

/// Largest border the slider offers, in pixels.
const MAX_BORDER_WIDTH: f32 = 40.0;

/// Main application state for the demo
pub struct DemoApp {
    /// The widget under test
    wave: WaveLoading,

    /// Slider mirrors
    progress: u8,
    border_width: f32,
    amplitude_per_mille: u32,

    /// Animation checkboxes
    animation_cancelled: bool,
    animation_paused: bool,

    /// Whether the shape chooser is open
    shape_dialog_open: bool,

    /// Style loading problem to display
    style_error: Option<String>,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl DemoApp {
    /// Create a demo for the given style.
    ///
    /// `style_error` is shown in the status bar when the style could not
    /// be loaded and defaults are in use.
    pub fn new(style: WaveStyle, style_error: Option<String>) -> Self {
        let mut wave = WaveLoading::new(&style);
        wave.view_mut().set_anim_duration(DEMO_ANIM_DURATION);

        Self {
            progress: wave.view().progress_value(),
            border_width: wave.view().border_width(),
            amplitude_per_mille: (wave.view().amplitude_ratio() * 1000.0).round() as u32,
            wave,
            animation_cancelled: false,
            animation_paused: false,
            shape_dialog_open: false,
            style_error,
            theme_applied: false,
        }
    }

    /// Access the widget state.
    pub fn wave(&self) -> &WaveLoading {
        &self.wave
    }

    fn config(&self) -> WaveLoadingConfig {
        match self.wave.view().shape_type() {
            ShapeType::Rectangle => WaveLoadingConfig::default().with_size(320.0, 160.0),
            ShapeType::Circle | ShapeType::Square => WaveLoadingConfig::default().with_size(240.0, 240.0),
        }
    }

    /// Draw the top toolbar
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) -> ToolbarActions {
        let mut actions = ToolbarActions::default();

        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("WAVE LOADING")
                    .size(18.0)
                    .color(theme::text::PRIMARY)
                    .strong(),
            );

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(20.0);

            if ui.button("Shape Type").clicked() {
                actions.open_shape_dialog = true;
            }
            ui.label(
                RichText::new(self.wave.view().shape_type().label())
                    .color(theme::text::SECONDARY),
            );
        });

        actions
    }

    /// Single-choice shape dialog
    fn draw_shape_dialog(&mut self, ctx: &egui::Context) {
        if !self.shape_dialog_open {
            return;
        }

        let mut open = true;
        let mut chosen = None;
        egui::Window::new("Shape Type")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                let current = self.wave.view().shape_type();
                for shape in ShapeType::ALL {
                    if ui.radio(current == shape, shape.label()).clicked() {
                        chosen = Some(shape);
                    }
                }
            });

        if let Some(shape) = chosen {
            self.wave.view_mut().set_shape_type(shape);
            self.shape_dialog_open = false;
        } else {
            self.shape_dialog_open = open;
        }
    }

    /// Draw the control column
    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Animator");
        if ui
            .checkbox(&mut self.animation_cancelled, "Cancel animation")
            .changed()
        {
            if self.animation_cancelled {
                self.wave.view_mut().cancel_animation();
            } else {
                self.wave.view_mut().start_animation();
            }
        }
        if ui
            .checkbox(&mut self.animation_paused, "Pause animation")
            .changed()
        {
            if self.animation_paused {
                self.wave.view_mut().pause_animation();
            } else {
                self.wave.view_mut().resume_animation();
            }
        }

        ui.add_space(12.0);
        ui.heading("Wave");
        if ui
            .add(egui::Slider::new(&mut self.progress, 0..=100).text("Progress"))
            .changed()
        {
            self.wave.view_mut().set_progress_value(self.progress);
        }
        if ui
            .add(egui::Slider::new(&mut self.amplitude_per_mille, 0..=100).text("Amplitude ‰"))
            .changed()
        {
            self.wave.view_mut().set_amplitude_ratio(self.amplitude_per_mille);
        }
        if ui
            .add(egui::Slider::new(&mut self.border_width, 0.0..=MAX_BORDER_WIDTH).text("Border width"))
            .changed()
        {
            self.wave.view_mut().set_border_width(self.border_width);
        }

        ui.add_space(12.0);
        ui.heading("Colors");
        let view = self.wave.view();
        let (wave, background, border) = (view.wave_color(), view.wave_bg_color(), view.border_color());

        if let Some(color) = color_row(ui, "Wave", wave) {
            self.wave.view_mut().set_wave_color(color);
        }
        if let Some(color) = color_row(ui, "Background", background) {
            self.wave.view_mut().set_wave_bg_color(color);
        }
        if let Some(color) = color_row(ui, "Border", border) {
            self.wave.view_mut().set_border_color(color);
        }
    }

    /// Draw the preview area on a checkerboard
    fn draw_preview(&mut self, ui: &mut egui::Ui) {
        let config = self.config();
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            // Reserve a slot so the backdrop ends up underneath the frame
            let backdrop = ui.painter().add(egui::Shape::Noop);
            let response = wave_loading(ui, &mut self.wave, &config);
            ui.painter()
                .set(backdrop, egui::Shape::Vec(theme::checkerboard(response.rect)));
        });
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            if let Some(ref error) = self.style_error {
                ui.label(
                    RichText::new(format!("⚠ {}", error))
                        .color(theme::accent::ERROR)
                        .small(),
                );
            } else {
                ui.label(RichText::new("Ready").color(theme::text::SECONDARY).small());
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let view = self.wave.view();
                let (status, color) = if view.is_wave_paused() {
                    ("⏸ Paused", theme::text::SECONDARY)
                } else if view.is_wave_running() {
                    ("● Running", theme::accent::SUCCESS)
                } else {
                    ("○ Stopped", theme::text::DISABLED)
                };
                ui.label(RichText::new(status).color(color).small());
                ui.label(
                    RichText::new(format!(
                        "level {:.0}% • shift {:.2}",
                        view.water_level_ratio() * 100.0,
                        view.wave_shift_ratio()
                    ))
                    .color(theme::text::SECONDARY)
                    .small(),
                );
            });
        });
    }
}

/// Color picker with preset swatches. Returns the new color on change.
fn color_row(ui: &mut egui::Ui, label: &str, current: Argb) -> Option<Argb> {
    let mut picked = None;
    ui.horizontal(|ui| {
        let mut color = current.to_color32();
        if color_picker::color_edit_button_srgba(ui, &mut color, color_picker::Alpha::OnlyBlend)
            .changed()
        {
            picked = Some(Argb::from_color32(color));
        }
        for swatch in theme::SWATCHES {
            let (rect, response) = ui.allocate_exact_size(egui::Vec2::splat(16.0), egui::Sense::click());
            ui.painter().rect_filled(rect, theme::ROUNDING_SMALL, swatch.to_color32());
            if swatch == current {
                ui.painter()
                    .rect_stroke(rect, theme::ROUNDING_SMALL, egui::Stroke::new(2.0, Color32::WHITE));
            }
            if response.clicked() {
                picked = Some(swatch);
            }
        }
        ui.label(label);
    });
    picked
}

/// Actions collected from the toolbar for deferred execution
#[derive(Default)]
struct ToolbarActions {
    open_shape_dialog: bool,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let toolbar_actions = egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::none()
                    .fill(theme::background::PANEL)
                    .inner_margin(egui::Margin::symmetric(0.0, 8.0)),
            )
            .show(ctx, |ui| self.draw_toolbar(ui))
            .inner;

        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(theme::background::PANEL)
                    .inner_margin(egui::Margin::symmetric(0.0, 4.0)),
            )
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        egui::SidePanel::right("controls")
            .resizable(false)
            .min_width(360.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_preview(ui);
        });

        self.draw_shape_dialog(ctx);

        if toolbar_actions.open_shape_dialog {
            self.shape_dialog_open = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_demo_duration() {
        let app = DemoApp::new(WaveStyle::default(), None);
        assert_eq!(app.wave().view().anim_duration(), DEMO_ANIM_DURATION);
        assert_eq!(app.progress, 50);
        assert_eq!(app.amplitude_per_mille, 50);
    }

    #[test]
    fn test_rectangle_gets_wide_preview() {
        let app = DemoApp::new(WaveStyle::default().with_shape(ShapeType::Rectangle), None);
        assert_eq!(app.config().size, egui::Vec2::new(320.0, 160.0));
        let app = DemoApp::new(WaveStyle::default(), None);
        assert_eq!(app.config().size, egui::Vec2::splat(240.0));
    }
}
