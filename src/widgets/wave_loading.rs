//! egui binding for the wave loading view.
//!
//! Each frame the widget measures the view, feeds it the frame delta,
//! re-renders when the view reports a change, and paints the result as a
//! texture. It keeps requesting repaints while any animation runs.

use std::time::Duration;

use eframe::egui::{self, pos2, Color32, ColorImage, Rect, Response, Sense, TextureHandle, TextureOptions, Ui, Vec2};

use crate::style::WaveStyle;
use crate::view::WaveLoadingView;

/// Configuration for the wave loading widget.
#[derive(Clone, Debug)]
pub struct WaveLoadingConfig {
    /// Space offered to the view, before measurement.
    pub size: Vec2,
    /// Texture sampling used when painting the frame.
    pub texture_options: TextureOptions,
}

impl Default for WaveLoadingConfig {
    fn default() -> Self {
        Self {
            size: Vec2::splat(200.0),
            texture_options: TextureOptions::LINEAR,
        }
    }
}

impl WaveLoadingConfig {
    /// Set the offered size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }
}

/// A view together with the GPU texture its frames are uploaded to.
pub struct WaveLoading {
    view: WaveLoadingView,
    texture: Option<TextureHandle>,
}

impl WaveLoading {
    pub fn new(style: &WaveStyle) -> Self {
        Self {
            view: WaveLoadingView::new(style),
            texture: None,
        }
    }

    pub fn view(&self) -> &WaveLoadingView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut WaveLoadingView {
        &mut self.view
    }

    /// Drop the texture and stop the view's wave motion.
    pub fn detach(&mut self) {
        self.view.on_detached();
        self.texture = None;
    }

    fn upload(&mut self, ctx: &egui::Context, options: TextureOptions) {
        let Some(frame) = self.view.draw() else {
            return;
        };
        let size = [frame.width() as usize, frame.height() as usize];
        let image = ColorImage::from_rgba_premultiplied(size, frame.data());
        match &mut self.texture {
            Some(texture) => texture.set(image, options),
            None => self.texture = Some(ctx.load_texture("wave_loading", image, options)),
        }
    }
}

/// An animated liquid-fill progress indicator.
///
/// Features:
/// - Circle, square and rounded-rectangle outlines
/// - Looping horizontal wave motion
/// - Eased water level transitions on progress changes
/// - Optional border
pub fn wave_loading(ui: &mut Ui, state: &mut WaveLoading, config: &WaveLoadingConfig) -> Response {
    if !state.view.is_attached() {
        state.view.on_attached();
    }

    let offered = config.size.max(Vec2::ZERO);
    let (width, height) = state
        .view
        .measure(offered.x.round() as u32, offered.y.round() as u32);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width as f32, height as f32), Sense::hover());

    if state.view.size() != (width, height) {
        state.view.on_size_changed(width, height);
    }

    let dt = ui.input(|i| i.stable_dt).max(0.0);
    let animating = state.view.tick(Duration::from_secs_f32(dt));

    if ui.is_rect_visible(rect) {
        if state.view.take_redraw() || state.texture.is_none() {
            state.upload(ui.ctx(), config.texture_options);
        }
        if let Some(texture) = &state.texture {
            ui.painter().image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    if animating {
        ui.ctx().request_repaint();
    }

    response
}
