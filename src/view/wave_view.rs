//! The wave loading view.
//!
//! Owns the configuration, the animation state and the cached wave tile.
//! A host drives it through a small lifecycle:
//!
//! 1. [`on_attached`](WaveLoadingView::on_attached) starts the wave motion
//! 2. [`measure`](WaveLoadingView::measure) and
//!    [`on_size_changed`](WaveLoadingView::on_size_changed) settle the size
//!    and (re)build the tile
//! 3. every frame, [`tick`](WaveLoadingView::tick) then
//!    [`draw`](WaveLoadingView::draw)
//! 4. [`on_detached`](WaveLoadingView::on_detached) cancels the wave motion

use std::time::Duration;

use tiny_skia::Pixmap;

use super::measure::measure;
use crate::anim::WaveAnimator;
use crate::style::{Argb, ShapeType, WaveStyle};
use crate::wave::{render_frame, ShaderMatrix, ShapeStyle, TileKey, WaveShader, WaveTile, BASE_AMPLITUDE_RATIO};

/// Largest accepted progress value.
pub const MAX_PROGRESS: u8 = 100;

/// Animated liquid-fill progress indicator.
#[derive(Debug)]
pub struct WaveLoadingView {
    shape_type: ShapeType,
    wave_color: Argb,
    wave_bg_color: Argb,
    border_color: Argb,
    border_width: f32,
    round_rectangle_xy: f32,
    amplitude_ratio: f32,
    progress_value: u8,

    wave_shift_ratio: f32,
    water_level_ratio: f32,

    width: u32,
    height: u32,
    tile: Option<WaveTile>,
    tile_generations: u64,

    animator: WaveAnimator,
    attached: bool,
    needs_redraw: bool,
    needs_layout: bool,
}

impl Default for WaveLoadingView {
    fn default() -> Self {
        Self::new(&WaveStyle::default())
    }
}

impl WaveLoadingView {
    /// Build a view from styled attributes.
    ///
    /// The water level starts full and animates down (or stays) toward the
    /// style's initial progress.
    pub fn new(style: &WaveStyle) -> Self {
        let mut view = Self {
            shape_type: style.shape_type,
            wave_color: style.wave_color,
            wave_bg_color: style.wave_background_color,
            border_color: style.border_color,
            border_width: style.border_width.max(0.0),
            round_rectangle_xy: style.round_rectangle_xy.max(0.0),
            amplitude_ratio: amplitude_from_per_mille(style.wave_amplitude),
            progress_value: 0,
            wave_shift_ratio: 0.0,
            water_level_ratio: 1.0,
            width: 0,
            height: 0,
            tile: None,
            tile_generations: 0,
            animator: WaveAnimator::new(),
            attached: false,
            needs_redraw: true,
            needs_layout: true,
        };
        view.set_progress_value(style.progress_value);
        view
    }

    // Lifecycle

    pub fn on_attached(&mut self) {
        self.attached = true;
        self.start_animation();
    }

    pub fn on_detached(&mut self) {
        self.cancel_animation();
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Size this view wants for the space offered by its parent.
    pub fn measure(&mut self, width: u32, height: u32) -> (u32, u32) {
        self.needs_layout = false;
        let measured = measure(self.shape_type, width, height);
        tracing::debug!(shape = ?self.shape_type, ?measured, "measured wave view");
        measured
    }

    /// Record the new size and rebuild the tile for it.
    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.update_wave_shader();
        self.invalidate();
    }

    /// Advance the animations by `dt`. Returns whether anything is still
    /// animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let frame = self.animator.tick(dt);
        if let Some(shift) = frame.wave_shift {
            self.set_wave_shift_ratio(shift);
        }
        if let Some(level) = frame.water_level {
            self.set_water_level_ratio(level);
        }
        self.animator.is_animating()
    }

    /// Render the current frame.
    ///
    /// Returns `None` until a tile exists, i.e. before the first non-empty
    /// size change.
    pub fn draw(&self) -> Option<Pixmap> {
        let tile = self.tile.as_ref()?;
        let shader = WaveShader::new(tile, self.shader_matrix(tile));
        let style = ShapeStyle {
            shape_type: self.shape_type,
            background: self.wave_bg_color,
            border_color: self.border_color,
            border_width: self.border_width,
            corner_radius: self.round_rectangle_xy,
        };
        render_frame(self.width, self.height, &style, &shader)
    }

    fn shader_matrix(&self, tile: &WaveTile) -> ShaderMatrix {
        ShaderMatrix::wave(
            self.amplitude_ratio,
            self.wave_shift_ratio,
            self.water_level_ratio,
            self.width as f32,
            self.height as f32,
            tile.water_level(),
        )
    }

    /// Current tile placement, if a tile exists.
    pub fn current_shader_matrix(&self) -> Option<ShaderMatrix> {
        self.tile.as_ref().map(|tile| self.shader_matrix(tile))
    }

    /// Rebuild the tile unless it already matches size and color.
    fn update_wave_shader(&mut self) {
        let key = TileKey {
            width: self.width,
            height: self.height,
            color: self.wave_color,
        };
        if self.tile.as_ref().is_some_and(|tile| tile.key() == key) {
            return;
        }
        if let Some(tile) = WaveTile::generate(key) {
            self.tile = Some(tile);
            self.tile_generations += 1;
        }
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    /// Whether something changed since the last call. Clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Whether the size needs to be measured again.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    // Setters

    pub fn set_wave_bg_color(&mut self, color: Argb) {
        self.wave_bg_color = color;
        self.update_wave_shader();
        self.invalidate();
    }

    pub fn set_wave_color(&mut self, color: Argb) {
        self.wave_color = color;
        self.update_wave_shader();
        self.invalidate();
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width.max(0.0);
        self.invalidate();
    }

    pub fn set_border_color(&mut self, color: Argb) {
        self.border_color = color;
        self.update_wave_shader();
        self.invalidate();
    }

    pub fn set_round_rectangle_xy(&mut self, radius: f32) {
        self.round_rectangle_xy = radius.max(0.0);
        self.invalidate();
    }

    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        self.shape_type = shape_type;
        self.request_layout();
        self.invalidate();
    }

    /// Set the wave height in per-mille of the view height.
    ///
    /// Capped at the tile's own amplitude, 100‰.
    pub fn set_amplitude_ratio(&mut self, per_mille: u32) {
        let ratio = amplitude_from_per_mille(per_mille as f32);
        if self.amplitude_ratio != ratio {
            self.amplitude_ratio = ratio;
            self.invalidate();
        }
    }

    /// Set progress (0-100) and animate the water level toward it.
    pub fn set_progress_value(&mut self, progress: u8) {
        self.progress_value = progress.min(MAX_PROGRESS);
        let target = self.progress_value as f32 / MAX_PROGRESS as f32;
        let start = self.animator.animate_water_level(self.water_level_ratio, target);
        self.set_water_level_ratio(start);
    }

    pub fn set_wave_shift_ratio(&mut self, ratio: f32) {
        if self.wave_shift_ratio != ratio {
            self.wave_shift_ratio = ratio;
            self.invalidate();
        }
    }

    pub fn set_water_level_ratio(&mut self, ratio: f32) {
        if self.water_level_ratio != ratio {
            self.water_level_ratio = ratio;
            self.invalidate();
        }
    }

    /// Length of one wave cycle.
    pub fn set_anim_duration(&mut self, duration: Duration) {
        self.animator.set_wave_shift_duration(duration);
    }

    // Animation control

    pub fn start_animation(&mut self) {
        let shift = self.animator.start();
        self.set_wave_shift_ratio(shift);
    }

    pub fn end_animation(&mut self) {
        let shift = self.animator.end();
        self.set_wave_shift_ratio(shift);
    }

    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    pub fn pause_animation(&mut self) {
        self.animator.pause();
    }

    pub fn resume_animation(&mut self) {
        self.animator.resume();
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn is_wave_running(&self) -> bool {
        self.animator.is_wave_running()
    }

    pub fn is_wave_paused(&self) -> bool {
        self.animator.is_wave_paused()
    }

    // Getters

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn wave_color(&self) -> Argb {
        self.wave_color
    }

    pub fn wave_bg_color(&self) -> Argb {
        self.wave_bg_color
    }

    pub fn border_color(&self) -> Argb {
        self.border_color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn round_rectangle_xy(&self) -> f32 {
        self.round_rectangle_xy
    }

    pub fn amplitude_ratio(&self) -> f32 {
        self.amplitude_ratio
    }

    pub fn progress_value(&self) -> u8 {
        self.progress_value
    }

    pub fn wave_shift_ratio(&self) -> f32 {
        self.wave_shift_ratio
    }

    pub fn water_level_ratio(&self) -> f32 {
        self.water_level_ratio
    }

    pub fn anim_duration(&self) -> Duration {
        self.animator.wave_shift_duration()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn tile(&self) -> Option<&WaveTile> {
        self.tile.as_ref()
    }

    /// How many times a tile has been rendered.
    pub fn tile_generations(&self) -> u64 {
        self.tile_generations
    }
}

fn amplitude_from_per_mille(per_mille: f32) -> f32 {
    (per_mille / 1000.0).clamp(0.0, BASE_AMPLITUDE_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::WATER_LEVEL_DURATION;

    fn settle(view: &mut WaveLoadingView) {
        view.tick(WATER_LEVEL_DURATION + Duration::from_millis(1));
    }

    #[test]
    fn test_defaults_from_style() {
        let view = WaveLoadingView::default();
        assert_eq!(view.shape_type(), ShapeType::Circle);
        assert_eq!(view.progress_value(), 50);
        assert!((view.amplitude_ratio() - 0.05).abs() < 1e-6);
        // Water level starts full before the initial progress animation
        assert_eq!(view.water_level_ratio(), 1.0);
        assert!(!view.is_attached());
        assert!(view.tile().is_none());
    }

    #[test]
    fn test_initial_progress_converges() {
        let mut view = WaveLoadingView::new(&WaveStyle::default().with_progress(30));
        settle(&mut view);
        assert_eq!(view.water_level_ratio(), 0.3);
    }

    #[test]
    fn test_progress_converges_for_every_value() {
        let mut view = WaveLoadingView::default();
        for p in 0..=100u8 {
            view.set_progress_value(p);
            settle(&mut view);
            assert_eq!(view.water_level_ratio(), p as f32 / 100.0, "progress {p}");
        }
    }

    #[test]
    fn test_progress_animates_from_current_level() {
        let mut view = WaveLoadingView::default();
        settle(&mut view);
        view.set_progress_value(90);
        assert_eq!(view.water_level_ratio(), 0.5);
        view.tick(Duration::from_millis(300));
        let level = view.water_level_ratio();
        assert!(level > 0.5 && level < 0.9, "level {level}");
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut view = WaveLoadingView::default();
        view.set_progress_value(250);
        assert_eq!(view.progress_value(), 100);
        settle(&mut view);
        assert_eq!(view.water_level_ratio(), 1.0);
    }

    #[test]
    fn test_amplitude_is_clamped() {
        let mut view = WaveLoadingView::default();
        view.set_amplitude_ratio(80);
        assert!((view.amplitude_ratio() - 0.08).abs() < 1e-6);
        view.set_amplitude_ratio(500);
        assert_eq!(view.amplitude_ratio(), BASE_AMPLITUDE_RATIO);
        view.set_amplitude_ratio(0);
        assert_eq!(view.amplitude_ratio(), 0.0);

        let mut style = WaveStyle::default();
        style.wave_amplitude = 900.0;
        assert_eq!(WaveLoadingView::new(&style).amplitude_ratio(), BASE_AMPLITUDE_RATIO);
    }

    #[test]
    fn test_zero_size_skips_tile() {
        let mut view = WaveLoadingView::default();
        view.on_size_changed(0, 200);
        assert!(view.tile().is_none());
        assert_eq!(view.tile_generations(), 0);
        assert!(view.draw().is_none());
    }

    #[test]
    fn test_tile_regeneration_is_idempotent() {
        let mut view = WaveLoadingView::default();
        view.on_size_changed(120, 120);
        assert_eq!(view.tile_generations(), 1);

        view.on_size_changed(120, 120);
        view.set_wave_color(view.wave_color());
        view.set_wave_bg_color(Argb::WHITE);
        view.set_border_color(Argb::BLACK);
        assert_eq!(view.tile_generations(), 1);

        view.set_wave_color(Argb::from_rgb(0, 150, 136));
        assert_eq!(view.tile_generations(), 2);
        view.on_size_changed(140, 120);
        assert_eq!(view.tile_generations(), 3);
    }

    #[test]
    fn test_zero_size_keeps_previous_tile() {
        let mut view = WaveLoadingView::default();
        view.on_size_changed(80, 80);
        view.on_size_changed(0, 0);
        assert_eq!(view.tile().map(|t| t.width()), Some(80));
    }

    #[test]
    fn test_wave_shift_is_periodic() {
        let mut a = WaveLoadingView::default();
        let mut b = WaveLoadingView::default();
        a.set_anim_duration(Duration::from_millis(3000));
        b.set_anim_duration(Duration::from_millis(3000));
        a.on_attached();
        b.on_attached();
        a.tick(Duration::from_millis(1234));
        b.tick(Duration::from_millis(1234 + 3000));
        assert!((a.wave_shift_ratio() - b.wave_shift_ratio()).abs() < 1e-6);
        assert!(a.wave_shift_ratio() >= 0.0 && a.wave_shift_ratio() < 1.0);
    }

    #[test]
    fn test_attach_detach_drive_wave() {
        let mut view = WaveLoadingView::default();
        view.on_attached();
        assert!(view.is_wave_running());
        view.tick(Duration::from_millis(400));
        let shift = view.wave_shift_ratio();
        view.on_detached();
        assert!(!view.is_wave_running());
        view.tick(Duration::from_millis(400));
        assert_eq!(view.wave_shift_ratio(), shift);
    }

    #[test]
    fn test_pause_resume_and_end() {
        let mut view = WaveLoadingView::default();
        view.on_attached();
        view.tick(Duration::from_millis(200));
        view.pause_animation();
        assert!(view.is_wave_paused());
        let shift = view.wave_shift_ratio();
        view.tick(Duration::from_millis(200));
        assert_eq!(view.wave_shift_ratio(), shift);
        view.resume_animation();
        view.tick(Duration::from_millis(100));
        assert!(view.wave_shift_ratio() > shift);

        view.end_animation();
        assert_eq!(view.wave_shift_ratio(), 1.0);
        assert!(!view.is_wave_running());

        view.start_animation();
        assert_eq!(view.wave_shift_ratio(), 0.0);
    }

    #[test]
    fn test_shader_matrix_tracks_state() {
        let mut view = WaveLoadingView::default();
        assert!(view.current_shader_matrix().is_none());
        view.on_size_changed(200, 100);
        view.set_wave_shift_ratio(0.25);
        view.set_water_level_ratio(0.7);
        view.set_amplitude_ratio(100);
        let m = view.current_shader_matrix().unwrap();
        assert!((m.tx - 50.0).abs() < 1e-4);
        assert!((m.ty + 20.0).abs() < 1e-4);
        assert!((m.scale_y - 1.0).abs() < 1e-6);
        assert!((m.pivot_y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_shape_change_requests_layout() {
        let mut view = WaveLoadingView::default();
        assert_eq!(view.measure(300, 100), (300, 300));
        assert!(!view.needs_layout());
        view.set_shape_type(ShapeType::Rectangle);
        assert!(view.needs_layout());
        assert_eq!(view.measure(300, 100), (300, 100));
    }

    #[test]
    fn test_redraw_flag() {
        let mut view = WaveLoadingView::default();
        assert!(view.take_redraw());
        assert!(!view.take_redraw());
        view.set_border_width(3.0);
        assert!(view.take_redraw());
        view.set_wave_shift_ratio(0.0);
        assert!(!view.take_redraw());
    }

    #[test]
    fn test_draw_produces_frame_of_view_size() {
        let mut view = WaveLoadingView::new(&WaveStyle::default().with_shape(ShapeType::Rectangle));
        view.on_size_changed(160, 90);
        let frame = view.draw().unwrap();
        assert_eq!((frame.width(), frame.height()), (160, 90));
    }

    #[test]
    fn test_negative_border_is_zero() {
        let mut view = WaveLoadingView::default();
        view.set_border_width(-4.0);
        assert_eq!(view.border_width(), 0.0);
    }
}
