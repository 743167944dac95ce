//! Wave tile generation.
//!
//! The tile is a view-sized raster holding two overlaid sine waves: a
//! faded "back" wave and a full-color "front" wave shifted a quarter of
//! the width. It is later repeated horizontally and clamped vertically by
//! the [`WaveShader`](super::WaveShader).
//!
//! ```text
//! +------------------------+
//! |    wave length         |__________
//! |   /\          |   /\   |  |
//! |  /  \         |  /  \  | amplitude
//! | /    \        | /    \ |  |
//! |/      \       |/      \|__|_______
//! |        \      /        |  |
//! |         \    /         |  |
//! |          \  /          |  |
//! |           \/           | water level
//! |                        |  |
//! |                        |  |
//! +------------------------+__|_______
//! ```

use std::f64::consts::PI;

use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::style::Argb;

/// Wave height as a fraction of the tile height.
pub const BASE_AMPLITUDE_RATIO: f32 = 0.1;
/// Baseline of the waves as a fraction of the tile height.
pub const BASE_WATER_LEVEL_RATIO: f32 = 0.5;
/// Wavelength as a fraction of the tile width.
pub const WAVE_LENGTH_RATIO: f32 = 1.0;
/// Alpha factor applied to the back wave.
pub const BACK_WAVE_ALPHA: f32 = 0.3;

const LINE_WIDTH: f32 = 2.0;

/// Inputs a tile depends on. Identical keys produce identical tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub width: u32,
    pub height: u32,
    pub color: Argb,
}

/// A rendered wave tile.
pub struct WaveTile {
    key: TileKey,
    pixmap: Pixmap,
}

impl std::fmt::Debug for WaveTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveTile").field("key", &self.key).finish()
    }
}

impl WaveTile {
    /// Render a tile for `key`.
    ///
    /// Returns `None` when either dimension is zero, which happens before
    /// the view has been measured.
    pub fn generate(key: TileKey) -> Option<Self> {
        let TileKey { width, height, color } = key;
        if width == 0 || height == 0 {
            return None;
        }
        let mut pixmap = Pixmap::new(width, height)?;

        let wave_y = wave_heights(width, height);
        let bottom = (height + 1) as f32;
        let stroke = Stroke {
            width: LINE_WIDTH,
            ..Stroke::default()
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;

        // y = A·sin(ωx) + h
        paint.set_color(color.adjust_alpha(BACK_WAVE_ALPHA).to_skia());
        for (x, &top) in wave_y.iter().enumerate() {
            stroke_column(&mut pixmap, &paint, &stroke, x as f32, top, bottom);
        }

        paint.set_color(color.to_skia());
        let shift = (width / 4) as usize;
        let len = wave_y.len();
        for x in 0..len {
            let top = wave_y[(x + shift) % len];
            stroke_column(&mut pixmap, &paint, &stroke, x as f32, top, bottom);
        }

        tracing::debug!(width, height, color = %color, "generated wave tile");
        Some(Self { key, pixmap })
    }

    pub fn key(&self) -> TileKey {
        self.key
    }

    pub fn width(&self) -> u32 {
        self.key.width
    }

    pub fn height(&self) -> u32 {
        self.key.height
    }

    /// The untransformed water line, in tile pixels.
    pub fn water_level(&self) -> f32 {
        self.key.height as f32 * BASE_WATER_LEVEL_RATIO
    }

    /// Backing premultiplied RGBA raster.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Top of the back wave for every column in `0..=width`.
pub fn wave_heights(width: u32, height: u32) -> Vec<f32> {
    let angular_frequency = 2.0 * PI / WAVE_LENGTH_RATIO as f64 / width as f64;
    let amplitude = (height as f32 * BASE_AMPLITUDE_RATIO) as f64;
    let water_level = (height as f32 * BASE_WATER_LEVEL_RATIO) as f64;

    (0..=width)
        .map(|x| (water_level + amplitude * (x as f64 * angular_frequency).sin()) as f32)
        .collect()
}

fn stroke_column(pixmap: &mut Pixmap, paint: &Paint, stroke: &Stroke, x: f32, top: f32, bottom: f32) {
    let mut pb = PathBuilder::new();
    pb.move_to(x, top);
    pb.line_to(x, bottom);
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, paint, stroke, Transform::identity(), None);
    }
}
