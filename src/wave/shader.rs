//! Wave shader: the tile plus its animated placement.
//!
//! The tile is mapped into view space by a vertical scale pinned at the
//! tile's water line followed by a translation. Sampling inverts that
//! mapping, then repeats horizontally and clamps vertically.

use tiny_skia::{Pixmap, PremultipliedColorU8};

use super::tile::{WaveTile, BASE_AMPLITUDE_RATIO, BASE_WATER_LEVEL_RATIO};

/// Tile-to-view transform: `scale(1, scale_y)` about `(0, pivot_y)`, then
/// `translate(tx, ty)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderMatrix {
    pub scale_y: f32,
    pub pivot_y: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for ShaderMatrix {
    fn default() -> Self {
        Self {
            scale_y: 1.0,
            pivot_y: 0.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl ShaderMatrix {
    /// Placement of a wave tile for the given animation ratios.
    ///
    /// `amplitude_ratio / BASE_AMPLITUDE_RATIO` scales the wave height,
    /// `shift_ratio` moves it by a fraction of the view width, and
    /// `water_level_ratio` raises it from the tile's half-height baseline.
    pub fn wave(
        amplitude_ratio: f32,
        shift_ratio: f32,
        water_level_ratio: f32,
        view_width: f32,
        view_height: f32,
        pivot_y: f32,
    ) -> Self {
        Self {
            scale_y: amplitude_ratio / BASE_AMPLITUDE_RATIO,
            pivot_y,
            tx: shift_ratio * view_width,
            ty: (BASE_WATER_LEVEL_RATIO - water_level_ratio) * view_height,
        }
    }

    /// Map a tile point into view space.
    pub fn map_point(&self, u: f32, v: f32) -> (f32, f32) {
        (
            u + self.tx,
            self.pivot_y + self.scale_y * (v - self.pivot_y) + self.ty,
        )
    }

    /// Map a view point back into tile space.
    ///
    /// A zero vertical scale flattens the tile onto the pivot line; points
    /// below it map to `+inf` and points above to `-inf`.
    pub fn invert_point(&self, x: f32, y: f32) -> (f32, f32) {
        let u = x - self.tx;
        let dy = y - self.ty - self.pivot_y;
        let v = if self.scale_y.abs() < f32::EPSILON {
            if dy >= 0.0 {
                f32::INFINITY
            } else {
                f32::NEG_INFINITY
            }
        } else {
            self.pivot_y + dy / self.scale_y
        };
        (u, v)
    }
}

/// A wave tile with its current placement.
#[derive(Debug, Clone, Copy)]
pub struct WaveShader<'a> {
    tile: &'a WaveTile,
    matrix: ShaderMatrix,
}

impl<'a> WaveShader<'a> {
    pub fn new(tile: &'a WaveTile, matrix: ShaderMatrix) -> Self {
        Self { tile, matrix }
    }

    pub fn matrix(&self) -> ShaderMatrix {
        self.matrix
    }

    /// Sample the shader at a view point.
    pub fn sample(&self, x: f32, y: f32) -> PremultipliedColorU8 {
        let (u, v) = self.matrix.invert_point(x, y);
        let column = self.repeat_column(u);
        let row = self.clamp_row(v);
        self.tile.pixmap().pixels()[row * self.tile.width() as usize + column]
    }

    /// Evaluate the shader at every pixel center of a `width` x `height` layer.
    pub fn render_layer(&self, width: u32, height: u32) -> Option<Pixmap> {
        let mut layer = Pixmap::new(width, height)?;
        let tile_width = self.tile.width() as usize;
        let source = self.tile.pixmap().pixels();

        let columns: Vec<usize> = (0..width)
            .map(|x| self.repeat_column(self.matrix.invert_point(x as f32 + 0.5, 0.0).0))
            .collect();

        for (y, row_pixels) in layer
            .pixels_mut()
            .chunks_exact_mut(width as usize)
            .enumerate()
        {
            let (_, v) = self.matrix.invert_point(0.0, y as f32 + 0.5);
            let offset = self.clamp_row(v) * tile_width;
            for (pixel, &column) in row_pixels.iter_mut().zip(&columns) {
                *pixel = source[offset + column];
            }
        }
        Some(layer)
    }

    fn repeat_column(&self, u: f32) -> usize {
        let width = self.tile.width() as i64;
        (u.floor() as i64).rem_euclid(width) as usize
    }

    fn clamp_row(&self, v: f32) -> usize {
        if v.is_nan() {
            return 0;
        }
        let last = self.tile.height() as i64 - 1;
        (v.floor() as i64).clamp(0, last) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Argb;
    use crate::wave::tile::TileKey;

    fn tile(width: u32, height: u32) -> WaveTile {
        WaveTile::generate(TileKey {
            width,
            height,
            color: Argb::from_rgb(0, 120, 255),
        })
        .unwrap()
    }

    #[test]
    fn test_identity_at_base_ratios() {
        let m = ShaderMatrix::wave(0.1, 0.0, 0.5, 200.0, 100.0, 50.0);
        assert!((m.scale_y - 1.0).abs() < 1e-6);
        assert_eq!(m.tx, 0.0);
        assert_eq!(m.ty, 0.0);
        assert_eq!(m.map_point(10.0, 30.0), (10.0, 30.0));
    }

    #[test]
    fn test_translation_follows_ratios() {
        let m = ShaderMatrix::wave(0.1, 0.25, 0.8, 200.0, 100.0, 50.0);
        assert!((m.tx - 50.0).abs() < 1e-4);
        // Higher water moves the tile up
        assert!((m.ty + 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_scale_is_pinned_at_water_line() {
        let m = ShaderMatrix::wave(0.05, 0.0, 0.5, 100.0, 100.0, 50.0);
        assert!((m.scale_y - 0.5).abs() < 1e-6);
        assert_eq!(m.map_point(0.0, 50.0), (0.0, 50.0));
        let (_, y) = m.map_point(0.0, 70.0);
        assert!((y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_invert_undoes_map() {
        let m = ShaderMatrix::wave(0.07, 0.4, 0.3, 160.0, 90.0, 45.0);
        let (x, y) = m.map_point(12.0, 33.0);
        let (u, v) = m.invert_point(x, y);
        assert!((u - 12.0).abs() < 1e-3);
        assert!((v - 33.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_scale_flattens() {
        let m = ShaderMatrix::wave(0.0, 0.0, 0.5, 100.0, 100.0, 50.0);
        assert_eq!(m.invert_point(0.0, 80.0).1, f32::INFINITY);
        assert_eq!(m.invert_point(0.0, 20.0).1, f32::NEG_INFINITY);

        let t = tile(100, 100);
        let shader = WaveShader::new(&t, m);
        assert_eq!(shader.sample(10.5, 80.5).alpha(), 255);
        assert_eq!(shader.sample(10.5, 20.5).alpha(), 0);
    }

    #[test]
    fn test_sampling_repeats_horizontally() {
        let t = tile(100, 100);
        let shader = WaveShader::new(&t, ShaderMatrix::wave(0.1, 0.0, 0.5, 100.0, 100.0, 50.0));
        for y in [45.5, 55.5, 58.5] {
            assert_eq!(shader.sample(3.5, y), shader.sample(103.5, y));
            assert_eq!(shader.sample(3.5, y), shader.sample(-96.5, y));
        }
    }

    #[test]
    fn test_sampling_clamps_vertically() {
        let t = tile(100, 100);
        // Water level 0 pushes the tile down by half the view
        let low = WaveShader::new(&t, ShaderMatrix::wave(0.1, 0.0, 0.0, 100.0, 100.0, 50.0));
        assert_eq!(low.sample(5.5, 30.5).alpha(), 0);
        // Water level 1 pulls the bottom row up over the whole lower half
        let full = WaveShader::new(&t, ShaderMatrix::wave(0.1, 0.0, 1.0, 100.0, 100.0, 50.0));
        assert_eq!(full.sample(5.5, 55.5).alpha(), 255);
        assert_eq!(full.sample(5.5, 400.0).alpha(), 255);
    }

    #[test]
    fn test_layer_matches_point_samples() {
        let t = tile(40, 30);
        let shader = WaveShader::new(&t, ShaderMatrix::wave(0.08, 0.3, 0.6, 40.0, 30.0, 15.0));
        let layer = shader.render_layer(40, 30).unwrap();
        for (x, y) in [(0, 0), (7, 14), (39, 29), (20, 18)] {
            assert_eq!(
                layer.pixel(x, y).unwrap(),
                shader.sample(x as f32 + 0.5, y as f32 + 0.5),
                "pixel ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_full_shift_is_a_whole_period() {
        let t = tile(64, 64);
        let a = WaveShader::new(&t, ShaderMatrix::wave(0.1, 0.0, 0.5, 64.0, 64.0, 32.0));
        let b = WaveShader::new(&t, ShaderMatrix::wave(0.1, 1.0, 0.5, 64.0, 64.0, 32.0));
        assert_eq!(
            a.render_layer(64, 64).unwrap().data(),
            b.render_layer(64, 64).unwrap().data()
        );
    }
}
