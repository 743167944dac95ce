//! Shape rendering.
//!
//! Composes one frame: the background fill, the wave fill, and the
//! optional border, clipped to a circle, a square, or a rounded rectangle.

use tiny_skia::{
    FillRule, FilterQuality, Paint, Path, PathBuilder, Pattern, Pixmap, Rect, SpreadMode, Stroke,
    Transform,
};

use super::shader::WaveShader;
use crate::style::{Argb, ShapeType};

/// Cubic control-point factor for quarter-ellipse arcs.
const KAPPA: f32 = 0.552_284_8;

/// Everything about a frame except the wave itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub shape_type: ShapeType,
    pub background: Argb,
    pub border_color: Argb,
    pub border_width: f32,
    pub corner_radius: f32,
}

/// Render a `width` x `height` frame.
///
/// Returns `None` for an empty frame size.
pub fn render_frame(
    width: u32,
    height: u32,
    style: &ShapeStyle,
    shader: &WaveShader<'_>,
) -> Option<Pixmap> {
    let mut frame = Pixmap::new(width, height)?;
    let layer = shader.render_layer(width, height)?;

    let background = solid_paint(style.background);
    let wave = Paint {
        shader: Pattern::new(
            layer.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Nearest,
            1.0,
            Transform::identity(),
        ),
        anti_alias: true,
        ..Paint::default()
    };
    let border = solid_paint(style.border_color);
    let stroke = Stroke {
        width: style.border_width,
        ..Stroke::default()
    };

    let w = width as f32;
    let h = height as f32;
    let b = style.border_width;
    let has_border = b > 0.0;

    match style.shape_type {
        ShapeType::Circle => {
            let (cx, cy) = (w / 2.0, h / 2.0);
            if has_border {
                if let Some(ring) = PathBuilder::from_circle(cx, cy, (w - b) / 2.0 - 1.0) {
                    frame.stroke_path(&ring, &border, &stroke, Transform::identity(), None);
                }
            }
            if let Some(disc) = PathBuilder::from_circle(cx, cy, w / 2.0 - b) {
                fill(&mut frame, &disc, &background);
                fill(&mut frame, &disc, &wave);
            }
        }
        ShapeType::Square => {
            if has_border {
                if let Some(outline) = rect_path(b / 2.0, b / 2.0, w - b / 2.0 - 0.5, h - b / 2.0 - 0.5) {
                    frame.stroke_path(&outline, &border, &stroke, Transform::identity(), None);
                }
            }
            if let Some(body) = rect_path(b, b, w - b, h - b) {
                fill(&mut frame, &body, &background);
                fill(&mut frame, &body, &wave);
            }
        }
        ShapeType::Rectangle => {
            let r = style.corner_radius;
            if has_border {
                if let Some(body) =
                    rounded_rect_path(b / 2.0, b / 2.0, w - b / 2.0 - 0.5, h - b / 2.0 - 0.5, r, r)
                {
                    fill(&mut frame, &body, &background);
                    fill(&mut frame, &body, &wave);
                    frame.stroke_path(&body, &border, &stroke, Transform::identity(), None);
                }
            } else if let Some(body) = rounded_rect_path(0.0, 0.0, w, h, r, r) {
                fill(&mut frame, &body, &background);
                fill(&mut frame, &body, &wave);
            }
        }
    }

    Some(frame)
}

fn solid_paint(color: Argb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn fill(frame: &mut Pixmap, path: &Path, paint: &Paint<'_>) {
    frame.fill_path(path, paint, FillRule::Winding, Transform::identity(), None);
}

fn rect_path(left: f32, top: f32, right: f32, bottom: f32) -> Option<Path> {
    Rect::from_ltrb(left, top, right, bottom).map(PathBuilder::from_rect)
}

/// Rounded rectangle with corner radii `rx`, `ry`, each capped at half the
/// matching side.
pub fn rounded_rect_path(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    rx: f32,
    ry: f32,
) -> Option<Path> {
    let rect = Rect::from_ltrb(left, top, right, bottom)?;
    let rx = rx.clamp(0.0, rect.width() / 2.0);
    let ry = ry.clamp(0.0, rect.height() / 2.0);
    if rx == 0.0 || ry == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (kx, ky) = (rx * KAPPA, ry * KAPPA);
    let mut pb = PathBuilder::new();
    pb.move_to(left + rx, top);
    pb.line_to(right - rx, top);
    pb.cubic_to(right - rx + kx, top, right, top + ry - ky, right, top + ry);
    pb.line_to(right, bottom - ry);
    pb.cubic_to(right, bottom - ry + ky, right - rx + kx, bottom, right - rx, bottom);
    pb.line_to(left + rx, bottom);
    pb.cubic_to(left + rx - kx, bottom, left, bottom - ry + ky, left, bottom - ry);
    pb.line_to(left, top + ry);
    pb.cubic_to(left, top + ry - ky, left + rx - kx, top, left + rx, top);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::shader::ShaderMatrix;
    use crate::wave::tile::{TileKey, WaveTile};

    const WAVE: Argb = Argb(0xFF00_6AFF);

    fn style(shape_type: ShapeType) -> ShapeStyle {
        ShapeStyle {
            shape_type,
            background: Argb::TRANSPARENT,
            border_color: Argb::from_rgb(255, 0, 0),
            border_width: 0.0,
            corner_radius: 30.0,
        }
    }

    fn render(style: &ShapeStyle, size: u32, water_level: f32) -> Pixmap {
        let tile = WaveTile::generate(TileKey {
            width: size,
            height: size,
            color: WAVE,
        })
        .unwrap();
        let matrix = ShaderMatrix::wave(0.1, 0.0, water_level, size as f32, size as f32, tile.water_level());
        render_frame(size, size, style, &WaveShader::new(&tile, matrix)).unwrap()
    }

    #[test]
    fn test_circle_clips_corners() {
        let frame = render(&style(ShapeType::Circle), 100, 1.0);
        // Full water: center is wave-colored, corners stay clear
        let center = frame.pixel(50, 50).unwrap();
        assert_eq!(center.alpha(), 255);
        assert_eq!(center.blue(), 0xFF);
        assert_eq!(frame.pixel(1, 98).unwrap().alpha(), 0);
        assert_eq!(frame.pixel(98, 98).unwrap().alpha(), 0);
    }

    #[test]
    fn test_square_fills_corners() {
        let frame = render(&style(ShapeType::Square), 100, 1.0);
        assert_eq!(frame.pixel(1, 98).unwrap().alpha(), 255);
        assert_eq!(frame.pixel(98, 98).unwrap().alpha(), 255);
    }

    #[test]
    fn test_rectangle_rounds_corners() {
        let frame = render(&style(ShapeType::Rectangle), 100, 1.0);
        assert_eq!(frame.pixel(0, 99).unwrap().alpha(), 0);
        assert_eq!(frame.pixel(50, 99).unwrap().alpha(), 255);
    }

    #[test]
    fn test_empty_water_shows_background() {
        let mut s = style(ShapeType::Square);
        s.background = Argb::from_rgb(0, 255, 0);
        let frame = render(&s, 100, 0.0);
        let pixel = frame.pixel(50, 20).unwrap();
        assert_eq!(pixel.alpha(), 255);
        assert_eq!(pixel.green(), 255);
        assert_eq!(pixel.blue(), 0);
    }

    #[test]
    fn test_square_border_is_drawn() {
        let mut s = style(ShapeType::Square);
        s.border_width = 6.0;
        let frame = render(&s, 100, 0.0);
        let edge = frame.pixel(2, 50).unwrap();
        assert_eq!(edge.alpha(), 255);
        assert_eq!(edge.red(), 255);
        assert_eq!(edge.blue(), 0);
    }

    #[test]
    fn test_circle_border_is_drawn() {
        let mut s = style(ShapeType::Circle);
        s.border_width = 8.0;
        let frame = render(&s, 100, 0.0);
        // Ring centered at radius 45, 8px wide
        let ring = frame.pixel(50, 4).unwrap();
        assert_eq!(ring.red(), 255);
        assert!(ring.alpha() > 200);
    }

    #[test]
    fn test_rounded_rect_degenerates_to_rect() {
        let path = rounded_rect_path(0.0, 0.0, 10.0, 10.0, 0.0, 0.0).unwrap();
        let bounds = path.bounds();
        assert_eq!((bounds.width(), bounds.height()), (10.0, 10.0));
        assert!(rounded_rect_path(10.0, 0.0, 0.0, 10.0, 2.0, 2.0).is_none());
    }
}
