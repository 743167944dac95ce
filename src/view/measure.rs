//! Measurement rule for the wave view.

use crate::style::ShapeType;

/// Resolve the view's size from the size its parent offers.
///
/// Rectangles take the requested size as-is. Circles and squares become
/// square, using the larger of the two requested sides.
pub fn measure(shape_type: ShapeType, width: u32, height: u32) -> (u32, u32) {
    match shape_type {
        ShapeType::Rectangle => (width, height),
        ShapeType::Circle | ShapeType::Square => {
            let size = width.max(height);
            (size, size)
        }
    }
}
