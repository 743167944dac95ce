//! Styled attributes for the wave loading view.
//!
//! A style captures everything the view needs at construction: the shape,
//! the three colors, border width, wave amplitude, initial progress and
//! the rectangle's corner radius. Styles are read from JSON with the same
//! camelCase keys the layout attributes use; missing keys fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use super::{Argb, StyleError};

/// Default wave color, `#212121`.
pub const DEFAULT_WAVE_COLOR: Argb = Argb(0xFF21_2121);
/// Default background, fully transparent.
pub const DEFAULT_WAVE_BACKGROUND_COLOR: Argb = Argb::TRANSPARENT;
/// Default amplitude in per-mille of the view height.
pub const DEFAULT_AMPLITUDE_VALUE: f32 = 50.0;
/// Default progress, 0-100.
pub const DEFAULT_PROGRESS_VALUE: u8 = 50;
/// Default border width in pixels.
pub const DEFAULT_BORDER_WIDTH: f32 = 0.0;
/// Default corner radius for the rectangle shape.
pub const DEFAULT_ROUND_RECTANGLE_XY: f32 = 30.0;

/// Outline the wave is clipped to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Circle,
    Square,
    Rectangle,
}

impl ShapeType {
    /// All shapes, in chooser order.
    pub const ALL: [ShapeType; 3] = [ShapeType::Circle, ShapeType::Square, ShapeType::Rectangle];

    /// Upper-case display name.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeType::Circle => "CIRCLE",
            ShapeType::Square => "SQUARE",
            ShapeType::Rectangle => "RECTANGLE",
        }
    }
}

/// Construction parameters for a [`WaveLoadingView`](crate::view::WaveLoadingView).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveStyle {
    pub shape_type: ShapeType,
    pub wave_color: Argb,
    pub wave_background_color: Argb,
    pub border_color: Argb,
    /// Border stroke width in pixels.
    pub border_width: f32,
    /// Wave amplitude in per-mille of the view height.
    pub wave_amplitude: f32,
    /// Initial progress, 0-100.
    pub progress_value: u8,
    /// Corner radius of the rectangle shape.
    #[serde(rename = "roundRectangleXY")]
    pub round_rectangle_xy: f32,
}

impl Default for WaveStyle {
    fn default() -> Self {
        Self {
            shape_type: ShapeType::default(),
            wave_color: DEFAULT_WAVE_COLOR,
            wave_background_color: DEFAULT_WAVE_BACKGROUND_COLOR,
            border_color: DEFAULT_WAVE_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
            wave_amplitude: DEFAULT_AMPLITUDE_VALUE,
            progress_value: DEFAULT_PROGRESS_VALUE,
            round_rectangle_xy: DEFAULT_ROUND_RECTANGLE_XY,
        }
    }
}

impl WaveStyle {
    /// Parse a style from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: WaveStyle = serde_json::from_str(json)?;
        Ok(style)
    }

    /// Set the shape.
    pub fn with_shape(mut self, shape_type: ShapeType) -> Self {
        self.shape_type = shape_type;
        self
    }

    /// Set the wave color.
    pub fn with_wave_color(mut self, color: Argb) -> Self {
        self.wave_color = color;
        self
    }

    /// Set the border.
    pub fn with_border(mut self, width: f32, color: Argb) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    /// Set the initial progress.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress_value = progress;
        self
    }
}

/// Load a style from a JSON file.
pub fn load_from_file(path: &std::path::Path) -> Result<WaveStyle, StyleError> {
    let json = std::fs::read_to_string(path)?;
    let style = WaveStyle::from_json(&json)?;
    tracing::debug!(path = %path.display(), shape = ?style.shape_type, "loaded wave style");
    Ok(style)
}
