//! Wave rendering module
//!
//! Tile generation, the repeat/clamp wave shader, and shape compositing.

pub mod shader;
pub mod shape;
pub mod tile;

pub use shader::{ShaderMatrix, WaveShader};
pub use shape::{render_frame, ShapeStyle};
pub use tile::{TileKey, WaveTile, BASE_AMPLITUDE_RATIO, BASE_WATER_LEVEL_RATIO};
