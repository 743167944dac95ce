//! Widgets module
//!
//! egui widgets built on the wave loading view.

pub mod wave_loading;

pub use wave_loading::{wave_loading, WaveLoading, WaveLoadingConfig};
