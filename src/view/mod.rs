//! View module
//!
//! The host-independent wave loading view and its measurement rule.

pub mod measure;
pub mod wave_view;

pub use measure::measure;
pub use wave_view::{WaveLoadingView, MAX_PROGRESS};
