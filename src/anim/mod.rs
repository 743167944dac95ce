//! Animation module
//!
//! Frame-driven tweens and the wave view's animation pair.

pub mod animator;
pub mod tween;

pub use animator::{AnimationFrame, WaveAnimator, DEFAULT_WAVE_SHIFT_DURATION, WATER_LEVEL_DURATION};
pub use tween::{Easing, RepeatMode, Tween, TweenState};
