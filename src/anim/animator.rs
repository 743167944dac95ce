//! The wave view's two animations.
//!
//! - wave shift: 0 → 1, linear, looping, drives horizontal wave motion
//! - water level: current → progress/100, decelerating, one-shot
//!
//! Start/cancel/end/pause/resume act on the wave shift only. The water
//! level animation is restarted by every progress change.

use std::time::Duration;

use super::tween::{Easing, RepeatMode, Tween};

/// Default wave shift cycle length.
pub const DEFAULT_WAVE_SHIFT_DURATION: Duration = Duration::from_millis(1000);
/// Length of a water level transition.
pub const WATER_LEVEL_DURATION: Duration = Duration::from_millis(1000);

/// Values produced by one animation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationFrame {
    pub wave_shift: Option<f32>,
    pub water_level: Option<f32>,
}

impl AnimationFrame {
    pub fn is_empty(&self) -> bool {
        self.wave_shift.is_none() && self.water_level.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct WaveAnimator {
    wave_shift: Tween,
    water_level: Tween,
}

impl Default for WaveAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveAnimator {
    pub fn new() -> Self {
        Self {
            wave_shift: Tween::new(0.0, 1.0, DEFAULT_WAVE_SHIFT_DURATION)
                .with_easing(Easing::Linear)
                .with_repeat(RepeatMode::Infinite),
            water_level: Tween::new(1.0, 1.0, WATER_LEVEL_DURATION)
                .with_easing(Easing::Decelerate),
        }
    }

    /// Advance both animations by `dt`.
    pub fn tick(&mut self, dt: Duration) -> AnimationFrame {
        AnimationFrame {
            wave_shift: self.wave_shift.advance(dt),
            water_level: self.water_level.advance(dt),
        }
    }

    /// Start a water level transition. Returns the starting value.
    pub fn animate_water_level(&mut self, from: f32, to: f32) -> f32 {
        self.water_level.set_range(from, to);
        self.water_level.start()
    }

    pub fn set_wave_shift_duration(&mut self, duration: Duration) {
        self.wave_shift.set_duration(duration);
    }

    pub fn wave_shift_duration(&self) -> Duration {
        self.wave_shift.duration()
    }

    /// Restart the wave motion. Returns the starting shift.
    pub fn start(&mut self) -> f32 {
        tracing::trace!("wave animation start");
        self.wave_shift.start()
    }

    pub fn cancel(&mut self) {
        tracing::trace!("wave animation cancel");
        self.wave_shift.cancel();
    }

    /// Jump the wave motion to its end. Returns the final shift.
    pub fn end(&mut self) -> f32 {
        tracing::trace!("wave animation end");
        self.wave_shift.end()
    }

    pub fn pause(&mut self) {
        tracing::trace!("wave animation pause");
        self.wave_shift.pause();
    }

    pub fn resume(&mut self) {
        tracing::trace!("wave animation resume");
        self.wave_shift.resume();
    }

    pub fn is_wave_running(&self) -> bool {
        self.wave_shift.is_running()
    }

    pub fn is_wave_paused(&self) -> bool {
        self.wave_shift.is_paused()
    }

    pub fn is_water_level_running(&self) -> bool {
        self.water_level.is_running()
    }

    /// Whether another tick would change anything.
    pub fn is_animating(&self) -> bool {
        self.is_wave_running() || self.is_water_level_running()
    }
}
