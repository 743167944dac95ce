//! Time-based tweens for animated view properties.
//!
//! A [`Tween`] interpolates a scalar from a start value to an end value
//! over a fixed duration, shaped by an [`Easing`] curve. It does not own a
//! clock: the caller advances it with the frame delta, so it runs on
//! whatever frame loop drives the view.

use std::time::Duration;

/// Shape of the interpolation curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Starts fast and slows toward the end: `1 - (1 - t)^2`.
    Decelerate,
}

impl Easing {
    /// Map linear progress `t` (0-1) onto the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// What happens when a tween reaches its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stop at the end value.
    #[default]
    Once,
    /// Jump back to the start value and keep going.
    Infinite,
}

/// Playback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TweenState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// A scalar animation driven by an external clock.
///
/// # Example
///
/// ```ignore
/// let mut level = Tween::new(0.0, 0.8, Duration::from_secs(1)).with_easing(Easing::Decelerate);
/// level.start();
///
/// // Once per frame
/// if let Some(value) = level.advance(frame_dt) {
///     view.set_water_level_ratio(value);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    repeat: RepeatMode,
    /// Play time within the current cycle.
    elapsed: Duration,
    state: TweenState,
    value: f32,
}

impl Tween {
    /// Creates an idle, linear, non-repeating tween.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
            repeat: RepeatMode::default(),
            elapsed: Duration::ZERO,
            state: TweenState::Idle,
            value: from,
        }
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the repeat mode.
    pub fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Replace the start and end values. Takes effect on the next tick.
    pub fn set_range(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
    }

    /// Change the cycle length, keeping the current play time.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current animated value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn state(&self) -> TweenState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == TweenState::Paused
    }

    /// (Re)start from the beginning. Returns the start value.
    pub fn start(&mut self) -> f32 {
        self.elapsed = Duration::ZERO;
        self.state = TweenState::Running;
        self.value = self.interpolate(0.0);
        self.value
    }

    /// Stop where it is.
    pub fn cancel(&mut self) {
        self.state = TweenState::Idle;
    }

    /// Jump to the end value and stop. Returns the end value.
    pub fn end(&mut self) -> f32 {
        self.state = TweenState::Idle;
        self.elapsed = self.duration;
        self.value = self.interpolate(1.0);
        self.value
    }

    /// Freeze a running tween.
    pub fn pause(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Paused;
        }
    }

    /// Continue a paused tween from where it stopped.
    pub fn resume(&mut self) {
        if self.state == TweenState::Paused {
            self.state = TweenState::Running;
        }
    }

    /// Advance by `dt`. Returns the new value, or `None` when not running.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if self.state != TweenState::Running {
            return None;
        }
        self.elapsed += dt;

        let fraction = if self.duration.is_zero() {
            if self.repeat == RepeatMode::Once {
                self.state = TweenState::Idle;
            }
            1.0
        } else {
            match self.repeat {
                RepeatMode::Once => {
                    if self.elapsed >= self.duration {
                        self.elapsed = self.duration;
                        self.state = TweenState::Idle;
                        1.0
                    } else {
                        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
                    }
                }
                RepeatMode::Infinite => {
                    let cycle = self.duration.as_nanos();
                    let position = self.elapsed.as_nanos() % cycle;
                    self.elapsed = Duration::from_nanos(position as u64);
                    (position as f64 / cycle as f64) as f32
                }
            }
        };

        self.value = self.interpolate(fraction);
        Some(self.value)
    }

    fn interpolate(&self, fraction: f32) -> f32 {
        let eased = self.easing.apply(fraction);
        if eased >= 1.0 {
            // Land exactly on the end value
            return self.to;
        }
        self.from + (self.to - self.from) * eased
    }
}
