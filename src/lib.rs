//! Wave Loading Library
//!
//! An animated liquid-fill progress indicator: a sine-wave tile repeated
//! horizontally inside a circle, square or rounded rectangle, with the
//! water level rising to the current progress.

pub mod anim;
pub mod app;
pub mod style;
pub mod view;
pub mod wave;
pub mod widgets;
