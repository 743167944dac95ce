//! Wave Loading - demo for the liquid-fill progress widget
//!
//! Entry point for the application. An optional first argument names a
//! JSON style file.

use std::path::PathBuf;

use eframe::egui;
use tracing_subscriber::EnvFilter;
use wave_loading::app::DemoApp;
use wave_loading::style::{self, WaveStyle};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (wave_style, style_error) = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match style::load_from_file(&path) {
            Ok(loaded) => (loaded, None),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "falling back to default style");
                (WaveStyle::default(), Some(e.to_string()))
            }
        },
        None => (WaveStyle::default(), None),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 520.0])
            .with_title("Wave Loading"),
        ..Default::default()
    };

    eframe::run_native(
        "Wave Loading",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(wave_style, style_error)))),
    )
}
