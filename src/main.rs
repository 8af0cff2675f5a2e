#![windows_subsystem = "windows"]

mod app;
mod fit;
mod models;
mod utils;
mod ui {
    pub mod central;
    pub mod side;
    pub mod top;
}

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Image Resize"),
        ..Default::default()
    };

    eframe::run_native(
        "Image Resize",
        options,
        Box::new(|_cc| Ok(Box::new(app::ResizeApp::default()))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run native application: {e}"))
}
