//! Native entry point for the examforge desktop app.

use eframe::egui;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use examforge::{AppConfig, ExamForgeApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,examforge=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = AppConfig::from_env();
    info!(api_url = %config.api_url, "Starting examforge");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ExamForge")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "examforge",
        options,
        Box::new(|cc| Ok(Box::new(ExamForgeApp::new(cc, config)))),
    )?;
    Ok(())
}
