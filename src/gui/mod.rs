mod app;
mod dialogs;
mod panels;
mod state;

use anyhow::Result;
use eframe::egui;
use std::path::{Path, PathBuf};

use app::SpriterApp;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub(crate) fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Launch the GUI, optionally opening `image` right away
pub fn run(image: Option<PathBuf>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spriter - CSS Sprite Generator",
        options,
        Box::new(|cc| Ok(Box::new(SpriterApp::new(cc, image)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}
