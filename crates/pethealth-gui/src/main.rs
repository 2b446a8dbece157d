//! Pet Health Studio - Desktop GUI Application
//!
//! A single-window viewer and editor for a pet's health history: medical
//! records, vaccination schedule, upcoming visits and food.

use eframe::egui;
use pethealth_gui::app::PetHealthApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pet Health Studio")
            .with_inner_size([1180.0, 780.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pet Health Studio",
        options,
        Box::new(|cc| Ok(Box::new(PetHealthApp::new(cc)))),
    )
}
