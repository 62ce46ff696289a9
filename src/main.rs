use std::path::PathBuf;

use pixel_paint::{CONFIG_ENV, InteractionController, PaintApp, PaintConfig};

fn main() -> eframe::Result {
    env_logger::init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => PaintConfig::load_or_default(&PathBuf::from(path)),
        None => PaintConfig::default(),
    };

    let controller = match InteractionController::from_config(&config) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("Cannot start editor: {err}");
            std::process::exit(1);
        }
    };

    // Leave room for the status bar under the canvas
    let inner_size = egui::vec2(
        config.canvas_width as f32 + 16.0,
        config.canvas_height as f32 + 48.0,
    );
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_title("Pixel Paint"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Paint",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, controller)))),
    )
}
