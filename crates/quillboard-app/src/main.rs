//! Quillboard demo binary.

use quillboard_app::QuillboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Quillboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Quillboard",
        options,
        Box::new(|_cc| Ok(Box::new(QuillboardApp::new()?))),
    )
}
