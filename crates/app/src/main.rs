mod app;
mod playback;

use app::ExplorerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Lotka-Volterra Phase Portrait",
        options,
        Box::new(|_cc| Ok(Box::new(ExplorerApp::new()))),
    )
}
