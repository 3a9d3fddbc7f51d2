// Countdown Rings Application
// Main entry point

use countdown_rings::services::{config, session};
use countdown_rings::ui::CountdownApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Countdown Rings");

    let session_state = session::load_session(&config::resolve_session_path())
        .unwrap_or_else(|err| {
            log::warn!("Failed to load session state: {err:?}, starting fresh");
            session::SessionState::default()
        });

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Countdown Rings")
        .with_inner_size([760.0, 560.0])
        .with_min_inner_size([420.0, 360.0]);

    // Reopen at the previous spot when the persisted geometry is usable
    if let Some(geometry) = session_state.window_geometry.filter(|g| g.is_plausible()) {
        viewport = viewport
            .with_position([geometry.x, geometry.y])
            .with_inner_size([geometry.width, geometry.height]);
    }

    eframe::run_native(
        "countdown-rings",
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(CountdownApp::new(cc)))),
    )
}
