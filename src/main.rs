//! Gomoku agent GUI
//!
//! Play against the agent or against another player with agent hints.
//! Usage: `gomoku [config.toml]` (defaults to `gomoku.toml`).

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::AppConfig;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gomoku=info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("gomoku.toml"), PathBuf::from);

    let config = AppConfig::load_or_default(&config_path).unwrap_or_else(|e| {
        tracing::error!("{e}; using defaults");
        AppConfig::default()
    });
    tracing::info!(
        board_size = config.agent.board_size(),
        win_size = config.agent.win_size(),
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
