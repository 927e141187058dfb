mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing::warn;

use crate::ui::app::{decode_settings, EditorApp, SETTINGS_STORAGE_KEY};

/// Fiber sequence builder: assemble up to 12 fiber-optic components
/// between a fixed pair of receivers.
#[derive(Debug, Parser)]
#[command(name = "fiber-sequence-builder")]
struct Args {
    /// Tracing env filter, e.g. "info" or "editor_core=debug".
    #[arg(long, default_value = "info")]
    log_filter: String,

    /// Override the persisted UI text scale (0.75–1.75).
    #[arg(long)]
    text_scale: Option<f32>,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter.as_str())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fiber Sequence Builder")
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([960.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Fiber Sequence Builder",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                let text = storage.get_string(SETTINGS_STORAGE_KEY)?;
                decode_settings(&text)
                    .map_err(|err| warn!(%err, "ignoring persisted editor settings"))
                    .ok()
            });
            Ok(Box::new(EditorApp::new(persisted, args.text_scale)))
        }),
    )
}
