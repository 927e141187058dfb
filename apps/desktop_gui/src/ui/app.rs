//! App shell: header bar with the flip toggle, palette card, sequence
//! band, and the timed capacity warning. All editor state lives in process
//! memory; only chrome preferences survive a restart.

use std::time::Instant;

use anyhow::Context as _;
use eframe::egui;
use editor_core::{LimitNotice, SequenceStore, MAX_COMPONENTS};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controller::events::{apply_command, EditorCommand};
use crate::ui::canvas::canvas_ui;
use crate::ui::palette::palette_ui;
use crate::ui::theme::EditorPalette;

pub const SETTINGS_STORAGE_KEY: &str = "fiber_editor_settings";

/// Chrome preferences persisted across runs. The sequence itself is never
/// saved: closing the editor loses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedEditorSettings {
    pub text_scale: f32,
}

impl Default for PersistedEditorSettings {
    fn default() -> Self {
        Self { text_scale: 1.0 }
    }
}

pub fn decode_settings(text: &str) -> anyhow::Result<PersistedEditorSettings> {
    serde_json::from_str(text).context("invalid persisted editor settings")
}

pub struct EditorApp {
    store: SequenceStore,
    notice: LimitNotice,
    palette: EditorPalette,
    settings: PersistedEditorSettings,
}

impl EditorApp {
    pub fn new(persisted: Option<PersistedEditorSettings>, text_scale: Option<f32>) -> Self {
        let mut settings = persisted.unwrap_or_default();
        if let Some(scale) = text_scale {
            settings.text_scale = scale.clamp(0.75, 1.75);
        }
        Self {
            store: SequenceStore::new(),
            notice: LimitNotice::new(),
            palette: EditorPalette::light(),
            settings,
        }
    }

    fn header_bar(&self, ctx: &egui::Context, commands: &mut Vec<EditorCommand>) {
        egui::TopBottomPanel::top("components_header")
            .frame(
                egui::Frame::NONE
                    .fill(self.palette.header_bg)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Components")
                            .strong()
                            .size(18.0 * self.settings.text_scale)
                            .color(self.palette.header_text),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = match self.store.orientation_mode() {
                            shared::domain::Orientation::Normal => "Flip Components",
                            shared::domain::Orientation::Flipped => "Back to Original",
                        };
                        let flip = egui::Button::new(
                            egui::RichText::new(label)
                                .strong()
                                .size(13.0 * self.settings.text_scale)
                                .color(self.palette.header_text),
                        )
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::new(1.0, self.palette.header_text));
                        if ui.add(flip).clicked() {
                            commands.push(EditorCommand::ToggleOrientation);
                        }
                    });
                });
            });
    }

    fn warning_banner(&self, ctx: &egui::Context, now: Instant) {
        if !self.notice.is_visible(now) {
            return;
        }
        egui::Area::new(egui::Id::new("limit_warning"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(self.palette.warning_bg)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(18, 10))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Maximum limit of {MAX_COMPONENTS} components reached!"
                            ))
                            .strong()
                            .size(13.0 * self.settings.text_scale)
                            .color(self.palette.warning_text),
                        );
                    });
            });
        // Drop the banner at its deadline even without further input.
        if let Some(remaining) = self.notice.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut commands: Vec<EditorCommand> = Vec::new();

        self.header_bar(ctx, &mut commands);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.palette.canvas_bg))
            .show(ctx, |ui| {
                // Palette card.
                egui::Frame::NONE
                    .fill(self.palette.canvas_bg)
                    .inner_margin(egui::Margin::symmetric(16, 14))
                    .show(ui, |ui| {
                        if let Some(cmd) = palette_ui(
                            ui,
                            self.store.orientation_mode(),
                            self.store.is_full(),
                            &self.palette,
                            self.settings.text_scale,
                        ) {
                            commands.push(cmd);
                        }
                    });

                // Sequence band with the clear-all control above the strip.
                egui::Frame::NONE
                    .fill(self.palette.band_bg)
                    .inner_margin(egui::Margin::symmetric(16, 14))
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            if !self.store.is_empty() {
                                let clear = egui::Button::new(
                                    egui::RichText::new("Clear All")
                                        .strong()
                                        .size(12.0 * self.settings.text_scale),
                                );
                                if ui.add(clear).clicked() {
                                    commands.push(EditorCommand::ClearAll);
                                }
                            }
                        });
                        ui.add_space(8.0);
                        if let Some(cmd) = canvas_ui(
                            ui,
                            &self.store,
                            &self.palette,
                            self.settings.text_scale,
                        ) {
                            commands.push(cmd);
                        }
                    });
            });

        self.warning_banner(ctx, now);

        for command in commands {
            apply_command(&mut self.store, &mut self.notice, command, now);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.settings) {
            Ok(text) => storage.set_string(SETTINGS_STORAGE_KEY, text),
            Err(err) => warn!(%err, "failed to serialize editor settings"),
        }
    }
}
