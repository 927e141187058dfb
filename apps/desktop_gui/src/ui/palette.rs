//! Component palette: two left-aligned rows of buttons over the catalog
//! (entries 0..9, then 9..15 — a convention over catalog order). Buttons
//! preview the current orientation mode and dim once the sequence is full.

use eframe::egui;
use editor_core::catalog;
use shared::domain::Orientation;

use crate::controller::events::EditorCommand;
use crate::ui::theme::EditorPalette;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(118.0, 44.0);
const FIRST_ROW_LEN: usize = 9;

pub fn palette_ui(
    ui: &mut egui::Ui,
    mode: Orientation,
    disabled: bool,
    palette: &EditorPalette,
    text_scale: f32,
) -> Option<EditorCommand> {
    let mut command = None;
    let (row1, row2) = catalog::all().split_at(FIRST_ROW_LEN);

    for row in [row1, row2] {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            for asset in row {
                let caption = egui::RichText::new(asset.reference(mode))
                    .monospace()
                    .size(11.0 * text_scale)
                    .color(palette.component_text);
                let button = egui::Button::new(caption)
                    .min_size(BUTTON_SIZE)
                    .fill(palette.component_fill)
                    .stroke(egui::Stroke::new(1.0, palette.component_stroke));

                let response = ui.add_enabled(!disabled, button).on_hover_text(asset.id);
                if response.clicked() {
                    command = Some(EditorCommand::Select {
                        asset_id: asset.id.to_string(),
                    });
                }
            }
        });
        ui.add_space(6.0);
    }

    command
}
