//! Sequence strip: renders the derived layout left to right — start
//! receiver, placed components joined by dashed connectors, the end
//! receiver at the current terminus, then numbered placeholder circles for
//! unused capacity. Entries whose asset id fails to resolve draw nothing
//! but keep their slot in the derivation.

use eframe::egui;
use editor_core::{catalog, derive_layout, LayoutItem, SequenceStore, MAX_COMPONENTS};
use shared::domain::PlacedComponent;

use crate::controller::events::EditorCommand;
use crate::ui::theme::EditorPalette;

const RECEIVER_SIZE: egui::Vec2 = egui::vec2(88.0, 96.0);
const COMPONENT_SIZE: egui::Vec2 = egui::vec2(72.0, 56.0);
const CONNECTOR_WIDTH: f32 = 14.0;
const PLACEHOLDER_WIDTH: f32 = 48.0;
const PLACEHOLDER_RADIUS: f32 = 12.0;

pub fn canvas_ui(
    ui: &mut egui::Ui,
    store: &SequenceStore,
    palette: &EditorPalette,
    text_scale: f32,
) -> Option<EditorCommand> {
    let mut command = None;

    egui::Frame::NONE
        .fill(palette.canvas_bg)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(2.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            egui::ScrollArea::horizontal()
                .id_salt("sequence_strip")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;
                        for item in derive_layout(store.components(), MAX_COMPONENTS) {
                            match item {
                                LayoutItem::StartReceiver => {
                                    receiver_marker(ui, catalog::RECEIVER_LEFT, palette, text_scale);
                                }
                                LayoutItem::EndReceiver => {
                                    receiver_marker(ui, catalog::RECEIVER_RIGHT, palette, text_scale);
                                }
                                LayoutItem::Connector => connector_marker(ui, palette),
                                LayoutItem::Component(placed) => {
                                    if let Some(cmd) =
                                        component_marker(ui, &placed, palette, text_scale)
                                    {
                                        command = Some(cmd);
                                    }
                                }
                                LayoutItem::Placeholder { slot } => {
                                    placeholder_marker(ui, slot, palette, text_scale);
                                }
                            }
                        }
                    });
                });
        });

    command
}

fn receiver_marker(ui: &mut egui::Ui, caption: &str, palette: &EditorPalette, text_scale: f32) {
    let (rect, _) = ui.allocate_exact_size(RECEIVER_SIZE, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, palette.receiver_fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        egui::FontId::monospace(12.0 * text_scale),
        palette.receiver_text,
    );
}

fn connector_marker(ui: &mut egui::Ui, palette: &EditorPalette) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(CONNECTOR_WIDTH, 2.0), egui::Sense::hover());
    let y = rect.center().y;
    ui.painter().extend(egui::Shape::dashed_line(
        &[egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
        egui::Stroke::new(1.0, palette.connector),
        4.0,
        3.0,
    ));
}

fn component_marker(
    ui: &mut egui::Ui,
    placed: &PlacedComponent,
    palette: &EditorPalette,
    text_scale: f32,
) -> Option<EditorCommand> {
    // Unresolvable references occupy a slot but draw nothing.
    let asset = catalog::resolve(&placed.asset_id)?;

    let mut command = None;
    ui.vertical(|ui| {
        let (rect, _) = ui.allocate_exact_size(COMPONENT_SIZE, egui::Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, palette.component_fill);
        painter.rect_stroke(
            rect,
            4.0,
            egui::Stroke::new(1.0, palette.component_stroke),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            asset.reference(placed.orientation),
            egui::FontId::monospace(9.0 * text_scale),
            palette.component_text,
        );

        let remove = egui::Button::new(
            egui::RichText::new("Remove")
                .size(9.0 * text_scale)
                .color(palette.component_text),
        )
        .frame(false);
        if ui.add(remove).on_hover_text(placed.asset_id.as_str()).clicked() {
            command = Some(EditorCommand::Remove { id: placed.id });
        }
    });
    command
}

fn placeholder_marker(ui: &mut egui::Ui, slot: usize, palette: &EditorPalette, text_scale: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(PLACEHOLDER_WIDTH, COMPONENT_SIZE.y),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.circle(
        rect.center(),
        PLACEHOLDER_RADIUS,
        palette.placeholder_fill,
        egui::Stroke::new(2.0, palette.placeholder_stroke),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        slot.to_string(),
        egui::FontId::proportional(10.0 * text_scale),
        palette.placeholder_text,
    );
}
