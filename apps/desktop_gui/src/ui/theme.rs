//! Color palette for the editor chrome, mirroring the reference design:
//! dark header bar, white canvas card, light gray sequence band.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorPalette {
    pub header_bg: egui::Color32,
    pub header_text: egui::Color32,
    pub canvas_bg: egui::Color32,
    pub band_bg: egui::Color32,
    pub card_stroke: egui::Color32,
    pub component_fill: egui::Color32,
    pub component_stroke: egui::Color32,
    pub component_text: egui::Color32,
    pub receiver_fill: egui::Color32,
    pub receiver_text: egui::Color32,
    pub connector: egui::Color32,
    pub placeholder_fill: egui::Color32,
    pub placeholder_stroke: egui::Color32,
    pub placeholder_text: egui::Color32,
    pub warning_bg: egui::Color32,
    pub warning_text: egui::Color32,
}

impl EditorPalette {
    pub fn light() -> Self {
        Self {
            header_bg: egui::Color32::from_rgb(0x33, 0x33, 0x33),
            header_text: egui::Color32::WHITE,
            canvas_bg: egui::Color32::WHITE,
            band_bg: egui::Color32::from_rgb(0xF4, 0xF4, 0xF4),
            card_stroke: egui::Color32::from_rgb(0xD1, 0xD5, 0xDB),
            component_fill: egui::Color32::from_rgb(0xEE, 0xF2, 0xFF),
            component_stroke: egui::Color32::from_rgb(0x64, 0x74, 0x8B),
            component_text: egui::Color32::from_rgb(0x1F, 0x29, 0x37),
            receiver_fill: egui::Color32::from_rgb(0x33, 0x33, 0x33),
            receiver_text: egui::Color32::WHITE,
            connector: egui::Color32::from_rgb(0x80, 0x80, 0x80),
            placeholder_fill: egui::Color32::from_rgb(0xF3, 0xF4, 0xF6),
            placeholder_stroke: egui::Color32::from_rgb(0x9C, 0xA3, 0xAF),
            placeholder_text: egui::Color32::from_rgb(0x6B, 0x72, 0x80),
            warning_bg: egui::Color32::from_rgb(0xEF, 0x44, 0x44),
            warning_text: egui::Color32::WHITE,
        }
    }
}

impl Default for EditorPalette {
    fn default() -> Self {
        Self::light()
    }
}
