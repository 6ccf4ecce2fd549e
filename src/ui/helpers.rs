// src/ui/helpers.rs
use egui::{Color32, RichText, Ui};

/// Tarjeta compacta de una métrica para la fila de estadísticas.
pub fn stat_card(ui: &mut Ui, value: String, label: &str, color: Color32) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(20.0).strong().color(color));
                ui.label(RichText::new(label).small());
            });
        });
}

/// Etiqueta coloreada para temas y patrones en la tabla.
pub fn tag_label(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text).color(color));
}
