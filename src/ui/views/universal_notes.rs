use egui::{Context, ScrollArea, TextEdit, Window};

use crate::TrackerApp;

/// Apuntes generales de preparación, fuera de cualquier problema.
/// Se guardan según se escriben, sin botón aparte.
pub fn ui_universal_notes(app: &mut TrackerApp, ctx: &Context) {
    let mut open = app.show_universal_notes;
    let mut touched = false;

    Window::new("📝 Apuntes generales")
        .open(&mut open)
        .default_width(540.0)
        .show(ctx, |ui| {
            ui.label("Plantillas, complejidades y trucos que no pertenecen a ningún problema.");
            ui.add_space(4.0);
            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                let response = ui.add(
                    TextEdit::multiline(&mut app.universal_notes)
                        .desired_rows(16)
                        .desired_width(f32::INFINITY)
                        .hint_text("Big-O de cada estructura, plantilla de binary search..."),
                );
                if response.changed() {
                    touched = true;
                }
            });
        });

    if touched {
        app.touch_universal_notes();
    }
    app.show_universal_notes = open;
}
