use egui::{Context, Id, RichText, ScrollArea, TextEdit, Window};

use crate::TrackerApp;
use crate::app::NotesTab;
use crate::ui::layout::code_block;
use crate::view_models::{NoteSegment, split_note_segments};

const CODE_TEMPLATE: &str = "\n```python\n# Tu código aquí\n\n```\n";

/// Apuntes de un problema: pestaña de edición con bloques de código
/// vallados y vista previa que los pinta con resaltado.
pub fn ui_notes(app: &mut TrackerApp, ctx: &Context) {
    let Some(dialog) = &mut app.notes_dialog else {
        return;
    };
    let mut save = false;
    let mut cancel = false;

    Window::new(format!("📝 Apuntes · {}", dialog.title))
        .id(Id::new("notes_window"))
        .collapsible(false)
        .default_width(540.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut dialog.tab, NotesTab::Edit, "✏ Editar");
                ui.selectable_value(&mut dialog.tab, NotesTab::Preview, "👁 Vista previa");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} caracteres", dialog.buffer.chars().count()))
                            .small(),
                    );
                });
            });
            ui.separator();

            match dialog.tab {
                NotesTab::Edit => {
                    if ui.small_button("➕ Bloque de código").clicked() {
                        dialog.buffer.push_str(CODE_TEMPLATE);
                    }
                    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                        ui.add(
                            TextEdit::multiline(&mut dialog.buffer)
                                .desired_rows(14)
                                .desired_width(f32::INFINITY)
                                .hint_text("Ideas, complejidad, código. Usa ``` para bloques."),
                        );
                    });
                }
                NotesTab::Preview => {
                    ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                        let segments = split_note_segments(&dialog.buffer);
                        if segments.is_empty() {
                            ui.label("Nada que previsualizar todavía.");
                        }
                        for (i, segment) in segments.iter().enumerate() {
                            match segment {
                                NoteSegment::Text(text) => {
                                    ui.label(text.as_str());
                                }
                                NoteSegment::Code { lang, body } => {
                                    code_block(ui, &format!("notes_code_{i}"), lang, body);
                                }
                            }
                            ui.add_space(4.0);
                        }
                    });
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("💾 Guardar").clicked() {
                    save = true;
                }
                if ui.button("Cancelar").clicked() {
                    cancel = true;
                }
            });
        });

    if save {
        app.save_notes();
    } else if cancel {
        app.close_notes();
    }
}
