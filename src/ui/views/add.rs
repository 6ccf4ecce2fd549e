use egui::{Color32, ComboBox, Context, DragValue, Grid, RichText, TextEdit, Window};

use crate::TrackerApp;
use crate::data;
use crate::model::{Difficulty, ProblemDraft};

/// Alta manual de un problema. El borrador vive en `app.draft` y no
/// entra en el catálogo hasta que la validación pasa.
pub fn ui_add(app: &mut TrackerApp, ctx: &Context) {
    let mut open = app.show_add;
    let mut submit = false;
    let mut cancel = false;

    Window::new("➕ Añadir problema")
        .open(&mut open)
        .collapsible(false)
        .default_width(420.0)
        .show(ctx, |ui| {
            Grid::new("add_grid")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Título");
                    ui.add(
                        TextEdit::singleline(&mut app.draft.problem)
                            .desired_width(260.0)
                            .hint_text("p. ej. Two Sum"),
                    );
                    ui.end_row();

                    ui.label("Tema");
                    let topic_text = if app.draft.topic.is_empty() {
                        "Elige un tema".to_string()
                    } else {
                        app.draft.topic.clone()
                    };
                    ComboBox::from_id_salt("add_topic")
                        .selected_text(topic_text)
                        .show_ui(ui, |ui| {
                            for topic in data::topics() {
                                if ui
                                    .selectable_value(&mut app.draft.topic, topic.to_string(), topic)
                                    .changed()
                                {
                                    // el patrón viejo deja de tener sentido
                                    app.draft.pattern.clear();
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Patrón");
                    let patterns = data::patterns_for_topic(&app.draft.topic).unwrap_or(&[]);
                    let pattern_text = if app.draft.pattern.is_empty() {
                        "Elige un patrón".to_string()
                    } else {
                        app.draft.pattern.clone()
                    };
                    ComboBox::from_id_salt("add_pattern")
                        .selected_text(pattern_text)
                        .show_ui(ui, |ui| {
                            for pattern in patterns {
                                ui.selectable_value(
                                    &mut app.draft.pattern,
                                    pattern.to_string(),
                                    *pattern,
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Semana");
                    ui.add(DragValue::new(&mut app.draft.week).range(1..=16));
                    ui.end_row();

                    ui.label("Dificultad");
                    ComboBox::from_id_salt("add_difficulty")
                        .selected_text(app.draft.difficulty.as_str())
                        .show_ui(ui, |ui| {
                            for d in Difficulty::ALL {
                                ui.selectable_value(&mut app.draft.difficulty, d, d.as_str());
                            }
                        });
                    ui.end_row();

                    ui.label("Apuntes");
                    ui.add(
                        TextEdit::multiline(&mut app.draft.notes)
                            .desired_rows(3)
                            .desired_width(260.0),
                    );
                    ui.end_row();
                });

            if let Some(err) = &app.draft_error {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("❌ {err}")).color(Color32::from_rgb(0xef, 0x44, 0x44)),
                );
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Añadir").clicked() {
                    submit = true;
                }
                if ui.button("Cancelar").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel || !open {
        app.show_add = false;
        app.draft = ProblemDraft::default();
        app.draft_error = None;
    } else if submit {
        // cierra el diálogo él mismo cuando el alta es válida
        app.add_problem_from_draft();
    }
}
