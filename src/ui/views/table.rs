use egui::{Grid, RichText, Ui};

use crate::TrackerApp;
use crate::app::queries;
use crate::ui::helpers::tag_label;
use crate::view_models::{RowStatus, difficulty_color, format_minutes, topic_color};

/// Acciones de fila que tocan `app` entero; se aplican después del
/// bucle para no pelearse con el préstamo del registro en edición.
enum RowAction {
    OpenNotes(String),
    StartTimer(String),
}

pub fn problems_table(app: &mut TrackerApp, ui: &mut Ui) {
    let visible = queries::filtered_indices(&app.problems, &app.filters);
    if visible.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label("No hay problemas que casen con los filtros.");
        });
        return;
    }

    ui.label(
        RichText::new(format!("{} de {} problemas", visible.len(), app.problems.len())).small(),
    );
    ui.add_space(2.0);

    let timing = app.timer.as_ref().map(|t| t.problem_id.clone());
    let mut action: Option<RowAction> = None;
    let mut changed = false;

    Grid::new("problems_grid")
        .striped(true)
        .spacing([10.0, 6.0])
        .min_col_width(24.0)
        .show(ui, |ui| {
            ui.label(RichText::new("#").strong());
            ui.label(RichText::new("Problema").strong());
            ui.label(RichText::new("Tema").strong());
            ui.label(RichText::new("Patrón").strong());
            ui.label(RichText::new("Sem").strong());
            ui.label(RichText::new("Dif").strong());
            ui.label(RichText::new("✅").strong()).on_hover_text("Resuelto");
            ui.label(RichText::new("🔄").strong()).on_hover_text("Re-resuelto");
            ui.label(RichText::new("📖").strong()).on_hover_text("Explicado");
            ui.label(RichText::new("⏱").strong());
            ui.label("");
            ui.end_row();

            for idx in visible {
                let p = &mut app.problems[idx];
                let status = RowStatus::of(p);

                ui.label(p.id.as_str());
                ui.label(RichText::new(p.problem.as_str()).color(status.color()))
                    .on_hover_text(status.label());
                tag_label(ui, p.topic.as_str(), topic_color(&p.topic));
                ui.label(RichText::new(p.pattern.as_str()).small());
                ui.label(p.week.to_string());
                ui.label(
                    RichText::new(p.difficulty.as_str()).color(difficulty_color(p.difficulty)),
                );

                changed |= ui.checkbox(&mut p.solved, "").changed();
                changed |= ui.checkbox(&mut p.resolved, "").changed();
                changed |= ui.checkbox(&mut p.explained, "").changed();

                ui.label(format_minutes(p.total_time.into()));

                ui.horizontal(|ui| {
                    let notes_icon = if p.notes.is_empty() { "📝" } else { "📌" };
                    if ui.small_button(notes_icon).on_hover_text("Apuntes").clicked() {
                        action = Some(RowAction::OpenNotes(p.id.clone()));
                    }
                    if timing.as_deref() == Some(p.id.as_str()) {
                        ui.label("⏱");
                    } else if ui.small_button("▶").on_hover_text("Cronometrar").clicked() {
                        action = Some(RowAction::StartTimer(p.id.clone()));
                    }
                });
                ui.end_row();
            }
        });

    if changed {
        app.dirty = true;
    }
    match action {
        Some(RowAction::OpenNotes(id)) => app.open_notes(&id),
        Some(RowAction::StartTimer(id)) => {
            let now = ui.ctx().input(|i| i.time);
            app.start_timer(&id, now);
        }
        None => {}
    }
}
