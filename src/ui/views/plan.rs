use egui::{Context, Grid, RichText, ScrollArea, Window};

use crate::TrackerApp;
use crate::app::schedule;
use crate::data;

/// Plan completo de 16 semanas con el avance real de cada rango, más
/// los consejos del cuaderno.
pub fn ui_plan(app: &mut TrackerApp, ctx: &Context) {
    let current = app.current_week().map(|p| p.week);
    let mut open = app.show_plan;

    Window::new("📅 Plan de ejecución")
        .open(&mut open)
        .default_width(820.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                Grid::new("plan_grid")
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Sem").strong());
                        ui.label(RichText::new("Foco").strong());
                        ui.label(RichText::new("Patrones").strong());
                        ui.label(RichText::new("Problemas").strong());
                        ui.label(RichText::new("Nº").strong());
                        ui.label(RichText::new("Horas").strong());
                        ui.label(RichText::new("Re-resolver").strong());
                        ui.label(RichText::new("Avance").strong());
                        ui.end_row();

                        for plan in data::EXECUTION_ORDER {
                            let is_current = current == Some(plan.week);
                            let week_cell = if is_current {
                                format!("➡ {}", plan.week)
                            } else {
                                plan.week.to_string()
                            };
                            if is_current {
                                ui.label(RichText::new(week_cell).strong());
                                ui.label(RichText::new(plan.focus).strong());
                            } else {
                                ui.label(week_cell);
                                ui.label(plan.focus);
                            }
                            ui.label(RichText::new(plan.patterns).small());
                            ui.label(plan.problem_ids);
                            ui.label(plan.problem_count.to_string());
                            ui.label(plan.hours_estimate);
                            ui.label(RichText::new(plan.resolve_ids).small());

                            let progress = schedule::week_progress(&app.problems, plan);
                            if progress.total == 0 {
                                ui.label("—");
                            } else {
                                ui.label(format!("{}%", progress.percent))
                                    .on_hover_text(plan.outcome);
                            }
                            ui.end_row();
                        }
                    });
            });

            ui.add_space(8.0);
            ui.label(RichText::new("💡 Consejos del cuaderno").strong());
            for tip in data::WORKBOOK_TIPS {
                ui.label(format!("• {tip}"));
            }
        });

    app.show_plan = open;
}
