use chrono::Local;
use egui::{Context, RichText, ScrollArea, Window};

use crate::TrackerApp;
use crate::app::schedule;

/// Reparto de los problemas pendientes en días consecutivos a partir
/// de hoy. Se enseñan las dos primeras semanas; el resto se resume.
pub fn ui_calendar(app: &mut TrackerApp, ctx: &Context) {
    let mut open = app.show_calendar;

    Window::new("🗓 Calendario de pendientes")
        .open(&mut open)
        .default_width(560.0)
        .show(ctx, |ui| {
            let start = Local::now().date_naive();
            let days = schedule::distribute_by_day(&app.problems, start);

            if days.is_empty() {
                ui.label("🎉 No queda nada pendiente: todo el catálogo está resuelto.");
                return;
            }

            let total: usize = days.values().map(|batch| batch.len()).sum();
            ui.label(format!(
                "{total} pendientes repartidos en {} días desde hoy",
                days.len()
            ));
            ui.add_space(6.0);

            ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                for (day, batch) in days.iter().take(14) {
                    ui.label(
                        RichText::new(format!(
                            "{} — {} problemas",
                            day.format("%d/%m/%Y"),
                            batch.len()
                        ))
                        .strong(),
                    );
                    for p in batch {
                        ui.label(format!(
                            "    #{} · {} ({})",
                            p.id,
                            p.problem,
                            p.difficulty.as_str()
                        ));
                    }
                    ui.add_space(4.0);
                }
                if days.len() > 14 {
                    ui.label(
                        RichText::new(format!("… y {} días más", days.len() - 14)).small(),
                    );
                }
            });
        });

    app.show_calendar = open;
}
