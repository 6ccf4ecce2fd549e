use chrono::Local;
use egui::{Context, RichText, Window};

use crate::TrackerApp;
use crate::app::exports;
use crate::view_models::format_minutes;

/// Exporta el progreso completo: al portapapeles en cualquier
/// plataforma y a fichero en escritorio.
pub fn ui_export(app: &mut TrackerApp, ctx: &Context) {
    let mut open = app.show_export;
    let mut message: Option<String> = None;

    Window::new("📤 Exportar progreso")
        .open(&mut open)
        .collapsible(false)
        .default_width(440.0)
        .show(ctx, |ui| {
            let stats = app.stats();
            ui.label(
                RichText::new(format!(
                    "{} problemas · {} dominados · {} de práctica acumulada",
                    stats.total,
                    stats.mastered,
                    format_minutes(stats.total_time_minutes)
                ))
                .strong(),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("📋 Copiar JSON").clicked() {
                    match app.export_json() {
                        Ok(json) => {
                            ctx.copy_text(json);
                            message = Some("📋 JSON copiado al portapapeles".to_string());
                        }
                        Err(e) => message = Some(format!("❌ No se pudo generar el JSON: {e}")),
                    }
                }
                if ui.button("📋 Copiar CSV").clicked() {
                    ctx.copy_text(app.export_csv());
                    message = Some("📋 CSV copiado al portapapeles".to_string());
                }
            });

            #[cfg(not(target_arch = "wasm32"))]
            {
                let today = Local::now().date_naive();
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("💾 Guardar JSON").clicked() {
                        message = Some(match app.export_json() {
                            Ok(json) => write_export(&exports::json_filename(today), &json),
                            Err(e) => format!("❌ No se pudo generar el JSON: {e}"),
                        });
                    }
                    if ui.button("💾 Guardar CSV").clicked() {
                        message =
                            Some(write_export(&exports::csv_filename(today), &app.export_csv()));
                    }
                });
            }

            #[cfg(target_arch = "wasm32")]
            {
                let today = Local::now().date_naive();
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "En la web: copia y pega en un fichero local ({})",
                        exports::json_filename(today)
                    ))
                    .small(),
                );
            }
        });

    if let Some(msg) = message {
        app.message = msg;
    }
    app.show_export = open;
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(filename: &str, contents: &str) -> String {
    match std::fs::write(filename, contents) {
        Ok(()) => format!("💾 Guardado en ./{filename}"),
        Err(e) => format!("❌ No se pudo guardar {filename}: {e}"),
    }
}
