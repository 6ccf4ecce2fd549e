use egui::{Context, RichText, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

use crate::TrackerApp;
use crate::view_models::format_clock;

pub fn top_panel(app: &mut TrackerApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("📘 DSA Interview Tracker").strong());

            if let Some(plan) = app.current_week() {
                ui.separator();
                ui.label(format!("Semana {}: {}", plan.week, plan.focus));
            }

            // Marcador del cronómetro activo, con pausa y parada
            let active = app
                .timer
                .as_ref()
                .map(|t| (t.running, t.problem_id.clone(), format_clock(t.seconds)));
            if let Some((running, id, clock)) = active {
                ui.separator();
                ui.label(RichText::new(format!("⏱ {clock} · #{id}")).strong());
                let now = ctx.input(|i| i.time);
                if ui.small_button(if running { "⏸" } else { "▶" }).clicked() {
                    app.toggle_timer_pause(now);
                }
                if ui.small_button("⏹").clicked() {
                    app.stop_timer(now);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reiniciar").clicked() {
                    app.confirm_reset = true;
                }
                if ui.button("➕ Añadir").clicked() {
                    app.show_add = true;
                }
                if ui.button("📤 Exportar").clicked() {
                    app.show_export = true;
                }
                if ui.button("📝 Apuntes").clicked() {
                    app.show_universal_notes = true;
                }
                if ui.button("🗓 Calendario").clicked() {
                    app.show_calendar = true;
                }
                if ui.button("📅 Plan").clicked() {
                    app.show_plan = true;
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

fn syntax_for(lang: &str) -> Syntax {
    match lang {
        "rust" => Syntax::rust(),
        "sql" => Syntax::sql(),
        "sh" | "bash" | "shell" => Syntax::shell(),
        // los apuntes de entrevistas se escriben casi siempre en Python
        _ => Syntax::python(),
    }
}

/// Bloque de código de solo lectura para la vista previa de apuntes.
pub fn code_block(ui: &mut Ui, id: &str, lang: &str, code: &str) {
    let mut buf = code.to_owned();
    CodeEditor::default()
        .id_source(id)
        .with_rows(buf.lines().count().max(3))
        .with_fontsize(13.0)
        .with_theme(ColorTheme::GITHUB_DARK)
        .with_syntax(syntax_for(lang))
        .with_numlines(true)
        .vscroll(false)
        .show(ui, &mut buf);
}
