use egui::{CentralPanel, Color32, Context, ScrollArea, Ui};

use crate::TrackerApp;
use crate::ui::helpers::stat_card;
use crate::ui::views::{filter_bar, table, week_banner};
use crate::view_models::format_minutes;

/// Pantalla principal: avisos, tarjetas, banner de semana, filtros y tabla.
pub fn ui_board(app: &mut TrackerApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.add_space(4.0);

        // Aviso de la última acción, descartable
        if !app.message.is_empty() {
            ui.horizontal(|ui| {
                ui.label(app.message.clone());
                if ui.small_button("✖").clicked() {
                    app.message.clear();
                }
            });
            ui.add_space(4.0);
        }

        stats_row(app, ui);
        ui.add_space(6.0);
        week_banner::week_banner(app, ui);
        ui.add_space(6.0);
        filter_bar::filter_bar(app, ui);
        ui.add_space(6.0);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            table::problems_table(app, ui);
        });
    });
}

fn stats_row(app: &TrackerApp, ui: &mut Ui) {
    let stats = app.stats();
    ui.horizontal(|ui| {
        stat_card(ui, stats.total.to_string(), "Total", Color32::GRAY);
        stat_card(
            ui,
            stats.solved.to_string(),
            "Resueltos",
            Color32::from_rgb(0x22, 0xc5, 0x5e),
        );
        stat_card(
            ui,
            stats.resolved.to_string(),
            "Re-resueltos",
            Color32::from_rgb(0xf5, 0x9e, 0x0b),
        );
        stat_card(
            ui,
            stats.explained.to_string(),
            "Explicados",
            Color32::from_rgb(0x3b, 0x82, 0xf6),
        );
        stat_card(
            ui,
            stats.mastered.to_string(),
            "Dominados",
            Color32::from_rgb(0xa8, 0x55, 0xf7),
        );
        stat_card(
            ui,
            format_minutes(stats.total_time_minutes),
            "Tiempo total",
            Color32::GRAY,
        );
    });
}
