use egui::{ProgressBar, RichText, Ui};

use crate::TrackerApp;
use crate::app::schedule;

/// Banner con la semana en curso del plan y su barra de avance.
pub fn week_banner(app: &TrackerApp, ui: &mut Ui) {
    let Some(plan) = app.current_week() else { return };
    let progress = schedule::week_progress(&app.problems, plan);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("📅 Semana {}: {}", plan.week, plan.focus)).strong(),
                );
                ui.label(RichText::new(plan.patterns).small());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{}/{} · {}%",
                        progress.solved, progress.total, progress.percent
                    ));
                    ui.add(ProgressBar::new(progress.percent as f32 / 100.0).desired_width(160.0));
                    ui.label(RichText::new(plan.hours_estimate).small());
                });
            });
        });
}
