use egui::{ComboBox, TextEdit, Ui};

use crate::TrackerApp;
use crate::app::queries;
use crate::data;
use crate::model::{Difficulty, FILTER_ALL, StatusFilter};

/// Barra de filtros de la tabla: búsqueda, tema, patrón, estado y
/// dificultad. El patrón se recorta al cambiar de tema.
pub fn filter_bar(app: &mut TrackerApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            TextEdit::singleline(&mut app.filters.search)
                .hint_text("Buscar por título o id")
                .desired_width(180.0),
        );

        let topic_text = if app.filters.topic == FILTER_ALL {
            "Todos los temas".to_string()
        } else {
            app.filters.topic.clone()
        };
        ComboBox::from_id_salt("filter_topic")
            .selected_text(topic_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut app.filters.topic,
                    FILTER_ALL.to_string(),
                    "Todos los temas",
                );
                for topic in data::topics() {
                    ui.selectable_value(&mut app.filters.topic, topic.to_string(), topic);
                }
            });
        // un patrón de otro tema no sobrevive al cambio
        queries::reconcile_pattern(&mut app.filters);

        let pattern_text = if app.filters.pattern == FILTER_ALL {
            "Todos los patrones".to_string()
        } else {
            app.filters.pattern.clone()
        };
        ComboBox::from_id_salt("filter_pattern")
            .selected_text(pattern_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut app.filters.pattern,
                    FILTER_ALL.to_string(),
                    "Todos los patrones",
                );
                for pattern in queries::patterns_for_filter(&app.filters.topic) {
                    ui.selectable_value(&mut app.filters.pattern, pattern.to_string(), pattern);
                }
            });

        ComboBox::from_id_salt("filter_status")
            .selected_text(app.filters.status.label())
            .show_ui(ui, |ui| {
                for option in StatusFilter::ALL_OPTIONS {
                    ui.selectable_value(&mut app.filters.status, option, option.label());
                }
            });

        let difficulty_text = if app.filters.difficulty == FILTER_ALL {
            "Toda dificultad".to_string()
        } else {
            app.filters.difficulty.clone()
        };
        ComboBox::from_id_salt("filter_difficulty")
            .selected_text(difficulty_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut app.filters.difficulty,
                    FILTER_ALL.to_string(),
                    "Toda dificultad",
                );
                for d in Difficulty::ALL {
                    ui.selectable_value(&mut app.filters.difficulty, d.as_str().to_string(), d.as_str());
                }
            });

        if app.filters.is_active() && ui.button("✖ Limpiar").clicked() {
            app.filters.clear();
        }
    });
}
