use super::*;

impl TrackerApp {
    /// Vuelve al catálogo inicial. Los apuntes generales sobreviven;
    /// todo lo demás (marcas, apuntes por problema, tiempos y altas
    /// manuales) se pierde.
    pub fn reset_progress(&mut self) {
        // 1) resiembra el catálogo completo
        self.problems = data::seed_problems();

        // 2) descarta el estado de sesión que apuntaba a registros viejos
        self.timer = None;
        self.notes_dialog = None;

        // 3) limpia las banderas de UI y deja constancia
        self.confirm_reset = false;
        self.dirty = true;
        self.message = "🔄 Progreso restablecido al catálogo inicial".to_string();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    "¿Seguro que quieres borrar todo tu progreso? \
                     ¡Esta acción no se puede deshacer!",
                );
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProblemPatch;

    #[test]
    fn el_reset_devuelve_la_semilla() {
        let mut app = TrackerApp::with_problems(data::seed_problems());
        app.update_problem("1", ProblemPatch::solved(true));
        app.update_problem("1", ProblemPatch::notes("apuntes".to_string()));
        app.dirty = false;

        app.reset_progress();

        assert_eq!(app.problems, data::seed_problems());
        assert!(app.dirty);
        assert!(!app.confirm_reset);
    }

    #[test]
    fn los_apuntes_generales_sobreviven_al_reset() {
        let mut app = TrackerApp::with_problems(data::seed_problems());
        app.universal_notes = "plan de repaso".to_string();
        app.reset_progress();
        assert_eq!(app.universal_notes, "plan de repaso");
    }

    #[test]
    fn el_reset_descarta_cronometro_y_dialogo() {
        let mut app = TrackerApp::with_problems(data::seed_problems());
        app.start_timer("1", 0.0);
        app.open_notes("2");
        app.reset_progress();
        assert!(app.timer.is_none());
        assert!(app.notes_dialog.is_none());
    }
}
