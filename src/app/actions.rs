use super::*;
use crate::model::ProblemPatch;

impl TrackerApp {
    pub fn problem(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Mutación parcial de un registro por id. Si el id no existe no pasa
    /// nada; el orden y la identidad del resto nunca cambian.
    pub fn update_problem(&mut self, id: &str, patch: ProblemPatch) {
        if let Some(p) = self.problems.iter_mut().find(|p| p.id == id) {
            patch.apply_to(p);
            self.dirty = true;
        }
    }

    /// Alta desde el borrador del diálogo. El id nuevo es max+1 y el
    /// registro se añade al final, sin reordenar nada.
    pub fn add_problem_from_draft(&mut self) {
        if let Err(err) = self.draft.validate() {
            self.message = format!("❌ {err}");
            self.draft_error = Some(err);
            return;
        }

        let id = store::next_id(&self.problems);
        let draft = std::mem::take(&mut self.draft);
        self.problems.push(Problem {
            id: id.clone(),
            week: draft.week,
            topic: draft.topic,
            pattern: draft.pattern,
            problem: draft.problem.trim().to_string(),
            difficulty: draft.difficulty,
            solved: false,
            resolved: false,
            explained: false,
            notes: draft.notes,
            total_time: 0,
            scheduled_date: None,
        });

        self.draft_error = None;
        self.show_add = false;
        self.dirty = true;
        self.message = format!("✅ Problema #{id} añadido al final de la lista");
    }

    // ─── Apuntes por problema ───

    pub fn open_notes(&mut self, id: &str) {
        if let Some(p) = self.problem(id) {
            self.notes_dialog = Some(NotesDialog {
                problem_id: p.id.clone(),
                title: p.problem.clone(),
                buffer: p.notes.clone(),
                tab: NotesTab::Edit,
            });
        }
    }

    /// Vuelca el buffer del diálogo al registro y lo cierra.
    pub fn save_notes(&mut self) {
        if let Some(dialog) = self.notes_dialog.take() {
            self.update_problem(&dialog.problem_id, ProblemPatch::notes(dialog.buffer));
            self.message = "📝 Apuntes guardados".to_string();
        }
    }

    pub fn close_notes(&mut self) {
        self.notes_dialog = None;
    }

    /// Los apuntes globales se editan in place desde la vista; aquí solo
    /// queda marcar que hay que persistir.
    pub fn touch_universal_notes(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn app_with_three() -> TrackerApp {
        let mk = |id: &str, title: &str| Problem {
            id: id.to_string(),
            week: 1,
            topic: "Arrays & Strings".to_string(),
            pattern: "Two Pointers".to_string(),
            problem: title.to_string(),
            difficulty: Difficulty::Easy,
            solved: false,
            resolved: false,
            explained: false,
            notes: String::new(),
            total_time: 0,
            scheduled_date: None,
        };
        TrackerApp::with_problems(vec![mk("1", "A"), mk("2", "B"), mk("3", "C")])
    }

    #[test]
    fn update_solo_toca_el_registro_pedido() {
        let mut app = app_with_three();
        app.update_problem("2", ProblemPatch::solved(true));

        assert!(!app.problems[0].solved);
        assert!(app.problems[1].solved);
        assert!(!app.problems[2].solved);
        assert!(app.dirty);

        let ids: Vec<&str> = app.problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn update_con_id_ausente_no_hace_nada() {
        let mut app = app_with_three();
        let before = app.problems.clone();
        app.update_problem("99", ProblemPatch::solved(true));
        assert_eq!(app.problems, before);
        assert!(!app.dirty);
    }

    #[test]
    fn alta_valida_asigna_ids_crecientes() {
        let mut app = app_with_three();
        app.draft = ProblemDraft {
            problem: "Spiral Matrix".to_string(),
            topic: "Arrays & Strings".to_string(),
            pattern: "Matrix".to_string(),
            week: 2,
            difficulty: Difficulty::Medium,
            notes: String::new(),
        };
        app.show_add = true;
        app.add_problem_from_draft();

        assert_eq!(app.problems.len(), 4);
        assert_eq!(app.problems[3].id, "4");
        assert!(!app.show_add);
        assert!(app.dirty);

        // Segunda alta seguida: id estrictamente mayor
        app.draft = ProblemDraft {
            problem: "Set Matrix Zeroes".to_string(),
            topic: "Arrays & Strings".to_string(),
            pattern: "Matrix".to_string(),
            week: 2,
            difficulty: Difficulty::Medium,
            notes: String::new(),
        };
        app.add_problem_from_draft();
        assert_eq!(app.problems[4].id, "5");
    }

    #[test]
    fn alta_invalida_deja_el_almacen_intacto() {
        let mut app = app_with_three();
        let before = app.problems.clone();
        app.draft = ProblemDraft {
            problem: String::new(),
            topic: "Arrays & Strings".to_string(),
            pattern: "Matrix".to_string(),
            week: 1,
            difficulty: Difficulty::Easy,
            notes: String::new(),
        };
        app.show_add = true;
        app.add_problem_from_draft();

        assert_eq!(app.problems, before);
        assert!(app.show_add, "el diálogo sigue abierto para corregir");
        assert_eq!(app.draft_error, Some(DraftError::EmptyTitle));
        assert!(!app.dirty);
    }

    #[test]
    fn los_apuntes_pasan_por_el_buffer_del_dialogo() {
        let mut app = app_with_three();
        app.open_notes("2");
        {
            let dialog = app.notes_dialog.as_mut().unwrap();
            assert_eq!(dialog.title, "B");
            dialog.buffer = "idea clave\n```python\n# dos punteros\n```\n".to_string();
        }
        app.save_notes();

        assert!(app.notes_dialog.is_none());
        assert_eq!(
            app.problems[1].notes,
            "idea clave\n```python\n# dos punteros\n```\n"
        );
        // El texto con fences sobrevive tal cual
        assert!(app.problems[1].notes.contains("```python"));
    }

    #[test]
    fn abrir_apuntes_de_id_inexistente_no_abre_nada() {
        let mut app = app_with_three();
        app.open_notes("42");
        assert!(app.notes_dialog.is_none());
    }
}
