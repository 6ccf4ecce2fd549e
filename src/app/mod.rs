use crate::data;
use crate::model::{DraftError, Filters, Problem, ProblemDraft};

// Submódulos
pub mod actions;
pub mod exports;
pub mod queries;
pub mod resets;
pub mod schedule;
pub mod store;
pub mod timer;

pub use timer::ActiveTimer;

/// Pestañas del diálogo de apuntes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotesTab {
    #[default]
    Edit,
    Preview,
}

/// Estado del diálogo de apuntes de un problema. El texto se edita en
/// un buffer propio y solo se vuelca al registro al pulsar Guardar.
pub struct NotesDialog {
    pub problem_id: String,
    pub title: String,
    pub buffer: String,
    pub tab: NotesTab,
}

pub struct TrackerApp {
    // Estado canónico
    pub problems: Vec<Problem>,
    pub universal_notes: String,

    // Vista
    pub filters: Filters,
    pub message: String,

    // Cronómetro (como mucho uno activo)
    pub timer: Option<ActiveTimer>,

    // Diálogos
    pub confirm_reset: bool,
    pub show_plan: bool,
    pub show_calendar: bool,
    pub show_export: bool,
    pub show_add: bool,
    pub show_universal_notes: bool,
    pub notes_dialog: Option<NotesDialog>,
    pub draft: ProblemDraft,
    pub draft_error: Option<DraftError>,

    // Mutación pendiente de volcar al almacén (se hace al final del frame)
    pub dirty: bool,
}

impl TrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let outcome = store::load_or_seed(cc.storage);

        // Aviso no bloqueante cuando hubo migración de catálogo
        let message = if outcome.migrated {
            format!(
                "📦 Catálogo actualizado a v{}: tu progreso se ha conservado",
                data::CATALOG_VERSION
            )
        } else {
            String::new()
        };

        Self {
            problems: outcome.problems,
            universal_notes: outcome.universal_notes,
            filters: Filters::default(),
            message,
            timer: None,
            confirm_reset: false,
            show_plan: false,
            show_calendar: false,
            show_export: false,
            show_add: false,
            show_universal_notes: false,
            notes_dialog: None,
            draft: ProblemDraft::default(),
            draft_error: None,
            // La lista migrada aún no está en el almacén
            dirty: outcome.migrated,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            universal_notes: String::new(),
            filters: Filters::default(),
            message: String::new(),
            timer: None,
            confirm_reset: false,
            show_plan: false,
            show_calendar: false,
            show_export: false,
            show_add: false,
            show_universal_notes: false,
            notes_dialog: None,
            draft: ProblemDraft::default(),
            draft_error: None,
            dirty: false,
        }
    }
}
