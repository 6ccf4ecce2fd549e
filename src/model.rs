use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dificultad de un problema. El parseo es tolerante: cualquier
/// valor desconocido cae en `Medium` en vez de romper la carga.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "Easy" => Difficulty::Easy,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// Un problema del plan de estudio. Se serializa en camelCase porque
/// así viven los registros en el almacén persistente y en los exports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String, // entero-como-string ("27"); único dentro del almacén
    pub week: u32,
    pub topic: String,
    pub pattern: String,
    pub problem: String, // Título
    pub difficulty: Difficulty,
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub resolved: bool, // re-resuelto desde cero
    #[serde(default)]
    pub explained: bool, // explicado sin mirar el código
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub total_time: u32, // minutos acumulados
    #[serde(default)]
    pub scheduled_date: Option<String>, // informativo, nunca se valida
}

impl Problem {
    /// Dominado: los tres flags a la vez. Marcar uno nunca implica otro.
    pub fn is_mastered(&self) -> bool {
        self.solved && self.resolved && self.explained
    }

    pub fn is_in_progress(&self) -> bool {
        self.solved && !self.is_mastered()
    }

    pub fn is_not_started(&self) -> bool {
        !self.solved
    }
}

/// Centinela de los selectores de filtro ("todos").
pub const FILTER_ALL: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Partial,
    None,
}

impl StatusFilter {
    pub const ALL_OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Complete,
        StatusFilter::Partial,
        StatusFilter::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Complete => "Dominados",
            StatusFilter::Partial => "En curso",
            StatusFilter::None => "Sin empezar",
        }
    }
}

/// Especificación de filtros de la tabla. Entrada pura del motor de
/// vistas; no se persiste. Topic/pattern/difficulty son strings con el
/// centinela "all": un valor no reconocido simplemente no casa con nada.
#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    pub search: String,
    pub topic: String,
    pub pattern: String,
    pub status: StatusFilter,
    pub difficulty: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            topic: FILTER_ALL.to_string(),
            pattern: FILTER_ALL.to_string(),
            status: StatusFilter::All,
            difficulty: FILTER_ALL.to_string(),
        }
    }
}

impl Filters {
    pub fn is_active(&self) -> bool {
        *self != Filters::default()
    }

    pub fn clear(&mut self) {
        *self = Filters::default();
    }
}

/// Actualización parcial de un problema: solo los campos `Some` se
/// aplican. El resto del registro queda intacto.
#[derive(Clone, Debug, Default)]
pub struct ProblemPatch {
    pub week: Option<u32>,
    pub topic: Option<String>,
    pub pattern: Option<String>,
    pub problem: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub solved: Option<bool>,
    pub resolved: Option<bool>,
    pub explained: Option<bool>,
    pub notes: Option<String>,
    pub total_time: Option<u32>,
    pub scheduled_date: Option<String>,
}

impl ProblemPatch {
    pub fn solved(v: bool) -> Self {
        Self {
            solved: Some(v),
            ..Default::default()
        }
    }

    pub fn resolved(v: bool) -> Self {
        Self {
            resolved: Some(v),
            ..Default::default()
        }
    }

    pub fn explained(v: bool) -> Self {
        Self {
            explained: Some(v),
            ..Default::default()
        }
    }

    pub fn notes(text: String) -> Self {
        Self {
            notes: Some(text),
            ..Default::default()
        }
    }

    pub fn total_time(minutes: u32) -> Self {
        Self {
            total_time: Some(minutes),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, p: &mut Problem) {
        if let Some(week) = self.week {
            p.week = week;
        }
        if let Some(topic) = &self.topic {
            p.topic = topic.clone();
        }
        if let Some(pattern) = &self.pattern {
            p.pattern = pattern.clone();
        }
        if let Some(title) = &self.problem {
            p.problem = title.clone();
        }
        if let Some(difficulty) = self.difficulty {
            p.difficulty = difficulty;
        }
        if let Some(solved) = self.solved {
            p.solved = solved;
        }
        if let Some(resolved) = self.resolved {
            p.resolved = resolved;
        }
        if let Some(explained) = self.explained {
            p.explained = explained;
        }
        if let Some(notes) = &self.notes {
            p.notes = notes.clone();
        }
        if let Some(minutes) = self.total_time {
            p.total_time = minutes;
        }
        if let Some(date) = &self.scheduled_date {
            p.scheduled_date = Some(date.clone());
        }
    }
}

/// Borrador del diálogo "añadir problema". El id lo asigna el almacén.
#[derive(Clone, Debug)]
pub struct ProblemDraft {
    pub problem: String,
    pub topic: String,
    pub pattern: String,
    pub week: u32,
    pub difficulty: Difficulty,
    pub notes: String,
}

impl Default for ProblemDraft {
    fn default() -> Self {
        Self {
            problem: String::new(),
            topic: String::new(),
            pattern: String::new(),
            week: 1,
            difficulty: Difficulty::Medium,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("el título del problema no puede estar vacío")]
    EmptyTitle,
    #[error("selecciona un tema de la lista")]
    UnknownTopic,
    #[error("el patrón no pertenece al tema elegido")]
    InvalidPattern,
    #[error("la semana debe ser 1 o mayor")]
    InvalidWeek,
}

impl ProblemDraft {
    /// Valida los campos obligatorios contra el catálogo de temas.
    /// El patrón tiene que pertenecer al tema elegido (tabla topic→pattern).
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.problem.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.week == 0 {
            return Err(DraftError::InvalidWeek);
        }
        let Some(patterns) = crate::data::patterns_for_topic(&self.topic) else {
            return Err(DraftError::UnknownTopic);
        };
        if !patterns.contains(&self.pattern.as_str()) {
            return Err(DraftError::InvalidPattern);
        }
        Ok(())
    }
}

/// Fila estática del plan de 16 semanas. Solo lectura; sirve para
/// calcular la semana actual y el progreso por semana.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekPlan {
    pub week: u32,
    pub focus: &'static str,
    pub patterns: &'static str,
    pub problem_ids: &'static str, // "P<inicio>–P<fin>" o "—"
    pub problem_count: u32,
    pub hours_estimate: &'static str,
    pub resolve_ids: &'static str,
    pub outcome: &'static str,
}
