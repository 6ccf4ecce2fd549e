// src/view_models.rs

use egui::Color32;

use crate::model::{Difficulty, Problem};

/// Estado de un registro tal y como se pinta en la tabla.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    Mastered,
    InProgress,
    NotStarted,
}

impl RowStatus {
    pub fn of(problem: &Problem) -> Self {
        if problem.is_mastered() {
            RowStatus::Mastered
        } else if problem.is_in_progress() {
            RowStatus::InProgress
        } else {
            RowStatus::NotStarted
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Mastered => "✅ Dominado",
            RowStatus::InProgress => "🔄 En curso",
            RowStatus::NotStarted => "· Sin empezar",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            RowStatus::Mastered => Color32::from_rgb(0x22, 0xc5, 0x5e),
            RowStatus::InProgress => Color32::from_rgb(0xf5, 0x9e, 0x0b),
            RowStatus::NotStarted => Color32::GRAY,
        }
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(0x22, 0xc5, 0x5e),
        Difficulty::Medium => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Difficulty::Hard => Color32::from_rgb(0xef, 0x44, 0x44),
    }
}

/// Un color fijo por tema para las etiquetas de la tabla.
pub fn topic_color(topic: &str) -> Color32 {
    match topic {
        "Arrays & Strings" => Color32::from_rgb(0x3b, 0x82, 0xf6),
        "Recursion & Backtracking" => Color32::from_rgb(0xa8, 0x55, 0xf7),
        "Binary Search" => Color32::from_rgb(0x06, 0xb6, 0xd4),
        "Greedy" => Color32::from_rgb(0x84, 0xcc, 0x16),
        "Heaps" => Color32::from_rgb(0xf9, 0x73, 0x16),
        "Trees" => Color32::from_rgb(0x10, 0xb9, 0x81),
        "Graphs" => Color32::from_rgb(0x0e, 0xa5, 0xe9),
        "Dynamic Programming" => Color32::from_rgb(0xf4, 0x3f, 0x5e),
        "Design" => Color32::from_rgb(0x8b, 0x5c, 0xf6),
        _ => Color32::GRAY,
    }
}

/// "45m" por debajo de la hora, "2h 5m" a partir de ella.
pub fn format_minutes(minutes: u64) -> String {
    if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{minutes}m")
    }
}

/// Lectura mm:ss para el cronómetro en marcha.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Trozos de unos apuntes: texto plano y bloques de código vallados
/// con ```. El idioma es lo que acompaña a la valla de apertura.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteSegment {
    Text(String),
    Code { lang: String, body: String },
}

pub fn split_note_segments(notes: &str) -> Vec<NoteSegment> {
    let mut segments = Vec::new();
    for (i, chunk) in notes.split("```").enumerate() {
        if i % 2 == 0 {
            let text = chunk.trim();
            if !text.is_empty() {
                segments.push(NoteSegment::Text(text.to_string()));
            }
        } else {
            let (lang, body) = match chunk.split_once('\n') {
                Some((first, rest)) => (first.trim().to_string(), rest.trim_end().to_string()),
                None => (String::new(), chunk.trim().to_string()),
            };
            if !lang.is_empty() || !body.is_empty() {
                segments.push(NoteSegment::Code { lang, body });
            }
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutos_legibles() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(125), "2h 5m");
    }

    #[test]
    fn reloj_mm_ss() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(65.9), "01:05");
        assert_eq!(format_clock(-3.0), "00:00");
    }

    #[test]
    fn los_apuntes_se_trocean_por_vallas() {
        let notes = "Idea clave\n```python\ndef two_sum(nums, target):\n    pass\n```\nRepasar en una semana";
        let segments = split_note_segments(notes);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], NoteSegment::Text("Idea clave".to_string()));
        match &segments[1] {
            NoteSegment::Code { lang, body } => {
                assert_eq!(lang, "python");
                assert!(body.starts_with("def two_sum"));
            }
            otro => panic!("se esperaba código, llegó {otro:?}"),
        }
    }

    #[test]
    fn una_valla_sin_cerrar_sigue_siendo_codigo() {
        let segments = split_note_segments("texto\n```rust\nlet x = 1;");
        assert_eq!(segments.len(), 2);
        assert!(matches!(&segments[1], NoteSegment::Code { lang, .. } if lang == "rust"));
    }

    #[test]
    fn sin_vallas_todo_es_texto() {
        let segments = split_note_segments("solo un apunte corto");
        assert_eq!(segments, [NoteSegment::Text("solo un apunte corto".to_string())]);
    }

    #[test]
    fn el_estado_de_fila_sigue_los_flags() {
        let mut p = Problem {
            id: "1".to_string(),
            week: 1,
            topic: "Trees".to_string(),
            pattern: "BST".to_string(),
            problem: "Validate Binary Search Tree".to_string(),
            difficulty: Difficulty::Medium,
            solved: false,
            resolved: false,
            explained: false,
            notes: String::new(),
            total_time: 0,
            scheduled_date: None,
        };
        assert_eq!(RowStatus::of(&p), RowStatus::NotStarted);
        p.solved = true;
        assert_eq!(RowStatus::of(&p), RowStatus::InProgress);
        p.resolved = true;
        p.explained = true;
        assert_eq!(RowStatus::of(&p), RowStatus::Mastered);
    }
}
