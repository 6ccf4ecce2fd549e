use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::*;

/// Documento completo del export JSON. Las claves van en camelCase
/// para que el fichero sea legible desde cualquier otra herramienta.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDoc<'a> {
    exported_at: String,
    stats: ExportStats,
    problems: Vec<ExportRow<'a>>,
}

#[derive(Serialize)]
struct ExportStats {
    total: usize,
    solved: usize,
    resolved: usize,
    explained: usize,
    mastered: usize,
}

#[derive(Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    problem: &'a str,
    topic: &'a str,
    pattern: &'a str,
    week: u32,
    difficulty: &'a str,
    solved: bool,
    resolved: bool,
    explained: bool,
    notes: &'a str,
}

pub fn export_json(problems: &[Problem]) -> serde_json::Result<String> {
    let stats = queries::compute_stats(problems);
    let doc = ExportDoc {
        exported_at: Local::now().to_rfc3339(),
        stats: ExportStats {
            total: stats.total,
            solved: stats.solved,
            resolved: stats.resolved,
            explained: stats.explained,
            mastered: stats.mastered,
        },
        problems: problems
            .iter()
            .map(|p| ExportRow {
                id: &p.id,
                problem: &p.problem,
                topic: &p.topic,
                pattern: &p.pattern,
                week: p.week,
                difficulty: p.difficulty.as_str(),
                solved: p.solved,
                resolved: p.resolved,
                explained: p.explained,
                notes: &p.notes,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

/// CSV plano con una fila por problema. Título y apuntes van siempre
/// entre comillas (las internas se doblan); el resto de campos no
/// llevan comas y viajan tal cual.
pub fn export_csv(problems: &[Problem]) -> String {
    let mut rows = vec![
        "ID,Problem,Topic,Pattern,Week,Difficulty,Solved,Re-solved,Explained,Notes".to_string(),
    ];
    for p in problems {
        let fields = [
            p.id.clone(),
            csv_quote(&p.problem),
            p.topic.clone(),
            p.pattern.clone(),
            p.week.to_string(),
            p.difficulty.as_str().to_string(),
            yes_no(p.solved).to_string(),
            yes_no(p.resolved).to_string(),
            yes_no(p.explained).to_string(),
            csv_quote(&p.notes),
        ];
        rows.push(fields.join(","));
    }
    rows.join("\n")
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn json_filename(date: NaiveDate) -> String {
    format!("dsa-progress-{}.json", date.format("%Y-%m-%d"))
}

pub fn csv_filename(date: NaiveDate) -> String {
    format!("dsa-progress-{}.csv", date.format("%Y-%m-%d"))
}

impl TrackerApp {
    pub fn export_json(&self) -> serde_json::Result<String> {
        export_json(&self.problems)
    }

    pub fn export_csv(&self) -> String {
        export_csv(&self.problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn muestra() -> Vec<Problem> {
        let mut a = Problem {
            id: "1".to_string(),
            week: 1,
            topic: "Arrays & Strings".to_string(),
            pattern: "Hash Map".to_string(),
            problem: "Two Sum".to_string(),
            difficulty: Difficulty::Easy,
            solved: true,
            resolved: true,
            explained: true,
            notes: "usar un mapa".to_string(),
            total_time: 25,
            scheduled_date: None,
        };
        let mut b = a.clone();
        a.notes = String::new();
        b.id = "2".to_string();
        b.problem = "He said \"hi\"".to_string();
        b.solved = false;
        b.resolved = false;
        b.explained = false;
        vec![a, b]
    }

    #[test]
    fn el_csv_lleva_la_cabecera_fija() {
        let csv = export_csv(&muestra());
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "ID,Problem,Topic,Pattern,Week,Difficulty,Solved,Re-solved,Explained,Notes"
        );
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn las_comillas_internas_se_doblan() {
        let csv = export_csv(&muestra());
        let row = csv.lines().nth(2).unwrap();
        assert!(row.contains("\"He said \"\"hi\"\"\""));
    }

    #[test]
    fn los_flags_salen_como_yes_no() {
        let csv = export_csv(&muestra());
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with("Yes,Yes,Yes,\"\""));
        let row = csv.lines().nth(2).unwrap();
        assert!(row.contains(",No,No,No,"));
    }

    #[test]
    fn el_json_se_puede_volver_a_leer() {
        let json = export_json(&muestra()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(!doc["exportedAt"].as_str().unwrap().is_empty());
        assert_eq!(doc["stats"]["total"], 2);
        assert_eq!(doc["stats"]["mastered"], 1);
        assert_eq!(doc["problems"][0]["id"], "1");
        assert_eq!(doc["problems"][0]["difficulty"], "Easy");
        assert_eq!(doc["problems"][1]["problem"], "He said \"hi\"");
    }

    #[test]
    fn los_nombres_de_fichero_llevan_la_fecha() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(json_filename(date), "dsa-progress-2026-08-25.json");
        assert_eq!(csv_filename(date), "dsa-progress-2026-08-25.csv");
    }
}
