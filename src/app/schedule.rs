use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::*;
use crate::model::WeekPlan;

/// Horizonte del plan: 16 semanas de 7 días.
pub const PLAN_DAYS: usize = 112;

// ─── Plan semanal ───────────────────────────────────────────────────

/// Expande un rango "P<inicio>–P<fin>" a la lista de ids que cubre.
/// Acepta guion normal o guion largo; cualquier cosa que no sea un
/// rango bien formado (el centinela "—", rangos invertidos, texto
/// libre) devuelve la lista vacía.
pub fn parse_range(range: &str) -> Vec<String> {
    let Some(rest) = range.trim().strip_prefix('P') else {
        return Vec::new();
    };
    let Some((start_raw, end_raw)) = rest.split_once(['–', '-']) else {
        return Vec::new();
    };
    let end_raw = end_raw.trim().trim_start_matches('P');
    let (Ok(start), Ok(end)) = (start_raw.trim().parse::<u32>(), end_raw.parse::<u32>()) else {
        return Vec::new();
    };
    if start > end {
        return Vec::new();
    }
    (start..=end).map(|n| n.to_string()).collect()
}

/// Primera semana del plan con algún problema pendiente. Una semana
/// sin rango o cuyo rango no casa con ningún registro no cuenta; si
/// todo está resuelto, la semana actual es la última del plan.
pub fn current_week(problems: &[Problem]) -> Option<&'static WeekPlan> {
    for plan in data::EXECUTION_ORDER {
        let ids = parse_range(plan.problem_ids);
        if ids.is_empty() {
            continue;
        }
        let matched: Vec<&Problem> = problems.iter().filter(|p| ids.contains(&p.id)).collect();
        if matched.is_empty() {
            continue;
        }
        if matched.iter().any(|p| !p.solved) {
            return Some(plan);
        }
    }
    data::EXECUTION_ORDER.last()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekProgress {
    pub solved: usize,
    pub total: usize,
    pub percent: u32,
}

/// Avance de una semana contando solo los problemas de su rango.
pub fn week_progress(problems: &[Problem], plan: &WeekPlan) -> WeekProgress {
    let ids = parse_range(plan.problem_ids);
    let matched: Vec<&Problem> = problems.iter().filter(|p| ids.contains(&p.id)).collect();
    let total = matched.len();
    let solved = matched.iter().filter(|p| p.solved).count();
    let percent = if total == 0 {
        0
    } else {
        (solved as f64 / total as f64 * 100.0).round() as u32
    };
    WeekProgress { solved, total, percent }
}

// ─── Reparto por días ───────────────────────────────────────────────

/// Reparte los problemas pendientes en días consecutivos a partir de
/// `start`, en el orden del catálogo. El tamaño del bloque diario sale
/// de encajar todo lo pendiente en el horizonte del plan, con un
/// mínimo de 3 problemas por día.
pub fn distribute_by_day<'a>(
    problems: &'a [Problem],
    start: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<&'a Problem>> {
    let pending: Vec<&Problem> = problems.iter().filter(|p| !p.solved).collect();
    let mut schedule: BTreeMap<NaiveDate, Vec<&Problem>> = BTreeMap::new();
    if pending.is_empty() {
        return schedule;
    }
    let per_day = pending.len().div_ceil(PLAN_DAYS).max(3);
    let mut day = start;
    for (i, problem) in pending.into_iter().enumerate() {
        schedule.entry(day).or_default().push(problem);
        if (i + 1) % per_day == 0 {
            day = day.succ_opt().unwrap_or(day);
        }
    }
    schedule
}

impl TrackerApp {
    pub fn current_week(&self) -> Option<&'static WeekPlan> {
        current_week(&self.problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn mk(id: u32) -> Problem {
        Problem {
            id: id.to_string(),
            week: 1,
            topic: "Arrays & Strings".to_string(),
            pattern: "Hash Map".to_string(),
            problem: format!("Problema {id}"),
            difficulty: Difficulty::Medium,
            solved: false,
            resolved: false,
            explained: false,
            notes: String::new(),
            total_time: 0,
            scheduled_date: None,
        }
    }

    fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_range_acepta_ambos_guiones() {
        assert_eq!(parse_range("P1–P3"), ["1", "2", "3"]);
        assert_eq!(parse_range("P5-P5"), ["5"]);
    }

    #[test]
    fn parse_range_rechaza_lo_que_no_es_rango() {
        assert!(parse_range("—").is_empty());
        assert!(parse_range("").is_empty());
        assert!(parse_range("P9–P4").is_empty());
        assert!(parse_range("Weak areas + Mock contests").is_empty());
        assert!(parse_range("P1–Pfin").is_empty());
    }

    #[test]
    fn la_semana_actual_es_la_primera_con_pendientes() {
        let mut problems = data::seed_problems();
        // Semana 1 completa (P1–P16), semana 2 sin tocar
        let week1 = parse_range(data::EXECUTION_ORDER[0].problem_ids);
        for p in problems.iter_mut().filter(|p| week1.contains(&p.id)) {
            p.solved = true;
        }
        let current = current_week(&problems).unwrap();
        assert_eq!(current.week, 2);
    }

    #[test]
    fn con_todo_resuelto_se_cae_en_la_ultima_semana() {
        let mut problems = data::seed_problems();
        for p in problems.iter_mut() {
            p.solved = true;
        }
        let current = current_week(&problems).unwrap();
        assert_eq!(current.week, 16);
    }

    #[test]
    fn una_semana_sin_registros_que_casen_se_salta() {
        // Solo existen los problemas 17..32: la semana 1 no casa con nada
        let problems: Vec<Problem> = (17..=32).map(mk).collect();
        let current = current_week(&problems).unwrap();
        assert_eq!(current.week, 2);
    }

    #[test]
    fn week_progress_redondea_el_porcentaje() {
        let mut problems: Vec<Problem> = (1..=3).map(mk).collect();
        problems[0].solved = true;
        let plan = &data::EXECUTION_ORDER[0]; // P1–P16, pero solo casan 3
        let progress = week_progress(&problems, plan);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.solved, 1);
        assert_eq!(progress.percent, 33);
    }

    #[test]
    fn week_progress_sin_rango_es_cero() {
        let plan = data::EXECUTION_ORDER.last().unwrap(); // semana 16, sin rango
        let progress = week_progress(&data::seed_problems(), plan);
        assert_eq!(progress, WeekProgress { solved: 0, total: 0, percent: 0 });
    }

    #[test]
    fn sin_pendientes_el_calendario_queda_vacio() {
        let mut problems: Vec<Problem> = (1..=6).map(mk).collect();
        for p in problems.iter_mut() {
            p.solved = true;
        }
        assert!(distribute_by_day(&problems, fecha(2026, 3, 2)).is_empty());
    }

    #[test]
    fn tres_pendientes_caben_en_el_primer_dia() {
        let problems: Vec<Problem> = (1..=3).map(mk).collect();
        let start = fecha(2026, 3, 2);
        let schedule = distribute_by_day(&problems, start);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[&start].len(), 3);
    }

    #[test]
    fn el_sobrante_pasa_al_dia_siguiente() {
        let problems: Vec<Problem> = (1..=5).map(mk).collect();
        let start = fecha(2026, 3, 2);
        let schedule = distribute_by_day(&problems, start);
        assert_eq!(schedule[&start].len(), 3);
        assert_eq!(schedule[&start.succ_opt().unwrap()].len(), 2);
        // El orden del catálogo se conserva dentro de cada día
        let ids: Vec<&str> = schedule[&start].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn con_mas_carga_crece_el_bloque_diario() {
        // 400 pendientes no caben a 3 por día en 112 días: toca a 4
        let problems: Vec<Problem> = (1..=400).map(mk).collect();
        let start = fecha(2026, 3, 2);
        let schedule = distribute_by_day(&problems, start);
        assert_eq!(schedule[&start].len(), 4);
        assert_eq!(schedule.len(), 100);
    }
}
