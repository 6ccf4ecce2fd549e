use super::*;
use crate::model::{FILTER_ALL, StatusFilter};

/// Recuento agregado para las tarjetas y los exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub solved: usize,
    pub resolved: usize,
    pub explained: usize,
    pub mastered: usize,
    pub total_time_minutes: u64,
}

pub fn compute_stats(problems: &[Problem]) -> Stats {
    Stats {
        total: problems.len(),
        solved: problems.iter().filter(|p| p.solved).count(),
        resolved: problems.iter().filter(|p| p.resolved).count(),
        explained: problems.iter().filter(|p| p.explained).count(),
        mastered: problems.iter().filter(|p| p.is_mastered()).count(),
        total_time_minutes: problems.iter().map(|p| p.total_time as u64).sum(),
    }
}

/// Filtro estable: conserva el orden relativo de entrada. Un registro
/// pasa solo si cumple TODOS los predicados a la vez.
pub fn apply_filters<'a>(problems: &'a [Problem], filters: &Filters) -> Vec<&'a Problem> {
    filtered_indices(problems, filters)
        .into_iter()
        .map(|i| &problems[i])
        .collect()
}

/// Igual que `apply_filters` pero con posiciones, para que la tabla
/// pueda editar los registros visibles sin pelearse con el prestamo.
pub fn filtered_indices(problems: &[Problem], filters: &Filters) -> Vec<usize> {
    let needle = filters.search.trim().to_lowercase();
    problems
        .iter()
        .enumerate()
        .filter(|(_, p)| matches(p, filters, &needle))
        .map(|(i, _)| i)
        .collect()
}

fn matches(p: &Problem, filters: &Filters, needle_lower: &str) -> bool {
    // Búsqueda: subcadena sin mayúsculas sobre título o id
    if !needle_lower.is_empty()
        && !p.problem.to_lowercase().contains(needle_lower)
        && !p.id.to_lowercase().contains(needle_lower)
    {
        return false;
    }
    // Los selectores comparan exacto; un valor desconocido no casa nunca
    if filters.topic != FILTER_ALL && filters.topic != p.topic {
        return false;
    }
    if filters.pattern != FILTER_ALL && filters.pattern != p.pattern {
        return false;
    }
    if filters.difficulty != FILTER_ALL && filters.difficulty != p.difficulty.as_str() {
        return false;
    }
    match filters.status {
        StatusFilter::All => true,
        StatusFilter::Complete => p.is_mastered(),
        StatusFilter::Partial => p.is_in_progress(),
        StatusFilter::None => p.is_not_started(),
    }
}

/// Patrones a ofrecer en el selector según el tema elegido.
pub fn patterns_for_filter(topic: &str) -> Vec<&'static str> {
    if topic == FILTER_ALL {
        data::all_patterns()
    } else {
        data::patterns_for_topic(topic)
            .map(|ps| ps.to_vec())
            .unwrap_or_default()
    }
}

/// Coherencia topic→pattern: al cambiar de tema, un patrón que no
/// pertenezca al tema nuevo vuelve a "all".
pub fn reconcile_pattern(filters: &mut Filters) {
    if filters.pattern == FILTER_ALL {
        return;
    }
    let valid = patterns_for_filter(&filters.topic);
    if !valid.contains(&filters.pattern.as_str()) {
        filters.pattern = FILTER_ALL.to_string();
    }
}

impl TrackerApp {
    pub fn stats(&self) -> Stats {
        compute_stats(&self.problems)
    }

    pub fn filtered(&self) -> Vec<&Problem> {
        apply_filters(&self.problems, &self.filters)
    }
}
