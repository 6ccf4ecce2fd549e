use std::collections::HashMap;

use crate::data;
use crate::model::Problem;

// Claves del almacén clave-valor (localStorage en wasm, fichero en nativo)
pub const PROBLEMS_KEY: &str = "dsa-tracker-problems";
pub const VERSION_KEY: &str = "dsa-tracker-version";
pub const UNIVERSAL_NOTES_KEY: &str = "dsa-tracker-universal-notes";

/// Resultado de la carga inicial
pub struct LoadOutcome {
    pub problems: Vec<Problem>,
    pub universal_notes: String,
    /// true si el catálogo cambió de versión y se ejecutó la migración
    pub migrated: bool,
}

impl LoadOutcome {
    fn seeded(universal_notes: String) -> Self {
        Self {
            problems: data::seed_problems(),
            universal_notes,
            migrated: false,
        }
    }
}

/// Carga la lista canónica desde el almacén.
///
/// Reglas, en orden:
/// 1) sin blob guardado → catálogo semilla tal cual;
/// 2) blob con versión distinta a la actual → migración por título;
/// 3) blob con versión actual → se devuelve parseado;
/// 4) cualquier fallo de parseo → catálogo semilla (nunca es fatal).
pub fn load_or_seed(storage: Option<&dyn eframe::Storage>) -> LoadOutcome {
    let Some(storage) = storage else {
        return LoadOutcome::seeded(String::new());
    };

    let universal_notes = storage.get_string(UNIVERSAL_NOTES_KEY).unwrap_or_default();

    let Some(raw) = storage.get_string(PROBLEMS_KEY) else {
        // Primer arranque
        return LoadOutcome::seeded(universal_notes);
    };

    match serde_json::from_str::<Vec<Problem>>(&raw) {
        Ok(stored) => {
            let stored_version = storage.get_string(VERSION_KEY);
            if stored_version.as_deref() == Some(data::CATALOG_VERSION) {
                LoadOutcome {
                    problems: stored,
                    universal_notes,
                    migrated: false,
                }
            } else {
                log::info!(
                    "catálogo {} → {}: migrando progreso por título",
                    stored_version.as_deref().unwrap_or("?"),
                    data::CATALOG_VERSION
                );
                LoadOutcome {
                    problems: merge_catalog(&stored, data::seed_problems()),
                    universal_notes,
                    migrated: true,
                }
            }
        }
        Err(err) => {
            log::warn!("progreso guardado ilegible, se restaura el catálogo: {err}");
            LoadOutcome::seeded(universal_notes)
        }
    }
}

/// Migración al cambiar la versión del catálogo. Los ids pueden haberse
/// renumerado entre versiones, así que el cruce va por título: para cada
/// problema del catálogo nuevo que exista (por título) en la lista vieja
/// se conservan {solved, resolved, explained, notes}; el resto queda con
/// los defaults de la semilla. El tiempo acumulado no se arrastra.
pub fn merge_catalog(old: &[Problem], seed: Vec<Problem>) -> Vec<Problem> {
    let by_title: HashMap<&str, &Problem> =
        old.iter().map(|p| (p.problem.as_str(), p)).collect();

    seed.into_iter()
        .map(|mut p| {
            if let Some(prev) = by_title.get(p.problem.as_str()) {
                p.solved = prev.solved;
                p.resolved = prev.resolved;
                p.explained = prev.explained;
                p.notes = prev.notes.clone();
            }
            p
        })
        .collect()
}

/// Id para un alta nueva: máximo id numérico presente + 1. Un id no
/// numérico cuenta como 0 para este cálculo.
pub fn next_id(problems: &[Problem]) -> String {
    let max = problems
        .iter()
        .map(|p| p.id.parse::<u64>().unwrap_or(0))
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Vuelca la lista completa, el sello de versión y los apuntes globales.
/// Se llama tras cada mutación (alta, edición, reinicio).
pub fn persist(storage: &mut dyn eframe::Storage, problems: &[Problem], universal_notes: &str) {
    match serde_json::to_string(problems) {
        Ok(json) => {
            storage.set_string(PROBLEMS_KEY, json);
            storage.set_string(VERSION_KEY, data::CATALOG_VERSION.to_string());
        }
        Err(err) => log::warn!("no se pudo serializar el progreso: {err}"),
    }
    storage.set_string(UNIVERSAL_NOTES_KEY, universal_notes.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use eframe::Storage;

    /// Doble en memoria del almacén de eframe
    #[derive(Default)]
    struct MemStorage(HashMap<String, String>);

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }

    fn problem(id: &str, title: &str) -> Problem {
        Problem {
            id: id.to_string(),
            week: 1,
            topic: "Arrays & Strings".to_string(),
            pattern: "Sliding Window".to_string(),
            problem: title.to_string(),
            difficulty: Difficulty::Medium,
            solved: false,
            resolved: false,
            explained: false,
            notes: String::new(),
            total_time: 0,
            scheduled_date: None,
        }
    }

    #[test]
    fn sin_almacen_devuelve_la_semilla() {
        let outcome = load_or_seed(None);
        assert_eq!(outcome.problems, data::seed_problems());
        assert!(!outcome.migrated);
    }

    #[test]
    fn primer_arranque_siembra_el_catalogo() {
        let storage = MemStorage::default();
        let outcome = load_or_seed(Some(&storage));
        assert_eq!(outcome.problems.len(), 270);
        assert!(!outcome.migrated);
        assert_eq!(outcome.universal_notes, "");
    }

    #[test]
    fn guardar_y_cargar_es_ida_y_vuelta() {
        let mut storage = MemStorage::default();
        let mut list = data::seed_problems();
        list[3].solved = true;
        list[3].notes = "ojo con el shrink de la ventana\n```python\n# ventana\n```\n".to_string();
        list[3].total_time = 95;

        persist(&mut storage, &list, "apuntes globales");

        let outcome = load_or_seed(Some(&storage));
        assert_eq!(outcome.problems, list);
        assert_eq!(outcome.universal_notes, "apuntes globales");
        assert!(!outcome.migrated);
    }

    #[test]
    fn blob_corrupto_restaura_la_semilla() {
        let mut storage = MemStorage::default();
        storage.set_string(PROBLEMS_KEY, "{esto no es json".to_string());
        storage.set_string(VERSION_KEY, data::CATALOG_VERSION.to_string());

        let outcome = load_or_seed(Some(&storage));
        assert_eq!(outcome.problems, data::seed_problems());
        assert!(!outcome.migrated);
    }

    #[test]
    fn version_distinta_dispara_la_migracion() {
        let mut storage = MemStorage::default();
        let mut old = data::seed_problems();
        old[0].solved = true;
        old[0].notes = "dos punteros".to_string();
        storage.set_string(PROBLEMS_KEY, serde_json::to_string(&old).unwrap());
        storage.set_string(VERSION_KEY, "2".to_string());

        let outcome = load_or_seed(Some(&storage));
        assert!(outcome.migrated);
        assert!(outcome.problems[0].solved);
        assert_eq!(outcome.problems[0].notes, "dos punteros");
    }

    #[test]
    fn version_ausente_tambien_migra() {
        let mut storage = MemStorage::default();
        let old = data::seed_problems();
        storage.set_string(PROBLEMS_KEY, serde_json::to_string(&old).unwrap());

        let outcome = load_or_seed(Some(&storage));
        assert!(outcome.migrated);
        assert_eq!(outcome.problems.len(), 270);
    }

    #[test]
    fn la_migracion_cruza_por_titulo_no_por_id() {
        // Lista vieja con ids renumerados respecto a la semilla
        let mut old_a = problem("900", "Minimum Window Substring");
        old_a.solved = true;
        old_a.resolved = true;
        old_a.notes = "plantilla de ventana".to_string();
        old_a.total_time = 120;
        let mut old_b = problem("901", "Un Problema Que Ya No Existe");
        old_b.solved = true;

        let merged = merge_catalog(&[old_a, old_b], data::seed_problems());

        assert_eq!(merged.len(), 270);
        let kept = merged
            .iter()
            .find(|p| p.problem == "Minimum Window Substring")
            .unwrap();
        // El id vuelve a ser el de la semilla; el progreso sobrevive
        assert_eq!(kept.id, "5");
        assert!(kept.solved && kept.resolved && !kept.explained);
        assert_eq!(kept.notes, "plantilla de ventana");
        // El tiempo no se arrastra en la migración
        assert_eq!(kept.total_time, 0);

        // El título desaparecido no aporta nada; el resto queda virgen
        let untouched = merged.iter().filter(|p| p.solved).count();
        assert_eq!(untouched, 1);
    }

    #[test]
    fn titulos_nuevos_reciben_defaults() {
        let merged = merge_catalog(&[], data::seed_problems());
        assert!(merged.iter().all(|p| !p.solved && p.notes.is_empty()));
    }

    #[test]
    fn next_id_es_max_mas_uno() {
        let list = vec![problem("1", "A"), problem("7", "B"), problem("3", "C")];
        assert_eq!(next_id(&list), "8");
    }

    #[test]
    fn next_id_ignora_ids_no_numericos() {
        // Un id ilegible cuenta como 0
        let list = vec![problem("P7", "A"), problem("2", "B")];
        assert_eq!(next_id(&list), "3");

        let only_bad = vec![problem("abc", "A")];
        assert_eq!(next_id(&only_bad), "1");

        assert_eq!(next_id(&[]), "1");
    }

    #[test]
    fn persistir_sella_la_version_actual() {
        let mut storage = MemStorage::default();
        persist(&mut storage, &data::seed_problems(), "");
        assert_eq!(
            storage.get_string(VERSION_KEY).as_deref(),
            Some(data::CATALOG_VERSION)
        );
    }
}
