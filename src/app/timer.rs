use super::*;
use crate::model::ProblemPatch;

/// Cronómetro de práctica. Solo puede haber uno activo a la vez; el
/// tiempo se acumula en segundos y no se anota en el registro hasta
/// pulsar Detener.
pub struct ActiveTimer {
    pub problem_id: String,
    pub seconds: f64,
    pub running: bool,
    last_tick: f64,
}

impl ActiveTimer {
    pub fn start(problem_id: String, now: f64) -> Self {
        Self {
            problem_id,
            seconds: 0.0,
            running: true,
            last_tick: now,
        }
    }

    /// Avanza el reloj hasta `now`. Se llama en cada frame; cuando el
    /// cronómetro está en pausa solo re-ancla la última marca.
    pub fn tick(&mut self, now: f64) {
        if self.running {
            self.seconds += (now - self.last_tick).max(0.0);
        }
        self.last_tick = now;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self, now: f64) {
        self.running = true;
        self.last_tick = now;
    }
}

/// Redondeo al minuto más cercano; una sesión de menos de 30 s vale 0.
pub fn minutes_from_seconds(seconds: f64) -> u32 {
    (seconds / 60.0).round() as u32
}

impl TrackerApp {
    pub fn start_timer(&mut self, problem_id: &str, now: f64) {
        if let Some(active) = &self.timer {
            self.message = format!(
                "⏱ Ya hay un cronómetro en marcha para #{}; páralo primero",
                active.problem_id
            );
            return;
        }
        if self.problem(problem_id).is_none() {
            return;
        }
        self.timer = Some(ActiveTimer::start(problem_id.to_string(), now));
        self.message = format!("▶ Cronómetro en marcha para #{problem_id}");
    }

    pub fn toggle_timer_pause(&mut self, now: f64) {
        if let Some(timer) = &mut self.timer {
            if timer.running {
                timer.tick(now);
                timer.pause();
            } else {
                timer.resume(now);
            }
        }
    }

    /// Detiene el cronómetro y suma los minutos redondeados al total
    /// del problema. Una sesión que redondea a 0 no toca el registro.
    pub fn stop_timer(&mut self, now: f64) {
        let Some(mut timer) = self.timer.take() else {
            return;
        };
        timer.tick(now);
        let minutes = minutes_from_seconds(timer.seconds);
        if minutes == 0 {
            self.message = "⏱ Sesión demasiado corta: no se anota tiempo".to_string();
            return;
        }
        let Some(current) = self.problem(&timer.problem_id).map(|p| p.total_time) else {
            return;
        };
        self.update_problem(&timer.problem_id, ProblemPatch::total_time(current + minutes));
        self.message = format!("⏱ +{minutes} min anotados en #{}", timer.problem_id);
    }
}
