use super::*;

/// Señales de un tic del reloj. `LowTime` y `Expired` se emiten una sola
/// vez por sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerSignal {
    LowTime,
    Expired,
}

impl ExamApp {
    /// Avanza el reloj con el tiempo de frame de egui, descontando un tic
    /// por cada segundo entero transcurrido (los frames pueden llegar
    /// tarde, p. ej. con la ventana en segundo plano).
    pub fn advance_clock(&mut self, now: f64) {
        let Some(last) = self.clock_last else {
            // Primer frame en la vista de examen: solo anclar
            self.clock_last = Some(now);
            return;
        };

        let whole = (now - last).floor();
        if whole < 1.0 {
            return;
        }
        self.clock_last = Some(last + whole);

        for _ in 0..whole as u64 {
            self.clock_tick();
        }
    }

    /// Un tic con sus efectos aplicados.
    pub fn clock_tick(&mut self) {
        if let Some(signal) = self.tick() {
            self.apply_signal(signal);
        }
    }

    /// Descuenta un segundo si (y solo si) la vista activa es el examen y la
    /// sesión sigue viva. La guarda se comprueba en cada disparo: un tic
    /// rezagado contra una sesión entregada o descartada no hace nada.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if self.state != AppState::Exam {
            return None;
        }
        let threshold = self.config.low_time_threshold;
        let s = self.session.as_mut()?;
        if s.submitted || s.time_left == 0 {
            return None;
        }

        s.time_left -= 1;

        if s.time_left == 0 {
            return Some(TimerSignal::Expired);
        }
        if s.time_left == threshold && !s.low_time_alerted {
            s.low_time_alerted = true;
            return Some(TimerSignal::LowTime);
        }
        None
    }

    fn apply_signal(&mut self, signal: TimerSignal) {
        match signal {
            TimerSignal::LowTime => {
                log::warn!(
                    "quedan {} segundos de examen",
                    self.config.low_time_threshold
                );
                self.message = format!(
                    "⚠ Quedan {} minutos de examen.",
                    self.config.low_time_threshold / 60
                );
            }
            TimerSignal::Expired => {
                // Entrega forzada: mismos efectos que la entrega manual
                log::info!("tiempo agotado: entrega forzada");
                self.entregar_examen();
                self.message = "⏱ Tiempo agotado. Examen entregado automáticamente.".to_owned();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{small_bank, test_app};

    fn exam_app(duration_secs: u32) -> ExamApp {
        let config = ExamConfig {
            question_count: 4,
            duration_secs,
            low_time_threshold: 300,
        };
        let mut app = test_app(config, small_bank(6));
        app.empezar_examen();
        app
    }

    #[test]
    fn a_full_run_signals_exactly_one_expiry() {
        let mut app = exam_app(5400);

        let mut expired = 0;
        let mut low_time = 0;
        for _ in 0..5400 {
            match app.tick() {
                Some(TimerSignal::Expired) => expired += 1,
                Some(TimerSignal::LowTime) => low_time += 1,
                None => {}
            }
        }

        let s = app.session.as_ref().expect("sesión viva");
        assert_eq!(s.time_left, 0);
        assert_eq!(expired, 1);
        assert_eq!(low_time, 1);

        // Un tic extra contra el reloj agotado no hace nada
        assert_eq!(app.tick(), None);
        assert_eq!(app.session.as_ref().expect("sesión viva").time_left, 0);
    }

    #[test]
    fn expiry_auto_submits_with_one_history_entry() {
        let mut app = exam_app(3);

        app.clock_tick();
        app.clock_tick();
        assert!(!app.session.as_ref().expect("sesión").submitted);

        app.clock_tick();
        let s = app.session.as_ref().expect("sesión");
        assert!(s.submitted);
        assert_eq!(s.time_left, 0);
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.score_history.len(), 1);

        // La sesión entregada queda congelada aunque lleguen más tics
        app.clock_tick();
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 0);
        assert_eq!(app.score_history.len(), 1);
    }

    #[test]
    fn tick_does_nothing_while_submitted() {
        let mut app = exam_app(100);
        app.entregar_examen();

        assert_eq!(app.tick(), None);
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 100);
    }

    #[test]
    fn low_time_warning_fires_once_at_the_threshold() {
        let mut app = exam_app(302);

        assert_eq!(app.tick(), None); // 301
        assert_eq!(app.tick(), Some(TimerSignal::LowTime)); // 300
        assert_eq!(app.tick(), None); // 299
        assert_eq!(app.tick(), None);
    }

    #[test]
    fn the_clock_only_runs_in_the_exam_view() {
        let mut app = exam_app(100);

        app.abrir_apuntes();
        assert_eq!(app.tick(), None);
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 100);

        app.volver_de_recursos();
        assert_eq!(app.state, AppState::Exam);
        app.tick();
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 99);
    }

    #[test]
    fn advance_clock_catches_up_whole_seconds() {
        let mut app = exam_app(100);

        app.advance_clock(10.0); // ancla
        app.advance_clock(10.4);
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 100);

        app.advance_clock(13.2); // 3 segundos enteros
        assert_eq!(app.session.as_ref().expect("sesión").time_left, 97);
    }
}
