use super::*;

impl ExamApp {
    /// Empieza un intento nuevo: sortea preguntas, resetea la sesión entera
    /// y arranca el reloj. La sesión anterior, si la había, se descarta.
    pub fn empezar_examen(&mut self) {
        match session::draw_exam(&self.bank, self.config.question_count, &mut self.rng) {
            Ok(questions) => {
                self.session = Some(ExamSession::new(questions, self.config.duration_secs));
                self.clock_last = None;
                self.state = AppState::Exam;
                self.message.clear();
            }
            Err(e) => {
                // El banco se valida al arrancar, así que esto no debería verse
                log::error!("no se pudo sortear el examen: {e}");
                self.message = format!("No se pudo empezar el examen: {e}");
            }
        }
    }

    pub fn siguiente_pregunta(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.next_question();
        }
    }

    pub fn pregunta_anterior(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.prev_question();
        }
    }

    pub fn ir_a_pregunta(&mut self, idx: usize) {
        if let Some(s) = self.session.as_mut() {
            s.jump_to(idx);
        }
    }

    pub fn abrir_apuntes(&mut self) {
        self.abrir_recursos(AppState::Notes);
    }

    pub fn abrir_simulacion(&mut self) {
        self.abrir_recursos(AppState::Simulation);
    }

    /// Vista lateral de estudio. La sesión no se toca: el reloj se queda
    /// parado y al volver sigue donde estaba.
    fn abrir_recursos(&mut self, view: AppState) {
        if !matches!(self.state, AppState::Exam | AppState::Results) {
            return;
        }
        self.resources_return = self.state;
        self.state = view;
        self.clock_last = None;
        self.message.clear();
    }

    /// Vuelve de Apuntes/Simulación: al examen si sigue sin entregar, a
    /// resultados si ya se entregó, al inicio si no hay sesión.
    pub fn volver_de_recursos(&mut self) {
        self.state = match &self.session {
            Some(s) if s.submitted => AppState::Results,
            Some(_) if self.resources_return == AppState::Exam => AppState::Exam,
            Some(_) => self.resources_return,
            None => AppState::Home,
        };
        self.message.clear();
    }

    /// Al inicio, descartando la sesión: el siguiente examen sale de cero.
    pub fn volver_al_inicio(&mut self) {
        self.session = None;
        self.clock_last = None;
        self.state = AppState::Home;
        self.message.clear();
    }
}
