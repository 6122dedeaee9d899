use super::*;
use crate::grade;

impl ExamApp {
    /// Marca o desmarca una opción de la pregunta dada.
    pub fn seleccionar_opcion(&mut self, question_id: &str, key: &str) {
        if let Some(s) = self.session.as_mut() {
            s.select_option(question_id, key);
        }
    }

    /// Entrega el examen: congela la sesión, puntúa y apunta el resultado
    /// en el historial. Entregar dos veces no hace nada la segunda: ni
    /// repite la puntuación ni duplica la entrada del historial.
    pub fn entregar_examen(&mut self) {
        let Some(s) = self.session.as_mut() else {
            return;
        };
        if s.submitted {
            return;
        }
        s.submitted = true;

        let score = grade::score(&s.questions, &s.answers);
        log::info!("examen entregado: {score}/{}", s.questions.len());
        self.score_history = self.store.append(score);
        self.state = AppState::Results;
    }

    /// Borra el historial persistido (tras confirmación en la UI).
    pub fn borrar_historial(&mut self) {
        self.store.clear();
        self.score_history.clear();
        self.confirm_clear = false;
    }

    /// Ventana de confirmación antes de borrar el historial.
    pub fn confirm_clear_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Borrar historial")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todas tus puntuaciones? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.borrar_historial();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_clear = false;
                    }
                });
            });
    }
}
