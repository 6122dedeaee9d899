use crate::data::{self, DataError};
use crate::history::HistoryStore;
use crate::model::{AppState, NoteEntry, Question, SimulationEntry};
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod session;
pub mod timer;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ProgressCell, ResultRow};
pub use session::{ExamSession, draw_exam};
pub use timer::TimerSignal;

/// Parámetros del examen. Sin variables de entorno ni CLI: se fijan aquí
/// y los tests inyectan los suyos.
#[derive(Clone, Copy, Debug)]
pub struct ExamConfig {
    pub question_count: usize,
    pub duration_secs: u32,
    pub low_time_threshold: u32,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            question_count: 50,
            duration_secs: 70 * 60,
            low_time_threshold: 300, // aviso a 5 minutos del final
        }
    }
}

pub struct ExamApp {
    pub config: ExamConfig,
    pub bank: Vec<Question>,
    pub notes: Vec<NoteEntry>,
    pub simulations: Vec<SimulationEntry>,
    /// Sesión viva del examen; None fuera de un intento.
    pub session: Option<ExamSession>,
    /// Copia en memoria del historial persistido.
    pub score_history: Vec<u32>,
    pub state: AppState,
    /// Desde dónde se abrieron Apuntes/Simulación, para poder volver.
    pub resources_return: AppState,
    pub message: String,
    pub confirm_clear: bool,
    /// Ancla del reloj de egui; None fuera de la vista de examen.
    pub(crate) clock_last: Option<f64>,
    store: Box<dyn HistoryStore>,
    rng: StdRng,
}

impl ExamApp {
    /// Arranque normal: bancos embebidos, configuración por defecto y
    /// entropía del sistema. Un banco inválido aborta aquí, antes de
    /// renderizar nada.
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        let bank = data::load_questions().expect("banco de preguntas inválido");
        let notes = data::load_notes().expect("banco de apuntes inválido");
        let simulations = data::load_simulations().expect("banco de simulaciones inválido");

        Self::with_parts(
            ExamConfig::default(),
            bank,
            notes,
            simulations,
            store,
            StdRng::from_os_rng(),
        )
        .expect("configuración de examen inválida")
    }

    /// Constructor con todas las piezas a la vista, para tests con banco
    /// reducido, almacén en memoria y generador sembrado.
    pub fn with_parts(
        config: ExamConfig,
        bank: Vec<Question>,
        notes: Vec<NoteEntry>,
        simulations: Vec<SimulationEntry>,
        store: Box<dyn HistoryStore>,
        rng: StdRng,
    ) -> Result<Self, DataError> {
        data::validate_bank(&bank)?;
        if bank.len() < config.question_count {
            return Err(DataError::BankTooSmall {
                have: bank.len(),
                need: config.question_count,
            });
        }

        let score_history = store.load();
        log::info!(
            "banco cargado: {} preguntas, {} intentos previos",
            bank.len(),
            score_history.len()
        );

        Ok(Self {
            config,
            bank,
            notes,
            simulations,
            session: None,
            score_history,
            state: AppState::Home,
            resources_return: AppState::Home,
            message: String::new(),
            confirm_clear: false,
            clock_last: None,
            store,
            rng,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::history::MemoryStore;
    use crate::model::AnswerKey;
    use std::collections::BTreeMap;

    pub fn bank_question(id: &str, answer: AnswerKey) -> Question {
        let options: BTreeMap<String, String> = [("A", "uno"), ("B", "dos"), ("C", "tres"), ("D", "cuatro")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Question {
            id: id.to_owned(),
            prompt: format!("Pregunta {id}"),
            options,
            answer,
            image: None,
            explanation: None,
        }
    }

    pub fn small_bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| bank_question(&format!("q{i:03}"), AnswerKey::Single("B".into())))
            .collect()
    }

    pub fn test_app(config: ExamConfig, bank: Vec<Question>) -> ExamApp {
        ExamApp::with_parts(
            config,
            bank,
            vec![],
            vec![],
            Box::new(MemoryStore::default()),
            StdRng::seed_from_u64(7),
        )
        .expect("app de prueba")
    }
}
