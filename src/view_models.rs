// src/view_models.rs

/// Celda de la rejilla de progreso del examen.
#[derive(Clone, Debug)]
pub struct ProgressCell {
    pub idx: usize,       // índice 0-based en la sesión
    pub answered: bool,
    pub seen: bool,       // visitada pero sin responder
    pub current: bool,
}

impl ProgressCell {
    pub fn label(&self) -> String {
        let symbol = if self.answered {
            "✔"
        } else if self.seen {
            "✖"
        } else {
            "□"
        };
        format!("{} {}", self.idx + 1, symbol)
    }
}

/// Fila de la revisión de resultados: una pregunta con lo marcado y lo
/// correcto, ya en texto.
#[derive(Clone, Debug)]
pub struct ResultRow {
    pub number: usize, // 1-based
    pub prompt: String,
    pub image: Option<String>,
    pub user_text: String,
    pub correct_text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// "MM:SS" para el contador del examen.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
