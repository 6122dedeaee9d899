use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Pregunta del banco (solo lectura una vez cargada).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub prompt: String, // puede llevar saltos de línea
    pub options: BTreeMap<String, String>, // letra -> texto
    pub answer: AnswerKey,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Clave correcta: una letra o un conjunto de letras (multi-selección).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerKey {
    pub fn keys(&self) -> Vec<&str> {
        match self {
            AnswerKey::Single(k) => vec![k.as_str()],
            AnswerKey::Multiple(ks) => ks.iter().map(String::as_str).collect(),
        }
    }

    pub fn as_set(&self) -> Option<BTreeSet<&str>> {
        match self {
            AnswerKey::Single(_) => None,
            AnswerKey::Multiple(ks) => Some(ks.iter().map(String::as_str).collect()),
        }
    }
}

impl Question {
    /// Multi-selección si la clave correcta es un conjunto.
    pub fn is_multi(&self) -> bool {
        matches!(self.answer, AnswerKey::Multiple(_))
    }
}

/// Respuesta del usuario a una pregunta de la sesión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Single(String),
    Multiple(BTreeSet<String>),
}

/// Pregunta ya incorporada a una sesión: la pregunta del banco más el
/// orden de opciones barajado al empezar, fijo durante toda la sesión.
#[derive(Debug, Clone)]
pub struct SessionQuestion {
    pub question: Question,
    pub option_order: Vec<String>,
}

/// Apunte de estudio (no puntúa).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NoteEntry {
    pub id: String,
    pub title: String,
    pub content: NoteContent,
    #[serde(default)]
    pub image: Option<String>,
}

/// Texto corrido o lista de puntos.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NoteContent {
    Text(String),
    Bullets(Vec<String>),
}

/// Paso a paso de simulación (no puntúa).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimulationEntry {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub instructions: Option<NoteContent>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub answer: Option<AnswerKey>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    Home,
    Exam,
    Results,
    Notes,
    Simulation,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
