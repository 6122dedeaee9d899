// src/data.rs

use crate::model::{AnswerKey, NoteEntry, Question, SimulationEntry};
use std::collections::HashSet;
use thiserror::Error;

/// Errores de datos: se detectan al cargar, nunca durante el examen.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("no se pudo parsear el banco '{bank}': {source}")]
    Parse {
        bank: &'static str,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("pregunta '{id}': id duplicado en el banco")]
    DuplicateId { id: String },
    #[error("pregunta '{id}': {count} opciones, se esperan entre 2 y 6")]
    BadOptionCount { id: String, count: usize },
    #[error("pregunta '{id}': la clave correcta '{key}' no existe entre las opciones")]
    UnknownAnswerKey { id: String, key: String },
    #[error("pregunta '{id}': respuesta múltiple vacía")]
    EmptyMultiAnswer { id: String },
    #[error("el banco tiene {have} preguntas y el examen pide {need}")]
    BankTooSmall { have: usize, need: usize },
}

/// Carga el banco de preguntas desde el YAML embebido y lo valida.
pub fn load_questions() -> Result<Vec<Question>, DataError> {
    let file_content = include_str!("data/questions.yaml");
    let bank: Vec<Question> = serde_yaml::from_str(file_content).map_err(|source| {
        DataError::Parse {
            bank: "questions",
            source,
        }
    })?;
    validate_bank(&bank)?;
    Ok(bank)
}

/// Carga los apuntes de estudio embebidos.
pub fn load_notes() -> Result<Vec<NoteEntry>, DataError> {
    let file_content = include_str!("data/notes.yaml");
    serde_yaml::from_str(file_content).map_err(|source| DataError::Parse {
        bank: "notes",
        source,
    })
}

/// Carga las simulaciones embebidas.
pub fn load_simulations() -> Result<Vec<SimulationEntry>, DataError> {
    let file_content = include_str!("data/simulations.yaml");
    serde_yaml::from_str(file_content).map_err(|source| DataError::Parse {
        bank: "simulations",
        source,
    })
}

/// Valida el banco completo: ids únicos, 2..=6 opciones por pregunta y
/// claves correctas que existan entre las opciones.
pub fn validate_bank(bank: &[Question]) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for q in bank {
        if !seen.insert(q.id.as_str()) {
            return Err(DataError::DuplicateId { id: q.id.clone() });
        }
        let count = q.options.len();
        if !(2..=6).contains(&count) {
            return Err(DataError::BadOptionCount {
                id: q.id.clone(),
                count,
            });
        }
        if let AnswerKey::Multiple(ks) = &q.answer {
            if ks.is_empty() {
                return Err(DataError::EmptyMultiAnswer { id: q.id.clone() });
            }
        }
        for key in q.answer.keys() {
            if !q.options.contains_key(key) {
                return Err(DataError::UnknownAnswerKey {
                    id: q.id.clone(),
                    key: key.to_owned(),
                });
            }
        }
    }
    Ok(())
}
