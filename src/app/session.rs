use crate::data::DataError;
use crate::model::{Answer, Question, SessionQuestion};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{HashMap, HashSet};

/// Sortea un examen: `count` preguntas distintas del banco, cada una con su
/// orden de opciones barajado de forma independiente. El banco no se toca.
pub fn draw_exam(
    bank: &[Question],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<SessionQuestion>, DataError> {
    if bank.len() < count {
        return Err(DataError::BankTooSmall {
            have: bank.len(),
            need: count,
        });
    }

    let mut drawn: Vec<Question> = bank.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(count);

    Ok(drawn
        .into_iter()
        .map(|question| {
            let mut option_order: Vec<String> = question.options.keys().cloned().collect();
            option_order.shuffle(rng);
            SessionQuestion {
                question,
                option_order,
            }
        })
        .collect())
}

/// Estado vivo de un intento. Se crea al empezar, se congela al entregar y
/// se descarta al empezar el siguiente.
pub struct ExamSession {
    pub questions: Vec<SessionQuestion>,
    pub answers: HashMap<String, Answer>,
    pub visited: HashSet<String>,
    pub current_index: usize,
    pub time_left: u32,
    pub submitted: bool,
    pub low_time_alerted: bool,
}

impl ExamSession {
    pub fn new(questions: Vec<SessionQuestion>, duration_secs: u32) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            visited: HashSet::new(),
            current_index: 0,
            time_left: duration_secs,
            submitted: false,
            low_time_alerted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_index)
    }

    /// La pregunta actual pasa a "vista" (solo para el indicador, no puntúa).
    fn mark_current_visited(&mut self) {
        if let Some(q) = self.questions.get(self.current_index) {
            self.visited.insert(q.question.id.clone());
        }
    }

    /// Avanza sin dar la vuelta: en la última pregunta se queda quieta.
    pub fn next_question(&mut self) {
        if self.submitted {
            return;
        }
        self.mark_current_visited();
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    /// Retrocede sin dar la vuelta: en la primera se queda quieta.
    pub fn prev_question(&mut self) {
        if self.submitted {
            return;
        }
        self.mark_current_visited();
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Salta a la pregunta `idx`, acotada al rango de la sesión.
    pub fn jump_to(&mut self, idx: usize) {
        if self.submitted || self.questions.is_empty() {
            return;
        }
        self.mark_current_visited();
        self.current_index = idx.min(self.questions.len() - 1);
    }

    /// Selección única: sustituye. Multi-selección: alterna la letra.
    pub fn select_option(&mut self, question_id: &str, key: &str) {
        if self.submitted {
            return;
        }
        let Some(q) = self
            .questions
            .iter()
            .find(|q| q.question.id == question_id)
        else {
            return;
        };
        if !q.question.options.contains_key(key) {
            return;
        }

        if q.question.is_multi() {
            let entry = self
                .answers
                .entry(question_id.to_owned())
                .or_insert_with(|| Answer::Multiple(Default::default()));
            if let Answer::Multiple(set) = entry {
                if !set.remove(key) {
                    set.insert(key.to_owned());
                }
            }
        } else {
            self.answers
                .insert(question_id.to_owned(), Answer::Single(key.to_owned()));
        }
    }

    pub fn is_selected(&self, question_id: &str, key: &str) -> bool {
        match self.answers.get(question_id) {
            Some(Answer::Single(k)) => k == key,
            Some(Answer::Multiple(set)) => set.contains(key),
            None => false,
        }
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
