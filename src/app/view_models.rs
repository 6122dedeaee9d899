use super::*;
use crate::grade;
use crate::model::{Answer, AnswerKey};

impl ExamApp {
    /// Una celda por pregunta de la sesión: ✔ respondida, ✖ vista sin
    /// responder, □ sin tocar.
    pub fn progress_cells(&self) -> Vec<ProgressCell> {
        let Some(s) = self.session.as_ref() else {
            return Vec::new();
        };
        s.questions
            .iter()
            .enumerate()
            .map(|(idx, q)| {
                let id = q.question.id.as_str();
                ProgressCell {
                    idx,
                    answered: s.is_answered(id),
                    seen: s.visited.contains(id),
                    current: idx == s.current_index,
                }
            })
            .collect()
    }

    /// Revisión completa del intento para la vista de resultados.
    pub fn result_rows(&self) -> Vec<ResultRow> {
        let Some(s) = self.session.as_ref() else {
            return Vec::new();
        };
        s.questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let answer = s.answers.get(&q.question.id);
                ResultRow {
                    number: i + 1,
                    prompt: q.question.prompt.clone(),
                    image: q.question.image.clone(),
                    user_text: answer
                        .map(|a| answer_text(q, a))
                        .unwrap_or_else(|| "Sin responder".to_owned()),
                    correct_text: correct_text(q),
                    is_correct: grade::question_correct(q, answer),
                    explanation: q.question.explanation.clone(),
                }
            })
            .collect()
    }

    /// Puntuación del intento, derivada (no se guarda en la sesión).
    pub fn session_score(&self) -> u32 {
        self.session
            .as_ref()
            .map(|s| grade::score(&s.questions, &s.answers))
            .unwrap_or(0)
    }

    /// "Intento N: s/len" para la lista del inicio.
    pub fn history_rows(&self) -> Vec<String> {
        self.score_history
            .iter()
            .enumerate()
            .map(|(i, s)| format!("Intento {}: {}/{}", i + 1, s, self.config.question_count))
            .collect()
    }
}

fn option_text(q: &crate::model::SessionQuestion, key: &str) -> String {
    q.question
        .options
        .get(key)
        .map(|text| format!("{key}. {text}"))
        .unwrap_or_else(|| key.to_owned())
}

fn answer_text(q: &crate::model::SessionQuestion, answer: &Answer) -> String {
    match answer {
        Answer::Single(k) => option_text(q, k),
        Answer::Multiple(ks) if ks.is_empty() => "Sin responder".to_owned(),
        Answer::Multiple(ks) => ks
            .iter()
            .map(|k| option_text(q, k))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn correct_text(q: &crate::model::SessionQuestion) -> String {
    match &q.question.answer {
        AnswerKey::Single(k) => option_text(q, k),
        AnswerKey::Multiple(ks) => ks
            .iter()
            .map(|k| option_text(q, k))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::{bank_question, test_app};
    use crate::model::AnswerKey;

    fn app() -> ExamApp {
        let bank = vec![
            bank_question("q1", AnswerKey::Single("B".into())),
            bank_question("q2", AnswerKey::Multiple(vec!["A".into(), "C".into()])),
        ];
        let config = ExamConfig {
            question_count: 2,
            duration_secs: 600,
            low_time_threshold: 300,
        };
        let mut app = test_app(config, bank);
        app.empezar_examen();
        app
    }

    #[test]
    fn progress_cells_track_answered_and_seen() {
        let mut app = app();
        let first = app.session.as_ref().unwrap().questions[0].question.id.clone();
        app.seleccionar_opcion(&first, "B");
        app.siguiente_pregunta();

        let cells = app.progress_cells();
        assert_eq!(cells.len(), 2);
        assert!(cells[0].answered);
        assert!(!cells[1].answered);
        assert!(cells[1].current);
    }

    #[test]
    fn result_rows_show_answers_as_text() {
        let mut app = app();
        app.seleccionar_opcion("q1", "B");
        app.entregar_examen();

        let rows = app.result_rows();
        assert_eq!(rows.len(), 2);

        let q1 = rows.iter().find(|r| r.prompt.contains("q1")).expect("fila q1");
        assert!(q1.is_correct);
        assert_eq!(q1.user_text, "B. dos");

        let q2 = rows.iter().find(|r| r.prompt.contains("q2")).expect("fila q2");
        assert!(!q2.is_correct);
        assert_eq!(q2.user_text, "Sin responder");
        assert_eq!(q2.correct_text, "A. uno, C. tres");
    }
}
