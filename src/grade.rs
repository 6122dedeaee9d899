//! Puntuación pura del intento: no muta nada y da lo mismo llamarla una
//! vez que veinte.

use crate::model::{Answer, AnswerKey, SessionQuestion};
use std::collections::HashMap;

/// ¿La respuesta dada acierta la pregunta?
///
/// Clave única: igualdad exacta de letra (sensible a mayúsculas).
/// Clave múltiple: igualdad de conjuntos, sin crédito parcial.
/// Sin respuesta cuenta como fallo.
pub fn question_correct(q: &SessionQuestion, answer: Option<&Answer>) -> bool {
    match (&q.question.answer, answer) {
        (AnswerKey::Single(correct), Some(Answer::Single(given))) => given == correct,
        (AnswerKey::Multiple(_), Some(Answer::Multiple(given))) => {
            let correct = q.question.answer.as_set().unwrap_or_default();
            given.iter().map(String::as_str).collect::<std::collections::BTreeSet<_>>() == correct
        }
        // Tipo de respuesta que no cuadra con la pregunta, o sin responder
        _ => false,
    }
}

/// Número de preguntas acertadas de la sesión.
pub fn score(questions: &[SessionQuestion], answers: &HashMap<String, Answer>) -> u32 {
    questions
        .iter()
        .filter(|q| question_correct(q, answers.get(&q.question.id)))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use std::collections::{BTreeMap, BTreeSet};

    fn session_question(id: &str, answer: AnswerKey) -> SessionQuestion {
        let options: BTreeMap<String, String> = [("A", "uno"), ("B", "dos"), ("C", "tres")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let option_order = options.keys().cloned().collect();
        SessionQuestion {
            question: Question {
                id: id.to_owned(),
                prompt: "¿...?".to_owned(),
                options,
                answer,
                image: None,
                explanation: None,
            },
            option_order,
        }
    }

    fn multi(keys: &[&str]) -> Answer {
        Answer::Multiple(keys.iter().map(|k| k.to_string()).collect::<BTreeSet<_>>())
    }

    #[test]
    fn unanswered_scores_zero() {
        let questions = vec![
            session_question("q1", AnswerKey::Single("B".into())),
            session_question("q2", AnswerKey::Multiple(vec!["A".into(), "C".into()])),
        ];
        assert_eq!(score(&questions, &HashMap::new()), 0);
    }

    #[test]
    fn multi_answer_order_does_not_matter() {
        let q = session_question("q1", AnswerKey::Multiple(vec!["A".into(), "C".into()]));
        assert!(question_correct(&q, Some(&multi(&["C", "A"]))));
        assert!(question_correct(&q, Some(&multi(&["A", "C"]))));
    }

    #[test]
    fn subsets_get_no_partial_credit() {
        let q = session_question("q1", AnswerKey::Multiple(vec!["A".into(), "C".into()]));
        assert!(!question_correct(&q, Some(&multi(&["A"]))));
        assert!(!question_correct(&q, Some(&multi(&["A", "B", "C"]))));
    }

    #[test]
    fn single_answer_is_case_sensitive_exact_match() {
        let q = session_question("q1", AnswerKey::Single("B".into()));
        assert!(question_correct(&q, Some(&Answer::Single("B".into()))));
        assert!(!question_correct(&q, Some(&Answer::Single("b".into()))));
        assert!(!question_correct(&q, Some(&Answer::Single("A".into()))));
    }

    #[test]
    fn mismatched_answer_kind_never_scores() {
        let single = session_question("q1", AnswerKey::Single("B".into()));
        let multiple = session_question("q2", AnswerKey::Multiple(vec!["B".into()]));
        assert!(!question_correct(&single, Some(&multi(&["B"]))));
        assert!(!question_correct(&multiple, Some(&Answer::Single("B".into()))));
    }

    #[test]
    fn two_question_scenario_scores_two_then_one() {
        // Escenario completo: Q1 correcta "B", Q2 correcta {A, C}
        let questions = vec![
            session_question("q1", AnswerKey::Single("B".into())),
            session_question("q2", AnswerKey::Multiple(vec!["A".into(), "C".into()])),
        ];

        let mut answers = HashMap::new();
        answers.insert("q1".to_owned(), Answer::Single("B".into()));
        answers.insert("q2".to_owned(), multi(&["C", "A"]));
        assert_eq!(score(&questions, &answers), 2);

        answers.insert("q2".to_owned(), multi(&["A"]));
        assert_eq!(score(&questions, &answers), 1);

        // Idempotente: repetir la llamada no cambia el resultado
        assert_eq!(score(&questions, &answers), 1);
    }
}
