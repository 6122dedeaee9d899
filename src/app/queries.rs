use super::*;
use crate::model::SessionQuestion;

impl ExamApp {
    // Accesores para la UI
    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.session.as_ref().and_then(|s| s.current())
    }

    pub fn exam_len(&self) -> usize {
        self.session.as_ref().map(|s| s.len()).unwrap_or(0)
    }

    pub fn current_index(&self) -> usize {
        self.session.as_ref().map(|s| s.current_index).unwrap_or(0)
    }

    pub fn is_last_question(&self) -> bool {
        match &self.session {
            Some(s) if !s.is_empty() => s.current_index == s.len() - 1,
            _ => false,
        }
    }

    pub fn is_selected(&self, question_id: &str, key: &str) -> bool {
        self.session
            .as_ref()
            .map(|s| s.is_selected(question_id, key))
            .unwrap_or(false)
    }

    pub fn time_left(&self) -> u32 {
        self.session.as_ref().map(|s| s.time_left).unwrap_or(0)
    }

    pub fn low_time(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.low_time_alerted && !s.submitted)
            .unwrap_or(false)
    }
}
