use super::*;

impl QuizApp {
    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// `None` tanto si no está respondida como si el índice no existe
    pub fn selection(&self, question_index: usize) -> Selection {
        self.selections.get(question_index).copied().flatten()
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, QuizPhase::Submitted { .. })
    }

    pub fn score(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Submitted { score } => Some(score),
            QuizPhase::Answering => None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.bank.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }
}
