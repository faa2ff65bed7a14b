use super::*;

/// Eventos que la vista recoge durante un frame y aplica al final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Select { question: usize, option: usize },
    Submit,
}

impl QuizApp {
    pub fn apply(&mut self, action: QuizAction) {
        match action {
            QuizAction::Select { question, option } => self.select_option(question, option),
            QuizAction::Submit => self.submit(),
        }
    }

    /// Marca `option_index` para la pregunta `question_index`, sustituyendo
    /// la anterior. No hace nada si ya se entregó o si algún índice no existe.
    pub fn select_option(&mut self, question_index: usize, option_index: usize) {
        if self.is_submitted() {
            log::debug!("selección ignorada: el quiz ya está entregado");
            return;
        }

        let Some(question) = self.bank.questions.get(question_index) else {
            log::warn!("pregunta {question_index} fuera de rango");
            return;
        };
        if option_index >= question.options.len() {
            log::warn!(
                "opción {option_index} fuera de rango para la pregunta {}",
                question_index + 1
            );
            return;
        }

        self.selections[question_index] = Some(option_index);
        log::debug!(
            "Q{} -> opción {option_index} ({}/{} respondidas)",
            question_index + 1,
            self.answered_count(),
            self.question_count()
        );
    }

    /// Entrega el quiz. Sólo la primera llamada cuenta.
    pub fn submit(&mut self) {
        if self.is_submitted() {
            log::debug!("entrega repetida ignorada");
            return;
        }

        let score = compute_score(&self.selections, &self.bank.questions);
        self.phase = QuizPhase::Submitted { score };
        log::info!("quiz entregado: {score} / {}", self.question_count());
    }
}
