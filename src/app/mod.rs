use crate::model::{QuizBank, QuizPhase, Selection};
use crate::scoring::compute_score;

// Submódulos
pub mod actions;
pub mod queries;
pub mod view_models;

pub use actions::QuizAction;
// Re-export de view models
pub use crate::view_models::{OptionRow, QuestionBlock, QuizFooter, QuizView};

/// Estado de una sesión del quiz. Vive lo que dura la ventana/pestaña.
///
/// `selections` siempre tiene una entrada por pregunta. La nota va dentro
/// de `QuizPhase::Submitted`, así que entregar y puntuar ocurren a la vez.
pub struct QuizApp {
    bank: QuizBank,
    selections: Vec<Selection>,
    phase: QuizPhase,
}

impl QuizApp {
    pub fn new(bank: QuizBank) -> Self {
        let selections = vec![None; bank.questions.len()];
        log::info!(
            "quiz \"{}\" listo: {} preguntas",
            bank.title,
            bank.questions.len()
        );

        Self {
            bank,
            selections,
            phase: QuizPhase::default(),
        }
    }
}
