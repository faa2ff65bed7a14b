// src/data.rs

use crate::error::QuizError;
use crate::model::QuizBank;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_quiz_embedded() -> Result<QuizBank, QuizError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_quiz(file_content)
}

pub fn parse_quiz(yaml: &str) -> Result<QuizBank, QuizError> {
    let bank: QuizBank = serde_yaml::from_str(yaml)?;
    validate_bank(&bank)?;
    log::debug!(
        "banco \"{}\" cargado con {} preguntas",
        bank.title,
        bank.questions.len()
    );
    Ok(bank)
}

/// Comprueba que cada pregunta tenga al menos dos opciones
/// y que `correct_index` apunte a una de ellas.
pub fn validate_bank(bank: &QuizBank) -> Result<(), QuizError> {
    if bank.questions.is_empty() {
        return Err(QuizError::EmptyBank);
    }

    for (i, q) in bank.questions.iter().enumerate() {
        if q.options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                question: i,
                count: q.options.len(),
            });
        }
        if q.correct_index >= q.options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                question: i,
                correct_index: q.correct_index,
                option_count: q.options.len(),
            });
        }
    }

    Ok(())
}
