// src/error.rs

use std::fmt;

/// Fallos al cargar el banco de preguntas. Sólo ocurren al arrancar.
#[derive(Debug)]
pub enum QuizError {
    Parse(serde_yaml::Error),
    EmptyBank,
    TooFewOptions {
        question: usize,
        count: usize,
    },
    CorrectIndexOutOfRange {
        question: usize,
        correct_index: usize,
        option_count: usize,
    },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Parse(e) => write!(f, "could not parse the question bank: {e}"),
            QuizError::EmptyBank => write!(f, "the question bank has no questions"),
            QuizError::TooFewOptions { question, count } => write!(
                f,
                "question {} has {count} option(s), at least 2 are required",
                question + 1
            ),
            QuizError::CorrectIndexOutOfRange {
                question,
                correct_index,
                option_count,
            } => write!(
                f,
                "question {} marks option {correct_index} as correct but only has {option_count}",
                question + 1
            ),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for QuizError {
    fn from(e: serde_yaml::Error) -> Self {
        QuizError::Parse(e)
    }
}
