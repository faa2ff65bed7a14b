use serde::{Deserialize, Serialize};

/// Opción elegida para una pregunta (`None` = sin responder)
pub type Selection = Option<usize>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,       // Pregunta
    pub options: Vec<String>, // Opciones, en orden
    pub correct_index: usize, // Índice de la opción correcta
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Diagram {
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default = "default_diagram_width")]
    pub width: f32,
    #[serde(default = "default_diagram_height")]
    pub height: f32,
}

fn default_diagram_width() -> f32 {
    640.0
}

fn default_diagram_height() -> f32 {
    360.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizBank {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub diagram: Option<Diagram>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Submitted { score: usize },
}

impl Default for QuizPhase {
    fn default() -> Self {
        QuizPhase::Answering
    }
}
