// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub idx: usize, // índice 0-based en question.options
    pub label: String,
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBlock {
    pub idx: usize,    // índice 0-based en bank.questions
    pub number: usize, // número "humano" (1,2,3…)
    pub prompt: String,
    pub options: Vec<OptionRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizFooter {
    Submit,
    Score { score: usize, total: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub blocks: Vec<QuestionBlock>,
    pub footer: QuizFooter,
}

impl QuestionBlock {
    pub fn heading(&self) -> String {
        format!("Q{}. {}", self.number, self.prompt)
    }

    pub fn checked_option(&self) -> Option<usize> {
        self.options.iter().find(|o| o.checked).map(|o| o.idx)
    }
}

impl QuizFooter {
    pub fn label(&self) -> String {
        match self {
            QuizFooter::Submit => "Submit Quiz".to_owned(),
            QuizFooter::Score { score, total } => format!("Your Score: {score} / {total}"),
        }
    }
}
