use super::*;

impl QuizApp {
    /// Lo que hay que pintar en este frame. Función pura del estado.
    pub fn quiz_view(&self) -> QuizView {
        let enabled = !self.is_submitted();

        let blocks = self
            .bank
            .questions
            .iter()
            .enumerate()
            .map(|(qi, q)| {
                let selected = self.selection(qi);
                QuestionBlock {
                    idx: qi,
                    number: qi + 1,
                    prompt: q.prompt.clone(),
                    options: q
                        .options
                        .iter()
                        .enumerate()
                        .map(|(oi, label)| OptionRow {
                            idx: oi,
                            label: label.clone(),
                            checked: selected == Some(oi),
                            enabled,
                        })
                        .collect(),
                }
            })
            .collect();

        let footer = match self.phase {
            QuizPhase::Answering => QuizFooter::Submit,
            QuizPhase::Submitted { score } => QuizFooter::Score {
                score,
                total: self.question_count(),
            },
        };

        QuizView { blocks, footer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_quiz_embedded;

    fn sample_app() -> QuizApp {
        QuizApp::new(read_quiz_embedded().expect("embedded bank ok"))
    }

    #[test]
    fn answering_view_shows_enabled_radios_and_submit() {
        let mut app = sample_app();
        app.select_option(1, 2);
        let view = app.quiz_view();

        assert_eq!(view.blocks.len(), 4);
        assert_eq!(view.footer, QuizFooter::Submit);
        assert_eq!(view.footer.label(), "Submit Quiz");
        assert!(view.blocks.iter().flat_map(|b| &b.options).all(|o| o.enabled));

        assert_eq!(view.blocks[0].checked_option(), None);
        assert_eq!(view.blocks[1].checked_option(), Some(2));
        assert_eq!(
            view.blocks[1].options.iter().filter(|o| o.checked).count(),
            1
        );
        assert!(view.blocks[0].heading().starts_with("Q1. Which word"));
        assert_eq!(view.blocks[2].options[1].label, "0.84");
    }

    #[test]
    fn submitted_view_disables_radios_and_keeps_choices() {
        let mut app = sample_app();
        app.select_option(0, 0);
        app.select_option(3, 1);
        app.submit();
        let view = app.quiz_view();

        assert!(view.blocks.iter().flat_map(|b| &b.options).all(|o| !o.enabled));
        assert_eq!(view.blocks[0].checked_option(), Some(0));
        assert_eq!(view.blocks[1].checked_option(), None);
        assert_eq!(view.blocks[3].checked_option(), Some(1));
        assert_eq!(view.footer, QuizFooter::Score { score: 1, total: 4 });
    }

    #[test]
    fn view_is_stable_between_calls() {
        let mut app = sample_app();
        app.select_option(2, 1);
        assert_eq!(app.quiz_view(), app.quiz_view());
    }
}
