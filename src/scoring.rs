use crate::model::{Question, Selection};

/// Número de preguntas cuya selección coincide con `correct_index`.
/// Las no respondidas cuentan como fallo.
pub fn compute_score(selections: &[Selection], questions: &[Question]) -> usize {
    selections
        .iter()
        .zip(questions)
        .filter(|(sel, q)| **sel == Some(q.correct_index))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(correct_index: usize) -> Question {
        Question {
            prompt: format!("correct is {correct_index}"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_index,
        }
    }

    #[test]
    fn counts_only_matching_selections() {
        let questions = vec![q(0), q(1), q(2)];
        assert_eq!(compute_score(&[Some(0), Some(1), Some(2)], &questions), 3);
        assert_eq!(compute_score(&[Some(0), Some(2), Some(2)], &questions), 2);
        assert_eq!(compute_score(&[Some(1), Some(0), Some(0)], &questions), 0);
    }

    #[test]
    fn unanswered_never_scores() {
        let questions = vec![q(0), q(0)];
        assert_eq!(compute_score(&[None, None], &questions), 0);
        assert_eq!(compute_score(&[None, Some(0)], &questions), 1);
    }

    #[test]
    fn score_stays_within_bounds_for_every_selection() {
        let questions = vec![q(2), q(0)];
        let choices = [None, Some(0), Some(1), Some(2)];
        for a in choices {
            for b in choices {
                let expected = usize::from(a == Some(2)) + usize::from(b == Some(0));
                let score = compute_score(&[a, b], &questions);
                assert_eq!(score, expected);
                assert!(score <= questions.len());
            }
        }
    }
}
