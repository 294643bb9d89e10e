//! Quiz round scoring

use super::question::Question;
use crate::core::error::DomainError;

/// Result of answering one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Progress and score of a fixed-length round of questions (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    total: usize,
    answered: usize,
    correct: usize,
}

impl QuizRound {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            answered: 0,
            correct: 0,
        }
    }

    /// Record an answer for `question`
    pub fn answer(
        &mut self,
        question: &Question,
        answer: bool,
    ) -> Result<AnswerOutcome, DomainError> {
        if self.is_complete() {
            return Err(DomainError::RoundComplete);
        }

        self.answered += 1;
        if question.is_correct(answer) {
            self.correct += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Wrong)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// 1-based number of the question currently being asked
    pub fn current_number(&self) -> usize {
        (self.answered + 1).min(self.total)
    }

    /// Share of correct answers in percent (0 when nothing was answered)
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.answered as f64
        }
    }
}

impl std::fmt::Display for QuizRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::entities::Movie;

    fn question(rating: f64) -> Question {
        Question::from_movie(&Movie::new("tt", rating), vec![])
    }

    #[test]
    fn test_round_scoring() {
        let mut round = QuizRound::new(3);

        assert_eq!(round.answer(&question(9.0), true), Ok(AnswerOutcome::Correct));
        assert_eq!(round.answer(&question(5.0), true), Ok(AnswerOutcome::Wrong));
        assert_eq!(round.current_number(), 3);
        assert_eq!(round.answer(&question(5.0), false), Ok(AnswerOutcome::Correct));

        assert!(round.is_complete());
        assert_eq!(round.correct(), 2);
        assert_eq!(round.to_string(), "2/3");
    }

    #[test]
    fn test_answer_after_completion_fails() {
        let mut round = QuizRound::new(1);
        round.answer(&question(8.0), true).unwrap();

        assert_eq!(
            round.answer(&question(8.0), true),
            Err(DomainError::RoundComplete)
        );
        assert_eq!(round.answered(), 1);
    }

    #[test]
    fn test_accuracy() {
        let mut round = QuizRound::new(4);
        assert_eq!(round.accuracy(), 0.0);

        round.answer(&question(8.0), true).unwrap();
        round.answer(&question(8.0), false).unwrap();
        assert_eq!(round.accuracy(), 50.0);
    }
}
