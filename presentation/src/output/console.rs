//! Console output formatter for the quiz

use colored::Colorize;
use quiz_application::QuizError;
use quiz_domain::{AnswerOutcome, Question, QuizRound};

/// Formats quiz screens for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn header() -> String {
        let mut output = String::new();
        output.push_str("+============================================================+\n");
        output.push_str("|                       Movie Quiz                           |\n");
        output.push_str("+============================================================+\n");
        output
    }

    pub fn catalog_loaded(movie_count: usize) -> String {
        format!("{} {} movies", "Loaded".cyan().bold(), movie_count)
    }

    /// Question screen: number, poster summary and prompt
    pub fn question(round: &QuizRound, question: &Question) -> String {
        format!(
            "\n{}\n{} {} ({} bytes)\n{} {}",
            format!("── Question {}/{} ──", round.current_number(), round.total())
                .yellow()
                .bold(),
            "Poster:".cyan().bold(),
            question.movie_id(),
            question.image().len(),
            question.text(),
            "[y/n, q to quit]".dimmed()
        )
    }

    pub fn outcome(outcome: AnswerOutcome) -> String {
        match outcome {
            AnswerOutcome::Correct => "Correct!".green().bold().to_string(),
            AnswerOutcome::Wrong => "Wrong!".red().bold().to_string(),
        }
    }

    pub fn round_result(round: &QuizRound) -> String {
        format!(
            "\n{}\n{} {} ({:.0}%)",
            "This round is over!".yellow().bold(),
            "Your score:".cyan().bold(),
            round,
            round.accuracy()
        )
    }

    pub fn load_failed(error: &QuizError) -> String {
        format!(
            "\n{} {}\n{}",
            "Failed to load data:".red().bold(),
            error,
            "[r to retry, q to quit]".dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::LoaderError;
    use quiz_domain::Movie;

    #[test]
    fn test_question_screen() {
        let round = QuizRound::new(10);
        let question = Question::from_movie(&Movie::new("tt7", 8.0), vec![0; 64]);

        let screen = ConsoleFormatter::question(&round, &question);

        assert!(screen.contains("Question 1/10"));
        assert!(screen.contains("tt7"));
        assert!(screen.contains("64 bytes"));
        assert!(screen.contains(question.text()));
    }

    #[test]
    fn test_round_result() {
        let mut round = QuizRound::new(2);
        let question = Question::from_movie(&Movie::new("a", 9.0), vec![]);
        round.answer(&question, true).unwrap();
        round.answer(&question, false).unwrap();

        let screen = ConsoleFormatter::round_result(&round);

        assert!(screen.contains("1/2"));
        assert!(screen.contains("50%"));
    }

    #[test]
    fn test_load_failed_shows_message() {
        let error = QuizError::CatalogLoadFailed(LoaderError::Other("network down".to_string()));
        assert!(ConsoleFormatter::load_failed(&error).contains("network down"));
    }
}
