//! Console quiz listener
//!
//! Plays one round in the terminal: shows each question, reads the player's
//! answer and asks the factory for the next question until the round is over.

use super::input::PlayerInput;
use crate::output::console::ConsoleFormatter;
use async_trait::async_trait;
use quiz_application::{QuestionFactoryHandle, QuestionListener, QuizError};
use quiz_domain::{Question, QuizRound};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// [`QuestionListener`] that plays the quiz on a console
///
/// Keeps a handle to the factory to request follow-up questions; the handle
/// does not own the factory's lifetime beyond the round.
pub struct ConsoleQuiz<R, W> {
    factory: Option<QuestionFactoryHandle>,
    round: QuizRound,
    input: Lines<R>,
    out: W,
    finished: bool,
}

impl ConsoleQuiz<BufReader<Stdin>, std::io::Stdout> {
    /// Play on stdin/stdout
    pub fn stdio(factory: QuestionFactoryHandle, rounds: usize) -> Self {
        Self::new(
            factory,
            rounds,
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
        )
    }
}

impl<R, W> ConsoleQuiz<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(factory: QuestionFactoryHandle, rounds: usize, input: R, out: W) -> Self {
        Self {
            factory: Some(factory),
            round: QuizRound::new(rounds),
            input: input.lines(),
            out,
            finished: false,
        }
    }

    pub fn round(&self) -> &QuizRound {
        &self.round
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            debug!("Console write failed: {}", e);
        }
    }

    /// Read lines until one of `accepted` is typed. EOF counts as quit.
    async fn read_choice(&mut self, accepted: &[PlayerInput]) -> PlayerInput {
        loop {
            if let Err(e) = self.out.flush() {
                debug!("Console flush failed: {}", e);
            }
            let line = match self.input.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return PlayerInput::Quit,
                Err(e) => {
                    debug!("Console read failed: {}", e);
                    return PlayerInput::Quit;
                }
            };

            match PlayerInput::parse(&line) {
                Some(choice) if accepted.contains(&choice) => return choice,
                _ => self.say("Please type one of the options shown."),
            }
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        // Release the factory so it can shut down with the round
        self.factory = None;
    }

    fn factory(&self) -> Option<&QuestionFactoryHandle> {
        self.factory.as_ref()
    }
}

#[async_trait]
impl<R, W> QuestionListener for ConsoleQuiz<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn on_catalog_loaded(&mut self, movie_count: usize) {
        self.say(ConsoleFormatter::catalog_loaded(movie_count));
        if let Some(factory) = self.factory() {
            factory.request_next_question();
        }
    }

    async fn on_question_ready(&mut self, question: Question) {
        self.say(ConsoleFormatter::question(&self.round, &question));

        let answer = match self
            .read_choice(&[PlayerInput::Yes, PlayerInput::No, PlayerInput::Quit])
            .await
        {
            PlayerInput::Yes => true,
            PlayerInput::No => false,
            _ => {
                self.finish();
                return;
            }
        };

        match self.round.answer(&question, answer) {
            Ok(outcome) => self.say(ConsoleFormatter::outcome(outcome)),
            Err(e) => debug!("Ignoring answer: {}", e),
        }

        if self.round.is_complete() {
            self.say(ConsoleFormatter::round_result(&self.round));
            self.finish();
        } else if let Some(factory) = self.factory() {
            factory.request_next_question();
        }
    }

    async fn on_load_failed(&mut self, error: QuizError) {
        self.say(ConsoleFormatter::load_failed(&error));

        match self
            .read_choice(&[PlayerInput::Retry, PlayerInput::Quit])
            .await
        {
            PlayerInput::Retry => {
                if let Some(factory) = self.factory() {
                    if error.needs_reload() {
                        factory.load_data();
                    } else {
                        factory.request_next_question();
                    }
                }
            }
            _ => self.finish(),
        }
    }

    fn is_done(&self) -> bool {
        self.finished
    }
}
