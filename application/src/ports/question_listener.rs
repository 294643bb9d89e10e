//! Question listener port
//!
//! The output port from the question factory to the presentation layer.
//! The factory never calls a listener directly: it emits [`QuizEvent`]s on a
//! channel, and [`deliver_events`] drains that channel on a single task, so
//! the listener is never invoked concurrently.

use super::movies_loader::LoaderError;
use async_trait::async_trait;
use quiz_domain::Question;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Errors reported to the listener
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error(transparent)]
    CatalogLoadFailed(LoaderError),

    #[error(transparent)]
    PosterLoadFailed(LoaderError),

    #[error("No movies found")]
    NoMoviesAvailable,
}

impl QuizError {
    /// Whether the failure came from the catalog request
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, QuizError::CatalogLoadFailed(_))
    }

    /// Whether recovering requires fetching the catalog again
    pub fn needs_reload(&self) -> bool {
        matches!(
            self,
            QuizError::CatalogLoadFailed(_) | QuizError::NoMoviesAvailable
        )
    }
}

/// Events emitted by the question factory for the presentation layer
#[derive(Debug)]
pub enum QuizEvent {
    /// A catalog load succeeded; `movie_count` rated movies are available
    CatalogLoaded { movie_count: usize },
    /// A requested question is ready
    QuestionReady(Question),
    /// A catalog load or a requested question failed
    LoadFailed(QuizError),
}

/// Receiver of factory results
///
/// Implementations live in the presentation layer. Callbacks run one at a
/// time inside [`deliver_events`].
#[async_trait]
pub trait QuestionListener: Send {
    async fn on_catalog_loaded(&mut self, movie_count: usize);

    async fn on_question_ready(&mut self, question: Question);

    async fn on_load_failed(&mut self, error: QuizError);

    /// Stop delivery after the current event
    fn is_done(&self) -> bool {
        false
    }
}

/// Deliver events to `listener` until the channel closes or the listener is done
///
/// Returns the number of delivered events.
pub async fn deliver_events<L>(
    events: &mut mpsc::UnboundedReceiver<QuizEvent>,
    listener: &mut L,
) -> usize
where
    L: QuestionListener + ?Sized,
{
    let mut delivered = 0;

    while !listener.is_done() {
        let Some(event) = events.recv().await else {
            debug!("Event channel closed after {} events", delivered);
            break;
        };

        match event {
            QuizEvent::CatalogLoaded { movie_count } => {
                listener.on_catalog_loaded(movie_count).await
            }
            QuizEvent::QuestionReady(question) => listener.on_question_ready(question).await,
            QuizEvent::LoadFailed(error) => listener.on_load_failed(error).await,
        }
        delivered += 1;
    }

    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::Movie;

    #[derive(Default)]
    struct RecordingListener {
        log: Vec<String>,
        stop_after: Option<usize>,
    }

    #[async_trait]
    impl QuestionListener for RecordingListener {
        async fn on_catalog_loaded(&mut self, movie_count: usize) {
            self.log.push(format!("loaded:{movie_count}"));
        }

        async fn on_question_ready(&mut self, question: Question) {
            self.log.push(format!("question:{}", question.movie_id()));
        }

        async fn on_load_failed(&mut self, error: QuizError) {
            self.log.push(format!("failed:{error}"));
        }

        fn is_done(&self) -> bool {
            self.stop_after.is_some_and(|n| self.log.len() >= n)
        }
    }

    #[tokio::test]
    async fn test_events_delivered_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(QuizEvent::CatalogLoaded { movie_count: 2 }).unwrap();
        tx.send(QuizEvent::QuestionReady(Question::from_movie(
            &Movie::new("tt1", 8.0),
            vec![],
        )))
        .unwrap();
        tx.send(QuizEvent::LoadFailed(QuizError::NoMoviesAvailable))
            .unwrap();
        drop(tx);

        let mut listener = RecordingListener::default();
        let delivered = deliver_events(&mut rx, &mut listener).await;

        assert_eq!(delivered, 3);
        assert_eq!(
            listener.log,
            vec!["loaded:2", "question:tt1", "failed:No movies found"]
        );
    }

    #[tokio::test]
    async fn test_delivery_stops_when_listener_done() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        for count in 0..5 {
            tx.send(QuizEvent::CatalogLoaded { movie_count: count })
                .unwrap();
        }

        let mut listener = RecordingListener {
            stop_after: Some(2),
            ..Default::default()
        };
        let delivered = deliver_events(&mut rx, &mut listener).await;

        assert_eq!(delivered, 2);
        // Remaining events stay queued
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_loader_errors_are_transparent() {
        let error = QuizError::CatalogLoadFailed(LoaderError::Other("network down".to_string()));
        assert_eq!(error.to_string(), "network down");
        assert!(error.is_catalog_failure());
        assert!(!QuizError::NoMoviesAvailable.is_catalog_failure());
    }

    #[test]
    fn test_needs_reload() {
        let catalog = QuizError::CatalogLoadFailed(LoaderError::Timeout);
        let poster = QuizError::PosterLoadFailed(LoaderError::Timeout);

        assert!(catalog.needs_reload());
        assert!(QuizError::NoMoviesAvailable.needs_reload());
        assert!(!poster.needs_reload());
    }
}
