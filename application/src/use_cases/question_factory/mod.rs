//! Question factory use case.
//!
//! Supplies quiz questions one at a time while keeping one question
//! prefetched in the background:
//!
//! 1. `load_data` fetches the catalog and drops unrated movies
//! 2. `request_next_question` serves the prefetched question if there is one,
//!    otherwise builds one on demand
//! 3. Every delivery starts exactly one new background build, so the cache
//!    is always 0 or 1 question ahead
//!
//! The factory runs as a single worker task that exclusively owns the
//! catalog and the pending slot. Network calls run in spawned tasks and
//! report back through the worker's command channel, so slot updates are
//! serialized without locks. Results leave the worker as [`QuizEvent`]s.

use crate::ports::movies_loader::{LoaderError, MoviesLoader};
use crate::ports::posters_loader::PostersLoader;
use crate::ports::question_listener::{QuizError, QuizEvent};
use quiz_domain::{Catalog, Movie, Question};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};


/// Observable state of the prefetch slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No question cached and no build in flight
    Empty,
    /// A build is in flight; `waiting` requests will be served by it and
    /// the builds that follow it
    Building { waiting: usize },
    /// A prefetched question is cached
    Ready,
}

/// The single outstanding precomputed question
#[derive(Debug, Default)]
enum PendingNext {
    #[default]
    Empty,
    Building {
        waiting: usize,
    },
    Ready(Question),
}

impl PendingNext {
    fn state(&self) -> SlotState {
        match self {
            PendingNext::Empty => SlotState::Empty,
            PendingNext::Building { waiting } => SlotState::Building { waiting: *waiting },
            PendingNext::Ready(_) => SlotState::Ready,
        }
    }
}

enum Command {
    LoadData,
    RequestNextQuestion,
    SlotState(oneshot::Sender<SlotState>),
    CatalogFetched(Result<Vec<Movie>, LoaderError>),
    BuildFinished(Result<Question, QuizError>),
}

/// Builder for the question factory worker
///
/// ```ignore
/// let (tx, rx) = mpsc::unbounded_channel();
/// let factory = QuestionFactory::new(movies, posters, tx).with_seed(7).spawn();
/// factory.load_data();
/// ```
pub struct QuestionFactory {
    movies_loader: Arc<dyn MoviesLoader>,
    posters_loader: Arc<dyn PostersLoader>,
    events: mpsc::UnboundedSender<QuizEvent>,
    rng: StdRng,
}

impl QuestionFactory {
    pub fn new(
        movies_loader: Arc<dyn MoviesLoader>,
        posters_loader: Arc<dyn PostersLoader>,
        events: mpsc::UnboundedSender<QuizEvent>,
    ) -> Self {
        Self {
            movies_loader,
            posters_loader,
            events,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for movie selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start the worker on the current tokio runtime
    ///
    /// The worker stops once every handle is dropped and in-flight loads
    /// have finished.
    pub fn spawn(self) -> QuestionFactoryHandle {
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = FactoryWorker {
            movies_loader: self.movies_loader,
            posters_loader: self.posters_loader,
            events: self.events,
            rng: self.rng,
            catalog: Catalog::default(),
            pending: PendingNext::Empty,
            commands: tx.downgrade(),
        };
        tokio::spawn(worker.run(rx));

        QuestionFactoryHandle { commands: tx }
    }
}

/// Cheap, cloneable access to a running question factory
///
/// Holding a handle does not own the presentation layer, so a listener may
/// keep one to request follow-up questions.
#[derive(Clone)]
pub struct QuestionFactoryHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl QuestionFactoryHandle {
    /// Fetch the catalog. The result arrives as `CatalogLoaded` or `LoadFailed`.
    pub fn load_data(&self) {
        self.send(Command::LoadData);
    }

    /// Ask for the next question. The result arrives as `QuestionReady` or
    /// `LoadFailed`; this call never waits on the network.
    pub fn request_next_question(&self) {
        self.send(Command::RequestNextQuestion);
    }

    /// Current state of the prefetch slot, or `None` if the worker stopped
    pub async fn slot_state(&self) -> Option<SlotState> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(Command::SlotState(tx)).ok()?;
        rx.await.ok()
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("Question factory is no longer running");
        }
    }
}

struct FactoryWorker {
    movies_loader: Arc<dyn MoviesLoader>,
    posters_loader: Arc<dyn PostersLoader>,
    events: mpsc::UnboundedSender<QuizEvent>,
    rng: StdRng,
    catalog: Catalog,
    pending: PendingNext,
    // Weak so that dropping every handle stops the worker
    commands: mpsc::WeakUnboundedSender<Command>,
}

impl FactoryWorker {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        debug!("Question factory started");

        while let Some(command) = commands.recv().await {
            self.handle(command);
        }

        debug!("Question factory stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::LoadData => self.load_data(),
            Command::RequestNextQuestion => self.request_next_question(),
            Command::SlotState(reply) => {
                let _ = reply.send(self.pending.state());
            }
            Command::CatalogFetched(result) => self.on_catalog_fetched(result),
            Command::BuildFinished(result) => self.on_build_finished(result),
        }
    }

    fn load_data(&self) {
        let Some(reply) = self.commands.upgrade() else {
            return;
        };
        let loader = self.movies_loader.clone();

        debug!("Loading movie catalog");
        tokio::spawn(async move {
            let result = loader.load_movies().await;
            let _ = reply.send(Command::CatalogFetched(result));
        });
    }

    fn on_catalog_fetched(&mut self, result: Result<Vec<Movie>, LoaderError>) {
        match result {
            Ok(movies) => {
                let received = movies.len();
                self.catalog = Catalog::from_movies(movies);
                info!(
                    "Catalog loaded: {} movies ({} without rating dropped)",
                    self.catalog.len(),
                    received - self.catalog.len()
                );

                self.emit(QuizEvent::CatalogLoaded {
                    movie_count: self.catalog.len(),
                });

                if matches!(self.pending, PendingNext::Empty) {
                    self.start_build(0);
                }
            }
            Err(e) => {
                warn!("Catalog load failed: {}", e);
                self.emit(QuizEvent::LoadFailed(QuizError::CatalogLoadFailed(e)));
            }
        }
    }

    fn request_next_question(&mut self) {
        match std::mem::take(&mut self.pending) {
            PendingNext::Ready(question) => {
                debug!("Serving prefetched question for {}", question.movie_id());
                self.emit(QuizEvent::QuestionReady(question));
                self.start_build(0);
            }
            PendingNext::Building { waiting } => {
                debug!("Request joins build in flight ({} already waiting)", waiting);
                self.pending = PendingNext::Building {
                    waiting: waiting + 1,
                };
            }
            PendingNext::Empty => self.start_build(1),
        }
    }

    /// Start the only build in flight. With `waiting == 0` it is a prefetch.
    fn start_build(&mut self, waiting: usize) {
        let movie = match self.catalog.pick(&mut self.rng) {
            Ok(movie) => movie.clone(),
            Err(_) => {
                self.pending = PendingNext::Building { waiting };
                self.on_build_finished(Err(QuizError::NoMoviesAvailable));
                return;
            }
        };

        let Some(reply) = self.commands.upgrade() else {
            self.pending = PendingNext::Empty;
            return;
        };

        debug!("Building question for {} (waiting: {})", movie, waiting);
        self.pending = PendingNext::Building { waiting };

        let loader = self.posters_loader.clone();
        tokio::spawn(async move {
            let result = loader
                .load_poster(movie.id())
                .await
                .map(|image| Question::from_movie(&movie, image))
                .map_err(QuizError::PosterLoadFailed);
            let _ = reply.send(Command::BuildFinished(result));
        });
    }

    fn on_build_finished(&mut self, result: Result<Question, QuizError>) {
        let PendingNext::Building { waiting } = self.pending else {
            debug!("Dropping build result with no build in flight");
            return;
        };

        if waiting == 0 {
            self.pending = match result {
                Ok(question) => {
                    debug!("Prefetched question for {}", question.movie_id());
                    PendingNext::Ready(question)
                }
                Err(e) => {
                    warn!("Prefetch failed, slot left empty: {}", e);
                    PendingNext::Empty
                }
            };
            return;
        }

        match result {
            Ok(question) => self.emit(QuizEvent::QuestionReady(question)),
            Err(e) => self.emit(QuizEvent::LoadFailed(e)),
        }
        self.start_build(waiting - 1);
    }

    fn emit(&self, event: QuizEvent) {
        if self.events.send(event).is_err() {
            debug!("Listener gone, dropping event");
        }
    }
}
