//! Game engine: the `/maidle` state machine.
//!
//! ## Round lifecycle (per group)
//!
//! - NoGame --start--> InProgress (random target, `MAX_TRIES` attempts)
//! - InProgress --correct guess--> NoGame
//! - InProgress --wrong guess on last attempt--> NoGame (answer revealed)
//! - InProgress --end--> NoGame (answer revealed)
//!
//! Unresolved guesses never consume an attempt. Every rejection is returned
//! as a [`GameError`] and turned into a reply by [`Engine::handle`].

use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::compare::compare_songs;
use crate::config::game::MAX_TRIES;
use crate::error::GameError;
use crate::game::{
    Action, Command, GameSession, GuessOutcome, GuessReport, HELP_TEXT, Reply, Reveal,
    SessionRegistry, SessionStep,
};

pub struct Engine {
    catalog: Arc<Catalog>,
    sessions: SessionRegistry,
    rng: Mutex<StdRng>,
}

impl Engine {
    /// Create an engine with an entropy-seeded RNG.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create an engine whose target selection is reproducible.
    pub fn with_seed(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(catalog: Arc<Catalog>, rng: StdRng) -> Self {
        Self {
            catalog,
            sessions: SessionRegistry::new(),
            rng: Mutex::new(rng),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    /// Start a round for `group`. Returns the number of attempts granted.
    pub fn start(&self, group: &str) -> Result<u32, GameError> {
        self.sessions.create(group, || {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            let target = self.catalog.random_song(&mut *rng)?;
            debug!("Group {}: target is {} ({})", group, target.title, target.id);
            Ok(GameSession::new(Arc::clone(target)))
        })?;
        info!(
            "Group {}: round started ({} songs in catalog)",
            group,
            self.catalog.len()
        );
        Ok(MAX_TRIES)
    }

    /// Score a guess against the group's target.
    pub fn guess(&self, group: &str, text: &str) -> Result<GuessReport, GameError> {
        let versions = self.catalog.versions();
        self.sessions.update(group, |session| {
            let guess = self
                .catalog
                .resolve(text)
                .ok_or_else(|| GameError::UnresolvedGuess(text.to_owned()))?;
            let target = Arc::clone(session.target());

            if session.is_correct(guess) {
                info!(
                    "Group {}: solved with {} tries left after {}s",
                    group,
                    session.tries_remaining(),
                    session.elapsed_secs()
                );
                return Ok(SessionStep::Finish(GuessReport {
                    comparisons: compare_songs(&target, &target, versions),
                    tries_remaining: session.tries_remaining(),
                    outcome: GuessOutcome::Correct,
                }));
            }

            let tries_remaining = session.consume_attempt();
            debug!(
                "Group {}: wrong guess {:?} -> {} ({} tries left)",
                group, text, guess.title, tries_remaining
            );
            let comparisons = compare_songs(guess, &target, versions);

            if session.is_exhausted() {
                info!(
                    "Group {}: out of tries after {}s, answer was {}",
                    group,
                    session.elapsed_secs(),
                    target.title
                );
                Ok(SessionStep::Finish(GuessReport {
                    comparisons,
                    tries_remaining,
                    outcome: GuessOutcome::OutOfTries(Reveal::of(&target, versions)),
                }))
            } else {
                Ok(SessionStep::Continue(GuessReport {
                    comparisons,
                    tries_remaining,
                    outcome: GuessOutcome::InProgress,
                }))
            }
        })
    }

    /// End the group's round and reveal the answer.
    pub fn end(&self, group: &str) -> Result<Reveal, GameError> {
        let session = self
            .sessions
            .remove(group)
            .ok_or(GameError::NoActiveSession)?;
        info!(
            "Group {}: round ended by request after {}s",
            group,
            session.elapsed_secs()
        );
        Ok(Reveal::of(session.target(), self.catalog.versions()))
    }

    pub fn help(&self) -> &'static str {
        HELP_TEXT
    }

    /// Run a command and produce the reply for it. Never fails.
    pub fn handle(&self, command: &Command) -> Reply {
        let group = command.group_id.as_str();
        let result = match command.action {
            Action::Help => Ok(Reply::Help),
            Action::Start => self
                .start(group)
                .map(|max_tries| Reply::Started { max_tries }),
            Action::End => self.end(group).map(Reply::Ended),
            Action::Guess => self.guess(group, &command.text).map(Reply::Guessed),
        };
        result.unwrap_or_else(|e| {
            debug!("Group {}: {:?} rejected: {}", group, command.action, e);
            Reply::Rejected(e)
        })
    }
}
