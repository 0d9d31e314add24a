//! Per-group session store.
//!
//! Each group has at most one [`GameSession`]. Mutations go through the
//! map's entry API, which holds the lock for that key until the closure
//! returns, so commands for the same group are applied one at a time while
//! other groups proceed independently. Closures passed to the registry must
//! not call back into it.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::chart::Song;
use crate::error::GameError;
use crate::game::GameSession;

/// Conversation/group identifier supplied by the host.
pub type GroupId = String;

/// What to do with a session after a command has been applied to it.
#[derive(Debug)]
pub enum SessionStep<R> {
    /// Keep the session
    Continue(R),
    /// Destroy the session
    Finish(R),
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<GroupId, GameSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `group` unless one already exists.
    ///
    /// `create` only runs when the slot is free; an existing session is left
    /// untouched and `DuplicateSession` is returned.
    pub fn create<F>(&self, group: &str, create: F) -> Result<(), GameError>
    where
        F: FnOnce() -> Result<GameSession, GameError>,
    {
        match self.sessions.entry(group.to_owned()) {
            Entry::Occupied(_) => Err(GameError::DuplicateSession),
            Entry::Vacant(slot) => {
                slot.insert(create()?);
                Ok(())
            }
        }
    }

    /// Apply `step` to the group's session and drop the session if it
    /// reports `Finish`. Errors from `step` leave the session as it is.
    pub fn update<R, F>(&self, group: &str, step: F) -> Result<R, GameError>
    where
        F: FnOnce(&mut GameSession) -> Result<SessionStep<R>, GameError>,
    {
        match self.sessions.entry(group.to_owned()) {
            Entry::Vacant(_) => Err(GameError::NoActiveSession),
            Entry::Occupied(mut entry) => match step(entry.get_mut())? {
                SessionStep::Continue(result) => Ok(result),
                SessionStep::Finish(result) => {
                    entry.remove();
                    Ok(result)
                }
            },
        }
    }

    /// Remove and return the group's session.
    pub fn remove(&self, group: &str) -> Option<GameSession> {
        self.sessions.remove(group).map(|(_, session)| session)
    }

    pub fn is_active(&self, group: &str) -> bool {
        self.sessions.contains_key(group)
    }

    pub fn tries_remaining(&self, group: &str) -> Option<u32> {
        self.sessions
            .get(group)
            .map(|session| session.tries_remaining())
    }

    pub fn target(&self, group: &str) -> Option<Arc<Song>> {
        self.sessions
            .get(group)
            .map(|session| Arc::clone(session.target()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session.
    pub fn clear(&self) {
        self.sessions.clear();
    }
}
