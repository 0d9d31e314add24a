use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::chart::Song;
use crate::config::game::MAX_TRIES;

/// State of one group's round: the secret target and the attempts left.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Arc<Song>,
    tries_remaining: u32,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(target: Arc<Song>) -> Self {
        Self {
            target,
            tries_remaining: MAX_TRIES,
            started_at: Utc::now(),
        }
    }

    pub fn target(&self) -> &Arc<Song> {
        &self.target
    }

    pub fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Seconds since the round started
    pub fn elapsed_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    pub fn is_correct(&self, guess: &Song) -> bool {
        guess.id == self.target.id
    }

    /// Use up one attempt and return how many are left. Saturates at zero.
    pub fn consume_attempt(&mut self) -> u32 {
        self.tries_remaining = self.tries_remaining.saturating_sub(1);
        self.tries_remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.tries_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Scalar;

    fn session() -> GameSession {
        GameSession::new(Arc::new(Song {
            id: Scalar::from(1),
            title: "Alpha".to_string(),
            ..Default::default()
        }))
    }

    #[test]
    fn test_new_session() {
        let session = session();
        assert_eq!(session.tries_remaining(), MAX_TRIES);
        assert!(!session.is_exhausted());
        assert!(session.elapsed_secs() >= 0);
    }

    #[test]
    fn test_consume_attempt_saturates() {
        let mut session = session();
        for expected in (0..MAX_TRIES).rev() {
            assert_eq!(session.consume_attempt(), expected);
        }
        assert!(session.is_exhausted());
        assert_eq!(session.consume_attempt(), 0);
    }

    #[test]
    fn test_is_correct_compares_ids() {
        let session = session();
        let same_id = Song {
            id: Scalar::from(1),
            title: "Renamed".to_string(),
            ..Default::default()
        };
        let other = Song {
            id: Scalar::from(2),
            title: "Alpha".to_string(),
            ..Default::default()
        };
        assert!(session.is_correct(&same_id));
        assert!(!session.is_correct(&other));
    }
}
