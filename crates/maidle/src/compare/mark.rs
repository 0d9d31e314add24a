use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::catalog::era_of;
use crate::chart::Scalar;

/// Per-field comparison result between a guess and the target.
///
/// `GoHigher` / `GoLower` tell the player which way the target lies from
/// the guessed value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Mark {
    Equal,
    Mismatch,
    GoHigher,
    GoLower,
}

impl Mark {
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Mark for "guess is `ordering` relative to target".
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::GoHigher,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::GoLower,
        }
    }
}

/// Plain equality. Two missing values are equal; missing vs present is not.
pub fn equality_mark<T: PartialEq + ?Sized>(guess: Option<&T>, target: Option<&T>) -> Mark {
    if guess == target {
        Mark::Equal
    } else {
        Mark::Mismatch
    }
}

/// Compare version eras; falls back to equality of the raw values.
pub fn version_mark(guess: Option<&Scalar>, target: Option<&Scalar>) -> Mark {
    let era = |version: Option<&Scalar>| version.and_then(Scalar::as_int).and_then(era_of);
    match (era(guess), era(target)) {
        (Some(g), Some(t)) => Mark::from_ordering(g.cmp(&t)),
        _ => equality_mark(guess, target),
    }
}

/// Compare BPM as integers; falls back to equality of the raw values.
pub fn bpm_mark(guess: Option<&Scalar>, target: Option<&Scalar>) -> Mark {
    match (
        guess.and_then(Scalar::as_int),
        target.and_then(Scalar::as_int),
    ) {
        (Some(g), Some(t)) => Mark::from_ordering(g.cmp(&t)),
        _ => equality_mark(guess, target),
    }
}

/// Compare chart levels as floats; falls back to equality of the raw values.
pub fn level_mark(guess: Option<&Scalar>, target: Option<&Scalar>) -> Mark {
    match (
        guess.and_then(Scalar::as_float),
        target.and_then(Scalar::as_float),
    ) {
        (Some(g), Some(t)) => Mark::from_ordering(g.total_cmp(&t)),
        _ => equality_mark(guess, target),
    }
}
