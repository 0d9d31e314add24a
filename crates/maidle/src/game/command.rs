use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::game::GroupId;

/// What a `/maidle` command asks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Start,
    End,
    Help,
    Guess,
}

/// A command as delivered by the host: which group sent it and what it says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub group_id: GroupId,
    pub action: Action,
    pub text: String,
}

impl Command {
    pub fn new(group_id: impl Into<GroupId>, action: Action, text: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            action,
            text: text.into(),
        }
    }

    /// Build a command from the text after `/maidle`.
    ///
    /// `start`, `end` and `help` (exact, lowercase) are keywords; any other
    /// text, including the literal word "guess", is a guess.
    pub fn parse(group_id: impl Into<GroupId>, content: &str) -> Self {
        let action = match content.parse::<Action>() {
            Ok(Action::Guess) | Err(_) => Action::Guess,
            Ok(keyword) => keyword,
        };
        Self::new(group_id, action, content)
    }
}
