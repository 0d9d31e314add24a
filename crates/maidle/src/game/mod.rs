//! Game sessions and the command engine.
//!
//! - `Command`, `Action` - parsed `/maidle` commands
//! - `GameSession` - one group's round
//! - `SessionRegistry` - group to session store
//! - `Engine` - start / guess / end / help
//! - `Reply`, `GuessReport`, `Reveal` - structured replies and their text

mod command;
mod engine;
mod registry;
mod reply;
mod session;

pub use command::*;
pub use engine::*;
pub use registry::*;
pub use reply::*;
pub use session::*;
