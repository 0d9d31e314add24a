//! Commonly used types for hosts embedding the engine.
//!
//! ```
//! use maidle::prelude::*;
//! ```

pub use crate::catalog::Catalog;
pub use crate::error::{Error, GameError, Result};
pub use crate::game::{Action, Command, Engine, Reply};
