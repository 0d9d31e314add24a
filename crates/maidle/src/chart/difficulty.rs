use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Named difficulty tier for a chart's ordinal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(serialize = "BASIC")]
    Basic = 0,
    #[strum(serialize = "ADVANCED")]
    Advanced = 1,
    #[strum(serialize = "EXPERT")]
    Expert = 2,
    #[strum(serialize = "MASTER")]
    Master = 3,
    #[strum(serialize = "Re:MASTER")]
    ReMaster = 4,
}

impl Difficulty {
    /// Map a catalog ordinal to a tier. Out-of-range ordinals have no name.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        u8::try_from(ordinal).ok().and_then(Self::from_repr)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_from_ordinal() {
        assert_eq!(Difficulty::from_ordinal(0), Some(Difficulty::Basic));
        assert_eq!(Difficulty::from_ordinal(3), Some(Difficulty::Master));
        assert_eq!(Difficulty::from_ordinal(4), Some(Difficulty::ReMaster));
        assert_eq!(Difficulty::from_ordinal(5), None);
        assert_eq!(Difficulty::from_ordinal(-1), None);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::ReMaster.to_string(), "Re:MASTER");
        assert_eq!(Difficulty::from_str("EXPERT").unwrap(), Difficulty::Expert);
    }
}
