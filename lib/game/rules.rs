use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Configuration for the optional draw rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, default)]
pub struct Rules {
    /// Whether the game is drawn after 50 moves by each side without captures or pawn advances.
    pub fifty_move_rule: bool,

    /// Whether the game is drawn when neither side can possibly deliver mate.
    pub insufficient_material: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            fifty_move_rule: true,
            insufficient_material: true,
        }
    }
}

/// Prints the rules in [RON].
///
/// [RON]: https://github.com/ron-rs/ron
impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Rules`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse rules configuration")]
pub struct ParseRulesError(ron::de::SpannedError);

impl FromStr for Rules {
    type Err = ParseRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
