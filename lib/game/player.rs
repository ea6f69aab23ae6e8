use crate::chess::Color;
use derive_more::{Constructor, Display};

/// A participant in a [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} ({})", name, color)]
pub struct Player {
    #[cfg_attr(test, strategy("[A-Za-z]{1,12}"))]
    name: String,
    color: Color,
}

impl Player {
    /// The name this player goes by.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The side this player controls.
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }
}
