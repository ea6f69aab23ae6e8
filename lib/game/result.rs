use crate::game::{GameStatus, Player};
use derive_more::Constructor;
use std::{fmt, time::Duration};

/// The summary of a finished [`Game`][`crate::game::Game`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct GameResult {
    status: GameStatus,
    winner: Option<Player>,
    total_moves: usize,
    duration: Duration,
}

impl GameResult {
    /// How the game ended.
    #[inline(always)]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, unless the game was drawn.
    #[inline(always)]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// The number of moves played by both sides.
    #[inline(always)]
    pub fn total_moves(&self) -> usize {
        self.total_moves
    }

    /// The time elapsed between the creation of the game and its end.
    #[inline(always)]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.winner {
            Some(w) => write!(f, "{}, {} wins", self.status, w)?,
            None => write!(f, "{}, no winner", self.status)?,
        }

        write!(f, " after {} moves", self.total_moves)
    }
}
