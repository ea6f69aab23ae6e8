use derive_more::Display;

/// The state of a [`Game`][`crate::game::Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameStatus {
    #[display(fmt = "in progress")]
    InProgress,
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
    #[display(fmt = "resigned")]
    Resigned,
    #[display(fmt = "draw by insufficient material")]
    DrawByInsufficientMaterial,
    #[display(fmt = "draw by the fifty-move rule")]
    DrawBy50MoveRule,
}

impl GameStatus {
    /// Whether no further moves are accepted.
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress | GameStatus::Check)
    }

    /// Whether the game ended without a winner.
    #[inline(always)]
    pub fn is_draw(&self) -> bool {
        use GameStatus::*;
        matches!(self, Stalemate | DrawByInsufficientMaterial | DrawBy50MoveRule)
    }
}
