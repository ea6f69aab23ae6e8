use crate::chess::{Color, MalformedMove, Position, Role};
use crate::game::GameStatus;
use derive_more::{Display, Error, From};

/// The reason why a move was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidMove {
    #[display(fmt = "there is no piece on {}", _0)]
    EmptySquare(#[error(not(source))] Position),

    #[display(fmt = "it is {}'s turn", _0)]
    OutOfTurn(#[error(not(source))] Color),

    #[display(fmt = "{} is occupied by a friendly piece", _0)]
    FriendlyFire(#[error(not(source))] Position),

    #[display(fmt = "the {:?} on {} cannot reach {}", _0, _1, _2)]
    Unreachable(Role, Position, Position),

    #[display(fmt = "the move leaves the king in check")]
    KingLeftInCheck,

    #[display(fmt = "the king cannot castle out of or through check")]
    CastlingThroughCheck,

    #[display(fmt = "malformed move")]
    Malformed(MalformedMove),
}

impl From<MalformedMove> for InvalidMove {
    fn from(e: MalformedMove) -> Self {
        InvalidMove::Malformed(e)
    }
}

/// The reason why an operation is not allowed in the current state of the game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidState {
    #[display(fmt = "the game is over by {}", _0)]
    GameOver(#[error(not(source))] GameStatus),
}

/// The reason why a [`Game`][`crate::game::Game`] could not be set up.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidSetup {
    #[display(fmt = "the {} player is assigned to the wrong side", _0)]
    MisassignedPlayer(#[error(not(source))] Color),

    #[display(fmt = "{} must have exactly one king", _0)]
    KingCount(#[error(not(source))] Color),

    #[display(fmt = "{} is in check, but it is not its turn", _0)]
    OpponentInCheck(#[error(not(source))] Color),
}

/// The reason why [`Game::play`][`crate::game::Game::play`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum GameError {
    #[display(fmt = "invalid move")]
    InvalidMove(InvalidMove),

    #[display(fmt = "invalid state")]
    InvalidState(InvalidState),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn malformed_moves_are_the_source_of_invalid_moves() {
        let e = InvalidMove::from(MalformedMove::Stationary);
        assert_eq!(e.source().map(|s| s.to_string()), Some(MalformedMove::Stationary.to_string()));
    }

    #[test]
    fn game_errors_wrap_their_cause() {
        let e = GameError::from(InvalidMove::KingLeftInCheck);
        assert_eq!(e.source().map(|s| s.to_string()), Some(InvalidMove::KingLeftInCheck.to_string()));

        let e = GameError::from(InvalidState::GameOver(GameStatus::Stalemate));
        assert_eq!(e.to_string(), "invalid state");
        assert_eq!(
            e.source().map(|s| s.to_string()),
            Some("the game is over by stalemate".to_string())
        );
    }
}
