use crate::chess::{Color, Move, Position};
use crate::game::{Game, GameResult, InvalidMove, Player};
use tracing::{info, warn};

/// An observer of the events of a [`Game`].
///
/// Every method does nothing by default, so implementors only override the events they
/// care about. Events are delivered synchronously, after the game has committed the
/// transition that caused them.
#[cfg_attr(test, mockall::automock)]
pub trait GameListener {
    /// The game is starting.
    fn on_game_start(&self, _game: &Game) {}

    /// A player made a move.
    fn on_move_made(&self, _m: &Move, _player: &Player) {}

    /// It is now this player's turn.
    fn on_turn_change(&self, _player: &Player) {}

    /// The king of this color is attacked.
    fn on_check(&self, _king: Color) {}

    /// The king of this color is checkmated.
    fn on_checkmate(&self, _loser: Color, _winner: &Player) {}

    /// The side to move has no legal moves but is not in check.
    fn on_stalemate(&self) {}

    /// The game is over.
    fn on_game_end(&self, _result: &GameResult) {}

    /// A move was rejected, leaving the game untouched.
    fn on_invalid_move(&self, _from: Position, _to: Position, _reason: &InvalidMove) {}

    /// This player resigned.
    fn on_resignation(&self, _player: &Player) {}
}

/// A [`GameListener`] that reports every event as a [`tracing`] event.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TracingListener;

impl GameListener for TracingListener {
    fn on_game_start(&self, game: &Game) {
        let (white, black) = (game.player(Color::White), game.player(Color::Black));
        info!(%white, %black, board = %game.board(), "game started");
    }

    fn on_move_made(&self, m: &Move, player: &Player) {
        info!(%player, %m, kind = %m.move_type(), "move made");
    }

    fn on_turn_change(&self, player: &Player) {
        info!(%player, "turn changed");
    }

    fn on_check(&self, king: Color) {
        info!(%king, "check");
    }

    fn on_checkmate(&self, loser: Color, winner: &Player) {
        info!(%loser, %winner, "checkmate");
    }

    fn on_stalemate(&self) {
        info!("stalemate");
    }

    fn on_game_end(&self, result: &GameResult) {
        info!(status = %result.status(), moves = result.total_moves(), duration = ?result.duration(), "{result}");
    }

    fn on_invalid_move(&self, from: Position, to: Position, reason: &InvalidMove) {
        warn!(%from, %to, %reason, "invalid move");
    }

    fn on_resignation(&self, player: &Player) {
        info!(%player, "resigned");
    }
}
