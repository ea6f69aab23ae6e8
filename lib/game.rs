use crate::chess::{strategy, validator};
use crate::chess::{Board, Color, MalformedMove, Move, Position, Role};
use std::{fmt, time::Instant};
use tracing::{debug, field::display, instrument, Span};

mod error;
mod listener;
mod player;
mod result;
mod rules;
mod status;

pub use error::*;
pub use listener::*;
pub use player::*;
pub use result::*;
pub use rules::*;
pub use status::*;

/// A game of chess between two [`Player`]s.
///
/// The game owns its [`Board`] and only ever changes it through [`Game::play`], which
/// either applies a legal move in full or rejects it leaving everything untouched.
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    rules: Rules,
    history: Vec<Move>,
    status: GameStatus,
    result: Option<GameResult>,
    created: Instant,
    listeners: Vec<Box<dyn GameListener>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("white", &self.white)
            .field("black", &self.black)
            .field("rules", &self.rules)
            .field("history", &self.history)
            .field("status", &self.status)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Sets up a game from the given [`Board`] with the default [`Rules`].
    pub fn new(white: Player, black: Player, board: Board) -> Result<Self, InvalidSetup> {
        Self::with_rules(white, black, board, Rules::default())
    }

    /// Sets up a game from the given [`Board`].
    ///
    /// The board must hold exactly one king of each color, and the side that is not to move
    /// must not be in check. A board that is already over yields a game that is over.
    #[instrument(level = "debug", err, fields(%white, %black, %board, %rules))]
    pub fn with_rules(
        white: Player,
        black: Player,
        board: Board,
        rules: Rules,
    ) -> Result<Self, InvalidSetup> {
        for (player, color) in [(&white, Color::White), (&black, Color::Black)] {
            if player.color() != color {
                return Err(InvalidSetup::MisassignedPlayer(color));
            }
        }

        for color in Color::iter() {
            let kings = board.pieces_of(color).filter(|p| p.role() == Role::King);
            if kings.count() != 1 {
                return Err(InvalidSetup::KingCount(color));
            }
        }

        let waiting = !board.turn();
        if validator::is_check(&board, waiting) {
            return Err(InvalidSetup::OpponentInCheck(waiting));
        }

        let mut game = Game {
            board,
            white,
            black,
            rules,
            history: Vec::new(),
            status: GameStatus::InProgress,
            result: None,
            created: Instant::now(),
            listeners: Vec::new(),
        };

        game.transition(game.evaluate());

        Ok(game)
    }

    /// Registers a [`GameListener`], which is notified after the ones registered before it.
    pub fn subscribe(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    /// Announces the start of the game.
    ///
    /// Also announces check or the end of the game if the starting board calls for it.
    pub fn start(&self) {
        for l in &self.listeners {
            l.on_game_start(self);
        }

        self.announce();
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    /// The [`GameStatus`] from the point of view of the side to move.
    #[inline(always)]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The draw [`Rules`] in force.
    #[inline(always)]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The moves played so far, in order.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The [`Player`] controlling the given side.
    #[inline(always)]
    pub fn player(&self, side: Color) -> &Player {
        match side {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// The [`Player`] to move.
    #[inline(always)]
    pub fn current_player(&self) -> &Player {
        self.player(self.turn())
    }

    /// The summary of the game, once it is over.
    #[inline(always)]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// The winner, if the game is over and was not drawn.
    #[inline(always)]
    pub fn winner(&self) -> Option<&Player> {
        self.result.as_ref()?.winner()
    }

    /// The legal moves of the side to move, none once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            Vec::new()
        } else {
            validator::all_legal_moves(&self.board, self.turn())
        }
    }

    /// Plays the piece on `from` to `to`, promoting pawns to a queen.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<Move, GameError> {
        self.play(from, to, None)
    }

    /// Plays the piece on `from` to `to`, promoting pawns to the given [`Role`].
    #[instrument(level = "debug", skip(self), err, fields(board = %self.board, status))]
    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<Role>,
    ) -> Result<Move, GameError> {
        if self.status.is_terminal() {
            return Err(InvalidState::GameOver(self.status).into());
        }

        let m = match self.find(from, to, promotion.unwrap_or(Role::Queen)) {
            Ok(m) => m,
            Err(e) => {
                for l in &self.listeners {
                    l.on_invalid_move(from, to, &e);
                }

                return Err(e.into());
            }
        };

        self.board.apply_move(&m);
        self.history.push(m);
        self.transition(self.evaluate());

        Span::current().record("status", display(self.status));

        let mover = self.player(m.color());
        for l in &self.listeners {
            l.on_move_made(&m, mover);
        }

        let next = self.current_player();
        for l in &self.listeners {
            l.on_turn_change(next);
        }

        self.announce();

        Ok(m)
    }

    /// Concedes the game on behalf of the given side.
    #[instrument(level = "debug", skip(self), err)]
    pub fn resign(&mut self, side: Color) -> Result<(), InvalidState> {
        if self.status.is_terminal() {
            return Err(InvalidState::GameOver(self.status));
        }

        self.conclude(GameStatus::Resigned, Some(!side));

        let resigned = self.player(side);
        for l in &self.listeners {
            l.on_resignation(resigned);
        }

        if let Some(result) = &self.result {
            for l in &self.listeners {
                l.on_game_end(result);
            }
        }

        Ok(())
    }

    /// Finds the legal move of the piece on `from` to `to`, or the reason why there is none.
    fn find(&self, from: Position, to: Position, promotion: Role) -> Result<Move, InvalidMove> {
        let piece = self.board[from].ok_or(InvalidMove::EmptySquare(from))?;

        if piece.color() != self.turn() {
            return Err(InvalidMove::OutOfTurn(self.turn()));
        }

        if matches!(self.board[to], Some(p) if !p.is_enemy_of(&piece)) {
            return Err(InvalidMove::FriendlyFire(to));
        }

        if !promotion.is_promotion() {
            return Err(MalformedMove::InvalidPromotion.into());
        }

        let m = strategy::pseudo_legal_moves(&self.board, piece)
            .into_iter()
            .filter(|m| m.to() == to)
            .find(|m| m.promotion().map_or(true, |r| r == promotion))
            .ok_or(InvalidMove::Unreachable(piece.role(), from, to))?;

        if validator::castles_through_check(&self.board, &m) {
            Err(InvalidMove::CastlingThroughCheck)
        } else if validator::leaves_king_attacked(&self.board, &m) {
            Err(InvalidMove::KingLeftInCheck)
        } else {
            Ok(m)
        }
    }

    /// The status of the board as it stands, for the side to move.
    fn evaluate(&self) -> GameStatus {
        let side = self.turn();
        let check = validator::is_check(&self.board, side);

        if !validator::has_legal_moves(&self.board, side) {
            if check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if self.rules.insufficient_material && validator::is_material_insufficient(&self.board)
        {
            GameStatus::DrawByInsufficientMaterial
        } else if self.rules.fifty_move_rule && self.board.halfmoves() >= 100 {
            GameStatus::DrawBy50MoveRule
        } else if check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    fn transition(&mut self, status: GameStatus) {
        match status {
            GameStatus::Checkmate => self.conclude(status, Some(!self.turn())),
            s if s.is_terminal() => self.conclude(s, None),
            s => {
                debug!(status = %s, turn = %self.turn());
                self.status = s;
            }
        }
    }

    fn conclude(&mut self, status: GameStatus, winner: Option<Color>) {
        debug!(%status, winner = ?winner, moves = self.history.len(), "game over");

        let winner = winner.map(|c| self.player(c).clone());
        let result = GameResult::new(status, winner, self.history.len(), self.created.elapsed());
        self.status = status;
        self.result = Some(result);
    }

    /// Notifies the listeners of check and of the end of the game.
    fn announce(&self) {
        let side = self.turn();

        match self.status {
            GameStatus::Check => {
                for l in &self.listeners {
                    l.on_check(side);
                }
            }

            GameStatus::Checkmate => {
                let winner = self.player(!side);
                for l in &self.listeners {
                    l.on_checkmate(side, winner);
                }
            }

            GameStatus::Stalemate => {
                for l in &self.listeners {
                    l.on_stalemate();
                }
            }

            _ => {}
        }

        if let Some(result) = &self.result {
            for l in &self.listeners {
                l.on_game_end(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{predicate::*, Sequence};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use test_strategy::proptest;

    fn players() -> (Player, Player) {
        (
            Player::new("Alice".into(), Color::White),
            Player::new("Bob".into(), Color::Black),
        )
    }

    fn game(fen: &str) -> Game {
        let (white, black) = players();
        Game::new(white, black, fen.parse().unwrap()).unwrap()
    }

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn new_game_starts_in_progress_with_white_to_move() {
        let (white, black) = players();
        let g = Game::new(white.clone(), black.clone(), Board::default()).unwrap();

        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.current_player(), &white);
        assert_eq!(g.player(Color::Black), &black);
        assert!(g.history().is_empty());
        assert_eq!(g.result(), None);
        assert_eq!(g.legal_moves().len(), 20);
    }

    #[test]
    fn new_fails_if_players_are_swapped() {
        let (white, black) = players();
        assert_eq!(
            Game::new(black, white, Board::default()).map(|_| ()),
            Err(InvalidSetup::MisassignedPlayer(Color::White))
        );
    }

    #[test]
    fn new_fails_without_exactly_one_king_per_side() {
        let (white, black) = players();
        let b: Board = "4k3/8/8/8/8/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(
            Game::new(white.clone(), black.clone(), b).map(|_| ()),
            Err(InvalidSetup::KingCount(Color::White))
        );

        let b: Board = "3kk3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(
            Game::new(white, black, b).map(|_| ()),
            Err(InvalidSetup::KingCount(Color::Black))
        );
    }

    #[test]
    fn new_fails_if_the_side_not_to_move_is_in_check() {
        let (white, black) = players();
        let b: Board = "4k3/8/8/8/8/8/8/4KR2 w - - 0 1".parse().unwrap();
        let checked: Board = "4k3/4R3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();

        assert!(Game::new(white.clone(), black.clone(), b).is_ok());
        assert_eq!(
            Game::new(white, black, checked).map(|_| ()),
            Err(InvalidSetup::OpponentInCheck(Color::Black))
        );
    }

    #[test]
    fn new_game_on_a_finished_board_is_over() {
        let g = game("K7/2q5/1k6/8/8/8/8/8 w - - 0 1");
        assert_eq!(g.status(), GameStatus::Stalemate);
        assert_eq!(g.winner(), None);
        assert!(g.legal_moves().is_empty());
    }

    #[test]
    fn make_move_updates_board_history_and_turn() {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let m = g.make_move(pos("e2"), pos("e4")).unwrap();

        assert_eq!(m.to(), pos("e4"));
        assert_eq!(g.history(), &[m]);
        assert_eq!(g.turn(), Color::Black);
        assert_eq!(g.board()[pos("e4")].map(|p| p.role()), Some(Role::Pawn));
        assert_eq!(g.board()[pos("e2")], None);
    }

    #[proptest]
    fn rejected_moves_leave_the_game_untouched(from: Position, to: Position) {
        let mut g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let before = g.board().clone();

        if g.make_move(from, to).is_err() {
            assert_eq!(g.board(), &before);
            assert!(g.history().is_empty());
            assert_eq!(g.turn(), Color::White);
            assert_eq!(g.status(), GameStatus::InProgress);
        }
    }

    #[proptest]
    fn make_move_accepts_exactly_the_legal_moves(from: Position, to: Position) {
        let mut g = game("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let legal = g.legal_moves().iter().any(|m| (m.from(), m.to()) == (from, to));
        assert_eq!(g.make_move(from, to).is_ok(), legal);
    }

    #[test]
    fn make_move_explains_why_a_move_is_invalid() {
        let mut g = game("4k3/8/8/8/8/8/4R3/4K2q w - - 0 1");

        assert_eq!(
            g.make_move(pos("a1"), pos("a2")),
            Err(InvalidMove::EmptySquare(pos("a1")).into())
        );

        assert_eq!(
            g.make_move(pos("h1"), pos("h2")),
            Err(InvalidMove::OutOfTurn(Color::White).into())
        );

        assert_eq!(
            g.make_move(pos("e1"), pos("e2")),
            Err(InvalidMove::FriendlyFire(pos("e2")).into())
        );

        assert_eq!(
            g.make_move(pos("e2"), pos("f3")),
            Err(InvalidMove::Unreachable(Role::Rook, pos("e2"), pos("f3")).into())
        );

        assert_eq!(
            g.make_move(pos("e1"), pos("f1")),
            Err(InvalidMove::KingLeftInCheck.into())
        );

        assert!(g.history().is_empty());
    }

    #[test]
    fn castling_through_check_is_rejected() {
        let mut g = game("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1");
        assert_eq!(
            g.make_move(pos("e1"), pos("g1")),
            Err(InvalidMove::CastlingThroughCheck.into())
        );

        assert!(g.make_move(pos("e1"), pos("c1")).is_ok());
        assert_eq!(g.board()[pos("d1")].map(|p| p.role()), Some(Role::Rook));
    }

    #[test]
    fn play_promotes_to_the_chosen_role() {
        let mut g = game("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let m = g.play(pos("a7"), pos("a8"), Some(Role::Knight)).unwrap();

        assert_eq!(m.promotion(), Some(Role::Knight));
        assert_eq!(g.board()[pos("a8")].map(|p| p.role()), Some(Role::Knight));
    }

    #[test]
    fn make_move_promotes_to_a_queen() {
        let mut g = game("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        g.make_move(pos("a7"), pos("a8")).unwrap();
        assert_eq!(g.board()[pos("a8")].map(|p| p.role()), Some(Role::Queen));
        assert_eq!(g.status(), GameStatus::Check);
    }

    #[proptest]
    fn play_rejects_promotion_to_pawn_or_king(
        #[filter(!#r.is_promotion())] r: Role,
    ) {
        let mut g = game("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            g.play(pos("a7"), pos("a8"), Some(r)),
            Err(InvalidMove::Malformed(MalformedMove::InvalidPromotion).into())
        );
    }

    #[test]
    fn checkmate_ends_the_game_with_the_mover_as_winner() {
        let mut g = game("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        g.make_move(pos("a1"), pos("a8")).unwrap();

        assert_eq!(g.status(), GameStatus::Checkmate);
        assert_eq!(g.winner().map(|p| p.name()), Some("Alice"));

        let result = g.result().unwrap();
        assert_eq!(result.status(), GameStatus::Checkmate);
        assert_eq!(result.total_moves(), 1);

        assert_eq!(
            g.make_move(pos("g8"), pos("h8")),
            Err(InvalidState::GameOver(GameStatus::Checkmate).into())
        );
    }

    #[test]
    fn capturing_the_last_piece_draws_by_insufficient_material() {
        let mut g = game("4k3/8/8/8/8/8/4r3/4KB2 w - - 0 1");
        g.make_move(pos("e1"), pos("e2")).unwrap();
        assert_eq!(g.status(), GameStatus::DrawByInsufficientMaterial);
        assert_eq!(g.winner(), None);
    }

    #[test]
    fn insufficient_material_can_be_disabled() {
        let (white, black) = players();
        let rules = Rules {
            insufficient_material: false,
            ..Rules::default()
        };

        let b = "4k3/8/8/8/8/8/4r3/4KB2 w - - 0 1".parse().unwrap();
        let mut g = Game::with_rules(white, black, b, rules).unwrap();
        g.make_move(pos("e1"), pos("e2")).unwrap();
        assert_eq!(g.status(), GameStatus::InProgress);
    }

    #[test]
    fn hundred_quiet_halfmoves_draw_by_the_fifty_move_rule() {
        let mut g = game("4k3/8/8/8/8/8/8/R3K3 w - - 99 80");
        g.make_move(pos("a1"), pos("a2")).unwrap();
        assert_eq!(g.status(), GameStatus::DrawBy50MoveRule);

        let (white, black) = players();
        let rules = Rules {
            fifty_move_rule: false,
            ..Rules::default()
        };

        let b = "4k3/8/8/8/8/8/8/R3K3 w - - 99 80".parse().unwrap();
        let mut g = Game::with_rules(white, black, b, rules).unwrap();
        g.make_move(pos("a1"), pos("a2")).unwrap();
        assert_eq!(g.status(), GameStatus::InProgress);
    }

    #[proptest]
    fn resign_hands_the_win_to_the_opponent(c: Color) {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(g.resign(c), Ok(()));
        assert_eq!(g.status(), GameStatus::Resigned);
        assert_eq!(g.winner(), Some(g.player(!c)));
        assert_eq!(g.resign(!c), Err(InvalidState::GameOver(GameStatus::Resigned)));
        assert_eq!(
            g.make_move(pos("e2"), pos("e4")),
            Err(InvalidState::GameOver(GameStatus::Resigned).into())
        );
    }

    #[test]
    fn listeners_are_notified_of_the_start() {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut l = MockGameListener::new();
        l.expect_on_game_start()
            .once()
            .withf(|g| g.status() == GameStatus::InProgress)
            .return_const(());

        g.subscribe(Box::new(l));
        g.start();
    }

    #[test]
    fn listeners_are_notified_in_order_after_a_move() {
        let mut g = game("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let mut l = MockGameListener::new();
        let mut seq = Sequence::new();

        l.expect_on_move_made()
            .once()
            .in_sequence(&mut seq)
            .withf(|m, p| m.to() == pos("a8") && p.color() == Color::White)
            .return_const(());

        l.expect_on_turn_change()
            .once()
            .in_sequence(&mut seq)
            .withf(|p| p.color() == Color::Black)
            .return_const(());

        l.expect_on_check().never();

        l.expect_on_checkmate().never();
        l.expect_on_game_end().never();

        g.subscribe(Box::new(l));
        g.make_move(pos("a1"), pos("a8")).unwrap();
    }

    #[test]
    fn listeners_are_notified_in_order_of_checkmate() {
        let mut g = game("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let mut l = MockGameListener::new();
        let mut seq = Sequence::new();

        l.expect_on_move_made()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        l.expect_on_turn_change()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        l.expect_on_check().never();

        l.expect_on_checkmate()
            .once()
            .in_sequence(&mut seq)
            .withf(|&c, w| c == Color::Black && w.color() == Color::White)
            .return_const(());

        l.expect_on_game_end()
            .once()
            .in_sequence(&mut seq)
            .withf(|r| r.status() == GameStatus::Checkmate && r.total_moves() == 1)
            .return_const(());

        g.subscribe(Box::new(l));
        g.make_move(pos("a1"), pos("a8")).unwrap();
    }

    #[test]
    fn listeners_are_notified_of_stalemate() {
        let mut g = game("k7/8/1Q6/8/8/8/8/4K3 w - - 0 1");
        let mut l = MockGameListener::new();
        let mut seq = Sequence::new();

        l.expect_on_move_made()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        l.expect_on_turn_change()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        l.expect_on_stalemate()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        l.expect_on_game_end()
            .once()
            .in_sequence(&mut seq)
            .withf(|r| r.status() == GameStatus::Stalemate && r.winner().is_none())
            .return_const(());

        l.expect_on_check().never();

        g.subscribe(Box::new(l));
        g.make_move(pos("e1"), pos("d2")).unwrap();
    }

    #[test]
    fn listeners_are_notified_of_invalid_moves() {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut l = MockGameListener::new();

        l.expect_on_invalid_move()
            .once()
            .with(
                eq(pos("e2")),
                eq(pos("e5")),
                eq(InvalidMove::Unreachable(Role::Pawn, pos("e2"), pos("e5"))),
            )
            .return_const(());

        l.expect_on_move_made().never();

        g.subscribe(Box::new(l));
        assert!(g.make_move(pos("e2"), pos("e5")).is_err());
    }

    #[test]
    fn listeners_are_notified_of_resignation_then_game_end() {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut l = MockGameListener::new();
        let mut seq = Sequence::new();

        l.expect_on_resignation()
            .once()
            .in_sequence(&mut seq)
            .withf(|p| p.name() == "Bob")
            .return_const(());

        l.expect_on_game_end()
            .once()
            .in_sequence(&mut seq)
            .withf(|r| r.status() == GameStatus::Resigned && r.winner().map(|p| p.name()) == Some("Alice"))
            .return_const(());

        g.subscribe(Box::new(l));
        g.resign(Color::Black).unwrap();
    }

    #[test]
    fn a_panicking_listener_cannot_undo_a_move() {
        struct Panicking;

        impl GameListener for Panicking {
            fn on_move_made(&self, _: &Move, _: &Player) {
                panic!("listener failure");
            }
        }

        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        g.subscribe(Box::new(Panicking));

        let outcome = catch_unwind(AssertUnwindSafe(|| g.make_move(pos("e2"), pos("e4"))));
        assert!(outcome.is_err());

        assert_eq!(g.history().len(), 1);
        assert_eq!(g.history()[0].to(), pos("e4"));
        assert_eq!(g.turn(), Color::Black);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.board()[pos("e4")].map(|p| p.role()), Some(Role::Pawn));
        assert_eq!(g.board()[pos("e2")], None);
    }

    #[test]
    fn new_game_survives_the_largest_fullmove_number() {
        let g = game("4k3/8/8/8/8/8/8/R3K3 b - - 0 4294967295");
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.board().fullmoves(), u32::MAX);
    }

    #[test]
    fn en_passant_onto_the_last_row_is_rejected() {
        let (white, black) = players();
        assert!("3k4/3Pp3/8/8/8/8/8/4K3 w - e8 0 1".parse::<Board>().is_err());

        let b = "3k4/3Pp3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut g = Game::new(white, black, b).unwrap();
        assert_eq!(
            g.make_move(pos("d7"), pos("e8")),
            Err(InvalidMove::Unreachable(Role::Pawn, pos("d7"), pos("e8")).into())
        );
    }

    #[test]
    fn listeners_are_notified_in_registration_order() {
        let mut g = game("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let mut seq = Sequence::new();

        for _ in 0..3 {
            let mut l = MockGameListener::new();
            l.expect_on_move_made()
                .once()
                .in_sequence(&mut seq)
                .return_const(());
            l.expect_on_turn_change().return_const(());
            g.subscribe(Box::new(l));
        }

        g.make_move(pos("g1"), pos("f3")).unwrap();
    }
}
