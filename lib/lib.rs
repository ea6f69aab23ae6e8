/// Chess domain types and move generation.
pub mod chess;
/// The game state machine.
pub mod game;
