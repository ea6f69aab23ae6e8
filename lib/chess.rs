mod board;
mod castles;
mod color;
mod r#move;
mod piece;
mod position;
mod role;

/// Pseudo-legal move generation for each [`Role`].
pub mod strategy;
/// Legality and terminal [`Board`] detection.
pub mod validator;

pub use board::*;
pub use castles::*;
pub use color::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use role::*;
