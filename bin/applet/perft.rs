use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{validator, Board};
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaves of the tree of legal moves, move by move.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// How many plies to explore.
    #[clap(short, long, default_value_t = 1)]
    depth: u8,

    /// The board to explore in FEN notation.
    #[clap(short, long, default_value_t)]
    fen: Board,
}

fn perft(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = validator::all_legal_moves(board, board.turn());
    if depth == 1 {
        moves.len()
    } else {
        moves.iter().map(|m| perft(&board.after(m), depth - 1)).sum()
    }
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let timer = Instant::now();
        let mut total = 0;

        if self.depth > 0 {
            for m in validator::all_legal_moves(&self.fen, self.fen.turn()) {
                let nodes = perft(&self.fen.after(&m), self.depth - 1);
                println!("{m}: {nodes}");
                total += nodes;
            }
        } else {
            total = 1;
        }

        info!(depth = self.depth, nodes = total, time = ?timer.elapsed());
        println!("{total}");

        Ok(())
    }
}
