use anyhow::{ensure, Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Color, Position};
use lib::game::{Game, Player, Rules, TracingListener};
use tracing::instrument;

/// Replays a game of chess move by move.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// The draw rules to enforce.
    #[clap(short, long, default_value_t)]
    rules: Rules,

    /// The starting board in FEN notation.
    #[clap(short, long, default_value_t)]
    fen: Board,

    /// The name of the player with the white pieces.
    #[clap(long, default_value = "white")]
    white: String,

    /// The name of the player with the black pieces.
    #[clap(long, default_value = "black")]
    black: String,

    /// The moves to play, as pairs of squares in algebraic notation, e.g. `e2 e4`.
    squares: Vec<Position>,
}

impl Default for Replay {
    fn default() -> Self {
        Replay {
            rules: Rules::default(),
            fen: Board::default(),
            white: "white".into(),
            black: "black".into(),
            squares: Vec::new(),
        }
    }
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        ensure!(
            self.squares.len() % 2 == 0,
            "expected pairs of squares, but got {}",
            self.squares.len()
        );

        let white = Player::new(self.white, Color::White);
        let black = Player::new(self.black, Color::Black);
        let mut game = Game::with_rules(white, black, self.fen, self.rules)?;

        game.subscribe(Box::new(TracingListener));
        game.start();

        for pair in self.squares.chunks_exact(2) {
            let (from, to) = (pair[0], pair[1]);
            game.make_move(from, to)
                .with_context(|| format!("failed to play {from}{to}"))?;
        }

        match game.result() {
            Some(r) => println!("{r}"),
            None => println!("{}, {} to move", game.status(), game.turn()),
        }

        Ok(())
    }
}
