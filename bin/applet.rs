use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod perft;
mod replay;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    Perft(perft::Perft),
    Replay(replay::Replay),
}

impl Default for Applet {
    fn default() -> Self {
        replay::Replay::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Perft(a) => Ok(a.execute()?),
            Applet::Replay(a) => Ok(a.execute()?),
        }
    }
}
