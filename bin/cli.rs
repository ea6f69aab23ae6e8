use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Plays and inspects games of chess by the rules.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the game events reported on stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Report one game event per line instead of the multi-line format.
    #[clap(short, long)]
    compact: bool,

    /// Also report when a move or a setup finishes being evaluated, with its timing.
    #[clap(long)]
    spans: bool,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Events of this crate are kept at the requested verbosity, everything else is capped
    /// at warnings.
    fn targets(&self) -> Targets {
        Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity))
    }

    fn span_events(&self) -> FmtSpan {
        if self.spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let (pretty, compact) = if self.compact {
            let compact = layer().compact().with_target(false);
            (None, Some(compact.with_span_events(self.span_events()).with_writer(stderr)))
        } else {
            let pretty = layer().pretty().with_span_events(self.span_events());
            (Some(pretty.with_writer(stderr)), None)
        };

        registry()
            .with(self.targets())
            .with(pretty)
            .with(compact)
            .init();

        self.applet.unwrap_or_default().execute()
    }
}
