#[macro_use]
extern crate derive_more;

use std::process::exit;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use ggez::{event, ContextBuilder};
use tracing::{error, info};

use crate::app::{App, Layout, Prefs};
use crate::error::{Error, ErrorConversion};

mod app;
mod basic;
mod error;
mod snake;

#[derive(ValueEnum, Copy, Clone, Debug)]
enum LayoutArg {
    /// Narrow board with a direction pad, for small and touch screens
    Compact,
    /// Wide board, keyboard only
    Expanded,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Compact => Layout::Compact,
            LayoutArg::Expanded => Layout::Expanded,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "grid_snake", version, about = "Classic snake on a wrapping grid")]
struct Cli {
    /// Board layout.
    #[arg(long, value_enum, default_value_t = LayoutArg::Expanded)]
    layout: LayoutArg,

    /// Milliseconds between snake moves.
    #[arg(long, default_value_t = 130, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Seed for food placement, random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the grid lines hidden.
    #[arg(long)]
    no_grid: bool,
}

impl Cli {
    fn prefs(&self) -> Prefs {
        Prefs::default()
            .layout(self.layout.into())
            .tick(Duration::from_millis(self.tick_ms))
            .seed(self.seed)
            .draw_grid(!self.no_grid)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run(prefs: Prefs) -> error::Result {
    info!(layout = ?prefs.layout, tick = ?prefs.tick, seed = ?prefs.seed, "starting");
    let app = App::new(prefs).with_trace_step("run")?;

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_setup(app.ws())
        .window_mode(app.wm())
        .build()
        .map_err(Error::from)
        .with_trace_step("run")?;

    event::run(ctx, event_loop, app)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli.prefs()) {
        error!("{}", e);
        exit(1);
    }
}
