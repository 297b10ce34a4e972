//! src/config.rs
//!
//! Runtime settings for the terminal host.
//!
//! Every setting is a flag with a `DISPLAY_PANEL_*` environment fallback.
//! None of them affect what the display panel renders.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// How the rendered tree is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Interactive terminal UI.
    Tui,
    /// Print the markup once to stdout and exit.
    Markup,
}

#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(name = "three_tier_display")]
#[command(about = "Shows the AWS 3-tier web application architecture panel")]
pub struct AppConfig {
    /// Shorthand for `--mode markup`.
    #[arg(long)]
    pub markup: bool,

    #[arg(long, value_enum, ignore_case = true, env = "DISPLAY_PANEL_MODE", default_value = "tui")]
    pub mode: Mode,

    /// Redraw cadence of the terminal loop, in milliseconds.
    #[arg(
        long,
        env = "DISPLAY_PANEL_FRAME_MS",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(10..=1000)
    )]
    pub frame_ms: u64,

    /// Log file; logging is off when unset.
    #[arg(long, env = "DISPLAY_PANEL_LOG")]
    pub log: Option<PathBuf>,
}

impl AppConfig {
    /// Parse the process arguments, exiting with usage text on error.
    pub fn load() -> Self {
        Self::parse()
    }

    /// Effective mode; `--markup` wins over `--mode`.
    pub fn effective_mode(&self) -> Mode {
        if self.markup { Mode::Markup } else { self.mode }
    }

    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
