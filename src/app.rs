//! src/app.rs
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the display panel from the bundled asset manifest and hosts it,
//! either in the terminal or as a one-shot markup dump.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release              # terminal UI
//! cargo run --release -- --markup  # print markup and exit
//! ```
//!
//! The architecture image is resolved by `build.rs`. If it is missing the
//! build fails, so a running binary always has it.
//!
//! # Keyboard Controls
//!
//! - **r** — Refresh: render the panel again and redraw.
//! - **q** / **Esc** — Quit and restore terminal state.
//!
//! # Flags and Environment
//!
//! - `--frame-ms` / `DISPLAY_PANEL_FRAME_MS` — redraw cadence (10..=1000, default 100).
//! - `--mode` / `DISPLAY_PANEL_MODE` — `tui` (default) or `markup`; `--markup` is a shorthand.
//! - `--log` / `DISPLAY_PANEL_LOG` — log file path; logging is off when unset.
//! - `RUST_LOG` — tracing filter for the log file.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, layout::Constraint};
use tracing::{debug, info};

use crate::assets::AssetManifest;
use crate::config::{AppConfig, Mode};
use crate::panels::{DisplayPanel, ParagraphPanel, TreePanel};
use crate::ui::{Node, VisualTree, column, leaf};

const CONTROLS: &str = "R=Refresh  Q=Quit";

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = AppConfig::load();
    crate::logging::init(config.log.as_deref())?;

    let manifest = AssetManifest::bundled();
    manifest.verify()?;
    info!(
        asset = manifest.architecture.name,
        file = manifest.architecture.file_name(),
        bytes = manifest.architecture.bytes.len(),
        "asset manifest loaded"
    );
    let panel = DisplayPanel::new(manifest.architecture);

    match config.effective_mode() {
        Mode::Markup => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", panel.render())?;
            Ok(())
        }
        Mode::Tui => {
            let mut terminal = ratatui::init();
            let result = run_tui(&mut terminal, &panel, config.frame_time());
            ratatui::restore();
            result
        }
    }
}

fn render(panel: &DisplayPanel) -> VisualTree {
    let tree = panel.render();
    debug!(elements = tree.walk().len(), "panel rendered");
    tree
}

/// Screen layout at `width` columns: the panel's tree above the key hint row.
fn screen(tree: &VisualTree, width: u16) -> Node {
    let hint = ParagraphPanel::new(vec![CONTROLS], "Controls");
    column(vec![
        (Constraint::Min(0), leaf(TreePanel::new(tree.clone()))),
        (Constraint::Length(hint.height(width)), leaf(hint)),
    ])
}

fn run_tui(
    terminal: &mut DefaultTerminal,
    panel: &DisplayPanel,
    frame_time: Duration,
) -> color_eyre::Result<()> {
    info!(frame_ms = frame_time.as_millis() as u64, "terminal host started");
    let mut tree = render(panel);
    let mut running = true;

    while running {
        let frame_start = Instant::now();
        terminal.draw(|f| {
            let area = f.area();
            screen(&tree, area.width).draw(f, area);
        })?;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => running = false,
                    KeyCode::Char('r') => {
                        debug!("refresh requested");
                        tree = render(panel);
                    }
                    _ => {}
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if running && elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }

    info!("terminal host stopped");
    Ok(())
}
