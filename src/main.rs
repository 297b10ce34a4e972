//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
// Also compiled into build.rs; `resolve` only runs there and in tests.
#[cfg_attr(not(test), allow(dead_code))]
mod asset_resolve;
mod assets;
mod config;
mod logging;
mod panels;
mod ui;

fn main() -> color_eyre::Result<()> {
    app::run()
}
