//! folio - render a single-page personal portfolio from a profile record.
//!
//! The same page model feeds a static HTML backend ([`page::render_html`])
//! and an interactive terminal view ([`tui::run_page_view`]).

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod page;
pub mod profile;
pub mod tui;

pub use error::{FolioError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
