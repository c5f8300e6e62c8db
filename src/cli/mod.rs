//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Folio - render a single-page personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output for machine consumption
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/folio/config.toml, then ./folio.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile file (YAML or JSON) to render instead of the builtin one
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the page as a static HTML document
    Render(commands::render::RenderArgs),

    /// Print the page (or one section) as text
    Show(commands::show::ShowArgs),

    /// List section anchors, nav labels and titles
    Sections(commands::sections::SectionsArgs),

    /// Check the profile for content problems
    Validate(commands::validate::ValidateArgs),

    /// Open the default mail composer addressed to the profile's email
    Mail(commands::mail::MailArgs),

    /// Browse the page interactively (TUI)
    Browse(commands::browse::BrowseArgs),
}
