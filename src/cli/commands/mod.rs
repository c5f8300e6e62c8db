//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod browse;
pub mod mail;
pub mod render;
pub mod sections;
pub mod show;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Render(args) => render::run(ctx, args),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Sections(args) => sections::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Mail(args) => mail::run(ctx, args),
        Commands::Browse(args) => browse::run(ctx, args),
    }
}
