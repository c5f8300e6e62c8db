//! folio render - Write the page as static HTML

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::page::{EmailState, MenuState, Page, PageState, RenderOptions, render_html};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file (default: stdout)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Prefix for asset links, e.g. /portfolio/
    #[arg(long)]
    pub base_path: Option<String>,

    /// Render with the email address already revealed
    #[arg(long)]
    pub reveal_email: bool,

    /// Render with the navigation menu open
    #[arg(long)]
    pub menu_open: bool,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    path: String,
    bytes: usize,
    base_path: &'a str,
    state: PageState,
}

pub fn run(ctx: &AppContext, args: &RenderArgs) -> Result<()> {
    let options = render_options(ctx, args);
    let state = initial_state(ctx, args);
    let page = Page::build(&ctx.profile, state);
    let html = render_html(&page, &options);

    let Some(path) = &args.out else {
        print!("{html}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &html)?;
    info!(path = %path.display(), bytes = html.len(), "wrote page");

    if ctx.robot_mode {
        emit_json(&RenderReport {
            path: path.display().to_string(),
            bytes: html.len(),
            base_path: &options.base_path,
            state,
        })
    } else {
        println!(
            "{} {} ({} bytes)",
            "Rendered".green().bold(),
            path.display(),
            html.len()
        );
        Ok(())
    }
}

fn render_options(ctx: &AppContext, args: &RenderArgs) -> RenderOptions {
    let mut options = ctx.config.render_options();
    if let Some(base) = &args.base_path {
        options.base_path.clone_from(base);
    }
    options
}

/// Flags only ever move the state forward from the configured one.
fn initial_state(ctx: &AppContext, args: &RenderArgs) -> PageState {
    let mut state = ctx.config.initial_state();
    if args.reveal_email {
        state.email = EmailState::Revealed;
    }
    if args.menu_open {
        state.menu = MenuState::Open;
    }
    state
}
