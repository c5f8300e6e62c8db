//! folio sections - List the page's sections

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::page::SectionId;

#[derive(Args, Debug)]
pub struct SectionsArgs {}

#[derive(Serialize)]
struct SectionEntry {
    id: SectionId,
    anchor: String,
    nav_label: &'static str,
    title: &'static str,
}

pub fn run(ctx: &AppContext, _args: &SectionsArgs) -> Result<()> {
    let entries: Vec<SectionEntry> = SectionId::ALL
        .into_iter()
        .map(|id| SectionEntry {
            id,
            anchor: format!("#{}", id.anchor()),
            nav_label: id.nav_label(),
            title: id.title(),
        })
        .collect();

    if ctx.robot_mode {
        return emit_json(&entries);
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{} {:<16} {:<16} {}",
            format!("{}.", i + 1).dimmed(),
            entry.anchor.cyan(),
            entry.nav_label,
            entry.title.bold()
        );
    }
    Ok(())
}
