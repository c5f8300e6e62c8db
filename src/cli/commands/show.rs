//! folio show - Print the page as text

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{FolioError, Result};
use crate::page::text::{self, LineKind, TextLine};
use crate::page::{Page, SectionId};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Only show one section (contact, about, skills, ...)
    #[arg(long, short)]
    pub section: Option<SectionId>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let page = Page::build(&ctx.profile, ctx.config.initial_state());

    if ctx.robot_mode {
        return match args.section {
            Some(id) => emit_json(section_of(&page, id)?),
            None => emit_json(&page),
        };
    }

    let lines = match args.section {
        Some(id) => text::section_lines(section_of(&page, id)?),
        None => text::page_lines(&page),
    };
    print_lines(&lines);
    Ok(())
}

fn section_of(page: &Page, id: SectionId) -> Result<&crate::page::Section> {
    page.section(id)
        .ok_or_else(|| FolioError::UnknownSection(id.anchor().to_string()))
}

fn print_lines(lines: &[TextLine]) {
    for line in lines {
        match line.kind {
            LineKind::Title => {
                println!("{}", line.text.bold());
                println!("{}", "═".repeat(line.text.chars().count()));
            }
            LineKind::Heading => println!("  {}", line.text.cyan()),
            LineKind::Meta => println!("  {}", line.text.dimmed()),
            LineKind::Body => println!("  {}", line.text),
            LineKind::Bullet => println!("    • {}", line.text),
            LineKind::Blank => println!(),
        }
    }
}
