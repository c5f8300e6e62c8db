//! folio validate - Check the profile for content problems

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::{FolioError, Result};
use crate::profile::validate;

#[derive(Args, Debug)]
pub struct ValidateArgs {}

#[derive(Serialize)]
struct ValidateReport<'a> {
    valid: bool,
    name: &'a str,
}

/// Prints a report for a clean profile. Issues come back as
/// `FolioError::InvalidProfile`, so robot mode emits a single error payload.
pub fn run(ctx: &AppContext, _args: &ValidateArgs) -> Result<()> {
    let issues = validate(&ctx.profile);

    if issues.is_empty() {
        if ctx.robot_mode {
            return emit_json(&ValidateReport {
                valid: true,
                name: &ctx.profile.name,
            });
        }
        println!("{} {}", "✓".green().bold(), ctx.profile.name);
        return Ok(());
    }

    if !ctx.robot_mode {
        for issue in &issues {
            println!("{} {}: {}", "✗".red().bold(), issue.field.yellow(), issue.message);
        }
    }
    Err(FolioError::InvalidProfile(issues))
}
