//! folio mail - Open the mail composer for the profile's address

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::launcher::{MailOutcome, SystemLauncher, open_mail_composer};

#[derive(Args, Debug)]
pub struct MailArgs {}

#[derive(Serialize)]
struct MailReport<'a> {
    opened: bool,
    href: Option<&'a str>,
}

pub fn run(ctx: &AppContext, _args: &MailArgs) -> Result<()> {
    let outcome = open_mail_composer(&SystemLauncher, &ctx.profile.contact.email);

    if ctx.robot_mode {
        let href = match &outcome {
            MailOutcome::Opened => None,
            MailOutcome::Fallback(href) => Some(href.as_str()),
        };
        return emit_json(&MailReport {
            opened: href.is_none(),
            href,
        });
    }

    match outcome {
        MailOutcome::Opened => println!("{}", "Opened mail composer".green()),
        MailOutcome::Fallback(href) => {
            println!("{}", "No mail handler available; use this link:".yellow());
            println!("  {href}");
        }
    }
    Ok(())
}
