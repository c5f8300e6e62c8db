//! folio browse - Interactive terminal view of the page

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::launcher::SystemLauncher;
use crate::page::{EmailState, PageState};
use crate::tui::run_page_view;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Start with the email address revealed
    #[arg(long)]
    pub reveal_email: bool,
}

pub fn run(ctx: &AppContext, args: &BrowseArgs) -> Result<()> {
    // The menu always starts closed in the terminal view.
    let mut state = PageState::new();
    if args.reveal_email || ctx.config.page.reveal_email {
        state.email = EmailState::Revealed;
    }
    run_page_view(&ctx.profile, state, Box::new(SystemLauncher))
}
