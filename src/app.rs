//! Application context shared by every command.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::profile::{self, Profile};

pub struct AppContext {
    pub config: Config,
    /// The builtin profile, or one loaded from `--profile` / config.
    pub profile: Cow<'static, Profile>,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let profile = resolve_profile(cli.profile.as_deref(), &config)?;

        Ok(Self {
            config,
            profile,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }
}

/// `--profile` beats `[profile] path` (and `FOLIO_PROFILE`); otherwise the
/// builtin profile is used.
fn resolve_profile(flag: Option<&Path>, config: &Config) -> Result<Cow<'static, Profile>> {
    let path = flag.map(Path::to_path_buf).or_else(|| config.profile_path());
    match path {
        Some(path) => Ok(Cow::Owned(Profile::from_path(&path)?)),
        None => {
            debug!("using builtin profile");
            Ok(Cow::Borrowed(profile::builtin()))
        }
    }
}
