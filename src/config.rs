use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::page::html::RenderOptions;
use crate::page::state::{EmailState, MenuState, PageState};

/// Project-local config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl Config {
    /// Load config in layers: an explicit path (or `FOLIO_CONFIG`) replaces
    /// the global + project files; environment overrides apply last.
    pub fn load(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Self> {
        Self::load_with_env(explicit_path, project_dir, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an injectable environment lookup.
    pub fn load_with_env<F>(
        explicit_path: Option<&Path>,
        project_dir: &Path,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env("FOLIO_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(FolioError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(&project_dir.join(PROJECT_CONFIG_FILE))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides(&env)?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("folio/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FolioError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FolioError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config layer");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.site {
            self.site.merge(patch);
        }
        if let Some(patch) = patch.page {
            self.page.merge(patch);
        }
        if let Some(patch) = patch.profile {
            self.profile.merge(patch);
        }
    }

    fn apply_env_overrides<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env("FOLIO_BASE_PATH") {
            self.site.base_path = value;
        }
        if let Some(value) = env("FOLIO_STYLESHEET") {
            self.site.stylesheet = value;
        }
        if let Some(value) = env("FOLIO_PROFILE") {
            self.profile.path = value;
        }
        if let Some(value) = env("FOLIO_REVEAL_EMAIL") {
            self.page.reveal_email = parse_bool("FOLIO_REVEAL_EMAIL", &value)?;
        }
        Ok(())
    }

    /// HTML options derived from `[site]`.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            base_path: self.site.base_path.clone(),
            stylesheet: self.site.stylesheet.clone(),
            lang: self.site.lang.clone(),
            title: Some(self.site.title.trim())
                .filter(|title| !title.is_empty())
                .map(str::to_string),
        }
    }

    /// Initial UI state for static renders, from `[page]`.
    #[must_use]
    pub const fn initial_state(&self) -> PageState {
        PageState {
            menu: if self.page.menu_open {
                MenuState::Open
            } else {
                MenuState::Closed
            },
            email: if self.page.reveal_email {
                EmailState::Revealed
            } else {
                EmailState::Masked
            },
        }
    }

    /// Profile file to load instead of the builtin one, if any.
    #[must_use]
    pub fn profile_path(&self) -> Option<PathBuf> {
        let path = self.profile.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Prefix for emitted asset links (e.g. `/portfolio/`).
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Document title; empty uses `<name> · <title>`.
    #[serde(default)]
    pub title: String,
}

fn default_base_path() -> String {
    "./".to_string()
}

fn default_stylesheet() -> String {
    "assets/portfolio.css".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            stylesheet: default_stylesheet(),
            lang: default_lang(),
            title: String::new(),
        }
    }
}

impl SiteConfig {
    fn merge(&mut self, patch: SitePatch) {
        if let Some(value) = patch.base_path {
            self.base_path = value;
        }
        if let Some(value) = patch.stylesheet {
            self.stylesheet = value;
        }
        if let Some(value) = patch.lang {
            self.lang = value;
        }
        if let Some(value) = patch.title {
            self.title = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Render the email card already revealed.
    #[serde(default)]
    pub reveal_email: bool,
    /// Render the nav menu open.
    #[serde(default)]
    pub menu_open: bool,
}

impl PageConfig {
    fn merge(&mut self, patch: PagePatch) {
        if let Some(value) = patch.reveal_email {
            self.reveal_email = value;
        }
        if let Some(value) = patch.menu_open {
            self.menu_open = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// YAML or JSON profile file; empty uses the builtin profile.
    #[serde(default)]
    pub path: String,
}

impl ProfileConfig {
    fn merge(&mut self, patch: ProfilePatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    site: Option<SitePatch>,
    page: Option<PagePatch>,
    profile: Option<ProfilePatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SitePatch {
    base_path: Option<String>,
    stylesheet: Option<String>,
    lang: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PagePatch {
    reveal_email: Option<bool>,
    menu_open: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfilePatch {
    path: Option<String>,
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(FolioError::Config(format!(
            "invalid {key} value {value} (expected true/false)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn config_default_has_all_fields() {
        let config = Config::default();
        assert_eq!(config.site.base_path, "./");
        assert_eq!(config.site.stylesheet, "assets/portfolio.css");
        assert_eq!(config.site.lang, "en");
        assert!(!config.page.reveal_email);
        assert!(config.profile_path().is_none());
    }

    #[test]
    fn default_state_is_closed_and_masked() {
        assert_eq!(Config::default().initial_state(), PageState::new());
    }

    #[test]
    fn empty_title_falls_back_to_profile() {
        assert_eq!(Config::default().render_options().title, None);
    }

    // =========================================================================
    // Layering
    // =========================================================================

    #[test]
    fn explicit_file_is_applied() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[site]\nbase_path = \"/portfolio/\"\ntitle = \"Hi\"\n\n[page]\nmenu_open = true\n",
        )
        .unwrap();

        let config = Config::load_with_env(Some(&path), dir.path(), env_from(&[])).unwrap();
        assert_eq!(config.site.base_path, "/portfolio/");
        assert_eq!(config.site.stylesheet, "assets/portfolio.css");
        assert_eq!(config.render_options().title.as_deref(), Some("Hi"));
        assert_eq!(config.initial_state().menu, MenuState::Open);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load_with_env(Some(&path), dir.path(), env_from(&[])).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn config_env_var_selects_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("env.toml");
        std::fs::write(&path, "[profile]\npath = \"me.yaml\"\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let config =
            Config::load_with_env(None, dir.path(), env_from(&[("FOLIO_CONFIG", &path_str)]))
                .unwrap();
        assert_eq!(config.profile_path(), Some(PathBuf::from("me.yaml")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[site]\nbase = \"/x/\"\n").unwrap();
        let err = Config::load_with_env(Some(&path), dir.path(), env_from(&[])).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    // =========================================================================
    // Env overrides
    // =========================================================================

    #[test]
    fn env_overrides_win_over_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.toml");
        std::fs::write(&path, "[site]\nbase_path = \"/a/\"\n").unwrap();

        let env = env_from(&[
            ("FOLIO_BASE_PATH", "/b/"),
            ("FOLIO_STYLESHEET", "css/site.css"),
            ("FOLIO_REVEAL_EMAIL", "yes"),
        ]);
        let config = Config::load_with_env(Some(&path), dir.path(), env).unwrap();
        assert_eq!(config.site.base_path, "/b/");
        assert_eq!(config.render_options().stylesheet_href(), "/b/css/site.css");
        assert_eq!(config.initial_state().email, EmailState::Revealed);
    }

    #[test]
    fn invalid_env_bool_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("c.toml");
        std::fs::write(&path, "").unwrap();
        let env = env_from(&[("FOLIO_REVEAL_EMAIL", "maybe")]);
        let err = Config::load_with_env(Some(&path), dir.path(), env).unwrap_err();
        assert!(err.to_string().contains("FOLIO_REVEAL_EMAIL"));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool("K", "ON").unwrap());
        assert!(!parse_bool("K", "off").unwrap());
        assert!(parse_bool("K", "2").is_err());
    }
}
