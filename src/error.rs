use std::io;

use thiserror::Error;

use crate::profile::ValidationIssue;

/// Main error type for folio operations.
///
/// Rendering itself never fails; these variants cover the edges around it:
/// reading config and profile files, writing output, and handing URLs to
/// the operating system.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Invalid profile: {} issue(s) found", .0.len())]
    InvalidProfile(Vec<ValidationIssue>),

    #[error("Could not open {target}: {reason}")]
    Launch { target: String, reason: String },

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl FolioError {
    /// Short machine-readable code used in robot-mode error payloads.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Yaml(_) | Self::Json(_) => "PARSE_ERROR",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::UnknownSection(_) => "UNKNOWN_SECTION",
            Self::InvalidProfile(_) => "INVALID_PROFILE",
            Self::Launch { .. } => "LAUNCH_FAILED",
            Self::Terminal(_) => "TERMINAL_ERROR",
        }
    }
}

impl FolioError {
    /// Structured detail for robot-mode error payloads, when the error has any.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::InvalidProfile(issues) => serde_json::to_value(issues).ok(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
