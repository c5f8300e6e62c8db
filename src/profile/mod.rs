//! Profile data - the read-only record a portfolio page is rendered from.
//!
//! A profile is either the compiled-in [`builtin`] record or one loaded from
//! a YAML/JSON file with [`Profile::from_path`]. Either way it is fully
//! formed before any rendering happens: no field is optional.

mod builtin;
mod validate;

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, Result};

pub use builtin::builtin;
pub use validate::{ValidationIssue, validate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub contact: Contact,
    /// Channel name (`linkedin`, `github`, ...) to profile URL.
    pub socials: IndexMap<String, String>,
    /// Category label to skill names, both in display order.
    pub skills: IndexMap<String, Vec<String>>,
    pub experience: Vec<Job>,
    pub education: Education,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

impl Profile {
    /// Load a profile from a `.yaml`/`.yml` or `.json` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let raw = std::fs::read_to_string(path)?;
        let profile = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&raw)?,
            "json" => serde_json::from_str(&raw)?,
            _ => {
                return Err(FolioError::UnsupportedFormat(format!(
                    "{} (expected .yaml, .yml or .json)",
                    path.display()
                )));
            }
        };
        debug!(path = %path.display(), "loaded profile");
        Ok(profile)
    }

    /// First word of the name; shown as the nav logo.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Display handle for a social channel: the last path segment of its URL,
    /// or the host when the URL has no path.
    #[must_use]
    pub fn social_handle(&self, channel: &str) -> Option<&str> {
        self.socials.get(channel).map(|url| url_handle(url))
    }
}

fn url_handle(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_suffix = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);
    let mut segments = without_suffix.split('/').filter(|s| !s.is_empty());
    let host = segments.next().unwrap_or(without_suffix);
    segments.last().unwrap_or(host)
}

/// Human label for a social channel key.
#[must_use]
pub fn channel_label(channel: &str) -> String {
    match channel {
        "linkedin" => "LinkedIn".to_string(),
        "github" => "GitHub".to_string(),
        "leetcode" => "LeetCode".to_string(),
        "gitlab" => "GitLab".to_string(),
        other => {
            let mut chars = other.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_profile;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_name_is_first_word() {
        assert_eq!(sample_profile().first_name(), "Ada");
    }

    #[test]
    fn social_handle_uses_last_path_segment() {
        let profile = sample_profile();
        assert_eq!(profile.social_handle("github"), Some("ada"));
        assert_eq!(profile.social_handle("linkedin"), Some("ada"));
        assert_eq!(profile.social_handle("mastodon"), None);
    }

    #[test]
    fn url_handle_edge_cases() {
        assert_eq!(url_handle("https://example.com"), "example.com");
        assert_eq!(url_handle("https://example.com/a/b?tab=1"), "b");
        assert_eq!(url_handle("https://example.com/a/#x"), "a");
    }

    #[test]
    fn channel_labels() {
        assert_eq!(channel_label("github"), "GitHub");
        assert_eq!(channel_label("mastodon"), "Mastodon");
        assert_eq!(channel_label(""), "");
    }

    #[test]
    fn loads_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let profile = sample_profile();

        let yaml_path = dir.path().join("me.yaml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&profile).unwrap()).unwrap();
        assert_eq!(Profile::from_path(&yaml_path).unwrap(), profile);

        let json_path = dir.path().join("me.JSON");
        std::fs::write(&json_path, serde_json::to_string(&profile).unwrap()).unwrap();
        assert_eq!(Profile::from_path(&json_path).unwrap(), profile);
    }

    #[test]
    fn yaml_keeps_document_order() {
        let mut profile = sample_profile();
        profile.skills.clear();
        let yaml = serde_yaml::to_string(&profile)
            .unwrap()
            .replace("skills: {}", "skills:\n  Tools: [Git]\n  Languages: [Go, Rust]");

        let loaded: Profile = serde_yaml::from_str(&yaml).unwrap();
        let categories: Vec<&str> = loaded.skills.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Tools", "Languages"]);
        assert_eq!(loaded.skills["Languages"], vec!["Go", "Rust"]);
    }

    #[test]
    fn json_keeps_document_order() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let position = |key: &str| json.find(&format!("\"{key}\":\"https")).unwrap();
        assert!(position("linkedin") < position("github"));
        assert!(position("github") < position("leetcode"));

        let loaded: Profile = serde_json::from_str(&json).unwrap();
        let channels: Vec<&str> = loaded.socials.keys().map(String::as_str).collect();
        assert_eq!(channels, vec!["linkedin", "github", "leetcode"]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("me.toml");
        std::fs::write(&path, "name = 'x'").unwrap();
        let err = Profile::from_path(&path).unwrap_err();
        assert!(matches!(err, FolioError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("me.yaml");
        std::fs::write(&path, "name: Ada\ntitle: Analyst\n").unwrap();
        let err = Profile::from_path(&path).unwrap_err();
        assert!(matches!(err, FolioError::Yaml(_)));
    }
}
