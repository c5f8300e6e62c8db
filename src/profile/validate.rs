//! Content checks for profile records.
//!
//! Rendering trusts the profile completely; this is the out-of-band check a
//! content author runs before shipping a new profile file.

use serde::Serialize;

use super::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `experience[1].bullets`.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Check a profile for content defects. An empty result means the profile
/// is fit to render.
#[must_use]
pub fn validate(profile: &Profile) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("name", &profile.name),
        ("title", &profile.title),
        ("location", &profile.location),
        ("summary", &profile.summary),
        ("education.degree", &profile.education.degree),
        ("education.school", &profile.education.school),
        ("education.year", &profile.education.year),
    ] {
        require_text(&mut issues, field, value);
    }

    if !is_plausible_email(&profile.contact.email) {
        issues.push(ValidationIssue::new(
            "contact.email",
            format!("not a usable email address: {:?}", profile.contact.email),
        ));
    }
    if !profile.contact.phone.chars().any(|c| c.is_ascii_digit()) {
        issues.push(ValidationIssue::new("contact.phone", "phone number has no digits"));
    }

    for (channel, url) in profile.socials.iter() {
        let host = url.strip_prefix("https://").unwrap_or("");
        if host.is_empty() || host.starts_with('/') {
            issues.push(ValidationIssue::new(
                format!("socials.{channel}"),
                format!("expected an https:// URL, got {url:?}"),
            ));
        }
    }

    if profile.skills.is_empty() {
        issues.push(ValidationIssue::new("skills", "no skill categories"));
    }
    for (category, items) in profile.skills.iter() {
        if category.trim().is_empty() {
            issues.push(ValidationIssue::new("skills", "category label is empty"));
        }
        if items.is_empty() {
            issues.push(ValidationIssue::new(
                format!("skills.{category}"),
                "category has no skills",
            ));
        }
    }

    for (i, job) in profile.experience.iter().enumerate() {
        for (field, value) in [
            ("role", &job.role),
            ("company", &job.company),
            ("location", &job.location),
            ("period", &job.period),
        ] {
            require_text(&mut issues, &format!("experience[{i}].{field}"), value);
        }
        if job.bullets.is_empty() {
            issues.push(ValidationIssue::new(
                format!("experience[{i}].bullets"),
                "job has no bullet points",
            ));
        }
    }

    for (list, items) in [
        ("certifications", &profile.certifications),
        ("achievements", &profile.achievements),
    ] {
        for (i, item) in items.iter().enumerate() {
            require_text(&mut issues, &format!("{list}[{i}]"), item);
        }
    }

    issues
}

fn require_text(issues: &mut Vec<ValidationIssue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::sample_profile;

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn sample_profile_is_clean() {
        assert!(validate(&sample_profile()).is_empty());
    }

    #[test]
    fn flags_empty_text_fields() {
        let mut profile = sample_profile();
        profile.name = "  ".to_string();
        profile.experience[1].period = String::new();
        let issues = validate(&profile);
        assert_eq!(fields(&issues), vec!["name", "experience[1].period"]);
    }

    #[test]
    fn flags_bad_contact_channels() {
        let mut profile = sample_profile();
        profile.contact.email = "ada.example.com".to_string();
        profile.contact.phone = "call me".to_string();
        let issues = validate(&profile);
        assert_eq!(fields(&issues), vec!["contact.email", "contact.phone"]);
    }

    #[test]
    fn flags_insecure_social_urls() {
        let mut profile = sample_profile();
        profile.socials.insert("github".to_string(), "http://github.com/ada".to_string());
        let issues = validate(&profile);
        assert_eq!(fields(&issues), vec!["socials.github"]);
    }

    #[test]
    fn flags_empty_collections() {
        let mut profile = sample_profile();
        profile.skills.insert("Tools".to_string(), Vec::new());
        profile.experience[0].bullets.clear();
        let issues = validate(&profile);
        assert_eq!(fields(&issues), vec!["skills.Tools", "experience[0].bullets"]);
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@@b.co"));
        assert!(!is_plausible_email("a b@c.co"));
        assert!(!is_plausible_email("a@b.co."));
    }
}
