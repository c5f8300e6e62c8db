//! The fixed section sequence and its lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FolioError;

/// One anchor-addressable block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Contact,
    About,
    Skills,
    Experience,
    Education,
    Certifications,
    Achievements,
}

impl SectionId {
    pub const COUNT: usize = 7;

    /// Every section, in page order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Contact,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Certifications,
        Self::Achievements,
    ];

    /// Anchor identifier; the nav links `#<anchor>` to it.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Certifications => "certifications",
            Self::Achievements => "achievements",
        }
    }

    /// Short label used in the navigation bar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Certifications => "Certifications",
            Self::Achievements => "Achievements",
        }
    }

    /// Heading shown at the top of the section itself.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact & Socials",
            Self::About => "About",
            Self::Skills => "Core Skills",
            Self::Experience => "Professional Experience",
            Self::Education => "Education",
            Self::Certifications => "Certifications & Awards",
            Self::Achievements => "Achievements",
        }
    }

    /// Position in [`SectionId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|id| id.anchor().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_page_layout() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(
            anchors,
            vec![
                "contact",
                "about",
                "skills",
                "experience",
                "education",
                "certifications",
                "achievements"
            ]
        );
    }

    #[test]
    fn index_matches_position() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn parses_anchor_forms() {
        assert_eq!("skills".parse::<SectionId>().unwrap(), SectionId::Skills);
        assert_eq!("#Experience".parse::<SectionId>().unwrap(), SectionId::Experience);
        assert!(matches!(
            "projects".parse::<SectionId>(),
            Err(FolioError::UnknownSection(_))
        ));
    }

    #[test]
    fn nav_labels_are_short_titles() {
        assert_eq!(SectionId::Skills.nav_label(), "Skills");
        assert_eq!(SectionId::Skills.title(), "Core Skills");
        assert_eq!(SectionId::About.nav_label(), SectionId::About.title());
    }
}
