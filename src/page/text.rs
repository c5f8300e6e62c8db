//! Line-oriented projection of a page.
//!
//! Used by `folio show` for plain output and by the terminal view, which
//! maps each [`LineKind`] to a style.

use super::model::{CardAction, Hero, LinkTarget, Page, Section, SectionBody};
use super::sections::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Section heading.
    Title,
    /// Sub-heading: skill category, job role, degree.
    Heading,
    /// Secondary detail: company line, period, school.
    Meta,
    Body,
    Bullet,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub kind: LineKind,
    pub text: String,
}

impl TextLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

#[must_use]
pub fn hero_lines(hero: &Hero) -> Vec<TextLine> {
    let mut lines = vec![
        TextLine::new(LineKind::Title, hero.name.clone()),
        TextLine::new(LineKind::Body, hero.title.clone()),
        TextLine::new(LineKind::Meta, hero.location.clone()),
    ];
    for action in &hero.actions {
        lines.push(TextLine::new(
            LineKind::Meta,
            format!("[{}] {}", action.label, action.href),
        ));
    }
    lines
}

#[must_use]
pub fn section_lines(section: &Section) -> Vec<TextLine> {
    let mut lines = vec![TextLine::new(LineKind::Title, section.title.clone())];

    match &section.body {
        SectionBody::Contact(cards) => {
            for card in cards {
                let text = match &card.action {
                    CardAction::Link(link) if link.target == LinkTarget::NewContext => {
                        format!("{} {}: {} <{}>", card.icon, card.label, card.value, link.href)
                    }
                    _ => format!("{} {}: {}", card.icon, card.label, card.value),
                };
                lines.push(TextLine::new(LineKind::Body, text));
            }
        }
        SectionBody::Paragraph(text) => lines.push(TextLine::new(LineKind::Body, text.clone())),
        SectionBody::Skills(groups) => {
            for group in groups {
                lines.push(TextLine::new(LineKind::Heading, group.category.clone()));
                for item in &group.items {
                    lines.push(TextLine::new(LineKind::Bullet, item.clone()));
                }
            }
        }
        SectionBody::Experience(jobs) => {
            for (i, job) in jobs.iter().enumerate() {
                if i > 0 {
                    lines.push(TextLine::blank());
                }
                lines.push(TextLine::new(LineKind::Heading, job.role.clone()));
                lines.push(TextLine::new(LineKind::Meta, job.company_line()));
                lines.push(TextLine::new(LineKind::Meta, job.period.clone()));
                for bullet in &job.bullets {
                    lines.push(TextLine::new(LineKind::Bullet, bullet.clone()));
                }
            }
        }
        SectionBody::Education {
            degree,
            school,
            year,
        } => {
            lines.push(TextLine::new(LineKind::Heading, degree.clone()));
            lines.push(TextLine::new(LineKind::Meta, school.clone()));
            lines.push(TextLine::new(LineKind::Meta, year.clone()));
        }
        SectionBody::List(items) => {
            for item in items {
                lines.push(TextLine::new(LineKind::Bullet, item.clone()));
            }
        }
    }
    lines
}

#[must_use]
pub fn footer_line(page: &Page) -> TextLine {
    let mut parts = vec![page.footer.email.clone()];
    parts.extend(
        page.footer
            .links
            .iter()
            .map(|link| format!("{} <{}>", link.label, link.href)),
    );
    TextLine::new(LineKind::Meta, parts.join(" · "))
}

/// Every line of the page, top to bottom, with a blank line between blocks.
#[must_use]
pub fn page_lines(page: &Page) -> Vec<TextLine> {
    page_layout(page).0
}

/// [`page_lines`] plus the index of each section's title line, indexed by
/// [`SectionId::index`].
#[must_use]
pub fn page_layout(page: &Page) -> (Vec<TextLine>, [usize; SectionId::COUNT]) {
    let mut lines = hero_lines(&page.hero);
    let mut offsets = [0; SectionId::COUNT];
    for section in &page.sections {
        lines.push(TextLine::blank());
        offsets[section.id.index()] = lines.len();
        lines.extend(section_lines(section));
    }
    lines.push(TextLine::blank());
    lines.push(footer_line(page));
    (lines, offsets)
}

/// Plain-text rendering of a set of lines.
#[must_use]
pub fn to_plain(lines: &[TextLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line.kind {
            LineKind::Title => {
                out.push_str(&line.text);
                out.push('\n');
                out.push_str(&"=".repeat(line.text.chars().count()));
            }
            LineKind::Heading | LineKind::Meta | LineKind::Body => {
                out.push_str(&format!("  {}", line.text));
            }
            LineKind::Bullet => out.push_str(&format!("    - {}", line.text)),
            LineKind::Blank => {}
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::state::PageState;
    use crate::profile::fixtures::sample_profile;

    fn page() -> Page {
        Page::build(&sample_profile(), PageState::new())
    }

    #[test]
    fn skills_section_lines() {
        let page = page();
        let lines = section_lines(page.section(SectionId::Skills).unwrap());
        let plain = to_plain(&lines);
        assert_eq!(
            plain,
            "Core Skills\n===========\n  Languages\n    - Go\n    - Rust\n  Tools\n    - Git\n"
        );
    }

    #[test]
    fn email_line_shows_placeholder() {
        let page = page();
        let lines = section_lines(page.section(SectionId::Contact).unwrap());
        assert_eq!(lines[2].text, "✉️ Email: Click to reveal");
        assert_eq!(lines[3].text, "in LinkedIn: ada <https://www.linkedin.com/in/ada>");
    }

    #[test]
    fn experience_separates_jobs() {
        let page = page();
        let lines = section_lines(page.section(SectionId::Experience).unwrap());
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds[0], LineKind::Title);
        assert!(kinds.contains(&LineKind::Blank));
        assert_eq!(lines.iter().filter(|l| l.kind == LineKind::Bullet).count(), 3);
    }

    #[test]
    fn page_lines_cover_every_section_title() {
        let page = page();
        let lines = page_lines(&page);
        for id in SectionId::ALL {
            assert_eq!(
                lines
                    .iter()
                    .filter(|l| l.kind == LineKind::Title && l.text == id.title())
                    .count(),
                1
            );
        }
        assert!(lines.last().unwrap().text.starts_with("ada@example.com · LinkedIn"));
    }

    #[test]
    fn layout_offsets_point_at_section_titles() {
        let page = page();
        let (lines, offsets) = page_layout(&page);
        for id in SectionId::ALL {
            let line = &lines[offsets[id.index()]];
            assert_eq!(line.kind, LineKind::Title);
            assert_eq!(line.text, id.title());
        }
    }
}
