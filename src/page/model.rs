//! Backend-neutral page model.
//!
//! [`Page::build`] projects a [`Profile`] plus the current [`PageState`] into
//! the nav bar, hero, ordered sections and footer. The HTML writer and the
//! terminal view both draw from this model, so section order, link targets
//! and email masking are decided once, here.

use serde::Serialize;

use super::sections::SectionId;
use super::state::{EmailState, MenuState, PageState};
use crate::profile::{Profile, channel_label};

/// Shown on the email card until it is activated.
pub const EMAIL_PLACEHOLDER: &str = "Click to reveal";

/// `rel` value for links that open a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Same browsing context: in-page anchors, `tel:`.
    SameContext,
    /// New browsing context with no opener or referrer.
    NewContext,
}

impl LinkTarget {
    #[must_use]
    pub const fn rel(self) -> Option<&'static str> {
        match self {
            Self::SameContext => None,
            Self::NewContext => Some(EXTERNAL_REL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
    pub target: LinkTarget,
}

impl Link {
    fn anchor(id: SectionId, label: impl Into<String>) -> Self {
        Self {
            href: format!("#{}", id.anchor()),
            label: label.into(),
            target: LinkTarget::SameContext,
        }
    }

    fn external(url: &str, label: impl Into<String>) -> Self {
        Self {
            href: url.to_string(),
            label: label.into(),
            target: LinkTarget::NewContext,
        }
    }
}

/// `tel:` URI for a display phone number.
#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

#[must_use]
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: SectionId,
    pub href: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nav {
    pub logo: String,
    pub items: Vec<NavItem>,
    pub menu: MenuState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub location: String,
    pub actions: Vec<Link>,
}

/// What activating a contact card does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CardAction {
    /// Plain navigation (`tel:`, external profiles).
    Link(Link),
    /// Reveal-gated email. The address is kept out of serialized output
    /// while masked; `ContactCard::value` carries what is on screen.
    RevealEmail {
        #[serde(skip)]
        address: String,
        state: EmailState,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub icon: &'static str,
    pub label: String,
    /// Text currently displayed on the card.
    pub value: String,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobBlock {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub bullets: Vec<String>,
}

impl JobBlock {
    /// `company · location` header line.
    #[must_use]
    pub fn company_line(&self) -> String {
        format!("{} · {}", self.company, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "content")]
pub enum SectionBody {
    Contact(Vec<ContactCard>),
    Paragraph(String),
    Skills(Vec<SkillGroup>),
    Experience(Vec<JobBlock>),
    Education {
        degree: String,
        school: String,
        year: String,
    },
    List(Vec<String>),
}

/// A labeled, anchor-addressable block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    #[must_use]
    pub fn new(id: SectionId, body: SectionBody) -> Self {
        Self::with_title(id, id.title(), body)
    }

    #[must_use]
    pub fn with_title(id: SectionId, title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            id,
            title: title.into(),
            body,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> &'static str {
        self.id.anchor()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// The footer email control always opens the mail composer; it is never
    /// masked.
    pub email: String,
    pub mailto: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub state: PageState,
    pub nav: Nav,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

impl Page {
    #[must_use]
    pub fn build(profile: &Profile, state: PageState) -> Self {
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| Section::new(id, section_body(profile, id, state)))
            .collect();

        Self {
            state,
            nav: build_nav(profile, state),
            hero: build_hero(profile),
            sections,
            footer: build_footer(profile),
        }
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

fn build_nav(profile: &Profile, state: PageState) -> Nav {
    Nav {
        logo: profile.first_name().to_string(),
        items: SectionId::ALL
            .into_iter()
            .map(|id| NavItem {
                id,
                href: format!("#{}", id.anchor()),
                label: id.nav_label(),
            })
            .collect(),
        menu: state.menu,
    }
}

fn build_hero(profile: &Profile) -> Hero {
    let mut actions = vec![Link::anchor(SectionId::Contact, "Get in touch")];
    if let Some(url) = profile.socials.get("linkedin") {
        actions.push(Link::external(url, channel_label("linkedin")));
    }
    Hero {
        name: profile.name.clone(),
        title: profile.title.clone(),
        location: profile.location.clone(),
        actions,
    }
}

fn build_footer(profile: &Profile) -> Footer {
    Footer {
        email: profile.contact.email.clone(),
        mailto: mailto_href(&profile.contact.email),
        links: profile
            .socials
            .iter()
            .map(|(channel, url)| Link::external(url, channel_label(channel)))
            .collect(),
    }
}

fn section_body(profile: &Profile, id: SectionId, state: PageState) -> SectionBody {
    match id {
        SectionId::Contact => SectionBody::Contact(contact_cards(profile, state.email)),
        SectionId::About => SectionBody::Paragraph(profile.summary.clone()),
        SectionId::Skills => SectionBody::Skills(
            profile
                .skills
                .iter()
                .map(|(category, items)| SkillGroup {
                    category: category.to_string(),
                    items: items.clone(),
                })
                .collect(),
        ),
        SectionId::Experience => SectionBody::Experience(
            profile
                .experience
                .iter()
                .map(|job| JobBlock {
                    role: job.role.clone(),
                    company: job.company.clone(),
                    location: job.location.clone(),
                    period: job.period.clone(),
                    bullets: job.bullets.clone(),
                })
                .collect(),
        ),
        SectionId::Education => SectionBody::Education {
            degree: profile.education.degree.clone(),
            school: profile.education.school.clone(),
            year: profile.education.year.clone(),
        },
        SectionId::Certifications => SectionBody::List(profile.certifications.clone()),
        SectionId::Achievements => SectionBody::List(profile.achievements.clone()),
    }
}

fn contact_cards(profile: &Profile, email: EmailState) -> Vec<ContactCard> {
    let mut cards = vec![
        ContactCard {
            icon: "📞",
            label: "Phone".to_string(),
            value: profile.contact.phone.clone(),
            action: CardAction::Link(Link {
                href: tel_href(&profile.contact.phone),
                label: "Phone".to_string(),
                target: LinkTarget::SameContext,
            }),
        },
        ContactCard {
            icon: "✉️",
            label: "Email".to_string(),
            value: match email {
                EmailState::Masked => EMAIL_PLACEHOLDER.to_string(),
                EmailState::Revealed => profile.contact.email.clone(),
            },
            action: CardAction::RevealEmail {
                address: profile.contact.email.clone(),
                state: email,
            },
        },
    ];

    for (channel, url) in profile.socials.iter() {
        let label = channel_label(channel);
        cards.push(ContactCard {
            icon: channel_icon(channel),
            value: profile.social_handle(channel).unwrap_or(url.as_str()).to_string(),
            action: CardAction::Link(Link::external(url, label.clone())),
            label,
        });
    }
    cards
}

fn channel_icon(channel: &str) -> &'static str {
    match channel {
        "linkedin" => "in",
        "github" => "⌘",
        "leetcode" => "</>",
        _ => "↗",
    }
}
