//! Local UI state owned by one page view.
//!
//! Two independent cells: the collapsible nav menu and the reveal-gated
//! email card. Neither ever touches the profile.

use serde::Serialize;

use super::sections::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Email card state. `Masked -> Revealed` is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailState {
    #[default]
    Masked,
    Revealed,
}

impl EmailState {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PageState {
    pub menu: MenuState,
    pub email: EmailState,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible menu control.
    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggle();
    }

    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// Follow a nav link. Selecting a destination always dismisses the menu
    /// overlay.
    pub fn activate_nav_link(&mut self, id: SectionId) -> SectionId {
        self.close_menu();
        id
    }

    /// Activate the email card. Idempotent once revealed.
    pub fn reveal_email(&mut self) {
        self.email = EmailState::Revealed;
    }
}
