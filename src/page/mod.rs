//! Page rendering: the fixed section layout, local UI state, and the
//! backends that draw a [`Page`].

pub mod html;
pub mod model;
pub mod sections;
pub mod state;
pub mod text;

pub use html::{RenderOptions, escape_html, render_html};
pub use model::{
    CardAction, ContactCard, EMAIL_PLACEHOLDER, EXTERNAL_REL, Link, LinkTarget, Page, Section,
    SectionBody,
};
pub use sections::SectionId;
pub use state::{EmailState, MenuState, PageState};
