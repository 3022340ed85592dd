//! Presentation state for the page chrome and the content sections.
//!
//! Everything here is toolkit-agnostic; `view` draws it.

mod contact;
mod entrance;
mod nav;
mod sections;

pub use contact::{
    fallback_social_links, is_valid_email, ContactForm, ContactSection, FormStatus,
    FORM_RESET_DELAY,
};
pub use entrance::{
    power3_out, EntranceAnimation, DEFAULT_ENTRANCE_DURATION, DEFAULT_ENTRANCE_OFFSET,
    DEFAULT_TRIGGER_LINE,
};
pub use nav::{
    BackToTop, Footer, NavBar, DEFAULT_BACK_TO_TOP_THRESHOLD, NAVBAR_SCROLLED_THRESHOLD, NAV_ITEMS,
};
pub use sections::SectionContent;
