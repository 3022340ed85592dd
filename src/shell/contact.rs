use std::time::{Duration, Instant};

use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::{ContactInfo, PendingLoad, SocialLink};

pub const FORM_RESET_DELAY: Duration = Duration::from_secs(3);

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Links shown when the content document cannot provide any
pub fn fallback_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new("GitHub", "https://github.com", "💻"),
        SocialLink::new("LinkedIn", "https://linkedin.com", "💼"),
        SocialLink::new("Email", "mailto:contact@example.com", "📧"),
    ]
}

/// Contact block: social links and the details from the `contact` object
pub struct ContactSection {
    links: Vec<SocialLink>,
    info: ContactInfo,
    pending_links: Option<PendingLoad<Vec<SocialLink>>>,
    pending_info: Option<PendingLoad<ContactInfo>>,
}

impl ContactSection {
    /// Starts with the fallback links until the loads resolve
    pub fn new(
        links: PendingLoad<Vec<SocialLink>>,
        info: PendingLoad<ContactInfo>,
    ) -> Self {
        Self {
            links: fallback_social_links(),
            info: ContactInfo::default(),
            pending_links: Some(links),
            pending_info: Some(info),
        }
    }

    /// Poll both loads. Returns true when the visible links changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if let Some(result) = self.pending_links.as_mut().and_then(PendingLoad::try_take) {
            self.pending_links = None;
            match result {
                Ok(links) if !links.is_empty() => {
                    self.links = links;
                    changed = true;
                }
                Ok(_) => info!("content has no social links, keeping defaults"),
                Err(err) => error!("Error loading social links: {}", err),
            }
        }

        if let Some(result) = self.pending_info.as_mut().and_then(PendingLoad::try_take) {
            self.pending_info = None;
            match result {
                Ok(info) => self.info = info,
                Err(err) => error!("Error loading contact info: {}", err),
            }
        }

        changed
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.links
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Invalid,
    Submitted,
}

/// Name/email/message form. A valid submission is logged and the form clears
/// itself after [`FORM_RESET_DELAY`].
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    submitted_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: FormStatus::Editing,
            submitted_at: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
            && is_valid_email(&self.email)
    }

    pub fn submit(&mut self, now: Instant) -> FormStatus {
        if self.is_valid() {
            info!(
                "Form submitted: name={:?} email={:?} message={} chars",
                self.name.trim(),
                self.email.trim(),
                self.message.trim().chars().count()
            );
            self.status = FormStatus::Submitted;
            self.submitted_at = Some(now);
        } else {
            self.status = FormStatus::Invalid;
        }
        self.status
    }

    /// Clears the form once the confirmation has been shown long enough.
    /// Returns true when the reset happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.submitted_at {
            Some(at) if now.saturating_duration_since(at) >= FORM_RESET_DELAY => {
                *self = Self::new();
                true
            }
            _ => false,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn has_error(&self) -> bool {
        self.status == FormStatus::Invalid
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
