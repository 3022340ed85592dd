use chrono::Datelike;
use log::debug;

use crate::channel::Subscription;
use crate::content::SocialLink;
use crate::page::Page;
use crate::scroll::ScrollTracker;
use crate::section::SectionId;

/// Scroll offset past which the navbar switches to its compact style
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 50.0;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f32 = 400.0;

pub const NAV_ITEMS: [SectionId; 5] = [
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Services,
    SectionId::Contact,
];

/// Top navigation bar. Follows the tracker's deduplicated active-section stream.
pub struct NavBar {
    active: SectionId,
    scrolled: bool,
    sections: Subscription<SectionId>,
}

impl NavBar {
    pub fn new(tracker: &ScrollTracker) -> Self {
        Self {
            active: tracker.state().current_section,
            scrolled: false,
            sections: tracker.active_section(),
        }
    }

    /// Drain pending section changes and refresh the scrolled flag.
    /// Returns true if the highlighted item changed.
    pub fn sync(&mut self, scroll_top: f32) -> bool {
        self.scrolled = scroll_top > NAVBAR_SCROLLED_THRESHOLD;
        match self.sections.latest() {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn items(&self) -> &'static [SectionId] {
        &NAV_ITEMS
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn click(&self, tracker: &ScrollTracker, page: &mut dyn Page, section: SectionId) {
        debug!("navbar -> {}", section);
        tracker.navigate_to(page, section);
    }

    /// Stop following the tracker
    pub fn dispose(&self) {
        self.sections.unsubscribe();
    }
}

/// Page footer: section links, copyright year and social links
pub struct Footer {
    year: i32,
    social_links: Vec<SocialLink>,
}

impl Footer {
    pub fn new() -> Self {
        Self::for_year(chrono::Local::now().year())
    }

    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            social_links: Vec::new(),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = (SectionId, &'static str)> {
        SectionId::ALL
            .into_iter()
            .map(|section| (section, section.label()))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn copyright(&self, owner: &str) -> String {
        if owner.is_empty() {
            format!("© {}", self.year)
        } else {
            format!("© {} {}", self.year, owner)
        }
    }

    pub fn set_social_links(&mut self, links: Vec<SocialLink>) {
        self.social_links = links;
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn click(&self, tracker: &ScrollTracker, page: &mut dyn Page, section: SectionId) {
        tracker.navigate_to(page, section);
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

/// Floating button that scrolls back to the hero once the page is scrolled far enough
#[derive(Debug, Clone, Copy)]
pub struct BackToTop {
    threshold: f32,
    visible: bool,
}

impl BackToTop {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Returns true when visibility flipped
    pub fn update(&mut self, scroll_top: f32) -> bool {
        let visible = scroll_top > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn click(&self, tracker: &ScrollTracker, page: &mut dyn Page) -> Option<f32> {
        tracker.navigate_to(page, SectionId::Hero)
    }
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new(DEFAULT_BACK_TO_TOP_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageLayout;

    #[test]
    fn test_navbar_follows_active_section() {
        let mut tracker = ScrollTracker::default();
        let mut page = PageLayout::stacked(600.0, &[600.0; 6]);
        let mut navbar = NavBar::new(&tracker);
        assert!(navbar.is_active(SectionId::Hero));
        assert!(!navbar.sync(0.0));

        page.set_scroll_top(1200.0);
        tracker.recompute(&page);
        assert!(navbar.sync(page.scroll_top()));
        assert!(navbar.is_active(SectionId::Experience));
        assert!(navbar.is_scrolled());
    }

    #[test]
    fn test_navbar_click_navigates() {
        let tracker = ScrollTracker::default();
        let mut page = PageLayout::stacked(600.0, &[600.0; 6]);
        let navbar = NavBar::new(&tracker);
        navbar.click(&tracker, &mut page, SectionId::Projects);
        assert_eq!(page.scroll_target(), Some(1800.0));
    }

    #[test]
    fn test_back_to_top_threshold() {
        let tracker = ScrollTracker::default();
        let mut page = PageLayout::stacked(600.0, &[600.0; 6]);
        let mut button = BackToTop::default();
        assert!(!button.update(400.0));
        assert!(!button.is_visible());
        assert!(button.update(401.0));
        assert!(button.is_visible());

        page.set_scroll_top(2000.0);
        assert_eq!(button.click(&tracker, &mut page), Some(0.0));
    }

    #[test]
    fn test_footer_links() {
        let footer = Footer::for_year(2025);
        let labels: Vec<&str> = footer.links().map(|(_, label)| label).collect();
        assert_eq!(
            labels,
            vec!["Home", "About", "Experience", "Projects", "Services", "Contact"]
        );
        assert_eq!(footer.copyright("Sam"), "© 2025 Sam");
    }
}
