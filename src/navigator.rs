use log::debug;

use crate::page::Page;
use crate::section::SectionId;

/// Smooth-scrolls the page so a section's anchor meets the viewport top
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionNavigator;

impl SectionNavigator {
    pub fn new() -> Self {
        Self
    }

    /// Start scrolling towards `section`. Returns the requested offset, or
    /// `None` when the anchor is not mounted (nothing happens then).
    pub fn navigate_to(&self, page: &mut dyn Page, section: SectionId) -> Option<f32> {
        let Some(rect) = page.anchor_rect(section) else {
            debug!("navigate_to({}): anchor not mounted", section);
            return None;
        };

        let target = (page.scroll_top() + rect.top).clamp(0.0, page.max_scroll());
        debug!("navigate_to({}): scrolling to {:.1}", section, target);
        page.smooth_scroll_to(target);
        Some(target)
    }

    /// Same as [`navigate_to`](Self::navigate_to) for a raw anchor name.
    /// Unknown names are ignored.
    pub fn navigate_to_name(&self, page: &mut dyn Page, name: &str) -> Option<f32> {
        match SectionId::from_anchor(name) {
            Some(section) => self.navigate_to(page, section),
            None => {
                debug!("navigate_to({:?}): unknown section", name);
                None
            }
        }
    }
}
