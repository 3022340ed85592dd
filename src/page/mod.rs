mod layout;

pub use layout::{PageLayout, ScrollAnimation};

use crate::section::SectionId;

/// Vertical bounds of an anchor, relative to the viewport top (like a client rect)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> f32 {
        self.top + self.height * 0.5
    }

    /// True when any part of the anchor overlaps `[0, viewport_height)`
    pub fn intersects_viewport(&self, viewport_height: f32) -> bool {
        self.bottom() > 0.0 && self.top < viewport_height
    }
}

/// Scrollable document hosting the anchored sections
pub trait Page {
    /// Current vertical scroll offset in logical pixels
    fn scroll_top(&self) -> f32;

    /// Visible height of the viewport
    fn viewport_height(&self) -> f32;

    /// Full height of the scrollable content
    fn document_height(&self) -> f32;

    /// Bounds of the section's anchor, or `None` if it is not mounted
    fn anchor_rect(&self, section: SectionId) -> Option<AnchorRect>;

    /// Start a smooth scroll towards `top`; completion is asynchronous
    fn smooth_scroll_to(&mut self, top: f32);

    /// Largest reachable scroll offset
    fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_rect_center() {
        let rect = AnchorRect::new(100.0, 50.0);
        assert_eq!(rect.center(), 125.0);
        assert_eq!(rect.bottom(), 150.0);
    }

    #[test]
    fn test_anchor_rect_viewport_intersection() {
        assert!(AnchorRect::new(-10.0, 20.0).intersects_viewport(600.0));
        assert!(AnchorRect::new(599.0, 20.0).intersects_viewport(600.0));
        assert!(!AnchorRect::new(600.0, 20.0).intersects_viewport(600.0));
        assert!(!AnchorRect::new(-20.0, 20.0).intersects_viewport(600.0));
    }
}
