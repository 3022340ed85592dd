use super::{AnchorRect, Page};
use crate::section::SectionId;

const SCROLL_EASE_FACTOR: f32 = 0.18;
const SCROLL_ARRIVAL_EPSILON: f32 = 0.5;

/// Exponential ease towards a scroll offset, advanced once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub target: f32,
    pub factor: f32,
}

impl ScrollAnimation {
    pub fn new(target: f32) -> Self {
        Self {
            target,
            factor: SCROLL_EASE_FACTOR,
        }
    }

    /// Next offset from `current`, and whether the animation has arrived
    pub fn step(&self, current: f32) -> (f32, bool) {
        let next = current + (self.target - current) * self.factor;
        if (self.target - next).abs() < SCROLL_ARRIVAL_EPSILON {
            (self.target, true)
        } else {
            (next, false)
        }
    }
}

/// Measured page geometry, refreshed by the host every frame.
///
/// Anchors are stored in document coordinates so they stay valid while the
/// scroll offset changes between measurements.
#[derive(Debug, Clone)]
pub struct PageLayout {
    scroll_top: f32,
    viewport_height: f32,
    document_height: f32,
    anchors: [Option<(f32, f32)>; 6],
    animation: Option<ScrollAnimation>,
}

impl PageLayout {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll_top: 0.0,
            viewport_height,
            document_height: viewport_height,
            anchors: [None; 6],
            animation: None,
        }
    }

    /// Sections stacked top to bottom with the given heights, in `SectionId::ALL` order
    pub fn stacked(viewport_height: f32, heights: &[f32]) -> Self {
        let mut layout = Self::new(viewport_height);
        let mut top = 0.0;
        for (section, &height) in SectionId::ALL.iter().zip(heights) {
            layout.set_anchor(*section, top, height);
            top += height;
        }
        layout.document_height = top;
        layout
    }

    pub fn set_metrics(&mut self, scroll_top: f32, viewport_height: f32, document_height: f32) {
        self.scroll_top = scroll_top;
        self.viewport_height = viewport_height;
        self.document_height = document_height;
    }

    /// Jump directly to an offset (user scroll); cancels any smooth scroll
    pub fn set_scroll_top(&mut self, scroll_top: f32) {
        self.scroll_top = scroll_top.clamp(0.0, self.max_scroll());
        self.animation = None;
    }

    /// Record an anchor by its document-space top and height
    pub fn set_anchor(&mut self, section: SectionId, document_top: f32, height: f32) {
        self.anchors[section.index()] = Some((document_top, height));
    }

    pub fn remove_anchor(&mut self, section: SectionId) {
        self.anchors[section.index()] = None;
    }

    pub fn clear_anchors(&mut self) {
        self.anchors = [None; 6];
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    pub fn scroll_target(&self) -> Option<f32> {
        self.animation.map(|a| a.target)
    }

    pub fn cancel_scroll(&mut self) {
        self.animation = None;
    }

    /// Advance the smooth scroll by one frame. Returns the offset the host must
    /// apply, or `None` when no smooth scroll is running.
    pub fn advance_scroll(&mut self) -> Option<f32> {
        let animation = self.animation?;
        let (next, arrived) = animation.step(self.scroll_top);
        self.scroll_top = next;
        if arrived {
            self.animation = None;
        }
        Some(next)
    }
}

impl Page for PageLayout {
    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn document_height(&self) -> f32 {
        self.document_height
    }

    fn anchor_rect(&self, section: SectionId) -> Option<AnchorRect> {
        self.anchors[section.index()]
            .map(|(top, height)| AnchorRect::new(top - self.scroll_top, height))
    }

    fn smooth_scroll_to(&mut self, top: f32) {
        let target = top.clamp(0.0, self.max_scroll());
        self.animation = Some(ScrollAnimation::new(target));
    }
}
