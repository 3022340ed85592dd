use std::time::{Duration, Instant};

use log::{debug, trace};

use super::throttle::Throttle;
use crate::channel::{StateChannel, Subscription};
use crate::navigator::SectionNavigator;
use crate::page::Page;
use crate::section::SectionId;

/// Default minimum spacing between two scroll computations
pub const DEFAULT_SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// Snapshot of where the reader is on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub current_section: SectionId,
    /// Overall progress through the scrollable range, in `[0, 1]`
    pub scroll_progress: f32,
    /// Position of `current_section` in `SectionId::ALL`
    pub section_index: usize,
}

impl ScrollState {
    pub fn new(current_section: SectionId, scroll_progress: f32) -> Self {
        Self {
            current_section,
            scroll_progress,
            section_index: current_section.index(),
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(SectionId::Hero, 0.0)
    }
}

/// Scroll progress for the given metrics; zero when nothing can scroll
pub fn scroll_progress(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// Section whose anchor centre is closest to the viewport centre.
///
/// Missing anchors are skipped; on equal distances the earlier section wins.
pub fn closest_section(page: &dyn Page) -> Option<SectionId> {
    let viewport_center = page.viewport_height() * 0.5;

    SectionId::ALL
        .iter()
        .filter_map(|&section| {
            page.anchor_rect(section)
                .map(|rect| (section, (rect.center() - viewport_center).abs()))
        })
        .fold(None, |best: Option<(SectionId, f32)>, (section, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((section, distance)),
        })
        .map(|(section, _)| section)
}

/// Tracks scroll progress and the active section, and broadcasts both.
///
/// The host feeds raw scroll events through [`on_scroll`](Self::on_scroll) and
/// calls [`poll`](Self::poll) regularly (once per frame is enough) so the
/// trailing edge of a burst is never lost.
pub struct ScrollTracker {
    throttle: Throttle,
    state: StateChannel<ScrollState>,
    section: StateChannel<SectionId>,
    navigator: SectionNavigator,
}

impl ScrollTracker {
    pub fn new(throttle_interval: Duration) -> Self {
        let initial = ScrollState::default();
        Self {
            throttle: Throttle::new(throttle_interval),
            state: StateChannel::new(initial),
            section: StateChannel::new(initial.current_section),
            navigator: SectionNavigator::new(),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ScrollState {
        *self.state.value()
    }

    /// Every computed state; the current one is delivered on subscribe
    pub fn state_changes(&self) -> Subscription<ScrollState> {
        self.state.subscribe()
    }

    /// Active section only, never the same section twice in a row
    pub fn active_section(&self) -> Subscription<SectionId> {
        self.section.subscribe()
    }

    /// Smooth-scroll to `section`; the resulting scroll events come back through `on_scroll`
    pub fn navigate_to(&self, page: &mut dyn Page, section: SectionId) -> Option<f32> {
        self.navigator.navigate_to(page, section)
    }

    /// Raw scroll event. Returns true if a computation ran.
    pub fn on_scroll(&mut self, page: &dyn Page, now: Instant) -> bool {
        if self.throttle.hit(now) {
            self.recompute(page);
            true
        } else {
            trace!("scroll event throttled");
            false
        }
    }

    /// Trailing-edge check. Returns true if a coalesced computation ran.
    pub fn poll(&mut self, page: &dyn Page, now: Instant) -> bool {
        if self.throttle.poll(now) {
            self.recompute(page);
            true
        } else {
            false
        }
    }

    /// Compute and publish immediately, bypassing the throttle (resize, first layout)
    pub fn recompute(&mut self, page: &dyn Page) -> Option<ScrollState> {
        let Some(section) = closest_section(page) else {
            debug!("no section anchors mounted, holding last scroll state");
            return None;
        };

        let progress = scroll_progress(
            page.scroll_top(),
            page.document_height(),
            page.viewport_height(),
        );
        let next = ScrollState::new(section, progress);

        self.state.publish(next);
        if self.section.publish_distinct(section) {
            debug!("active section -> {}", section);
        }
        Some(next)
    }

    /// Drop every subscriber and forget throttle state
    pub fn dispose(&mut self) {
        self.state.close();
        self.section.close();
        self.throttle.reset();
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THROTTLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageLayout;

    #[test]
    fn test_progress_zero_without_overflow() {
        assert_eq!(scroll_progress(0.0, 500.0, 600.0), 0.0);
        assert_eq!(scroll_progress(100.0, 600.0, 600.0), 0.0);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 1600.0, 600.0), 0.0);
        assert_eq!(scroll_progress(500.0, 1600.0, 600.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 1600.0, 600.0), 1.0);
    }

    #[test]
    fn test_initial_state_is_hero() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.state(), ScrollState::new(SectionId::Hero, 0.0));
        assert_eq!(tracker.state().section_index, 0);
    }

    #[test]
    fn test_recompute_picks_section() {
        let mut page = PageLayout::stacked(600.0, &[600.0; 6]);
        page.set_scroll_top(1250.0);

        let mut tracker = ScrollTracker::default();
        let state = tracker.recompute(&page).unwrap();

        assert_eq!(state.current_section, SectionId::Experience);
        assert_eq!(state.section_index, 2);
        assert!((state.scroll_progress - 1250.0 / 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_anchors_holds_state() {
        let mut page = PageLayout::stacked(600.0, &[600.0; 6]);
        page.set_scroll_top(1300.0);
        let mut tracker = ScrollTracker::default();
        tracker.recompute(&page);
        let held = tracker.state();

        page.clear_anchors();
        page.set_scroll_top(0.0);
        assert_eq!(tracker.recompute(&page), None);
        assert_eq!(tracker.state(), held);
    }
}
