use log::{debug, warn};

use super::entrance::EntranceAnimation;
use crate::content::PendingLoad;
use crate::page::Page;
use crate::section::SectionId;

/// Content-backed section: one pending load, the value it produced, and the
/// section's entrance animation.
pub struct SectionContent<T> {
    section: SectionId,
    pending: Option<PendingLoad<T>>,
    value: T,
    loaded: bool,
    entrance: EntranceAnimation,
}

impl<T: Default> SectionContent<T> {
    pub fn new(section: SectionId, pending: PendingLoad<T>) -> Self {
        Self {
            section,
            pending: Some(pending),
            value: T::default(),
            loaded: false,
            entrance: EntranceAnimation::default(),
        }
    }

    /// Section with no load attached; stays empty
    pub fn empty(section: SectionId) -> Self {
        Self {
            section,
            pending: None,
            value: T::default(),
            loaded: false,
            entrance: EntranceAnimation::default(),
        }
    }

    pub fn with_entrance(mut self, entrance: EntranceAnimation) -> Self {
        self.entrance = entrance;
        self
    }

    /// Poll the pending load. Returns true when a value was stored.
    /// A failed load leaves the value empty.
    pub fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let Some(result) = pending.try_take() else {
            return false;
        };
        self.pending = None;

        match result {
            Ok(value) => {
                debug!("{} content loaded", self.section);
                self.value = value;
                self.loaded = true;
                true
            }
            Err(err) => {
                warn!("{} content unavailable: {}", self.section, err);
                false
            }
        }
    }

    /// Per-frame update: poll the load and drive the entrance animation
    pub fn update(&mut self, page: &dyn Page, delta: f32) {
        self.poll();
        if self
            .entrance
            .observe(page.anchor_rect(self.section), page.viewport_height())
        {
            debug!("{} entrance started", self.section);
        }
        self.entrance.tick(delta);
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn entrance(&self) -> &EntranceAnimation {
        &self.entrance
    }
}

impl<T> SectionContent<Vec<T>> {
    pub fn items(&self) -> &[T] {
        &self.value
    }
}
