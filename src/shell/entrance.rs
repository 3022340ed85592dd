use crate::page::AnchorRect;

pub const DEFAULT_ENTRANCE_DURATION: f32 = 0.8;
pub const DEFAULT_ENTRANCE_OFFSET: f32 = 50.0;
/// Fraction of the viewport height the anchor top must cross to start playing
pub const DEFAULT_TRIGGER_LINE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Playing,
    Finished,
}

/// One-shot slide-and-fade that plays the first time its section scrolls into view.
#[derive(Debug, Clone, Copy)]
pub struct EntranceAnimation {
    duration: f32,
    offset: f32,
    trigger_line: f32,
    elapsed: f32,
    phase: Phase,
}

impl EntranceAnimation {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            offset: DEFAULT_ENTRANCE_OFFSET,
            trigger_line: DEFAULT_TRIGGER_LINE,
            elapsed: 0.0,
            phase: Phase::Waiting,
        }
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_trigger_line(mut self, fraction: f32) -> Self {
        self.trigger_line = fraction.clamp(0.0, 1.0);
        self
    }

    /// Feed the section's current anchor rect. Starts playback the first time
    /// the anchor crosses the trigger line; returns true on that call only.
    pub fn observe(&mut self, rect: Option<AnchorRect>, viewport_height: f32) -> bool {
        if self.phase != Phase::Waiting {
            return false;
        }
        let Some(rect) = rect else {
            return false;
        };
        if rect.bottom() > 0.0 && rect.top < viewport_height * self.trigger_line {
            self.phase = Phase::Playing;
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Advance by `delta` seconds. Returns true when playback completes.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.phase = Phase::Finished;
            true
        } else {
            false
        }
    }

    pub fn has_started(&self) -> bool {
        self.phase != Phase::Waiting
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Linear progress [0, 1]
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Waiting => 0.0,
            Phase::Finished => 1.0,
            Phase::Playing => (self.elapsed / self.duration).min(1.0),
        }
    }

    /// Eased progress (power3 out)
    pub fn eased(&self) -> f32 {
        power3_out(self.progress())
    }

    pub fn opacity(&self) -> f32 {
        self.eased()
    }

    /// Vertical offset still to travel, in logical pixels
    pub fn offset_y(&self) -> f32 {
        self.offset * (1.0 - self.eased())
    }
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRANCE_DURATION)
    }
}

pub fn power3_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_until_in_view() {
        let mut anim = EntranceAnimation::new(1.0);
        assert!(!anim.observe(None, 600.0));
        assert!(!anim.observe(Some(AnchorRect::new(700.0, 400.0)), 600.0));
        // below the 80% line
        assert!(!anim.observe(Some(AnchorRect::new(500.0, 400.0)), 600.0));
        assert_eq!(anim.opacity(), 0.0);
        assert_eq!(anim.offset_y(), DEFAULT_ENTRANCE_OFFSET);

        assert!(anim.observe(Some(AnchorRect::new(400.0, 400.0)), 600.0));
        assert!(anim.is_playing());
    }

    #[test]
    fn test_plays_once() {
        let mut anim = EntranceAnimation::new(1.0).with_trigger_line(1.0);
        assert!(anim.observe(Some(AnchorRect::new(0.0, 100.0)), 600.0));
        assert!(!anim.tick(0.5));
        assert!(anim.eased() > anim.progress());
        assert!(anim.tick(0.6));
        assert!(anim.is_finished());
        assert_eq!(anim.offset_y(), 0.0);

        // leaving and re-entering never replays
        assert!(!anim.observe(Some(AnchorRect::new(0.0, 100.0)), 600.0));
        assert!(!anim.tick(1.0));
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_power3_out_bounds() {
        assert_eq!(power3_out(0.0), 0.0);
        assert_eq!(power3_out(1.0), 1.0);
        assert_eq!(power3_out(0.5), 0.875);
        assert_eq!(power3_out(2.0), 1.0);
    }
}
