use std::time::{Duration, Instant};

/// Rate limiter with both a leading and a trailing edge.
///
/// The first event of a burst fires immediately and opens a window of
/// `interval`. Events that land inside the window are coalesced: when the
/// window closes, exactly one trailing fire happens (reported by [`poll`]) and
/// a new window opens behind it. A burst therefore always ends with a fire that
/// observed the final event.
///
/// [`poll`]: Throttle::poll
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    window_end: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
            pending: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Register an event at `now`. Returns true if it should be handled right away.
    ///
    /// An event arriving after the window closed fires even when a trailing
    /// fire is still owed, so a continuous burst fires once per interval.
    pub fn hit(&mut self, now: Instant) -> bool {
        match self.window_end {
            Some(end) if now < end => {
                self.pending = true;
                false
            }
            _ => {
                self.window_end = Some(now + self.interval);
                self.pending = false;
                true
            }
        }
    }

    /// Check the trailing edge. Returns true if a coalesced event is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.window_end {
            Some(end) if now >= end => {
                if self.pending {
                    self.pending = false;
                    self.window_end = Some(now + self.interval);
                    true
                } else {
                    self.window_end = None;
                    false
                }
            }
            _ => false,
        }
    }

    /// True while a trailing fire is owed
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn reset(&mut self) {
        self.window_end = None;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn leading_edge_fires_immediately() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn burst_coalesces_into_one_trailing_fire() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        assert!(!throttle.hit(t0 + ms(10)));
        assert!(!throttle.hit(t0 + ms(50)));
        assert!(!throttle.hit(t0 + ms(90)));

        assert!(!throttle.poll(t0 + ms(99)));
        assert!(throttle.poll(t0 + ms(100)));
        // Trailing fire consumed; nothing else owed
        assert!(!throttle.poll(t0 + ms(250)));
    }

    #[test]
    fn quiet_window_expires_without_trailing() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        assert!(!throttle.poll(t0 + ms(150)));
        // Next burst starts fresh with a leading fire
        assert!(throttle.hit(t0 + ms(160)));
    }

    #[test]
    fn trailing_fire_opens_new_window() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        assert!(!throttle.hit(t0 + ms(20)));
        assert!(throttle.poll(t0 + ms(100)));

        // Still inside the window opened by the trailing fire
        assert!(!throttle.hit(t0 + ms(150)));
        assert!(throttle.poll(t0 + ms(200)));
    }

    #[test]
    fn hit_after_expired_window_leads() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        // No poll in between; the old window is stale
        assert!(throttle.hit(t0 + ms(300)));
    }

    #[test]
    fn continuous_burst_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        let fired: Vec<u64> = (0..=62u64)
            .map(|frame| frame * 16)
            .filter(|&at| throttle.hit(t0 + ms(at)))
            .collect();

        assert_eq!(fired, vec![0, 112, 224, 336, 448, 560, 672, 784, 896]);
    }

    #[test]
    fn late_hit_settles_owed_trailing_fire() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.hit(t0));
        assert!(!throttle.hit(t0 + ms(40)));
        assert!(throttle.has_pending());

        // No poll ran; the late event fires and absorbs the owed one
        assert!(throttle.hit(t0 + ms(130)));
        assert!(!throttle.has_pending());
        assert!(!throttle.poll(t0 + ms(230)));
    }
}
