mod throttle;
mod tracker;

pub use throttle::Throttle;
pub use tracker::{
    closest_section, scroll_progress, ScrollState, ScrollTracker, DEFAULT_SCROLL_THROTTLE,
};
