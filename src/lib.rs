pub mod channel;
pub mod cli;
pub mod config;
pub mod content;
pub mod math;
pub mod navigator;
pub mod page;
pub mod render;
pub mod scene;
pub mod scroll;
pub mod section;
pub mod shell;
pub mod view;

pub use navigator::SectionNavigator;
pub use scroll::{ScrollState, ScrollTracker};
pub use section::SectionId;
