//! Content projection: the static profile document turned into typed records.

mod error;
mod model;
pub mod parse;
pub mod raw;
mod service;
mod source;

pub use error::ContentError;
pub use model::{
    ContactInfo, Education, Experience, Period, PersonalInfo, Project, ProjectStatus, Service,
    ServiceIcon, SocialLink,
};
pub use raw::RawProfile;
pub use service::{ContentService, PendingLoad};
pub use source::{source_from_location, ContentSource, FileSource, HttpSource, InlineSource};
