//! Serde mirror of the exported `profile-data.json` document.
//!
//! Every field is optional on the wire; absent collections deserialize empty.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProfile {
    pub personal_info: Value,
    pub about: Value,
    pub skills: Value,
    pub education: Vec<RawEducation>,
    pub experience: Vec<RawExperience>,
    pub portfolio: RawPortfolio,
    pub services: RawServices,
    pub social_links: RawSocialLinks,
    pub contact: RawContact,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEducation {
    pub degree: String,
    pub period: String,
    pub institution: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExperience {
    pub title: String,
    pub period: String,
    pub company: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPortfolio {
    pub title: String,
    pub description: String,
    pub projects: Vec<RawProject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProject {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawServices {
    pub title: String,
    pub description: String,
    pub services: Vec<RawService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawService {
    pub title: String,
    pub description: String,
}

/// `socialLinks` shows up either as `{ "github": "https://..." }` or as a list of entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSocialLinks {
    List(Vec<RawSocialLink>),
    Map(serde_json::Map<String, Value>),
}

impl Default for RawSocialLinks {
    fn default() -> Self {
        RawSocialLinks::List(Vec::new())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContact {
    pub email: String,
    pub phone: String,
    pub location: String,
}
