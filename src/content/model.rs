use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Date range recovered from a free-text period such as `"2022 - présent"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub current: bool,
}

impl Period {
    pub fn ongoing(start: NaiveDate) -> Self {
        Self {
            start,
            end: None,
            current: true,
        }
    }

    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
            current: false,
        }
    }

    /// Year span shown on cards, e.g. `2019 - 2021` or `2022 - présent`
    pub fn label(&self) -> String {
        let start = self.start.year();
        match self.end {
            Some(end) if !self.current && end.year() == start => start.to_string(),
            Some(end) if !self.current => format!("{} - {}", start, end.year()),
            _ => format!("{} - présent", start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: Period,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub role: String,
    pub status: ProjectStatus,
    pub image_url: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Web,
    Server,
    Database,
    Cloud,
    Bug,
    Shield,
    Code,
}

impl ServiceIcon {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceIcon::Web => "web",
            ServiceIcon::Server => "server",
            ServiceIcon::Database => "database",
            ServiceIcon::Cloud => "cloud",
            ServiceIcon::Bug => "bug",
            ServiceIcon::Shield => "shield",
            ServiceIcon::Code => "code",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Web => "🌐",
            ServiceIcon::Server => "🖥",
            ServiceIcon::Database => "🗄",
            ServiceIcon::Cloud => "☁",
            ServiceIcon::Bug => "🐞",
            ServiceIcon::Shield => "🛡",
            ServiceIcon::Code => "⌨",
        }
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl SocialLink {
    pub fn new(name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Hero headline pulled from `personalInfo` and `about`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
}
