//! Best-effort projection of the raw export into typed records.
//!
//! The heuristics here are tuned to the existing data file and must stay
//! stable: period strings such as `"2020 - présent"`, combined
//! `"Company l Location"` strings, and responsibility sentences that embed a
//! `"Technologies: A, B, C"` clause.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::model::{
    ContactInfo, Education, Experience, Period, PersonalInfo, Project, ProjectStatus, Service,
    ServiceIcon, SocialLink,
};
use super::raw::{
    RawContact, RawEducation, RawExperience, RawProfile, RawProject, RawService, RawSocialLinks,
};

/// Substrings that flag a period as still ongoing, matched on lowercased text
pub const ONGOING_MARKERS: [&str; 2] = ["aujourd'hui", "présent"];

/// Responsibility fragments that are boilerplate rather than achievements
pub const ACHIEVEMENT_FILTER_KEYWORDS: [&str; 3] = ["technolog", "environnement", "outils de travail"];

/// Vocabulary searched verbatim in project descriptions, in reporting order
pub const TECHNOLOGY_VOCABULARY: [&str; 8] = [
    "Java",
    "Spring Boot",
    "Angular",
    "PostgreSQL",
    "Vue.js",
    "React",
    "Node.js",
    "MongoDB",
];

pub const PROJECT_ROLE: &str = "Full-stack Developer";
pub const SHORT_DESCRIPTION_CHARS: usize = 100;

const SERVICE_ICON_RULES: [(&str, ServiceIcon); 6] = [
    ("front", ServiceIcon::Web),
    ("back", ServiceIcon::Server),
    ("database", ServiceIcon::Database),
    ("server", ServiceIcon::Cloud),
    ("testing", ServiceIcon::Bug),
    ("security", ServiceIcon::Shield),
];

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());
static LOCATION_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\sl\s").unwrap());
static TECHNOLOGY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)technolog(?:y|ies)[:\s]").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Parses a free-text period.
///
/// The first two four-digit years become January 1st and December 31st. An
/// ongoing marker keeps the start year and drops the end. Text without any
/// year is treated as ongoing from `today`.
pub fn parse_period(text: &str, today: NaiveDate) -> Period {
    let lower = text.to_lowercase();
    let current = ONGOING_MARKERS.iter().any(|marker| lower.contains(marker));

    let years: Vec<i32> = YEAR
        .find_iter(text)
        .take(2)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    let Some(&start_year) = years.first() else {
        return Period::ongoing(today);
    };
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap_or(today);

    if current {
        return Period::ongoing(start);
    }

    let end_year = years.get(1).copied().unwrap_or(start_year);
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31).unwrap_or(start);
    Period::closed(start, end)
}

/// Splits `"Company l Location"` (or `"Company, Location"`) into its two halves.
pub fn split_company_location(text: &str) -> (String, String) {
    let parts: Vec<&str> = LOCATION_SEPARATOR.split(text).collect();
    if parts.len() > 1 {
        return first_and_last(&parts);
    }

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() > 1 {
        return first_and_last(&parts);
    }

    (text.trim().to_string(), String::new())
}

fn first_and_last(parts: &[&str]) -> (String, String) {
    let first = parts.first().map(|s| s.trim()).unwrap_or_default();
    let last = parts.last().map(|s| s.trim()).unwrap_or_default();
    (first.to_string(), last.to_string())
}

/// Collects the comma-separated tokens that follow a `technologies:` marker
/// in any responsibility sentence.
pub fn extract_technologies(responsibilities: &[String]) -> Vec<String> {
    let mut technologies = Vec::new();
    for sentence in responsibilities {
        let Some(clause) = TECHNOLOGY_MARKER.split(sentence).nth(1) else {
            continue;
        };
        technologies.extend(
            clause
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from),
        );
    }
    technologies
}

/// Vocabulary entries that appear verbatim in `description`.
pub fn technologies_in_description(description: &str) -> Vec<String> {
    TECHNOLOGY_VOCABULARY
        .iter()
        .filter(|tech| description.contains(*tech))
        .map(|tech| tech.to_string())
        .collect()
}

/// Every responsibility after the first, minus boilerplate.
pub fn filter_achievements(responsibilities: &[String]) -> Vec<String> {
    responsibilities
        .iter()
        .skip(1)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            !ACHIEVEMENT_FILTER_KEYWORDS
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .cloned()
        .collect()
}

pub fn service_icon(title: &str) -> ServiceIcon {
    let lower = title.to_lowercase();
    SERVICE_ICON_RULES
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, icon)| *icon)
        .unwrap_or(ServiceIcon::Code)
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn record_id(index: usize) -> String {
    (index + 1).to_string()
}

pub fn education(raw: &[RawEducation], today: NaiveDate) -> Vec<Education> {
    raw.iter()
        .enumerate()
        .map(|(index, edu)| {
            let (institution, location) = split_company_location(&edu.institution);
            Education {
                id: record_id(index),
                institution,
                degree: edu.degree.clone(),
                location,
                period: parse_period(&edu.period, today),
            }
        })
        .collect()
}

pub fn experience(raw: &[RawExperience], today: NaiveDate) -> Vec<Experience> {
    raw.iter()
        .enumerate()
        .map(|(index, exp)| {
            let (company, location) = split_company_location(&exp.company);
            Experience {
                id: record_id(index),
                title: exp.title.clone(),
                company,
                location,
                period: parse_period(&exp.period, today),
                description: exp.responsibilities.first().cloned().unwrap_or_default(),
                technologies: extract_technologies(&exp.responsibilities),
                achievements: filter_achievements(&exp.responsibilities),
            }
        })
        .collect()
}

pub fn projects(raw: &[RawProject]) -> Vec<Project> {
    raw.iter()
        .enumerate()
        .map(|(index, proj)| Project {
            id: record_id(index),
            title: proj.title.clone(),
            description: proj.description.clone(),
            short_description: truncate_chars(&proj.description, SHORT_DESCRIPTION_CHARS),
            technologies: technologies_in_description(&proj.description),
            role: PROJECT_ROLE.to_string(),
            status: ProjectStatus::Completed,
            image_url: proj.image.clone(),
            highlights: vec![proj.description.clone()],
        })
        .collect()
}

pub fn services(raw: &[RawService]) -> Vec<Service> {
    raw.iter()
        .enumerate()
        .map(|(index, svc)| {
            let features: Vec<String> = LINE_BREAK
                .split(&svc.description)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
            let description = features
                .first()
                .cloned()
                .unwrap_or_else(|| truncate_chars(&svc.description, SHORT_DESCRIPTION_CHARS));

            Service {
                id: record_id(index),
                title: svc.title.replacen(':', "", 1).trim().to_string(),
                description,
                icon: service_icon(&svc.title),
                features,
            }
        })
        .collect()
}

pub fn social_links(raw: &RawSocialLinks) -> Vec<SocialLink> {
    match raw {
        RawSocialLinks::List(entries) => entries
            .iter()
            .filter(|entry| !entry.url.trim().is_empty())
            .map(|entry| {
                let (_, fallback_icon) = known_network(&entry.name);
                let icon = if entry.icon.is_empty() {
                    fallback_icon.to_string()
                } else {
                    entry.icon.clone()
                };
                SocialLink {
                    name: entry.name.clone(),
                    url: entry.url.trim().to_string(),
                    icon,
                }
            })
            .collect(),
        RawSocialLinks::Map(map) => map
            .iter()
            .filter_map(|(key, value)| {
                let url = match value {
                    Value::String(url) => url.trim().to_string(),
                    Value::Object(fields) => fields.get("url")?.as_str()?.trim().to_string(),
                    _ => return None,
                };
                if url.is_empty() {
                    return None;
                }
                let (name, icon) = known_network(key);
                let url = if name == "Email" && !url.starts_with("mailto:") {
                    format!("mailto:{}", url)
                } else {
                    url
                };
                Some(SocialLink { name, url, icon: icon.to_string() })
            })
            .collect(),
    }
}

fn known_network(key: &str) -> (String, &'static str) {
    match key.to_lowercase().as_str() {
        "github" => ("GitHub".to_string(), "💻"),
        "linkedin" => ("LinkedIn".to_string(), "💼"),
        "email" | "mail" => ("Email".to_string(), "📧"),
        "twitter" | "x" => ("Twitter".to_string(), "🐦"),
        _ => (capitalize(key), "🔗"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn contact_info(raw: &RawContact) -> ContactInfo {
    ContactInfo {
        email: raw.email.trim().to_string(),
        phone: raw.phone.trim().to_string(),
        location: raw.location.trim().to_string(),
    }
}

pub fn personal_info(raw: &RawProfile) -> PersonalInfo {
    let info = &raw.personal_info;
    let summary = match &raw.about {
        Value::String(text) => text.trim().to_string(),
        about => first_text(about, &["description", "summary", "text"])
            .or_else(|| first_text(info, &["summary", "description"]))
            .unwrap_or_default(),
    };

    PersonalInfo {
        name: first_text(info, &["name", "fullName"]).unwrap_or_default(),
        title: first_text(info, &["title", "role", "headline"]).unwrap_or_default(),
        summary,
    }
}

fn first_text(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(*key)?.as_str())
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(String::from)
}
