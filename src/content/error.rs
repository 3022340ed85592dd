use std::fmt;

/// Failure of a content load, surfaced to the single caller that asked
#[derive(Debug)]
pub enum ContentError {
    /// Document unreachable, unreadable or answered with a non-2xx status
    Fetch { location: String, reason: String },
    /// Document reachable but not a usable content export
    Parse { reason: String },
}

impl ContentError {
    pub fn fetch(location: impl Into<String>, reason: impl fmt::Display) -> Self {
        ContentError::Fetch {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(reason: impl fmt::Display) -> Self {
        ContentError::Parse {
            reason: reason.to_string(),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, ContentError::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ContentError::Parse { .. })
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Fetch { location, reason } => {
                write!(f, "[fetch] {}: {}", location, reason)
            }
            ContentError::Parse { reason } => write!(f, "[parse] {}", reason),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::fetch("<io>", err)
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        let location = err
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "<http>".to_string());
        ContentError::fetch(location, err)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::parse(err)
    }
}
