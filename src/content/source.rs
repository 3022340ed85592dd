use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::error::ContentError;

/// Where the content document comes from
pub trait ContentSource: Send + Sync {
    /// Human-readable location, used in errors and logs
    fn location(&self) -> &str;

    /// Fetch the raw document body
    fn fetch(&self) -> Result<String, ContentError>;
}

/// Document served over HTTP(S) (blocking).
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self, ContentError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dev-portfolio/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ContentError::fetch(url, format!("client error: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl ContentSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, ContentError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| ContentError::fetch(&self.url, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::fetch(&self.url, format!("HTTP {}", status)));
        }

        response
            .text()
            .map_err(|e| ContentError::fetch(&self.url, format!("failed to read body: {}", e)))
    }
}

/// Document on the local filesystem
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        Self { path, display }
    }
}

impl ContentSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    fn fetch(&self) -> Result<String, ContentError> {
        std::fs::read_to_string(&self.path).map_err(|e| ContentError::fetch(&self.display, e))
    }
}

/// In-memory document. Counts fetches so callers can observe re-fetching.
pub struct InlineSource {
    body: Option<String>,
    location: String,
    fetches: AtomicUsize,
}

impl InlineSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            location: "<inline>".to_string(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails, as an unreachable server would
    pub fn unreachable(location: &str) -> Self {
        Self {
            body: None,
            location: location.to_string(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ContentSource for InlineSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, ContentError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.body
            .clone()
            .ok_or_else(|| ContentError::fetch(&self.location, "unreachable"))
    }
}

/// HTTP for `http://` and `https://` locations, a file path otherwise.
pub fn source_from_location(location: &str) -> Result<Arc<dyn ContentSource>, ContentError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpSource::new(location)?))
    } else {
        Ok(Arc::new(FileSource::new(location)))
    }
}
