use std::sync::mpsc;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::error::ContentError;
use super::model::{ContactInfo, Education, Experience, PersonalInfo, Project, Service, SocialLink};
use super::parse;
use super::raw::RawProfile;
use super::source::ContentSource;

/// Fetches the content document and projects it into typed records.
///
/// Nothing is cached: every call re-fetches the document, and a failure is
/// returned to that caller only.
#[derive(Clone)]
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    today: Option<NaiveDate>,
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            today: None,
        }
    }

    /// Pin the date used for periods without a year
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn location(&self) -> &str {
        self.source.location()
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn load(&self) -> Result<RawProfile, ContentError> {
        let body = self.source.fetch()?;
        let profile = serde_json::from_str(&body)?;
        log::debug!("Fetched content document from {}", self.source.location());
        Ok(profile)
    }

    pub fn education(&self) -> Result<Vec<Education>, ContentError> {
        let raw = self.load()?;
        Ok(parse::education(&raw.education, self.today()))
    }

    pub fn experience(&self) -> Result<Vec<Experience>, ContentError> {
        let raw = self.load()?;
        Ok(parse::experience(&raw.experience, self.today()))
    }

    pub fn projects(&self) -> Result<Vec<Project>, ContentError> {
        let raw = self.load()?;
        Ok(parse::projects(&raw.portfolio.projects))
    }

    pub fn services(&self) -> Result<Vec<Service>, ContentError> {
        let raw = self.load()?;
        Ok(parse::services(&raw.services.services))
    }

    pub fn social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        let raw = self.load()?;
        Ok(parse::social_links(&raw.social_links))
    }

    pub fn contact_info(&self) -> Result<ContactInfo, ContentError> {
        let raw = self.load()?;
        Ok(parse::contact_info(&raw.contact))
    }

    pub fn personal_info(&self) -> Result<PersonalInfo, ContentError> {
        let raw = self.load()?;
        Ok(parse::personal_info(&raw))
    }

    /// Run `op` against a clone of this service on a background thread.
    pub fn spawn<T, F>(&self, op: F) -> PendingLoad<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContentService) -> Result<T, ContentError> + Send + 'static,
    {
        let service = self.clone();
        PendingLoad::spawn(move || op(&service))
    }

    pub fn spawn_education(&self) -> PendingLoad<Vec<Education>> {
        self.spawn(ContentService::education)
    }

    pub fn spawn_experience(&self) -> PendingLoad<Vec<Experience>> {
        self.spawn(ContentService::experience)
    }

    pub fn spawn_projects(&self) -> PendingLoad<Vec<Project>> {
        self.spawn(ContentService::projects)
    }

    pub fn spawn_services(&self) -> PendingLoad<Vec<Service>> {
        self.spawn(ContentService::services)
    }

    pub fn spawn_social_links(&self) -> PendingLoad<Vec<SocialLink>> {
        self.spawn(ContentService::social_links)
    }

    pub fn spawn_contact_info(&self) -> PendingLoad<ContactInfo> {
        self.spawn(ContentService::contact_info)
    }

    pub fn spawn_personal_info(&self) -> PendingLoad<PersonalInfo> {
        self.spawn(ContentService::personal_info)
    }
}

/// A one-shot background load. The result is handed out at most once.
pub struct PendingLoad<T> {
    rx: Option<mpsc::Receiver<Result<T, ContentError>>>,
}

impl<T: Send + 'static> PendingLoad<T> {
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<T, ContentError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(load());
        });
        Self { rx: Some(rx) }
    }

    /// Already-resolved load
    pub fn ready(result: Result<T, ContentError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx: Some(rx) }
    }
}

impl<T> PendingLoad<T> {
    /// Non-blocking poll. Returns the result once, then `None` forever.
    pub fn try_take(&mut self) -> Option<Result<T, ContentError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.rx = None;
                Some(Err(ContentError::fetch("<loader>", "load thread exited")))
            }
        }
    }

    /// Block until the result arrives. `None` if it was already taken.
    pub fn wait(&mut self) -> Option<Result<T, ContentError>> {
        let rx = self.rx.take()?;
        Some(
            rx.recv()
                .unwrap_or_else(|_| Err(ContentError::fetch("<loader>", "load thread exited"))),
        )
    }

    pub fn is_done(&self) -> bool {
        self.rx.is_none()
    }
}
