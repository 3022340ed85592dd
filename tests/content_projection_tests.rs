use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use dev_portfolio::content::{
    source_from_location, ContentService, FileSource, InlineSource, ProjectStatus, ServiceIcon,
};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("profile-data.json")
}

fn sample_service() -> ContentService {
    ContentService::new(Arc::new(FileSource::new(sample_path())))
        .with_today(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod content_projection_tests {
    use super::*;

    #[test]
    fn test_education_from_sample() {
        let education = sample_service().education().unwrap();
        assert_eq!(education.len(), 2);

        let master = &education[0];
        assert_eq!(master.id, "1");
        assert_eq!(master.degree, "Master Informatique");
        assert_eq!(master.institution, "Université de Lyon");
        assert_eq!(master.location, "Lyon");
        assert_eq!(master.period.start, date(2017, 1, 1));
        assert_eq!(master.period.end, Some(date(2019, 12, 31)));
        assert!(!master.period.current);

        let licence = &education[1];
        assert_eq!(licence.id, "2");
        assert_eq!(licence.institution, "Université Grenoble Alpes");
        assert_eq!(licence.location, "Grenoble");
    }

    #[test]
    fn test_ongoing_experience() {
        let experience = sample_service().experience().unwrap();
        let current = &experience[0];

        assert_eq!(current.company, "DEVOX");
        assert_eq!(current.location, "Paris");
        assert!(current.period.current);
        assert_eq!(current.period.start, date(2022, 1, 1));
        assert_eq!(current.period.end, None);
        assert_eq!(current.period.label(), "2022 - présent");
        assert_eq!(
            current.description,
            "Conception et développement d'une plateforme de réservation en ligne."
        );
        assert_eq!(
            current.technologies,
            vec!["Java", "Angular", "Docker", "PostgreSQL"]
        );
        assert_eq!(
            current.achievements,
            vec!["Mise en place d'une chaîne CI/CD pour les déploiements."]
        );
    }

    #[test]
    fn test_closed_experience() {
        let experience = sample_service().experience().unwrap();
        let past = &experience[1];

        assert_eq!(past.id, "2");
        assert_eq!(past.company, "Acme");
        assert_eq!(past.location, "Lyon");
        assert_eq!(past.period.label(), "2019 - 2021");
        assert_eq!(past.technologies, vec!["Node.js", "Express", "MongoDB"]);
        assert_eq!(past.achievements, vec!["Optimisation des requêtes SQL critiques."]);
    }

    #[test]
    fn test_projects_from_sample() {
        let projects = sample_service().projects().unwrap();
        assert_eq!(projects.len(), 2);

        let booking = &projects[0];
        assert_eq!(booking.title, "Plateforme de réservation");
        assert_eq!(booking.technologies, vec!["Spring Boot", "Angular"]);
        assert_eq!(booking.short_description.chars().count(), 100);
        assert!(booking.description.starts_with(&booking.short_description));
        assert_eq!(booking.role, "Full-stack Developer");
        assert_eq!(booking.status, ProjectStatus::Completed);
        assert_eq!(booking.image_url, "images/booking.png");
        assert_eq!(booking.highlights, vec![booking.description.clone()]);

        let dashboard = &projects[1];
        assert_eq!(dashboard.technologies, vec!["React", "Node.js"]);
        assert_eq!(dashboard.short_description, dashboard.description);
    }

    #[test]
    fn test_services_from_sample() {
        let services = sample_service().services().unwrap();
        assert_eq!(services.len(), 3);

        assert_eq!(services[0].title, "Développement Front-end");
        assert_eq!(services[0].icon, ServiceIcon::Web);
        assert_eq!(services[0].description, "Interfaces web réactives");
        assert_eq!(services[0].features.len(), 3);

        assert_eq!(services[1].icon, ServiceIcon::Server);
        assert_eq!(
            services[1].features,
            vec!["API REST et GraphQL", "Architecture microservices"]
        );

        assert_eq!(services[2].icon, ServiceIcon::Code);
        assert_eq!(services[2].features.len(), 1);
    }

    #[test]
    fn test_social_links_from_map() {
        let links = sample_service().social_links().unwrap();
        assert_eq!(links.len(), 3);

        let email = links.iter().find(|l| l.name == "Email").unwrap();
        assert_eq!(email.url, "mailto:alex.martin@example.com");
        assert_eq!(email.icon, "📧");

        let github = links.iter().find(|l| l.name == "GitHub").unwrap();
        assert_eq!(github.url, "https://github.com/alexmartin");
    }

    #[test]
    fn test_contact_and_personal_info() {
        let service = sample_service();

        let contact = service.contact_info().unwrap();
        assert_eq!(contact.email, "alex.martin@example.com");
        assert_eq!(contact.location, "Paris, France");

        let info = service.personal_info().unwrap();
        assert_eq!(info.name, "Alex Martin");
        assert_eq!(info.title, "Développeur Full-stack");
        assert!(info.summary.starts_with("Développeur full-stack passionné"));
    }

    #[test]
    fn test_period_without_year_uses_today() {
        let doc = r#"{"education": [{"degree": "Bootcamp", "period": "en cours", "institution": "School"}]}"#;
        let service = ContentService::new(Arc::new(InlineSource::new(doc)))
            .with_today(date(2024, 3, 15));

        let education = service.education().unwrap();
        assert_eq!(education[0].period.start, date(2024, 3, 15));
        assert!(education[0].period.current);
        assert_eq!(education[0].institution, "School");
        assert_eq!(education[0].location, "");
    }

    #[test]
    fn test_missing_collections_are_empty() {
        let service = ContentService::new(Arc::new(InlineSource::new("{}")));

        assert!(service.education().unwrap().is_empty());
        assert!(service.experience().unwrap().is_empty());
        assert!(service.projects().unwrap().is_empty());
        assert!(service.services().unwrap().is_empty());
        assert!(service.social_links().unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_source_fails_every_call() {
        let source = Arc::new(InlineSource::unreachable("http://offline.invalid/profile.json"));
        let service = ContentService::new(source.clone());

        let err = service.projects().unwrap_err();
        assert!(err.is_fetch());
        assert!(err.to_string().contains("offline.invalid"));

        assert!(service.services().is_err());
        assert_eq!(source.fetch_count(), 2);
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let service = ContentService::new(Arc::new(InlineSource::new("{ not json")));
        assert!(service.education().unwrap_err().is_parse());
    }

    #[test]
    fn test_missing_file_is_fetch_error() {
        let source = source_from_location("/definitely/not/here/profile-data.json").unwrap();
        let err = ContentService::new(source).contact_info().unwrap_err();
        assert!(err.is_fetch());
    }

    #[test]
    fn test_background_load_delivers_once() {
        let mut pending = sample_service().spawn_projects();

        let projects = pending.wait().unwrap().unwrap();
        assert_eq!(projects.len(), 2);
        assert!(pending.is_done());
        assert!(pending.try_take().is_none());
    }
}
