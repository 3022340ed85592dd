use std::sync::Arc;
use std::time::{Duration, Instant};

use dev_portfolio::content::{ContentError, ContentService, InlineSource, PendingLoad, SocialLink};
use dev_portfolio::page::{Page, PageLayout};
use dev_portfolio::shell::{
    fallback_social_links, BackToTop, ContactForm, ContactSection, Footer, FormStatus, NavBar,
    SectionContent, FORM_RESET_DELAY,
};
use dev_portfolio::{ScrollTracker, SectionId};

const DOC: &str = r#"{
    "experience": [
        {"title": "Dev", "period": "2020 - 2023", "company": "Acme l Remote", "responsibilities": ["Built things"]}
    ],
    "socialLinks": [
        {"name": "GitHub", "url": "https://github.com/someone", "icon": ""},
        {"name": "Blog", "url": "", "icon": "📝"}
    ],
    "contact": {"email": "someone@example.com", "phone": "", "location": "Remote"}
}"#;

fn page() -> PageLayout {
    PageLayout::stacked(600.0, &[600.0; 6])
}

fn service() -> ContentService {
    ContentService::new(Arc::new(InlineSource::new(DOC)))
}

#[cfg(test)]
mod shell_tests {
    use super::*;

    #[test]
    fn test_navbar_follows_scroll() {
        let mut page = page();
        let mut tracker = ScrollTracker::default();
        let mut navbar = NavBar::new(&tracker);

        assert!(!navbar.sync(page.scroll_top()));
        assert_eq!(navbar.active(), SectionId::Hero);
        assert!(!navbar.is_scrolled());

        page.set_scroll_top(1200.0);
        tracker.recompute(&page);

        assert!(navbar.sync(page.scroll_top()));
        assert!(navbar.is_active(SectionId::Experience));
        assert!(navbar.is_scrolled());
        assert!(!navbar.items().contains(&SectionId::Hero));
    }

    #[test]
    fn test_disposed_navbar_stops_following() {
        let mut page = page();
        let mut tracker = ScrollTracker::default();
        let mut navbar = NavBar::new(&tracker);
        navbar.dispose();

        page.set_scroll_top(2400.0);
        tracker.recompute(&page);

        assert!(!navbar.sync(page.scroll_top()));
        assert_eq!(navbar.active(), SectionId::Hero);
    }

    #[test]
    fn test_navbar_click_scrolls_to_section() {
        let mut page = page();
        let tracker = ScrollTracker::default();
        let navbar = NavBar::new(&tracker);

        navbar.click(&tracker, &mut page, SectionId::Contact);
        assert_eq!(page.scroll_target(), Some(3000.0));
    }

    #[test]
    fn test_back_to_top_visibility_and_click() {
        let mut page = page();
        let tracker = ScrollTracker::default();
        let mut button = BackToTop::default();

        assert!(!button.update(400.0));
        assert!(!button.is_visible());
        assert!(button.update(401.0));
        assert!(button.is_visible());

        page.set_scroll_top(2000.0);
        assert_eq!(button.click(&tracker, &mut page), Some(0.0));
        while page.advance_scroll().is_some() {}
        assert_eq!(page.scroll_top(), 0.0);

        assert!(button.update(page.scroll_top()));
        assert!(!button.is_visible());
    }

    #[test]
    fn test_footer_links_cover_every_section() {
        let footer = Footer::for_year(2025);
        let links: Vec<_> = footer.links().collect();

        assert_eq!(links.len(), 6);
        assert_eq!(links[0], (SectionId::Hero, "Home"));
        assert_eq!(footer.copyright("Alex Martin"), "© 2025 Alex Martin");
        assert_eq!(footer.copyright(""), "© 2025");
    }

    #[test]
    fn test_footer_click_navigates() {
        let mut page = page();
        let tracker = ScrollTracker::default();
        Footer::for_year(2025).click(&tracker, &mut page, SectionId::Projects);
        assert_eq!(page.scroll_target(), Some(1800.0));
    }

    #[test]
    fn test_section_loads_and_animates_in_view() {
        let mut page = page();
        let mut experience =
            SectionContent::new(SectionId::Experience, service().spawn_experience());

        // wait for the loader thread
        let deadline = Instant::now() + Duration::from_secs(5);
        while !experience.poll() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(experience.is_loaded());
        assert_eq!(experience.items()[0].company, "Acme");

        // below the fold: nothing plays
        experience.update(&page, 0.1);
        assert!(!experience.entrance().has_started());

        page.set_scroll_top(900.0);
        experience.update(&page, 0.0);
        assert!(experience.entrance().is_playing());
        assert_eq!(experience.entrance().opacity(), 0.0);

        experience.update(&page, 0.4);
        let halfway = experience.entrance().opacity();
        assert!(halfway > 0.5 && halfway < 1.0);

        experience.update(&page, 0.5);
        assert!(experience.entrance().is_finished());
        assert_eq!(experience.entrance().offset_y(), 0.0);
    }

    #[test]
    fn test_failed_section_stays_empty() {
        let mut projects: SectionContent<Vec<dev_portfolio::content::Project>> =
            SectionContent::new(
                SectionId::Projects,
                PendingLoad::ready(Err(ContentError::fetch("http://down.invalid", "timeout"))),
            );

        assert!(!projects.poll());
        assert!(!projects.is_loaded());
        assert!(!projects.is_pending());
        assert!(projects.items().is_empty());
    }

    #[test]
    fn test_contact_section_replaces_fallback_links() {
        let content = service();
        let mut contact = ContactSection::new(
            PendingLoad::ready(content.social_links()),
            PendingLoad::ready(content.contact_info()),
        );
        assert_eq!(contact.social_links(), fallback_social_links().as_slice());

        assert!(contact.poll());
        assert_eq!(contact.social_links().len(), 1);
        assert_eq!(contact.social_links()[0].name, "GitHub");
        assert_eq!(contact.social_links()[0].icon, "💻");
        assert_eq!(contact.info().email, "someone@example.com");
        assert_eq!(contact.info().location, "Remote");
    }

    #[test]
    fn test_contact_section_keeps_fallback_on_error() {
        let mut contact = ContactSection::new(
            PendingLoad::ready(Err(ContentError::fetch("<inline>", "unreachable"))),
            PendingLoad::ready(Err(ContentError::fetch("<inline>", "unreachable"))),
        );

        assert!(!contact.poll());
        assert_eq!(contact.social_links(), fallback_social_links().as_slice());
        assert_eq!(contact.info().email, "");
    }

    #[test]
    fn test_contact_section_keeps_fallback_when_empty() {
        let mut contact = ContactSection::new(
            PendingLoad::ready(Ok(Vec::<SocialLink>::new())),
            PendingLoad::ready(Ok(Default::default())),
        );

        assert!(!contact.poll());
        assert_eq!(contact.social_links().len(), 3);
    }

    #[test]
    fn test_contact_form_lifecycle() {
        let mut form = ContactForm::new();
        let start = Instant::now();

        assert_eq!(form.submit(start), FormStatus::Invalid);
        assert!(form.has_error());

        form.name = "Sam".to_string();
        form.email = "sam@example".to_string();
        form.message = "Hello".to_string();
        assert_eq!(form.submit(start), FormStatus::Invalid);

        form.email = "sam@example.com".to_string();
        assert_eq!(form.submit(start), FormStatus::Submitted);
        assert!(form.is_submitted());

        assert!(!form.tick(start + Duration::from_secs(1)));
        assert_eq!(form.name, "Sam");

        assert!(form.tick(start + FORM_RESET_DELAY));
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }
}
