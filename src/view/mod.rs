//! egui rendering of the page.
//!
//! The page is one vertical scroll area over a transparent panel, so the
//! scene shows behind it. While drawing, each section reports its rect back
//! into the [`PageLayout`], which is what the scroll tracker measures.

mod chrome;
mod sections;
pub mod theme;

use std::time::Instant;

use log::debug;

use crate::content::{ContentService, Education, Experience, PersonalInfo, Project, Service};
use crate::page::{Page, PageLayout};
use crate::scroll::ScrollTracker;
use crate::section::SectionId;
use crate::shell::{
    BackToTop, ContactForm, ContactSection, EntranceAnimation, Footer, NavBar, SectionContent,
};

pub use sections::ViewActions;

/// Scroll-area geometry observed while drawing one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

/// Fold one frame of measurements into `page` and run the tracker when the
/// offset moved. `animated` marks frames whose offset came from a smooth scroll.
/// Returns true if the tracker computed a new state.
pub fn apply_scroll(
    page: &mut PageLayout,
    tracker: &mut ScrollTracker,
    metrics: ScrollMetrics,
    animated: bool,
    now: Instant,
) -> bool {
    let previous = page.scroll_top();
    let moved = (metrics.offset - previous).abs() > f32::EPSILON;
    if moved && !animated {
        // wheel or drag wins over a running smooth scroll
        page.cancel_scroll();
    }
    page.set_metrics(
        metrics.offset,
        metrics.viewport_height,
        metrics.content_height.max(metrics.viewport_height),
    );

    if moved {
        tracker.on_scroll(page, now)
    } else {
        tracker.poll(page, now)
    }
}

/// Every piece of page state the view draws
pub struct PortfolioView {
    hero: SectionContent<PersonalInfo>,
    about: SectionContent<Vec<Education>>,
    experience: SectionContent<Vec<Experience>>,
    projects: SectionContent<Vec<Project>>,
    services: SectionContent<Vec<Service>>,
    contact: ContactSection,
    contact_entrance: EntranceAnimation,
    form: ContactForm,
    navbar: NavBar,
    footer: Footer,
    back_to_top: BackToTop,
    blockers: Vec<egui::Rect>,
}

impl PortfolioView {
    /// Kicks off every content load; each section fills in as its load lands
    pub fn new(content: &ContentService, tracker: &ScrollTracker, back_to_top_threshold: f32) -> Self {
        debug!("loading content from {}", content.location());
        let contact = ContactSection::new(content.spawn_social_links(), content.spawn_contact_info());
        let mut footer = Footer::new();
        footer.set_social_links(contact.social_links().to_vec());

        Self {
            hero: SectionContent::new(SectionId::Hero, content.spawn_personal_info())
                .with_entrance(EntranceAnimation::new(1.0).with_trigger_line(1.0)),
            about: SectionContent::new(SectionId::About, content.spawn_education()),
            experience: SectionContent::new(SectionId::Experience, content.spawn_experience()),
            projects: SectionContent::new(SectionId::Projects, content.spawn_projects()),
            services: SectionContent::new(SectionId::Services, content.spawn_services()),
            contact,
            contact_entrance: EntranceAnimation::default(),
            form: ContactForm::new(),
            navbar: NavBar::new(tracker),
            footer,
            back_to_top: BackToTop::new(back_to_top_threshold),
            blockers: Vec::new(),
        }
    }

    /// Per-frame state update, before drawing
    pub fn update(&mut self, page: &PageLayout, delta: f32, now: Instant) {
        self.hero.update(page, delta);
        self.about.update(page, delta);
        self.experience.update(page, delta);
        self.projects.update(page, delta);
        self.services.update(page, delta);

        if self.contact.poll() {
            self.footer
                .set_social_links(self.contact.social_links().to_vec());
        }
        self.contact_entrance
            .observe(page.anchor_rect(SectionId::Contact), page.viewport_height());
        self.contact_entrance.tick(delta);

        self.navbar.sync(page.scroll_top());
        self.back_to_top.update(page.scroll_top());
        self.form.tick(now);
    }

    /// Draw the page, measure it into `page`, and apply clicks
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        page: &mut PageLayout,
        tracker: &mut ScrollTracker,
        now: Instant,
    ) {
        let animated_offset = page.advance_scroll();
        let mut actions = ViewActions::default();
        let mut anchors: [Option<(f32, f32)>; 6] = [None; 6];
        let mut metrics = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let viewport_height = ui.available_height();
                let mut area = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false]);
                if let Some(offset) = animated_offset {
                    area = area.vertical_scroll_offset(offset);
                }

                let output = area.show(ui, |ui| {
                    let origin = ui.cursor().min.y;
                    let mut record = |section: SectionId, rect: egui::Rect| {
                        anchors[section.index()] = Some((rect.min.y - origin, rect.height()));
                    };

                    let rect = sections::section_block(
                        ui,
                        viewport_height,
                        self.hero.entrance(),
                        |ui| sections::hero(ui, self.hero.value(), &mut actions),
                    );
                    record(SectionId::Hero, rect);

                    let summary = self.hero.value().summary.clone();
                    let rect = sections::section_block(ui, 0.0, self.about.entrance(), |ui| {
                        sections::about(
                            ui,
                            &summary,
                            self.about.items(),
                            self.about.is_loaded(),
                            &mut actions,
                        )
                    });
                    record(SectionId::About, rect);

                    let rect = sections::section_block(ui, 0.0, self.experience.entrance(), |ui| {
                        sections::experience(
                            ui,
                            self.experience.items(),
                            self.experience.is_loaded(),
                            &mut actions,
                        )
                    });
                    record(SectionId::Experience, rect);

                    let rect = sections::section_block(ui, 0.0, self.projects.entrance(), |ui| {
                        sections::projects(
                            ui,
                            self.projects.items(),
                            self.projects.is_loaded(),
                            &mut actions,
                        )
                    });
                    record(SectionId::Projects, rect);

                    let rect = sections::section_block(ui, 0.0, self.services.entrance(), |ui| {
                        sections::services(
                            ui,
                            self.services.items(),
                            self.services.is_loaded(),
                            &mut actions,
                        )
                    });
                    record(SectionId::Services, rect);

                    let rect = sections::section_block(ui, 0.0, &self.contact_entrance, |ui| {
                        sections::contact(
                            ui,
                            self.contact.info(),
                            self.contact.social_links(),
                            &mut self.form,
                            &mut actions,
                        )
                    });
                    record(SectionId::Contact, rect);

                    let owner = self.hero.value().name.clone();
                    sections::footer(
                        ui,
                        &self.footer.copyright(&owner),
                        self.footer.links(),
                        self.footer.social_links(),
                        &mut actions,
                    );
                });

                metrics = Some(ScrollMetrics {
                    offset: output.state.offset.y,
                    viewport_height: output.inner_rect.height(),
                    content_height: output.content_size.y,
                });
            });

        chrome::navbar(ctx, &self.navbar, &mut actions);
        chrome::back_to_top(ctx, &self.back_to_top, &mut actions);

        for section in SectionId::ALL {
            match anchors[section.index()] {
                Some((top, height)) => page.set_anchor(section, top, height),
                None => page.remove_anchor(section),
            }
        }
        if let Some(metrics) = metrics {
            apply_scroll(page, tracker, metrics, animated_offset.is_some(), now);
        }

        self.apply_actions(actions, page, tracker, now);
    }

    fn apply_actions(
        &mut self,
        actions: ViewActions,
        page: &mut PageLayout,
        tracker: &ScrollTracker,
        now: Instant,
    ) {
        for section in actions.nav_clicks {
            self.navbar.click(tracker, page, section);
        }
        for section in actions.footer_clicks {
            self.footer.click(tracker, page, section);
        }
        for section in actions.navigate {
            tracker.navigate_to(page, section);
        }
        if actions.back_to_top {
            self.back_to_top.click(tracker, page);
        }
        if actions.submit_form {
            self.form.submit(now);
        }
        self.blockers = actions.blockers;
    }

    /// True when `pos` (logical points) is over a card or control drawn last frame
    pub fn blocks_pointer(&self, pos: egui::Pos2) -> bool {
        self.blockers.iter().any(|rect| rect.contains(pos))
    }

    pub fn navbar(&self) -> &NavBar {
        &self.navbar
    }

    /// Stop following the tracker
    pub fn dispose(&self) {
        self.navbar.dispose();
    }
}
