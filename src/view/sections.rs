use egui::{Rect, RichText, Ui};

use super::theme::{self, ACCENT_PINK, ACCENT_PURPLE, TEXT_MUTED};
use crate::content::{
    ContactInfo, Education, Experience, PersonalInfo, Project, Service, SocialLink,
};
use crate::section::SectionId;
use crate::shell::{ContactForm, EntranceAnimation, FormStatus, DEFAULT_ENTRANCE_OFFSET};

/// What the drawing code asks the host to do after the frame
#[derive(Debug, Default)]
pub struct ViewActions {
    /// Screen rects of cards and controls; pointer events there never reach the scene
    pub blockers: Vec<Rect>,
    /// In-page buttons (hero call-to-actions)
    pub navigate: Vec<SectionId>,
    pub nav_clicks: Vec<SectionId>,
    pub footer_clicks: Vec<SectionId>,
    pub back_to_top: bool,
    pub submit_form: bool,
}

impl ViewActions {
    fn block(&mut self, rect: Rect) {
        self.blockers.push(rect);
    }
}

/// Centered, padded, animated block. Returns the full section rect.
pub fn section_block(
    ui: &mut Ui,
    min_height: f32,
    entrance: &EntranceAnimation,
    add_contents: impl FnOnce(&mut Ui),
) -> Rect {
    let top = ui.cursor().min.y;
    let full_width = ui.available_width();
    let width = full_width.min(theme::CONTENT_WIDTH);
    let margin = ((full_width - width) * 0.5).max(0.0);
    let offset = entrance.offset_y().clamp(0.0, DEFAULT_ENTRANCE_OFFSET);

    ui.scope(|ui| {
        ui.set_opacity(entrance.opacity());
        ui.add_space(theme::SECTION_PADDING + offset);
        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(width);
                add_contents(ui);
            });
        });
        ui.add_space(theme::SECTION_PADDING + DEFAULT_ENTRANCE_OFFSET - offset);
    });

    let drawn = ui.cursor().min.y - top;
    if drawn < min_height {
        ui.add_space(min_height - drawn);
    }
    let bottom = top + drawn.max(min_height);
    Rect::from_min_max(
        egui::pos2(ui.max_rect().left(), top),
        egui::pos2(ui.max_rect().right(), bottom),
    )
}

fn heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.label(RichText::new(title).size(theme::HEADING_SIZE).strong());
    if !subtitle.is_empty() {
        ui.label(RichText::new(subtitle).color(TEXT_MUTED));
    }
    ui.add_space(24.0);
}

fn tags(ui: &mut Ui, items: &[String]) {
    if items.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for item in items {
            theme::tag().show(ui, |ui| {
                ui.label(RichText::new(item).size(12.0));
            });
        }
    });
}

fn loading(ui: &mut Ui, loaded: bool) {
    let text = if loaded { "Nothing to show yet." } else { "Loading…" };
    ui.label(RichText::new(text).color(TEXT_MUTED));
}

pub fn hero(ui: &mut Ui, info: &PersonalInfo, actions: &mut ViewActions) {
    let name = if info.name.is_empty() {
        "Developer Portfolio"
    } else {
        info.name.as_str()
    };
    ui.label(RichText::new(name).size(theme::HERO_SIZE).strong());
    if !info.title.is_empty() {
        ui.label(RichText::new(&info.title).size(24.0).color(ACCENT_PURPLE));
    }
    ui.add_space(32.0);
    ui.horizontal(|ui| {
        let projects = ui.button(RichText::new("View my work").size(16.0));
        actions.block(projects.rect);
        if projects.clicked() {
            actions.navigate.push(SectionId::Projects);
        }
        let contact = ui.button(RichText::new("Get in touch").size(16.0));
        actions.block(contact.rect);
        if contact.clicked() {
            actions.navigate.push(SectionId::Contact);
        }
    });
}

pub fn about(ui: &mut Ui, summary: &str, education: &[Education], loaded: bool, actions: &mut ViewActions) {
    heading(ui, "About", summary);
    ui.label(RichText::new("Education").size(22.0).color(ACCENT_PURPLE));
    ui.add_space(12.0);
    if education.is_empty() {
        loading(ui, loaded);
        return;
    }
    for entry in education {
        let card = theme::card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&entry.degree).size(18.0).strong());
            ui.label(&entry.institution);
            ui.horizontal(|ui| {
                ui.label(RichText::new(entry.period.label()).color(TEXT_MUTED));
                if !entry.location.is_empty() {
                    ui.label(RichText::new(format!("· {}", entry.location)).color(TEXT_MUTED));
                }
            });
        });
        actions.block(card.response.rect);
        ui.add_space(12.0);
    }
}

pub fn experience(ui: &mut Ui, records: &[Experience], loaded: bool, actions: &mut ViewActions) {
    heading(ui, "Experience", "Where I have worked");
    if records.is_empty() {
        loading(ui, loaded);
        return;
    }
    for record in records {
        let card = theme::card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&record.title).size(20.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let color = if record.period.current { ACCENT_PINK } else { TEXT_MUTED };
                    ui.label(RichText::new(record.period.label()).color(color));
                });
            });
            let company = if record.location.is_empty() {
                record.company.clone()
            } else {
                format!("{} · {}", record.company, record.location)
            };
            ui.label(RichText::new(company).color(ACCENT_PURPLE));
            if !record.description.is_empty() {
                ui.add_space(8.0);
                ui.label(&record.description);
            }
            for achievement in &record.achievements {
                ui.label(format!("• {}", achievement));
            }
            ui.add_space(8.0);
            tags(ui, &record.technologies);
        });
        actions.block(card.response.rect);
        ui.add_space(16.0);
    }
}

pub fn projects(ui: &mut Ui, records: &[Project], loaded: bool, actions: &mut ViewActions) {
    heading(ui, "Projects", "Selected work");
    if records.is_empty() {
        loading(ui, loaded);
        return;
    }
    ui.horizontal_wrapped(|ui| {
        let width = ((ui.available_width() - 16.0) * 0.5).max(240.0);
        for project in records {
            let card = theme::card().show(ui, |ui| {
                ui.set_width(width - 40.0);
                ui.label(RichText::new(&project.title).size(18.0).strong());
                ui.label(RichText::new(&project.role).size(12.0).color(TEXT_MUTED));
                ui.add_space(6.0);
                ui.label(&project.short_description);
                ui.add_space(6.0);
                tags(ui, &project.technologies);
            });
            actions.block(card.response.rect);
        }
    });
}

pub fn services(ui: &mut Ui, records: &[Service], loaded: bool, actions: &mut ViewActions) {
    heading(ui, "Services", "What I can do for you");
    if records.is_empty() {
        loading(ui, loaded);
        return;
    }
    ui.horizontal_wrapped(|ui| {
        let width = ((ui.available_width() - 32.0) / 3.0).max(220.0);
        for service in records {
            let card = theme::card().show(ui, |ui| {
                ui.set_width(width - 40.0);
                ui.label(RichText::new(service.icon.glyph()).size(28.0));
                ui.label(RichText::new(&service.title).size(18.0).strong());
                ui.add_space(6.0);
                ui.label(RichText::new(&service.description).size(13.0));
                // the first feature doubles as the description
                for feature in service.features.iter().skip(1) {
                    ui.label(RichText::new(format!("• {}", feature)).size(13.0));
                }
            });
            actions.block(card.response.rect);
        }
    });
}

pub fn contact(
    ui: &mut Ui,
    info: &ContactInfo,
    links: &[SocialLink],
    form: &mut ContactForm,
    actions: &mut ViewActions,
) {
    heading(ui, "Contact", "Let's build something together");

    let card = theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        match form.status() {
            FormStatus::Submitted => {
                ui.label(RichText::new("Thanks! Your message has been sent.").color(ACCENT_PURPLE));
            }
            status => {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.label("Email");
                ui.text_edit_singleline(&mut form.email);
                ui.label("Message");
                ui.text_edit_multiline(&mut form.message);
                if status == FormStatus::Invalid {
                    ui.label(
                        RichText::new("Please fill in every field with a valid email.")
                            .color(ACCENT_PINK),
                    );
                }
                if ui.button("Send").clicked() {
                    actions.submit_form = true;
                }
            }
        }
    });
    actions.block(card.response.rect);
    ui.add_space(16.0);

    for line in [&info.email, &info.phone, &info.location] {
        if !line.is_empty() {
            ui.label(RichText::new(line.as_str()).color(TEXT_MUTED));
        }
    }
    ui.add_space(8.0);
    social_links(ui, links, actions);
}

pub fn social_links(ui: &mut Ui, links: &[SocialLink], actions: &mut ViewActions) {
    ui.horizontal_wrapped(|ui| {
        for link in links {
            let response = ui.hyperlink_to(format!("{} {}", link.icon, link.name), &link.url);
            actions.block(response.rect);
        }
    });
}

pub fn footer(
    ui: &mut Ui,
    copyright: &str,
    links: impl Iterator<Item = (SectionId, &'static str)>,
    social: &[SocialLink],
    actions: &mut ViewActions,
) {
    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.horizontal_wrapped(|ui| {
            for (section, label) in links {
                let response = ui.add(egui::Button::new(label).frame(false));
                actions.block(response.rect);
                if response.clicked() {
                    actions.footer_clicks.push(section);
                }
            }
        });
        social_links(ui, social, actions);
        ui.label(RichText::new(copyright).size(12.0).color(TEXT_MUTED));
    });
    ui.add_space(24.0);
}
