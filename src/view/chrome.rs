use egui::{Align2, Color32, RichText};

use super::sections::ViewActions;
use super::theme::{self, ACCENT_BLUE, TEXT};
use crate::section::SectionId;
use crate::shell::{BackToTop, NavBar};

/// Floating navbar pinned to the top of the window
pub fn navbar(ctx: &egui::Context, navbar: &NavBar, actions: &mut ViewActions) {
    let fill = if navbar.is_scrolled() {
        theme::CARD_FILL
    } else {
        Color32::TRANSPARENT
    };

    let area = egui::Area::new(egui::Id::new("navbar"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::symmetric(16, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let home = ui.add(
                            egui::Button::new(RichText::new("◆").color(ACCENT_BLUE)).frame(false),
                        );
                        if home.clicked() {
                            actions.nav_clicks.push(SectionId::Hero);
                        }
                        for &section in navbar.items() {
                            let color = if navbar.is_active(section) { ACCENT_BLUE } else { TEXT };
                            let item = ui.add(
                                egui::Button::new(RichText::new(section.label()).color(color))
                                    .frame(false),
                            );
                            if item.clicked() {
                                actions.nav_clicks.push(section);
                            }
                        }
                    });
                });
        });
    actions.blockers.push(area.response.rect);
}

pub fn back_to_top(ctx: &egui::Context, button: &BackToTop, actions: &mut ViewActions) {
    if !button.is_visible() {
        return;
    }
    let area = egui::Area::new(egui::Id::new("back_to_top"))
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .show(ctx, |ui| {
            let response = ui.button(RichText::new("↑").size(22.0));
            if response.clicked() {
                actions.back_to_top = true;
            }
        });
    actions.blockers.push(area.response.rect);
}
