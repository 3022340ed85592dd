use egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub const ACCENT_BLUE: Color32 = hex(0x3b82f6);
pub const ACCENT_PURPLE: Color32 = hex(0x8b5cf6);
pub const ACCENT_PINK: Color32 = hex(0xec4899);
pub const TEXT: Color32 = hex(0xe5e7eb);
pub const TEXT_MUTED: Color32 = hex(0x9ca3af);
pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(17, 24, 39, 210);
pub const CARD_STROKE: Color32 = hex(0x1f2937);

pub const SECTION_PADDING: f32 = 96.0;
pub const CONTENT_WIDTH: f32 = 960.0;
pub const HEADING_SIZE: f32 = 36.0;
pub const HERO_SIZE: f32 = 56.0;

pub const fn hex(value: u32) -> Color32 {
    Color32::from_rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Dark visuals with transparent panels so the scene shows through
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = CARD_FILL;
    visuals.override_text_color = Some(TEXT);
    visuals.hyperlink_color = ACCENT_BLUE;
    visuals.selection.bg_fill = ACCENT_BLUE;
    ctx.set_visuals(visuals);
}

pub fn card() -> Frame {
    Frame::new()
        .fill(CARD_FILL)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::same(20))
}

pub fn tag() -> Frame {
    Frame::new()
        .fill(ACCENT_BLUE.gamma_multiply(0.2))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 3))
}
