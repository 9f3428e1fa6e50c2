//! Dashboard card frames

use egui::text::LayoutJob;
use egui::{
    Color32, FontId, Frame, Id, InnerResponse, Rect, Response, RichText, Rounding, Sense, Stroke,
    TextFormat, Ui,
};

use crate::theme::{self, faded, mix};

const CARD_ROUNDING: f32 = 24.0;

/// Plain rounded card filling the available width
pub fn card<R>(ui: &mut Ui, fill: Color32, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::none()
        .fill(fill)
        .rounding(Rounding::same(CARD_ROUNDING))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

/// Card that reacts to hover and clicks as a whole
///
/// The returned response senses clicks over the full card rect; buttons
/// inside the card still take their own clicks first.
pub fn clickable_card<R>(
    ui: &mut Ui,
    id_source: impl std::hash::Hash,
    fill: Color32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let InnerResponse { inner, response } = card(ui, fill, add_contents);
    let response = ui.interact(response.rect, Id::new(id_source), Sense::click());
    if response.hovered() {
        highlight(ui, response.rect);
    }
    InnerResponse::new(inner, response.on_hover_cursor(egui::CursorIcon::PointingHand))
}

fn highlight(ui: &Ui, rect: Rect) {
    ui.painter().rect_stroke(
        rect,
        Rounding::same(CARD_ROUNDING),
        Stroke::new(1.5, faded(theme::PURPLE, 0.8)),
    );
}

/// Title row with a leading icon
pub fn card_heading(ui: &mut Ui, icon: &str, title: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).size(18.0).color(theme::PURPLE));
        ui.label(RichText::new(title).size(18.0).strong());
    });
}

/// Heading shaded from purple to orange, one colour per character
pub fn gradient_heading(ui: &mut Ui, text: &str, size: f32) -> Response {
    let steps = text.chars().count().saturating_sub(1).max(1) as f32;
    let mut job = LayoutJob::default();
    for (i, ch) in text.chars().enumerate() {
        job.append(
            ch.encode_utf8(&mut [0; 4]),
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color: mix(theme::PURPLE, theme::ORANGE, i as f32 / steps),
                ..Default::default()
            },
        );
    }
    ui.label(job)
}

/// Large figure with a caption underneath
pub fn stat_card(ui: &mut Ui, value: &str, caption: &str) {
    card(ui, theme::CARD_BG, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(value).size(40.0).strong().color(theme::TEXT));
            ui.label(RichText::new(caption).color(theme::TEXT_MUTED));
        });
    });
}
