//! Full-screen modal overlay
//!
//! A dimmed backdrop on the middle layer and a centred panel on the
//! foreground layer. Clicks that land on the backdrop close the modal;
//! clicks inside the panel never reach it.

use egui::{
    Align, Align2, Button, Color32, Context, Frame, Id, Key, Layout, Order, RichText, Rounding,
    Sense, Ui, Vec2,
};

use crate::icons;
use crate::theme;

/// What the user asked the modal to do this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalResponse {
    /// Backdrop click, close button or Escape
    pub close_requested: bool,
    pub previous: bool,
    pub next: bool,
}

pub struct Modal {
    id: Id,
    max_width: f32,
    arrows: bool,
}

impl Modal {
    pub fn new(id_source: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_source),
            max_width: 1100.0,
            arrows: false,
        }
    }

    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Show previous/next arrows under the content
    pub fn with_arrows(mut self) -> Self {
        self.arrows = true;
        self
    }

    pub fn show<R>(self, ctx: &Context, add_contents: impl FnOnce(&mut Ui) -> R) -> (ModalResponse, R) {
        let mut response = ModalResponse::default();
        let screen = ctx.screen_rect();

        let backdrop = egui::Area::new(self.id.with("backdrop"))
            .fixed_pos(screen.min)
            .order(Order::Middle)
            .show(ctx, |ui| {
                let hit = ui.allocate_rect(screen, Sense::click());
                ui.painter().rect_filled(screen, 0.0, Color32::from_black_alpha(180));
                hit
            });
        if backdrop.inner.clicked() {
            response.close_requested = true;
        }

        let width = self.max_width.min(screen.width() - 64.0).max(200.0);
        let content = egui::Area::new(self.id.with("content"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                Frame::none()
                    .fill(theme::MODAL_BG)
                    .rounding(Rounding::same(24.0))
                    .inner_margin(32.0)
                    .shadow(egui::epaint::Shadow::big_dark())
                    .show(ui, |ui| {
                        ui.set_width(width);

                        ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                            let close = Button::new(RichText::new(icons::CLOSE).size(18.0)).frame(false);
                            if ui.add(close).on_hover_text("Close").clicked() {
                                response.close_requested = true;
                            }
                        });

                        let inner = add_contents(ui);

                        if self.arrows {
                            ui.add_space(16.0);
                            ui.horizontal(|ui| {
                                let arrow = |glyph: &str| Button::new(RichText::new(glyph).size(24.0));
                                if ui.add(arrow(icons::CHEVRON_LEFT)).on_hover_text("Previous").clicked() {
                                    response.previous = true;
                                }
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui.add(arrow(icons::CHEVRON_RIGHT)).on_hover_text("Next").clicked() {
                                        response.next = true;
                                    }
                                });
                            });
                        }

                        inner
                    })
                    .inner
            });

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            response.close_requested = true;
        }

        (response, content.inner)
    }
}
