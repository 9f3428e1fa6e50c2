//! Carousel widget bound to a [`SlideNavigator`]
//!
//! The navigator owns the index and direction; this widget only paints the
//! previous/current/next triplet and forwards clicks and wheel input. The
//! enter/exit animation is driven from egui's clock and kept in temp data so
//! the widget itself stays stateless.

mod layout;

pub use layout::CarouselLayout;

use egui::{
    pos2, vec2, Align2, Button, Color32, FontId, Id, Painter, Rect, Response, RichText,
    Rounding, Sense, Stroke, Ui,
};
use pd_core::navigation::{ease_out, CardVariants, Direction, Orientation, Spring};
use pd_core::{IconKind, Slide, SlideNavigator};
use tracing::trace;

use crate::icons;
use crate::theme::{self, faded};

/// What the carousel needs to paint a slide
pub trait SlideView {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    fn subtitle(&self) -> Option<&str> {
        None
    }

    fn icon(&self) -> Option<IconKind> {
        None
    }

    /// Companion cards get the icon badge, start year and "+" button
    fn is_companion(&self) -> bool {
        false
    }

    fn year(&self) -> Option<u32> {
        None
    }

    fn alt_text(&self) -> Option<&str> {
        None
    }
}

impl SlideView for Slide {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn icon(&self) -> Option<IconKind> {
        self.icon
    }

    fn is_companion(&self) -> bool {
        self.is_companion_card
    }

    fn year(&self) -> Option<u32> {
        self.year
    }

    fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }
}

/// Animation bookkeeping between frames
#[derive(Debug, Clone)]
struct Transition {
    /// Index the widget last showed as the main card
    shown: usize,
    /// Outgoing index while a transition is running
    from: Option<usize>,
    direction: Direction,
    started: f64,
}

/// A carousel over a deck of slides
pub struct Carousel<'a, T> {
    navigator: &'a SlideNavigator<T>,
    variants: CardVariants,
    id: Id,
}

impl<'a, T: SlideView> Carousel<'a, T> {
    pub fn new(navigator: &'a SlideNavigator<T>, orientation: Orientation) -> Self {
        Self {
            navigator,
            variants: CardVariants::new(orientation),
            id: Id::new(("pd_carousel", orientation)),
        }
    }

    /// Key for the animation state kept between frames. Give each mounted
    /// navigator its own key so a fresh one does not replay the last
    /// transition of its predecessor.
    pub fn id_source(mut self, id_source: impl std::hash::Hash) -> Self {
        self.id = Id::new(id_source);
        self
    }

    pub fn spring(mut self, spring: Spring) -> Self {
        self.variants.spring = spring;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let orientation = self.variants.orientation;
        let height = CarouselLayout::preferred_height(orientation);
        let (bounds, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let painter = ui.painter_at(bounds);
        painter.rect_filled(bounds, Rounding::same(24.0), theme::CARD_BG);

        let triplet = match self.navigator.current_triplet() {
            Ok(triplet) => triplet,
            Err(err) => {
                trace!("Carousel has nothing to draw: {}", err);
                painter.text(
                    bounds.center(),
                    Align2::CENTER_CENTER,
                    "No slides to display.",
                    FontId::proportional(16.0),
                    theme::TEXT_MUTED,
                );
                return response;
            }
        };

        let layout = CarouselLayout::compute(orientation, bounds);
        let progress = self.advance_transition(ui);

        if let Some([top, bottom]) = layout.timeline {
            painter.line_segment([top, bottom], Stroke::new(2.0, theme::PURPLE));
            if let Some(dot) = layout.timeline_dot() {
                painter.circle_filled(dot, 8.0, theme::PURPLE);
                painter.circle_stroke(dot, 12.0, Stroke::new(2.0, faded(theme::PURPLE, 0.4)));
            }
        }

        // Previews
        let rest = CarouselLayout::preview_opacity(orientation);
        let previous_hit = ui.interact(
            layout.previous.intersect(bounds),
            self.id.with("previous_preview"),
            Sense::click(),
        );
        let next_hit = ui.interact(
            layout.next.intersect(bounds),
            self.id.with("next_preview"),
            Sense::click(),
        );
        let hover_boost = |hit: &Response| if hit.hovered() { (rest + 0.2).min(1.0) } else { rest };
        paint_preview(&painter, &layout, layout.previous, triplet.previous, hover_boost(&previous_hit));
        paint_preview(&painter, &layout, layout.next, triplet.next, hover_boost(&next_hit));

        // Main card, plus the outgoing one while animating
        match progress {
            Some((from, direction, t)) => {
                let eased = ease_out(t);
                if let Some(outgoing) = self.navigator.deck().get(from) {
                    let frame = self.variants.center().lerp(self.variants.exit(direction), eased);
                    paint_main(&painter, orientation, layout.place(frame), outgoing, frame.opacity, frame.scale);
                }
                let frame = self.variants.enter(direction).lerp(self.variants.center(), eased);
                paint_main(&painter, orientation, layout.place(frame), triplet.current, frame.opacity, frame.scale);
                ui.ctx().request_repaint();
            }
            None => {
                paint_main(&painter, orientation, layout.main, triplet.current, 1.0, 1.0);
            }
        }

        // Arrows
        let (back_glyph, forward_glyph) = match orientation {
            Orientation::Horizontal => (icons::CHEVRON_LEFT, icons::CHEVRON_RIGHT),
            Orientation::Vertical => (icons::CHEVRON_UP, icons::CHEVRON_DOWN),
        };
        let arrow = |glyph: &str| {
            Button::new(RichText::new(glyph).size(32.0).color(Color32::WHITE)).frame(false)
        };
        let previous_arrow = ui
            .put(layout.previous_arrow, arrow(back_glyph))
            .on_hover_text("Previous slide");
        let next_arrow = ui
            .put(layout.next_arrow, arrow(forward_glyph))
            .on_hover_text("Next slide");

        // An arrow drawn over a preview takes the click on its own
        if previous_arrow.clicked() || (previous_hit.clicked() && !previous_arrow.hovered()) {
            self.navigator.step_previous();
        }
        if next_arrow.clicked() || (next_hit.clicked() && !next_arrow.hovered()) {
            self.navigator.step_next();
        }

        if ui.rect_contains_pointer(bounds) {
            // egui reports upward scrolling as positive, wheel paging expects the opposite
            let delta_y = -ui.input(|i| i.scroll_delta.y);
            if delta_y != 0.0 {
                self.navigator.on_wheel(delta_y);
            }
        }

        response
    }

    /// Update the stored transition and return `(from, direction, t)` while
    /// one is running
    fn advance_transition(&self, ui: &Ui) -> Option<(usize, Direction, f32)> {
        let context = self.navigator.context();
        let now = ui.input(|i| i.time);

        let mut transition = ui
            .data_mut(|d| d.get_temp::<Transition>(self.id))
            .unwrap_or(Transition {
                shown: context.current_index,
                from: None,
                direction: context.direction,
                started: now,
            });

        if transition.shown != context.current_index {
            transition = Transition {
                shown: context.current_index,
                from: Some(transition.shown),
                direction: context.direction,
                started: now,
            };
        }

        let duration = self.variants.spring.settle_time().as_secs_f64();
        let t = if duration > 0.0 {
            ((now - transition.started) / duration) as f32
        } else {
            1.0
        };
        if t >= 1.0 {
            transition.from = None;
        }

        let running = transition.from.map(|from| (from, transition.direction, t));
        ui.data_mut(|d| d.insert_temp(self.id, transition));
        running
    }
}

/// Lays text out top to bottom inside a column
struct TextColumn<'p> {
    painter: &'p Painter,
    left: f32,
    width: f32,
    y: f32,
    centered: bool,
}

impl TextColumn<'_> {
    fn line(&mut self, text: &str, size: f32, color: Color32) {
        let galley = self
            .painter
            .layout(text.to_owned(), FontId::proportional(size), color, self.width);
        let x = if self.centered {
            self.left + (self.width - galley.size().x) / 2.0
        } else {
            self.left
        };
        let height = galley.size().y;
        self.painter.galley(pos2(x, self.y), galley);
        self.y += height;
    }

    fn gap(&mut self, space: f32) {
        self.y += space;
    }
}

fn paint_preview(painter: &Painter, layout: &CarouselLayout, rect: Rect, slide: &impl SlideView, opacity: f32) {
    let scale = rect.height() / layout.main.height();
    painter.rect_filled(rect, Rounding::same(24.0 * scale), faded(theme::PROMPT_CARD_BG, opacity));
    painter.rect_stroke(rect, Rounding::same(24.0 * scale), Stroke::new(1.0, faded(theme::BORDER, opacity)));

    match layout.orientation {
        Orientation::Horizontal => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                slide.title(),
                FontId::proportional(20.0),
                faded(theme::TEXT, opacity),
            );
        }
        Orientation::Vertical => {
            let mut column = TextColumn {
                painter,
                left: rect.left() + 16.0,
                width: rect.width() - 32.0,
                y: rect.top() + rect.height() * 0.25,
                centered: true,
            };
            column.line(slide.title(), 18.0, faded(theme::TEXT, opacity));
            if let Some(subtitle) = slide.subtitle() {
                column.gap(4.0);
                column.line(subtitle, 14.0, faded(theme::TEXT_MUTED, opacity));
            }
            column.gap(8.0);
            column.line(slide.description(), 13.0, faded(theme::TEXT_MUTED, opacity));
        }
    }
}

fn paint_main(
    painter: &Painter,
    orientation: Orientation,
    rect: Rect,
    slide: &impl SlideView,
    opacity: f32,
    scale: f32,
) {
    let rounding = Rounding::same(24.0 * scale);
    painter.rect_filled(rect, rounding, faded(theme::PROMPT_CARD_BG, opacity));
    painter.rect_stroke(rect, rounding, Stroke::new(1.0, faded(theme::PURPLE_DEEP, opacity)));

    let pad = 28.0 * scale;
    let mut column = TextColumn {
        painter,
        left: rect.left() + pad,
        width: rect.width() - 2.0 * pad,
        y: rect.top() + pad,
        centered: orientation == Orientation::Vertical,
    };

    if orientation == Orientation::Horizontal || slide.is_companion() {
        // Icon badge and image placeholder
        let glyph = slide.icon().map_or(icons::GIFT, icons::slide_icon);
        let badge = pos2(rect.left() + pad + 20.0 * scale, rect.top() + pad + 20.0 * scale);
        painter.circle_filled(badge, 20.0 * scale, faded(theme::ORANGE, opacity));
        painter.text(badge, Align2::CENTER_CENTER, glyph, FontId::proportional(18.0 * scale), faded(Color32::WHITE, opacity));

        let square = Rect::from_center_size(
            pos2(rect.center().x, rect.top() + pad + 40.0 * scale),
            vec2(80.0, 80.0) * scale,
        );
        painter.rect_filled(square, Rounding::same(12.0 * scale), faded(Color32::from_gray(220), opacity));
        if let Some(alt) = slide.alt_text() {
            painter.text(
                square.center(),
                Align2::CENTER_CENTER,
                alt.chars().next().unwrap_or(' '),
                FontId::proportional(28.0 * scale),
                faded(theme::PURPLE_DEEP, opacity),
            );
        }
        column.y = square.bottom() + 16.0 * scale;
    }

    column.line(slide.title(), 26.0 * scale, faded(theme::TEXT, opacity));
    if let Some(subtitle) = slide.subtitle() {
        column.gap(4.0 * scale);
        column.line(subtitle, 17.0 * scale, faded(theme::PURPLE, opacity));
    }
    column.gap(8.0 * scale);
    column.line(slide.description(), 15.0 * scale, faded(theme::TEXT_MUTED, opacity));

    if slide.is_companion() {
        if let Some(year) = slide.year() {
            column.gap(12.0 * scale);
            column.line(&format!("Start from {}", year), 14.0 * scale, faded(theme::TEXT, opacity));
        }
        let plus = pos2(rect.right() - pad, rect.bottom() - pad);
        painter.circle_filled(plus, 16.0 * scale, faded(theme::PURPLE, opacity));
        painter.text(plus, Align2::CENTER_CENTER, "+", FontId::proportional(20.0 * scale), faded(Color32::WHITE, opacity));
    } else if orientation == Orientation::Vertical {
        let fan = pos2(rect.right() - pad, rect.bottom() - pad);
        painter.circle_filled(fan, 16.0 * scale, faded(theme::PURPLE_DEEP, opacity));
        painter.text(fan, Align2::CENTER_CENTER, icons::FAN, FontId::proportional(16.0 * scale), faded(Color32::WHITE, opacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> SlideNavigator<Slide> {
        SlideNavigator::new(
            (1..=5)
                .map(|id| Slide::new(id, format!("Slide {}", id), ""))
                .collect::<Vec<_>>(),
        )
    }

    /// Run `advance_transition` for one frame inside a panel
    fn frame(ctx: &egui::Context, carousel: &Carousel<'_, Slide>) -> Option<(usize, Direction, f32)> {
        let mut progress = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                progress = carousel.advance_transition(ui);
            });
        });
        progress
    }

    #[test]
    fn test_step_starts_a_transition() {
        let ctx = egui::Context::default();
        let nav = navigator();
        let carousel = Carousel::new(&nav, Orientation::Vertical).id_source("steps");

        assert_eq!(frame(&ctx, &carousel), None);
        nav.step_next();
        let (from, direction, _) = frame(&ctx, &carousel).unwrap();
        assert_eq!(from, 0);
        assert_eq!(direction, Direction::Forward);
    }

    #[test]
    fn test_fresh_mount_does_not_replay_old_position() {
        let ctx = egui::Context::default();

        let old = navigator();
        old.select_index(3);
        frame(&ctx, &Carousel::new(&old, Orientation::Vertical).id_source(("mount", 1)));
        drop(old);

        // A new navigator starts at 0; under its own key nothing animates
        let fresh = navigator();
        let carousel = Carousel::new(&fresh, Orientation::Vertical).id_source(("mount", 2));
        assert_eq!(frame(&ctx, &carousel), None);

        // Reusing the old key would have animated from slide 3
        let reused = Carousel::new(&fresh, Orientation::Vertical).id_source(("mount", 1));
        assert_eq!(frame(&ctx, &reused).map(|(from, _, _)| from), Some(3));
    }
}
