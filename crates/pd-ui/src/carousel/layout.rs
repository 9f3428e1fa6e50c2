//! Geometry of the two carousel presentations
//!
//! Kept free of painting so the placement rules can be unit tested.

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use pd_core::navigation::{MotionFrame, Orientation};

const HORIZONTAL_ARROW: f32 = 56.0;
const VERTICAL_ARROW: f32 = 48.0;
const VERTICAL_PADDING: f32 = 32.0;
const TIMELINE_GAP: f32 = 16.0;

/// Where each part of a carousel goes inside its bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub orientation: Orientation,
    pub bounds: Rect,
    /// Preview of the previous slide, possibly straddling the bounds
    pub previous: Rect,
    /// Resting place of the main card
    pub main: Rect,
    pub next: Rect,
    pub previous_arrow: Rect,
    pub next_arrow: Rect,
    /// Vertical timeline line, top to bottom
    pub timeline: Option<[Pos2; 2]>,
}

impl CarouselLayout {
    /// Height the carousel asks for when the caller does not set one
    pub fn preferred_height(orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => 448.0,
            Orientation::Vertical => 640.0,
        }
    }

    /// Opacity of the two preview cards at rest
    pub fn preview_opacity(orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => 0.8,
            Orientation::Vertical => 0.3,
        }
    }

    pub fn compute(orientation: Orientation, bounds: Rect) -> Self {
        match orientation {
            Orientation::Horizontal => Self::horizontal(bounds),
            Orientation::Vertical => Self::vertical(bounds),
        }
    }

    fn horizontal(bounds: Rect) -> Self {
        let size = bounds.size();
        let center = bounds.center();

        // Previews are centred 24pt outside the edges and get clipped
        let preview = vec2(size.x * 0.45, size.y * 0.6);
        let previous = Rect::from_center_size(pos2(bounds.left() - 24.0, center.y), preview);
        let next = Rect::from_center_size(pos2(bounds.right() + 24.0, center.y), preview);

        let main = Rect::from_center_size(center, vec2(size.x * 0.5, size.y * 0.8));

        let arrow = Vec2::splat(HORIZONTAL_ARROW);
        let inset = size.x * 0.08 + HORIZONTAL_ARROW / 2.0;
        let previous_arrow = Rect::from_center_size(pos2(bounds.left() + inset, center.y), arrow);
        let next_arrow = Rect::from_center_size(pos2(bounds.right() - inset, center.y), arrow);

        Self {
            orientation: Orientation::Horizontal,
            bounds,
            previous,
            main,
            next,
            previous_arrow,
            next_arrow,
            timeline: None,
        }
    }

    fn vertical(bounds: Rect) -> Self {
        let inner = bounds.shrink(VERTICAL_PADDING);
        let size = inner.size();
        let center = inner.center();

        // Previews sit left of the timeline, shrunk to three quarters
        let preview = vec2(size.x / 2.0 - TIMELINE_GAP, size.y * 0.4);
        let scaled = preview * 0.75;
        let previous = Rect::from_center_size(inner.left_top() + preview / 2.0, scaled);
        let next = Rect::from_center_size(
            pos2(inner.left() + preview.x / 2.0, inner.bottom() - preview.y / 2.0),
            scaled,
        );

        let main = Rect::from_min_size(
            pos2(center.x + TIMELINE_GAP, center.y - size.y * 0.15),
            vec2(size.x * 0.4 - 24.0, size.y * 0.3),
        );

        let arrow = Vec2::splat(VERTICAL_ARROW);
        let arrow_x = inner.left() + size.x * 0.22 + VERTICAL_ARROW / 2.0;
        let previous_arrow = Rect::from_center_size(
            pos2(arrow_x, inner.top() + 40.0 + VERTICAL_ARROW / 2.0),
            arrow,
        );
        let next_arrow = Rect::from_center_size(
            pos2(arrow_x, inner.bottom() - 40.0 - VERTICAL_ARROW / 2.0),
            arrow,
        );

        let half_line = size.y / 3.0;
        let timeline = [pos2(center.x, center.y - half_line), pos2(center.x, center.y + half_line)];

        Self {
            orientation: Orientation::Vertical,
            bounds,
            previous,
            main,
            next,
            previous_arrow,
            next_arrow,
            timeline: Some(timeline),
        }
    }

    /// Dot marking the current slide on the timeline
    pub fn timeline_dot(&self) -> Option<Pos2> {
        self.timeline.map(|[top, bottom]| pos2(top.x, (top.y + bottom.y) / 2.0))
    }

    /// Rectangle of the main card in the given pose
    pub fn place(&self, frame: MotionFrame) -> Rect {
        Rect::from_center_size(
            self.main.center() + vec2(frame.offset_x, frame.offset_y),
            self.main.size() * frame.scale,
        )
    }
}
