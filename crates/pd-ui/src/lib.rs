//! User interface components for the PromptDeck dashboard
//!
//! This crate provides the egui widgets: the carousel bindings over the
//! shared slide navigator, the modal overlay, dashboard cards and the theme.

pub mod cards;
pub mod carousel;
pub mod modal;
pub mod theme;

use pd_core::navigation::{NavigationContext, NavigationSubscriber};

/// Re-export commonly used types
pub use carousel::{Carousel, CarouselLayout, SlideView};
pub use modal::{Modal, ModalResponse};
pub use theme::{apply_theme, Theme};

/// Requests a repaint whenever a navigator changes.
///
/// Wheel steps fire on the tokio runtime, outside egui's frame loop, so the
/// UI has to be woken up explicitly.
pub struct RepaintOnChange {
    ctx: egui::Context,
}

impl RepaintOnChange {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl NavigationSubscriber for RepaintOnChange {
    fn on_navigation_change(&self, _context: &NavigationContext) {
        self.ctx.request_repaint();
    }
}

// Common icon definitions
pub mod icons {
    use pd_core::IconKind;

    pub const CLOSE: &str = "✖";
    pub const CHEVRON_LEFT: &str = "⏴";
    pub const CHEVRON_RIGHT: &str = "⏵";
    pub const CHEVRON_UP: &str = "⏶";
    pub const CHEVRON_DOWN: &str = "⏷";
    pub const SPARKLES: &str = "✨";
    pub const BRANCH: &str = "⑂";
    pub const COMPASS: &str = "🧭";
    pub const CAMERA: &str = "📷";
    pub const GIFT: &str = "🎁";
    pub const ZAP: &str = "⚡";
    pub const SWAP: &str = "⇄";
    pub const FAN: &str = "✺";
    pub const PLUS: &str = "➕";

    /// Glyph for a slide icon
    pub fn slide_icon(kind: IconKind) -> &'static str {
        match kind {
            IconKind::Gift => GIFT,
            IconKind::Star => "⭐",
            IconKind::Code => "⌨",
            IconKind::Book => "📖",
            IconKind::Cloud => "☁",
        }
    }
}
