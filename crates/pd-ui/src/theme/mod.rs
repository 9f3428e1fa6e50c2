use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "PromptDeck Night".to_string(),
            dark_mode: true,
        }
    }
}

/// Page background
pub const PAGE_BG: Color32 = Color32::from_rgb(3, 6, 28);
/// Dashboard card fill
pub const CARD_BG: Color32 = Color32::from_rgb(20, 18, 52);
/// Slide card fill
pub const PROMPT_CARD_BG: Color32 = Color32::from_rgb(38, 30, 84);
/// Modal panel fill
pub const MODAL_BG: Color32 = Color32::from_rgb(30, 30, 63);
/// Brand purple used for the timeline and buttons
pub const PURPLE: Color32 = Color32::from_rgb(153, 114, 253);
/// Deep purple used for gradients and borders
pub const PURPLE_DEEP: Color32 = Color32::from_rgb(76, 26, 205);
/// Warm accent used for icon badges
pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
/// Primary text
pub const TEXT: Color32 = Color32::from_rgb(230, 227, 255);
/// Secondary text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(172, 160, 228);
/// Hairline border around cards
pub const BORDER: Color32 = Color32::from_rgba_premultiplied(40, 40, 48, 66);

/// Apply the dashboard theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let widget_bg = Color32::from_rgb(44, 36, 96);
    let hover_color = Color32::from_rgb(62, 50, 128);
    let active_color = Color32::from_rgb(82, 64, 160);

    // Window and panel styling
    visuals.window_fill = MODAL_BG;
    visuals.panel_fill = PAGE_BG;
    visuals.extreme_bg_color = PAGE_BG;
    visuals.faint_bg_color = CARD_BG;
    visuals.override_text_color = Some(TEXT);

    // Widget styling
    visuals.widgets.noninteractive.bg_fill = CARD_BG;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    visuals.widgets.noninteractive.rounding = Rounding::same(12.0);

    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.inactive.bg_stroke = Stroke::NONE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    visuals.widgets.inactive.rounding = Rounding::same(24.0);

    visuals.widgets.hovered.bg_fill = hover_color;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, PURPLE);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, Color32::WHITE);
    visuals.widgets.hovered.rounding = Rounding::same(24.0);

    visuals.widgets.active.bg_fill = active_color;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, PURPLE);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(24.0);

    // Selection and highlighting
    visuals.selection.bg_fill = PURPLE.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, PURPLE);
    visuals.hyperlink_color = PURPLE;

    // Shadows
    visuals.window_shadow.extrusion = 16.0;
    visuals.popup_shadow.extrusion = 8.0;

    // Apply spacing
    style.spacing.item_spacing = egui::vec2(12.0, 8.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    // Font sizes
    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(16.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Fade a colour by `opacity` in `[0, 1]`
pub fn faded(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

/// Blend two colours, `t = 0` giving `from`
pub fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
        channel(from.a(), to.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_endpoints_and_midpoint() {
        assert_eq!(mix(PURPLE, ORANGE, 0.0), PURPLE);
        assert_eq!(mix(PURPLE, ORANGE, 1.0), ORANGE);
        assert_eq!(mix(Color32::BLACK, Color32::WHITE, 0.5), Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_faded_clamps_opacity() {
        assert_eq!(faded(PURPLE, 1.5), PURPLE);
        assert_eq!(faded(PURPLE, -1.0), Color32::TRANSPARENT);
    }
}
