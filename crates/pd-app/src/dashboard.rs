//! The card grid on the main page

use egui::{vec2, Align2, Button, Color32, FontId, RichText, Sense, Stroke, Ui};
use pd_core::{ModalKind, SlideDeck, UserProfile};
use pd_ui::cards::{card, card_heading, clickable_card, gradient_heading, stat_card};
use pd_ui::{icons, theme};
use tracing::debug;

const AVATAR_SIZE: f32 = 44.0;

/// What a click on the grid asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    OpenUser(usize),
    OpenModal(ModalKind),
}

/// Local widget state of the grid
#[derive(Debug, Default)]
pub struct Dashboard {
    auto_enhance: bool,
    generated: u32,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut Ui, users: &SlideDeck<UserProfile>) -> Option<DashboardAction> {
        let mut action = None;

        ui.columns(4, |columns| {
            // Create template and top users
            clickable_card(&mut columns[0], "create_template", theme::CARD_BG, |ui| {
                card_heading(ui, icons::PLUS, "Create new template");
                ui.label(RichText::new("Start from a blank prompt").color(theme::TEXT_MUTED));
            });
            columns[0].add_space(12.0);
            card(&mut columns[0], theme::CARD_BG, |ui| {
                card_heading(ui, icons::SPARKLES, "Top Users");
                ui.add_space(8.0);
                for (index, user) in users.iter().enumerate() {
                    if user_row(ui, user) {
                        action = Some(DashboardAction::OpenUser(index));
                    }
                }
            });

            // Generate and the hero card
            card(&mut columns[1], theme::PROMPT_CARD_BG, |ui| {
                ui.vertical_centered(|ui| {
                    let generate = Button::new(RichText::new(format!("{} Generate", icons::ZAP)).size(18.0))
                        .fill(theme::PURPLE_DEEP)
                        .min_size(vec2(160.0, 44.0));
                    if ui.add(generate).clicked() {
                        self.generated += 1;
                        debug!("Generate pressed {} times", self.generated);
                    }
                });
            });
            columns[1].add_space(12.0);
            card(&mut columns[1], theme::CARD_BG, |ui| {
                ui.add_space(24.0);
                gradient_heading(ui, "Template AI", 34.0);
                ui.label(RichText::new("Turn rough ideas into reusable prompts.").color(theme::TEXT_MUTED));
                ui.add_space(24.0);
            });

            // Entry points to the two carousels
            let branching = clickable_card(&mut columns[2], "branching_paths", theme::CARD_BG, |ui| {
                card_heading(ui, icons::BRANCH, "Branching paths");
                ui.label(RichText::new("Explore prompt variations side by side").color(theme::TEXT_MUTED));
            });
            if branching.response.clicked() {
                action = Some(DashboardAction::OpenModal(ModalKind::Companion));
            }
            columns[2].add_space(12.0);
            let journey = clickable_card(&mut columns[2], "ai_journey", theme::CARD_BG, |ui| {
                card_heading(ui, icons::COMPASS, "Ai journey");
                ui.label(RichText::new("Walk the timeline of your templates").color(theme::TEXT_MUTED));
            });
            if journey.response.clicked() {
                action = Some(DashboardAction::OpenModal(ModalKind::Templates));
            }

            // Toggle, stats and the prompt service
            card(&mut columns[3], theme::CARD_BG, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icons::SWAP).color(theme::PURPLE));
                    ui.checkbox(&mut self.auto_enhance, "Auto-enhance prompts");
                });
            });
            columns[3].add_space(12.0);
            stat_card(&mut columns[3], "25M", "created prompts");
            columns[3].add_space(12.0);
            card(&mut columns[3], theme::CARD_BG, |ui| {
                card_heading(ui, icons::CAMERA, "Prompt Service");
                ui.label(RichText::new("Hosted endpoints for your templates").color(theme::TEXT_MUTED));
            });
        });

        action
    }
}

/// Avatar with name and usage; true when the avatar was clicked
fn user_row(ui: &mut Ui, user: &UserProfile) -> bool {
    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::click());
        let painter = ui.painter();
        let stroke = if response.hovered() {
            Stroke::new(2.0, theme::ORANGE)
        } else {
            Stroke::new(2.0, theme::PURPLE)
        };
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, theme::PURPLE_DEEP);
        painter.circle_stroke(rect.center(), AVATAR_SIZE / 2.0, stroke);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            user.initials(),
            FontId::proportional(16.0),
            Color32::WHITE,
        );

        ui.vertical(|ui| {
            ui.label(RichText::new(&user.name).strong());
            ui.label(RichText::new(&user.usage).small().color(theme::TEXT_MUTED));
        });

        response
            .on_hover_text(format!("View {}", user.name))
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    })
    .inner
}
