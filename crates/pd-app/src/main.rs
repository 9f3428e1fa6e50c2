//! Main application entry point

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Context, RichText, Ui};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pd_core::events::{events, EventBus};
use pd_core::{ConfigError, DashboardConfig, DashboardState, ModalKind, UserProfile};
use pd_ui::cards::gradient_heading;
use pd_ui::{theme, Carousel, Modal, ModalResponse, RepaintOnChange, Theme};

mod dashboard;

use dashboard::{Dashboard, DashboardAction};

/// Main application state
struct PromptDeckApp {
    /// Dashboard model; declared first so its wheel timers are aborted
    /// before the runtime shuts down
    state: DashboardState,

    /// Card grid widget state
    dashboard: Dashboard,

    /// Tokio runtime driving the wheel debounce timers
    _runtime: tokio::runtime::Runtime,
}

impl PromptDeckApp {
    fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig, runtime: tokio::runtime::Runtime) -> Self {
        pd_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let mut state = DashboardState::new(config, runtime.handle().clone());

        // Debounced wheel steps land on a runtime thread; wake the UI for them
        state.add_subscriber(Arc::new(RepaintOnChange::new(cc.egui_ctx.clone())));
        log_events(state.event_bus());

        Self {
            state,
            dashboard: Dashboard::new(),
            _runtime: runtime,
        }
    }

    fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::OpenUser(index) => self.state.open_user(index),
            DashboardAction::OpenModal(kind) => self.state.open_modal(kind),
        }
    }

    /// Draw the active modal and act on what the user did with it
    fn show_modal(&mut self, ctx: &Context) {
        let Some(kind) = self.state.modal().active() else {
            return;
        };

        let response = match kind {
            ModalKind::User => {
                let user = self.state.users().current();
                Modal::new("user_modal")
                    .max_width(420.0)
                    .with_arrows()
                    .show(ctx, |ui| profile_card(ui, user))
                    .0
            }
            ModalKind::Companion | ModalKind::Templates => {
                let Some(mounted) = self.state.carousel() else {
                    return;
                };
                let spring = self.state.config().navigator.spring;
                let title = match kind {
                    ModalKind::Templates => "Ai journey",
                    _ => "Branching paths",
                };
                Modal::new(("carousel_modal", kind))
                    .show(ctx, |ui| {
                        gradient_heading(ui, title, 28.0);
                        ui.add_space(16.0);
                        Carousel::new(&mounted.navigator, mounted.orientation)
                            .id_source(("pd_carousel", mounted.mount_id))
                            .spring(spring)
                            .show(ui);
                    })
                    .0
            }
        };

        self.handle_modal_response(response);
    }

    fn handle_modal_response(&mut self, response: ModalResponse) {
        if response.previous {
            self.state.previous_user();
        }
        if response.next {
            self.state.next_user();
        }
        if response.close_requested {
            self.state.close_modal();
        }
    }
}

impl eframe::App for PromptDeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::PAGE_BG).inner_margin(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    action = self.dashboard.show(ui, self.state.users().deck());
                });
            });

        if let Some(action) = action {
            self.apply(action);
        }

        self.show_modal(ctx);
    }
}

/// Profile shown in the user modal
fn profile_card(ui: &mut Ui, user: Option<&UserProfile>) {
    let Some(user) = user else {
        ui.label(RichText::new("No users to display.").color(theme::TEXT_MUTED));
        return;
    };

    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 96.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 48.0, theme::PURPLE_DEEP);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            user.initials(),
            egui::FontId::proportional(36.0),
            egui::Color32::WHITE,
        );
        ui.add_space(12.0);
        ui.label(RichText::new(&user.name).size(24.0).strong());
        ui.label(RichText::new(&user.usage).color(theme::TEXT_MUTED));
        if !user.avatar_url.is_empty() {
            ui.hyperlink_to(RichText::new("Avatar").small(), &user.avatar_url);
        }
    });
}

/// Trace dashboard events
fn log_events(bus: &EventBus) {
    bus.subscribe(|event: &events::ModalOpened| debug!("Event: modal {:?} opened", event.kind));
    bus.subscribe(|event: &events::ModalClosed| debug!("Event: modal {:?} closed", event.kind));
    bus.subscribe(|event: &events::SlideChanged| {
        debug!(
            deck = event.deck,
            index = event.index,
            "Event: slide changed ({:?})",
            event.direction
        )
    });
}

/// Configuration from the first CLI argument, or the built-in demo content
fn load_config() -> Result<DashboardConfig> {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        info!("No configuration file given, using built-in demo content");
        return Ok(DashboardConfig::default());
    };

    match DashboardConfig::load(&path) {
        Ok(config) => {
            info!("Loaded configuration from {}", path.display());
            Ok(config)
        }
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            warn!("Configuration file {} not found, using defaults", path.display());
            Ok(DashboardConfig::default())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to load configuration from {}", path.display())),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting PromptDeck");

    let config = load_config()?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "PromptDeck",
        options,
        Box::new(move |cc| Box::new(PromptDeckApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
