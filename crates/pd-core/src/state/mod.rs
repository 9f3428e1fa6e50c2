use std::sync::Arc;
use serde::{Serialize, Deserialize};
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::events::{events, EventBus};
use crate::navigation::{NavigationContext, NavigationSubscriber, Orientation, SlideNavigator};
use crate::slide::{Slide, SlideDeck, UserProfile};

/// The modal overlays the dashboard can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModalKind {
    /// Profile of one of the top users, with previous/next arrows
    User,
    /// Horizontal carousel of companion slides
    Companion,
    /// Vertical timeline of template slides
    Templates,
}

impl ModalKind {
    /// Carousel orientation hosted by this modal, if any
    pub fn carousel(self) -> Option<Orientation> {
        match self {
            ModalKind::User => None,
            ModalKind::Companion => Some(Orientation::Horizontal),
            ModalKind::Templates => Some(Orientation::Vertical),
        }
    }

    /// Name used for the deck in events and logs
    pub fn deck_name(self) -> &'static str {
        match self {
            ModalKind::User => "users",
            ModalKind::Companion => "companion",
            ModalKind::Templates => "templates",
        }
    }
}

/// At most one modal is visible at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    active: Option<ModalKind>,
}

impl ModalState {
    /// Show `kind`, returning the modal it replaced
    pub fn open(&mut self, kind: ModalKind) -> Option<ModalKind> {
        self.active.replace(kind)
    }

    /// Hide the visible modal, returning it
    pub fn close(&mut self) -> Option<ModalKind> {
        self.active.take()
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active == Some(kind)
    }
}

/// Republishes navigator changes as [`events::SlideChanged`]
struct SlideChangePublisher {
    deck: &'static str,
    bus: EventBus,
}

impl NavigationSubscriber for SlideChangePublisher {
    fn on_navigation_change(&self, context: &NavigationContext) {
        self.bus.publish(events::SlideChanged {
            deck: self.deck,
            index: context.current_index,
            direction: context.direction,
        });
    }
}

/// A carousel navigator that exists only while its modal is open
pub struct MountedCarousel {
    /// Distinct for every mount, so per-widget UI state keyed on it starts
    /// fresh when the modal is reopened
    pub mount_id: u64,
    pub kind: ModalKind,
    pub orientation: Orientation,
    pub navigator: SlideNavigator<Slide>,
    _publisher: Arc<dyn NavigationSubscriber>,
}

/// State behind the dashboard page
pub struct DashboardState {
    config: DashboardConfig,
    runtime: Handle,
    modal: ModalState,
    users: SlideNavigator<UserProfile>,
    carousel: Option<MountedCarousel>,
    mounts: u64,
    event_bus: EventBus,
    /// Kept alive here; navigators only hold them weakly
    subscribers: Vec<Arc<dyn NavigationSubscriber>>,
    _users_publisher: Arc<dyn NavigationSubscriber>,
    companion_deck: SlideDeck<Slide>,
    template_deck: SlideDeck<Slide>,
}

impl DashboardState {
    /// Create dashboard state; wheel timers are scheduled on `runtime`
    pub fn new(config: DashboardConfig, runtime: Handle) -> Self {
        let event_bus = EventBus::new();
        let users = SlideNavigator::new(config.users.clone());
        let users_publisher: Arc<dyn NavigationSubscriber> = Arc::new(SlideChangePublisher {
            deck: ModalKind::User.deck_name(),
            bus: event_bus.clone(),
        });
        users.add_subscriber(users_publisher.clone());

        Self {
            companion_deck: SlideDeck::new(config.companion_slides.clone()),
            template_deck: SlideDeck::new(config.template_slides.clone()),
            config,
            runtime,
            modal: ModalState::default(),
            users,
            carousel: None,
            mounts: 0,
            event_bus,
            subscribers: Vec::new(),
            _users_publisher: users_publisher,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn users(&self) -> &SlideNavigator<UserProfile> {
        &self.users
    }

    pub fn carousel(&self) -> Option<&MountedCarousel> {
        self.carousel.as_ref()
    }

    /// Attach a subscriber to the user navigator and to every carousel
    /// mounted from now on (e.g. to request a repaint)
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn NavigationSubscriber>) {
        self.users.add_subscriber(subscriber.clone());
        if let Some(mounted) = &self.carousel {
            mounted.navigator.add_subscriber(subscriber.clone());
        }
        self.subscribers.push(subscriber);
    }

    /// Show a modal, tearing down whatever was open before
    pub fn open_modal(&mut self, kind: ModalKind) {
        if let Some(previous) = self.modal.active() {
            if previous == kind {
                return;
            }
            self.close_modal();
        }

        self.modal.open(kind);
        let carousel = kind.carousel().map(|orientation| self.mount_carousel(kind, orientation));
        self.carousel = carousel;

        info!("Opened {:?} modal", kind);
        self.event_bus.publish(events::ModalOpened { kind });
    }

    /// Hide the current modal. Any carousel it hosted is dropped, which
    /// cancels a pending wheel step.
    pub fn close_modal(&mut self) {
        if let Some(kind) = self.modal.close() {
            self.carousel = None;
            info!("Closed {:?} modal", kind);
            self.event_bus.publish(events::ModalClosed { kind });
        }
    }

    /// Avatar click: jump to that user and show the profile modal
    pub fn open_user(&mut self, index: usize) {
        self.users.select_index(index as i64);
        self.open_modal(ModalKind::User);
    }

    pub fn previous_user(&self) {
        self.users.step_previous();
    }

    pub fn next_user(&self) {
        self.users.step_next();
    }

    fn mount_carousel(&mut self, kind: ModalKind, orientation: Orientation) -> MountedCarousel {
        self.mounts += 1;
        let deck = match kind {
            ModalKind::Templates => self.template_deck.clone(),
            _ => self.companion_deck.clone(),
        };
        debug!("Mounting {:?} carousel with {} slides", orientation, deck.len());

        let navigator = SlideNavigator::new(deck)
            .with_wheel_paging(self.runtime.clone(), self.config.navigator.debounce);

        let publisher: Arc<dyn NavigationSubscriber> = Arc::new(SlideChangePublisher {
            deck: kind.deck_name(),
            bus: self.event_bus.clone(),
        });
        navigator.add_subscriber(publisher.clone());
        for subscriber in &self.subscribers {
            navigator.add_subscriber(subscriber.clone());
        }

        MountedCarousel {
            mount_id: self.mounts,
            kind,
            orientation,
            navigator,
            _publisher: publisher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::events::{ModalClosed, ModalOpened, SlideChanged};
    use parking_lot::Mutex;

    fn dashboard() -> DashboardState {
        DashboardState::new(DashboardConfig::default(), Handle::current())
    }

    #[test]
    fn test_modal_state_replaces_and_closes() {
        let mut modal = ModalState::default();
        assert_eq!(modal.open(ModalKind::User), None);
        assert_eq!(modal.open(ModalKind::Companion), Some(ModalKind::User));
        assert!(modal.is_open(ModalKind::Companion));
        assert_eq!(modal.close(), Some(ModalKind::Companion));
        assert_eq!(modal.active(), None);
        assert_eq!(modal.close(), None);
    }

    #[tokio::test]
    async fn test_carousel_lives_with_its_modal() {
        let mut state = dashboard();

        state.open_modal(ModalKind::Templates);
        let mounted = state.carousel().unwrap();
        assert_eq!(mounted.orientation, Orientation::Vertical);
        mounted.navigator.step_next();
        assert_eq!(mounted.navigator.current_index(), 1);

        let first_mount = mounted.mount_id;

        // Reopening starts from the first slide again, under a new mount id
        state.close_modal();
        assert!(state.carousel().is_none());
        state.open_modal(ModalKind::Templates);
        let reopened = state.carousel().unwrap();
        assert_eq!(reopened.navigator.current_index(), 0);
        assert_ne!(reopened.mount_id, first_mount);

        state.open_modal(ModalKind::User);
        assert!(state.carousel().is_none());
        assert!(state.modal().is_open(ModalKind::User));
    }

    #[tokio::test]
    async fn test_open_user_selects_and_keeps_position() {
        let mut state = dashboard();

        state.open_user(2);
        assert!(state.modal().is_open(ModalKind::User));
        assert_eq!(state.users().current().unwrap().name, "Sarah Chen");

        state.next_user();
        assert_eq!(state.users().current_index(), 0);
        state.previous_user();
        state.previous_user();
        assert_eq!(state.users().current_index(), 1);

        state.close_modal();
        assert_eq!(state.users().current_index(), 1);
    }

    #[tokio::test]
    async fn test_events_are_published() {
        let mut state = dashboard();
        let log = Arc::new(Mutex::new(Vec::new()));

        let sink = log.clone();
        state.event_bus().subscribe(move |e: &ModalOpened| sink.lock().push(format!("open {:?}", e.kind)));
        let sink = log.clone();
        state.event_bus().subscribe(move |e: &ModalClosed| sink.lock().push(format!("close {:?}", e.kind)));
        let sink = log.clone();
        state.event_bus().subscribe(move |e: &SlideChanged| sink.lock().push(format!("{} -> {}", e.deck, e.index)));

        state.open_modal(ModalKind::Companion);
        state.carousel().unwrap().navigator.step_previous();
        state.open_modal(ModalKind::Templates);

        assert_eq!(
            *log.lock(),
            vec![
                "open Companion".to_string(),
                "companion -> 4".to_string(),
                "close Companion".to_string(),
                "open Templates".to_string(),
            ]
        );
    }
}
