//! Cyclic slide navigator implementation

use super::{
    next_index, normalize_index, previous_index, Direction, NavigationContext,
    NavigationSubscriber, Triplet, DebounceState, WheelDebouncer,
};
use crate::slide::SlideDeck;
use crate::NavigatorError;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::{debug, trace};

/// Navigation state stored internally
#[derive(Debug, Clone, Copy)]
struct NavigatorState {
    current_index: usize,
    direction: Direction,
}

/// Index arithmetic shared between the navigator and its wheel timer.
///
/// Independent of the slide payload so the timer task can hold a `Weak`
/// handle to it without knowing the deck type.
pub(crate) struct NavigatorCore {
    len: usize,
    state: RwLock<NavigatorState>,
    subscribers: RwLock<Vec<Weak<dyn NavigationSubscriber>>>,
}

impl NavigatorCore {
    fn new(len: usize) -> Self {
        Self {
            len,
            state: RwLock::new(NavigatorState {
                current_index: 0,
                direction: Direction::Stationary,
            }),
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Move one slide in `direction`, wrapping at both ends
    pub(crate) fn step(&self, direction: Direction) {
        if self.len == 0 {
            trace!("Ignoring {:?} step on an empty deck", direction);
            return;
        }

        let mut state = self.state.write();
        state.current_index = match direction {
            Direction::Forward => next_index(state.current_index, self.len),
            Direction::Backward => previous_index(state.current_index, self.len),
            Direction::Stationary => state.current_index,
        };
        state.direction = direction;
        debug!("Stepped {:?} to slide {} of {}", direction, state.current_index + 1, self.len);

        drop(state);
        self.notify_subscribers();
    }

    /// Jump to any index, folding it into range
    fn select(&self, index: i64) {
        if self.len == 0 {
            trace!("Ignoring select({}) on an empty deck", index);
            return;
        }

        let target = normalize_index(index, self.len);
        let mut state = self.state.write();

        // Animate along the shorter way round the cycle
        let forward_distance = (target + self.len - state.current_index) % self.len;
        state.direction = if forward_distance == 0 {
            Direction::Stationary
        } else if forward_distance * 2 <= self.len {
            Direction::Forward
        } else {
            Direction::Backward
        };
        state.current_index = target;
        debug!("Selected slide {} of {} (requested {})", target + 1, self.len, index);

        drop(state);
        self.notify_subscribers();
    }

    fn context(&self) -> NavigationContext {
        let state = self.state.read();
        NavigationContext {
            current_index: state.current_index,
            direction: state.direction,
            len: self.len,
        }
    }

    fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let context = self.context();

        // Collect first so callbacks run without the subscriber lock held
        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_navigation_change(&context);
        }
    }
}

/// Keeps the current position over a fixed deck and derives the
/// previous/current/next triplet a three-card carousel renders.
///
/// All methods take `&self`; the state is shared with the optional wheel
/// timer, which steps the navigator from the tokio runtime.
pub struct SlideNavigator<T> {
    deck: SlideDeck<T>,
    core: Arc<NavigatorCore>,
    wheel: Option<WheelDebouncer>,
}

impl<T> SlideNavigator<T> {
    /// Create a navigator positioned on the first slide
    pub fn new(deck: impl Into<SlideDeck<T>>) -> Self {
        let deck = deck.into();
        let core = Arc::new(NavigatorCore::new(deck.len()));
        Self { deck, core, wheel: None }
    }

    /// Enable debounced wheel paging, scheduling steps on `runtime`
    pub fn with_wheel_paging(mut self, runtime: tokio::runtime::Handle, window: Duration) -> Self {
        self.wheel = Some(WheelDebouncer::new(runtime, window, Arc::downgrade(&self.core)));
        self
    }

    pub fn deck(&self) -> &SlideDeck<T> {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Step back one slide, wrapping from the first to the last
    pub fn step_previous(&self) {
        self.core.step(Direction::Backward);
    }

    /// Step forward one slide, wrapping from the last to the first
    pub fn step_next(&self) {
        self.core.step(Direction::Forward);
    }

    /// Jump to `index`; out-of-range and negative values wrap around
    pub fn select_index(&self, index: i64) {
        self.core.select(index);
    }

    pub fn current_index(&self) -> usize {
        self.core.state.read().current_index
    }

    pub fn direction(&self) -> Direction {
        self.core.state.read().direction
    }

    /// Get current navigation context
    pub fn context(&self) -> NavigationContext {
        self.core.context()
    }

    /// The slide under the current index, if the deck is not empty
    pub fn current(&self) -> Option<&T> {
        self.deck.get(self.current_index())
    }

    /// Previous, current and next slides for the current index
    pub fn current_triplet(&self) -> Result<Triplet<&T>, NavigatorError> {
        let len = self.deck.len();
        if len == 0 {
            return Err(NavigatorError::EmptyCollection);
        }

        let index = self.current_index();
        Ok(Triplet {
            previous: &self.deck[previous_index(index, len)],
            current: &self.deck[index],
            next: &self.deck[next_index(index, len)],
        })
    }

    /// Feed a wheel delta (positive pages forward). Ignored when wheel
    /// paging is not enabled.
    pub fn on_wheel(&self, delta_y: f32) {
        match &self.wheel {
            Some(wheel) => wheel.on_wheel(delta_y),
            None => trace!("Wheel paging disabled, dropping delta {}", delta_y),
        }
    }

    /// Whether a debounced step is waiting to fire
    pub fn wheel_state(&self) -> DebounceState {
        self.wheel
            .as_ref()
            .map(WheelDebouncer::state)
            .unwrap_or(DebounceState::Idle)
    }

    /// Drop any pending wheel step
    pub fn cancel_pending_wheel(&self) {
        if let Some(wheel) = &self.wheel {
            wheel.cancel();
        }
    }

    /// Add a subscriber. Held weakly; dropping the `Arc` unsubscribes.
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        self.core.add_subscriber(subscriber);
    }
}

impl<T> std::fmt::Debug for SlideNavigator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideNavigator")
            .field("context", &self.context())
            .field("wheel", &self.wheel_state())
            .finish()
    }
}
