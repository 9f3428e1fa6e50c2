//! Debounced wheel paging
//!
//! Raw wheel events arrive at high frequency with small deltas. Each event
//! cancels the pending step and schedules a new one after a quiet period, so a
//! whole scroll gesture settles into a single step in the direction of the
//! last event.

use super::engine::NavigatorCore;
use super::Direction;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Quiet period used when no configuration overrides it
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Observable state of the wheel debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    PendingStep(Direction),
}

#[derive(Debug, Default)]
struct Pending {
    state: DebounceState,
    /// Bumped on every event; a timer only fires if its generation is current
    generation: u64,
}

/// Cancellable single-shot timer that turns wheel deltas into steps.
///
/// Holds the navigator weakly: a timer outliving its navigator does nothing.
/// Dropping the debouncer aborts the pending timer.
pub struct WheelDebouncer {
    runtime: Handle,
    window: Duration,
    target: Weak<NavigatorCore>,
    pending: Arc<Mutex<Pending>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl WheelDebouncer {
    pub(crate) fn new(runtime: Handle, window: Duration, target: Weak<NavigatorCore>) -> Self {
        Self {
            runtime,
            window,
            target,
            pending: Arc::new(Mutex::new(Pending::default())),
            timer: Mutex::new(None),
        }
    }

    pub fn state(&self) -> DebounceState {
        self.pending.lock().state
    }

    /// Handle one wheel event. Positive deltas page forward, negative
    /// backward; a zero delta only cancels what was pending.
    pub fn on_wheel(&self, delta_y: f32) {
        let requested = Direction::from_wheel_delta(delta_y);
        let generation = {
            let mut pending = self.pending.lock();
            pending.generation = pending.generation.wrapping_add(1);
            pending.state = match requested {
                Some(direction) => DebounceState::PendingStep(direction),
                None => DebounceState::Idle,
            };
            pending.generation
        };

        let mut timer = self.timer.lock();
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let Some(direction) = requested else {
            trace!("Zero wheel delta, nothing scheduled");
            return;
        };

        let deadline = tokio::time::Instant::now() + self.window;
        let pending = Arc::clone(&self.pending);
        let target = self.target.clone();

        trace!("Scheduling {:?} step in {:?}", direction, self.window);
        *timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            fire(&pending, generation, &target, direction);
        }));
    }

    /// Drop the pending step, if any
    pub fn cancel(&self) {
        {
            let mut pending = self.pending.lock();
            pending.generation = pending.generation.wrapping_add(1);
            pending.state = DebounceState::Idle;
        }
        if let Some(timer) = self.timer.lock().take() {
            timer.abort();
        }
    }
}

/// Timer expiry: apply the step unless a newer event superseded it
fn fire(pending: &Mutex<Pending>, generation: u64, target: &Weak<NavigatorCore>, direction: Direction) {
    {
        let mut pending = pending.lock();
        if pending.generation != generation {
            trace!("Stale wheel timer (generation {}), skipping", generation);
            return;
        }
        pending.state = DebounceState::Idle;
    }

    match target.upgrade() {
        Some(core) => {
            debug!("Wheel gesture settled, stepping {:?}", direction);
            core.step(direction);
        }
        None => trace!("Navigator gone before wheel step fired"),
    }
}

impl Drop for WheelDebouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().take() {
            timer.abort();
        }
    }
}

impl std::fmt::Debug for WheelDebouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelDebouncer")
            .field("window", &self.window)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::navigation::{NavigationContext, NavigationSubscriber, SlideNavigator};
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::{sleep, Instant};

    fn paging_navigator(len: u32) -> SlideNavigator<u32> {
        SlideNavigator::new((0..len).collect::<Vec<_>>())
            .with_wheel_paging(Handle::current(), DEFAULT_DEBOUNCE)
    }

    struct StepLog {
        steps: AtomicUsize,
        fired_at: Mutex<Vec<Instant>>,
    }

    impl NavigationSubscriber for StepLog {
        fn on_navigation_change(&self, _context: &NavigationContext) {
            self.steps.fetch_add(1, Ordering::SeqCst);
            self.fired_at.lock().push(Instant::now());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_coalesces_into_one_step() {
        let navigator = paging_navigator(5);
        let log = Arc::new(StepLog { steps: AtomicUsize::new(0), fired_at: Mutex::new(Vec::new()) });
        navigator.add_subscriber(log.clone());
        let start = Instant::now();

        navigator.on_wheel(4.0);
        sleep(Duration::from_millis(50)).await;
        navigator.on_wheel(4.0);
        sleep(Duration::from_millis(50)).await;
        navigator.on_wheel(4.0);
        assert_eq!(navigator.wheel_state(), DebounceState::PendingStep(Direction::Forward));

        // Last event at t=100ms, so nothing before t=300ms
        sleep(Duration::from_millis(199)).await;
        assert_eq!(navigator.current_index(), 0);
        assert_eq!(log.steps.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(navigator.current_index(), 1);
        assert_eq!(log.steps.load(Ordering::SeqCst), 1);
        assert_eq!(navigator.wheel_state(), DebounceState::Idle);
        let elapsed = log.fired_at.lock()[0] - start;
        assert!(elapsed >= Duration::from_millis(300) && elapsed < Duration::from_millis(301));

        sleep(Duration::from_secs(1)).await;
        assert_eq!(log.steps.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_sign_wins() {
        let navigator = paging_navigator(5);

        navigator.on_wheel(10.0);
        sleep(Duration::from_millis(20)).await;
        navigator.on_wheel(-3.0);
        assert_eq!(navigator.wheel_state(), DebounceState::PendingStep(Direction::Backward));

        sleep(Duration::from_millis(250)).await;
        assert_eq!(navigator.current_index(), 4);
        assert_eq!(navigator.direction(), Direction::Backward);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delta_schedules_nothing() {
        let navigator = paging_navigator(5);

        navigator.on_wheel(0.0);
        assert_eq!(navigator.wheel_state(), DebounceState::Idle);
        sleep(Duration::from_millis(500)).await;
        assert_eq!(navigator.current_index(), 0);

        // A zero delta also clears a pending step
        navigator.on_wheel(5.0);
        navigator.on_wheel(0.0);
        sleep(Duration::from_millis(500)).await;
        assert_eq!(navigator.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_gestures_step_separately() {
        let navigator = paging_navigator(5);

        navigator.on_wheel(1.0);
        sleep(Duration::from_millis(300)).await;
        navigator.on_wheel(1.0);
        sleep(Duration::from_millis(300)).await;

        assert_eq!(navigator.current_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_step() {
        let navigator = paging_navigator(5);

        navigator.on_wheel(1.0);
        navigator.cancel_pending_wheel();
        assert_eq!(navigator.wheel_state(), DebounceState::Idle);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(navigator.current_index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_expiry_fires_nothing() {
        let navigator = paging_navigator(5);
        let log = Arc::new(StepLog { steps: AtomicUsize::new(0), fired_at: Mutex::new(Vec::new()) });
        navigator.add_subscriber(log.clone());

        navigator.on_wheel(1.0);
        drop(navigator);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(log.steps.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timer_outliving_navigator_is_harmless() {
        let pending = Arc::new(Mutex::new(Pending::default()));
        let dead: Weak<NavigatorCore> = Weak::new();

        // Fire directly as a timer would after its navigator went away
        fire(&pending, 0, &dead, Direction::Forward);
        assert_eq!(pending.lock().state, DebounceState::Idle);
    }
}
