use serde::{Serialize, Deserialize};

mod debounce;
mod engine;
pub mod motion;
mod subscriber;

pub use debounce::{DebounceState, WheelDebouncer, DEFAULT_DEBOUNCE};
pub use engine::SlideNavigator;
pub use motion::{ease_out, CardVariants, MotionFrame, Orientation, Spring};
pub use subscriber::NavigationSubscriber;

/// Sign of the most recent navigation step.
///
/// Only used to pick animation offsets; it never affects index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    #[default]
    Stationary,
    Forward,
}

impl Direction {
    /// -1, 0 or +1
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Stationary => 0,
            Direction::Forward => 1,
        }
    }

    /// Map a wheel delta to a paging direction. Zero and NaN map to nothing.
    pub fn from_wheel_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }
}

/// The three slides visible at once: previous preview, main card, next preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<T> {
    pub previous: T,
    pub current: T,
    pub next: T,
}

impl<T> Triplet<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Triplet<U> {
        Triplet {
            previous: f(self.previous),
            current: f(self.current),
            next: f(self.next),
        }
    }
}

/// Snapshot passed to subscribers and views after a navigation change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    pub current_index: usize,
    pub direction: Direction,
    pub len: usize,
}

impl NavigationContext {
    pub fn previous_index(&self) -> Option<usize> {
        (self.len > 0).then(|| previous_index(self.current_index, self.len))
    }

    pub fn next_index(&self) -> Option<usize> {
        (self.len > 0).then(|| next_index(self.current_index, self.len))
    }
}

/// Index before `index` in a cycle of `len` items. `len` must be non-zero.
pub fn previous_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Index after `index` in a cycle of `len` items. `len` must be non-zero.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Fold any integer into `[0, len)`. `len` must be non-zero.
pub fn normalize_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_neighbours() {
        assert_eq!(previous_index(0, 5), 4);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(previous_index(0, 1), 0);
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(7, 5), 2);
        assert_eq!(normalize_index(-1, 5), 4);
        assert_eq!(normalize_index(-11, 5), 4);
        assert_eq!(normalize_index(3, 1), 0);
    }

    #[test]
    fn test_wheel_delta_direction() {
        assert_eq!(Direction::from_wheel_delta(12.5), Some(Direction::Forward));
        assert_eq!(Direction::from_wheel_delta(-0.1), Some(Direction::Backward));
        assert_eq!(Direction::from_wheel_delta(0.0), None);
        assert_eq!(Direction::from_wheel_delta(f32::NAN), None);
    }

    #[test]
    fn test_context_neighbours_on_empty() {
        let ctx = NavigationContext { current_index: 0, direction: Direction::Stationary, len: 0 };
        assert_eq!(ctx.previous_index(), None);
        assert_eq!(ctx.next_index(), None);
    }
}
