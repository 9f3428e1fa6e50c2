//! Enter/exit animation parameters keyed by step direction
//!
//! The navigator only decides *where* a card comes from and goes to; the UI
//! layer does the actual interpolation.

use super::Direction;
use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Axis the carousel pages along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Distance a card travels when entering or leaving, in points
    pub fn travel(self) -> f32 {
        match self {
            Orientation::Horizontal => 300.0,
            Orientation::Vertical => 400.0,
        }
    }

    /// Scale of a card while off-centre
    pub fn off_scale(self) -> f32 {
        match self {
            Orientation::Horizontal => 0.95,
            Orientation::Vertical => 0.9,
        }
    }
}

/// One pose of the main card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl MotionFrame {
    pub const CENTER: MotionFrame = MotionFrame {
        offset_x: 0.0,
        offset_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Linear blend between two poses, `t` clamped to `[0, 1]`
    pub fn lerp(self, to: MotionFrame, t: f32) -> MotionFrame {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        MotionFrame {
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            opacity: mix(self.opacity, to.opacity),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Spring parameters handed to the animation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl Spring {
    /// Damping ratio; below 1.0 the spring overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Approximate time to settle within 2% of the target, zero when the
    /// parameters give no finite non-negative time
    pub fn settle_time(&self) -> Duration {
        // 4 / (zeta * omega_n) reduces to 8m / c
        Duration::try_from_secs_f32(8.0 * self.mass / self.damping.max(f32::EPSILON))
            .unwrap_or(Duration::ZERO)
    }
}

/// Ease-out curve used to approximate the spring without overshoot
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Enter/centre/exit poses for one orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVariants {
    pub orientation: Orientation,
    pub spring: Spring,
}

impl CardVariants {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spring: Spring::default(),
        }
    }

    /// Pose a new card starts from: beyond the far edge when stepping forward
    pub fn enter(&self, direction: Direction) -> MotionFrame {
        let offset = if direction.signum() > 0 {
            self.orientation.travel()
        } else {
            -self.orientation.travel()
        };
        self.off_centre(offset)
    }

    pub fn center(&self) -> MotionFrame {
        MotionFrame::CENTER
    }

    /// Pose the outgoing card ends at: opposite side from where the new one enters
    pub fn exit(&self, direction: Direction) -> MotionFrame {
        let offset = if direction.signum() < 0 {
            self.orientation.travel()
        } else {
            -self.orientation.travel()
        };
        self.off_centre(offset)
    }

    fn off_centre(&self, offset: f32) -> MotionFrame {
        let (offset_x, offset_y) = match self.orientation {
            Orientation::Horizontal => (offset, 0.0),
            Orientation::Vertical => (0.0, offset),
        };
        MotionFrame {
            offset_x,
            offset_y,
            opacity: 0.0,
            scale: self.orientation.off_scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_forward_enters_from_right_exits_left() {
        let variants = CardVariants::new(Orientation::Horizontal);
        let enter = variants.enter(Direction::Forward);
        let exit = variants.exit(Direction::Forward);

        assert_eq!(enter.offset_x, 300.0);
        assert_eq!(enter.offset_y, 0.0);
        assert_eq!(enter.scale, 0.95);
        assert_eq!(exit.offset_x, -300.0);
        assert_eq!(exit.opacity, 0.0);
    }

    #[test]
    fn test_vertical_backward_enters_from_top_exits_bottom() {
        let variants = CardVariants::new(Orientation::Vertical);
        let enter = variants.enter(Direction::Backward);
        let exit = variants.exit(Direction::Backward);

        assert_eq!(enter.offset_y, -400.0);
        assert_eq!(enter.offset_x, 0.0);
        assert_eq!(exit.offset_y, 400.0);
        assert_eq!(exit.scale, 0.9);
    }

    #[test]
    fn test_stationary_uses_negative_side_for_both() {
        let variants = CardVariants::new(Orientation::Horizontal);
        assert_eq!(variants.enter(Direction::Stationary).offset_x, -300.0);
        assert_eq!(variants.exit(Direction::Stationary).offset_x, -300.0);
    }

    #[test]
    fn test_settle_time_is_total() {
        let negative = Spring { mass: -1.0, ..Spring::default() };
        assert_eq!(negative.settle_time(), Duration::ZERO);

        let huge = Spring { mass: 1e30, ..Spring::default() };
        assert_eq!(huge.settle_time(), Duration::ZERO);

        let nan = Spring { mass: f32::NAN, ..Spring::default() };
        assert_eq!(nan.settle_time(), Duration::ZERO);
    }

    #[test]
    fn test_lerp_endpoints() {
        let variants = CardVariants::new(Orientation::Vertical);
        let from = variants.enter(Direction::Forward);

        assert_eq!(from.lerp(MotionFrame::CENTER, 0.0), from);
        assert_eq!(from.lerp(MotionFrame::CENTER, 1.0), MotionFrame::CENTER);
        assert_eq!(from.lerp(MotionFrame::CENTER, 0.5).offset_y, 200.0);
    }

    #[test]
    fn test_default_spring_settles_quickly() {
        let spring = Spring::default();
        assert!(spring.damping_ratio() < 1.0);
        let settle = spring.settle_time().as_secs_f32();
        assert!(settle > 0.25 && settle < 0.3);
    }

    #[test]
    fn test_ease_out_bounds() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
