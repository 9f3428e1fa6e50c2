//! Core functionality for the PromptDeck dashboard
//!
//! This crate provides the slide model, the cyclic slide navigator with its
//! debounced wheel paging, and the dashboard state shared by the UI.

pub mod config;
pub mod demo;
pub mod events;
pub mod navigation;
pub mod slide;
pub mod state;

use thiserror::Error;

// Re-export commonly used types
pub use config::{ConfigError, DashboardConfig, NavigatorConfig};
pub use navigation::{
    Direction, NavigationContext, NavigationSubscriber, SlideNavigator, Triplet,
    DebounceState, WheelDebouncer, Orientation, CardVariants,
};
pub use slide::{IconKind, Slide, SlideDeck, UserProfile};
pub use state::{DashboardState, ModalKind, ModalState};

/// Errors raised by the slide navigator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// The deck has no slides, so there is nothing to show
    #[error("slide collection is empty")]
    EmptyCollection,
}
