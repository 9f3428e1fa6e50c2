//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that need to respond to slide changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after the current index or direction changes
    fn on_navigation_change(&self, context: &NavigationContext);
}
