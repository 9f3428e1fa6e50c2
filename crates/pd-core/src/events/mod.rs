use std::any::{Any, TypeId};
use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

type BoxedHandler = Box<dyn FnMut(&dyn Any) + Send + Sync>;

/// Dashboard-wide event bus
///
/// Handlers are keyed by event type and invoked synchronously, in
/// subscription order, on the publishing thread.
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<TypeId, Vec<BoxedHandler>>>>,
}

/// Marker trait for events carried by the bus
pub trait Event: Send + Sync + 'static {}

/// Common dashboard events
pub mod events {
    use super::Event;
    use crate::navigation::Direction;
    use crate::state::ModalKind;

    /// A modal overlay was shown
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ModalOpened {
        pub kind: ModalKind,
    }

    /// A modal overlay was dismissed
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ModalClosed {
        pub kind: ModalKind,
    }

    /// A carousel moved to another slide
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SlideChanged {
        pub deck: &'static str,
        pub index: usize,
        pub direction: Direction,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(impl Event for $t {})*
        }
    }

    impl_event!(ModalOpened, ModalClosed, SlideChanged);
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E, F>(&self, mut handler: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        let boxed: BoxedHandler = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });
        self.handlers
            .lock()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(boxed);
    }

    /// Publish an event to every handler registered for its type
    pub fn publish<E: Event>(&self, event: E) {
        let mut handlers = self.handlers.lock();
        if let Some(event_handlers) = handlers.get_mut(&TypeId::of::<E>()) {
            for handler in event_handlers.iter_mut() {
                handler(&event);
            }
        }
    }

    /// Number of handlers registered for `E`
    pub fn handler_count<E: Event>(&self) -> usize {
        self.handlers
            .lock()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.handlers.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::events::{ModalClosed, ModalOpened};
    use super::*;
    use crate::state::ModalKind;

    #[test]
    fn test_handlers_receive_only_their_type() {
        let bus = EventBus::new();
        let opened = Arc::new(Mutex::new(Vec::new()));
        let closed = Arc::new(Mutex::new(0usize));

        let sink = opened.clone();
        bus.subscribe(move |event: &ModalOpened| sink.lock().push(event.kind));
        let counter = closed.clone();
        bus.subscribe(move |_: &ModalClosed| *counter.lock() += 1);

        bus.publish(ModalOpened { kind: ModalKind::Companion });
        bus.publish(ModalOpened { kind: ModalKind::User });
        bus.publish(ModalClosed { kind: ModalKind::User });

        assert_eq!(*opened.lock(), vec![ModalKind::Companion, ModalKind::User]);
        assert_eq!(*closed.lock(), 1);
        assert_eq!(bus.handler_count::<ModalOpened>(), 1);
    }

    #[test]
    fn test_publish_without_handlers_is_noop() {
        let bus = EventBus::new();
        bus.publish(ModalClosed { kind: ModalKind::Templates });
        assert_eq!(bus.handler_count::<ModalClosed>(), 0);
    }
}
