use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::trace;

/// An event that can be published through an [`EventRegistry`].
///
/// The concrete type is the event's shape: subscribers registered for `E`
/// only see events of type `E`.
pub trait Event: Any + Send + Sync {
    /// Value returned by each subscriber.
    type Output: Send + 'static;
}

type Subscriber<E> = Box<dyn Fn(&E) -> <E as Event>::Output + Send + Sync>;

/// Mapping from event type to its ordered subscriber list.
///
/// Subscriptions are permanent. [`EventRegistry::subscribe`] takes the write
/// lock; [`EventRegistry::notify_all`] holds the read lock while every
/// subscriber runs, so concurrent notifications never observe a list that
/// is being modified.
///
/// A subscriber must not call [`EventRegistry::subscribe`] on the registry
/// that is notifying it; that deadlocks. Nested [`EventRegistry::notify_all`]
/// calls from a subscriber can deadlock too: the second read acquisition
/// blocks if a `subscribe` on another thread is already waiting for the
/// write lock.
#[derive(Default)]
pub struct EventRegistry {
    // TypeId of E -> Vec<Subscriber<E>>
    subscribers: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl EventRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    ///
    /// Created on first access and never dropped. Prefer an explicit
    /// registry passed to the components that publish and subscribe; use
    /// this one only when threading a reference through is impractical.
    pub fn global() -> &'static EventRegistry {
        static GLOBAL: OnceLock<EventRegistry> = OnceLock::new();
        GLOBAL.get_or_init(EventRegistry::new)
    }

    /// Append `subscriber` to the list for event type `E`.
    pub fn subscribe<E, F>(&self, subscriber: F)
    where
        E: Event,
        F: Fn(&E) -> E::Output + Send + Sync + 'static,
    {
        // The lists are append-only, so a poisoned lock still guards a
        // consistent map.
        let mut map = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let list = map
            .entry(TypeId::of::<E>())
            .or_insert_with(|| {
                Box::new(Vec::<Subscriber<E>>::new()) as Box<dyn Any + Send + Sync>
            });
        if let Some(list) = list.downcast_mut::<Vec<Subscriber<E>>>() {
            list.push(Box::new(subscriber));
            trace!(
                event = std::any::type_name::<E>(),
                subscribers = list.len(),
                "subscribed"
            );
        }
    }

    /// Invoke every subscriber of `E` in subscription order on the calling
    /// thread, collecting their return values at matching indices.
    ///
    /// Returns an empty (unallocated) vector when `E` has no subscribers.
    pub fn notify_all<E: Event>(&self, event: &E) -> Vec<E::Output> {
        let map = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(list) = map
            .get(&TypeId::of::<E>())
            .and_then(|list| list.downcast_ref::<Vec<Subscriber<E>>>())
        else {
            return Vec::new();
        };
        if list.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::with_capacity(list.len());
        for subscriber in list {
            results.push(subscriber(event));
        }
        results
    }

    /// Number of subscribers registered for `E`.
    pub fn subscriber_count<E: Event>(&self) -> usize {
        let map = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        map.get(&TypeId::of::<E>())
            .and_then(|list| list.downcast_ref::<Vec<Subscriber<E>>>())
            .map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shapes = self
            .subscribers
            .read()
            .map(|map| map.len())
            .unwrap_or_default();
        f.debug_struct("EventRegistry")
            .field("event_types", &shapes)
            .finish()
    }
}
