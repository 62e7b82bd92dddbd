//! Observer list implementation.

use uuid::Uuid;

/// Subscription handle for unsubscribing from notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Receiver of notifications of type `E`.
///
/// Implemented for every `FnMut(&E)` closure, so most callers register a
/// closure. Types that need named state can implement it directly.
pub trait Observer<E> {
    fn observe(&mut self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event)
    }
}

/// Ordered, single-threaded list of observers.
pub struct ObserverList<E> {
    entries: Vec<(SubscriptionId, Box<dyn Observer<E>>)>,
}

impl<E> ObserverList<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers an observer and returns the handle used to remove it.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: Observer<E> + 'static,
    {
        let id = SubscriptionId::new();
        self.entries.push((id, Box::new(observer)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Removes an observer by identity.
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Delivers `event` to every observer in registration order.
    pub fn publish(&mut self, event: &E) {
        for (_, observer) in self.entries.iter_mut() {
            observer.observe(event);
        }
    }

    /// Get the number of active subscriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for ObserverList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for ObserverList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("subscribers", &self.len())
            .finish()
    }
}
