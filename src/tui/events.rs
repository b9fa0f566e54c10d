/// Host-wide input listener registry
///
/// Stands in for document-level `mousedown`/`keydown` listeners. Owners
/// subscribe to a kind of global input and receive a [`Subscription`] guard;
/// the runtime only delivers global input to owners with a live subscription.
/// Dropping the guard removes the registration.
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Kind of global input a listener receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerDown,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Identity of a listener owner (one per widget instance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_listener: u64,
    next_owner: u64,
    entries: BTreeMap<ListenerId, (ListenerKind, OwnerId)>,
}

/// Shared handle to the global listener registry
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct GlobalEvents {
    inner: Rc<RefCell<Registry>>,
}

impl GlobalEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh owner identity
    pub fn register_owner(&self) -> OwnerId {
        let mut registry = self.inner.borrow_mut();
        registry.next_owner += 1;
        OwnerId(registry.next_owner)
    }

    /// Register a listener; it stays active until the returned guard is dropped
    pub fn subscribe(&self, kind: ListenerKind, owner: OwnerId) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        registry.next_listener += 1;
        let id = ListenerId(registry.next_listener);
        registry.entries.insert(id, (kind, owner));
        debug!("LISTENER: attached {:?} {:?} for {:?}", id, kind, owner);

        Subscription {
            id,
            kind,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Total number of active listeners
    pub fn active_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Number of active listeners held by `owner`
    pub fn count_for(&self, owner: OwnerId) -> usize {
        self.inner
            .borrow()
            .entries
            .values()
            .filter(|(_, o)| *o == owner)
            .count()
    }

    pub fn is_subscribed(&self, owner: OwnerId, kind: ListenerKind) -> bool {
        self.inner
            .borrow()
            .entries
            .values()
            .any(|(k, o)| *k == kind && *o == owner)
    }

    /// Owners listening for `kind`, in registration order
    pub fn subscribers(&self, kind: ListenerKind) -> Vec<OwnerId> {
        let subscribers: Vec<OwnerId> = self
            .inner
            .borrow()
            .entries
            .values()
            .filter(|(k, _)| *k == kind)
            .map(|(_, o)| *o)
            .collect();
        trace!("LISTENER: {} subscriber(s) for {:?}", subscribers.len(), kind);
        subscribers
    }
}

/// Live registration of a global listener
///
/// Holds only a weak reference so the registry may be torn down first.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    kind: ListenerKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.remove(&self.id);
            debug!("LISTENER: detached {:?} {:?}", self.id, self.kind);
        }
    }
}
