use std::{fmt, sync::Arc};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::listener::{Listener, same_listener};

type Listeners = Vec<Arc<dyn Listener>>;

/// Ordered set of listeners, compared by identity.
///
/// Membership lives behind an [`ArcSwap`]: every `add`/`remove` publishes a new
/// list, and `broadcast` delivers to whichever list was current when it started.
/// A listener may therefore add or remove listeners (itself included) from
/// inside `receive` without affecting the delivery in progress.
pub struct Registry {
    listeners: ArcSwap<Listeners>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Appends `listener` unless the same reference is already registered.
    pub fn add(&self, listener: Arc<dyn Listener>) {
        let mut added = false;

        self.listeners.rcu(|current| {
            added = !current.iter().any(|l| same_listener(l, &listener));
            let mut next = Listeners::clone(current);
            if added {
                next.push(listener.clone());
            }
            next
        });

        if added {
            debug!(total = self.len(), "listener added");
        }
    }

    /// Removes `listener` if registered. Absent listeners are ignored.
    pub fn remove<L: Listener + ?Sized>(&self, listener: &Arc<L>) {
        let mut removed = false;

        self.listeners.rcu(|current| {
            let mut next = Listeners::clone(current);
            let before = next.len();
            next.retain(|l| !same_listener(l, listener));
            removed = next.len() != before;
            next
        });

        if removed {
            debug!(total = self.len(), "listener removed");
        }
    }

    pub fn broadcast(&self, message: &str) {
        let snapshot = self.listeners.load_full();
        debug!(recipients = snapshot.len(), "broadcasting");

        for listener in snapshot.iter() {
            listener.receive(message);
        }
    }

    pub fn contains<L: Listener + ?Sized>(&self, listener: &Arc<L>) -> bool {
        self.listeners
            .load()
            .iter()
            .any(|l| same_listener(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("listeners", &self.len())
            .finish()
    }
}
