use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::{trace, warn};

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type ChangeListener = Box<dyn FnMut() + 'static>;

/// Ordered, synchronous change broadcast.
///
/// Listeners run in subscription order, inline, before `notify` returns.
/// Removing a listener keeps the relative order of the remaining ones.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: IndexMap<ListenerId, ChangeListener>,
    next_id: u64,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Returns `false` when `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(&id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn notify(&mut self) {
        trace!(listeners = self.listeners.len(), "notify change listeners");
        for listener in self.listeners.values_mut() {
            listener();
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Dirty flag kept in sync with a [`ChangeNotifier`].
///
/// Dependents hold one of these instead of a callback into themselves and
/// recompute cached geometry when `take_dirty` reports a change. A watch starts
/// dirty and must be detached explicitly: dropping an attached watch leaves its
/// listener in the notifier until the notifier itself is dropped, and logs a
/// warning.
#[derive(Debug)]
pub struct TransformWatch {
    dirty: Rc<Cell<bool>>,
    listener: Option<ListenerId>,
}

impl TransformWatch {
    pub fn attach(notifier: &mut ChangeNotifier) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let listener = notifier.subscribe(move || flag.set(true));
        Self {
            dirty,
            listener: Some(listener),
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Returns the dirty state and clears it.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    #[must_use]
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.listener
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Unsubscribes from `notifier`. Detaching twice is a no-op returning `false`.
    pub fn detach(&mut self, notifier: &mut ChangeNotifier) -> bool {
        match self.listener.take() {
            Some(id) => notifier.unsubscribe(id),
            None => false,
        }
    }
}

impl Drop for TransformWatch {
    fn drop(&mut self) {
        if let Some(listener) = self.listener {
            warn!(
                ?listener,
                "transform watch dropped while attached; its listener stays subscribed"
            );
        }
    }
}
