//! Shared observable cells with synchronous subscriber notification.
//!
//! [`Observable<T>`] owns a value and an ordered list of subscriber
//! callbacks. Writing through [`val`](Observable::val) or
//! [`set`](Observable::set) replaces the value and runs every current
//! subscriber before returning. Cloning an `Observable` produces another
//! handle to the same cell.
//!
//! # Notification policy
//!
//! Each pass snapshots the subscriber list up front, so:
//!
//! - a subscriber cancelled mid-pass still receives the in-flight value;
//! - a subscriber registered mid-pass first fires on the *next* pass;
//! - callbacks may freely subscribe, cancel, or write observables (including
//!   this one) without tripping any interior borrow.
//!
//! Each callback re-reads the cell at its own invocation, so a re-entrant
//! write is visible to the subscribers that run after it.
//!
//! # Cycles
//!
//! A subscriber that synchronously writes the observable it listens to
//! recurses. There is no cycle detection beyond a depth counter: once a
//! single cell's notification depth exceeds [`MAX_NOTIFY_DEPTH`] the write
//! panics with a reactive-cycle message. This is a programmer-usage error,
//! surfaced immediately rather than deferred or swallowed.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Maximum re-entrant notification depth for a single observable before the
/// write is treated as an unbounded reactive cycle.
pub const MAX_NOTIFY_DEPTH: u32 = 64;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    value: T,
    /// `(id, callback)` pairs in registration order. Ids are never reused,
    /// which is what makes [`Subscription`] removal unambiguous even when
    /// the same closure is registered twice.
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

struct Shared<T> {
    registry: RefCell<Registry<T>>,
    /// Current notification depth for this cell; lives outside the
    /// `RefCell` so it stays readable while callbacks run.
    depth: Cell<u32>,
}

/// A shared, synchronously-notifying mutable cell.
///
/// `Clone` is shallow: all clones read and write the same value and share
/// one subscriber list.
pub struct Observable<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.shared.registry.borrow();
        f.debug_struct("Observable")
            .field("value", &registry.value)
            .field("subscribers", &registry.subscribers.len())
            .finish()
    }
}

impl<T: 'static> Observable<T> {
    /// Create a new observable holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                registry: RefCell::new(Registry {
                    value,
                    subscribers: Vec::new(),
                    next_id: 0,
                }),
                depth: Cell::new(0),
            }),
        }
    }

    /// Read the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.registry.borrow().value)
    }

    /// Register `callback` to run on every subsequent write, after all
    /// previously registered subscribers.
    ///
    /// The same closure may be registered more than once; it then runs once
    /// per registration. The returned [`Subscription`] is the callback's
    /// identity: drop it (or call [`Subscription::cancel`]) to unsubscribe,
    /// or [`Subscription::forget`] to leave the callback registered for the
    /// cell's lifetime.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.shared.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, Rc::new(callback)));
            id
        };
        let weak: Weak<Shared<T>> = Rc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared
                    .registry
                    .borrow_mut()
                    .subscribers
                    .retain(|(sid, _)| *sid != id);
            }
        })
    }

    /// Remove every subscriber. The value is untouched; outstanding
    /// [`Subscription`] guards become inert.
    pub fn unsubscribe_all(&self) {
        self.shared.registry.borrow_mut().subscribers.clear();
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.registry.borrow().subscribers.len()
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.registry.borrow().value.clone()
    }

    /// Replace the value unconditionally and notify every subscriber.
    ///
    /// There is no equality short-circuit: writing the value already held
    /// still produces a full notification pass.
    ///
    /// # Panics
    ///
    /// Panics if re-entrant writes to this cell exceed [`MAX_NOTIFY_DEPTH`]
    /// (a reactive update cycle).
    pub fn val(&self, value: T) {
        self.shared.registry.borrow_mut().value = value;
        self.notify_all();
    }

    /// Compute a new value from the current one, store it, and notify.
    ///
    /// The updater runs while the cell's interior borrow is held, so it may
    /// read the observable but must not write it; write from the subscriber
    /// side instead.
    pub fn set(&self, f: impl FnOnce(&T) -> T) {
        let next = {
            let registry = self.shared.registry.borrow();
            f(&registry.value)
        };
        self.val(next);
    }

    fn notify_all(&self) {
        let depth = self.shared.depth.get();
        assert!(
            depth < MAX_NOTIFY_DEPTH,
            "reactive update cycle: observable notified re-entrantly more than \
             {MAX_NOTIFY_DEPTH} times; a subscriber is writing the observable it listens to"
        );
        self.shared.depth.set(depth + 1);
        let _guard = DepthGuard(&self.shared.depth);

        // Snapshot so callbacks can mutate the subscriber list freely.
        let snapshot: Vec<Callback<T>> = {
            let registry = self.shared.registry.borrow();
            registry.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect()
        };
        tracing::trace!(subscribers = snapshot.len(), depth, "notify pass");
        for callback in snapshot {
            // Re-read per callback: a re-entrant write by an earlier
            // subscriber must be visible to later ones.
            let current = self.shared.registry.borrow().value.clone();
            callback(&current);
        }
    }
}

struct DepthGuard<'a>(&'a Cell<u32>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl<T: Clone + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// RAII identity of one registered subscriber callback.
///
/// Dropping the guard removes the callback from its observable. The guard
/// holds only a weak reference, so it never keeps a cell alive.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the callback now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Consume the guard without unsubscribing, leaving the callback
    /// registered for as long as the observable lives.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
