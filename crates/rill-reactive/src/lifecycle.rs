//! Mount/destroy event controllers for component trees.
//!
//! A [`Lifecycle`] is a tri-state emitter owned by whichever code mounts a
//! subtree. Components register hooks against it; the owner fires
//! [`mounted`](Lifecycle::mounted) after inserting the subtree into its host
//! and [`destroy`](Lifecycle::destroy) when tearing it down.
//!
//! # Invariants
//!
//! 1. Hooks run in registration order.
//! 2. `mounted()` is not idempotent: calling it again re-runs every mounted
//!    hook (the stage simply stays `Mounted`).
//! 3. `destroy()` runs the destroy hooks once, then clears *all* hooks; the
//!    controller is destroyed meaningfully only once.
//! 4. Hooks registered on a destroyed controller are dropped and never run.
//!    Registration must happen before the corresponding trigger fires; a
//!    mounted hook registered after `mounted()` only runs if `mounted()`
//!    fires again.

use std::cell::RefCell;
use std::rc::Rc;

/// The two events a [`Lifecycle`] can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The owning subtree was inserted into its host.
    Mounted,
    /// The owning subtree is being torn down.
    Destroy,
}

/// Where a controller currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleStage {
    /// Neither event has fired yet.
    #[default]
    Idle,
    /// `mounted()` has fired at least once.
    Mounted,
    /// `destroy()` has fired; the controller is spent.
    Destroyed,
}

type Hook = Rc<dyn Fn()>;

#[derive(Default)]
struct Inner {
    stage: LifecycleStage,
    mounted: Vec<Hook>,
    destroy: Vec<Hook>,
}

/// Shared tri-state mount/destroy controller. `Clone` shares state.
#[derive(Clone, Default)]
pub struct Lifecycle {
    inner: Rc<RefCell<Inner>>,
}

impl Lifecycle {
    /// Create a fresh controller in the [`LifecycleStage::Idle`] stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `hook` for `event`.
    ///
    /// On a destroyed controller the registration is dropped: the hooks were
    /// already cleared and will never run again, so holding the closure
    /// would only leak it.
    pub fn hook(&self, event: LifecycleEvent, hook: impl Fn() + 'static) {
        let mut inner = self.inner.borrow_mut();
        if inner.stage == LifecycleStage::Destroyed {
            tracing::warn!(?event, "hook registered after destroy; dropped");
            return;
        }
        match event {
            LifecycleEvent::Mounted => inner.mounted.push(Rc::new(hook)),
            LifecycleEvent::Destroy => inner.destroy.push(Rc::new(hook)),
        }
    }

    /// Fire the mounted event: run every mounted hook in registration order.
    ///
    /// Does nothing on a destroyed controller.
    pub fn mounted(&self) {
        let hooks: Vec<Hook> = {
            let mut inner = self.inner.borrow_mut();
            if inner.stage == LifecycleStage::Destroyed {
                return;
            }
            inner.stage = LifecycleStage::Mounted;
            inner.mounted.clone()
        };
        tracing::trace!(hooks = hooks.len(), "lifecycle mounted");
        for hook in hooks {
            hook();
        }
    }

    /// Fire the destroy event: run every destroy hook in registration order,
    /// then clear all hooks. Subsequent calls do nothing.
    pub fn destroy(&self) {
        let hooks: Vec<Hook> = {
            let mut inner = self.inner.borrow_mut();
            if inner.stage == LifecycleStage::Destroyed {
                return;
            }
            inner.stage = LifecycleStage::Destroyed;
            inner.mounted.clear();
            std::mem::take(&mut inner.destroy)
        };
        tracing::trace!(hooks = hooks.len(), "lifecycle destroy");
        for hook in hooks {
            hook();
        }
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> LifecycleStage {
        self.inner.borrow().stage
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Lifecycle")
            .field("stage", &inner.stage)
            .field("mounted_hooks", &inner.mounted.len())
            .field("destroy_hooks", &inner.destroy.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn mounted_runs_hooks_in_order() {
        let lc = Lifecycle::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b"] {
            let order = Rc::clone(&order);
            lc.hook(LifecycleEvent::Mounted, move || order.borrow_mut().push(tag));
        }
        lc.mounted();
        assert_eq!(*order.borrow(), vec!["a", "b"]);
        assert_eq!(lc.stage(), LifecycleStage::Mounted);
    }

    #[test]
    fn mounted_twice_reinvokes() {
        let lc = Lifecycle::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        lc.hook(LifecycleEvent::Mounted, move || c.set(c.get() + 1));
        lc.mounted();
        lc.mounted();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn destroy_runs_hooks_then_clears() {
        let lc = Lifecycle::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        lc.hook(LifecycleEvent::Destroy, move || c.set(c.get() + 1));
        lc.destroy();
        assert_eq!(count.get(), 1);
        assert_eq!(lc.stage(), LifecycleStage::Destroyed);

        // Spent: a second destroy is a no-op.
        lc.destroy();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn hook_after_destroy_never_runs() {
        let lc = Lifecycle::new();
        lc.destroy();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        lc.hook(LifecycleEvent::Destroy, move || f.set(true));
        lc.destroy();
        lc.mounted();
        assert!(!fired.get());
    }

    #[test]
    fn mounted_before_registration_never_runs_late_hook() {
        // Ordering trap from the module docs: firing happens against the
        // hooks registered at that moment, never retroactively.
        let lc = Lifecycle::new();
        lc.mounted();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        lc.hook(LifecycleEvent::Mounted, move || f.set(true));
        assert!(!fired.get());
    }

    #[test]
    fn destroy_does_not_run_mounted_hooks() {
        let lc = Lifecycle::new();
        let mounted = Rc::new(Cell::new(0));
        let destroyed = Rc::new(Cell::new(0));
        let m = Rc::clone(&mounted);
        lc.hook(LifecycleEvent::Mounted, move || m.set(m.get() + 1));
        let d = Rc::clone(&destroyed);
        lc.hook(LifecycleEvent::Destroy, move || d.set(d.get() + 1));

        lc.destroy();
        assert_eq!(mounted.get(), 0);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn clone_shares_controller() {
        let lc = Lifecycle::new();
        let other = lc.clone();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        other.hook(LifecycleEvent::Mounted, move || f.set(true));
        lc.mounted();
        assert!(fired.get());
    }
}
