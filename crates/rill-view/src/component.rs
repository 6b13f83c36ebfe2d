//! Render-capable components.
//!
//! A [`Component`] is anything that can produce a node on demand. The two
//! lifecycle callbacks default to no-ops; [`attach`] wires them to the
//! lifecycle controller in a props bag, when one is present.

use std::rc::Rc;

use rill_dom::Element;
use rill_reactive::Lifecycle;

use crate::builder::Ui;
use crate::error::ViewError;
use crate::props::{Props, on_destroy, on_mounted};

/// A unit that renders to a node.
pub trait Component {
    /// Produce this component's node.
    ///
    /// # Errors
    ///
    /// Propagates any [`ViewError`] from the builds it performs.
    fn render(&self, ui: &Ui) -> Result<Element, ViewError>;

    /// Called when the owning lifecycle controller mounts.
    fn on_mounted(&self) {}

    /// Called when the owning lifecycle controller is destroyed.
    fn on_destroy(&self) {}
}

/// Register `component`'s own lifecycle callbacks against the controller in
/// `props`, if any.
///
/// Holds only a weak reference: a component dropped before the event fires
/// is simply skipped. Without a controller in the bag this does nothing —
/// components work with or without a lifecycle owner.
pub fn attach<C: Component + 'static>(props: &Props, component: &Rc<C>) {
    let weak = Rc::downgrade(component);
    on_mounted(props, move || {
        if let Some(component) = weak.upgrade() {
            component.on_mounted();
        }
    });
    let weak = Rc::downgrade(component);
    on_destroy(props, move || {
        if let Some(component) = weak.upgrade() {
            component.on_destroy();
        }
    });
}

/// Insert `element` into `target` and fire the subtree's mounted event.
pub fn mount(lifecycle: &Lifecycle, element: Element, target: &Element) {
    target.append_child(element);
    lifecycle.mounted();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_dom::Value;
    use std::cell::Cell;

    struct Probe {
        mounted: Cell<u32>,
        destroyed: Cell<u32>,
    }

    impl Probe {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                mounted: Cell::new(0),
                destroyed: Cell::new(0),
            })
        }
    }

    impl Component for Probe {
        fn render(&self, ui: &Ui) -> Result<Element, ViewError> {
            ui.build("div", Props::new().prop("className", "probe"), Vec::new())
        }

        fn on_mounted(&self) {
            self.mounted.set(self.mounted.get() + 1);
        }

        fn on_destroy(&self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn attach_wires_both_callbacks() {
        let lc = Lifecycle::new();
        let props = Props::new().lifecycle(lc.clone());
        let probe = Probe::new();
        attach(&props, &probe);

        lc.mounted();
        assert_eq!(probe.mounted.get(), 1);
        assert_eq!(probe.destroyed.get(), 0);

        lc.destroy();
        assert_eq!(probe.destroyed.get(), 1);
    }

    #[test]
    fn attach_without_lifecycle_is_a_no_op() {
        let props = Props::new();
        let probe = Probe::new();
        attach(&props, &probe);
        assert_eq!(probe.mounted.get(), 0);
    }

    #[test]
    fn dropped_component_is_skipped() {
        let lc = Lifecycle::new();
        let props = Props::new().lifecycle(lc.clone());
        let probe = Probe::new();
        attach(&props, &probe);
        drop(probe);
        lc.mounted();
        lc.destroy();
        // Nothing to assert beyond "no panic": the weak upgrade fails.
    }

    #[test]
    fn mount_appends_then_fires() {
        let ui = Ui::headless();
        let lc = Lifecycle::new();
        let props = Props::new().lifecycle(lc.clone());
        let probe = Probe::new();
        attach(&props, &probe);

        let root = ui.build("body", Props::new(), Vec::new()).unwrap();
        let view = probe.render(&ui).unwrap();
        mount(&lc, view, &root);

        assert_eq!(root.child_count(), 1);
        assert_eq!(
            root.children()[0].property("className"),
            Some(Value::from("probe"))
        );
        assert_eq!(probe.mounted.get(), 1);
    }
}
