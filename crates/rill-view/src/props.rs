//! Property bags for element construction.
//!
//! A [`Props`] mixes static values and reactive bindings, keyed by node
//! property name and applied in insertion order. The non-property concerns
//! (`children`, the lifecycle controller, the pre-return hook) are explicit
//! typed fields here, so the builder dispatches on a closed [`Prop`] enum
//! instead of probing value shapes at runtime.

use std::rc::Rc;

use rill_dom::{Element, Event, Value};
use rill_reactive::{Lifecycle, LifecycleEvent, Observable};

use crate::binding::{Compute, MapBinding};
use crate::component::Component;

/// One entry in a property bag.
pub enum Prop {
    /// Static value, assigned once.
    Value(Value),
    /// Plain observable: assigned immediately, re-assigned on every change.
    Bind(Observable<Value>),
    /// Derived binding: transform applied immediately and on every change.
    Compute(Compute),
    /// Event handler, stored under the property name (e.g. `onclick`).
    Handler(Rc<dyn Fn(&Event)>),
}

impl std::fmt::Debug for Prop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Bind(_) => f.write_str("Bind(..)"),
            Self::Compute(_) => f.write_str("Compute(..)"),
            Self::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// A child passed to the builder: a ready node or a render-capable
/// component.
#[derive(Clone)]
pub enum Child {
    /// An already-built node.
    Node(Element),
    /// A component; the builder renders it on append.
    Component(Rc<dyn Component>),
}

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Self::Node(el)
    }
}

impl std::fmt::Debug for Child {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(el) => f.debug_tuple("Node").field(el).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

/// The `children` property: a fixed list or a reactive projection.
#[derive(Debug)]
pub enum ChildSpec {
    /// Fixed child list, appended once.
    Static(Vec<Child>),
    /// Reactive list driven by a [`MapBinding`]; rebuilt wholesale on every
    /// source change.
    Reactive(MapBinding),
}

type BeforeHook = Box<dyn FnOnce(&Element)>;

/// Key-value configuration for one element build.
#[derive(Default)]
pub struct Props {
    pub(crate) entries: Vec<(String, Prop)>,
    pub(crate) children: Option<ChildSpec>,
    /// Lifecycle controller owning the element's subtree, if any.
    pub lifecycle: Option<Lifecycle>,
    pub(crate) before: Option<BeforeHook>,
}

impl Props {
    /// Empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), Prop::Value(value.into())));
        self
    }

    /// Bind a property to an observable.
    #[must_use]
    pub fn bind(mut self, key: impl Into<String>, source: &Observable<Value>) -> Self {
        self.entries.push((key.into(), Prop::Bind(source.clone())));
        self
    }

    /// Bind a property to a derived [`Compute`] value.
    #[must_use]
    pub fn computed(mut self, key: impl Into<String>, compute: Compute) -> Self {
        self.entries.push((key.into(), Prop::Compute(compute)));
        self
    }

    /// Register an event handler property.
    #[must_use]
    pub fn handler(mut self, key: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.entries
            .push((key.into(), Prop::Handler(Rc::new(handler))));
        self
    }

    /// Supply a fixed child list through the `children` property.
    ///
    /// Mutually exclusive with trailing children at build time.
    #[must_use]
    pub fn children(mut self, children: Vec<Child>) -> Self {
        self.children = Some(ChildSpec::Static(children));
        self
    }

    /// Drive the child list from a [`MapBinding`].
    ///
    /// Mutually exclusive with trailing children at build time.
    #[must_use]
    pub fn children_bound(mut self, binding: MapBinding) -> Self {
        self.children = Some(ChildSpec::Reactive(binding));
        self
    }

    /// Attach a lifecycle controller.
    #[must_use]
    pub fn lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    /// Run `hook` on the built element just before the builder returns it.
    #[must_use]
    pub fn before(mut self, hook: impl FnOnce(&Element) + 'static) -> Self {
        self.before = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for Props {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Props")
            .field("entries", &self.entries)
            .field("children", &self.children)
            .field("lifecycle", &self.lifecycle)
            .field("before", &self.before.is_some())
            .finish()
    }
}

/// Register `hook` to run when the bag's lifecycle controller mounts.
///
/// Silent no-op when the bag carries no controller: components stay usable
/// with or without a lifecycle owner.
pub fn on_mounted(props: &Props, hook: impl Fn() + 'static) {
    if let Some(lifecycle) = &props.lifecycle {
        lifecycle.hook(LifecycleEvent::Mounted, hook);
    }
}

/// Register `hook` to run when the bag's lifecycle controller is destroyed.
///
/// Silent no-op when the bag carries no controller.
pub fn on_destroy(props: &Props, hook: impl Fn() + 'static) {
    if let Some(lifecycle) = &props.lifecycle {
        lifecycle.hook(LifecycleEvent::Destroy, hook);
    }
}
