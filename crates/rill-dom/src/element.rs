//! Shared DOM-like element nodes.
//!
//! An [`Element`] is a handle (`Rc`-shared) to one node: cloning it clones
//! the handle, not the node. A node owns its properties, `data-*`
//! attributes, event handlers, children, and — through a
//! [`BindingScope`] — the reactive subscriptions that keep its bound
//! properties and child list live. Dropping the last handle tears all of
//! that down, which is what makes whole-list child replacement also a
//! teardown of the replaced nodes' bindings.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use rill_reactive::{BindingScope, Subscription};

use crate::event::Event;
use crate::value::Value;

/// Property name treated as the node's text payload by [`outer_html`].
///
/// [`outer_html`]: Element::outer_html
pub const TEXT_CONTENT: &str = "textContent";

type Handler = Rc<dyn Fn(&Event)>;

struct Inner {
    tag: String,
    properties: BTreeMap<String, Value>,
    dataset: BTreeMap<String, String>,
    handlers: BTreeMap<String, Handler>,
    children: Vec<Element>,
    bindings: BindingScope,
}

/// A shared handle to one DOM-like node.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<Inner>>,
}

impl Element {
    /// Create a detached node with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                tag: tag.into(),
                properties: BTreeMap::new(),
                dataset: BTreeMap::new(),
                handlers: BTreeMap::new(),
                children: Vec::new(),
                bindings: BindingScope::new(),
            })),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    /// Read a property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<Value> {
        self.inner.borrow().properties.get(name).cloned()
    }

    /// Write a property. `Value::Null` still stores an entry; removal is not
    /// a DOM property operation.
    pub fn set_property(&self, name: impl Into<String>, value: Value) {
        self.inner.borrow_mut().properties.insert(name.into(), value);
    }

    /// The node's text payload: the `textContent` property, when a string.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.property(TEXT_CONTENT)
            .and_then(|v| v.as_str().map(str::to_owned))
    }

    /// Read one `data-*` attribute (key without the `data-` prefix).
    #[must_use]
    pub fn data(&self, key: &str) -> Option<String> {
        self.inner.borrow().dataset.get(key).cloned()
    }

    /// Write one `data-*` attribute.
    pub fn set_data(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().dataset.insert(key.into(), value.into());
    }

    /// Snapshot of the full dataset.
    #[must_use]
    pub fn dataset(&self) -> BTreeMap<String, String> {
        self.inner.borrow().dataset.clone()
    }

    /// Register an event handler under a property name (e.g. `onclick`).
    /// Replaces any previous handler for that name.
    pub fn set_handler(&self, name: impl Into<String>, handler: Rc<dyn Fn(&Event)>) {
        self.inner.borrow_mut().handlers.insert(name.into(), handler);
    }

    /// Whether a handler is registered under `name`.
    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.inner.borrow().handlers.contains_key(name)
    }

    /// Dispatch an event to the handler registered under `on<name>`.
    ///
    /// Returns `true` if a handler ran. The handler may freely mutate this
    /// element or any observable; no interior borrow is held while it runs.
    pub fn dispatch(&self, event: &Event) -> bool {
        let key = format!("on{}", event.name());
        let handler = self.inner.borrow().handlers.get(&key).map(Rc::clone);
        match handler {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    /// Append a child; the subtree now owns it.
    pub fn append_child(&self, child: Element) {
        self.inner.borrow_mut().children.push(child);
    }

    /// Handles to the current children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// Remove every child. Children whose last handle lived in this list are
    /// dropped outright, releasing their own bindings.
    pub fn clear_children(&self) {
        self.inner.borrow_mut().children.clear();
    }

    /// Park a reactive subscription on this node; it is released when the
    /// node is dropped.
    pub fn hold(&self, subscription: Subscription) {
        self.inner.borrow_mut().bindings.hold(subscription);
    }

    /// Number of reactive subscriptions parked on this node.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    /// Node identity: whether two handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Downgrade to a weak handle (used by updater closures so a binding
    /// never keeps its node alive).
    #[must_use]
    pub fn downgrade(&self) -> WeakElement {
        WeakElement {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Serialize the subtree as an HTML-ish string for assertions:
    /// tag, `data-*` attributes, `textContent`, then children in order.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let inner = self.inner.borrow();
        let mut out = String::new();
        out.push('<');
        out.push_str(&inner.tag);
        for (key, value) in &inner.dataset {
            out.push_str(&format!(" data-{key}=\"{value}\""));
        }
        out.push('>');
        if let Some(Value::Str(text)) = inner.properties.get(TEXT_CONTENT) {
            out.push_str(text);
        }
        for child in &inner.children {
            out.push_str(&child.outer_html());
        }
        out.push_str(&format!("</{}>", inner.tag));
        out
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &inner.tag)
            .field("properties", &inner.properties.len())
            .field("children", &inner.children.len())
            .field("bindings", &inner.bindings.len())
            .finish()
    }
}

/// Weak counterpart of [`Element`].
#[derive(Clone)]
pub struct WeakElement {
    inner: Weak<RefCell<Inner>>,
}

impl WeakElement {
    /// Upgrade back to a strong handle, if the node is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Element> {
        self.inner.upgrade().map(|inner| Element { inner })
    }
}

impl std::fmt::Debug for WeakElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakElement")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn properties_round_trip() {
        let el = Element::new("div");
        el.set_property("className", Value::from("card"));
        assert_eq!(el.property("className"), Some(Value::from("card")));
        assert_eq!(el.property("id"), None);
    }

    #[test]
    fn text_reads_text_content_property() {
        let el = Element::new("span");
        assert_eq!(el.text(), None);
        el.set_property(TEXT_CONTENT, Value::from("hi"));
        assert_eq!(el.text(), Some("hi".to_owned()));
    }

    #[test]
    fn dataset_round_trip() {
        let el = Element::new("div");
        el.set_data("user", "42");
        assert_eq!(el.data("user"), Some("42".to_owned()));
        assert_eq!(el.dataset().len(), 1);
    }

    #[test]
    fn children_append_count_clear() {
        let parent = Element::new("ul");
        parent.append_child(Element::new("li"));
        parent.append_child(Element::new("li"));
        assert_eq!(parent.child_count(), 2);

        parent.clear_children();
        assert_eq!(parent.child_count(), 0);
    }

    #[test]
    fn clone_is_same_node() {
        let el = Element::new("div");
        let handle = el.clone();
        handle.set_property("id", Value::from("x"));
        assert_eq!(el.property("id"), Some(Value::from("x")));
        assert!(el.ptr_eq(&handle));
        assert!(!el.ptr_eq(&Element::new("div")));
    }

    #[test]
    fn dispatch_runs_matching_handler() {
        let el = Element::new("button");
        let clicks = Rc::new(Cell::new(0));
        let c = Rc::clone(&clicks);
        el.set_handler("onclick", Rc::new(move |_| c.set(c.get() + 1)));

        assert!(el.dispatch(&Event::new("click")));
        assert!(!el.dispatch(&Event::new("keydown")));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn handler_may_mutate_its_own_element() {
        let el = Element::new("button");
        let weak = el.downgrade();
        el.set_handler(
            "onclick",
            Rc::new(move |event| {
                if let Some(el) = weak.upgrade() {
                    el.set_property("lastEvent", Value::from(event.name()));
                }
            }),
        );
        el.dispatch(&Event::new("click"));
        assert_eq!(el.property("lastEvent"), Some(Value::from("click")));
    }

    #[test]
    fn weak_handle_dies_with_node() {
        let weak = {
            let el = Element::new("div");
            el.downgrade()
        };
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn outer_html_shape() {
        let parent = Element::new("ul");
        parent.set_data("kind", "menu");
        let li = Element::new("li");
        li.set_property(TEXT_CONTENT, Value::from("one"));
        parent.append_child(li);
        assert_eq!(
            parent.outer_html(),
            "<ul data-kind=\"menu\"><li>one</li></ul>"
        );
    }
}
