//! The element builder.
//!
//! [`Ui`] interprets a [`Props`] bag plus a trailing child list into a real
//! node obtained from the injected [`Document`]: static values are assigned
//! directly, reactive values are assigned once and then kept current by an
//! updater subscribed to their source, and list bindings rebuild the whole
//! child list on every change. Every subscription the builder wires is
//! parked on the node itself, so dropping the node tears its bindings down.
//!
//! # Update semantics
//!
//! - Property and dataset updaters hold only a weak node reference; a node
//!   kept alive solely by its observables does not exist.
//! - Child-list rebuilds are replace-everything: clear, then re-render the
//!   full list. No diffing, by design.
//! - A component whose `render` fails during a reactive rebuild cannot
//!   propagate an error to anyone (the write that triggered it has no idea
//!   a view exists), so the failure is logged and that child is skipped.

use std::rc::Rc;

use rill_dom::{Document, Element, Headless, Value};

use crate::error::ViewError;
use crate::props::{Child, ChildSpec, Prop, Props};

/// Property name with dataset semantics: its map value is written as
/// `data-*` attributes instead of a node property.
pub const DATASET: &str = "dataset";

/// Element builder bound to a document.
///
/// Cheap to clone; clones share the document.
#[derive(Clone)]
pub struct Ui {
    document: Rc<dyn Document>,
}

impl Ui {
    /// Build against the given document.
    #[must_use]
    pub fn new(document: Rc<dyn Document>) -> Self {
        Self { document }
    }

    /// Build against a fresh in-memory [`Headless`] document.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(Rc::new(Headless::new()))
    }

    /// The injected document.
    #[must_use]
    pub fn document(&self) -> &Rc<dyn Document> {
        &self.document
    }

    /// Create an element for `tag`, apply `props`, and append `children`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::ChildrenConflict`] when `props` carries a `children`
    ///   spec *and* `children` is non-empty.
    /// - [`ViewError::DatasetNotMap`] when a `dataset` property's (initial)
    ///   value is not a [`Value::Map`].
    /// - Any error from rendering a component child.
    pub fn build(
        &self,
        tag: &str,
        props: Props,
        children: Vec<Child>,
    ) -> Result<Element, ViewError> {
        let Props {
            entries,
            children: child_spec,
            lifecycle: _,
            before,
        } = props;

        if child_spec.is_some() && !children.is_empty() {
            return Err(ViewError::ChildrenConflict);
        }

        let element = self.document.create_element(tag);

        for (key, prop) in entries {
            match prop {
                Prop::Value(value) => {
                    if key == DATASET {
                        apply_dataset(&element, &value)?;
                    } else {
                        element.set_property(key, value);
                    }
                }
                Prop::Bind(source) => {
                    if key == DATASET {
                        apply_dataset(&element, &source.get())?;
                        let weak = element.downgrade();
                        element.hold(source.subscribe(move |value: &Value| {
                            let Some(el) = weak.upgrade() else { return };
                            update_dataset(&el, value);
                        }));
                    } else {
                        element.set_property(key.clone(), source.get());
                        let weak = element.downgrade();
                        element.hold(source.subscribe(move |value: &Value| {
                            if let Some(el) = weak.upgrade() {
                                el.set_property(key.clone(), value.clone());
                            }
                        }));
                    }
                }
                Prop::Compute(compute) => {
                    element.set_property(key.clone(), compute.get());
                    let weak = element.downgrade();
                    element.hold(compute.watch(move |value| {
                        if let Some(el) = weak.upgrade() {
                            el.set_property(key.clone(), value.clone());
                        }
                    }));
                }
                Prop::Handler(handler) => {
                    element.set_handler(key, handler);
                }
            }
        }

        match child_spec {
            Some(ChildSpec::Static(kids)) => self.append_children(&element, kids)?,
            Some(ChildSpec::Reactive(binding)) => {
                let (source, render) = binding.into_parts();

                let items = source.with(list_items);
                for (index, item) in items.iter().enumerate() {
                    let node = self.realize(render(item, index, &items))?;
                    element.append_child(node);
                }

                let ui = self.clone();
                let weak = element.downgrade();
                element.hold(source.subscribe(move |value: &Value| {
                    let Some(el) = weak.upgrade() else { return };
                    el.clear_children();
                    let items = list_items(value);
                    for (index, item) in items.iter().enumerate() {
                        match ui.realize(render(item, index, &items)) {
                            Ok(node) => el.append_child(node),
                            Err(err) => {
                                tracing::error!(%err, index, "child render failed during list rebuild");
                            }
                        }
                    }
                }));
            }
            None => {}
        }

        self.append_children(&element, children)?;

        if let Some(before) = before {
            before(&element);
        }
        Ok(element)
    }

    /// Build a grouping node holding `children` and nothing else.
    pub fn fragment(&self, children: Vec<Child>) -> Result<Element, ViewError> {
        self.build("#fragment", Props::new(), children)
    }

    fn append_children(&self, parent: &Element, children: Vec<Child>) -> Result<(), ViewError> {
        for child in children {
            let node = self.realize(child)?;
            parent.append_child(node);
        }
        Ok(())
    }

    fn realize(&self, child: Child) -> Result<Element, ViewError> {
        match child {
            Child::Node(el) => Ok(el),
            Child::Component(component) => component.render(self),
        }
    }
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui").finish()
    }
}

/// Initial dataset write: the value must be a map.
fn apply_dataset(element: &Element, value: &Value) -> Result<(), ViewError> {
    let Value::Map(entries) = value else {
        return Err(ViewError::DatasetNotMap { found: value.kind() });
    };
    for (key, value) in entries {
        element.set_data(key.clone(), value.to_attribute_string());
    }
    Ok(())
}

/// Reactive dataset update: the shape was validated at bind time and is not
/// re-checked; a non-map update writes nothing.
fn update_dataset(element: &Element, value: &Value) {
    match value {
        Value::Map(entries) => {
            for (key, value) in entries {
                element.set_data(key.clone(), value.to_attribute_string());
            }
        }
        other => tracing::warn!(kind = other.kind(), "dataset update skipped: not a map"),
    }
}

/// Items of a list value; anything else renders as the empty list (the
/// list shape is checked once, at map-binding construction).
fn list_items(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.clone(),
        other => {
            tracing::warn!(kind = other.kind(), "map source is no longer a list");
            Vec::new()
        }
    }
}
