//! Derived binding descriptors consumed by the element builder.
//!
//! [`Compute`] and [`MapBinding`] are inert markers: constructing one wires
//! nothing. The builder is what subscribes to their sources — `Compute`
//! drives a single node property through a transform, `MapBinding` drives a
//! node's whole child list from a list-valued observable.

use std::rc::Rc;

use rill_dom::Value;
use rill_reactive::{Observable, Subscription};

use crate::error::ViewError;
use crate::props::Child;

type Sink = Rc<dyn Fn(&Value)>;

/// A property value derived from an observable through a pure transform.
///
/// The transform is reapplied on every source change; nothing is cached
/// between updates. Built by [`compute`].
pub struct Compute {
    eval: Rc<dyn Fn() -> Value>,
    watch: Rc<dyn Fn(Sink) -> Subscription>,
}

impl Compute {
    /// Run the transform against the source's current value.
    #[must_use]
    pub fn get(&self) -> Value {
        (self.eval)()
    }

    /// Subscribe `sink` to receive the transformed value on every source
    /// change. The builder parks the returned guard on the bound node.
    pub(crate) fn watch(&self, sink: impl Fn(&Value) + 'static) -> Subscription {
        (self.watch)(Rc::new(sink))
    }
}

impl std::fmt::Debug for Compute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compute").field("value", &self.get()).finish()
    }
}

/// Derive a property value from `source` through `transform`.
///
/// The descriptor holds no subscriber state of its own; it is consumed by
/// the element builder, which applies `transform(current)` immediately and
/// re-applies it on each notification.
pub fn compute<T: 'static>(
    source: &Observable<T>,
    transform: impl Fn(&T) -> Value + 'static,
) -> Compute {
    let transform = Rc::new(transform);
    let eval = {
        let source = source.clone();
        let transform = Rc::clone(&transform);
        Rc::new(move || source.with(|v| transform(v)))
    };
    let watch: Rc<dyn Fn(Sink) -> Subscription> = {
        let source = source.clone();
        Rc::new(move |sink: Sink| {
            let transform = Rc::clone(&transform);
            source.subscribe(move |v| sink(&transform(v)))
        })
    };
    Compute { eval, watch }
}

type MapRender = Rc<dyn Fn(&Value, usize, &[Value]) -> Child>;

/// A reactive projection of a list-valued observable into child nodes.
///
/// Built by [`map`]; drives whole-list replacement, not a diff: on every
/// source change the builder clears the bound node's children and renders
/// the full new list.
pub struct MapBinding {
    source: Observable<Value>,
    render: MapRender,
}

impl MapBinding {
    pub(crate) fn into_parts(self) -> (Observable<Value>, MapRender) {
        (self.source, self.render)
    }
}

impl std::fmt::Debug for MapBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapBinding")
            .field("source", &self.source.with(Value::kind))
            .finish()
    }
}

/// Project each item of a list-valued observable into a child.
///
/// `render` receives the item, its index, and the whole list. Fails with
/// [`ViewError::MapSourceNotList`] if the source's *current* value is not a
/// [`Value::List`]; the shape is checked here once and never re-checked
/// (later non-list updates render an empty list).
pub fn map(
    source: &Observable<Value>,
    render: impl Fn(&Value, usize, &[Value]) -> Child + 'static,
) -> Result<MapBinding, ViewError> {
    source.with(|v| match v {
        Value::List(_) => Ok(()),
        other => Err(ViewError::MapSourceNotList { found: other.kind() }),
    })?;
    Ok(MapBinding {
        source: source.clone(),
        render: Rc::new(render),
    })
}
