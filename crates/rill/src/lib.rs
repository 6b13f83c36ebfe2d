#![forbid(unsafe_code)]

//! rill: a minimal reactive view layer.
//!
//! A primitive observable-value type plus element-construction helpers that
//! bind observables to node properties, attributes, and child lists —
//! fine-grained one-directional bindings with no virtual DOM and no diffing
//! beyond whole-list replacement.
//!
//! # Quick start
//!
//! ```
//! use rill::prelude::*;
//!
//! let ui = Ui::headless();
//! let items = Observable::new(Value::from(vec!["tea", "coffee"]));
//!
//! let render_item = {
//!     let ui = ui.clone();
//!     move |item: &Value, _: usize, _: &[Value]| {
//!         Child::Node(
//!             ui.li(
//!                 Props::new().prop("textContent", item.to_attribute_string()),
//!                 Vec::new(),
//!             )
//!             .unwrap(),
//!         )
//!     }
//! };
//! let list = ui
//!     .ul(
//!         Props::new().children_bound(map(&items, render_item).unwrap()),
//!         Vec::new(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(list.child_count(), 2);
//! items.set(|v| {
//!     let mut l = v.as_list().unwrap().to_vec();
//!     l.push(Value::from("water"));
//!     Value::List(l)
//! });
//! assert_eq!(list.child_count(), 3);
//! ```

pub use rill_dom as dom;
pub use rill_reactive as reactive;
pub use rill_view as view;

#[doc(inline)]
pub use rill_dom::{Document, Element, Event, Headless, Value};
#[doc(inline)]
pub use rill_reactive::{
    BindingScope, Lifecycle, LifecycleEvent, LifecycleStage, Observable, Subscription,
};
#[doc(inline)]
pub use rill_view::{
    Child, Component, Compute, MapBinding, Prop, Props, Ui, ViewError, attach, compute, map,
    mount, on_destroy, on_mounted,
};

/// Commonly used types and constructors, importable in one statement.
pub mod prelude {
    pub use rill_dom::{Document, Element, Event, Headless, Value};
    pub use rill_reactive::{Lifecycle, LifecycleEvent, Observable, Subscription};
    pub use rill_view::{
        Child, Component, Props, Ui, ViewError, attach, compute, map, mount, on_destroy,
        on_mounted,
    };
}
