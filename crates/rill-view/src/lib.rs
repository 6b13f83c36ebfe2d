#![forbid(unsafe_code)]

//! Element construction and reactive bindings for rill.
//!
//! This crate is the view layer proper: it interprets a property bag and a
//! child list into a DOM-like node with one-directional data flow wired in.
//!
//! - [`Ui`]: the element builder, bound to an injected document.
//! - [`Props`]/[`Prop`]: the property bag — static values, observable
//!   bindings, [`compute`] transforms, event handlers, a `children` spec,
//!   and an optional [`Lifecycle`](rill_reactive::Lifecycle) controller.
//! - [`compute`]/[`map`]: inert derived-binding descriptors.
//! - [`Component`]: the render capability, with optional mount/destroy
//!   callbacks wired through [`attach`].
//!
//! # Usage
//!
//! ```
//! use rill_dom::Value;
//! use rill_reactive::Observable;
//! use rill_view::{Props, Ui, compute};
//!
//! let ui = Ui::headless();
//! let count = Observable::new(0i64);
//! let label = ui
//!     .span(
//!         Props::new().computed(
//!             "textContent",
//!             compute(&count, |c| Value::Str(format!("count: {c}"))),
//!         ),
//!         Vec::new(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(label.text().as_deref(), Some("count: 0"));
//! count.val(3);
//! assert_eq!(label.text().as_deref(), Some("count: 3"));
//! ```

pub mod binding;
pub mod builder;
pub mod component;
pub mod error;
pub mod props;
pub mod tags;

pub use binding::{Compute, MapBinding, compute, map};
pub use builder::{DATASET, Ui};
pub use component::{Component, attach, mount};
pub use error::ViewError;
pub use props::{Child, ChildSpec, Prop, Props, on_destroy, on_mounted};
