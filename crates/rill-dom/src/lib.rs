#![forbid(unsafe_code)]

//! Headless DOM analogue for rill.
//!
//! The view layer never talks to a concrete host directly; it goes through
//! the [`Document`] trait, whose only job is to create empty nodes by tag
//! name. [`Headless`] is the reference implementation used in tests and
//! simulated hosts.
//!
//! Nodes are [`Element`] handles: `Rc`-shared, single-threaded, owning their
//! tag, property map, `data-*` attributes, event handlers, child list, and
//! the reactive subscriptions wired to them. Ownership of a node transfers
//! into the parent subtree on append; there is no other transfer API.

pub mod document;
pub mod element;
pub mod event;
pub mod value;

pub use document::{Document, Headless};
pub use element::{Element, WeakElement};
pub use event::Event;
pub use value::Value;
