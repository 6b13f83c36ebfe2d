//! The injected document capability.
//!
//! The element builder never creates nodes directly; it asks a [`Document`]
//! for them. That keeps the environment swappable: tests and simulated
//! hosts use [`Headless`], a real host supplies its own factory (interning
//! tags, validating names, attaching host handles — whatever it needs).

use std::cell::Cell;
use std::rc::Rc;

use crate::element::Element;

/// Factory for empty nodes, keyed by tag name.
///
/// This is the view layer's only environment dependency.
pub trait Document {
    /// Create a detached, empty element for `tag`.
    fn create_element(&self, tag: &str) -> Element;
}

/// In-memory document for tests and headless hosts.
///
/// Counts the nodes it creates, which lets tests assert how many nodes a
/// reactive rebuild actually produced.
#[derive(Clone, Debug, Default)]
pub struct Headless {
    created: Rc<Cell<usize>>,
}

impl Headless {
    /// Create a fresh headless document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of elements created through this document.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

impl Document for Headless {
    fn create_element(&self, tag: &str) -> Element {
        self.created.set(self.created.get() + 1);
        tracing::trace!(tag, total = self.created.get(), "create element");
        Element::new(tag)
    }
}
