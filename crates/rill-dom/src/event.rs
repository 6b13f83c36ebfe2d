//! Host events dispatched to element handlers.

use crate::value::Value;

/// A named event with an optional dynamic payload.
///
/// Handlers are registered on an [`Element`](crate::Element) under the
/// host's property name for the event (e.g. `onclick`) and receive the
/// event by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    name: String,
    detail: Value,
}

impl Event {
    /// Create an event with no payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Value::Null,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Value>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Event name (e.g. `"click"`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event payload; [`Value::Null`] when absent.
    #[must_use]
    pub const fn detail(&self) -> &Value {
        &self.detail
    }
}
