#![forbid(unsafe_code)]

//! Reactive primitives for rill.
//!
//! This crate provides the change-propagation core of the view layer:
//!
//! - [`Observable`]: a shared mutable cell that synchronously notifies
//!   subscriber callbacks on every write.
//! - [`Subscription`]: RAII guard identifying a single registered callback;
//!   dropping it unsubscribes.
//! - [`BindingScope`]: a bag of subscriptions owned by one logical consumer
//!   (typically a DOM node), released together.
//! - [`Lifecycle`]: a tri-state mounted/destroyed event controller.
//!
//! # Architecture
//!
//! Everything here is single-threaded by construction: `Rc<RefCell<..>>`
//! shared ownership, no `Send`, no locks. Notification chains run fully
//! re-entrantly on the calling stack; there is no batching, no coalescing,
//! and no deferral of any kind. A write returns only after every subscriber
//! registered at the start of the pass has run.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Every `val`/`set` call produces its own full notification pass, even
//!    when the new value equals the old one.
//! 3. A subscription cancelled by an earlier subscriber in the same pass is
//!    still invoked with the in-flight value; one registered mid-pass is not
//!    invoked until the next pass.
//! 4. Re-entrant writes are bounded by a notification depth limit; exceeding
//!    it is treated as a reactive cycle and panics.

pub mod lifecycle;
pub mod observable;
pub mod scope;

pub use lifecycle::{Lifecycle, LifecycleEvent, LifecycleStage};
pub use observable::{Observable, Subscription};
pub use scope::BindingScope;
