//! Property-based invariant tests for `Observable`.
//!
//! These tests pin the cell's core contracts:
//!
//! 1. After any sequence of `val`/`set` calls, `get()` returns exactly the
//!    value produced by the last call.
//! 2. One write invokes N subscribers exactly once each, in registration
//!    order, regardless of N.
//! 3. Cancelling an arbitrary subset of subscribers silences exactly that
//!    subset on the next write.
//! 4. `unsubscribe_all` silences everything while preserving the value.

use proptest::prelude::*;
use rill_reactive::Observable;
use std::cell::RefCell;
use std::rc::Rc;

/// A single write operation against the cell.
#[derive(Clone, Debug)]
enum Op {
    /// `val(n)` — direct replacement.
    Val(i64),
    /// `set(|v| v + n)` — functional update.
    Add(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1000i64..1000).prop_map(Op::Val),
        (-1000i64..1000).prop_map(Op::Add),
    ]
}

proptest! {
    #[test]
    fn get_tracks_last_write(initial in -1000i64..1000, ops in proptest::collection::vec(op_strategy(), 0..32)) {
        let obs = Observable::new(initial);
        let mut expected = initial;
        for op in &ops {
            match *op {
                Op::Val(n) => {
                    obs.val(n);
                    expected = n;
                }
                Op::Add(n) => {
                    obs.set(move |v| v + n);
                    expected += n;
                }
            }
            prop_assert_eq!(obs.get(), expected);
        }
    }

    #[test]
    fn fanout_is_exactly_once_in_order(n in 1usize..24) {
        let obs = Observable::new(0usize);
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<_> = (0..n)
            .map(|i| {
                let order = Rc::clone(&order);
                obs.subscribe(move |_| order.borrow_mut().push(i))
            })
            .collect();

        obs.val(1);
        let fired = order.borrow().clone();
        prop_assert_eq!(fired, (0..n).collect::<Vec<_>>());
        drop(subs);
    }

    #[test]
    fn cancelled_subset_is_silent(n in 1usize..16, cancel_mask in proptest::collection::vec(any::<bool>(), 16)) {
        let obs = Observable::new(0usize);
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Vec::new();
        for i in 0..n {
            let fired = Rc::clone(&fired);
            subs.push(Some(obs.subscribe(move |_| fired.borrow_mut().push(i))));
        }

        let mut kept = Vec::new();
        for (i, slot) in subs.iter_mut().enumerate() {
            if cancel_mask[i] {
                if let Some(sub) = slot.take() {
                    sub.cancel();
                }
            } else {
                kept.push(i);
            }
        }

        obs.val(1);
        prop_assert_eq!(fired.borrow().clone(), kept);
    }

    #[test]
    fn unsubscribe_all_silences_everything(n in 0usize..16, value in any::<i64>()) {
        let obs = Observable::new(0i64);
        let fired = Rc::new(RefCell::new(0usize));
        let subs: Vec<_> = (0..n)
            .map(|_| {
                let fired = Rc::clone(&fired);
                obs.subscribe(move |_| *fired.borrow_mut() += 1)
            })
            .collect();

        obs.unsubscribe_all();
        obs.val(value);
        prop_assert_eq!(*fired.borrow(), 0);
        prop_assert_eq!(obs.get(), value);
        drop(subs);
    }
}
