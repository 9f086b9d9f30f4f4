// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single observable value with last-write-wins publishing.
//!
//! ## Usage
//!
//! 1) Hand out [`Ticket`]s in request order.
//! 2) When a computation finishes, call [`Published::publish_if_newer`] with the
//!    ticket it was started with. Results from older tickets are dropped.
//! 3) Subscribers are invoked synchronously with the new value (or `None` on
//!    [`Published::clear`]).
//!
//! ```
//! use understory_positioner::published::{Published, Ticket};
//!
//! let mut p: Published<u32> = Published::new();
//! assert!(p.publish_if_newer(Ticket::new(2), 20));
//! // A computation started earlier finishes late; it must not win.
//! assert!(!p.publish_if_newer(Ticket::new(1), 10));
//! assert_eq!(p.get(), Some(&20));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

/// Monotonic id of a recompute request. Later requests have larger tickets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Create a ticket from a raw sequence number.
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// The raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The ticket after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Handle returned by [`Published::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u32);

type Callback<T> = Box<dyn FnMut(Option<&T>)>;

/// Observable holder of the most recently published value.
pub struct Published<T> {
    value: Option<T>,
    ticket: Option<Ticket>,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u32,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Published<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("ticket", &self.ticket)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<T> Default for Published<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Published<T> {
    /// Create an empty node with no subscribers.
    pub fn new() -> Self {
        Self {
            value: None,
            ticket: None,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current value, if any.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Ticket of the last accepted publish.
    ///
    /// Survives [`clear`](Self::clear) so that late results from before the
    /// clear are still rejected.
    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    /// Register a callback invoked on every accepted publish and on clear.
    pub fn subscribe(&mut self, f: impl FnMut(Option<&T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Publish `value` unless a result for the same or a newer ticket was
    /// already accepted. Returns whether the value was accepted.
    pub fn publish_if_newer(&mut self, ticket: Ticket, value: T) -> bool {
        if self.ticket.is_some_and(|last| last >= ticket) {
            log::trace!("dropping stale result for {ticket:?}");
            return false;
        }
        self.ticket = Some(ticket);
        self.value = Some(value);
        self.notify();
        true
    }

    /// Drop the current value and notify subscribers with `None`.
    ///
    /// Does nothing if there is no value.
    pub fn clear(&mut self) {
        if self.value.take().is_some() {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let value = self.value.as_ref();
        for (_, f) in &mut self.subscribers {
            f(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn newer_tickets_replace_older() {
        let mut p = Published::new();
        assert!(p.publish_if_newer(Ticket::new(1), 'a'));
        assert!(p.publish_if_newer(Ticket::new(5), 'b'));
        assert_eq!(p.get(), Some(&'b'));
        assert_eq!(p.ticket(), Some(Ticket::new(5)));
    }

    #[test]
    fn same_or_older_ticket_is_rejected() {
        let mut p = Published::new();
        assert!(p.publish_if_newer(Ticket::new(3), 'a'));
        assert!(!p.publish_if_newer(Ticket::new(3), 'b'));
        assert!(!p.publish_if_newer(Ticket::new(2), 'c'));
        assert_eq!(p.get(), Some(&'a'));
    }

    #[test]
    fn subscribers_see_accepted_values_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = Published::new();
        let sink = seen.clone();
        p.subscribe(move |v: Option<&u32>| sink.borrow_mut().push(v.copied()));
        p.publish_if_newer(Ticket::new(2), 20);
        p.publish_if_newer(Ticket::new(1), 10);
        p.publish_if_newer(Ticket::new(3), 30);
        assert_eq!(*seen.borrow(), vec![Some(20), Some(30)]);
    }

    #[test]
    fn clear_notifies_none_and_keeps_ticket() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = Published::new();
        let sink = seen.clone();
        p.subscribe(move |v: Option<&u32>| sink.borrow_mut().push(v.copied()));
        p.publish_if_newer(Ticket::new(4), 40);
        p.clear();
        p.clear();
        assert_eq!(p.get(), None);
        assert_eq!(*seen.borrow(), vec![Some(40), None]);
        assert!(!p.publish_if_newer(Ticket::new(4), 41));
        assert!(p.publish_if_newer(Ticket::new(6), 60));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut p = Published::new();
        let c = count.clone();
        let id = p.subscribe(move |_: Option<&u8>| *c.borrow_mut() += 1);
        p.publish_if_newer(Ticket::new(1), 1);
        assert!(p.unsubscribe(id));
        assert!(!p.unsubscribe(id));
        p.publish_if_newer(Ticket::new(2), 2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn ticket_next_increments() {
        assert_eq!(Ticket::new(7).next(), Ticket::new(8));
        assert_eq!(Ticket::new(7).next().get(), 8);
    }
}
