// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_positioner --heading-base-level=0

//! Understory Positioner: keep a floating overlay placed as layout changes.
//!
//! ## Overview
//!
//! [`understory_placement`] answers "where should this overlay go?" for one set
//! of measurements. This crate answers "when should we ask?". A [`Positioner`]
//! tracks one anchor/overlay pair, queues a recompute whenever the anchor
//! changes, the overlay is mounted, or the host invalidates, and runs the
//! resolver only after the host reports that layout has settled.
//!
//! ## Inputs
//!
//! Implement [`Host`] for your toolkit. It measures element handles, reports
//! scroll and viewport size, and is asked to schedule a call to
//! [`Positioner::layout_settled`] after the current render pass.
//!
//! ## Output
//!
//! Results are published through a [`Published`](crate::published::Published)
//! node holding the latest
//! [`ResolvedCoordinates`](understory_placement::ResolvedCoordinates).
//! Subscribers are notified synchronously. Every request carries a
//! [`Ticket`](crate::published::Ticket); a result computed for an older ticket
//! never overwrites a newer one.
//!
//! ## Workflow
//!
//! 1) The rendering layer mounts the overlay and calls
//!    [`Positioner::mount_overlay`]; the trigger layer calls
//!    [`Positioner::set_anchor`].
//! 2) The positioner asks the host for a layout-settled notification.
//! 3) The host calls [`Positioner::layout_settled`] after layout. If the overlay
//!    still measures `0×0` the request is kept for the next notification.
//! 4) The rendering layer applies the published `top`/`left` and uses
//!    `placement` for styling (e.g. arrow direction).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod positioner;
pub mod published;

pub use host::Host;
pub use positioner::{Positioner, Trigger};
pub use published::{Published, SubscriptionId, Ticket};
