// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware positioning for floating overlays.
//!
//! Given an anchor rectangle, an overlay size, and the viewport, this crate
//! decides which side of the anchor a tooltip or popover should sit on so that
//! it stays fully visible, and where exactly to put it.
//!
//! - [`compute_coordinates`]: anchor + side → overlay top-left corner.
//! - [`fits`] / [`overflow`]: does an overlay at a given origin stay inside the viewport?
//! - [`resolve`]: walk the [`fallback_chain`] and pick a concrete [`Side`].
//!
//! Everything here is pure and synchronous. Measuring elements and deciding
//! *when* to re-run the resolver is left to the host; see `understory_positioner`
//! for a reactive wrapper.
//!
//! ## Coordinate spaces
//!
//! Anchor rectangles are viewport-relative (as returned by a
//! `getBoundingClientRect`-style query). Fit tests run in viewport space;
//! the scroll offset is added only to the final answer, producing absolute
//! document coordinates for an absolutely positioned overlay.
//!
//! ## Never fails
//!
//! There are no error types. Degenerate inputs (zero-size rects, anchors
//! scrolled out of view) flow through the arithmetic. When no side fits, the
//! resolver returns the requested side (or `Top` for [`Placement::Auto`]) and
//! the overlay may be clipped.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_placement::{Placement, Side, resolve};
//!
//! let viewport = Size::new(1200.0, 800.0);
//! let anchor = Rect::new(550.0, 400.0, 650.0, 440.0);
//! let overlay = Size::new(100.0, 40.0);
//!
//! let r = resolve(Placement::Auto, anchor, overlay, 8.0, Vec2::new(0.0, 300.0), viewport);
//! assert_eq!(r.placement, Side::Top);
//! assert_eq!(r.top, 652.0);
//! assert_eq!(r.left, 550.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod fit;
pub mod mapper;
pub mod resolve;
pub mod types;

pub use fit::{Overflow, fits, overflow};
pub use mapper::compute_coordinates;
pub use resolve::{Resolution, fallback_chain, resolve, resolve_detailed, resolve_with};
pub use types::{Axis, DEFAULT_OFFSET, Placement, PlacementOptions, ResolvedCoordinates, Side};
