// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport fit testing.
//!
//! All checks here are in viewport-relative space: `origin` must be computed
//! without scroll (see [`compute_coordinates`](crate::compute_coordinates)).
//! Edges are inclusive, so an overlay flush against the viewport edge fits.
//! NaN coordinates never fit and cross every edge they touch.

use core::cmp::Ordering;

use kurbo::{Point, Size};

bitflags::bitflags! {
    /// Viewport edges an overlay crosses.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Overflow: u8 {
        /// Overlay extends above the viewport.
        const TOP    = 0b0000_0001;
        /// Overlay extends past the right edge.
        const RIGHT  = 0b0000_0010;
        /// Overlay extends below the viewport.
        const BOTTOM = 0b0000_0100;
        /// Overlay extends past the left edge.
        const LEFT   = 0b0000_1000;
    }
}

/// Report which viewport edges an overlay at `origin` crosses.
///
/// Returns [`Overflow::empty`] exactly when [`fits`] is true. An edge whose
/// bound cannot be compared (NaN) counts as crossed.
pub fn overflow(origin: Point, overlay: Size, viewport: Size) -> Overflow {
    let mut out = Overflow::empty();
    if !le(0.0, origin.y) {
        out |= Overflow::TOP;
    }
    if !le(origin.x + overlay.width, viewport.width) {
        out |= Overflow::RIGHT;
    }
    if !le(origin.y + overlay.height, viewport.height) {
        out |= Overflow::BOTTOM;
    }
    if !le(0.0, origin.x) {
        out |= Overflow::LEFT;
    }
    out
}

/// Whether an overlay at `origin` lies entirely inside the viewport.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_placement::fits;
///
/// let viewport = Size::new(800.0, 600.0);
/// assert!(fits(Point::new(0.0, 0.0), Size::new(800.0, 600.0), viewport));
/// assert!(!fits(Point::new(-1.0, 0.0), Size::new(10.0, 10.0), viewport));
/// assert!(!fits(Point::new(f64::NAN, 0.0), Size::new(10.0, 10.0), viewport));
/// ```
pub fn fits(origin: Point, overlay: Size, viewport: Size) -> bool {
    origin.x >= 0.0
        && origin.x + overlay.width <= viewport.width
        && origin.y >= 0.0
        && origin.y + overlay.height <= viewport.height
}

/// `a <= b`, false when either side is NaN.
fn le(a: f64, b: f64) -> bool {
    matches!(a.partial_cmp(&b), Some(Ordering::Less | Ordering::Equal))
}
