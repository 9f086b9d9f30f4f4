// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map an anchor rectangle and a side to overlay coordinates.
//!
//! The overlay is centered on the anchor along the cross axis and separated
//! from it by `offset` along the main axis. Results may fall outside the
//! viewport; deciding whether they fit is [`fit`](crate::fit)'s job.

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::Side;

/// Compute the overlay's top-left corner for `side`.
///
/// `anchor` is viewport-relative. `scroll` is added to both axes, so passing
/// [`Vec2::ZERO`] yields viewport-relative coordinates and passing the page
/// scroll yields absolute document coordinates. The returned point has
/// `x` = left and `y` = top.
///
/// `overlay` must be the overlay's already-rendered size.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_placement::{Side, compute_coordinates};
///
/// let anchor = Rect::new(550.0, 400.0, 650.0, 440.0);
/// let p = compute_coordinates(Side::Top, anchor, Size::new(100.0, 40.0), 8.0, Vec2::ZERO);
/// assert_eq!((p.x, p.y), (550.0, 352.0));
/// ```
pub fn compute_coordinates(
    side: Side,
    anchor: Rect,
    overlay: Size,
    offset: f64,
    scroll: Vec2,
) -> Point {
    let center_left = anchor.x0 + scroll.x + anchor.width() / 2.0 - overlay.width / 2.0;
    let center_top = anchor.y0 + scroll.y + anchor.height() / 2.0 - overlay.height / 2.0;
    match side {
        Side::Top => Point::new(center_left, anchor.y0 + scroll.y - overlay.height - offset),
        Side::Bottom => Point::new(center_left, anchor.y1 + scroll.y + offset),
        Side::Left => Point::new(anchor.x0 + scroll.x - overlay.width - offset, center_top),
        Side::Right => Point::new(anchor.x1 + scroll.x + offset, center_top),
    }
}
