// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback-chain resolution.
//!
//! ## Attempt order
//!
//! - [`Placement::Auto`]: `Top`, `Bottom`, `Right`, `Left`. If nothing fits, `Top`.
//! - A concrete side: the side itself, then its opposite, then the two
//!   orthogonal sides in `Auto` order. If nothing fits, the requested side.
//!
//! The first candidate that fits wins, so the order above is also the
//! tie-break when several sides fit. At most four fit tests run per call.
//!
//! ## Coordinate spaces
//!
//! Candidates are fit-tested in viewport space (zero scroll). Scroll is added
//! only to the winning candidate, so scrolling the page by `Δ` shifts the
//! result by exactly `Δ` and never changes which side is chosen.

use kurbo::{Point, Rect, Size, Vec2};

use crate::fit::overflow;
use crate::mapper::compute_coordinates;
use crate::types::{Axis, Placement, PlacementOptions, ResolvedCoordinates, Side};

/// Outcome of a resolution, with diagnostics about how it was reached.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The coordinates to publish.
    pub coordinates: ResolvedCoordinates,
    /// Whether the chosen side keeps the overlay inside the viewport.
    ///
    /// `false` means every candidate overflowed and the degraded default was used.
    pub fits: bool,
    /// Number of candidates fit-tested, in `1..=4`.
    pub attempts: u8,
}

/// The order in which sides are tried for `preferred`.
///
/// ```
/// use understory_placement::{Placement, Side, fallback_chain};
///
/// assert_eq!(
///     fallback_chain(Placement::Left),
///     [Side::Left, Side::Right, Side::Top, Side::Bottom],
/// );
/// ```
pub fn fallback_chain(preferred: Placement) -> [Side; 4] {
    let Some(side) = preferred.side() else {
        return Side::ALL;
    };
    let (a, b) = match side.axis() {
        Axis::Vertical => (Side::Right, Side::Left),
        Axis::Horizontal => (Side::Top, Side::Bottom),
    };
    [side, side.opposite(), a, b]
}

/// Resolve a placement and report whether it fits.
///
/// `anchor` is the anchor's viewport-relative rect and `overlay` the overlay's
/// rendered size. `offset` is clamped to be non-negative. See the
/// [module docs](self) for the attempt order.
pub fn resolve_detailed(
    preferred: Placement,
    anchor: Rect,
    overlay: Size,
    offset: f64,
    scroll: Vec2,
    viewport: Size,
) -> Resolution {
    let offset = offset.max(0.0);
    let chain = fallback_chain(preferred);
    for (i, &side) in chain.iter().enumerate() {
        let origin = compute_coordinates(side, anchor, overlay, offset, Vec2::ZERO);
        let crossed = overflow(origin, overlay, viewport);
        log::trace!("placement candidate {side:?} at {origin:?}: overflow {crossed:?}");
        if crossed.is_empty() {
            return Resolution {
                coordinates: at(side, origin + scroll),
                fits: true,
                attempts: i as u8 + 1,
            };
        }
    }

    let side = preferred.side().unwrap_or(Side::Top);
    log::debug!(
        "no placement fits {overlay:?} in viewport {viewport:?}; falling back to {side:?}"
    );
    let origin = compute_coordinates(side, anchor, overlay, offset, Vec2::ZERO);
    Resolution {
        coordinates: at(side, origin + scroll),
        fits: false,
        attempts: chain.len() as u8,
    }
}

/// Resolve the final overlay position.
///
/// Always returns a concrete side; never fails. When no side fits, the
/// requested side (or `Top` for [`Placement::Auto`]) is returned and the
/// overlay may be clipped.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_placement::{Placement, Side, resolve};
///
/// // Anchor hugging the top of the viewport: `Top` would be clipped.
/// let anchor = Rect::new(550.0, 10.0, 650.0, 50.0);
/// let r = resolve(
///     Placement::Top,
///     anchor,
///     Size::new(100.0, 40.0),
///     8.0,
///     Vec2::ZERO,
///     Size::new(1200.0, 800.0),
/// );
/// assert_eq!(r.placement, Side::Bottom);
/// assert_eq!(r.top, 58.0);
/// ```
pub fn resolve(
    preferred: Placement,
    anchor: Rect,
    overlay: Size,
    offset: f64,
    scroll: Vec2,
    viewport: Size,
) -> ResolvedCoordinates {
    resolve_detailed(preferred, anchor, overlay, offset, scroll, viewport).coordinates
}

/// Resolve using a [`PlacementOptions`] value for the preference and offset.
pub fn resolve_with(
    options: &PlacementOptions,
    anchor: Rect,
    overlay: Size,
    scroll: Vec2,
    viewport: Size,
) -> Resolution {
    resolve_detailed(
        options.preferred,
        anchor,
        overlay,
        options.effective_offset(),
        scroll,
        viewport,
    )
}

fn at(side: Side, origin: Point) -> ResolvedCoordinates {
    ResolvedCoordinates {
        top: origin.y,
        left: origin.x,
        placement: side,
    }
}
