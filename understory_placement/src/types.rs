// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: requested placements, concrete sides, options, and results.

use kurbo::Point;

/// Default gap between anchor and overlay, in device-independent pixels.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Axis a [`Side`] attaches along.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Above or below the anchor.
    Vertical,
    /// Left or right of the anchor.
    Horizontal,
}

/// A concrete side of the anchor the overlay attaches to.
///
/// This is the answer type of the resolver; it can never be "auto".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Overlay sits above the anchor.
    Top,
    /// Overlay sits to the right of the anchor.
    Right,
    /// Overlay sits below the anchor.
    Bottom,
    /// Overlay sits to the left of the anchor.
    Left,
}

impl Side {
    /// All sides, in the priority order used for [`Placement::Auto`].
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Right, Self::Left];

    /// The geometrically opposite side (`Top`↔`Bottom`, `Left`↔`Right`).
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis this side attaches along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// A requested placement: one of the four sides, or `Auto` to let the resolver pick.
///
/// `Auto` is only ever a request. [`resolve`](crate::resolve) always answers
/// with a concrete [`Side`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Prefer above the anchor.
    Top,
    /// Prefer right of the anchor.
    Right,
    /// Prefer below the anchor.
    Bottom,
    /// Prefer left of the anchor.
    Left,
    /// No preference; try sides in [`Side::ALL`] order.
    #[default]
    Auto,
}

impl Placement {
    /// The concrete side for this request, or `None` for [`Placement::Auto`].
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Top => Some(Side::Top),
            Self::Right => Some(Side::Right),
            Self::Bottom => Some(Side::Bottom),
            Self::Left => Some(Side::Left),
            Self::Auto => None,
        }
    }
}

impl From<Side> for Placement {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Right => Self::Right,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
        }
    }
}

/// Per-invocation placement configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementOptions {
    /// Requested placement.
    pub preferred: Placement,
    /// Gap between anchor and overlay. Negative or NaN values are treated as `0.0`.
    pub offset: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            preferred: Placement::Auto,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PlacementOptions {
    /// Replace the requested placement.
    #[must_use]
    pub fn with_preferred(mut self, preferred: impl Into<Placement>) -> Self {
        self.preferred = preferred.into();
        self
    }

    /// Replace the anchor/overlay gap.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// The offset clamped to a non-negative value.
    pub fn effective_offset(&self) -> f64 {
        // `f64::max` returns the non-NaN operand, so NaN also lands on zero.
        self.offset.max(0.0)
    }
}

/// Final position for an overlay.
///
/// `top`/`left` are absolute document coordinates (scroll already applied),
/// ready to apply to an absolutely positioned overlay. `placement` is the side
/// that was chosen, for placement-specific styling such as arrow direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedCoordinates {
    /// Document-space y of the overlay's top edge.
    pub top: f64,
    /// Document-space x of the overlay's left edge.
    pub left: f64,
    /// Side chosen by the resolver.
    pub placement: Side,
}

impl ResolvedCoordinates {
    /// The overlay origin as a point (`x` = left, `y` = top).
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}
