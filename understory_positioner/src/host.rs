// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the positioner consumes.
//!
//! The positioner never talks to a UI toolkit directly. Implement [`Host`]
//! over your element handles (DOM nodes, box-tree ids, widget ids) to supply
//! measurements and the layout-settled notification.

use kurbo::{Rect, Size, Vec2};

/// Measurement and scheduling capabilities supplied by the host environment.
///
/// All queries are made synchronously at recompute time and are never cached
/// by the positioner.
pub trait Host<E> {
    /// Current viewport-relative bounding box of `element`.
    ///
    /// An overlay that has not been laid out yet should report a `0×0` rect.
    fn measure(&self, element: &E) -> Rect;

    /// Current page scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Current visible viewport size.
    fn viewport_size(&self) -> Size;

    /// Ask the host to call [`Positioner::layout_settled`](crate::Positioner::layout_settled)
    /// once the current render/layout pass has completed.
    ///
    /// The positioner calls this at most once per batch of queued requests.
    /// Hosts that drive `layout_settled` from their own frame loop can leave
    /// the default no-op.
    fn schedule_layout_settled(&mut self) {}
}

impl<E, H: Host<E> + ?Sized> Host<E> for &mut H {
    #[inline]
    fn measure(&self, element: &E) -> Rect {
        (**self).measure(element)
    }

    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    #[inline]
    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    #[inline]
    fn schedule_layout_settled(&mut self) {
        (**self).schedule_layout_settled();
    }
}
