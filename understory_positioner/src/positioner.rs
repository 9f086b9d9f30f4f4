// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive positioner.
//!
//! ## Overview
//!
//! [`Positioner`] owns the current [`ResolvedCoordinates`] for one overlay and
//! decides when to recompute them. It never recomputes synchronously: every
//! trigger is queued, and the queue is processed only when the host reports
//! that layout has settled. An overlay measures `0×0` until it has been laid
//! out, so resolving earlier would place it against the wrong size.
//!
//! ## Triggers
//!
//! - [`Positioner::set_anchor`] with a different anchor.
//! - [`Positioner::mount_overlay`].
//! - [`Positioner::set_options`] with different options.
//! - [`Positioner::invalidate`] (resize, scroll, content change).
//!
//! ## Processing
//!
//! On [`Positioner::layout_settled`] the queue is coalesced to its newest
//! request, geometry is measured fresh from the [`Host`], the resolver runs,
//! and the result is published through [`Published::publish_if_newer`].
//! If the overlay still measures `0×0`, the request stays queued and another
//! settle notification is requested. A host that never settles simply never
//! recomputes.

use alloc::collections::VecDeque;

use kurbo::Size;
use understory_placement::{PlacementOptions, ResolvedCoordinates, resolve_with};

use crate::host::Host;
use crate::published::{Published, SubscriptionId, Ticket};

/// Why a recompute was requested.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Trigger {
    /// The anchor element changed.
    AnchorChanged,
    /// An overlay was mounted and needs its first position.
    OverlayMounted,
    /// Placement options changed.
    OptionsChanged,
    /// The host reported a geometry change (resize, scroll, content).
    Invalidated,
}

#[derive(Copy, Clone, Debug)]
struct Request {
    ticket: Ticket,
    trigger: Trigger,
}

/// Recomputes an overlay's position after layout settles and publishes it.
///
/// `E` is the host's element handle and `H` the [`Host`] that measures it.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_placement::Side;
/// use understory_positioner::{Host, Positioner};
///
/// struct Page {
///     overlay: Rect,
/// }
///
/// impl Host<&'static str> for Page {
///     fn measure(&self, element: &&'static str) -> Rect {
///         match *element {
///             "button" => Rect::new(550.0, 400.0, 650.0, 440.0),
///             _ => self.overlay,
///         }
///     }
///     fn scroll_offset(&self) -> Vec2 { Vec2::ZERO }
///     fn viewport_size(&self) -> Size { Size::new(1200.0, 800.0) }
/// }
///
/// let mut p = Positioner::new(Page { overlay: Rect::ZERO });
/// p.set_anchor("button");
/// p.mount_overlay("tooltip");
///
/// // The overlay has not been laid out yet.
/// assert!(p.layout_settled().is_none());
///
/// p.host_mut().overlay = Rect::new(0.0, 0.0, 100.0, 40.0);
/// let r = p.layout_settled().unwrap();
/// assert_eq!(r.placement, Side::Top);
/// assert_eq!(p.current(), Some(&r));
/// ```
pub struct Positioner<E, H: Host<E>> {
    host: H,
    options: PlacementOptions,
    anchor: Option<E>,
    overlay: Option<E>,
    queue: VecDeque<Request>,
    next_ticket: Ticket,
    settle_scheduled: bool,
    published: Published<ResolvedCoordinates>,
}

impl<E: core::fmt::Debug, H: Host<E>> core::fmt::Debug for Positioner<E, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Positioner")
            .field("options", &self.options)
            .field("anchor", &self.anchor)
            .field("overlay", &self.overlay)
            .field("pending", &self.queue.len())
            .field("published", &self.published)
            .finish_non_exhaustive()
    }
}

impl<E: PartialEq, H: Host<E>> Positioner<E, H> {
    /// Create a positioner with default [`PlacementOptions`].
    pub fn new(host: H) -> Self {
        Self::with_options(host, PlacementOptions::default())
    }

    /// Create a positioner with explicit options.
    pub fn with_options(host: H, options: PlacementOptions) -> Self {
        Self {
            host,
            options,
            anchor: None,
            overlay: None,
            queue: VecDeque::new(),
            next_ticket: Ticket::new(1),
            settle_scheduled: false,
            published: Published::new(),
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    ///
    /// Geometry changes made through this handle are not observed until the
    /// next trigger; call [`invalidate`](Self::invalidate) afterwards.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current placement options.
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Replace the placement options, requesting a recompute if they differ.
    pub fn set_options(&mut self, options: PlacementOptions) {
        if self.options != options {
            self.options = options;
            self.request(Trigger::OptionsChanged);
        }
    }

    /// The current anchor, if any.
    pub fn anchor(&self) -> Option<&E> {
        self.anchor.as_ref()
    }

    /// Attach to `anchor`, requesting a recompute if it differs from the current one.
    pub fn set_anchor(&mut self, anchor: E) {
        if self.anchor.as_ref() == Some(&anchor) {
            return;
        }
        self.anchor = Some(anchor);
        self.request(Trigger::AnchorChanged);
    }

    /// Record that `overlay` was mounted by the rendering layer.
    ///
    /// Its position is computed after the next layout-settled notification.
    pub fn mount_overlay(&mut self, overlay: E) {
        self.overlay = Some(overlay);
        self.request(Trigger::OverlayMounted);
    }

    /// Forget the overlay, drop pending requests, and clear the published value.
    pub fn unmount_overlay(&mut self) {
        self.overlay = None;
        self.queue.clear();
        self.published.clear();
    }

    /// Request a recompute because host geometry changed.
    pub fn invalidate(&mut self) {
        self.request(Trigger::Invalidated);
    }

    /// Whether a recompute is queued.
    pub fn is_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The last published coordinates.
    pub fn current(&self) -> Option<&ResolvedCoordinates> {
        self.published.get()
    }

    /// The published value node.
    pub fn published(&self) -> &Published<ResolvedCoordinates> {
        &self.published
    }

    /// Subscribe to published coordinates. `None` is delivered when the overlay is unmounted.
    pub fn subscribe(
        &mut self,
        f: impl FnMut(Option<&ResolvedCoordinates>) + 'static,
    ) -> SubscriptionId {
        self.published.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.published.unsubscribe(id)
    }

    /// Process queued requests now that layout has settled.
    ///
    /// Returns the coordinates published by this call, if any.
    pub fn layout_settled(&mut self) -> Option<ResolvedCoordinates> {
        self.settle_scheduled = false;
        let pending = self.queue.len();
        let newest = self.queue.pop_back()?;
        self.queue.clear();
        if pending > 1 {
            log::trace!("coalesced {pending} recompute requests into {newest:?}");
        }

        let (Some(anchor), Some(overlay)) = (self.anchor.as_ref(), self.overlay.as_ref()) else {
            log::trace!("dropping {:?}: anchor or overlay missing", newest.trigger);
            return None;
        };

        let overlay_size = self.host.measure(overlay).size();
        if overlay_size == Size::ZERO {
            log::trace!("overlay not laid out yet; deferring {newest:?}");
            self.queue.push_back(newest);
            self.schedule();
            return None;
        }

        let anchor_rect = self.host.measure(anchor);
        let scroll = self.host.scroll_offset();
        let viewport = self.host.viewport_size();
        let resolution = resolve_with(&self.options, anchor_rect, overlay_size, scroll, viewport);
        let coords = resolution.coordinates;
        if self.published.publish_if_newer(newest.ticket, coords) {
            log::debug!(
                "published {:?} at ({}, {}) for {:?}",
                coords.placement,
                coords.left,
                coords.top,
                newest.trigger
            );
            Some(coords)
        } else {
            None
        }
    }

    fn request(&mut self, trigger: Trigger) {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.queue.push_back(Request { ticket, trigger });
        self.schedule();
    }

    fn schedule(&mut self) {
        if !self.settle_scheduled {
            self.settle_scheduled = true;
            self.host.schedule_layout_settled();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::{Point, Rect, Vec2};
    use understory_placement::{Placement, Side};

    const ANCHOR: u32 = 1;
    const OTHER_ANCHOR: u32 = 2;
    const OVERLAY: u32 = 10;

    #[derive(Default)]
    struct Page {
        rects: BTreeMap<u32, Rect>,
        scroll: Vec2,
        viewport: Size,
        settles_requested: u32,
    }

    impl Page {
        fn new() -> Self {
            let mut page = Self {
                viewport: Size::new(1200.0, 800.0),
                ..Default::default()
            };
            page.rects.insert(
                ANCHOR,
                Rect::from_origin_size(Point::new(550.0, 400.0), Size::new(100.0, 40.0)),
            );
            page.rects.insert(
                OTHER_ANCHOR,
                Rect::from_origin_size(Point::new(550.0, 10.0), Size::new(100.0, 40.0)),
            );
            page
        }

        fn lay_out_overlay(&mut self) {
            self.rects.insert(OVERLAY, Rect::new(0.0, 0.0, 100.0, 40.0));
        }
    }

    impl Host<u32> for Page {
        fn measure(&self, element: &u32) -> Rect {
            self.rects.get(element).copied().unwrap_or(Rect::ZERO)
        }

        fn scroll_offset(&self) -> Vec2 {
            self.scroll
        }

        fn viewport_size(&self) -> Size {
            self.viewport
        }

        fn schedule_layout_settled(&mut self) {
            self.settles_requested += 1;
        }
    }

    fn mounted() -> Positioner<u32, Page> {
        let mut p = Positioner::new(Page::new());
        p.set_anchor(ANCHOR);
        p.mount_overlay(OVERLAY);
        p
    }

    #[test]
    fn nothing_happens_before_layout_settles() {
        let mut page = Page::new();
        page.lay_out_overlay();
        let mut p = Positioner::new(page);
        p.set_anchor(ANCHOR);
        p.mount_overlay(OVERLAY);
        assert!(p.is_pending());
        assert!(p.current().is_none());
        // Both triggers share one settle notification.
        assert_eq!(p.host().settles_requested, 1);

        let r = p.layout_settled().unwrap();
        assert_eq!(r.placement, Side::Top);
        assert_eq!(r.top, 352.0);
        assert!(!p.is_pending());
    }

    #[test]
    fn zero_sized_overlay_defers_until_measurable() {
        let mut p = mounted();
        assert!(p.layout_settled().is_none());
        assert!(p.is_pending());
        assert!(p.current().is_none());
        assert_eq!(p.host().settles_requested, 2);

        p.host_mut().lay_out_overlay();
        let r = p.layout_settled().unwrap();
        assert_eq!(r.placement, Side::Top);
        assert_eq!(p.current(), Some(&r));
    }

    #[test]
    fn anchor_change_recomputes_with_new_geometry() {
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        assert_eq!(p.layout_settled().unwrap().placement, Side::Top);

        p.set_anchor(OTHER_ANCHOR);
        assert!(p.is_pending());
        let r = p.layout_settled().unwrap();
        assert_eq!(r.placement, Side::Bottom);
        assert_eq!(r.top, 58.0);
    }

    #[test]
    fn same_anchor_does_not_trigger() {
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        p.layout_settled();
        p.set_anchor(ANCHOR);
        assert!(!p.is_pending());
        assert!(p.layout_settled().is_none());
    }

    #[test]
    fn rapid_triggers_coalesce_to_latest_inputs() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        let sink = seen.clone();
        p.subscribe(move |c| sink.borrow_mut().push(c.map(|c| c.top)));

        p.host_mut().scroll = Vec2::new(0.0, 100.0);
        p.invalidate();
        p.host_mut().scroll = Vec2::new(0.0, 200.0);
        p.invalidate();
        p.host_mut().scroll = Vec2::new(0.0, 300.0);
        p.invalidate();

        let r = p.layout_settled().unwrap();
        assert_eq!(r.top, 652.0);
        assert_eq!(*seen.borrow(), vec![Some(652.0)]);
    }

    #[test]
    fn settle_without_requests_is_a_no_op() {
        let mut p: Positioner<u32, Page> = Positioner::new(Page::new());
        assert!(p.layout_settled().is_none());
        assert_eq!(p.host().settles_requested, 0);
    }

    #[test]
    fn missing_anchor_drops_request() {
        let mut page = Page::new();
        page.lay_out_overlay();
        let mut p = Positioner::new(page);
        p.mount_overlay(OVERLAY);
        assert!(p.layout_settled().is_none());
        assert!(!p.is_pending());
    }

    #[test]
    fn options_change_triggers_recompute() {
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        p.layout_settled();

        p.set_options(PlacementOptions::default());
        assert!(!p.is_pending());

        p.set_options(PlacementOptions::default().with_preferred(Placement::Left));
        let r = p.layout_settled().unwrap();
        assert_eq!(r.placement, Side::Left);
        assert_eq!(r.left, 442.0);
    }

    #[test]
    fn unmount_clears_pending_and_published() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        let sink = seen.clone();
        p.subscribe(move |c| sink.borrow_mut().push(c.is_some()));
        p.layout_settled();
        p.invalidate();

        p.unmount_overlay();
        assert!(!p.is_pending());
        assert!(p.current().is_none());
        assert!(p.layout_settled().is_none());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn published_tickets_increase_across_settles() {
        let mut p = mounted();
        p.host_mut().lay_out_overlay();
        p.layout_settled();
        let first = p.published().ticket().unwrap();
        p.invalidate();
        p.layout_settled();
        let second = p.published().ticket().unwrap();
        assert!(second > first);
    }

    #[test]
    fn works_through_a_borrowed_host() {
        let mut page = Page::new();
        page.lay_out_overlay();
        {
            let mut p = Positioner::new(&mut page);
            p.set_anchor(ANCHOR);
            p.mount_overlay(OVERLAY);
            assert!(p.layout_settled().is_some());
        }
        assert_eq!(page.settles_requested, 1);
    }
}
