// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive tooltip positioning against a simulated page.
//!
//! The page lays the overlay out one frame after it is mounted, scrolls, and
//! swaps anchors. The positioner only recomputes when the page reports that
//! layout has settled.
//!
//! Run:
//! - `cargo run -p understory_examples --example positioner_tooltip`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Rect, Size, Vec2};
use understory_placement::{PlacementOptions, Side};
use understory_positioner::{Host, Positioner};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
enum Element {
    SaveButton,
    HeaderLink,
    Tooltip,
}

#[derive(Default)]
struct Page {
    rects: HashMap<Element, Rect>,
    scroll: Vec2,
    viewport: Size,
    settle_requested: bool,
}

impl Host<Element> for Page {
    fn measure(&self, element: &Element) -> Rect {
        self.rects.get(element).copied().unwrap_or(Rect::ZERO)
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn schedule_layout_settled(&mut self) {
        self.settle_requested = true;
    }
}

/// Run one frame: if the positioner asked for a layout-settled notification, deliver it.
fn frame(p: &mut Positioner<Element, Page>) {
    if std::mem::take(&mut p.host_mut().settle_requested) {
        p.layout_settled();
    }
}

fn main() {
    let mut page = Page {
        viewport: Size::new(1200.0, 800.0),
        ..Default::default()
    };
    page.rects
        .insert(Element::SaveButton, Rect::new(550.0, 400.0, 650.0, 440.0));
    page.rects
        .insert(Element::HeaderLink, Rect::new(40.0, 6.0, 120.0, 30.0));

    let mut p = Positioner::with_options(page, PlacementOptions::default().with_offset(6.0));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    p.subscribe(move |c| {
        if let Some(c) = c {
            println!("  publish: {:?} at ({}, {})", c.placement, c.left, c.top);
        }
        sink.borrow_mut().push(c.map(|c| c.placement));
    });

    println!("== mount ==");
    p.set_anchor(Element::SaveButton);
    p.mount_overlay(Element::Tooltip);
    // Frame 1: the tooltip has not been laid out yet, nothing is published.
    frame(&mut p);
    // Frame 2: layout produced a size.
    p.host_mut()
        .rects
        .insert(Element::Tooltip, Rect::new(0.0, 0.0, 140.0, 32.0));
    frame(&mut p);

    println!("== scroll ==");
    p.host_mut().scroll = Vec2::new(0.0, 500.0);
    p.invalidate();
    frame(&mut p);

    println!("== anchor near the top edge ==");
    p.set_anchor(Element::HeaderLink);
    frame(&mut p);

    println!("== unmount ==");
    p.unmount_overlay();

    assert_eq!(
        *log.borrow(),
        vec![Some(Side::Top), Some(Side::Top), Some(Side::Bottom), None]
    );
}
