// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Resolve a tooltip around anchors in different corners of the viewport and
//! print the chosen side and coordinates.
//!
//! Run:
//! - `cargo run -p understory_examples --example placement_basics`

use kurbo::{Point, Rect, Size, Vec2};
use understory_placement::{Placement, Side, fallback_chain, resolve_detailed};

fn main() {
    let viewport = Size::new(1200.0, 800.0);
    let overlay = Size::new(160.0, 48.0);
    let scroll = Vec2::new(0.0, 240.0);

    let anchors = [
        ("center", Point::new(550.0, 400.0)),
        ("top edge", Point::new(550.0, 4.0)),
        ("right edge", Point::new(1150.0, 400.0)),
        ("bottom-left", Point::new(0.0, 770.0)),
    ];

    for preferred in [Placement::Auto, Placement::Top, Placement::Right] {
        println!("== preferred {preferred:?}, chain {:?} ==", fallback_chain(preferred));
        for (name, at) in anchors {
            let anchor = Rect::from_origin_size(at, Size::new(48.0, 24.0));
            let r = resolve_detailed(preferred, anchor, overlay, 8.0, scroll, viewport);
            println!(
                "  {name:>11}: {:?} at ({}, {}) fits={} after {} attempt(s)",
                r.coordinates.placement, r.coordinates.left, r.coordinates.top, r.fits, r.attempts
            );
        }
    }

    // An overlay larger than the viewport never fits; Auto degrades to Top.
    let anchor = Rect::from_origin_size(Point::new(400.0, 300.0), Size::new(48.0, 24.0));
    let r = resolve_detailed(
        Placement::Auto,
        anchor,
        Size::new(2000.0, 1500.0),
        8.0,
        Vec2::ZERO,
        Size::new(800.0, 600.0),
    );
    println!("== oversized ==\n  {:?} fits={}", r.coordinates.placement, r.fits);
    assert_eq!(r.coordinates.placement, Side::Top);
    assert!(!r.fits);
}
