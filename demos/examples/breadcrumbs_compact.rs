// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switching between wide and compact presentation as the viewport changes.
//!
//! Run:
//! - `cargo run -p understory_demos --example breadcrumbs_compact`

use kurbo::Size;
use understory_breadcrumbs::{CompactTrigger, LayoutEngine, RowModel, Step, Trigger};

fn main() {
    env_logger::init();

    let steps = vec![
        Step::link("Home", "/"),
        Step::link("Projects", "/projects"),
        Step::link("Understory", "/projects/understory"),
        Step::current("Issues"),
    ];
    let mut row = RowModel::new(steps.clone())
        .with_widths(&[50.0, 80.0, 100.0, 60.0])
        .with_container_width(600.0);

    let mut engine = LayoutEngine::new().with_compact_trigger(CompactTrigger::default());

    for viewport in [Size::new(1280.0, 800.0), Size::new(390.0, 844.0)] {
        let plan = engine.recompute_for_viewport(&steps, &mut row, viewport, Trigger::Resize);
        println!("viewport {}x{} -> {:?}", viewport.width, viewport.height, plan.mode());
        for i in plan.visible_indices() {
            let back = if plan.marks(i).shows_back_icon() { "<- " } else { "" };
            println!("  {back}{}", steps[i].label);
        }
    }

    // A forced trigger wins regardless of the viewport.
    engine.set_compact_trigger(CompactTrigger::default().with_forced(true));
    let plan = engine.recompute_for_viewport(
        &steps,
        &mut row,
        Size::new(1280.0, 800.0),
        Trigger::CompactChanged,
    );
    println!("forced -> {:?}", plan.mode());
}
