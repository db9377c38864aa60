// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clicking an overflow indicator and listing the steps it hides.
//!
//! Run:
//! - `cargo run -p understory_demos --example breadcrumbs_disclosure`

use understory_breadcrumbs::{
    LayoutEngine, LayoutOptions, RowEntry, RowModel, Step, Trigger, arrange_row, entry_at,
};

fn main() {
    env_logger::init();

    let steps = vec![
        Step::link("Home", "/home"),
        Step::link("Docs", "/docs").with_collapsible(true),
        Step::link("Guides", "/docs/guides").with_collapsible(true),
        Step::link("Layout", "/docs/guides/layout").with_collapsible(true),
        Step::current("Breadcrumbs"),
    ];
    let widths = [60.0, 50.0, 70.0, 70.0, 110.0];
    let indicator_w = 20.0;

    let mut row = RowModel::new(steps.clone())
        .with_widths(&widths)
        .with_container_width(250.0);
    let mut engine =
        LayoutEngine::with_options(LayoutOptions::default().with_indicator_width(indicator_w));
    let plan = engine.recompute(&steps, &mut row, false, Trigger::ContentChanged);

    let placed = arrange_row(&plan, &steps, row.widths(), indicator_w, 250.0, 20.0);
    for p in &placed {
        println!("{:?} at x={:.0}..{:.0}", p.entry, p.bounds.x0, p.bounds.x1);
    }

    // Simulate a click just right of the first step.
    let click_x = 65.0;
    match entry_at(&placed, click_x) {
        Some(RowEntry::Indicator(g)) => {
            println!("indicator {g} clicked, hidden steps:");
            for e in plan.groups()[g].entries() {
                println!("  {} -> {}", e.label, e.target);
            }
        }
        Some(RowEntry::Step(i)) => println!("navigate to {:?}", steps[i].target),
        None => println!("nothing under x={click_x}"),
    }
}
