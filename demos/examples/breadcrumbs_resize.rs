// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrinking and growing a breadcrumb row.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example breadcrumbs_resize`

use understory_breadcrumbs::{
    ELLIPSIS, LayoutEngine, RowEntry, RowModel, Step, Trigger, arrange_row,
};

const INDICATOR_W: f64 = 24.0;

fn render(row: &RowModel) -> String {
    let mut out = Vec::new();
    for entry in row.entries() {
        match *entry {
            RowEntry::Step(i) if row.is_visible(i) => out.push(row.steps()[i].label.clone()),
            RowEntry::Step(_) => {}
            RowEntry::Indicator(_) => out.push(ELLIPSIS.to_string()),
        }
    }
    out.join(" / ")
}

fn main() {
    env_logger::init();

    let steps = vec![
        Step::link("Home", "/home"),
        Step::link("Electronics", "/electronics").with_collapsible(true),
        Step::link("Computers", "/electronics/computers").with_collapsible(true),
        Step::link("Laptops", "/electronics/computers/laptops"),
        Step::link("Ultrabooks", "/electronics/computers/laptops/ultra").with_collapsible(true),
        Step::current("Model X"),
    ];
    let widths = [60.0, 110.0, 100.0, 80.0, 105.0, 90.0];

    let mut row = RowModel::new(steps).with_widths(&widths);
    let mut engine = LayoutEngine::new();

    for container in [700.0, 500.0, 300.0, 545.0, 546.0] {
        row.set_container_width(container);
        let plan = engine.recompute_row(&mut row, false, Trigger::Resize);
        let placed = arrange_row(&plan, row.steps(), row.widths(), INDICATOR_W, container, 20.0);
        let used = placed.last().map_or(0.0, |p| p.bounds.x1);
        println!(
            "container={container:>5.1} groups={} used={used:>5.1} | {}",
            plan.groups().len(),
            render(&row)
        );
    }
}
