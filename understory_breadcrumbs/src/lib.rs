// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breadcrumbs --heading-base-level=0

//! Understory Breadcrumbs: responsive layout for breadcrumb navigation.
//!
//! This crate decides which breadcrumb steps to show when horizontal space runs
//! out. It does not render anything. Each layout pass yields a declarative
//! [`LayoutPlan`], and a toolkit turns that plan into widgets, either directly
//! or by implementing [`LayoutSurface`] and letting [`LayoutEngine`] push the
//! plan for it.
//!
//! ## Wide mode
//!
//! - Consecutive collapsible steps form [collapse ranges](find_collapse_ranges).
//! - When the summed step widths exceed the container width (plus a small
//!   tolerance), collapse ranges are hidden whole, and each hidden run becomes an
//!   [`OverflowGroup`] shown as a single "…" [`OverflowIndicator`] before its first step.
//! - When space comes back, every step is restored. Nothing is remembered
//!   between passes.
//! - The first step is never hidden, and neither is any step that is not collapsible.
//!
//! ## Compact mode
//!
//! For narrow viewports (see [`CompactTrigger`]) the row shrinks to a
//! back-navigation presentation. Only the step just before the current page,
//! plus the last step when it is not the current page, stay visible.
//!
//! ## API overview
//!
//! - [`Step`]: one breadcrumb entry (label, optional target, collapsible flag).
//! - [`find_collapse_ranges`] / [`collapse_ranges`]: range detection.
//! - [`plan_wide`] / [`plan_compact`]: pure planners producing a [`LayoutPlan`].
//! - [`LayoutEngine::recompute`]: measure, plan, and apply in one pass.
//! - [`LayoutOptions`]: tolerance, indicator width, [`CollapsePolicy`], first-step pinning.
//! - [`RowModel`], [`arrange_row`], [`entry_at`]: an in-memory surface and row placement.
//!
//! ## Example
//!
//! ```
//! use understory_breadcrumbs::{LayoutEngine, RowModel, Step, Trigger};
//!
//! let steps = vec![
//!     Step::link("Home", "/home"),
//!     Step::link("Category", "/category").with_collapsible(true),
//!     Step::link("Product", "/product").with_collapsible(true),
//!     Step::current("Details"),
//! ];
//!
//! let mut row = RowModel::new(steps.clone())
//!     .with_widths(&[50.0, 90.0, 90.0, 70.0])
//!     .with_container_width(240.0);
//!
//! let mut engine = LayoutEngine::new();
//! let plan = engine.recompute(&steps, &mut row, false, Trigger::Resize);
//!
//! // Category and Product are hidden behind one indicator.
//! assert_eq!(plan.visible_indices().collect::<Vec<_>>(), [0, 3]);
//! let group = &plan.groups()[0];
//! let labels: Vec<_> = group.entries().map(|e| e.label).collect();
//! assert_eq!(labels, ["Category", "Product"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod indicator;
mod options;
mod plan;
mod ranges;
mod row;
mod surface;
mod types;

pub use engine::{LayoutEngine, PassPhase, Trigger};
pub use indicator::{DisclosureEntry, ELLIPSIS, OverflowGroup, OverflowIndicator};
pub use options::{CollapsePolicy, CompactTrigger, LayoutOptions};
pub use plan::{LayoutMode, LayoutPlan, plan_compact, plan_wide};
pub use ranges::{CollapseRange, collapse_ranges, find_collapse_ranges};
pub use row::{Placed, RowEntry, RowModel, arrange_row, entry_at};
pub use surface::{LayoutSurface, apply_plan, measure, reset_surface};
pub use types::{CompactMarks, Step};
