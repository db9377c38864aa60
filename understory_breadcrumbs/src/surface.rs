// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation surface a layout pass reads from and writes to.
//!
//! A toolkit implements [`LayoutSurface`] over whatever it renders breadcrumbs
//! with. The engine only measures through it and pushes visibility, compact
//! marks, and indicators back; it keeps no reference after a pass.

use alloc::vec::Vec;

use crate::indicator::OverflowIndicator;
use crate::plan::LayoutPlan;
use crate::types::CompactMarks;

/// Measurement and mutation hooks for one breadcrumb container.
///
/// Widths must be fresh whenever the engine reads them. Each
/// [`LayoutEngine::recompute`](crate::LayoutEngine::recompute) shows every step
/// (see [`reset_surface`]) before measuring, so a surface backed by a real
/// renderer has to reflow between those writes and the next read.
pub trait LayoutSurface {
    /// Available width of the container.
    fn container_width(&self) -> f64;

    /// Natural rendered width of step `index`.
    ///
    /// This is the width the step takes when shown. A renderer that reports
    /// zero for hidden steps is fine, because the engine shows every step again
    /// before measuring.
    fn step_width(&self, index: usize) -> f64;

    /// Number of steps the surface holds, if it tracks them.
    ///
    /// The engine checks this against the step sequence it is given.
    fn step_count(&self) -> Option<usize> {
        None
    }

    /// Show or hide step `index`.
    fn set_step_visible(&mut self, index: usize, visible: bool);

    /// Record compact-mode marks for step `index`.
    fn set_compact_marks(&mut self, index: usize, marks: CompactMarks) {
        let _ = (index, marks);
    }

    /// True if an indicator already sits immediately before step `index`.
    fn indicator_before(&self, index: usize) -> bool;

    /// Insert an indicator before step `indicator.before`.
    fn insert_indicator(&mut self, indicator: &OverflowIndicator<'_>);

    /// Remove every indicator.
    fn remove_indicators(&mut self);
}

/// Read `len` step widths from a surface.
pub fn measure<S: LayoutSurface + ?Sized>(surface: &S, len: usize) -> Vec<f64> {
    (0..len).map(|i| surface.step_width(i)).collect()
}

/// Return a surface to its unhidden state: no indicators, every step shown,
/// no compact marks.
pub fn reset_surface<S: LayoutSurface + ?Sized>(surface: &mut S, len: usize) {
    surface.remove_indicators();
    for i in 0..len {
        surface.set_step_visible(i, true);
        surface.set_compact_marks(i, CompactMarks::empty());
    }
}

/// Push a plan onto a surface.
///
/// Stale indicators are removed before anything else, so the surface ends up
/// matching the plan exactly no matter what a previous pass left behind.
pub fn apply_plan<S: LayoutSurface + ?Sized>(plan: &LayoutPlan, surface: &mut S) {
    surface.remove_indicators();
    for (i, &visible) in plan.visibility().iter().enumerate() {
        surface.set_step_visible(i, visible);
        surface.set_compact_marks(i, plan.marks(i));
    }
    for indicator in plan.indicators() {
        if !surface.indicator_before(indicator.before) {
            surface.insert_indicator(&indicator);
        }
    }
}
