// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row arrangement and an in-memory surface.
//!
//! [`arrange_row`] places the visible steps and indicators of a plan left to
//! right, in document order, the way a start-justified flex row would. Only
//! collapsible steps give up width when the row is too tight.
//! [`entry_at`] maps a horizontal position back to the entry under it.
//!
//! [`RowModel`] is a complete [`LayoutSurface`] held in memory. It tracks
//! widths, visibility, and the rendered entry list with indicators spliced in.
//! Toolkits can drive it directly and render from [`RowModel::entries`].

use alloc::vec::Vec;

use kurbo::Rect;

use crate::indicator::OverflowIndicator;
use crate::options::sanitize;
use crate::plan::LayoutPlan;
use crate::surface::LayoutSurface;
use crate::types::{CompactMarks, Step};

/// One slot in a rendered breadcrumb row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowEntry {
    /// The step at this index.
    Step(usize),
    /// The indicator for the overflow group at this index.
    Indicator(usize),
}

/// A row entry with its placed bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placed {
    /// What is placed.
    pub entry: RowEntry,
    /// Where it is placed, in row coordinates.
    pub bounds: Rect,
}

/// Place the visible entries of `plan` in a row of the given `height`.
///
/// Each indicator takes `indicator_width`. Missing or invalid step widths
/// take zero.
///
/// When the entries add up to more than `available_width`, the overflow is
/// taken out of the visible collapsible steps in proportion to their widths,
/// down to zero at most. The first step and indicators never shrink, and
/// neither do steps that are not collapsible, so the row can still end past
/// `available_width`.
pub fn arrange_row(
    plan: &LayoutPlan,
    steps: &[Step],
    widths: &[f64],
    indicator_width: f64,
    available_width: f64,
    height: f64,
) -> Vec<Placed> {
    let indicator_width = sanitize(indicator_width);
    let mut sized = Vec::with_capacity(plan.len() + plan.groups().len());
    let mut indicators = plan.indicators().peekable();
    for i in 0..plan.len() {
        if let Some(ind) = indicators.next_if(|ind| ind.before == i) {
            sized.push((RowEntry::Indicator(ind.group_index), indicator_width, false));
        }
        if plan.is_visible(i) {
            let w = sanitize(widths.get(i).copied().unwrap_or(0.0));
            let shrinks = i != 0 && steps.get(i).is_some_and(|s| s.collapsible);
            sized.push((RowEntry::Step(i), w, shrinks));
        }
    }

    let total: f64 = sized.iter().map(|&(_, w, _)| w).sum();
    let shrinkable: f64 = sized.iter().filter(|e| e.2).map(|&(_, w, _)| w).sum();
    if available_width.is_finite() && total > available_width && shrinkable > 0.0 {
        let overflow = total - available_width;
        for (_, w, shrinks) in &mut sized {
            if *shrinks {
                *w = (*w - overflow * *w / shrinkable).max(0.0);
            }
        }
    }

    let mut x = 0.0;
    sized
        .into_iter()
        .map(|(entry, w, _)| {
            let bounds = Rect::new(x, 0.0, x + w, height);
            x += w;
            Placed { entry, bounds }
        })
        .collect()
}

/// Entry whose bounds contain the horizontal position `x`.
///
/// Bounds are half-open, so a shared edge belongs to the entry on the right.
pub fn entry_at(placed: &[Placed], x: f64) -> Option<RowEntry> {
    placed
        .iter()
        .find(|p| p.bounds.x0 <= x && x < p.bounds.x1)
        .map(|p| p.entry)
}

/// In-memory breadcrumb row implementing [`LayoutSurface`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowModel {
    steps: Vec<Step>,
    widths: Vec<f64>,
    container_width: f64,
    visible: Vec<bool>,
    marks: Vec<CompactMarks>,
    entries: Vec<RowEntry>,
}

impl RowModel {
    /// Create a row for `steps`; all steps start visible with zero width.
    pub fn new(steps: Vec<Step>) -> Self {
        let mut row = Self::default();
        row.set_steps(steps);
        row
    }

    /// Replace the step sequence, resetting widths and presentation state.
    pub fn set_steps(&mut self, steps: Vec<Step>) {
        let len = steps.len();
        self.steps = steps;
        self.widths = alloc::vec![0.0; len];
        self.visible = alloc::vec![true; len];
        self.marks = alloc::vec![CompactMarks::empty(); len];
        self.entries = (0..len).map(RowEntry::Step).collect();
    }

    /// Set the measured widths. Extra values are ignored; missing ones stay zero.
    pub fn with_widths(mut self, widths: &[f64]) -> Self {
        self.set_widths(widths);
        self
    }

    /// Set the container width.
    pub fn with_container_width(mut self, width: f64) -> Self {
        self.container_width = width;
        self
    }

    /// Update the measured widths.
    pub fn set_widths(&mut self, widths: &[f64]) {
        for (dst, &src) in self.widths.iter_mut().zip(widths) {
            *dst = src;
        }
    }

    /// Update the container width.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = width;
    }

    /// The step sequence.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Measured widths by step index.
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Rendered entries, with indicators in place.
    pub fn entries(&self) -> &[RowEntry] {
        &self.entries
    }

    /// True if step `index` is currently shown.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Compact marks last applied to step `index`.
    pub fn marks(&self, index: usize) -> CompactMarks {
        self.marks.get(index).copied().unwrap_or_default()
    }

    /// Number of indicators in the row.
    pub fn indicator_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, RowEntry::Indicator(_)))
            .count()
    }

    fn position_of_step(&self, index: usize) -> Option<usize> {
        self.entries.iter().position(|e| *e == RowEntry::Step(index))
    }
}

impl LayoutSurface for RowModel {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn step_width(&self, index: usize) -> f64 {
        self.widths.get(index).copied().unwrap_or(0.0)
    }

    fn step_count(&self) -> Option<usize> {
        Some(self.steps.len())
    }

    fn set_step_visible(&mut self, index: usize, visible: bool) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = visible;
        }
    }

    fn set_compact_marks(&mut self, index: usize, marks: CompactMarks) {
        if let Some(m) = self.marks.get_mut(index) {
            *m = marks;
        }
    }

    fn indicator_before(&self, index: usize) -> bool {
        self.position_of_step(index)
            .and_then(|pos| pos.checked_sub(1))
            .is_some_and(|prev| matches!(self.entries[prev], RowEntry::Indicator(_)))
    }

    fn insert_indicator(&mut self, indicator: &OverflowIndicator<'_>) {
        if let Some(pos) = self.position_of_step(indicator.before) {
            self.entries
                .insert(pos, RowEntry::Indicator(indicator.group_index));
        }
    }

    fn remove_indicators(&mut self) {
        self.entries.retain(|e| matches!(e, RowEntry::Step(_)));
    }
}
