// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout plans: the output of one layout pass.
//!
//! ## Wide mode
//!
//! [`plan_wide`] runs the width-fit decision loop:
//!
//! 1. Find the collapse ranges. With [`LayoutOptions::pin_first`] set, index 0
//!    is clipped out of the first range, so the first step is never hidden.
//! 2. If no range remains, nothing is hidden, whatever the widths.
//! 3. If the summed widths fit within `container_width + tolerance`, nothing is hidden.
//! 4. Otherwise ranges are hidden whole, per [`CollapsePolicy`], and each one
//!    becomes an [`OverflowGroup`].
//!
//! ## Compact mode
//!
//! [`plan_compact`] keeps only the step right before the current step and the
//! last step when that one is not current. Every other step is suppressed, and
//! no overflow group is produced.
//!
//! Both planners are pure: equal inputs give equal plans, and no state carries
//! over from a previous pass.

use alloc::vec;
use alloc::vec::Vec;

use crate::indicator::{OverflowGroup, OverflowIndicator};
use crate::options::{CollapsePolicy, LayoutOptions};
use crate::ranges::{CollapseRange, collapse_ranges};
use crate::types::{CompactMarks, Step};

/// Which policy produced a plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Width-fit collapsing with overflow indicators.
    Wide,
    /// Reduced back-navigation presentation.
    Compact,
}

/// Visible/hidden partition, compact marks, and overflow groups for one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    mode: LayoutMode,
    visible: Vec<bool>,
    marks: Vec<CompactMarks>,
    groups: Vec<OverflowGroup>,
    total_width: f64,
    container_width: f64,
}

impl LayoutPlan {
    fn all_visible(mode: LayoutMode, len: usize) -> Self {
        Self {
            mode,
            visible: vec![true; len],
            marks: vec![CompactMarks::empty(); len],
            groups: Vec::new(),
            total_width: 0.0,
            container_width: 0.0,
        }
    }

    /// Policy that produced this plan.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Number of steps covered.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// True if the plan covers no steps.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// True if step `index` is shown. Out-of-range indices are not visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Visibility of every step, by index.
    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    /// Indices of visible steps, in order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
    }

    /// Indices of hidden steps, in order.
    pub fn hidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| (!v).then_some(i))
    }

    /// Compact marks for step `index`; empty in wide mode.
    pub fn marks(&self, index: usize) -> CompactMarks {
        self.marks.get(index).copied().unwrap_or_default()
    }

    /// Compact marks of every step, by index.
    pub fn compact_marks(&self) -> &[CompactMarks] {
        &self.marks
    }

    /// Hidden runs, in sequence order.
    pub fn groups(&self) -> &[OverflowGroup] {
        &self.groups
    }

    /// The group hiding step `index`, if any.
    pub fn group_containing(&self, index: usize) -> Option<&OverflowGroup> {
        self.groups.iter().find(|g| g.range.contains(index))
    }

    /// One indicator per group, in sequence order.
    pub fn indicators(&self) -> impl Iterator<Item = OverflowIndicator<'_>> + '_ {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| OverflowIndicator::new(i, g))
    }

    /// Summed (sanitized) step widths measured for this pass. Zero in compact mode.
    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    /// Container width this pass was fitted against. Zero in compact mode.
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    fn hide(&mut self, range: CollapseRange, steps: &[Step]) {
        for i in range.indices() {
            self.visible[i] = false;
        }
        self.groups.push(OverflowGroup::new(range, steps));
    }
}

/// Step widths with missing, negative, or non-finite values read as zero.
///
/// Each invalid value is reported once per pass.
pub(crate) fn sanitized_widths(widths: &[f64], len: usize) -> Vec<f64> {
    (0..len)
        .map(|index| match widths.get(index).copied() {
            Some(w) if w.is_finite() && w >= 0.0 => w,
            Some(w) => {
                log::warn!("breadcrumb step {index} reported invalid width {w}; using 0");
                0.0
            }
            None => 0.0,
        })
        .collect()
}

/// Run the width-fit decision loop.
///
/// `widths[i]` is the natural width of `steps[i]`, as it renders when shown.
///
/// ```
/// use understory_breadcrumbs::{LayoutOptions, Step, plan_wide};
///
/// let steps = [
///     Step::link("Home", "/"),
///     Step::link("A", "/a").with_collapsible(true),
///     Step::link("B", "/a/b").with_collapsible(true),
///     Step::link("C", "/a/b/c").with_collapsible(true),
///     Step::current("D"),
/// ];
/// let widths = [30.0, 20.0, 20.0, 20.0, 30.0];
///
/// let narrow = plan_wide(&steps, &widths, 100.0, &LayoutOptions::default());
/// assert_eq!(narrow.hidden_indices().collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!(narrow.indicators().map(|i| i.before).collect::<Vec<_>>(), [1]);
///
/// let wide = plan_wide(&steps, &widths, 130.0, &LayoutOptions::default());
/// assert!(wide.groups().is_empty());
/// ```
pub fn plan_wide(
    steps: &[Step],
    widths: &[f64],
    container_width: f64,
    options: &LayoutOptions,
) -> LayoutPlan {
    let mut plan = LayoutPlan::all_visible(LayoutMode::Wide, steps.len());
    let widths = sanitized_widths(widths, steps.len());
    plan.total_width = widths.iter().sum();
    plan.container_width = container_width;

    if !container_width.is_finite() || container_width < 0.0 {
        log::warn!("invalid breadcrumb container width {container_width}; showing all steps");
        return plan;
    }

    let first = usize::from(options.pin_first);
    let ranges: Vec<_> = collapse_ranges(steps)
        .into_iter()
        .filter_map(|r| r.clipped_from(first))
        .collect();
    if ranges.is_empty() {
        return plan;
    }

    let limit = container_width + options.effective_tolerance();
    if plan.total_width <= limit {
        return plan;
    }

    match options.policy {
        CollapsePolicy::AllRanges => {
            for range in ranges {
                plan.hide(range, steps);
            }
        }
        CollapsePolicy::UntilFits => {
            let indicator = options.effective_indicator_width();
            let mut remaining = plan.total_width;
            for range in ranges {
                if remaining <= limit {
                    break;
                }
                let freed: f64 = widths[range.indices()].iter().sum();
                remaining = remaining - freed + indicator;
                plan.hide(range, steps);
            }
        }
    }

    log::debug!(
        "breadcrumbs: total {} > {}, hid {} step(s) in {} group(s)",
        plan.total_width,
        container_width,
        plan.hidden_indices().count(),
        plan.groups.len()
    );
    plan
}

/// Run the compact-mode policy.
///
/// ```
/// use understory_breadcrumbs::{Step, plan_compact};
///
/// let steps = [
///     Step::link("Home", "/"),
///     Step::link("Docs", "/docs"),
///     Step::link("Guide", "/docs/guide"),
///     Step::current("Intro"),
/// ];
/// let plan = plan_compact(&steps);
/// assert_eq!(plan.visible_indices().collect::<Vec<_>>(), [2]);
/// ```
pub fn plan_compact(steps: &[Step]) -> LayoutPlan {
    let len = steps.len();
    let mut plan = LayoutPlan {
        mode: LayoutMode::Compact,
        visible: vec![false; len],
        marks: vec![CompactMarks::COMPACT; len],
        groups: Vec::new(),
        total_width: 0.0,
        container_width: 0.0,
    };
    let Some(last) = len.checked_sub(1) else {
        return plan;
    };

    if !steps[last].is_current() {
        plan.marks[last] |= CompactMarks::LAST_NOT_CURRENT;
    }
    for (i, pair) in steps.windows(2).enumerate() {
        if pair[1].is_current() {
            plan.marks[i] |= CompactMarks::BEFORE_CURRENT;
        }
    }
    for (v, m) in plan.visible.iter_mut().zip(&plan.marks) {
        *v = m.is_shown();
    }
    plan
}
