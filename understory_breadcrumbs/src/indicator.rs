// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow groups and the indicators that stand in for them.
//!
//! An [`OverflowGroup`] records one hidden run of steps. Each group is rendered
//! as a single [`OverflowIndicator`] placed right before the run's first step.
//! The indicator keeps the hidden steps so a surface can list them later, for
//! example in a popover menu (see [`OverflowGroup::entries`]).

use alloc::vec::Vec;

use crate::ranges::CollapseRange;
use crate::types::Step;

/// Text shown by an overflow indicator.
pub const ELLIPSIS: &str = "\u{2026}";

/// A contiguous run of hidden steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverflowGroup {
    /// Indices of the hidden run.
    pub range: CollapseRange,
    /// Clones of the hidden steps, in order.
    pub hidden_steps: Vec<Step>,
}

impl OverflowGroup {
    pub(crate) fn new(range: CollapseRange, steps: &[Step]) -> Self {
        let hidden_steps = steps[range.indices()].to_vec();
        debug_assert!(!hidden_steps.is_empty(), "overflow group for an empty run");
        Self {
            range,
            hidden_steps,
        }
    }

    /// Index of the first hidden step; the indicator is placed before it.
    pub fn start(&self) -> usize {
        self.range.start()
    }

    /// Index of the last hidden step.
    pub fn end(&self) -> usize {
        self.range.end()
    }

    /// Listing entries for the hidden steps, in order.
    pub fn entries(&self) -> impl Iterator<Item = DisclosureEntry<'_>> + '_ {
        self.hidden_steps.iter().map(DisclosureEntry::from)
    }
}

/// One row in the listing that discloses a hidden run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisclosureEntry<'a> {
    /// Step label.
    pub label: &'a str,
    /// Step target, or `""` for a step without one.
    pub target: &'a str,
}

impl<'a> From<&'a Step> for DisclosureEntry<'a> {
    fn from(step: &'a Step) -> Self {
        Self {
            label: &step.label,
            target: step.target.as_deref().unwrap_or(""),
        }
    }
}

/// Placeholder for one [`OverflowGroup`].
///
/// Indicators are never hidden themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverflowIndicator<'a> {
    /// Position of the group within the plan.
    pub group_index: usize,
    /// Index of the step the indicator is placed before.
    pub before: usize,
    /// The group represented.
    pub group: &'a OverflowGroup,
}

impl<'a> OverflowIndicator<'a> {
    pub(crate) fn new(group_index: usize, group: &'a OverflowGroup) -> Self {
        Self {
            group_index,
            before: group.start(),
            group,
        }
    }

    /// Display text of the indicator.
    pub fn label(&self) -> &'static str {
        ELLIPSIS
    }

    /// The steps hidden behind this indicator.
    pub fn hidden_steps(&self) -> &'a [Step] {
        &self.group.hidden_steps
    }
}
