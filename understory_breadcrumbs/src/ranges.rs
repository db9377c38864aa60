// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse-range detection.
//!
//! A collapse range is a maximal run of consecutive collapsible steps. Detection
//! depends only on the collapsible flag pattern, never on widths.
//!
//! ```
//! use understory_breadcrumbs::{CollapseRange, find_collapse_ranges};
//!
//! let ranges = find_collapse_ranges([false, true, true, false, true]);
//! assert_eq!(ranges, vec![CollapseRange::new(1, 2), CollapseRange::new(4, 4)]);
//! ```

use alloc::vec::Vec;

use crate::types::Step;

/// Inclusive, 0-based index range of consecutive collapsible steps.
///
/// Invariant: `start <= end`. Fields are private so every range goes through
/// [`CollapseRange::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CollapseRange {
    start: usize,
    end: usize,
}

impl CollapseRange {
    /// Create a range. Panics in debug builds if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted collapse range {start}..={end}");
        Self { start, end }
    }

    /// First step in the run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last step in the run (inclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of steps covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one step.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True if `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Iterate the covered indices in order.
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Drop leading indices below `first`, returning `None` if nothing remains.
    pub(crate) fn clipped_from(self, first: usize) -> Option<Self> {
        if self.end < first {
            None
        } else {
            Some(Self::new(self.start.max(first), self.end))
        }
    }
}

/// Find the maximal runs of `true` in an ordered sequence of collapsible flags.
pub fn find_collapse_ranges<I>(flags: I) -> Vec<CollapseRange>
where
    I: IntoIterator<Item = bool>,
{
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;
    let mut len = 0;
    for (i, collapsible) in flags.into_iter().enumerate() {
        len = i + 1;
        match (collapsible, open) {
            (true, None) => open = Some(i),
            (false, Some(start)) => {
                ranges.push(CollapseRange::new(start, i - 1));
                open = None;
            }
            _ => {}
        }
    }
    // Trailing run reaches the end of the sequence.
    if let Some(start) = open {
        ranges.push(CollapseRange::new(start, len - 1));
    }
    ranges
}

/// Collapse ranges for a step sequence.
pub fn collapse_ranges(steps: &[Step]) -> Vec<CollapseRange> {
    find_collapse_ranges(steps.iter().map(|s| s.collapsible))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const F: bool = false;
    const T: bool = true;

    #[test]
    fn empty_sequence_has_no_ranges() {
        assert!(find_collapse_ranges([F; 0]).is_empty());
    }

    #[test]
    fn nothing_collapsible_has_no_ranges() {
        assert!(find_collapse_ranges([F, F, F]).is_empty());
    }

    #[test]
    fn all_collapsible_is_single_range() {
        assert_eq!(
            find_collapse_ranges([T, T, T, T]),
            vec![CollapseRange::new(0, 3)]
        );
    }

    #[test]
    fn mixed_pattern() {
        assert_eq!(
            find_collapse_ranges([F, T, T, F, T]),
            vec![CollapseRange::new(1, 2), CollapseRange::new(4, 4)]
        );
    }

    #[test]
    fn separated_singletons() {
        assert_eq!(
            find_collapse_ranges([T, F, T, F, T, F]),
            vec![
                CollapseRange::new(0, 0),
                CollapseRange::new(2, 2),
                CollapseRange::new(4, 4)
            ]
        );
    }

    #[test]
    fn ranges_from_steps_ignore_labels() {
        let steps = [
            Step::link("Home", "/"),
            Step::link("A", "/a").with_collapsible(true),
            Step::link("B", "/a/b").with_collapsible(true),
            Step::current("C"),
        ];
        assert_eq!(collapse_ranges(&steps), vec![CollapseRange::new(1, 2)]);
    }

    #[test]
    fn clipping_drops_leading_index() {
        assert_eq!(
            CollapseRange::new(0, 2).clipped_from(1),
            Some(CollapseRange::new(1, 2))
        );
        assert_eq!(CollapseRange::new(0, 0).clipped_from(1), None);
        assert_eq!(
            CollapseRange::new(3, 4).clipped_from(1),
            Some(CollapseRange::new(3, 4))
        );
    }

    #[test]
    fn range_accessors() {
        let r = CollapseRange::new(2, 5);
        assert_eq!(r.len(), 4);
        assert_eq!((r.start(), r.end()), (2, 5));
        assert!(r.contains(2) && r.contains(5));
        assert!(!r.contains(1) && !r.contains(6));
        assert_eq!(r.indices().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }
}
