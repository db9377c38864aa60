// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for breadcrumbs: steps and compact-mode marks.

use alloc::string::String;

/// A single breadcrumb entry.
///
/// Steps are owned by the caller and only read by the layout engine; the engine
/// never mutates a step, so hiding and later restoring one is lossless.
///
/// The measured width is not stored here. It belongs to the presentation
/// surface and is read fresh on every pass (see [`LayoutSurface`](crate::LayoutSurface)).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Display text. Opaque to the engine.
    pub label: String,
    /// Navigable location. `None` marks the current page.
    pub target: Option<String>,
    /// Whether the engine may hide this step under space pressure.
    pub collapsible: bool,
}

impl Step {
    /// Create a step that links to `target`.
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: Some(target.into()),
            collapsible: false,
        }
    }

    /// Create the step for the current page (no target).
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
            collapsible: false,
        }
    }

    /// Set whether this step is collapsible.
    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// True if this step stands for the current page.
    pub fn is_current(&self) -> bool {
        self.target.is_none()
    }
}

bitflags::bitflags! {
    /// Per-step marks produced by a compact-mode pass.
    ///
    /// Surfaces use these to style the back-navigation presentation. In wide
    /// mode every step carries [`CompactMarks::empty`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CompactMarks: u8 {
        /// The step takes part in a compact pass; unmarked compact steps are suppressed.
        const COMPACT          = 0b0000_0001;
        /// The step sits immediately before the current step.
        const BEFORE_CURRENT   = 0b0000_0010;
        /// The step is the last one and is not the current page.
        const LAST_NOT_CURRENT = 0b0000_0100;
    }
}

impl CompactMarks {
    /// True if the step stays visible in compact mode.
    pub fn is_shown(self) -> bool {
        self.intersects(Self::BEFORE_CURRENT | Self::LAST_NOT_CURRENT)
    }

    /// True if the step should be decorated with a back-navigation icon.
    ///
    /// Every step that stays visible in compact mode is a way back.
    pub fn shows_back_icon(self) -> bool {
        self.contains(Self::COMPACT) && self.is_shown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_step_has_no_target() {
        assert!(Step::current("Details").is_current());
        assert!(!Step::link("Home", "/").is_current());
    }

    #[test]
    fn builder_sets_collapsible() {
        let s = Step::link("Docs", "/docs").with_collapsible(true);
        assert!(s.collapsible);
        assert_eq!(s.target.as_deref(), Some("/docs"));
    }

    #[test]
    fn back_icon_requires_compact_and_shown() {
        assert!(!CompactMarks::COMPACT.shows_back_icon());
        assert!(!CompactMarks::BEFORE_CURRENT.shows_back_icon());
        assert!((CompactMarks::COMPACT | CompactMarks::BEFORE_CURRENT).shows_back_icon());
        assert!((CompactMarks::COMPACT | CompactMarks::LAST_NOT_CURRENT).shows_back_icon());
    }
}
