// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: one recompute entry point driven by external triggers.
//!
//! ## Pass lifecycle
//!
//! Every call to [`LayoutEngine::recompute`] walks
//! `Idle → Measuring → {Wide | Compact} → Applied → Idle`.
//! The compact flag passed in by the caller selects the middle phase. A pass
//! recomputes everything from the surface, so a pass superseded by a newer
//! trigger leaves nothing behind to unwind.
//!
//! ## Wiring
//!
//! Hook container resize, step-sequence mutation, and compact-trigger changes
//! in your toolkit to `recompute`, passing the matching [`Trigger`].

use kurbo::Size;

use crate::options::{CompactTrigger, LayoutOptions};
use crate::plan::{LayoutPlan, plan_compact, plan_wide};
use crate::row::RowModel;
use crate::surface::{LayoutSurface, apply_plan, measure, reset_surface};
use crate::types::Step;

/// Why a pass runs. Every trigger causes the same full recompute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The container was resized.
    Resize,
    /// Steps were added, removed, reordered, or edited.
    ContentChanged,
    /// The compact-mode trigger flipped.
    CompactChanged,
}

/// Phase of the current (or last) layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PassPhase {
    /// No pass running.
    #[default]
    Idle,
    /// Reading widths from the surface.
    Measuring,
    /// Running the width-fit loop.
    Wide,
    /// Running the compact policy.
    Compact,
    /// Plan pushed onto the surface.
    Applied,
}

/// Breadcrumb layout engine.
///
/// Holds only configuration and the phase of the pass in flight. Steps and the
/// surface belong to the caller and are borrowed for a single pass.
///
/// ```
/// use understory_breadcrumbs::{LayoutEngine, RowModel, Step, Trigger};
///
/// let steps = vec![
///     Step::link("Home", "/"),
///     Step::link("Category", "/category").with_collapsible(true),
///     Step::link("Product", "/product").with_collapsible(true),
///     Step::current("Details"),
/// ];
/// let mut row = RowModel::new(steps.clone())
///     .with_widths(&[60.0, 80.0, 80.0, 60.0])
///     .with_container_width(200.0);
///
/// let mut engine = LayoutEngine::new();
/// let plan = engine.recompute(&steps, &mut row, false, Trigger::Resize);
/// assert_eq!(plan.groups().len(), 1);
/// assert_eq!(row.indicator_count(), 1);
///
/// row.set_container_width(400.0);
/// let plan = engine.recompute(&steps, &mut row, false, Trigger::Resize);
/// assert!(plan.groups().is_empty());
/// assert_eq!(row.indicator_count(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
    compact_trigger: CompactTrigger,
    phase: PassPhase,
}

impl LayoutEngine {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Set the compact trigger used by [`LayoutEngine::recompute_for_viewport`].
    pub fn with_compact_trigger(mut self, trigger: CompactTrigger) -> Self {
        self.compact_trigger = trigger;
        self
    }

    /// Current options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Replace the options. Takes effect on the next pass.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    /// Current compact trigger.
    pub fn compact_trigger(&self) -> &CompactTrigger {
        &self.compact_trigger
    }

    /// Replace the compact trigger. Takes effect on the next pass.
    pub fn set_compact_trigger(&mut self, trigger: CompactTrigger) {
        self.compact_trigger = trigger;
    }

    /// Phase of the pass in flight; [`PassPhase::Idle`] between passes.
    pub fn phase(&self) -> PassPhase {
        self.phase
    }

    fn enter(&mut self, phase: PassPhase) {
        log::trace!("breadcrumb pass: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// Compute a plan from the surface's current measurements without applying it.
    ///
    /// Unlike [`LayoutEngine::recompute`], this does not show hidden steps
    /// before measuring, so the surface must report natural widths for them.
    pub fn plan<S: LayoutSurface + ?Sized>(
        &mut self,
        steps: &[Step],
        surface: &S,
        compact: bool,
    ) -> LayoutPlan {
        let plan = self.compute(steps, surface, compact);
        self.enter(PassPhase::Idle);
        plan
    }

    fn compute<S: LayoutSurface + ?Sized>(
        &mut self,
        steps: &[Step],
        surface: &S,
        compact: bool,
    ) -> LayoutPlan {
        self.enter(PassPhase::Measuring);
        if let Some(count) = surface.step_count() {
            debug_assert_eq!(
                count,
                steps.len(),
                "surface step count does not match the step sequence"
            );
        }
        let widths = measure(surface, steps.len());
        let container_width = surface.container_width();
        if compact {
            self.enter(PassPhase::Compact);
            plan_compact(steps)
        } else {
            self.enter(PassPhase::Wide);
            plan_wide(steps, &widths, container_width, &self.options)
        }
    }

    /// Run one full layout pass and apply it to `surface`.
    ///
    /// Every step is shown again and stale indicators are removed before
    /// measuring, so steps hidden by the previous pass are measured at their
    /// natural width. `compact` selects compact mode for this pass. The
    /// returned plan already matches what the surface shows.
    pub fn recompute<S: LayoutSurface + ?Sized>(
        &mut self,
        steps: &[Step],
        surface: &mut S,
        compact: bool,
        trigger: Trigger,
    ) -> LayoutPlan {
        log::debug!(
            "breadcrumb pass on {trigger:?}: {} step(s), compact={compact}",
            steps.len()
        );
        reset_surface(surface, steps.len());
        let plan = self.compute(steps, surface, compact);
        apply_plan(&plan, surface);
        self.enter(PassPhase::Applied);
        self.enter(PassPhase::Idle);
        plan
    }

    /// Run one pass, choosing the mode from the stored [`CompactTrigger`].
    pub fn recompute_for_viewport<S: LayoutSurface + ?Sized>(
        &mut self,
        steps: &[Step],
        surface: &mut S,
        viewport: Size,
        trigger: Trigger,
    ) -> LayoutPlan {
        let compact = self.compact_trigger.is_compact(viewport);
        self.recompute(steps, surface, compact, trigger)
    }

    /// Run one pass over a [`RowModel`], using the steps it holds.
    pub fn recompute_row(
        &mut self,
        row: &mut RowModel,
        compact: bool,
        trigger: Trigger,
    ) -> LayoutPlan {
        let steps = row.steps().to_vec();
        self.recompute(&steps, row, compact, trigger)
    }
}
