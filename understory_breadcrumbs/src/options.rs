// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration: fit tolerance, indicator width, collapse policy, and
//! the compact-mode trigger.

use kurbo::Size;

/// How the width-fit loop picks ranges to hide once content overflows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollapsePolicy {
    /// Hide every collapse range as soon as content does not fit.
    #[default]
    AllRanges,
    /// Hide ranges left to right, stopping once the remaining width fits.
    ///
    /// Each hidden range is replaced by an indicator of
    /// [`LayoutOptions::indicator_width`], which is counted toward the fit.
    UntilFits,
}

/// Options for the wide-mode width-fit pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Slack added to the container width before deciding content overflows.
    ///
    /// Absorbs sub-pixel rounding in measured widths. Defaults to `1.0`.
    pub tolerance: f64,
    /// Width of one overflow indicator.
    ///
    /// Ignored by [`CollapsePolicy::AllRanges`] when deciding whether content
    /// fits; still used when arranging a row. Defaults to `0.0`.
    pub indicator_width: f64,
    /// Range selection policy.
    pub policy: CollapsePolicy,
    /// Never hide the first step, even if it is marked collapsible.
    pub pin_first: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            indicator_width: 0.0,
            policy: CollapsePolicy::AllRanges,
            pin_first: true,
        }
    }
}

impl LayoutOptions {
    /// Set the fit tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the indicator width.
    pub fn with_indicator_width(mut self, width: f64) -> Self {
        self.indicator_width = width;
        self
    }

    /// Set the collapse policy.
    pub fn with_policy(mut self, policy: CollapsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set whether the first step is pinned.
    pub fn with_pin_first(mut self, pin_first: bool) -> Self {
        self.pin_first = pin_first;
        self
    }

    /// Tolerance with non-finite or negative values replaced by zero.
    pub(crate) fn effective_tolerance(&self) -> f64 {
        sanitize(self.tolerance)
    }

    /// Indicator width with non-finite or negative values replaced by zero.
    pub(crate) fn effective_indicator_width(&self) -> f64 {
        sanitize(self.indicator_width)
    }
}

/// Decides whether a pass runs in compact mode.
///
/// Compact mode is selected when it is forced, or when the viewport is at or
/// under the breakpoint in *either* dimension.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompactTrigger {
    /// Force compact mode regardless of viewport size.
    pub forced: bool,
    /// Viewport breakpoint; `None` disables the responsive trigger.
    pub breakpoint: Option<Size>,
}

impl CompactTrigger {
    /// The default responsive breakpoint, 450 by 450.
    pub const DEFAULT_BREAKPOINT: Size = Size::new(450.0, 450.0);

    /// A trigger that never selects compact mode.
    pub const NEVER: Self = Self {
        forced: false,
        breakpoint: None,
    };

    /// A trigger that always selects compact mode.
    pub const ALWAYS: Self = Self {
        forced: true,
        breakpoint: None,
    };

    /// Set the forced flag.
    pub fn with_forced(mut self, forced: bool) -> Self {
        self.forced = forced;
        self
    }

    /// Set the breakpoint.
    pub fn with_breakpoint(mut self, breakpoint: Option<Size>) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// True if a pass for `viewport` should run in compact mode.
    pub fn is_compact(&self, viewport: Size) -> bool {
        self.forced
            || self
                .breakpoint
                .is_some_and(|bp| viewport.width <= bp.width || viewport.height <= bp.height)
    }
}

impl Default for CompactTrigger {
    fn default() -> Self {
        Self {
            forced: false,
            breakpoint: Some(Self::DEFAULT_BREAKPOINT),
        }
    }
}

/// Clamp a measurement into `[0, ∞)`, mapping NaN and infinities to zero.
pub(crate) fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = LayoutOptions::default();
        assert_eq!(o.tolerance, 1.0);
        assert_eq!(o.indicator_width, 0.0);
        assert_eq!(o.policy, CollapsePolicy::AllRanges);
        assert!(o.pin_first);
    }

    #[test]
    fn effective_values_clamp_bad_input() {
        let o = LayoutOptions::default()
            .with_tolerance(f64::NAN)
            .with_indicator_width(-4.0);
        assert_eq!(o.effective_tolerance(), 0.0);
        assert_eq!(o.effective_indicator_width(), 0.0);
    }

    #[test]
    fn breakpoint_matches_either_dimension() {
        let t = CompactTrigger::default();
        assert!(t.is_compact(Size::new(450.0, 900.0)));
        assert!(t.is_compact(Size::new(1200.0, 300.0)));
        assert!(!t.is_compact(Size::new(451.0, 451.0)));
    }

    #[test]
    fn forced_overrides_viewport() {
        let t = CompactTrigger::default().with_forced(true);
        assert!(t.is_compact(Size::new(1920.0, 1080.0)));
        assert!(CompactTrigger::ALWAYS.is_compact(Size::new(1920.0, 1080.0)));
    }

    #[test]
    fn never_ignores_small_viewports() {
        assert!(!CompactTrigger::NEVER.is_compact(Size::new(10.0, 10.0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_round_trip() {
        let opts = LayoutOptions::default()
            .with_tolerance(0.5)
            .with_indicator_width(18.0)
            .with_policy(CollapsePolicy::UntilFits)
            .with_pin_first(false);
        let json = serde_json::to_string(&opts).unwrap();
        let back: LayoutOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_option_fields_take_defaults() {
        let opts: LayoutOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, LayoutOptions::default());

        let opts: LayoutOptions = serde_json::from_str(r#"{"policy":"UntilFits"}"#).unwrap();
        assert_eq!(opts.policy, CollapsePolicy::UntilFits);
        assert_eq!(opts.tolerance, 1.0);
        assert!(opts.pin_first);
    }

    #[test]
    fn trigger_round_trip() {
        for trigger in [
            CompactTrigger::default(),
            CompactTrigger::NEVER,
            CompactTrigger::ALWAYS,
            CompactTrigger::default().with_breakpoint(Some(Size::new(320.0, 600.0))),
        ] {
            let json = serde_json::to_string(&trigger).unwrap();
            let back: CompactTrigger = serde_json::from_str(&json).unwrap();
            assert_eq!(back, trigger);
        }
    }

    #[test]
    fn forced_trigger_keeps_default_breakpoint() {
        let trigger: CompactTrigger = serde_json::from_str(r#"{"forced":true}"#).unwrap();
        assert!(trigger.forced);
        assert_eq!(trigger.breakpoint, Some(CompactTrigger::DEFAULT_BREAKPOINT));

        let trigger: CompactTrigger = serde_json::from_str(r#"{"breakpoint":null}"#).unwrap();
        assert_eq!(trigger, CompactTrigger::NEVER);
    }
}
