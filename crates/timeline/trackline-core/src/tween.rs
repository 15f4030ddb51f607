//! Tweening helpers:
//! - linear / quadratic (ease-in) interpolation over a time phase
//! - fade (quadratic ease-in, hold, quadratic ease-out) selecting one phase
//!
//! All functions are pure and return the value for the given time. Progress
//! is not clamped, so sampling outside a phase extrapolates along the curve.
//!
//! A zero-length phase has no progress; it snaps to `value_end` once
//! `current >= phase_start` and holds `value_start` before that.

use serde::{Deserialize, Serialize};

/// Curve applied to phase progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    #[default]
    Linear,
    /// `t^2`: leaves `value_start` with zero rate.
    Quadratic,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Quadratic => t * t,
        }
    }
}

/// Exact at both ends and symmetric at the midpoint.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[inline]
fn sample(
    easing: Easing,
    current: f64,
    phase_start: f64,
    value_start: f64,
    phase_span: f64,
    value_end: f64,
) -> f64 {
    let t = (current - phase_start) / phase_span;
    if !t.is_finite() {
        return if current >= phase_start {
            value_end
        } else {
            value_start
        };
    }
    lerp(value_start, value_end, easing.apply(t))
}

/// Linear interpolation from `value_start` at `phase_start` to `value_end`
/// at `phase_start + phase_span`.
#[inline]
pub fn linear(
    current: f64,
    phase_start: f64,
    value_start: f64,
    phase_span: f64,
    value_end: f64,
) -> f64 {
    sample(
        Easing::Linear,
        current,
        phase_start,
        value_start,
        phase_span,
        value_end,
    )
}

/// Quadratic ease-in over the same phase as [`linear`].
#[inline]
pub fn quadratic(
    current: f64,
    phase_start: f64,
    value_start: f64,
    phase_span: f64,
    value_end: f64,
) -> f64 {
    sample(
        Easing::Quadratic,
        current,
        phase_start,
        value_start,
        phase_span,
        value_end,
    )
}

/// Fade in from 0 to `peak` over `ramp`, hold, then fade back to 0 over the
/// final `ramp` of `total`.
///
/// `current` is clamped to `[0, total]`. A ramp longer than half of `total`
/// is shortened to `total / 2` (no hold), and a negative ramp counts as 0.
pub fn fade(current: f64, total: f64, ramp: f64, peak: f64) -> f64 {
    let total = total.max(0.0);
    let mut ramp = ramp.max(0.0);
    if ramp * 2.0 > total {
        log::debug!("fade: ramp {ramp} exceeds half of {total}; clamping");
        ramp = total / 2.0;
    }
    let current = current.clamp(0.0, total);
    let out_start = total - ramp;

    if current < ramp {
        quadratic(current, 0.0, 0.0, ramp, peak)
    } else if current < out_start {
        peak
    } else {
        quadratic(current, out_start, peak, ramp, 0.0)
    }
}

/// Serializable tween over one phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub phase_start: f64,
    pub value_start: f64,
    pub phase_span: f64,
    pub value_end: f64,
}

impl Tween {
    pub fn linear(phase_start: f64, value_start: f64, phase_span: f64, value_end: f64) -> Self {
        Self {
            easing: Easing::Linear,
            phase_start,
            value_start,
            phase_span,
            value_end,
        }
    }

    pub fn quadratic(phase_start: f64, value_start: f64, phase_span: f64, value_end: f64) -> Self {
        Self {
            easing: Easing::Quadratic,
            ..Self::linear(phase_start, value_start, phase_span, value_end)
        }
    }

    #[inline]
    pub fn sample(&self, current: f64) -> f64 {
        sample(
            self.easing,
            current,
            self.phase_start,
            self.value_start,
            self.phase_span,
            self.value_end,
        )
    }
}

/// Serializable [`fade`]; the total comes from the track duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    pub ramp: f64,
    pub peak: f64,
}

impl Fade {
    pub fn new(ramp: f64, peak: f64) -> Self {
        Self { ramp, peak }
    }

    #[inline]
    pub fn sample(&self, current: f64, total: f64) -> f64 {
        fade(current, total, self.ramp, self.peak)
    }
}
