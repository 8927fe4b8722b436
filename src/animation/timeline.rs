use crate::{
    animation::ease::Ease,
    foundation::error::{ScrollyteError, ScrollyteResult},
    foundation::math::{clamp01, lerp},
};

/// Property timeline: a function from normalized progress in `[0, 1]` to a property value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Timeline {
    /// Two-point tween.
    Tween(Tween),
    /// Piecewise timeline through explicit stops.
    Keyframes(Keyframes),
}

/// Eased interpolation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Value at progress 0.
    pub from: f64,
    /// Value at progress 1.
    pub to: f64,
    /// Easing applied over the whole tween.
    #[serde(default)]
    pub ease: Ease,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Keyframed timeline over progress space.
pub struct Keyframes {
    /// Stops sorted by `at`.
    pub stops: Vec<Stop>,
}

/// One keyframe stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop {
    /// Progress position in `[0, 1]`.
    pub at: f64,
    /// Value at `at`.
    pub value: f64,
    /// Ease applied toward the next stop.
    #[serde(default)]
    pub ease: Ease,
}

impl Timeline {
    /// Build a [`Timeline::Tween`].
    pub fn tween(from: f64, to: f64, ease: Ease) -> Self {
        Self::Tween(Tween { from, to, ease })
    }

    /// Build a timeline that ignores progress.
    pub fn constant(value: f64) -> Self {
        Self::tween(value, value, Ease::Linear)
    }

    /// Build a [`Timeline::Keyframes`] from `(at, value, ease)` triples.
    pub fn keyframes(stops: impl IntoIterator<Item = (f64, f64, Ease)>) -> Self {
        Self::Keyframes(Keyframes {
            stops: stops
                .into_iter()
                .map(|(at, value, ease)| Stop { at, value, ease })
                .collect(),
        })
    }

    /// Sample the timeline at progress `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Self::Tween(tw) => lerp(tw.from, tw.to, tw.ease.apply(t)),
            Self::Keyframes(kf) => kf.sample(t),
        }
    }

    /// Validate static invariants.
    pub fn validate(&self) -> ScrollyteResult<()> {
        match self {
            Self::Tween(tw) => {
                if !tw.from.is_finite() || !tw.to.is_finite() {
                    return Err(ScrollyteError::animation("tween values must be finite"));
                }
                Ok(())
            }
            Self::Keyframes(kf) => kf.validate(),
        }
    }
}

impl Keyframes {
    /// Validate stop ordering and ranges.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.stops.is_empty() {
            return Err(ScrollyteError::animation(
                "keyframes must have at least one stop",
            ));
        }
        if self
            .stops
            .iter()
            .any(|s| !s.at.is_finite() || !(0.0..=1.0).contains(&s.at) || !s.value.is_finite())
        {
            return Err(ScrollyteError::animation(
                "keyframe stops must be finite with `at` in [0, 1]",
            ));
        }
        if !self.stops.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollyteError::animation(
                "keyframe stops must be sorted by `at`",
            ));
        }
        Ok(())
    }

    fn sample(&self, t: f64) -> f64 {
        let Some(first) = self.stops.first() else {
            return 0.0;
        };
        let idx = self.stops.partition_point(|s| s.at <= t);
        if idx == 0 {
            return first.value;
        }
        if idx >= self.stops.len() {
            return self.stops[self.stops.len() - 1].value;
        }

        let a = &self.stops[idx - 1];
        let b = &self.stops[idx];
        let denom = b.at - a.at;
        if denom <= 0.0 {
            return a.value;
        }
        let local = (t - a.at) / denom;
        lerp(a.value, b.value, a.ease.apply(local))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
