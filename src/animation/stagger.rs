use crate::{
    animation::binding::{BindingDef, Property, Window},
    animation::ease::Ease,
    animation::timeline::Timeline,
    foundation::core::Vec2,
    foundation::error::{ScrollyteError, ScrollyteResult},
};

/// Split region progress into `count` equally long, overlapping windows.
///
/// Each item plays for one unit and starts `each` units after the previous one; the whole
/// sequence is then normalized onto `[0, 1]`. `each = 0` plays everything together.
pub fn stagger_windows(count: usize, each: f64) -> Vec<Window> {
    let each = if each.is_finite() { each.max(0.0) } else { 0.0 };
    let total = 1.0 + (count.saturating_sub(1) as f64) * each;
    (0..count)
        .map(|i| {
            let start = (i as f64) * each;
            Window {
                start: start / total,
                end: ((start + 1.0) / total).min(1.0),
            }
        })
        .collect()
}

/// Entrance offset that alternates sides: even items come from `-magnitude`, odd items from
/// `+magnitude`.
pub fn alternating(index: usize, magnitude: f64) -> f64 {
    if index % 2 == 0 { -magnitude } else { magnitude }
}

/// Exploded-view offset for item `index`: a point at angle `index` radians on a circle of
/// `radius`.
pub fn radial_offset(index: usize, radius: f64) -> Vec2 {
    Vec2::from_angle(index as f64) * radius
}

/// Axis selector for radial staggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Use the horizontal component.
    X,
    /// Use the vertical component.
    Y,
}

/// How per-item start values are derived.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StaggerPattern {
    /// Every item tweens `from -> to`.
    Uniform {
        /// Start value.
        from: f64,
        /// End value.
        to: f64,
    },
    /// Items enter from alternating sides and settle at 0.
    Alternating {
        /// Distance of the entrance offset.
        magnitude: f64,
    },
    /// Items start on a circle and settle at 0.
    Radial {
        /// Circle radius.
        radius: f64,
        /// Which component of the circle offset this binding drives.
        axis: Axis,
    },
}

impl StaggerPattern {
    fn endpoints(self, index: usize) -> (f64, f64) {
        match self {
            Self::Uniform { from, to } => (from, to),
            Self::Alternating { magnitude } => (alternating(index, magnitude), 0.0),
            Self::Radial { radius, axis } => {
                let v = radial_offset(index, radius);
                match axis {
                    Axis::X => (v.x, 0.0),
                    Axis::Y => (v.y, 0.0),
                }
            }
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Uniform { from, to } => from.is_finite() && to.is_finite(),
            Self::Alternating { magnitude } => magnitude.is_finite(),
            Self::Radial { radius, .. } => radius.is_finite(),
        }
    }
}

/// One animation description applied to a list of targets with staggered timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerDef {
    /// Targets in stagger order.
    pub targets: Vec<String>,
    /// Property driven on every target.
    pub property: Property,
    /// Start/end value pattern.
    pub pattern: StaggerPattern,
    /// Delay between consecutive items, in item durations.
    #[serde(default)]
    pub each: f64,
    /// Ease applied to every item.
    #[serde(default)]
    pub ease: Ease,
}

impl StaggerDef {
    /// Expand into one binding per target.
    pub fn expand(&self) -> ScrollyteResult<Vec<BindingDef>> {
        if self.targets.is_empty() {
            return Err(ScrollyteError::validation("stagger needs at least one target"));
        }
        if !self.each.is_finite() || self.each < 0.0 {
            return Err(ScrollyteError::validation("stagger `each` must be finite and >= 0"));
        }
        if !self.pattern.is_finite() {
            return Err(ScrollyteError::animation("stagger pattern values must be finite"));
        }

        let windows = stagger_windows(self.targets.len(), self.each);
        Ok(self
            .targets
            .iter()
            .zip(windows)
            .enumerate()
            .map(|(i, (target, window))| {
                let (from, to) = self.pattern.endpoints(i);
                BindingDef {
                    target: target.clone(),
                    property: self.property,
                    timeline: Timeline::tween(from, to, self.ease),
                    window,
                }
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
