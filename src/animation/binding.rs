use std::fmt;

use crate::{
    animation::{ease::Ease, timeline::Timeline},
    foundation::error::{ScrollyteError, ScrollyteResult},
    foundation::ids::{TargetId, TargetTable},
    foundation::math::window_progress,
};

/// Visual property a binding drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Horizontal translation in pixels.
    X,
    /// Vertical translation in pixels.
    Y,
    /// Horizontal translation in percent of the target's own width.
    XPercent,
    /// Rotation in degrees.
    Rotation,
    /// Radius of a centered circular clip mask, in percent.
    ClipRadius,
    /// SVG stroke dash offset.
    StrokeDashOffset,
    /// Brightness filter factor.
    Brightness,
}

impl Property {
    /// Stable property name, as written in page definitions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Scale => "scale",
            Self::X => "x",
            Self::Y => "y",
            Self::XPercent => "xPercent",
            Self::Rotation => "rotation",
            Self::ClipRadius => "clipRadius",
            Self::StrokeDashOffset => "strokeDashOffset",
            Self::Brightness => "brightness",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-interval of a region's progress that a binding plays over.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// Region progress at which the binding starts.
    pub start: f64,
    /// Region progress at which the binding completes.
    pub end: f64,
}

impl Window {
    /// The whole region.
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    /// Validate `0 <= start < end <= 1`.
    pub fn validate(self) -> ScrollyteResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ScrollyteError::animation("binding window must be finite"));
        }
        if !(0.0 <= self.start && self.start < self.end && self.end <= 1.0) {
            return Err(ScrollyteError::animation(format!(
                "binding window [{}, {}] must satisfy 0 <= start < end <= 1",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Map region progress into window-local progress.
    pub fn local(self, p: f64) -> f64 {
        window_progress(p, self.start, self.end)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// Declarative binding as supplied by the page layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BindingDef {
    /// Target element name.
    pub target: String,
    /// Property driven by the timeline.
    pub property: Property,
    /// Progress-to-value function.
    pub timeline: Timeline,
    /// Portion of the region progress this binding plays over.
    #[serde(default)]
    pub window: Window,
}

impl BindingDef {
    /// Build a binding over the full region.
    pub fn new(target: impl Into<String>, property: Property, timeline: Timeline) -> Self {
        Self {
            target: target.into(),
            property,
            timeline,
            window: Window::FULL,
        }
    }

    /// Shorthand for a tween binding.
    pub fn tween(
        target: impl Into<String>,
        property: Property,
        from: f64,
        to: f64,
        ease: Ease,
    ) -> Self {
        Self::new(target, property, Timeline::tween(from, to, ease))
    }

    /// Restrict the binding to a sub-window of region progress.
    pub fn with_window(mut self, start: f64, end: f64) -> Self {
        self.window = Window { start, end };
        self
    }

    /// Validate target, timeline and window.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.target.trim().is_empty() {
            return Err(ScrollyteError::validation("binding target must be non-empty"));
        }
        self.timeline.validate()?;
        self.window.validate()
    }

    pub(crate) fn resolve(self, targets: &mut TargetTable) -> Binding {
        Binding {
            target: targets.intern(&self.target),
            property: self.property,
            timeline: self.timeline,
            window: self.window,
        }
    }
}

/// Binding with its target resolved to an arena handle.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    /// Resolved render target.
    pub target: TargetId,
    /// Property driven by the timeline.
    pub property: Property,
    /// Progress-to-value function.
    pub timeline: Timeline,
    /// Portion of the region progress this binding plays over.
    pub window: Window,
}

impl Binding {
    /// Evaluate at region progress `p`.
    pub fn value_at(&self, p: f64) -> f64 {
        self.timeline.sample(self.window.local(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/binding.rs"]
mod tests;
