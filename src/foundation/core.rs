use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ScrollyteError, ScrollyteResult};

pub use kurbo::{Size, Vec2};

/// Smallest viewport extent accepted at runtime, in pixels.
pub const MIN_VIEWPORT_PX: f64 = 1.0;

/// One scroll observation: where the document is scrolled to and how large the viewport is.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    /// Native vertical scroll offset in document pixels.
    pub offset: f64,
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Scroll velocity in pixels per second (signed). Only used for snap decisions.
    #[serde(default)]
    pub velocity: f64,
}

impl ScrollSample {
    /// Sample at rest (zero velocity).
    pub fn new(offset: f64, viewport: Size) -> Self {
        Self {
            offset,
            viewport,
            velocity: 0.0,
        }
    }

    /// Same sample with a velocity attached.
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Clamp runtime input into the domain the engine works in.
    ///
    /// Non-finite offsets fall back to `last_offset`, negative offsets become 0, and viewport
    /// dimensions are forced to finite values of at least [`MIN_VIEWPORT_PX`].
    pub fn sanitized(self, last_offset: f64) -> Self {
        fn extent(v: f64) -> f64 {
            if v.is_finite() {
                v.max(MIN_VIEWPORT_PX)
            } else {
                MIN_VIEWPORT_PX
            }
        }

        let offset = if self.offset.is_finite() {
            self.offset
        } else if last_offset.is_finite() {
            last_offset
        } else {
            0.0
        };
        let velocity = if self.velocity.is_finite() {
            self.velocity
        } else {
            0.0
        };
        Self {
            offset: offset.max(0.0),
            viewport: Size::new(extent(self.viewport.width), extent(self.viewport.height)),
            velocity,
        }
    }
}

impl Default for ScrollSample {
    fn default() -> Self {
        Self::new(0.0, Size::new(1280.0, 800.0))
    }
}

/// A distance that is either absolute or relative to some extent (element or viewport).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LengthRepr", into = "LengthRepr")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the reference extent (`80.0` means 80%).
    Percent(f64),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolve against `extent` pixels.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => p / 100.0 * extent,
        }
    }

    /// Return `true` when the stored number is finite.
    pub fn is_finite(self) -> bool {
        match self {
            Self::Px(v) | Self::Percent(v) => v.is_finite(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl FromStr for Length {
    type Err = ScrollyteError;

    fn from_str(s: &str) -> ScrollyteResult<Self> {
        let s = s.trim();
        let parse = |num: &str| {
            num.trim().parse::<f64>().map_err(|_| {
                ScrollyteError::validation(format!("`{s}` is not a length (expected NN%, NNpx or NN)"))
            })
        };
        let len = if let Some(num) = s.strip_suffix('%') {
            Self::Percent(parse(num)?)
        } else if let Some(num) = s.strip_suffix("px") {
            Self::Px(parse(num)?)
        } else {
            Self::Px(parse(s)?)
        };
        if !len.is_finite() {
            return Err(ScrollyteError::validation(format!("length `{s}` must be finite")));
        }
        Ok(len)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Px(f64),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = ScrollyteError;

    fn try_from(repr: LengthRepr) -> ScrollyteResult<Self> {
        match repr {
            LengthRepr::Px(v) if v.is_finite() => Ok(Self::Px(v)),
            LengthRepr::Px(_) => Err(ScrollyteError::validation("length must be finite")),
            LengthRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Length> for LengthRepr {
    fn from(len: Length) -> Self {
        match len {
            Length::Px(v) => Self::Px(v),
            Length::Percent(_) => Self::Text(len.to_string()),
        }
    }
}

/// Layout box of a trigger element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    /// Distance from the document top to the element's top edge, in pixels.
    pub top: f64,
    /// Element height in pixels.
    pub height: f64,
}

impl ElementBox {
    /// Create an element box.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Validate finite, non-negative geometry.
    pub fn validate(self) -> ScrollyteResult<()> {
        if !self.top.is_finite() || !self.height.is_finite() {
            return Err(ScrollyteError::validation("element box must be finite"));
        }
        if self.height < 0.0 {
            return Err(ScrollyteError::validation("element box height must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
