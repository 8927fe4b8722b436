use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{ElementBox, Length};
use crate::foundation::error::{ScrollyteError, ScrollyteResult};

/// A region bound before layout resolution.
///
/// Textual forms:
///
/// - `"1200"`: absolute native scroll offset (numbers are accepted directly too)
/// - `"top 80%"`: element anchor meets viewport anchor (`top`, `center`, `bottom`, `NN%`, `NNpx`)
/// - `"+=100%"` / `"-=40px"`: relative to the resolved start; only valid as an end marker
/// - `"+=100vw"`: relative to the resolved start by a share of the viewport width
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "MarkerRepr", into = "MarkerRepr")]
pub enum Marker {
    /// Absolute scroll offset.
    Offset(f64),
    /// Scroll offset at which `element` (measured on the trigger element) meets `viewport`
    /// (measured on the viewport height).
    Trigger {
        /// Anchor on the trigger element.
        element: Length,
        /// Anchor on the viewport.
        viewport: Length,
    },
    /// Distance from the resolved start. Percentages refer to the viewport height.
    Relative(Length),
    /// Distance from the resolved start as a percentage of the viewport width, for horizontal
    /// travel that must track the width across resizes.
    RelativeWidth(f64),
}

/// Inputs markers resolve against.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MarkerCtx {
    /// Trigger element box, already shifted by preceding pin spacing.
    pub(crate) element: Option<ElementBox>,
    pub(crate) viewport_height: f64,
    pub(crate) viewport_width: f64,
}

impl Marker {
    /// `top`/`center`/`bottom` keyword or explicit length.
    fn parse_anchor(s: &str) -> ScrollyteResult<Length> {
        match s {
            "top" | "left" => Ok(Length::Percent(0.0)),
            "center" => Ok(Length::Percent(50.0)),
            "bottom" | "right" => Ok(Length::Percent(100.0)),
            other => other.parse(),
        }
    }

    fn fmt_anchor(len: Length, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match len {
            Length::Percent(p) if p == 0.0 => f.write_str("top"),
            Length::Percent(p) if p == 50.0 => f.write_str("center"),
            Length::Percent(p) if p == 100.0 => f.write_str("bottom"),
            other => write!(f, "{other}"),
        }
    }

    /// Return `true` for markers that need a trigger element to resolve.
    pub fn needs_element(self) -> bool {
        matches!(self, Self::Trigger { .. })
    }

    /// Return `true` when the marker is relative to the start rather than an offset.
    pub fn is_relative(self) -> bool {
        matches!(self, Self::Relative(_) | Self::RelativeWidth(_))
    }

    /// Return `true` for markers whose resolution depends on the viewport size.
    pub fn depends_on_viewport(self) -> bool {
        match self {
            Self::Offset(_) => false,
            Self::Trigger { viewport, .. } => matches!(viewport, Length::Percent(p) if p != 0.0),
            Self::Relative(len) => matches!(len, Length::Percent(_)),
            Self::RelativeWidth(_) => true,
        }
    }

    fn resolve_absolute(self, ctx: MarkerCtx, role: &str) -> ScrollyteResult<f64> {
        match self {
            Self::Offset(v) => Ok(v),
            Self::Trigger { element, viewport } => {
                let el = ctx.element.ok_or_else(|| {
                    ScrollyteError::validation(format!(
                        "{role} marker `{self}` needs a trigger element box"
                    ))
                })?;
                Ok(el.top + element.resolve(el.height) - viewport.resolve(ctx.viewport_height))
            }
            Self::Relative(_) | Self::RelativeWidth(_) => Err(ScrollyteError::validation(format!(
                "{role} marker `{self}` is relative but there is nothing to be relative to"
            ))),
        }
    }

    pub(crate) fn resolve_start(self, ctx: MarkerCtx) -> ScrollyteResult<f64> {
        self.resolve_absolute(ctx, "start")
    }

    pub(crate) fn resolve_end(self, start: f64, ctx: MarkerCtx) -> ScrollyteResult<f64> {
        match self {
            Self::Relative(len) => Ok(start + len.resolve(ctx.viewport_height)),
            Self::RelativeWidth(p) => Ok(start + p / 100.0 * ctx.viewport_width),
            other => other.resolve_absolute(ctx, "end"),
        }
    }
}

impl From<f64> for Marker {
    fn from(v: f64) -> Self {
        Self::Offset(v)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Offset(v) => write!(f, "{v}"),
            Self::Trigger { element, viewport } => {
                Self::fmt_anchor(element, f)?;
                f.write_str(" ")?;
                Self::fmt_anchor(viewport, f)
            }
            Self::Relative(Length::Px(v)) if v < 0.0 => write!(f, "-={}px", -v),
            Self::Relative(Length::Percent(p)) if p < 0.0 => write!(f, "-={}%", -p),
            Self::Relative(len) => write!(f, "+={len}"),
            Self::RelativeWidth(p) if p < 0.0 => write!(f, "-={}vw", -p),
            Self::RelativeWidth(p) => write!(f, "+={p}vw"),
        }
    }
}

impl FromStr for Marker {
    type Err = ScrollyteError;

    fn from_str(s: &str) -> ScrollyteResult<Self> {
        let s = s.trim();
        let relative = match (s.strip_prefix("+="), s.strip_prefix("-=")) {
            (Some(rest), _) => Some((1.0, rest)),
            (_, Some(rest)) => Some((-1.0, rest)),
            _ => None,
        };
        if let Some((sign, rest)) = relative {
            if let Some(num) = rest.trim().strip_suffix("vw") {
                return match num.trim().parse::<f64>() {
                    Ok(p) if p.is_finite() => Ok(Self::RelativeWidth(sign * p)),
                    _ => Err(ScrollyteError::validation(format!(
                        "marker `{s}` has a malformed viewport width share"
                    ))),
                };
            }
            return Ok(Self::Relative(match rest.parse()? {
                Length::Px(v) => Length::Px(sign * v),
                Length::Percent(p) => Length::Percent(sign * p),
            }));
        }

        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Self::Trigger {
                element: Self::parse_anchor(el)?,
                viewport: Self::parse_anchor(vp)?,
            }),
            (Some(single), None, None) => match single.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Self::Offset(v)),
                _ => Err(ScrollyteError::validation(format!(
                    "marker `{s}` must be an offset, `<element> <viewport>` or `+=<length>`"
                ))),
            },
            _ => Err(ScrollyteError::validation(format!(
                "marker `{s}` must be an offset, `<element> <viewport>` or `+=<length>`"
            ))),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum MarkerRepr {
    Offset(f64),
    Text(String),
}

impl TryFrom<MarkerRepr> for Marker {
    type Error = ScrollyteError;

    fn try_from(repr: MarkerRepr) -> ScrollyteResult<Self> {
        match repr {
            MarkerRepr::Offset(v) => Ok(Self::Offset(v)),
            MarkerRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Marker> for MarkerRepr {
    fn from(m: Marker) -> Self {
        match m {
            Marker::Offset(v) => Self::Offset(v),
            other => Self::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/region/marker.rs"]
mod tests;
