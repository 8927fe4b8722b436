use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::core::{ElementBox, Length, Size},
    foundation::error::{ScrollyteError, ScrollyteResult},
    region::marker::{Marker, MarkerCtx},
};

/// How a region's bindings follow scroll progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ScrubRepr", into = "ScrubRepr")]
pub enum Scrub {
    /// Played once forward/backward when the region bounds are crossed (see [`ToggleActions`]).
    Off,
    /// Values are driven directly and reversibly by scroll progress.
    #[default]
    Direct,
    /// Rendered progress trails scroll progress with exponential smoothing.
    Smoothed {
        /// Smoothing time constant in seconds.
        lag_secs: f64,
    },
}

/// JSON form: `true`, `false`, or a lag in seconds.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ScrubRepr {
    Flag(bool),
    Lag(f64),
}

impl TryFrom<ScrubRepr> for Scrub {
    type Error = ScrollyteError;

    fn try_from(repr: ScrubRepr) -> ScrollyteResult<Self> {
        match repr {
            ScrubRepr::Flag(true) => Ok(Self::Direct),
            ScrubRepr::Flag(false) => Ok(Self::Off),
            ScrubRepr::Lag(v) if v.is_finite() && v >= 0.0 => Ok(if v == 0.0 {
                Self::Direct
            } else {
                Self::Smoothed { lag_secs: v }
            }),
            ScrubRepr::Lag(v) => Err(ScrollyteError::validation(format!(
                "scrub lag must be finite and >= 0 (got {v})"
            ))),
        }
    }
}

impl From<Scrub> for ScrubRepr {
    fn from(s: Scrub) -> Self {
        match s {
            Scrub::Off => Self::Flag(false),
            Scrub::Direct => Self::Flag(true),
            Scrub::Smoothed { lag_secs } => Self::Lag(lag_secs),
        }
    }
}

/// Playback command fired by a boundary crossing of a non-scrub region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    /// Play forward from the current position.
    Play,
    /// Stop at the current position.
    Pause,
    /// Continue in the last direction.
    Resume,
    /// Play backward from the current position.
    Reverse,
    /// Jump to the start and play forward.
    Restart,
    /// Jump to the start and stop.
    Reset,
    /// Jump to the end and stop.
    Complete,
    /// Do nothing.
    #[default]
    None,
}

impl ToggleAction {
    fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Reverse => "reverse",
            Self::Restart => "restart",
            Self::Reset => "reset",
            Self::Complete => "complete",
            Self::None => "none",
        }
    }
}

impl FromStr for ToggleAction {
    type Err = ScrollyteError;

    fn from_str(s: &str) -> ScrollyteResult<Self> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => {
                return Err(ScrollyteError::validation(format!(
                    "unknown toggle action `{other}`"
                )));
            }
        })
    }
}

/// Actions for the four boundary crossings, in the order
/// `on_enter on_leave on_enter_back on_leave_back`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToggleActions {
    /// Scrolling forward past the start.
    pub on_enter: ToggleAction,
    /// Scrolling forward past the end.
    pub on_leave: ToggleAction,
    /// Scrolling backward past the end.
    pub on_enter_back: ToggleAction,
    /// Scrolling backward past the start.
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.name(),
            self.on_leave.name(),
            self.on_enter_back.name(),
            self.on_leave_back.name()
        )
    }
}

impl FromStr for ToggleActions {
    type Err = ScrollyteError;

    fn from_str(s: &str) -> ScrollyteResult<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [enter, leave, enter_back, leave_back] = parts.as_slice() else {
            return Err(ScrollyteError::validation(format!(
                "toggle actions `{s}` must name exactly four actions"
            )));
        };
        Ok(Self {
            on_enter: enter.parse()?,
            on_leave: leave.parse()?,
            on_enter_back: enter_back.parse()?,
            on_leave_back: leave_back.parse()?,
        })
    }
}

impl TryFrom<String> for ToggleActions {
    type Error = ScrollyteError;

    fn try_from(s: String) -> ScrollyteResult<Self> {
        s.parse()
    }
}

impl From<ToggleActions> for String {
    fn from(t: ToggleActions) -> Self {
        t.to_string()
    }
}

fn default_pin_spacing() -> bool {
    true
}

fn default_duration_secs() -> f64 {
    1.0
}

/// Declarative region definition supplied by the page layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionDef {
    /// Human-readable name used in logs and errors.
    pub name: String,
    /// Where the region starts.
    pub start: Marker,
    /// Where the region ends.
    pub end: Marker,
    /// Trigger element box used by element-relative markers.
    #[serde(default)]
    pub trigger: Option<ElementBox>,
    /// Hold the content fixed in the viewport while progress advances.
    #[serde(default)]
    pub pinned: bool,
    /// Pad the document by the pin span so content after the pin is pushed down.
    #[serde(default = "default_pin_spacing")]
    pub pin_spacing: bool,
    /// Scrub behavior.
    #[serde(default)]
    pub scrub: Scrub,
    /// Playback actions for [`Scrub::Off`] regions.
    #[serde(default)]
    pub toggle_actions: ToggleActions,
    /// Distance before `start` reported as [`crate::RegionPhase::Entering`].
    #[serde(default)]
    pub enter_margin: Length,
    /// Distance after `end` reported as [`crate::RegionPhase::Leaving`].
    #[serde(default)]
    pub leave_margin: Length,
    /// Render the progress-0 state before the region is reached.
    #[serde(default)]
    pub immediate_render: bool,
    /// Playback length of [`Scrub::Off`] regions.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
}

/// Region bounds in native scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedRange {
    /// Inclusive start offset.
    pub start: f64,
    /// Inclusive end offset, strictly greater than `start`.
    pub end: f64,
}

impl ResolvedRange {
    /// Distance between start and end.
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `offset` lies in `[start, end]`.
    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Normalized progress of `offset`, clamped to `[0, 1]`.
    pub fn progress(self, offset: f64) -> f64 {
        crate::foundation::math::progress(offset, self.start, self.end)
    }
}

impl RegionDef {
    /// Region over `[start, end]` with default behavior (scrubbed, not pinned).
    pub fn new(name: impl Into<String>, start: impl Into<Marker>, end: impl Into<Marker>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
            trigger: None,
            pinned: false,
            pin_spacing: true,
            scrub: Scrub::Direct,
            toggle_actions: ToggleActions::default(),
            enter_margin: Length::ZERO,
            leave_margin: Length::ZERO,
            immediate_render: false,
            duration_secs: default_duration_secs(),
        }
    }

    /// Attach the trigger element box.
    pub fn with_trigger(mut self, trigger: ElementBox) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Set pinning and pin spacing.
    pub fn with_pin(mut self, pinned: bool, pin_spacing: bool) -> Self {
        self.pinned = pinned;
        self.pin_spacing = pin_spacing;
        self
    }

    /// Set scrub behavior.
    pub fn with_scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }

    /// Set toggle actions (implies nothing about scrub; pair with [`Scrub::Off`]).
    pub fn with_toggle_actions(mut self, actions: ToggleActions) -> Self {
        self.toggle_actions = actions;
        self
    }

    /// Set transition margins.
    pub fn with_margins(mut self, enter: Length, leave: Length) -> Self {
        self.enter_margin = enter;
        self.leave_margin = leave;
        self
    }

    /// Render the initial state before the region is reached.
    pub fn with_immediate_render(mut self, on: bool) -> Self {
        self.immediate_render = on;
        self
    }

    /// Playback length for non-scrub regions.
    pub fn with_duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Validate static invariants that don't depend on layout.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollyteError::validation("region name must be non-empty"));
        }
        if let Some(trigger) = self.trigger {
            trigger.validate()?;
        }
        for (what, m) in [("enter_margin", self.enter_margin), ("leave_margin", self.leave_margin)]
        {
            if !m.is_finite() || m.resolve(1.0) < 0.0 {
                return Err(ScrollyteError::validation(format!(
                    "region `{}` {what} must be finite and >= 0",
                    self.name
                )));
            }
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(ScrollyteError::validation(format!(
                "region `{}` duration_secs must be finite and > 0",
                self.name
            )));
        }
        if let Scrub::Smoothed { lag_secs } = self.scrub
            && (!lag_secs.is_finite() || lag_secs < 0.0)
        {
            return Err(ScrollyteError::validation(format!(
                "region `{}` scrub lag must be finite and >= 0",
                self.name
            )));
        }
        if self.start.is_relative() {
            return Err(ScrollyteError::validation(format!(
                "region `{}` start marker can't be relative",
                self.name
            )));
        }
        if self.trigger.is_none() && (self.start.needs_element() || self.end.needs_element()) {
            return Err(ScrollyteError::validation(format!(
                "region `{}` uses trigger markers but has no trigger element",
                self.name
            )));
        }
        Ok(())
    }

    /// Resolve markers to native scroll offsets.
    ///
    /// Fails with [`ScrollyteError::InvalidRange`] for non-finite, empty, or reversed
    /// intervals.
    pub(crate) fn resolve(&self, viewport: Size, pin_padding: f64) -> ScrollyteResult<ResolvedRange> {
        let ctx = MarkerCtx {
            element: self
                .trigger
                .map(|el| ElementBox::new(el.top + pin_padding, el.height)),
            viewport_height: viewport.height,
            viewport_width: viewport.width,
        };
        let start = self.start.resolve_start(ctx)?;
        let end = self.end.resolve_end(start, ctx)?;
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollyteError::invalid_range(format!(
                "region `{}` bounds must be finite (start={start}, end={end})",
                self.name
            )));
        }
        if start >= end {
            return Err(ScrollyteError::invalid_range(format!(
                "region `{}` needs start < end (start={start}, end={end})",
                self.name
            )));
        }
        Ok(ResolvedRange { start, end })
    }

    /// Return `true` when a viewport resize can move this region's bounds.
    pub(crate) fn depends_on_viewport(&self) -> bool {
        self.start.depends_on_viewport() || self.end.depends_on_viewport()
    }

    /// Resolved transition margins in pixels.
    pub(crate) fn margins_px(&self, viewport_height: f64) -> (f64, f64) {
        (
            self.enter_margin.resolve(viewport_height),
            self.leave_margin.resolve(viewport_height),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/region/def.rs"]
mod tests;
