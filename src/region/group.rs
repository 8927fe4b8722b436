use crate::{
    foundation::core::{ElementBox, Length},
    foundation::error::{ScrollyteError, ScrollyteResult},
    region::def::{RegionDef, ResolvedRange, Scrub, ToggleActions},
    region::marker::Marker,
};

fn default_true() -> bool {
    true
}

/// Horizontal slide group: vertical scroll over `[start, end]` becomes horizontal travel
/// across `slides`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideGroupDef {
    /// Group name used in logs and errors.
    pub name: String,
    /// Slide targets, left to right.
    pub slides: Vec<String>,
    /// Where horizontal travel starts.
    pub start: Marker,
    /// Where horizontal travel ends.
    pub end: Marker,
    /// Trigger element box used by element-relative markers.
    #[serde(default)]
    pub trigger: Option<ElementBox>,
    /// Hold the group in the viewport while it travels.
    #[serde(default = "default_true")]
    pub pinned: bool,
    /// Pad the document by the travel span.
    #[serde(default = "default_true")]
    pub pin_spacing: bool,
    /// Scrub behavior of the travel.
    #[serde(default)]
    pub scrub: Scrub,
    /// Emit snap requests toward slide boundaries.
    #[serde(default = "default_true")]
    pub snap: bool,
    /// Slide boundary positions as fractions of the group interval.
    ///
    /// Must start at 0, end at 1 and strictly increase, one entry per slide. Equal spacing when
    /// omitted.
    #[serde(default)]
    pub boundaries: Option<Vec<f64>>,
}

impl SlideGroupDef {
    /// Pinned, scrubbed, snapping group with equally spaced slides.
    pub fn new(
        name: impl Into<String>,
        slides: impl IntoIterator<Item = impl Into<String>>,
        start: impl Into<Marker>,
        end: impl Into<Marker>,
    ) -> Self {
        Self {
            name: name.into(),
            slides: slides.into_iter().map(Into::into).collect(),
            start: start.into(),
            end: end.into(),
            trigger: None,
            pinned: true,
            pin_spacing: true,
            scrub: Scrub::Direct,
            snap: true,
            boundaries: None,
        }
    }

    /// Attach the trigger element box.
    pub fn with_trigger(mut self, trigger: ElementBox) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Set explicit boundary fractions.
    pub fn with_boundaries(mut self, boundaries: Vec<f64>) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    /// Validate slides and boundaries.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollyteError::validation("slide group name must be non-empty"));
        }
        if self.slides.is_empty() {
            return Err(ScrollyteError::validation(format!(
                "slide group `{}` needs at least one slide",
                self.name
            )));
        }
        if self.slides.iter().any(|s| s.trim().is_empty()) {
            return Err(ScrollyteError::validation(format!(
                "slide group `{}` has a blank slide target",
                self.name
            )));
        }
        if let Some(b) = &self.boundaries {
            let n = self.slides.len();
            if n < 2 || b.len() != n {
                return Err(ScrollyteError::validation(format!(
                    "slide group `{}` needs one boundary per slide (and at least two slides)",
                    self.name
                )));
            }
            let monotonic = b.iter().all(|f| f.is_finite())
                && b.first() == Some(&0.0)
                && b.last() == Some(&1.0)
                && b.windows(2).all(|w| w[0] < w[1]);
            if !monotonic {
                return Err(ScrollyteError::invalid_range(format!(
                    "slide group `{}` boundaries must rise strictly from 0 to 1",
                    self.name
                )));
            }
        }
        self.envelope().validate()
    }

    /// Boundary fractions (explicit or equally spaced).
    pub(crate) fn fractions(&self) -> Vec<f64> {
        if let Some(b) = &self.boundaries {
            return b.clone();
        }
        let n = self.slides.len();
        if n < 2 {
            return vec![0.0];
        }
        let last = (n - 1) as f64;
        (0..n).map(|i| i as f64 / last).collect()
    }

    /// Region spanning the whole group; carries pin and scrub.
    pub(crate) fn envelope(&self) -> RegionDef {
        RegionDef {
            name: self.name.clone(),
            start: self.start,
            end: self.end,
            trigger: self.trigger,
            pinned: self.pinned,
            pin_spacing: self.pin_spacing,
            scrub: self.scrub,
            toggle_actions: ToggleActions::default(),
            enter_margin: Length::ZERO,
            leave_margin: Length::ZERO,
            immediate_render: false,
            duration_secs: 1.0,
        }
    }
}

/// Contiguous segment ranges between consecutive boundaries of `envelope`.
pub(crate) fn segment_ranges(envelope: ResolvedRange, fractions: &[f64]) -> Vec<ResolvedRange> {
    let at = |f: f64| {
        if f >= 1.0 {
            envelope.end
        } else {
            envelope.start + f * envelope.span()
        }
    };
    fractions
        .windows(2)
        .map(|w| ResolvedRange {
            start: at(w[0]),
            end: at(w[1]),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/region/group.rs"]
mod tests;
