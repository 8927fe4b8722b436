use crate::foundation::error::{ScrollyteError, ScrollyteResult};

/// Engine-wide settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Collapse scrubbing, pinning and playback into discrete state changes.
    ///
    /// Must be set explicitly by the host from the user's preference; it is never inferred.
    pub reduced_motion: bool,
    /// Snap behavior for slide groups.
    pub snap: SnapConfig,
    /// Longest tolerated overlap between two pinned regions, in pixels.
    ///
    /// `None` accepts any overlap (the earlier registration wins and a warning is logged).
    pub max_pin_overlap: Option<f64>,
}

/// When slide groups ask the host to settle onto a slide boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Scroll speed (px/s) at or below which a snap may be requested.
    pub velocity_threshold: f64,
    /// Maximum distance to the nearest boundary, as a fraction of the current slide segment.
    pub radius: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: 20.0,
            radius: 0.5,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            snap: SnapConfig::default(),
            max_pin_overlap: None,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config; omitted fields take their defaults.
    pub fn from_json_str(s: &str) -> ScrollyteResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate numeric settings.
    pub fn validate(&self) -> ScrollyteResult<()> {
        let snap = self.snap;
        if !snap.velocity_threshold.is_finite() || snap.velocity_threshold < 0.0 {
            return Err(ScrollyteError::validation(
                "snap.velocity_threshold must be finite and >= 0",
            ));
        }
        if !snap.radius.is_finite() || !(0.0..=1.0).contains(&snap.radius) {
            return Err(ScrollyteError::validation("snap.radius must be in [0, 1]"));
        }
        if let Some(tol) = self.max_pin_overlap
            && (!tol.is_finite() || tol < 0.0)
        {
            return Err(ScrollyteError::validation(
                "max_pin_overlap must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
