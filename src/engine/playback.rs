use crate::foundation::math::{clamp01, lerp, smoothing_alpha};
use crate::region::def::ToggleAction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Direction a playhead is moving in.
pub enum PlayDirection {
    /// Toward progress 1.
    Forward,
    /// Toward progress 0.
    Backward,
    /// Not moving.
    #[default]
    Paused,
}

/// Time-driven progress for non-scrub and smoothed regions.
///
/// Only [`Playhead::advance`] and [`Playhead::chase`] move it through time; frame updates only
/// fire discrete actions, so repeated updates with the same input are stable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Playhead {
    pub(crate) position: f64,
    pub(crate) direction: PlayDirection,
    /// Last moving direction, used by `Resume`.
    last_moving: Option<PlayDirection>,
}

impl Playhead {
    fn set_direction(&mut self, dir: PlayDirection) {
        self.direction = dir;
        if dir != PlayDirection::Paused {
            self.last_moving = Some(dir);
        }
    }

    /// Apply a toggle action. With `instant`, movement completes immediately.
    pub(crate) fn apply(&mut self, action: ToggleAction, instant: bool) {
        match action {
            ToggleAction::Play => self.set_direction(PlayDirection::Forward),
            ToggleAction::Reverse => self.set_direction(PlayDirection::Backward),
            ToggleAction::Pause => self.direction = PlayDirection::Paused,
            ToggleAction::Resume => {
                if let Some(dir) = self.last_moving {
                    self.set_direction(dir);
                }
            }
            ToggleAction::Restart => {
                self.position = 0.0;
                self.set_direction(PlayDirection::Forward);
            }
            ToggleAction::Reset => {
                self.position = 0.0;
                self.direction = PlayDirection::Paused;
            }
            ToggleAction::Complete => {
                self.position = 1.0;
                self.direction = PlayDirection::Paused;
            }
            ToggleAction::None => {}
        }
        if instant {
            self.finish();
        }
    }

    /// Jump to wherever the current movement would end.
    pub(crate) fn finish(&mut self) {
        match self.direction {
            PlayDirection::Forward => self.position = 1.0,
            PlayDirection::Backward => self.position = 0.0,
            PlayDirection::Paused => return,
        }
        self.direction = PlayDirection::Paused;
    }

    /// Move along the current direction for `dt_secs` of a `duration_secs` long animation.
    pub(crate) fn advance(&mut self, dt_secs: f64, duration_secs: f64) {
        let step = if duration_secs > 0.0 {
            dt_secs / duration_secs
        } else {
            1.0
        };
        match self.direction {
            PlayDirection::Forward => self.position = clamp01(self.position + step),
            PlayDirection::Backward => self.position = clamp01(self.position - step),
            PlayDirection::Paused => return,
        }
        if (self.direction == PlayDirection::Forward && self.position >= 1.0)
            || (self.direction == PlayDirection::Backward && self.position <= 0.0)
        {
            self.direction = PlayDirection::Paused;
        }
    }

    /// Approach `target` with exponential smoothing of time constant `lag_secs`.
    pub(crate) fn chase(&mut self, target: f64, dt_secs: f64, lag_secs: f64) {
        let alpha = smoothing_alpha(dt_secs, lag_secs);
        let next = lerp(self.position, target, alpha);
        // Settle onto the target once the remaining distance is negligible.
        self.position = if (next - target).abs() < 1e-5 {
            target
        } else {
            clamp01(next)
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/playback.rs"]
mod tests;
