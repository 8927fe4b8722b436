use crate::{
    foundation::ids::{GroupHandle, RegionHandle, ScopeId, TargetId},
    foundation::math::progress,
    region::def::ResolvedRange,
    region::phase::RegionPhase,
};

/// Live state of a registered slide group.
#[derive(Clone, Debug)]
pub(crate) struct GroupSlot {
    pub(crate) handle: GroupHandle,
    pub(crate) scope: Option<ScopeId>,
    pub(crate) name: String,
    pub(crate) targets: Vec<TargetId>,
    pub(crate) fractions: Vec<f64>,
    pub(crate) snap: bool,
    pub(crate) envelope: RegionHandle,
    pub(crate) segments: Vec<RegionHandle>,
}

/// Per-frame state of a slide group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GroupFrame {
    /// Group handle.
    pub group: GroupHandle,
    /// Phase of the group interval.
    pub phase: RegionPhase,
    /// Rendered progress through the group interval, in `[0, 1]`.
    pub progress: f64,
    /// Fraction of total travel covered, in `[0, 1]`.
    pub travel: f64,
    /// Travel as a percentage of the whole strip: `-100 * travel`.
    pub travel_percent: f64,
    /// Translation applied to every slide, in percent of one slide width.
    pub slide_x_percent: f64,
    /// Index of the slide nearest to the viewport.
    pub dominant: usize,
}

/// Advisory request to settle scrolling onto a slide boundary.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SnapRequest {
    /// Group asking for the snap.
    pub group: GroupHandle,
    /// Slide whose boundary is the target.
    pub slide: usize,
    /// Native scroll offset to settle at.
    pub target_offset: f64,
}

/// Travel fraction for group progress `p`: boundary `i` maps to `i / (n - 1)`, linear
/// in between.
pub(crate) fn travel_for(fractions: &[f64], p: f64) -> f64 {
    let n = fractions.len();
    if n < 2 {
        return 0.0;
    }
    let last_seg = n - 2;
    let k = fractions
        .partition_point(|f| *f <= p)
        .saturating_sub(1)
        .min(last_seg);
    let local = progress(p, fractions[k], fractions[k + 1]);
    (k as f64 + local) / (n - 1) as f64
}

/// Index of the slide boundary nearest to `travel`.
pub(crate) fn dominant_slide(slide_count: usize, travel: f64) -> usize {
    if slide_count < 2 {
        return 0;
    }
    let last = (slide_count - 1) as f64;
    ((travel * last).round().clamp(0.0, last)) as usize
}

impl GroupSlot {
    pub(crate) fn frame(&self, phase: RegionPhase, rendered: f64, reduced_motion: bool) -> GroupFrame {
        let n = self.targets.len();
        let mut travel = travel_for(&self.fractions, rendered);
        let dominant = dominant_slide(n, travel);
        if reduced_motion && n >= 2 {
            travel = dominant as f64 / (n - 1) as f64;
        }
        let last = n.saturating_sub(1) as f64;
        GroupFrame {
            group: self.handle,
            phase,
            progress: rendered,
            travel,
            travel_percent: -100.0 * travel,
            slide_x_percent: -100.0 * last * travel,
            dominant,
        }
    }

    /// Snap request for a resting scroll inside the group, if one is warranted.
    pub(crate) fn snap_request(
        &self,
        envelope: ResolvedRange,
        phase: RegionPhase,
        offset: f64,
        velocity: f64,
        config: crate::engine::config::SnapConfig,
    ) -> Option<SnapRequest> {
        if !self.snap || self.fractions.len() < 2 || phase != RegionPhase::Active {
            return None;
        }
        if velocity.abs() > config.velocity_threshold {
            return None;
        }

        let at = |f: f64| envelope.start + f * envelope.span();
        let (slide, target) = self
            .fractions
            .iter()
            .enumerate()
            .map(|(i, f)| (i, at(*f)))
            .min_by(|a, b| (a.1 - offset).abs().total_cmp(&(b.1 - offset).abs()))?;
        let distance = (target - offset).abs();
        if distance <= 0.5 {
            return None;
        }

        let p = envelope.progress(offset);
        let seg = self
            .fractions
            .partition_point(|f| *f <= p)
            .saturating_sub(1)
            .min(self.fractions.len() - 2);
        let seg_len = (self.fractions[seg + 1] - self.fractions[seg]) * envelope.span();
        if distance > config.radius * seg_len {
            return None;
        }

        Some(SnapRequest {
            group: self.handle,
            slide,
            target_offset: target,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/group.rs"]
mod tests;
