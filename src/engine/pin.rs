//! Pin holds, implemented with document-height padding: native scroll keeps advancing while
//! the pinned content is shifted down by exactly the distance scrolled into the pin.

use crate::{
    engine::slot::RegionSlot,
    foundation::ids::RegionHandle,
    foundation::math::overlap_len,
    region::def::ResolvedRange,
    region::phase::RegionPhase,
};

/// Per-frame pin instruction for one pinned region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PinFrame {
    /// Pinned region.
    pub region: RegionHandle,
    /// The renderer should hold the content fixed this frame.
    pub held: bool,
    /// Scroll progress through the pin span, in `[0, 1]`, regardless of scrub mode.
    pub progress: f64,
    /// Downward shift to apply to the content so it appears fixed, in pixels.
    pub content_shift: f64,
    /// Resulting top edge of the content in viewport coordinates.
    pub viewport_top: f64,
}

/// Earliest-registered pinned region whose interval contains `offset`.
///
/// Touching intervals share their boundary offset; insertion order breaks the tie there too.
pub(crate) fn claimant(slots: &[RegionSlot], offset: f64) -> Option<RegionHandle> {
    slots
        .iter()
        .find(|s| s.def.pinned && s.range.contains(offset))
        .map(|s| s.handle)
}

/// Longest overlap between `range` and any pinned slot, with that slot's name.
pub(crate) fn worst_overlap<'a>(
    slots: &'a [RegionSlot],
    range: ResolvedRange,
) -> Option<(&'a str, f64)> {
    slots
        .iter()
        .filter(|s| s.def.pinned)
        .map(|s| {
            let len = overlap_len((range.start, range.end), (s.range.start, s.range.end));
            (s.def.name.as_str(), len)
        })
        .filter(|(_, len)| *len > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

pub(crate) fn pin_frame(
    slot: &RegionSlot,
    offset: f64,
    claimant: Option<RegionHandle>,
    reduced_motion: bool,
) -> PinFrame {
    let span = slot.range.span();
    let progress = slot.pin_progress(reduced_motion);
    let held = !reduced_motion
        && slot.phase == RegionPhase::Active
        && claimant == Some(slot.handle);

    let content_shift = if reduced_motion {
        0.0
    } else if held {
        (offset - slot.range.start).clamp(0.0, span)
    } else if offset > slot.range.end {
        span
    } else {
        // Before the pin, or inside it while a higher-priority pin owns the offset.
        0.0
    };

    PinFrame {
        region: slot.handle,
        held,
        progress,
        content_shift,
        viewport_top: slot.content_top - offset + content_shift,
    }
}
