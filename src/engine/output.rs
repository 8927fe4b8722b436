use crate::{
    animation::binding::Property,
    engine::group::{GroupFrame, SnapRequest},
    engine::pin::PinFrame,
    foundation::core::ScrollSample,
    foundation::ids::{GroupHandle, RegionHandle, TargetId},
    region::phase::RegionPhase,
};

/// One property value computed for one target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PropertyValue {
    /// Region whose binding produced the value.
    pub region: RegionHandle,
    /// Render target.
    pub target: TargetId,
    /// Property written.
    pub property: Property,
    /// Value at the region's rendered progress.
    pub value: f64,
}

/// Phase and progress of one region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RegionFrame {
    /// Region handle.
    pub region: RegionHandle,
    /// Phase for the current offset.
    pub phase: RegionPhase,
    /// Progress bindings were evaluated at.
    pub progress: f64,
    /// Raw scroll progress through `[start, end]`.
    pub scroll_progress: f64,
}

/// Everything the renderer needs for one frame.
///
/// The engine keeps one instance and refills it on every update, so the vectors keep their
/// capacity between frames.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct FrameOutput {
    /// Sample the frame was computed for, after sanitizing.
    pub sample: ScrollSample,
    /// Property values in registration order. Later writes to the same target and property
    /// take precedence.
    pub values: Vec<PropertyValue>,
    /// State of every registered region.
    pub regions: Vec<RegionFrame>,
    /// Pin instructions for pinned regions.
    pub pins: Vec<PinFrame>,
    /// Slide group state.
    pub groups: Vec<GroupFrame>,
    /// Advisory snap requests.
    pub snaps: Vec<SnapRequest>,
    /// Extra document height added by pin spacing, in pixels.
    pub document_padding: f64,
}

impl FrameOutput {
    pub(crate) fn clear(&mut self) {
        self.values.clear();
        self.regions.clear();
        self.pins.clear();
        self.groups.clear();
        self.snaps.clear();
        self.document_padding = 0.0;
    }

    /// Effective value for `target`/`property` (the last write this frame).
    pub fn value(&self, target: TargetId, property: Property) -> Option<f64> {
        self.values
            .iter()
            .rev()
            .find(|v| v.target == target && v.property == property)
            .map(|v| v.value)
    }

    /// Frame state of `region`.
    pub fn region(&self, region: RegionHandle) -> Option<&RegionFrame> {
        self.regions.iter().find(|r| r.region == region)
    }

    /// Pin instruction for `region`.
    pub fn pin(&self, region: RegionHandle) -> Option<&PinFrame> {
        self.pins.iter().find(|p| p.region == region)
    }

    /// Frame state of `group`.
    pub fn group(&self, group: GroupHandle) -> Option<&GroupFrame> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// Return `true` if `region` is part of this frame.
    pub fn contains_region(&self, region: RegionHandle) -> bool {
        self.region(region).is_some()
    }
}
