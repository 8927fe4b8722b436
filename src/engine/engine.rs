use std::sync::mpsc::{self, Receiver, Sender};

use crate::{
    animation::binding::{BindingDef, Property},
    engine::config::EngineConfig,
    engine::group::GroupSlot,
    engine::output::{FrameOutput, PropertyValue, RegionFrame},
    engine::pin,
    engine::playback::PlayDirection,
    engine::queue::{Command, CommandQueue, Rejection},
    engine::slot::{RegionSlot, Role},
    engine::source::{ManualSource, ScrollSource},
    foundation::core::{ScrollSample, Size},
    foundation::error::{ScrollyteError, ScrollyteResult},
    foundation::ids::{GroupHandle, HandleMint, RegionHandle, ScopeId, TargetId, TargetTable},
    region::def::{RegionDef, ResolvedRange, Scrub},
    region::group::{SlideGroupDef, segment_ranges},
    region::phase::RegionPhase,
};

/// Scroll-driven animation engine.
///
/// Owns the registered regions and slide groups, maps scroll samples to per-frame
/// [`FrameOutput`]s, and keeps layout in sync with the viewport. All mutation happens on the
/// thread that owns the engine; other threads go through [`CommandQueue`].
pub struct Engine<S = ManualSource> {
    config: EngineConfig,
    source: S,
    targets: TargetTable,
    slots: Vec<RegionSlot>,
    groups: Vec<GroupSlot>,
    mint: HandleMint,
    tx: Sender<Command>,
    rx: Receiver<Command>,
    rejections: Vec<Rejection>,
    sample: ScrollSample,
    layout_viewport: Size,
    output: FrameOutput,
}

impl Engine<ManualSource> {
    /// Engine driven by a [`ManualSource`] at offset 0.
    pub fn manual(config: EngineConfig) -> ScrollyteResult<Self> {
        Self::new(config, ManualSource::default())
    }
}

/// Pinned regions that push later trigger-anchored content down the document.
fn spaces_document(def: &RegionDef) -> bool {
    def.pinned && def.pin_spacing && def.trigger.is_some()
}

/// Progress a group envelope translates its slides by.
fn group_progress(slot: &RegionSlot, reduced_motion: bool) -> f64 {
    match slot.def.scrub {
        Scrub::Off => slot.playhead.position,
        // Reduced motion rounds to the nearest slide later, so keep the raw scroll position.
        _ if reduced_motion => slot.scroll_progress,
        _ => slot.rendered_progress(false),
    }
}

impl<S: ScrollSource> Engine<S> {
    /// Build an engine reading scroll state from `source`.
    pub fn new(config: EngineConfig, source: S) -> ScrollyteResult<Self> {
        config.validate()?;
        let sample = source.sample().sanitized(0.0);
        let (tx, rx) = mpsc::channel();
        let output = FrameOutput {
            sample,
            ..FrameOutput::default()
        };
        Ok(Self {
            config,
            source,
            targets: TargetTable::new(),
            slots: Vec::new(),
            groups: Vec::new(),
            mint: HandleMint::default(),
            tx,
            rx,
            rejections: Vec::new(),
            sample,
            layout_viewport: sample.viewport,
            output,
        })
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Interned render targets.
    pub fn targets(&self) -> &TargetTable {
        &self.targets
    }

    /// Scroll source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable scroll source, e.g. to move a [`ManualSource`].
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Sendable queue for registering and removing regions from other threads.
    pub fn queue(&self) -> CommandQueue {
        CommandQueue {
            tx: self.tx.clone(),
            mint: self.mint.clone(),
        }
    }

    /// Drain the queued registrations that failed since the last call.
    pub fn take_rejections(&mut self) -> Vec<Rejection> {
        std::mem::take(&mut self.rejections)
    }

    /// Output of the most recent evaluation.
    pub fn output(&self) -> &FrameOutput {
        &self.output
    }

    /// Number of live regions, group envelopes and segments included.
    pub fn region_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of live slide groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Resolved interval of `region`.
    pub fn region_range(&self, region: RegionHandle) -> Option<ResolvedRange> {
        self.slot(region).map(|s| s.range)
    }

    /// Phase of `region` at the last evaluation.
    pub fn region_phase(&self, region: RegionHandle) -> Option<RegionPhase> {
        self.slot(region).map(|s| s.phase)
    }

    /// Slide targets of `group`, left to right.
    pub fn group_members(&self, group: GroupHandle) -> Option<&[TargetId]> {
        self.groups
            .iter()
            .find(|g| g.handle == group)
            .map(|g| g.targets.as_slice())
    }

    /// Envelope region of `group`, carrying its pin and phase.
    pub fn group_region(&self, group: GroupHandle) -> Option<RegionHandle> {
        self.groups
            .iter()
            .find(|g| g.handle == group)
            .map(|g| g.envelope)
    }

    /// Extra document height introduced by pin spacing, in pixels.
    pub fn document_padding(&self) -> f64 {
        self.slots
            .iter()
            .filter(|s| s.def.pinned && s.def.pin_spacing)
            .map(|s| s.range.span())
            .sum()
    }

    fn slot(&self, region: RegionHandle) -> Option<&RegionSlot> {
        self.slots.iter().find(|s| s.handle == region)
    }

    /// Open a new scope for grouping registrations.
    pub fn create_scope(&mut self) -> ScopeId {
        ScopeId(self.mint.next())
    }

    /// Register a region with its property bindings.
    ///
    /// On error nothing is registered and the engine state is unchanged.
    #[tracing::instrument(skip(self, def, bindings), fields(region = %def.name))]
    pub fn register(
        &mut self,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    ) -> ScrollyteResult<RegionHandle> {
        let handle = RegionHandle(self.mint.next());
        self.insert_region(handle, None, def, bindings)?;
        self.evaluate();
        Ok(handle)
    }

    /// Register a region inside `scope`.
    #[tracing::instrument(skip(self, def, bindings), fields(region = %def.name))]
    pub fn register_in(
        &mut self,
        scope: ScopeId,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    ) -> ScrollyteResult<RegionHandle> {
        let handle = RegionHandle(self.mint.next());
        self.insert_region(handle, Some(scope), def, bindings)?;
        self.evaluate();
        Ok(handle)
    }

    /// Register a horizontal slide group.
    #[tracing::instrument(skip(self, def), fields(group = %def.name))]
    pub fn register_group(&mut self, def: SlideGroupDef) -> ScrollyteResult<GroupHandle> {
        let group = self.insert_group(None, def)?;
        self.evaluate();
        Ok(group)
    }

    /// Register a horizontal slide group inside `scope`.
    #[tracing::instrument(skip(self, def), fields(group = %def.name))]
    pub fn register_group_in(
        &mut self,
        scope: ScopeId,
        def: SlideGroupDef,
    ) -> ScrollyteResult<GroupHandle> {
        let group = self.insert_group(Some(scope), def)?;
        self.evaluate();
        Ok(group)
    }

    /// Remove a region. Returns `false` for unknown handles and for slide group members,
    /// which only go away with their group.
    pub fn unregister(&mut self, region: RegionHandle) -> bool {
        let removed = self.remove_region(region);
        if removed {
            self.evaluate();
        }
        removed
    }

    /// Remove a slide group with all its regions.
    pub fn unregister_group(&mut self, group: GroupHandle) -> bool {
        let removed = self.remove_group(group);
        if removed {
            self.evaluate();
        }
        removed
    }

    /// Remove everything registered in `scope`; returns the number of regions and groups
    /// removed.
    pub fn revert_scope(&mut self, scope: ScopeId) -> usize {
        let removed = self.remove_scope(scope);
        self.evaluate();
        removed
    }

    /// Remove every registration and discard pending queued commands.
    pub fn teardown(&mut self) -> usize {
        while self.rx.try_recv().is_ok() {}
        let removed = self.slots.iter().filter(|s| s.role == Role::Plain).count() + self.groups.len();
        self.slots.clear();
        self.groups.clear();
        self.evaluate();
        tracing::debug!(removed, "engine torn down");
        removed
    }

    /// Switch reduced motion on or off.
    ///
    /// Turning it on completes running non-scrub animations at once.
    pub fn set_reduced_motion(&mut self, on: bool) -> &FrameOutput {
        self.config.reduced_motion = on;
        if on {
            for slot in &mut self.slots {
                if slot.def.scrub == Scrub::Off {
                    slot.playhead.finish();
                }
            }
        }
        self.evaluate();
        &self.output
    }

    /// Evaluate the frame for `offset` and `viewport` (velocity 0).
    pub fn update(&mut self, offset: f64, viewport: Size) -> &FrameOutput {
        self.update_sample(ScrollSample::new(offset, viewport))
    }

    /// Evaluate the frame for `sample`.
    ///
    /// Applies queued commands first and relayouts when the viewport changed. Time never
    /// advances here, so repeating a sample yields the same output.
    pub fn update_sample(&mut self, sample: ScrollSample) -> &FrameOutput {
        self.apply_sample(sample);
        self.evaluate();
        &self.output
    }

    /// Re-evaluate the last sample after applying queued commands.
    pub fn refresh(&mut self) -> &FrameOutput {
        self.update_sample(self.sample)
    }

    /// Advance time-driven progress (non-scrub playback and smoothed scrub) by `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) -> &FrameOutput {
        self.advance_slots(dt_secs);
        self.evaluate();
        &self.output
    }

    /// Pull a sample from the source, advance time by `dt_secs`, and evaluate.
    pub fn frame(&mut self, dt_secs: f64) -> &FrameOutput {
        let sample = self.source.sample();
        self.apply_sample(sample);
        self.evaluate();
        self.advance_slots(dt_secs);
        self.evaluate();
        &self.output
    }

    fn apply_sample(&mut self, sample: ScrollSample) {
        self.drain_commands();
        self.sample = sample.sanitized(self.sample.offset);
        if self.sample.viewport != self.layout_viewport {
            self.layout_viewport = self.sample.viewport;
            self.relayout();
        }
    }

    fn advance_slots(&mut self, dt_secs: f64) {
        let dt = if dt_secs.is_finite() { dt_secs.max(0.0) } else { 0.0 };
        let reduced = self.config.reduced_motion;
        for slot in &mut self.slots {
            slot.advance(dt, reduced);
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(cmd) = self.rx.try_recv() {
            match cmd {
                Command::Register {
                    handle,
                    scope,
                    def,
                    bindings,
                } => {
                    let name = def.name.clone();
                    if let Err(err) = self.insert_region(handle, scope, def, bindings) {
                        tracing::warn!(region = %name, %handle, error = %err, "queued registration rejected");
                        self.rejections.push(Rejection {
                            handle,
                            reason: err.to_string(),
                        });
                    }
                }
                Command::Unregister(handle) => {
                    self.remove_region(handle);
                }
                Command::RevertScope(scope) => {
                    self.remove_scope(scope);
                }
            }
        }
    }

    /// Padding above `def`'s trigger from pinned spacers registered further up the page.
    fn pin_padding_before(&self, def: &RegionDef) -> f64 {
        let Some(el) = def.trigger else {
            return 0.0;
        };
        self.slots
            .iter()
            .filter(|s| spaces_document(&s.def))
            .filter(|s| s.def.trigger.is_some_and(|t| t.top < el.top))
            .map(|s| s.range.span())
            .sum()
    }

    fn check_pin_overlap(&self, def: &RegionDef, range: ResolvedRange) -> ScrollyteResult<()> {
        if !def.pinned {
            return Ok(());
        }
        let Some((other, overlap)) = pin::worst_overlap(&self.slots, range) else {
            return Ok(());
        };
        if let Some(tolerance) = self.config.max_pin_overlap
            && overlap > tolerance
        {
            return Err(ScrollyteError::pin_overlap(format!(
                "region `{}` overlaps pinned region `{other}` by {overlap}px (tolerance {tolerance}px)",
                def.name
            )));
        }
        tracing::warn!(
            region = %def.name,
            other,
            overlap,
            "pinned regions overlap; the earlier registration holds the shared offsets"
        );
        Ok(())
    }

    fn insert_region(
        &mut self,
        handle: RegionHandle,
        scope: Option<ScopeId>,
        def: RegionDef,
        bindings: Vec<BindingDef>,
    ) -> ScrollyteResult<()> {
        def.validate()?;
        for b in &bindings {
            b.validate()?;
        }
        let vh = self.layout_viewport.height;
        let padding = self.pin_padding_before(&def);
        let range = def.resolve(self.layout_viewport, padding)?;
        self.check_pin_overlap(&def, range)?;

        let bindings: Vec<_> = bindings
            .into_iter()
            .map(|b| b.resolve(&mut self.targets))
            .collect();
        let spacer = spaces_document(&def);
        let mut slot = RegionSlot::new(handle, scope, Role::Plain, def, bindings, range);
        slot.set_layout(range, padding, vh);
        self.slots.push(slot);
        if spacer {
            self.relayout();
        }
        Ok(())
    }

    fn insert_group(
        &mut self,
        scope: Option<ScopeId>,
        def: SlideGroupDef,
    ) -> ScrollyteResult<GroupHandle> {
        def.validate()?;
        let envelope_def = def.envelope();
        let vh = self.layout_viewport.height;
        let padding = self.pin_padding_before(&envelope_def);
        let range = envelope_def.resolve(self.layout_viewport, padding)?;
        self.check_pin_overlap(&envelope_def, range)?;

        let group = GroupHandle(self.mint.next());
        let fractions = def.fractions();
        let targets: Vec<TargetId> = def.slides.iter().map(|s| self.targets.intern(s)).collect();
        let spacer = spaces_document(&envelope_def);

        let envelope = RegionHandle(self.mint.next());
        let mut slot = RegionSlot::new(
            envelope,
            scope,
            Role::GroupEnvelope(group),
            envelope_def,
            Vec::new(),
            range,
        );
        slot.set_layout(range, padding, vh);
        self.slots.push(slot);

        let mut segments = Vec::with_capacity(fractions.len().saturating_sub(1));
        for (k, seg) in segment_ranges(range, &fractions).into_iter().enumerate() {
            let handle = RegionHandle(self.mint.next());
            let seg_def = RegionDef::new(format!("{}[{k}]", def.name), seg.start, seg.end);
            let mut slot = RegionSlot::new(
                handle,
                scope,
                Role::GroupSegment(group, k),
                seg_def,
                Vec::new(),
                seg,
            );
            slot.set_layout(seg, 0.0, vh);
            self.slots.push(slot);
            segments.push(handle);
        }

        self.groups.push(GroupSlot {
            handle: group,
            scope,
            name: def.name,
            targets,
            fractions,
            snap: def.snap,
            envelope,
            segments,
        });
        if spacer {
            self.relayout();
        }
        Ok(group)
    }

    /// Drop slots matching `pred`; returns whether a document spacer went with them.
    fn remove_slots(&mut self, mut pred: impl FnMut(&RegionSlot) -> bool) -> bool {
        let mut spacer = false;
        self.slots.retain(|s| {
            if pred(s) {
                spacer |= spaces_document(&s.def);
                false
            } else {
                true
            }
        });
        spacer
    }

    fn remove_region(&mut self, region: RegionHandle) -> bool {
        let Some(slot) = self.slot(region) else {
            return false;
        };
        if let Some(group) = slot.role.group() {
            tracing::warn!(%region, %group, "slide group regions are removed with their group");
            return false;
        }
        if self.remove_slots(|s| s.handle == region) {
            self.relayout();
        }
        true
    }

    fn remove_group(&mut self, group: GroupHandle) -> bool {
        let Some(index) = self.groups.iter().position(|g| g.handle == group) else {
            return false;
        };
        let removed = self.groups.remove(index);
        if self.remove_slots(|s| s.role.group() == Some(group)) {
            self.relayout();
        }
        tracing::debug!(group = %removed.name, slides = removed.targets.len(), "slide group removed");
        true
    }

    fn remove_scope(&mut self, scope: ScopeId) -> usize {
        let groups_before = self.groups.len();
        self.groups.retain(|g| g.scope != Some(scope));
        let groups = groups_before - self.groups.len();
        let regions = self
            .slots
            .iter()
            .filter(|s| s.scope == Some(scope) && s.role == Role::Plain)
            .count();
        if self.remove_slots(|s| s.scope == Some(scope)) {
            self.relayout();
        }
        tracing::debug!(scope = scope.0, regions, groups, "scope reverted");
        regions + groups
    }

    /// Re-resolve every region against the current viewport.
    ///
    /// Trigger-anchored regions are laid out top to bottom so each one sees the pin padding
    /// of the spacers above it. A region that no longer resolves keeps its previous range.
    fn relayout(&mut self) {
        let viewport = self.layout_viewport;
        let vh = viewport.height;

        let mut anchored: Vec<usize> = Vec::new();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            match (slot.role, slot.def.trigger) {
                (Role::GroupSegment(..), _) => {}
                (_, Some(_)) => anchored.push(i),
                // Absolute bounds never move; only percentage margins need refreshing.
                (_, None) if !slot.def.depends_on_viewport() => {
                    let range = slot.range;
                    slot.set_layout(range, 0.0, vh);
                }
                (_, None) => match slot.def.resolve(viewport, 0.0) {
                    Ok(range) => slot.set_layout(range, 0.0, vh),
                    Err(err) => {
                        tracing::warn!(region = %slot.def.name, error = %err, "relayout failed; keeping previous range");
                    }
                },
            }
        }
        anchored.sort_by(|&a, &b| {
            let top = |i: usize| self.slots[i].def.trigger.map_or(0.0, |t| t.top);
            top(a).total_cmp(&top(b))
        });

        let mut spacers: Vec<(f64, f64)> = Vec::new();
        for i in anchored {
            let slot = &mut self.slots[i];
            let top = slot.def.trigger.map_or(0.0, |t| t.top);
            let padding: f64 = spacers
                .iter()
                .filter(|(t, _)| *t < top)
                .map(|(_, span)| span)
                .sum();
            match slot.def.resolve(viewport, padding) {
                Ok(range) => slot.set_layout(range, padding, vh),
                Err(err) => {
                    tracing::warn!(region = %slot.def.name, error = %err, "relayout failed; keeping previous range");
                }
            }
            if spaces_document(&slot.def) {
                spacers.push((top, slot.range.span()));
            }
        }

        for group in &self.groups {
            let Some(envelope) = self.slots.iter().find(|s| s.handle == group.envelope) else {
                continue;
            };
            let ranges = segment_ranges(envelope.range, &group.fractions);
            for (handle, range) in group.segments.iter().zip(ranges) {
                if let Some(seg) = self.slots.iter_mut().find(|s| s.handle == *handle) {
                    seg.set_layout(range, 0.0, vh);
                }
            }
        }
        tracing::debug!(viewport_height = vh, regions = self.slots.len(), "relayout");
    }

    fn evaluate(&mut self) {
        let Self {
            config,
            slots,
            groups,
            sample,
            output,
            ..
        } = self;
        let reduced = config.reduced_motion;
        let offset = sample.offset;

        output.clear();
        output.sample = *sample;
        for slot in slots.iter_mut() {
            slot.observe(offset, reduced);
        }

        let claimant = pin::claimant(slots, offset);
        for slot in slots.iter() {
            let rendered = slot.rendered_progress(reduced);
            output.regions.push(RegionFrame {
                region: slot.handle,
                phase: slot.phase,
                progress: rendered,
                scroll_progress: slot.scroll_progress,
            });

            if slot.def.pinned {
                output.pins.push(pin::pin_frame(slot, offset, claimant, reduced));
                if slot.def.pin_spacing {
                    output.document_padding += slot.range.span();
                }
            }

            if let Role::GroupEnvelope(handle) = slot.role
                && let Some(group) = groups.iter().find(|g| g.handle == handle)
            {
                let p = group_progress(slot, reduced);
                let frame = group.frame(slot.phase, p, reduced);
                output.groups.push(frame);
                if slot.emits(p) {
                    output
                        .values
                        .extend(group.targets.iter().map(|&target| PropertyValue {
                            region: slot.handle,
                            target,
                            property: Property::XPercent,
                            value: frame.slide_x_percent,
                        }));
                }
                if let Some(snap) =
                    group.snap_request(slot.range, slot.phase, offset, sample.velocity, config.snap)
                {
                    output.snaps.push(snap);
                }
                continue;
            }

            if slot.emits(rendered) {
                output.values.extend(slot.bindings.iter().map(|b| PropertyValue {
                    region: slot.handle,
                    target: b.target,
                    property: b.property,
                    value: b.value_at(rendered),
                }));
            }
        }
    }

    /// Direction of the playhead of a non-scrub region.
    pub fn playback_direction(&self, region: RegionHandle) -> Option<PlayDirection> {
        self.slot(region)
            .filter(|s| s.def.scrub == Scrub::Off)
            .map(|s| s.playhead.direction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/engine.rs"]
mod tests;
