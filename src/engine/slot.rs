use crate::{
    animation::binding::Binding,
    engine::playback::Playhead,
    foundation::ids::{GroupHandle, RegionHandle, ScopeId},
    region::def::{RegionDef, ResolvedRange, Scrub, ToggleAction},
    region::phase::{PhaseEvent, RegionPhase, crossing_events},
};

/// What a registered region is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// Registered directly by the host.
    Plain,
    /// Whole interval of a slide group; owns the group's pin and scrub.
    GroupEnvelope(GroupHandle),
    /// Segment between slide boundaries `k` and `k + 1`.
    GroupSegment(GroupHandle, usize),
}

impl Role {
    pub(crate) fn group(self) -> Option<GroupHandle> {
        match self {
            Self::Plain => None,
            Self::GroupEnvelope(g) | Self::GroupSegment(g, _) => Some(g),
        }
    }
}

/// Live state of one registered region.
#[derive(Clone, Debug)]
pub(crate) struct RegionSlot {
    pub(crate) handle: RegionHandle,
    pub(crate) scope: Option<ScopeId>,
    pub(crate) role: Role,
    pub(crate) def: RegionDef,
    pub(crate) bindings: Vec<Binding>,
    pub(crate) range: ResolvedRange,
    /// Enter/leave margins in pixels.
    pub(crate) margins: (f64, f64),
    /// Document offset of the pinned content's top edge.
    pub(crate) content_top: f64,
    pub(crate) phase: RegionPhase,
    /// Raw scroll progress from the last observation.
    pub(crate) scroll_progress: f64,
    pub(crate) playhead: Playhead,
    observed: bool,
    /// Set once `start` has been reached; the renderer then owns a non-initial state.
    reached: bool,
}

impl RegionSlot {
    pub(crate) fn new(
        handle: RegionHandle,
        scope: Option<ScopeId>,
        role: Role,
        def: RegionDef,
        bindings: Vec<Binding>,
        range: ResolvedRange,
    ) -> Self {
        Self {
            handle,
            scope,
            role,
            def,
            bindings,
            range,
            margins: (0.0, 0.0),
            content_top: range.start,
            phase: RegionPhase::Before,
            scroll_progress: 0.0,
            playhead: Playhead::default(),
            observed: false,
            reached: false,
        }
    }

    /// Store a fresh layout for this region.
    pub(crate) fn set_layout(&mut self, range: ResolvedRange, pin_padding: f64, viewport_height: f64) {
        self.range = range;
        self.margins = self.def.margins_px(viewport_height);
        self.content_top = match self.def.trigger {
            Some(el) => el.top + pin_padding,
            None => range.start,
        };
    }

    fn action_for(&self, event: PhaseEvent) -> ToggleAction {
        let t = self.def.toggle_actions;
        match event {
            PhaseEvent::Enter => t.on_enter,
            PhaseEvent::Leave => t.on_leave,
            PhaseEvent::EnterBack => t.on_enter_back,
            PhaseEvent::LeaveBack => t.on_leave_back,
        }
    }

    /// Classify `offset`, fire boundary actions, and record raw progress.
    ///
    /// Calling this twice with the same offset changes nothing the second time.
    pub(crate) fn observe(&mut self, offset: f64, reduced_motion: bool) {
        let phase = RegionPhase::classify(offset, self.range, self.margins.0, self.margins.1);
        self.scroll_progress = self.range.progress(offset);

        if self.def.scrub == Scrub::Off {
            for event in crossing_events(self.phase, phase) {
                let action = self.action_for(event);
                self.playhead.apply(action, reduced_motion);
            }
        }
        if !self.observed {
            // First paint starts smoothed regions on target instead of easing in from 0.
            if matches!(self.def.scrub, Scrub::Smoothed { .. }) {
                self.playhead.position = self.scroll_progress;
            }
            self.observed = true;
        }
        self.reached |= phase.is_reached();
        self.phase = phase;
    }

    /// Move time-driven progress forward by `dt_secs`.
    pub(crate) fn advance(&mut self, dt_secs: f64, reduced_motion: bool) {
        match self.def.scrub {
            Scrub::Off if reduced_motion => self.playhead.finish(),
            Scrub::Off => self.playhead.advance(dt_secs, self.def.duration_secs),
            Scrub::Smoothed { lag_secs } if !reduced_motion => {
                self.playhead.chase(self.scroll_progress, dt_secs, lag_secs);
            }
            Scrub::Smoothed { .. } | Scrub::Direct => {}
        }
    }

    /// Progress bindings are evaluated at, in `[0, 1]`.
    pub(crate) fn rendered_progress(&self, reduced_motion: bool) -> f64 {
        match self.def.scrub {
            Scrub::Off => self.playhead.position,
            _ if reduced_motion => self.discrete_progress(),
            Scrub::Direct => self.scroll_progress,
            Scrub::Smoothed { .. } => self.playhead.position,
        }
    }

    /// Start state before `start`, final state from `start` on.
    pub(crate) fn discrete_progress(&self) -> f64 {
        if self.phase.is_reached() { 1.0 } else { 0.0 }
    }

    /// Whether bindings produce output this frame.
    ///
    /// A region that was reached keeps emitting in `Before` so scrolling back up restores
    /// its start state.
    pub(crate) fn emits(&self, rendered: f64) -> bool {
        self.phase != RegionPhase::Before
            || self.reached
            || self.def.immediate_render
            || rendered > 0.0
    }

    /// Progress through the region's scroll span for pin consumers.
    ///
    /// Follows the scroll offset even when bindings play on a time-driven playhead.
    pub(crate) fn pin_progress(&self, reduced_motion: bool) -> f64 {
        if reduced_motion {
            self.discrete_progress()
        } else {
            self.scroll_progress
        }
    }
}
