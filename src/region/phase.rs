use smallvec::SmallVec;

use crate::region::def::ResolvedRange;

/// Where the scroll offset sits relative to a region.
///
/// Scroll is bidirectional, so every phase can be re-entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum RegionPhase {
    /// Above the region (and above its enter margin).
    #[default]
    Before,
    /// Inside the enter margin, not yet at `start`.
    Entering,
    /// Inside `[start, end]`.
    Active,
    /// Inside the leave margin after `end`.
    Leaving,
    /// Past the region and its leave margin.
    After,
}

/// Boundary crossing between two phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PhaseEvent {
    /// Forward past `start`.
    Enter,
    /// Forward past `end`.
    Leave,
    /// Backward past `end`.
    EnterBack,
    /// Backward past `start`.
    LeaveBack,
}

impl RegionPhase {
    /// Classify `offset` against `range` and the transition margins.
    ///
    /// With zero margins `Entering` and `Leaving` never occur.
    pub fn classify(offset: f64, range: ResolvedRange, enter_margin: f64, leave_margin: f64) -> Self {
        if offset < range.start {
            if enter_margin > 0.0 && offset >= range.start - enter_margin {
                Self::Entering
            } else {
                Self::Before
            }
        } else if offset <= range.end {
            Self::Active
        } else if leave_margin > 0.0 && offset <= range.end + leave_margin {
            Self::Leaving
        } else {
            Self::After
        }
    }

    /// Return `true` once `start` has been reached or passed.
    pub fn is_reached(self) -> bool {
        matches!(self, Self::Active | Self::Leaving | Self::After)
    }

    /// 0 before `start`, 1 inside, 2 past `end`.
    fn side(self) -> u8 {
        match self {
            Self::Before | Self::Entering => 0,
            Self::Active => 1,
            Self::Leaving | Self::After => 2,
        }
    }
}

/// Boundary events fired when moving from `prev` to `next`, in crossing order.
pub(crate) fn crossing_events(prev: RegionPhase, next: RegionPhase) -> SmallVec<[PhaseEvent; 2]> {
    let mut out = SmallVec::new();
    match (prev.side(), next.side()) {
        (0, 1) => out.push(PhaseEvent::Enter),
        (0, 2) => {
            out.push(PhaseEvent::Enter);
            out.push(PhaseEvent::Leave);
        }
        (1, 2) => out.push(PhaseEvent::Leave),
        (2, 1) => out.push(PhaseEvent::EnterBack),
        (2, 0) => {
            out.push(PhaseEvent::EnterBack);
            out.push(PhaseEvent::LeaveBack);
        }
        (1, 0) => out.push(PhaseEvent::LeaveBack),
        _ => {}
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/region/phase.rs"]
mod tests;
