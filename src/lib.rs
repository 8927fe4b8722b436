//! Scrollyte is a scroll-driven animation timeline engine.
//!
//! It maps a document scroll offset and viewport size to per-frame property values for a set
//! of declaratively registered scroll regions, and hands the result to a renderer.
//!
//! # Frame overview
//!
//! 1. **Register**: `RegionDef + BindingDef` (or a whole [`PageDef`]) resolve markers to native
//!    scroll offsets and intern targets once.
//! 2. **Update**: `offset + viewport -> FrameOutput` (phases, progress, property values, pin
//!    holds, slide group travel, snap requests).
//! 3. **Advance** (optional): move toggle playback and smoothed scrubbing through time.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Idempotent updates**: the same `(offset, viewport)` yields the same output; time only
//!   moves in [`Engine::advance`] and [`Engine::frame`].
//! - **Fail fast at registration, never at runtime**: malformed definitions are rejected with a
//!   [`ScrollyteError`]; runtime input is clamped.
//! - **No global state**: scroll input comes from an injected [`ScrollSource`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod foundation;
mod page;
mod region;

pub use animation::binding::{Binding, BindingDef, Property, Window};
pub use animation::ease::Ease;
pub use animation::stagger::{
    Axis, StaggerDef, StaggerPattern, alternating, radial_offset, stagger_windows,
};
pub use animation::timeline::{Keyframes, Stop, Timeline, Tween};
pub use engine::config::{EngineConfig, SnapConfig};
pub use engine::engine::Engine;
pub use engine::group::{GroupFrame, SnapRequest};
pub use engine::output::{FrameOutput, PropertyValue, RegionFrame};
pub use engine::pin::PinFrame;
pub use engine::playback::PlayDirection;
pub use engine::queue::{CommandQueue, Rejection};
pub use engine::source::{ManualSource, ScrollSource};
pub use foundation::core::{ElementBox, Length, MIN_VIEWPORT_PX, ScrollSample, Size, Vec2};
pub use foundation::error::{ScrollyteError, ScrollyteResult};
pub use foundation::ids::{GroupHandle, RegionHandle, ScopeId, TargetId, TargetTable};
pub use page::model::{PageDef, PageRegionDef};
pub use page::mount::MountedPage;
pub use region::def::{RegionDef, ResolvedRange, Scrub, ToggleAction, ToggleActions};
pub use region::group::SlideGroupDef;
pub use region::marker::Marker;
pub use region::phase::{PhaseEvent, RegionPhase};
