pub(crate) mod config;
#[allow(clippy::module_inception)]
pub(crate) mod engine;
pub(crate) mod group;
pub(crate) mod output;
pub(crate) mod pin;
pub(crate) mod playback;
pub(crate) mod queue;
pub(crate) mod slot;
pub(crate) mod source;
