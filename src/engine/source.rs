use crate::foundation::core::{ScrollSample, Size};

/// Where the engine reads scroll position and viewport size from.
///
/// The host injects this at construction; the engine never consults global state.
pub trait ScrollSource {
    /// Current scroll observation.
    fn sample(&self) -> ScrollSample;
}

impl<F> ScrollSource for F
where
    F: Fn() -> ScrollSample,
{
    fn sample(&self) -> ScrollSample {
        self()
    }
}

/// Source whose sample is set by the host (or a test) before each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualSource {
    sample: ScrollSample,
}

impl ManualSource {
    /// Source starting at `sample`.
    pub fn new(sample: ScrollSample) -> Self {
        Self { sample }
    }

    /// Source at offset 0 with the given viewport.
    pub fn at_rest(viewport: Size) -> Self {
        Self::new(ScrollSample::new(0.0, viewport))
    }

    /// Replace the whole sample.
    pub fn set(&mut self, sample: ScrollSample) {
        self.sample = sample;
    }

    /// Move to `offset` with the given velocity, keeping the viewport.
    pub fn scroll_to(&mut self, offset: f64, velocity: f64) {
        self.sample.offset = offset;
        self.sample.velocity = velocity;
    }

    /// Resize the viewport.
    pub fn resize(&mut self, viewport: Size) {
        self.sample.viewport = viewport;
    }
}

impl ScrollSource for ManualSource {
    fn sample(&self) -> ScrollSample {
        self.sample
    }
}
