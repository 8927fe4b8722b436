/// Clamp `v` into `[0, 1]`. `NaN` maps to 0.
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalized progress of `offset` through `[start, end]`, clamped to `[0, 1]`.
///
/// Degenerate intervals report 1 once reached and 0 before.
pub(crate) fn progress(offset: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    clamp01((offset - start) / span)
}

/// Local progress of `p` inside the sub-window `[a, b]` of `[0, 1]`.
pub(crate) fn window_progress(p: f64, a: f64, b: f64) -> f64 {
    progress(p, a, b)
}

/// Length of the intersection of two closed intervals (0 when disjoint or touching).
pub(crate) fn overlap_len(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.1.min(b.1) - a.0.max(b.0)).max(0.0)
}

/// Exponential approach factor for smoothing with time constant `lag_secs`.
pub(crate) fn smoothing_alpha(dt_secs: f64, lag_secs: f64) -> f64 {
    if lag_secs <= 0.0 || !lag_secs.is_finite() {
        return 1.0;
    }
    clamp01(1.0 - (-dt_secs.max(0.0) / lag_secs).exp())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
