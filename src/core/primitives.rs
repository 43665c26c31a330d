/// Replaces a zero, near-zero or non-finite span with `1.0` so it can be used
/// as a divisor.
#[must_use]
pub fn guarded_span(span: f64) -> f64 {
    if !span.is_finite() || span.abs() < f64::EPSILON {
        1.0
    } else {
        span
    }
}
