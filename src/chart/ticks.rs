//! Y-axis tick derivation.
//!
//! Policy: a malformed range (non-positive step, inverted bounds, or a span
//! that is not evenly divisible by the step) is a validation error with exit
//! code 2, not an empty tick set. Divisibility is checked against a relative
//! tolerance so that ranges expressible exactly in f64 (e.g. 40..100 step 10)
//! always pass.

use crate::domain::AxisRange;
use crate::error::AppError;

/// Relative tolerance for the divisibility check.
const DIVISIBILITY_EPS: f64 = 1e-9;

/// Produce the ordered tick sequence `min, min+step, ..., max` (inclusive).
pub fn ticks(range: &AxisRange) -> Result<Vec<f64>, AppError> {
    if !(range.min.is_finite() && range.max.is_finite() && range.step.is_finite()) {
        return Err(AppError::config("Axis range must be finite."));
    }
    if range.step <= 0.0 {
        return Err(AppError::config(format!(
            "Axis step must be > 0 (got {}).",
            range.step
        )));
    }
    if range.max <= range.min {
        return Err(AppError::config(format!(
            "Axis max must exceed min (got [{}, {}]).",
            range.min, range.max
        )));
    }

    let steps = range.span() / range.step;
    let rounded = steps.round();
    if (steps - rounded).abs() > DIVISIBILITY_EPS * steps.max(1.0) {
        return Err(AppError::config(format!(
            "Axis span {} is not evenly divisible by step {}.",
            range.span(),
            range.step
        )));
    }

    let n = rounded as usize;
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..=n {
        out.push(range.min + range.step * i as f64);
    }
    // Pin the endpoint so accumulated f64 error never shifts the top tick.
    out[n] = range.max;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_every_ten_from_twenty_to_hundred() {
        let out = ticks(&AxisRange::new(20.0, 100.0, 10.0)).unwrap();
        assert_eq!(
            out,
            vec![20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn ticks_start_end_and_count_match_range() {
        let range = AxisRange::new(40.0, 100.0, 10.0);
        let out = ticks(&range).unwrap();
        assert_eq!(out.len(), (range.span() / range.step) as usize + 1);
        assert_eq!(out[0], range.min);
        assert_eq!(*out.last().unwrap(), range.max);
        for w in out.windows(2) {
            assert!(
                (w[1] - w[0] - range.step).abs() < 1e-9,
                "ticks must increase by step: {} -> {}",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn ticks_reject_non_positive_step() {
        let err = ticks(&AxisRange::new(0.0, 10.0, 0.0)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = ticks(&AxisRange::new(0.0, 10.0, -1.0)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ticks_reject_non_divisible_span() {
        let err = ticks(&AxisRange::new(0.0, 10.0, 3.0)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ticks_reject_inverted_range() {
        let err = ticks(&AxisRange::new(100.0, 40.0, 10.0)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ticks_accept_fractional_step() {
        let out = ticks(&AxisRange::new(0.0, 1.0, 0.25)).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[4], 1.0);
    }

    #[test]
    fn ticks_are_idempotent() {
        let range = AxisRange::new(40.0, 100.0, 10.0);
        assert_eq!(ticks(&range).unwrap(), ticks(&range).unwrap());
    }
}
