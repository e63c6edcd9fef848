//! Bounded lookups over sorted breakpoint arrays.
//!
//! Measured tables only cover a finite grid. Queries between two breakpoints
//! are linearly weighted; queries outside the grid clamp to the nearest edge
//! with weight 0, so a table is never extrapolated.

/// Bracketing breakpoints for one axis and the weight of the upper one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub lower: usize,
    pub upper: usize,
    /// Weight of `upper`, in `[0, 1)`. Zero means `lower` is used unchanged.
    pub t: f64,
}

impl Bound {
    pub const fn exact(index: usize) -> Self {
        Self { lower: index, upper: index, t: 0.0 }
    }

    pub fn is_exact(&self) -> bool {
        self.t == 0.0
    }
}

pub fn lerp(x0: f64, x1: f64, t: f64) -> f64 {
    x0 + t * (x1 - x0)
}

/// Locate `value` in strictly increasing `breakpoints`.
///
/// Exact hits and out-of-range values yield an exact bound; anything else is
/// bracketed by its neighbours with `t = (value - lower) / (upper - lower)`.
pub fn find_bounds(breakpoints: &[i64], value: i64) -> Bound {
    debug_assert!(!breakpoints.is_empty(), "breakpoint array must not be empty");

    let bound = match breakpoints.binary_search(&value) {
        Ok(index) => Bound::exact(index),
        Err(0) => Bound::exact(0),
        Err(pos) if pos == breakpoints.len() => Bound::exact(pos - 1),
        Err(pos) => {
            let (lo, hi) = (breakpoints[pos - 1], breakpoints[pos]);
            Bound { lower: pos - 1, upper: pos, t: (value - lo) as f64 / (hi - lo) as f64 }
        }
    };
    tracing::trace!(value, lower = bound.lower, upper = bound.upper, t = bound.t, exact = bound.is_exact(), "axis bound");
    bound
}

/// Index of the breakpoint closest to `value`; ties go to the smaller breakpoint.
pub fn nearest_index(breakpoints: &[i64], value: i64) -> usize {
    debug_assert!(!breakpoints.is_empty(), "breakpoint array must not be empty");

    match breakpoints.binary_search(&value) {
        Ok(index) => index,
        Err(0) => 0,
        Err(pos) if pos == breakpoints.len() => pos - 1,
        Err(pos) => {
            if value - breakpoints[pos - 1] <= breakpoints[pos] - value {
                pos - 1
            } else {
                pos
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const ARR: [i64; 5] = [10, 20, 30, 40, 50];

    #[test]
    fn test_lerp_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
    }

    #[test_case(25, 1, 2, 0.5; "between")]
    #[test_case(10, 0, 0, 0.0; "first")]
    #[test_case(50, 4, 4, 0.0; "last")]
    #[test_case(5, 0, 0, 0.0; "below")]
    #[test_case(55, 4, 4, 0.0; "above")]
    #[test_case(41, 3, 4, 0.1; "just_above_breakpoint")]
    fn test_find_bounds(value: i64, lower: usize, upper: usize, t: f64) {
        let bound = find_bounds(&ARR, value);
        assert_eq!((bound.lower, bound.upper), (lower, upper));
        assert_eq!(bound.is_exact(), lower == upper);
        assert!((bound.t - t).abs() < 1e-12);
    }

    #[test]
    fn test_find_bounds_single_breakpoint() {
        assert!(find_bounds(&[8], 3).is_exact());
        assert_eq!(find_bounds(&[8], 3), Bound::exact(0));
        assert_eq!(find_bounds(&[8], 8), Bound::exact(0));
        assert_eq!(find_bounds(&[8], 30), Bound::exact(0));
    }

    #[test_case(10, 0; "exact")]
    #[test_case(14, 0; "closer_to_lower")]
    #[test_case(15, 0; "tie_goes_low")]
    #[test_case(16, 1; "closer_to_upper")]
    #[test_case(-3, 0; "below")]
    #[test_case(99, 4; "above")]
    fn test_nearest_index(value: i64, expected: usize) {
        assert_eq!(nearest_index(&ARR, value), expected);
    }
}
