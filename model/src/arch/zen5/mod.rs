//! AMD Zen 5 model: trilinear interpolation over the measured grid.

mod data;

use crate::arch::PerfModel;
use crate::error::Result;
use crate::interpolation::{Bound, find_bounds, lerp};
use crate::table::{PerfTable, layout_ab};

/// Measured grid, indexed `[m][n][k][trans_a * 2 + trans_b]`.
pub static TABLE: PerfTable =
    PerfTable::new("zen5", &data::M_VALUES, &data::N_VALUES, &data::K_VALUES, 4, &data::GFLOPS);

/// Largest tabulated M; beyond it throughput repeats with the M tile period.
const M_PERIODIC_FROM: i64 = 128;
const M_PERIOD: i64 = 16;

/// M lookup with the periodic tiling remap.
///
/// Above 128, an M that is a multiple of 16 behaves like 128 and any other M
/// behaves like `112 + m % 16`. The remap is only taken when it lands exactly
/// on a breakpoint; otherwise the plain bounded rule applies to `m` itself.
pub fn find_bounds_m(breakpoints: &[i64], m: i64) -> Bound {
    if m > M_PERIODIC_FROM {
        let rem = m % M_PERIOD;
        let mapped = if rem == 0 { M_PERIODIC_FROM } else { M_PERIODIC_FROM - M_PERIOD + rem };
        if let Ok(index) = breakpoints.binary_search(&mapped) {
            return Bound::exact(index);
        }
    }
    find_bounds(breakpoints, m)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zen5;

impl PerfModel for Zen5 {
    fn estimate_gflops(&self, m: i64, n: i64, k: i64, trans_a: i64, trans_b: i64) -> Result<f64> {
        let layout = layout_ab(trans_a, trans_b);
        let bm = find_bounds_m(TABLE.m_values(), m);
        let bn = find_bounds(TABLE.n_values(), n);
        let bk = find_bounds(TABLE.k_values(), k);

        let c = |mi: usize, ni: usize, ki: usize| TABLE.get(mi, ni, ki, layout);

        // Along M.
        let c00 = lerp(c(bm.lower, bn.lower, bk.lower), c(bm.upper, bn.lower, bk.lower), bm.t);
        let c01 = lerp(c(bm.lower, bn.lower, bk.upper), c(bm.upper, bn.lower, bk.upper), bm.t);
        let c10 = lerp(c(bm.lower, bn.upper, bk.lower), c(bm.upper, bn.upper, bk.lower), bm.t);
        let c11 = lerp(c(bm.lower, bn.upper, bk.upper), c(bm.upper, bn.upper, bk.upper), bm.t);

        // Along N, then K.
        let c0 = lerp(c00, c10, bn.t);
        let c1 = lerp(c01, c11, bn.t);
        Ok(lerp(c0, c1, bk.t))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(128, 23; "largest_breakpoint")]
    #[test_case(144, 23; "multiple_of_16_maps_to_128")]
    #[test_case(145, 21; "maps_to_113")]
    #[test_case(255, 22; "maps_to_127")]
    #[test_case(64, 11; "exact_in_range")]
    fn test_m_remap_exact(m: i64, index: usize) {
        assert_eq!(find_bounds_m(TABLE.m_values(), m), Bound::exact(index));
    }

    #[test]
    fn test_m_remap_miss_clamps() {
        // 200 % 16 = 8 maps to 120, which is not tabulated, so 200 clamps to the last row.
        assert_eq!(find_bounds_m(TABLE.m_values(), 200), Bound::exact(23));
    }

    #[test]
    fn test_m_interpolates_below_period() {
        let bound = find_bounds_m(TABLE.m_values(), 8);
        assert_eq!((bound.lower, bound.upper), (0, 1));
        assert!((bound.t - 0.5).abs() < 1e-12);

        let bound = find_bounds_m(TABLE.m_values(), 100);
        assert_eq!((bound.lower, bound.upper), (18, 19));
        assert!((bound.t - 3.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_corner_is_table_entry() {
        let gflops = Zen5.estimate_gflops(128, 256, 128, 1, 1).unwrap();
        assert_eq!(gflops, TABLE.get(23, 10, 5, 3));
    }
}
