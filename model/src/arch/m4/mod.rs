//! Apple M4 model.
//!
//! The M4 grid is only measured for the two `B` layouts, so `trans_a` has no
//! effect on the estimate. Unlike Zen 5 the M axis is tabulated all the way
//! to 256 and needs no periodic remap.

mod data;

use crate::arch::PerfModel;
use crate::error::Result;
use crate::interpolation::{find_bounds, lerp};
use crate::table::{PerfTable, clamp_flag};

/// Measured grid, indexed `[m][n][k][trans_b]`.
pub static TABLE: PerfTable =
    PerfTable::new("m4", &data::M_VALUES, &data::N_VALUES, &data::K_VALUES, 2, &data::GFLOPS);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct M4;

impl PerfModel for M4 {
    fn estimate_gflops(&self, m: i64, n: i64, k: i64, _trans_a: i64, trans_b: i64) -> Result<f64> {
        let layout = clamp_flag(trans_b);
        let bm = find_bounds(TABLE.m_values(), m);
        let bn = find_bounds(TABLE.n_values(), n);
        let bk = find_bounds(TABLE.k_values(), k);

        let c = |mi: usize, ni: usize, ki: usize| TABLE.get(mi, ni, ki, layout);

        let c00 = lerp(c(bm.lower, bn.lower, bk.lower), c(bm.upper, bn.lower, bk.lower), bm.t);
        let c01 = lerp(c(bm.lower, bn.lower, bk.upper), c(bm.upper, bn.lower, bk.upper), bm.t);
        let c10 = lerp(c(bm.lower, bn.upper, bk.lower), c(bm.upper, bn.upper, bk.lower), bm.t);
        let c11 = lerp(c(bm.lower, bn.upper, bk.upper), c(bm.upper, bn.upper, bk.upper), bm.t);

        let c0 = lerp(c00, c10, bn.t);
        let c1 = lerp(c01, c11, bn.t);
        Ok(lerp(c0, c1, bk.t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trans_a_is_ignored() {
        for trans_b in [0, 1] {
            let a = M4.estimate_gflops(100, 37, 200, 0, trans_b).unwrap();
            let b = M4.estimate_gflops(100, 37, 200, 1, trans_b).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_no_periodic_remap() {
        // 144 is tabulated on M4; 300 clamps to 256 rather than remapping.
        let at_144 = M4.estimate_gflops(144, 16, 16, 0, 0).unwrap();
        assert_eq!(at_144, TABLE.get(26, 2, 1, 0));

        let above = M4.estimate_gflops(300, 16, 16, 0, 0).unwrap();
        assert_eq!(above, TABLE.get(47, 2, 1, 0));
    }

    #[test]
    fn test_interpolates_along_k() {
        let lo = TABLE.get(11, 11, 1, 1);
        let hi = TABLE.get(11, 11, 2, 1);
        let mid = M4.estimate_gflops(64, 64, 32, 0, 1).unwrap();
        assert!((mid - (lo + hi) / 2.0).abs() < 1e-9);
    }
}
