//! ARM Cortex-A76 model.
//!
//! The A76 table holds microkernel measurements only (M up to 16, N up to
//! 15). A full GEMM is first blocked into microkernels by [`blocking`], and the
//! aggregate throughput is derived from the per-kernel lookups.

pub mod blocking;
mod data;

use crate::arch::PerfModel;
use crate::error::Result;
use crate::interpolation::{find_bounds, lerp, nearest_index};
use crate::table::{PerfTable, layout_ab};

/// Microkernel grid, indexed `[m][n][k][trans_a * 2 + trans_b]`.
pub static TABLE: PerfTable =
    PerfTable::new("a76", &data::M_VALUES, &data::N_VALUES, &data::K_VALUES, 4, &data::GFLOPS);

/// GFLOPS of a single `m x n` microkernel at depth `k`.
///
/// M and N snap to the nearest measured kernel; only K is interpolated.
pub fn microkernel_gflops(m: i64, n: i64, k: i64, trans_a: i64, trans_b: i64) -> f64 {
    let layout = layout_ab(trans_a, trans_b);
    let mi = nearest_index(TABLE.m_values(), m);
    let ni = nearest_index(TABLE.n_values(), n);
    let bk = find_bounds(TABLE.k_values(), k);
    lerp(TABLE.get(mi, ni, bk.lower, layout), TABLE.get(mi, ni, bk.upper, layout), bk.t)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct A76;

impl PerfModel for A76 {
    fn estimate_gflops(&self, m: i64, n: i64, k: i64, trans_a: i64, trans_b: i64) -> Result<f64> {
        let plan = blocking::partition(m, n);
        blocking::aggregate_gflops(&plan, k, |bm, bn| microkernel_gflops(bm, bn, k, trans_a, trans_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microkernel_snaps_m_and_n() {
        // M and N are tabulated 1..=16 / 1..=15, so 20 snaps to the edge.
        assert_eq!(microkernel_gflops(16, 20, 16, 0, 1), TABLE.get(15, 14, 2, 1));
        assert_eq!(microkernel_gflops(3, 4, 16, 1, 0), TABLE.get(2, 3, 2, 2));
    }

    #[test]
    fn test_microkernel_interpolates_k() {
        let lo = TABLE.get(7, 4, 4, 3);
        let hi = TABLE.get(7, 4, 5, 3);
        let mid = microkernel_gflops(8, 5, 48, 1, 1);
        assert!((mid - (lo + hi) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_microkernel_matches_table() {
        // 8 x 4 fits in one kernel: 2 registers, max width 10, one chunk.
        let gflops = A76.estimate_gflops(8, 4, 32, 0, 0).unwrap();
        assert!((gflops - TABLE.get(7, 3, 4, 0)).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_stays_within_kernel_range() {
        let gflops = A76.estimate_gflops(100, 50, 128, 0, 0).unwrap();
        let (min, max) = TABLE.values().iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        assert!(gflops >= min && gflops <= max);
    }
}
