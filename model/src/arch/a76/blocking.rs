//! Microkernel blocking of one GEMM onto the Cortex-A76 register file.
//!
//! M is cut into 16-row tiles plus a remainder tile. For the active M tile the
//! widest N tile that fits the 32-register budget is found, and N is then split
//! into near-equal chunks of at most that width. The result is at most four
//! distinct microkernels, each repeated some number of times.

use smallvec::SmallVec;
use snafu::ensure;

use crate::error::{FlopsMismatchSnafu, NonPositiveThroughputSnafu, PartitionWidthMismatchSnafu, Result};

/// Rows per full M tile.
pub const M_TILE: i64 = 16;
/// FP32 lanes per vector register.
pub const LANE: i64 = 4;
/// Architectural vector registers.
pub const REGISTER_BUDGET: i64 = 32;

/// One microkernel shape and how often it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroBlock {
    pub m: i64,
    pub n: i64,
    pub m_reps: i64,
    pub n_reps: i64,
}

impl MicroBlock {
    pub fn is_empty(&self) -> bool {
        self.m == 0 || self.n == 0 || self.m_reps == 0 || self.n_reps == 0
    }

    /// Rows covered by all repetitions of this block.
    pub fn covered_m(&self) -> i64 {
        self.m * self.m_reps
    }

    /// Columns covered by all repetitions of this block.
    pub fn covered_n(&self) -> i64 {
        self.n * self.n_reps
    }

    /// FLOPs of all repetitions at depth `k`.
    pub fn flops(&self, k: i64) -> i128 {
        2 * self.m as i128 * self.n as i128 * self.m_reps as i128 * self.n_reps as i128 * k as i128
    }
}

/// Near-equal split of N into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NSplit {
    /// Widest admissible N tile for the active M tile.
    pub max_width: i64,
    pub first_width: i64,
    pub first_count: i64,
    pub second_width: i64,
    pub second_count: i64,
}

impl NSplit {
    pub fn covered(&self) -> i64 {
        self.first_width * self.first_count + self.second_width * self.second_count
    }
}

/// The full blocking plan of an `m x n` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPartition {
    pub m: i64,
    pub n: i64,
    pub full_tiles: i64,
    pub m_remainder: i64,
    pub m_registers: i64,
    pub split: NSplit,
    /// `full x first`, `rest x first`, `full x second`, `rest x second`. Empty blocks are `None`.
    pub blocks: [Option<MicroBlock>; 4],
}

impl BlockPartition {
    pub fn iter(&self) -> impl Iterator<Item = &MicroBlock> {
        self.blocks.iter().flatten()
    }

    /// Check that the blocks tile `m` and `n` exactly.
    pub fn verify(&self) -> Result<()> {
        let covered_n = self.split.covered();
        ensure!(covered_n == self.n, PartitionWidthMismatchSnafu { axis: "n", extent: self.n, covered: covered_n });

        let covered_m = M_TILE * self.full_tiles + self.m_remainder;
        ensure!(covered_m == self.m, PartitionWidthMismatchSnafu { axis: "m", extent: self.m, covered: covered_m });

        // Each block column (first / second N chunk) must also cover all of m.
        for column in [&self.blocks[0..2], &self.blocks[2..4]] {
            let rows: i64 = column.iter().flatten().map(MicroBlock::covered_m).sum();
            if column.iter().any(Option::is_some) {
                ensure!(rows == self.m, PartitionWidthMismatchSnafu { axis: "m", extent: self.m, covered: rows });
            }
        }
        Ok(())
    }

    /// Total FLOPs over all blocks at depth `k`, checked against `2*m*n*k`.
    pub fn checked_flops(&self, k: i64) -> Result<i128> {
        let expected = 2 * self.m as i128 * self.n as i128 * k as i128;
        let actual: i128 = self.iter().map(|b| b.flops(k)).sum();
        ensure!(actual == expected, FlopsMismatchSnafu { expected, actual });
        Ok(actual)
    }
}

/// Accumulator registers needed by an M tile of `width` rows.
fn registers_for(width: i64) -> i64 {
    (width + LANE - 1) / LANE
}

fn split_n(n: i64, m_registers: i64) -> NSplit {
    // Largest w with `m_registers * w + m_registers + w <= REGISTER_BUDGET`, capped at n.
    let max_width = n.min(((REGISTER_BUDGET - m_registers) / (m_registers + 1)).max(1));

    let chunks = (n - 1) / max_width + 1;
    let modulo = n % chunks;
    let narrow = n / chunks;

    if modulo == 0 {
        NSplit { max_width, first_width: narrow, first_count: chunks, second_width: 0, second_count: 0 }
    } else {
        let wide = (narrow + 1).min(max_width);
        NSplit { max_width, first_width: wide, first_count: modulo, second_width: narrow, second_count: chunks - modulo }
    }
}

/// Plan the microkernel blocks for an `m x n` output. Both extents must be positive.
pub fn partition(m: i64, n: i64) -> BlockPartition {
    debug_assert!(m > 0 && n > 0, "partition requires positive extents");

    let (full_tiles, m_remainder) = if m < M_TILE { (0, m) } else { (m / M_TILE, m % M_TILE) };
    let m_registers = if full_tiles > 0 { registers_for(M_TILE) } else { registers_for(m_remainder) };
    let split = split_n(n, m_registers);

    let block = |bm: i64, m_reps: i64, bn: i64, n_reps: i64| {
        let block = MicroBlock { m: bm, n: bn, m_reps, n_reps };
        (!block.is_empty()).then_some(block)
    };
    let blocks = [
        block(M_TILE, full_tiles, split.first_width, split.first_count),
        block(m_remainder, 1, split.first_width, split.first_count),
        block(M_TILE, full_tiles, split.second_width, split.second_count),
        block(m_remainder, 1, split.second_width, split.second_count),
    ];

    let plan = BlockPartition { m, n, full_tiles, m_remainder, m_registers, split, blocks };
    tracing::trace!(m, n, full_tiles, m_remainder, m_registers, max_width = split.max_width, "a76 blocking");
    plan
}

/// Aggregate throughput of the blocked GEMM.
///
/// `microkernel` reports the GFLOPS of one `(block_m, block_n)` kernel at depth
/// `k`. Blocks run back to back, so the aggregate is total FLOPs over total
/// time.
pub fn aggregate_gflops(plan: &BlockPartition, k: i64, mut microkernel: impl FnMut(i64, i64) -> f64) -> Result<f64> {
    if let Err(err) = plan.verify().and_then(|()| plan.checked_flops(k).map(|_| ())) {
        tracing::error!(m = plan.m, n = plan.n, k, %err, "a76 blocking invariant violated");
        return Err(err);
    }

    let mut timings: SmallVec<[(f64, f64); 4]> = SmallVec::new();
    for block in plan.iter() {
        let gflops = microkernel(block.m, block.n);
        ensure!(
            gflops.is_finite() && gflops > 0.0,
            NonPositiveThroughputSnafu { model: "a76", gflops, m: block.m, n: block.n, k }
        );
        let flops = block.flops(k) as f64;
        timings.push((flops, flops / gflops));
    }

    let (flops, time) = timings.iter().fold((0.0, 0.0), |(f, t), &(bf, bt)| (f + bf, t + bt));
    Ok(flops / time)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_small_m_is_all_remainder() {
        let plan = partition(5, 7);
        assert_eq!((plan.full_tiles, plan.m_remainder, plan.m_registers), (0, 5, 2));
        assert!(plan.blocks[0].is_none());
        assert!(plan.blocks[2].is_none());
        plan.verify().unwrap();
    }

    #[test]
    fn test_register_budget_for_full_tile() {
        // 4 registers per row strip: 4*n1 + 4 + n1 <= 32 gives n1 = 5.
        let plan = partition(32, 64);
        assert_eq!(plan.m_registers, 4);
        assert_eq!(plan.split.max_width, 5);
        // 64 columns in 13 chunks: 12 of width 5 and one of width 4.
        assert_eq!(plan.split, NSplit { max_width: 5, first_width: 5, first_count: 12, second_width: 4, second_count: 1 });
        assert_eq!(plan.blocks[1], None);
        plan.verify().unwrap();
    }

    #[test]
    fn test_huge_n_splits_without_walking_n() {
        let plan = partition(16, 1 << 40);
        assert_eq!(plan.split.max_width, 5);
        assert_eq!(plan.split.covered(), 1 << 40);
        plan.verify().unwrap();
        assert_eq!(plan.checked_flops(3).unwrap(), 2 * 16 * (1i128 << 40) * 3);
    }

    #[test_case(1, 15)]
    #[test_case(2, 10)]
    #[test_case(3, 7)]
    #[test_case(4, 5)]
    fn test_max_width_matches_register_budget(m_registers: i64, expected: i64) {
        let split = split_n(1000, m_registers);
        assert_eq!(split.max_width, expected);
        let w = split.max_width;
        assert!(m_registers * w + m_registers + w <= REGISTER_BUDGET);
        assert!(m_registers * (w + 1) + m_registers + w + 1 > REGISTER_BUDGET);
    }

    #[test]
    fn test_uniform_split_collapses() {
        let plan = partition(16, 10);
        assert_eq!(plan.split.first_width * plan.split.first_count, 10);
        assert_eq!(plan.split.second_count, 0);
        assert!(plan.blocks[2].is_none() && plan.blocks[3].is_none());
    }

    #[test_case(1, 1)]
    #[test_case(17, 3)]
    #[test_case(100, 37)]
    #[test_case(255, 257)]
    fn test_flops_are_conserved(m: i64, n: i64) {
        let plan = partition(m, n);
        plan.verify().unwrap();
        assert_eq!(plan.checked_flops(9).unwrap(), 2 * m as i128 * n as i128 * 9);
    }

    #[test]
    fn test_aggregate_of_uniform_kernel_is_that_kernel() {
        let plan = partition(40, 23);
        let gflops = aggregate_gflops(&plan, 64, |_, _| 12.5).unwrap();
        assert!((gflops - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_broken_partition_is_reported() {
        let mut plan = partition(40, 23);
        plan.split.first_count += 1;
        let err = aggregate_gflops(&plan, 8, |_, _| 1.0).unwrap_err();
        assert!(matches!(err, crate::Error::PartitionWidthMismatch { axis: "n", .. }));
    }

    #[test]
    fn test_flop_drift_is_reported() {
        let mut plan = partition(40, 23);
        if let Some(block) = plan.blocks[0].as_mut() {
            block.m_reps += 1;
        }
        assert_eq!(plan.split.covered(), 23);

        let err = plan.checked_flops(8).unwrap_err();
        assert!(matches!(err, crate::Error::FlopsMismatch { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::InternalInvariant);
    }

    #[test]
    fn test_zero_kernel_throughput_is_reported() {
        let plan = partition(4, 4);
        let err = aggregate_gflops(&plan, 8, |_, _| 0.0).unwrap_err();
        assert!(matches!(err, crate::Error::NonPositiveThroughput { model: "a76", .. }));
    }
}
