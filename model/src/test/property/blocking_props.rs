use proptest::prelude::*;

use crate::arch::a76::blocking::{M_TILE, REGISTER_BUDGET, partition};
use crate::arch::a76::{self, A76};
use crate::arch::PerfModel;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Blocks tile the output exactly along both axes.
    #[test]
    fn partition_is_exact(m in 1i64..2048, n in 1i64..2048) {
        let plan = partition(m, n);
        prop_assert!(plan.verify().is_ok());
        prop_assert_eq!(plan.split.covered(), n);

        let first_column: i64 = plan.blocks[..2].iter().flatten().map(|b| b.covered_m()).sum();
        prop_assert_eq!(first_column, m);
    }

    /// FLOPs over all blocks equal those of the whole GEMM.
    #[test]
    fn flops_are_conserved(m in 1i64..2048, n in 1i64..2048, k in 1i64..4096) {
        let plan = partition(m, n);
        prop_assert_eq!(plan.checked_flops(k).unwrap(), 2 * m as i128 * n as i128 * k as i128);
    }

    /// Every emitted kernel respects the register budget and fits the table.
    #[test]
    fn kernels_fit_registers_and_table(m in 1i64..2048, n in 1i64..2048) {
        let plan = partition(m, n);
        for block in plan.iter() {
            prop_assert!(block.m >= 1 && block.m <= M_TILE);
            prop_assert!(block.n >= 1 && block.n <= plan.split.max_width);
            prop_assert!(a76::TABLE.m_values().contains(&block.m));
            prop_assert!(a76::TABLE.n_values().contains(&block.n));
        }
        let mr = plan.m_registers;
        prop_assert!(mr * plan.split.max_width + mr + plan.split.max_width <= REGISTER_BUDGET);
    }

    /// Chunk widths differ by at most one column.
    #[test]
    fn chunks_are_near_equal(m in 1i64..64, n in 1i64..2048) {
        let split = partition(m, n).split;
        if split.second_count > 0 {
            prop_assert_eq!(split.first_width, split.second_width + 1);
        }
    }

    /// The aggregate lies within the range of the kernels it is built from.
    #[test]
    fn aggregate_is_bounded_by_kernels(m in 1i64..512, n in 1i64..512, k in 1i64..256, trans_a in 0i64..=1, trans_b in 0i64..=1) {
        let plan = partition(m, n);
        let kernels: Vec<f64> = plan.iter().map(|b| a76::microkernel_gflops(b.m, b.n, k, trans_a, trans_b)).collect();
        let lo = kernels.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = kernels.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let gflops = A76.estimate_gflops(m, n, k, trans_a, trans_b).unwrap();
        prop_assert!(gflops >= lo * (1.0 - 1e-12) && gflops <= hi * (1.0 + 1e-12));
    }
}
