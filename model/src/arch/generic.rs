//! Analytical model for targets without a measured table.
//!
//! Efficiency is the product of three independent factors:
//! - M: rows that do not fill a whole vector-width kernel are penalised, less
//!   so the more full kernels there are to amortise them;
//! - N: ramps from 0.7 at `n = 1` to 1.0 at `n = 8`;
//! - K: ramps from 0.7 at `k = 1` to 1.0 at `k = 48`.

use snafu::ensure;

use crate::arch::PerfModel;
use crate::error::{InvalidPeakGflopsSnafu, InvalidVectorSizeSnafu, Result};

const K_SATURATION: i64 = 48;
const N_SATURATION: i64 = 8;
const RAMP_FLOOR: f64 = 0.7;
/// Penalty multiplier when M does not fill a single vector-width kernel.
const NO_KERNEL_PENALTY: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generic {
    peak_gflops: f64,
    vector_size: i64,
}

impl Generic {
    pub fn new(peak_gflops: f64, vector_size: i64) -> Result<Self> {
        ensure!(peak_gflops.is_finite() && peak_gflops > 0.0, InvalidPeakGflopsSnafu { value: peak_gflops });
        ensure!(vector_size > 0, InvalidVectorSizeSnafu { value: vector_size });
        Ok(Self { peak_gflops, vector_size })
    }

    pub fn peak_gflops(&self) -> f64 {
        self.peak_gflops
    }

    pub fn vector_size(&self) -> i64 {
        self.vector_size
    }

    /// M utilisation in `(0, 1]`.
    pub fn m_factor(&self, m: i64) -> f64 {
        let num_kernels = m / self.vector_size;
        let remainder = m % self.vector_size;
        if remainder == 0 {
            return 1.0;
        }

        let base_penalty = 0.5 * (1.0 - remainder as f64 / self.vector_size as f64);
        let penalty_reduction = if num_kernels > 0 { 1.0 / (1.0 + num_kernels as f64) } else { NO_KERNEL_PENALTY };
        let factor = 1.0 - base_penalty * penalty_reduction;

        // A lone partial kernel can not do worse than its lane occupancy.
        if num_kernels == 0 { factor.max(m as f64 / self.vector_size as f64) } else { factor }
    }

    pub fn n_factor(n: i64) -> f64 {
        if n >= N_SATURATION {
            return 1.0;
        }
        (RAMP_FLOOR + 0.3 * (n - 1) as f64 / N_SATURATION as f64).clamp(RAMP_FLOOR, 1.0)
    }

    pub fn k_factor(k: i64) -> f64 {
        if k >= K_SATURATION {
            return 1.0;
        }
        (RAMP_FLOOR + 0.3 * (k - 1) as f64 / (K_SATURATION - 1) as f64).clamp(RAMP_FLOOR, 1.0)
    }

    pub fn efficiency(&self, m: i64, n: i64, k: i64) -> f64 {
        self.m_factor(m) * Self::n_factor(n) * Self::k_factor(k)
    }
}

impl PerfModel for Generic {
    fn estimate_gflops(&self, m: i64, n: i64, k: i64, _trans_a: i64, _trans_b: i64) -> Result<f64> {
        Ok(self.peak_gflops * self.efficiency(m, n, k))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(Generic::new(0.0, 16), Err(crate::Error::InvalidPeakGflops { .. })));
        assert!(matches!(Generic::new(f64::NAN, 16), Err(crate::Error::InvalidPeakGflops { .. })));
        assert!(matches!(Generic::new(100.0, 0), Err(crate::Error::InvalidVectorSize { value: 0 })));
    }

    #[test_case(128, 1.0; "multiple_of_vector")]
    #[test_case(24, 1.0 - 0.25 / 2.0; "one_kernel_half_remainder")]
    #[test_case(40, 1.0 - 0.25 / 3.0; "two_kernels_half_remainder")]
    #[test_case(8, 0.5; "no_full_kernel_floors_at_occupancy")]
    fn test_m_factor(m: i64, expected: f64) {
        let model = Generic::new(1000.0, 16).unwrap();
        assert!((model.m_factor(m) - expected).abs() < 1e-12);
    }

    #[test_case(1, 0.7)]
    #[test_case(5, 0.85)]
    #[test_case(8, 1.0)]
    #[test_case(512, 1.0)]
    fn test_n_factor(n: i64, expected: f64) {
        assert!((Generic::n_factor(n) - expected).abs() < 1e-12);
    }

    #[test_case(1, 0.7)]
    #[test_case(48, 1.0)]
    #[test_case(0, 0.7; "clamped_below_domain")]
    fn test_k_factor(k: i64, expected: f64) {
        assert!((Generic::k_factor(k) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_saturated_shape_hits_peak() {
        let model = Generic::new(1000.0, 16).unwrap();
        assert_eq!(model.estimate_gflops(128, 128, 128, 0, 0).unwrap(), 1000.0);
    }
}
