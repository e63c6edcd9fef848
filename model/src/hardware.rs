//! Memory-hierarchy constants and the DRAM traffic estimate.

use tenmo_descriptor::{DataType, PrimitiveShape};

use crate::arch::ModelSelector;

/// Cache sizes in bytes, bandwidths in GB/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareConstants {
    pub l1_size: i64,
    pub l2_size: i64,
    /// Zero when the target has no L3.
    pub l3_size: i64,
    pub l1_bandwidth: f64,
    pub l2_bandwidth: f64,
    pub l3_bandwidth: f64,
    pub mem_bandwidth: f64,
}

const KIB: i64 = 1024;
const MIB: i64 = 1024 * KIB;

impl HardwareConstants {
    pub const ZEN5: Self = Self {
        l1_size: 32 * KIB,
        l2_size: MIB,
        l3_size: 32 * MIB,
        l1_bandwidth: 500.0,
        l2_bandwidth: 200.0,
        l3_bandwidth: 100.0,
        mem_bandwidth: 50.0,
    };

    pub const M4: Self = Self {
        l1_size: 128 * KIB,
        l2_size: 16 * MIB,
        l3_size: 0,
        l1_bandwidth: 912.0,
        l2_bandwidth: 912.0,
        l3_bandwidth: 0.0,
        mem_bandwidth: 66.0,
    };

    pub const A76: Self = Self {
        l1_size: 64 * KIB,
        l2_size: 256 * KIB,
        l3_size: 2 * MIB,
        l1_bandwidth: 100.0,
        l2_bandwidth: 50.0,
        l3_bandwidth: 30.0,
        mem_bandwidth: 20.0,
    };

    /// Conservative figures for unknown hardware.
    pub const GENERIC: Self = Self {
        l1_size: 32 * KIB,
        l2_size: 256 * KIB,
        l3_size: 8 * MIB,
        l1_bandwidth: 100.0,
        l2_bandwidth: 50.0,
        l3_bandwidth: 30.0,
        mem_bandwidth: 20.0,
    };

    pub const fn for_model(selector: ModelSelector) -> Self {
        match selector {
            ModelSelector::Zen5 => Self::ZEN5,
            ModelSelector::M4 => Self::M4,
            ModelSelector::A76 => Self::A76,
            ModelSelector::Generic => Self::GENERIC,
        }
    }
}

/// Whether compute or DRAM traffic dominates the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Bottleneck {
    ComputeBound,
    MemoryBound,
}

impl Bottleneck {
    pub fn classify(compute_seconds: f64, memory_seconds: f64) -> Self {
        if memory_seconds > compute_seconds { Self::MemoryBound } else { Self::ComputeBound }
    }
}

/// Bytes moved from DRAM when every primitive streams its three operands once.
pub fn memory_bytes(shape: &PrimitiveShape, dtype: DataType) -> i128 {
    let (m, n, k) = (shape.m as i128, shape.n as i128, shape.k as i128 * shape.br as i128);
    (m * k + k * n + m * n) * dtype.bytes() as i128 * shape.outer_iterations as i128
}

/// Seconds spent moving [`memory_bytes`] at the target's DRAM bandwidth.
pub fn memory_time(shape: &PrimitiveShape, dtype: DataType, hw: &HardwareConstants) -> f64 {
    memory_bytes(shape, dtype) as f64 / 1e9 / hw.mem_bandwidth
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_model_has_positive_dram_bandwidth() {
        for selector in ModelSelector::iter() {
            let hw = HardwareConstants::for_model(selector);
            assert!(hw.mem_bandwidth > 0.0, "{selector}");
            assert!(hw.l1_size > 0 && hw.l2_size >= hw.l1_size, "{selector}");
        }
    }

    #[test]
    fn test_memory_bytes_counts_all_operands() {
        let shape = PrimitiveShape::gemm(4, 3, 5).with_br(2).with_outer_iterations(10);
        // (4*10 + 10*3 + 4*3) * 4 bytes * 10 iterations
        assert_eq!(memory_bytes(&shape, DataType::Float32), 3280);
        assert_eq!(memory_bytes(&shape, DataType::Float64), 6560);
    }

    #[test]
    fn test_memory_time_uses_dram_bandwidth() {
        let shape = PrimitiveShape::gemm(1000, 1000, 1000);
        let seconds = memory_time(&shape, DataType::Float32, &HardwareConstants::A76);
        assert!((seconds - 12e6 / 1e9 / 20.0).abs() < 1e-15);
    }

    #[test]
    fn test_bottleneck() {
        assert_eq!(Bottleneck::classify(2.0, 1.0), Bottleneck::ComputeBound);
        assert_eq!(Bottleneck::classify(1.0, 2.0), Bottleneck::MemoryBound);
        assert_eq!(Bottleneck::MemoryBound.to_string(), "memory-bound");
    }
}
