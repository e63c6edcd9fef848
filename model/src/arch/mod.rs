//! Per-architecture throughput models.
//!
//! Every model answers the same question: how many GFLOPS does one
//! `m x n x k` GEMM primitive reach for a given operand layout. The table
//! backed models interpolate measured grids; [`Generic`] is an analytical
//! fallback for hardware without measurements.

pub mod a76;
pub mod generic;
pub mod m4;
pub mod zen5;

pub use a76::A76;
pub use generic::Generic;
pub use m4::M4;
pub use zen5::Zen5;

use crate::error::Result;

/// Target selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModelSelector {
    /// AMD Zen 5, interpolated table.
    Zen5,
    /// Apple M4, interpolated table.
    M4,
    /// ARM Cortex-A76, microkernel blocking over a table.
    A76,
    /// Analytical model parameterized by peak GFLOPS and vector width.
    #[default]
    Generic,
}

impl ModelSelector {
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic)
    }
}

/// Uniform throughput contract.
///
/// Implementations are pure: identical inputs give bit-identical outputs.
/// Extents are assumed validated (positive); transpose flags are clamped to
/// `{0, 1}`.
#[enum_delegate::register]
pub trait PerfModel {
    fn estimate_gflops(&self, m: i64, n: i64, k: i64, trans_a: i64, trans_b: i64) -> Result<f64>;
}

/// A ready-to-query model for one target.
#[enum_delegate::implement(PerfModel)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Model {
    Zen5(Zen5),
    M4(M4),
    A76(A76),
    Generic(Generic),
}

impl Model {
    /// Build the model for `selector`. Peak GFLOPS and vector size are only
    /// consulted (and validated) for the generic model.
    pub fn new(selector: ModelSelector, peak_gflops: f64, vector_size: i64) -> Result<Self> {
        Ok(match selector {
            ModelSelector::Zen5 => Self::Zen5(Zen5),
            ModelSelector::M4 => Self::M4(M4),
            ModelSelector::A76 => Self::A76(A76),
            ModelSelector::Generic => Self::Generic(Generic::new(peak_gflops, vector_size)?),
        })
    }

    pub fn selector(&self) -> ModelSelector {
        match self {
            Self::Zen5(_) => ModelSelector::Zen5,
            Self::M4(_) => ModelSelector::M4,
            Self::A76(_) => ModelSelector::A76,
            Self::Generic(_) => ModelSelector::Generic,
        }
    }
}
