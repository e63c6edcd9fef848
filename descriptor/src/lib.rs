//! Contraction descriptors for the tenmo cost model.
//!
//! A [`ContractionDescriptor`] is the compiler-facing description of a binary
//! tensor contraction: one entry per dimension, carrying the dimension's
//! algebraic type, how it is executed, its size, and the strides of the three
//! operands. The [`analyze`] module reduces it to the [`PrimitiveShape`] of the
//! GEMM (or batch-reduced GEMM) kernel that executes the innermost dimensions.
//!
//! # Module Organization
//!
//! - [`analyze`] - primitive size extraction, transpose detection, loop counts
//! - [`shape`] - the derived [`PrimitiveShape`]
//! - [`error`] - descriptor configuration errors

pub mod analyze;
pub mod error;
pub mod shape;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest_gen;

#[cfg(test)]
pub mod test;

use smallvec::SmallVec;
use snafu::ensure;

pub use analyze::{analyze, check_tag_order, compute_outer_iterations, extract_primitive_shape, extract_transpose_flags};
pub use error::{Error, Result};
pub use shape::{PrimitiveShape, PrimitiveSizes, TransposeFlags};

use error::*;

/// Algebraic role of a dimension in `C[M,N] += A[M,K] * B[K,N]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString, strum::VariantArray)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DimType {
    /// Appears in the left operand and the output.
    M,
    /// Appears in the right operand and the output.
    N,
    /// Contracted: appears in both inputs.
    K,
    /// Appears in all three tensors.
    Batch,
}

/// How a dimension is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString, strum::VariantArray)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExecRole {
    /// Iterated by a sequential outer loop.
    Sequential,
    /// Executed directly by the hardware kernel.
    Primitive,
    /// Distributed across threads.
    Shared,
    /// Traversed along a space-filling curve.
    SpaceFillingCurve,
}

impl ExecRole {
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive)
    }
}

/// Kind of compute primitive executing the primitive-role dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PrimitiveKind {
    /// Plain GEMM over (M, N, K).
    #[default]
    Gemm,
    /// Batch-reduced GEMM over (BR, M, N, K).
    BrGemm,
}

impl PrimitiveKind {
    /// Number of primitive-role dimensions this kind consumes.
    pub const fn primitive_dims(&self) -> usize {
        match self {
            Self::Gemm => 3,
            Self::BrGemm => 4,
        }
    }
}

/// Element type of the contraction operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumIter, strum::EnumString)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DataType {
    #[default]
    Float32,
    Float64,
}

impl DataType {
    pub const fn bytes(&self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

/// Operand strides at one nesting level, one entry per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StrideLevel {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
    pub output: Vec<i64>,
}

impl StrideLevel {
    pub fn new(left: Vec<i64>, right: Vec<i64>, output: Vec<i64>) -> Self {
        Self { left, right, output }
    }
}

/// Per-dimension description of a binary tensor contraction.
///
/// All sequences are parallel: entry `i` of every vector describes dimension
/// `i`. Only the first stride level takes part in analysis; deeper levels are
/// carried for callers that describe nested blockings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractionDescriptor {
    pub dim_types: Vec<DimType>,
    pub roles: Vec<ExecRole>,
    pub sizes: Vec<i64>,
    pub strides: Vec<StrideLevel>,
    pub dtype: DataType,
}

impl ContractionDescriptor {
    /// Create a descriptor with a single stride level.
    pub fn new(dim_types: Vec<DimType>, roles: Vec<ExecRole>, sizes: Vec<i64>, strides: StrideLevel) -> Self {
        Self { dim_types, roles, sizes, strides: vec![strides], dtype: DataType::default() }
    }

    /// Replace the stride levels.
    pub fn with_stride_levels(mut self, strides: Vec<StrideLevel>) -> Self {
        self.strides = strides;
        self
    }

    pub fn with_dtype(mut self, dtype: DataType) -> Self {
        self.dtype = dtype;
        self
    }

    /// Plain column-major `m x n x k` GEMM with no outer loops.
    ///
    /// Strides: left `M=1, K=m`; right `K=1, N=k`; output `M=1, N=m`.
    pub fn gemm(m: i64, n: i64, k: i64) -> Self {
        Self::new(
            vec![DimType::M, DimType::N, DimType::K],
            vec![ExecRole::Primitive; 3],
            vec![m, n, k],
            StrideLevel::new(vec![1, 0, m], vec![0, k, 1], vec![1, m, 0]),
        )
    }

    pub fn num_dims(&self) -> usize {
        self.dim_types.len()
    }

    /// Check the structural invariants: equal lengths, positive sizes, strides present.
    pub fn validate(&self) -> Result<()> {
        let expected = self.num_dims();
        ensure!(expected > 0, EmptyDescriptorSnafu);

        check_len("roles", expected, self.roles.len())?;
        check_len("sizes", expected, self.sizes.len())?;

        ensure!(!self.strides.is_empty(), MissingStridesSnafu);
        for (level, strides) in self.strides.iter().enumerate() {
            check_len(&format!("strides[{level}].left"), expected, strides.left.len())?;
            check_len(&format!("strides[{level}].right"), expected, strides.right.len())?;
            check_len(&format!("strides[{level}].output"), expected, strides.output.len())?;
        }

        if let Some((index, &size)) = self.sizes.iter().enumerate().find(|(_, size)| **size <= 0) {
            return NonPositiveSizeSnafu { index, size }.fail();
        }

        Ok(())
    }

    /// Indices of primitive-role dimensions in descriptor order.
    pub fn primitive_indices(&self) -> SmallVec<[usize; 4]> {
        self.roles.iter().enumerate().filter(|(_, role)| role.is_primitive()).map(|(i, _)| i).collect()
    }

    /// Product of the sizes of all dimensions with the given algebraic type.
    pub fn size_product(&self, dim: DimType) -> i64 {
        self.dim_types.iter().zip(&self.sizes).filter(|(ty, _)| **ty == dim).map(|(_, size)| *size).product()
    }

    /// The stride level used for analysis.
    pub fn primary_strides(&self) -> Result<&StrideLevel> {
        self.strides.first().ok_or(Error::MissingStrides)
    }
}

fn check_len(field: &str, expected: usize, actual: usize) -> Result<()> {
    ensure!(expected == actual, LengthMismatchSnafu { field, expected, actual });
    Ok(())
}
