use snafu::Snafu;

use crate::{DimType, PrimitiveKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Malformed contraction descriptors.
///
/// Every variant is a configuration problem on the caller's side; the analyzer
/// never reads past the descriptor's sequences to produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The descriptor has no dimensions at all.
    #[snafu(display("descriptor has no dimensions"))]
    EmptyDescriptor,

    /// One of the parallel sequences is shorter or longer than the type list.
    #[snafu(display("{field} has {actual} entries but the descriptor has {expected} dimensions"))]
    LengthMismatch { field: String, expected: usize, actual: usize },

    /// Dimension sizes must be strictly positive.
    #[snafu(display("dimension {index} has non-positive size {size}"))]
    NonPositiveSize { index: usize, size: i64 },

    /// No stride triple is present.
    #[snafu(display("descriptor carries no stride levels"))]
    MissingStrides,

    /// Wrong number of primitive-role dimensions for the primitive kind.
    #[snafu(display("{kind} primitive expects {expected} primitive dimensions, found {found}"))]
    PrimitiveCountMismatch { kind: PrimitiveKind, expected: usize, found: usize },

    /// Transpose detection needs a primitive dimension with this tag.
    #[snafu(display("no primitive dimension tagged {dim}"))]
    MissingPrimitiveDim { dim: DimType },

    /// Strict tag mode: a positional slot carries the wrong algebraic tag.
    #[snafu(display("primitive slot {slot} expects a {expected} dimension, found {found} at index {index}"))]
    TagMismatch { slot: &'static str, expected: DimType, found: DimType, index: usize },

    /// Product of loop sizes does not fit into 64 bits.
    #[snafu(display("outer iteration count overflows i64"))]
    IterationOverflow,
}
