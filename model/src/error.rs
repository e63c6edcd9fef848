//! Error types for performance prediction.

use snafu::Snafu;

/// Result type for model operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The two failure categories of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an unusable shape, descriptor or model configuration.
    Configuration,
    /// The model broke one of its own exactness guarantees.
    InternalInvariant,
}

/// Errors that can occur while predicting primitive performance.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Descriptor analysis failed.
    #[snafu(display("invalid contraction descriptor: {source}"))]
    Descriptor { source: tenmo_descriptor::Error },

    /// GEMM extents and the batch-reduce count must be positive.
    #[snafu(display("dimension {dim} must be positive, got {value}"))]
    NonPositiveDimension { dim: &'static str, value: i64 },

    /// The folded K extent or the FLOP count does not fit into 64 bits.
    #[snafu(display("dimension {dim} overflows i64"))]
    DimensionOverflow { dim: &'static str },

    /// Transpose flags are 0 or 1.
    #[snafu(display("transpose flag {operand} must be 0 or 1, got {value}"))]
    InvalidTransposeFlag { operand: &'static str, value: i64 },

    #[snafu(display("generic model requires positive peak GFLOPS, got {value}"))]
    InvalidPeakGflops { value: f64 },

    #[snafu(display("generic model requires positive vector size, got {value}"))]
    InvalidVectorSize { value: i64 },

    #[snafu(display("unknown performance model '{name}'"))]
    UnknownModel { name: String },

    /// An environment variable holds a value that does not parse.
    #[snafu(display("invalid value '{value}' for {var}"))]
    InvalidEnvValue { var: &'static str, value: String },

    /// Microkernel blocks do not tile the extent exactly.
    #[snafu(display("blocking covers {covered} of {extent} along {axis}"))]
    PartitionWidthMismatch { axis: &'static str, extent: i64, covered: i64 },

    /// Per-block FLOPs do not add up to the whole GEMM.
    #[snafu(display("block flops {actual} differ from 2*m*n*k = {expected}"))]
    FlopsMismatch { expected: i128, actual: i128 },

    /// A model produced a zero, negative or non-finite throughput.
    #[snafu(display("model {model} produced non-positive throughput {gflops} for m{m}n{n}k{k}"))]
    NonPositiveThroughput { model: &'static str, gflops: f64, m: i64, n: i64, k: i64 },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PartitionWidthMismatch { .. } | Self::FlopsMismatch { .. } | Self::NonPositiveThroughput { .. } => {
                ErrorKind::InternalInvariant
            }
            _ => ErrorKind::Configuration,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}
