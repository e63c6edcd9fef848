//! Performance model for GEMM-shaped contraction primitives.
//!
//! Given the [`PrimitiveShape`](tenmo_descriptor::PrimitiveShape) of a
//! contraction, this crate predicts the GFLOPS the primitive reaches on a
//! target and the runtime of the whole contraction. Predictions are pure
//! functions of their inputs and the compiled-in tables, so they can be
//! called concurrently and memoized freely.
//!
//! # Module Organization
//!
//! - [`arch`] - the per-target [`PerfModel`]s and the [`Model`] dispatch enum
//! - [`interpolation`] / [`table`] - bounded lookups over measured grids
//! - [`dispatch`] - validation and routing of shapes to a model
//! - [`predictor`] - descriptor-level facade with memory estimate
//! - [`hardware`] - cache and bandwidth constants per target
//! - [`config`] - [`PredictorConfig`] from builders or the environment
//!
//! # Example
//!
//! ```ignore
//! use tenmo_descriptor::{ContractionDescriptor, PrimitiveKind};
//! use tenmo_model::{ModelSelector, Predictor, PredictorConfig};
//!
//! let config = PredictorConfig::builder().model(ModelSelector::Zen5).build();
//! let predictor = Predictor::new(config)?;
//! let result = predictor.predict(&ContractionDescriptor::gemm(64, 64, 64), PrimitiveKind::Gemm)?;
//! ```

pub mod arch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hardware;
pub mod interpolation;
pub mod predictor;
pub mod table;

#[cfg(test)]
pub mod test;

pub use arch::{Model, ModelSelector, PerfModel};
pub use config::PredictorConfig;
pub use dispatch::{ModelResult, estimate_primitive, predict};
pub use error::{Error, ErrorKind, Result};
pub use hardware::{Bottleneck, HardwareConstants};
pub use predictor::{PerformanceReport, Predictor};
