//! Descriptor-level prediction entry point.

use snafu::ResultExt;
use tenmo_descriptor::{ContractionDescriptor, PrimitiveKind, PrimitiveShape};

use crate::arch::{Model, ModelSelector};
use crate::config::PredictorConfig;
use crate::dispatch::{self, ModelResult};
use crate::error::{DescriptorSnafu, Result};
use crate::hardware::{Bottleneck, HardwareConstants, memory_bytes, memory_time};

/// Full cost breakdown of one contraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    pub result: ModelResult,
    pub shape: PrimitiveShape,
    /// FLOPs of the whole contraction.
    pub flops: f64,
    /// DRAM traffic of the whole contraction.
    pub memory_bytes: i128,
    pub memory_time_seconds: f64,
    pub bottleneck: Bottleneck,
}

/// A configured model ready to price descriptors.
///
/// Construction validates the configuration once; every later call only
/// validates the descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predictor {
    model: Model,
    strict_tags: bool,
}

impl Predictor {
    pub fn new(config: PredictorConfig) -> Result<Self> {
        let model = Model::new(config.model, config.peak_gflops, config.vector_size)?;
        Ok(Self { model, strict_tags: config.strict_tags })
    }

    /// Build from `TENMO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(PredictorConfig::from_env()?)
    }

    pub fn selector(&self) -> ModelSelector {
        self.model.selector()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn hardware(&self) -> HardwareConstants {
        HardwareConstants::for_model(self.selector())
    }

    /// Derive the primitive shape of `desc`.
    pub fn shape(&self, desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<PrimitiveShape> {
        tenmo_descriptor::analyze(desc, kind, self.strict_tags).context(DescriptorSnafu)
    }

    /// Whole-contraction runtime and per-primitive throughput.
    #[tracing::instrument(skip_all, fields(model = %self.selector(), %kind))]
    pub fn predict(&self, desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<ModelResult> {
        let shape = self.shape(desc, kind)?;
        dispatch::predict_with(&self.model, &shape)
    }

    /// Per-primitive throughput only.
    pub fn predict_gflops(&self, desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<f64> {
        Ok(self.predict(desc, kind)?.gflops)
    }

    /// Predict a shape that was derived elsewhere.
    pub fn predict_shape(&self, shape: &PrimitiveShape) -> Result<ModelResult> {
        dispatch::predict_with(&self.model, shape)
    }

    #[tracing::instrument(skip_all, fields(model = %self.selector(), %kind))]
    pub fn report(&self, desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<PerformanceReport> {
        let shape = self.shape(desc, kind)?;
        let result = dispatch::predict_with(&self.model, &shape)?;

        let hw = self.hardware();
        let flops = shape.flops() * shape.outer_iterations as f64;
        let memory_time_seconds = memory_time(&shape, desc.dtype, &hw);
        let bottleneck = Bottleneck::classify(result.time_seconds, memory_time_seconds);
        tracing::debug!(flops, time_seconds = result.time_seconds, memory_time_seconds, %bottleneck, "performance report");

        Ok(PerformanceReport {
            result,
            shape,
            flops,
            memory_bytes: memory_bytes(&shape, desc.dtype),
            memory_time_seconds,
            bottleneck,
        })
    }
}
