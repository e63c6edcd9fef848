//! Validation and routing of primitive shapes to a model.
//!
//! This is the only place where caller-supplied extents are checked. Models
//! behind it assume positive extents and clamped transpose flags, so an
//! invalid shape is rejected before any table is touched.

use snafu::{OptionExt, ensure};
use tenmo_descriptor::PrimitiveShape;

use crate::arch::{Model, ModelSelector, PerfModel};
use crate::error::{
    DimensionOverflowSnafu, InvalidTransposeFlagSnafu, NonPositiveDimensionSnafu, NonPositiveThroughputSnafu, Result,
};

/// Predicted throughput and runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelResult {
    /// Throughput of a single primitive invocation.
    pub gflops: f64,
    /// Runtime of the whole contraction, i.e. all outer iterations.
    pub time_seconds: f64,
}

fn check_positive(dim: &'static str, value: i64) -> Result<()> {
    ensure!(value > 0, NonPositiveDimensionSnafu { dim, value });
    Ok(())
}

fn check_flag(operand: &'static str, value: i64) -> Result<()> {
    ensure!(value == 0 || value == 1, InvalidTransposeFlagSnafu { operand, value });
    Ok(())
}

/// Validate and estimate one primitive with raw integer transpose flags.
///
/// Returns the primitive GFLOPS and the runtime of a single invocation.
#[allow(clippy::too_many_arguments)]
pub fn estimate_primitive(
    m: i64,
    n: i64,
    k: i64,
    trans_a: i64,
    trans_b: i64,
    selector: ModelSelector,
    peak_gflops: f64,
    vector_size: i64,
) -> Result<ModelResult> {
    check_positive("m", m)?;
    check_positive("n", n)?;
    check_positive("k", k)?;
    check_flag("trans_a", trans_a)?;
    check_flag("trans_b", trans_b)?;

    let model = Model::new(selector, peak_gflops, vector_size)?;
    estimate_with(&model, m, n, k, trans_a, trans_b)
}

/// Run an already built model on a validated primitive.
pub(crate) fn estimate_with(model: &Model, m: i64, n: i64, k: i64, trans_a: i64, trans_b: i64) -> Result<ModelResult> {
    let gflops = model.estimate_gflops(m, n, k, trans_a, trans_b)?;
    ensure!(
        gflops.is_finite() && gflops > 0.0,
        NonPositiveThroughputSnafu { model: <&'static str>::from(model.selector()), gflops, m, n, k }
    );

    let flops = 2.0 * m as f64 * n as f64 * k as f64;
    let time_seconds = flops / (gflops * 1e9);
    tracing::debug!(model = %model.selector(), m, n, k, trans_a, trans_b, gflops, time_seconds, "primitive estimate");
    Ok(ModelResult { gflops, time_seconds })
}

/// Validate a shape's extents and fold the batch reduction into K.
pub fn effective_k(shape: &PrimitiveShape) -> Result<i64> {
    check_positive("m", shape.m)?;
    check_positive("n", shape.n)?;
    check_positive("k", shape.k)?;
    check_positive("br", shape.br)?;
    check_positive("outer_iterations", shape.outer_iterations)?;
    shape.k.checked_mul(shape.br).context(DimensionOverflowSnafu { dim: "k*br" })
}

/// Predict the whole contraction described by `shape`.
///
/// The primitive runs at the returned GFLOPS; the time covers all
/// `outer_iterations` invocations.
#[tracing::instrument(skip_all, fields(shape = %shape, model = %selector))]
pub fn predict(shape: &PrimitiveShape, selector: ModelSelector, peak_gflops: f64, vector_size: i64) -> Result<ModelResult> {
    let model = Model::new(selector, peak_gflops, vector_size)?;
    predict_with(&model, shape)
}

pub(crate) fn predict_with(model: &Model, shape: &PrimitiveShape) -> Result<ModelResult> {
    let k = effective_k(shape)?;
    let flags = shape.flags();
    let primitive = estimate_with(model, shape.m, shape.n, k, flags.trans_a as i64, flags.trans_b as i64)?;
    Ok(ModelResult { gflops: primitive.gflops, time_seconds: primitive.time_seconds * shape.outer_iterations as f64 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_validated_before_lookup() {
        let err = estimate_primitive(8, 8, 8, 2, 0, ModelSelector::Zen5, 0.0, 0).unwrap_err();
        assert_eq!(err, crate::Error::InvalidTransposeFlag { operand: "trans_a", value: 2 });
    }

    #[test]
    fn test_generic_needs_parameters() {
        let err = estimate_primitive(8, 8, 8, 0, 0, ModelSelector::Generic, 0.0, 16).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPeakGflops { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_tables_ignore_generic_parameters() {
        let with = estimate_primitive(64, 64, 64, 0, 0, ModelSelector::M4, 123.0, 7).unwrap();
        let without = estimate_primitive(64, 64, 64, 0, 0, ModelSelector::M4, 0.0, 0).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_effective_k_overflow() {
        let shape = PrimitiveShape::gemm(1, 1, i64::MAX).with_br(2);
        assert_eq!(effective_k(&shape).unwrap_err(), crate::Error::DimensionOverflow { dim: "k*br" });
    }
}
