use tenmo_descriptor::{ContractionDescriptor, DataType, DimType, ExecRole, PrimitiveKind, StrideLevel};

use crate::arch::{A76, Model};
use crate::hardware::HardwareConstants;
use crate::test::init_tracing;
use crate::{Bottleneck, Error, ModelSelector, Predictor, PredictorConfig};

fn predictor(model: ModelSelector) -> Predictor {
    Predictor::new(PredictorConfig::builder().model(model).peak_gflops(1000.0).vector_size(16).build()).unwrap()
}

/// GEMM whose primitive slots are tagged `(N, M, K)`.
fn swapped_tags() -> ContractionDescriptor {
    use DimType::*;
    use ExecRole::*;

    ContractionDescriptor::new(
        vec![N, M, K],
        vec![Primitive, Primitive, Primitive],
        vec![8, 16, 32],
        StrideLevel::new(vec![0, 1, 16], vec![32, 0, 1], vec![16, 1, 0]),
    )
}

#[test]
fn test_generic_without_parameters_fails_at_construction() {
    let err = Predictor::new(PredictorConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidPeakGflops { .. }));
}

#[test]
fn test_table_models_need_no_parameters() {
    let predictor = Predictor::new(PredictorConfig::builder().model(ModelSelector::A76).build()).unwrap();
    assert_eq!(predictor.selector(), ModelSelector::A76);
    assert_eq!(predictor.model(), &Model::A76(A76));
    assert_eq!(predictor.hardware(), HardwareConstants::A76);
}

#[test]
fn test_predict_gflops_matches_predict() {
    let predictor = predictor(ModelSelector::M4);
    let desc = ContractionDescriptor::gemm(96, 48, 200);
    let result = predictor.predict(&desc, PrimitiveKind::Gemm).unwrap();
    assert_eq!(predictor.predict_gflops(&desc, PrimitiveKind::Gemm).unwrap(), result.gflops);

    let shape = predictor.shape(&desc, PrimitiveKind::Gemm).unwrap();
    assert_eq!(predictor.predict_shape(&shape).unwrap(), result);
}

#[test]
fn test_lenient_mode_reads_slots_positionally() {
    init_tracing();
    let shape = predictor(ModelSelector::Zen5).shape(&swapped_tags(), PrimitiveKind::Gemm).unwrap();
    assert_eq!((shape.m, shape.n, shape.k), (8, 16, 32));
}

#[test]
fn test_strict_mode_rejects_swapped_tags() {
    let config = PredictorConfig::builder().model(ModelSelector::Zen5).strict_tags(true).build();
    let err = Predictor::new(config).unwrap().predict(&swapped_tags(), PrimitiveKind::Gemm).unwrap_err();
    assert!(matches!(err, Error::Descriptor { source: tenmo_descriptor::Error::TagMismatch { slot: "m", .. } }));
    assert!(err.is_configuration());
}

#[test]
fn test_descriptor_errors_are_wrapped() {
    let mut desc = ContractionDescriptor::gemm(8, 8, 8);
    desc.roles[0] = ExecRole::Sequential;
    let err = predictor(ModelSelector::Zen5).predict(&desc, PrimitiveKind::Gemm).unwrap_err();
    assert!(matches!(
        err,
        Error::Descriptor { source: tenmo_descriptor::Error::PrimitiveCountMismatch { expected: 3, found: 2, .. } }
    ));
}

#[test]
fn test_report_totals() {
    let predictor = predictor(ModelSelector::Zen5);
    let desc = ContractionDescriptor::new(
        vec![DimType::Batch, DimType::M, DimType::N, DimType::K],
        vec![ExecRole::Sequential, ExecRole::Primitive, ExecRole::Primitive, ExecRole::Primitive],
        vec![6, 64, 64, 64],
        StrideLevel::new(vec![4096, 1, 0, 64], vec![4096, 0, 64, 1], vec![4096, 1, 64, 0]),
    )
    .with_dtype(DataType::Float64);

    let report = predictor.report(&desc, PrimitiveKind::Gemm).unwrap();
    assert_eq!(report.shape.outer_iterations, 6);
    assert_eq!(report.flops, 6.0 * 2.0 * 64f64.powi(3));
    assert_eq!(report.memory_bytes, 6 * 3 * 64 * 64 * 8);
    assert_eq!(report.result, predictor.predict(&desc, PrimitiveKind::Gemm).unwrap());
}

#[test]
fn test_report_bottleneck() {
    let predictor = predictor(ModelSelector::Generic);

    // A 1x1x1 kernel moves more bytes than it can hide behind its two FLOPs.
    let tiny = predictor.report(&ContractionDescriptor::gemm(1, 1, 1), PrimitiveKind::Gemm).unwrap();
    assert_eq!(tiny.bottleneck, Bottleneck::MemoryBound);

    let large = predictor.report(&ContractionDescriptor::gemm(1024, 1024, 1024), PrimitiveKind::Gemm).unwrap();
    assert_eq!(large.bottleneck, Bottleneck::ComputeBound);
}
