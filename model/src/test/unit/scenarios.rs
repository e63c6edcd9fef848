//! End-to-end predictions from descriptors and shapes.

use tenmo_descriptor::{ContractionDescriptor, DimType, ExecRole, PrimitiveKind, PrimitiveShape, StrideLevel};

use crate::test::init_tracing;
use crate::{Error, ErrorKind, ModelSelector, Predictor, PredictorConfig, estimate_primitive, predict};

#[test]
fn test_generic_saturated_gemm() {
    init_tracing();
    let result = predict(&PrimitiveShape::gemm(128, 128, 128), ModelSelector::Generic, 1000.0, 16).unwrap();
    assert_eq!(result.gflops, 1000.0);
    assert!((result.time_seconds - 2.0 * 128f64.powi(3) / 1e12).abs() < 1e-18);
}

/// `seq(10) x brgemm(br=2, m=4, n=3, k=5)`.
fn brgemm_with_loop() -> ContractionDescriptor {
    use DimType::*;
    use ExecRole::*;

    ContractionDescriptor::new(
        vec![M, K, M, N, K],
        vec![Sequential, Primitive, Primitive, Primitive, Primitive],
        vec![10, 2, 4, 3, 5],
        StrideLevel::new(vec![80, 20, 1, 0, 4], vec![0, 15, 0, 5, 1], vec![12, 0, 1, 4, 0]),
    )
}

#[test]
fn test_brgemm_folds_batch_into_k_and_scales_time() {
    init_tracing();
    let predictor =
        Predictor::new(PredictorConfig::builder().model(ModelSelector::Generic).peak_gflops(500.0).vector_size(4).build())
            .unwrap();
    let desc = brgemm_with_loop();

    let shape = predictor.shape(&desc, PrimitiveKind::BrGemm).unwrap();
    assert_eq!(shape.outer_iterations, 10);
    assert_eq!(shape.effective_k(), 10);

    let whole = predictor.predict(&desc, PrimitiveKind::BrGemm).unwrap();
    let single = estimate_primitive(4, 3, 10, 0, 0, ModelSelector::Generic, 500.0, 4).unwrap();
    assert_eq!(whole.gflops, single.gflops);
    assert!((whole.time_seconds - 10.0 * single.time_seconds).abs() < 1e-18);
}

#[test]
fn test_negative_m_is_configuration_error() {
    for selector in [ModelSelector::Zen5, ModelSelector::M4, ModelSelector::A76] {
        let err = estimate_primitive(-1, 8, 8, 0, 0, selector, 0.0, 0).unwrap_err();
        assert_eq!(err, Error::NonPositiveDimension { dim: "m", value: -1 });
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    let err = predict(&PrimitiveShape::gemm(-1, 8, 8), ModelSelector::Zen5, 0.0, 0).unwrap_err();
    assert_eq!(err, Error::NonPositiveDimension { dim: "m", value: -1 });
}

#[test]
fn test_zero_extents_are_rejected() {
    assert_eq!(
        estimate_primitive(8, 0, 8, 0, 0, ModelSelector::M4, 0.0, 0).unwrap_err(),
        Error::NonPositiveDimension { dim: "n", value: 0 }
    );
    assert_eq!(
        predict(&PrimitiveShape::gemm(8, 8, 8).with_br(0), ModelSelector::M4, 0.0, 0).unwrap_err(),
        Error::NonPositiveDimension { dim: "br", value: 0 }
    );
}

#[test]
fn test_reported_gflops_is_per_primitive() {
    let shape = PrimitiveShape::gemm(64, 64, 64);
    let once = predict(&shape, ModelSelector::Zen5, 0.0, 0).unwrap();
    let many = predict(&shape.with_outer_iterations(1000), ModelSelector::Zen5, 0.0, 0).unwrap();
    assert_eq!(once.gflops, many.gflops);
    assert!((many.time_seconds / once.time_seconds - 1000.0).abs() < 1e-9);
}
