use test_case::test_case;

use crate::{
    ContractionDescriptor, DimType, Error, ExecRole, PrimitiveKind, StrideLevel, analyze, check_tag_order,
    compute_outer_iterations, extract_primitive_shape, extract_transpose_flags,
};

use DimType::*;
use ExecRole::*;

/// `seq(10) x brgemm(br=2, m=4, n=3, k=5)`.
fn brgemm_with_loop() -> ContractionDescriptor {
    ContractionDescriptor::new(
        vec![M, K, M, N, K],
        vec![Sequential, Primitive, Primitive, Primitive, Primitive],
        vec![10, 2, 4, 3, 5],
        StrideLevel::new(vec![80, 20, 1, 0, 4], vec![0, 15, 0, 5, 1], vec![12, 0, 1, 4, 0]),
    )
}

#[test]
fn test_gemm_shape() {
    let shape = extract_primitive_shape(&ContractionDescriptor::gemm(64, 48, 32), PrimitiveKind::Gemm).unwrap();
    assert_eq!((shape.m, shape.n, shape.k, shape.br), (64, 48, 32, 1));
    assert!(!shape.trans_a);
    assert!(!shape.trans_b);
    assert_eq!(shape.outer_iterations, 1);
}

#[test]
fn test_brgemm_shape_with_outer_loop() {
    let shape = analyze(&brgemm_with_loop(), PrimitiveKind::BrGemm, false).unwrap();
    assert_eq!((shape.br, shape.m, shape.n, shape.k), (2, 4, 3, 5));
    assert_eq!(shape.outer_iterations, 10);
    assert_eq!(shape.effective_k(), 10);
}

#[test]
fn test_positional_interpretation_ignores_tags() {
    // Tags say (N, M, K) but the slots are read as (M, N, K).
    let desc = ContractionDescriptor::new(
        vec![N, M, K],
        vec![Primitive; 3],
        vec![7, 9, 11],
        StrideLevel::new(vec![0, 1, 9], vec![1, 0, 7], vec![9, 1, 0]),
    );
    let shape = extract_primitive_shape(&desc, PrimitiveKind::Gemm).unwrap();
    assert_eq!((shape.m, shape.n, shape.k), (7, 9, 11));
}

#[test]
fn test_strict_tags_reject_mismatch() {
    let desc = ContractionDescriptor::new(
        vec![N, M, K],
        vec![Primitive; 3],
        vec![7, 9, 11],
        StrideLevel::new(vec![0, 1, 9], vec![1, 0, 7], vec![9, 1, 0]),
    );
    assert_eq!(
        analyze(&desc, PrimitiveKind::Gemm, true),
        Err(Error::TagMismatch { slot: "m", expected: M, found: N, index: 0 })
    );
}

#[test]
fn test_strict_tags_accept_batch_tagged_br() {
    let mut desc = brgemm_with_loop();
    desc.dim_types[1] = Batch;
    assert!(check_tag_order(&desc, PrimitiveKind::BrGemm).is_ok());
    assert!(check_tag_order(&brgemm_with_loop(), PrimitiveKind::BrGemm).is_ok());
}

#[test_case(PrimitiveKind::Gemm, 3, 4; "gemm_with_four")]
#[test_case(PrimitiveKind::BrGemm, 4, 3; "brgemm_with_three")]
fn test_primitive_count_mismatch(kind: PrimitiveKind, expected: usize, found: usize) {
    let desc = if found == 4 {
        let mut desc = brgemm_with_loop();
        desc.roles[0] = Sequential;
        desc
    } else {
        ContractionDescriptor::gemm(4, 4, 4)
    };
    assert_eq!(extract_primitive_shape(&desc, kind), Err(Error::PrimitiveCountMismatch { kind, expected, found }));
}

#[test]
fn test_transpose_flags_from_unit_strides() {
    let desc = ContractionDescriptor::new(
        vec![M, N, K],
        vec![Primitive; 3],
        vec![8, 8, 8],
        StrideLevel::new(vec![8, 0, 1], vec![0, 1, 8], vec![1, 8, 0]),
    );
    let flags = extract_transpose_flags(&desc).unwrap();
    assert!(flags.trans_a);
    assert!(flags.trans_b);
}

#[test]
fn test_transpose_uses_kernel_k_not_br() {
    // BR dimension has unit left stride, the kernel K does not.
    let mut desc = brgemm_with_loop();
    desc.strides[0].left = vec![80, 1, 1, 0, 4];
    assert!(!extract_transpose_flags(&desc).unwrap().trans_a);

    desc.strides[0].left = vec![80, 20, 4, 0, 1];
    assert!(extract_transpose_flags(&desc).unwrap().trans_a);
}

#[test]
fn test_transpose_only_reads_first_level() {
    let desc = ContractionDescriptor::gemm(16, 16, 16).with_stride_levels(vec![
        StrideLevel::new(vec![1, 0, 16], vec![0, 16, 1], vec![1, 16, 0]),
        StrideLevel::new(vec![16, 0, 1], vec![0, 1, 16], vec![1, 16, 0]),
    ]);
    let flags = extract_transpose_flags(&desc).unwrap();
    assert!(!flags.trans_a);
    assert!(!flags.trans_b);
}

#[test]
fn test_transpose_missing_k() {
    let desc = ContractionDescriptor::new(
        vec![M, N, M],
        vec![Primitive; 3],
        vec![4, 4, 4],
        StrideLevel::new(vec![1; 3], vec![1; 3], vec![1; 3]),
    );
    assert_eq!(extract_transpose_flags(&desc), Err(Error::MissingPrimitiveDim { dim: K }));
}

#[test]
fn test_transpose_short_stride_vector_is_an_error() {
    let mut desc = ContractionDescriptor::gemm(4, 4, 4);
    desc.strides[0].left.truncate(1);
    assert!(matches!(extract_transpose_flags(&desc), Err(Error::LengthMismatch { expected: 3, actual: 1, .. })));
}

#[test]
fn test_outer_iterations() {
    assert_eq!(compute_outer_iterations(&brgemm_with_loop()), Ok(10));
    assert_eq!(compute_outer_iterations(&ContractionDescriptor::gemm(3, 3, 3)), Ok(1));

    let mut desc = brgemm_with_loop();
    desc.roles[1] = Shared;
    desc.roles.insert(0, SpaceFillingCurve);
    desc.sizes.insert(0, 3);
    assert_eq!(compute_outer_iterations(&desc), Ok(60));
}

#[test]
fn test_outer_iterations_overflow() {
    let mut desc = brgemm_with_loop();
    desc.sizes[0] = i64::MAX;
    desc.roles[1] = Sequential;
    assert_eq!(compute_outer_iterations(&desc), Err(Error::IterationOverflow));
}

#[test]
fn test_analyze_validates_first() {
    let mut desc = brgemm_with_loop();
    desc.sizes[2] = -1;
    assert_eq!(analyze(&desc, PrimitiveKind::BrGemm, false), Err(Error::NonPositiveSize { index: 2, size: -1 }));
}
