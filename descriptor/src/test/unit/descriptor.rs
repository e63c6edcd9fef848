use std::str::FromStr;

use test_case::test_case;

use crate::{ContractionDescriptor, DataType, DimType, Error, ExecRole, PrimitiveKind, StrideLevel};

fn three_dim(sizes: Vec<i64>) -> ContractionDescriptor {
    ContractionDescriptor::new(
        vec![DimType::M, DimType::N, DimType::K],
        vec![ExecRole::Primitive; 3],
        sizes,
        StrideLevel::new(vec![1, 0, 4], vec![0, 5, 1], vec![1, 4, 0]),
    )
}

#[test]
fn test_gemm_constructor_is_valid() {
    let desc = ContractionDescriptor::gemm(64, 32, 16);
    assert!(desc.validate().is_ok());
    assert_eq!(desc.num_dims(), 3);
    assert_eq!(desc.primitive_indices().as_slice(), &[0, 1, 2]);
    assert_eq!(desc.dtype, DataType::Float32);
}

#[test]
fn test_validate_empty() {
    let desc = ContractionDescriptor::new(vec![], vec![], vec![], StrideLevel::default());
    assert_eq!(desc.validate(), Err(Error::EmptyDescriptor));
}

#[test]
fn test_validate_role_length_mismatch() {
    let mut desc = three_dim(vec![4, 5, 6]);
    desc.roles.pop();
    assert_eq!(
        desc.validate(),
        Err(Error::LengthMismatch { field: "roles".to_string(), expected: 3, actual: 2 })
    );
}

#[test]
fn test_validate_stride_length_mismatch_in_deeper_level() {
    let desc = three_dim(vec![4, 5, 6]).with_stride_levels(vec![
        StrideLevel::new(vec![1, 0, 4], vec![0, 5, 1], vec![1, 4, 0]),
        StrideLevel::new(vec![1, 0], vec![0, 5, 1], vec![1, 4, 0]),
    ]);
    let err = desc.validate().unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { ref field, expected: 3, actual: 2 } if field == "strides[1].left"));
}

#[test]
fn test_validate_missing_strides() {
    let desc = three_dim(vec![4, 5, 6]).with_stride_levels(vec![]);
    assert_eq!(desc.validate(), Err(Error::MissingStrides));
}

#[test_case(vec![0, 5, 6], 0, 0; "zero_first")]
#[test_case(vec![4, -1, 6], 1, -1; "negative_middle")]
#[test_case(vec![4, 5, 0], 2, 0; "zero_last")]
fn test_validate_non_positive_size(sizes: Vec<i64>, index: usize, size: i64) {
    assert_eq!(three_dim(sizes).validate(), Err(Error::NonPositiveSize { index, size }));
}

#[test]
fn test_size_product_by_type() {
    let desc = ContractionDescriptor::new(
        vec![DimType::M, DimType::M, DimType::N, DimType::K, DimType::Batch],
        vec![ExecRole::Sequential, ExecRole::Primitive, ExecRole::Primitive, ExecRole::Primitive, ExecRole::Shared],
        vec![3, 16, 8, 4, 2],
        StrideLevel::new(vec![0; 5], vec![0; 5], vec![0; 5]),
    );
    assert_eq!(desc.size_product(DimType::M), 48);
    assert_eq!(desc.size_product(DimType::N), 8);
    assert_eq!(desc.size_product(DimType::Batch), 2);
}

#[test_case("m", DimType::M)]
#[test_case("N", DimType::N)]
#[test_case("batch", DimType::Batch)]
fn test_dim_type_parse(text: &str, expected: DimType) {
    assert_eq!(DimType::from_str(text).unwrap(), expected);
}

#[test]
fn test_exec_role_names() {
    assert_eq!(ExecRole::SpaceFillingCurve.to_string(), "space_filling_curve");
    assert_eq!(ExecRole::from_str("primitive").unwrap(), ExecRole::Primitive);
}

#[test]
fn test_primitive_kind_dims() {
    assert_eq!(PrimitiveKind::Gemm.primitive_dims(), 3);
    assert_eq!(PrimitiveKind::BrGemm.primitive_dims(), 4);
    assert_eq!(PrimitiveKind::from_str("brgemm").unwrap(), PrimitiveKind::BrGemm);
}

#[test]
fn test_dtype_bytes() {
    assert_eq!(DataType::Float32.bytes(), 4);
    assert_eq!(DataType::Float64.bytes(), 8);
}
