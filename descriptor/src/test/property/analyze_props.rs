use proptest::prelude::*;

use crate::{ContractionDescriptor, DimType, ExecRole, PrimitiveKind, StrideLevel, analyze, check_tag_order};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Outer iterations times primitive volume covers every descriptor element.
    #[test]
    fn shape_volume_matches_descriptor(desc in ContractionDescriptor::arb(PrimitiveKind::BrGemm, 64)) {
        let shape = analyze(&desc, PrimitiveKind::BrGemm, true).unwrap();
        let total: i64 = desc.sizes.iter().product();
        prop_assert_eq!(shape.outer_iterations * shape.br * shape.m * shape.n * shape.k, total);
    }

    /// Generated descriptors are in slot order, so lenient and strict analysis agree.
    #[test]
    fn strict_and_lenient_agree(desc in ContractionDescriptor::arb(PrimitiveKind::Gemm, 256)) {
        prop_assert!(check_tag_order(&desc, PrimitiveKind::Gemm).is_ok());
        prop_assert_eq!(analyze(&desc, PrimitiveKind::Gemm, true), analyze(&desc, PrimitiveKind::Gemm, false));
    }

    /// Changing the role of a primitive dimension always breaks the count, never panics.
    #[test]
    fn demoted_primitive_is_rejected(desc in ContractionDescriptor::arb(PrimitiveKind::Gemm, 32), role in ExecRole::loop_generator()) {
        let mut desc = desc;
        let last = desc.num_dims() - 1;
        desc.roles[last] = role;
        prop_assert!(analyze(&desc, PrimitiveKind::Gemm, false).is_err());
    }

    /// Arbitrary tags, roles and stride lengths produce a shape or an error, never a panic.
    #[test]
    fn arbitrary_descriptors_never_panic(
        dims in prop::collection::vec((any::<DimType>(), any::<ExecRole>(), 1i64..16), 0..7),
        stride_len in 0usize..7,
        kind in any::<PrimitiveKind>(),
        strict in any::<bool>(),
    ) {
        let (dim_types, roles, sizes): (Vec<_>, Vec<_>, Vec<_>) =
            dims.into_iter().fold((vec![], vec![], vec![]), |(mut t, mut r, mut s), (ty, role, size)| {
                t.push(ty);
                r.push(role);
                s.push(size);
                (t, r, s)
            });
        let strides = StrideLevel::new(vec![1; stride_len], vec![1; stride_len], vec![1; stride_len]);
        let desc = ContractionDescriptor::new(dim_types, roles, sizes, strides);

        if let Ok(shape) = analyze(&desc, kind, strict) {
            prop_assert_eq!(desc.primitive_indices().len(), kind.primitive_dims());
            prop_assert!(shape.m > 0 && shape.n > 0 && shape.k > 0 && shape.br > 0);
        }
    }
}
