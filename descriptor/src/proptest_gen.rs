use crate::*;
use proptest::prelude::*;

#[rustfmt::skip]
impl ExecRole {
    pub fn loop_generator() -> impl Strategy<Value = Self> {
        prop_oneof![Just(Self::Sequential), Just(Self::Shared), Just(Self::SpaceFillingCurve)]
    }
}

impl ContractionDescriptor {
    /// Well-formed descriptors: primitive dims tagged in slot order, surrounded by
    /// up to three outer loop dimensions, with column-major primitive strides.
    pub fn arb(kind: PrimitiveKind, max_size: i64) -> impl Strategy<Value = Self> {
        let prim_sizes = prop::collection::vec(1..=max_size, kind.primitive_dims());
        let loops = prop::collection::vec((ExecRole::loop_generator(), 1i64..=8), 0..=3);
        (prim_sizes, loops, any::<bool>(), any::<bool>()).prop_map(move |(prim, loops, trans_a, trans_b)| {
            let mut dim_types = Vec::new();
            let mut roles = Vec::new();
            let mut sizes = Vec::new();
            for (role, size) in &loops {
                dim_types.push(DimType::Batch);
                roles.push(*role);
                sizes.push(*size);
            }

            let prim_types: &[DimType] = match kind {
                PrimitiveKind::Gemm => &[DimType::M, DimType::N, DimType::K],
                PrimitiveKind::BrGemm => &[DimType::K, DimType::M, DimType::N, DimType::K],
            };
            dim_types.extend_from_slice(prim_types);
            roles.extend(std::iter::repeat_n(ExecRole::Primitive, prim.len()));
            sizes.extend_from_slice(&prim);

            // Non-unit placeholder strides everywhere, then the layout-defining ones.
            let n = dim_types.len();
            let mut left = vec![7; n];
            let mut right = vec![7; n];
            let output = vec![7; n];
            let k_idx = n - 1;
            let n_idx = n - 2;
            left[k_idx] = if trans_a { 1 } else { 3 };
            right[n_idx] = if trans_b { 1 } else { 3 };

            ContractionDescriptor::new(dim_types, roles, sizes, StrideLevel::new(left, right, output))
        })
    }
}
