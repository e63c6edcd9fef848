//! Dimension analysis: descriptor to primitive shape.
//!
//! Primitive sizes are read **positionally**. For a plain GEMM the primitive-role
//! dimensions, in descriptor order, are `(M, N, K)`; for a batch-reduced GEMM
//! they are `(BR, M, N, K)`. Algebraic tags are not used to reorder them. By
//! default a tag that disagrees with its slot is only logged; [`check_tag_order`]
//! turns the disagreement into an error for callers that opt in.

use snafu::ensure;

use crate::error::*;
use crate::{ContractionDescriptor, DimType, PrimitiveKind, PrimitiveShape, PrimitiveSizes, TransposeFlags};

/// Slot names and the tags accepted in each slot, per primitive kind.
const GEMM_SLOTS: [(&str, &[DimType]); 3] = [("m", &[DimType::M]), ("n", &[DimType::N]), ("k", &[DimType::K])];
const BRGEMM_SLOTS: [(&str, &[DimType]); 4] = [
    ("br", &[DimType::K, DimType::Batch]),
    ("m", &[DimType::M]),
    ("n", &[DimType::N]),
    ("k", &[DimType::K]),
];

fn slots(kind: PrimitiveKind) -> &'static [(&'static str, &'static [DimType])] {
    match kind {
        PrimitiveKind::Gemm => &GEMM_SLOTS,
        PrimitiveKind::BrGemm => &BRGEMM_SLOTS,
    }
}

/// Read the primitive sizes positionally.
pub fn primitive_sizes(desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<PrimitiveSizes> {
    let sizes: smallvec::SmallVec<[i64; 4]> = desc
        .roles
        .iter()
        .zip(&desc.sizes)
        .filter(|(role, _)| role.is_primitive())
        .map(|(_, size)| *size)
        .collect();

    let expected = kind.primitive_dims();
    ensure!(sizes.len() == expected, PrimitiveCountMismatchSnafu { kind, expected, found: sizes.len() });

    Ok(match kind {
        PrimitiveKind::Gemm => PrimitiveSizes { br: 1, m: sizes[0], n: sizes[1], k: sizes[2] },
        PrimitiveKind::BrGemm => PrimitiveSizes { br: sizes[0], m: sizes[1], n: sizes[2], k: sizes[3] },
    })
}

/// Find the first slot whose dimension carries an unexpected tag.
fn first_tag_mismatch(desc: &ContractionDescriptor, kind: PrimitiveKind) -> Option<Error> {
    desc.primitive_indices().into_iter().zip(slots(kind)).find_map(|(index, &(slot, accepted))| {
        let found = *desc.dim_types.get(index)?;
        (!accepted.contains(&found)).then(|| Error::TagMismatch { slot, expected: accepted[0], found, index })
    })
}

/// Reject descriptors whose primitive dimensions are not tagged in slot order.
pub fn check_tag_order(desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<()> {
    match first_tag_mismatch(desc, kind) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Detect operand layouts from the first stride level.
///
/// `trans_a` holds when the left stride of the primitive K-tagged dimension is 1,
/// `trans_b` when the right stride of the primitive N-tagged dimension is 1. With
/// several primitive dimensions of the same tag (the BR slot of a batch-reduced
/// GEMM is K-tagged), the last one in descriptor order is the kernel's own axis.
pub fn extract_transpose_flags(desc: &ContractionDescriptor) -> Result<TransposeFlags> {
    let strides = desc.primary_strides()?;

    let last_primitive = |dim: DimType| {
        desc.primitive_indices().into_iter().rfind(|&i| desc.dim_types.get(i) == Some(&dim))
    };
    let k_idx = last_primitive(DimType::K).ok_or(Error::MissingPrimitiveDim { dim: DimType::K })?;
    let n_idx = last_primitive(DimType::N).ok_or(Error::MissingPrimitiveDim { dim: DimType::N })?;

    let left_k = *strides.left.get(k_idx).ok_or_else(|| stride_len_error("left", desc, strides.left.len()))?;
    let right_n = *strides.right.get(n_idx).ok_or_else(|| stride_len_error("right", desc, strides.right.len()))?;

    Ok(TransposeFlags { trans_a: left_k == 1, trans_b: right_n == 1 })
}

fn stride_len_error(operand: &str, desc: &ContractionDescriptor, actual: usize) -> Error {
    Error::LengthMismatch { field: format!("strides[0].{operand}"), expected: desc.num_dims(), actual }
}

/// Number of primitive invocations: product of all non-primitive dimension sizes.
pub fn compute_outer_iterations(desc: &ContractionDescriptor) -> Result<i64> {
    desc.roles
        .iter()
        .zip(&desc.sizes)
        .filter(|(role, _)| !role.is_primitive())
        .try_fold(1i64, |acc, (_, size)| acc.checked_mul(*size))
        .ok_or(Error::IterationOverflow)
}

/// Derive the full primitive shape without structural validation.
///
/// Tag/slot disagreements are logged, never corrected.
pub fn extract_primitive_shape(desc: &ContractionDescriptor, kind: PrimitiveKind) -> Result<PrimitiveShape> {
    let sizes = primitive_sizes(desc, kind)?;

    if let Some(mismatch) = first_tag_mismatch(desc, kind) {
        tracing::warn!(%kind, %mismatch, "primitive dimension tag disagrees with its position; using position");
    }

    let flags = extract_transpose_flags(desc)?;
    let outer_iterations = compute_outer_iterations(desc)?;

    let shape = PrimitiveShape::from_parts(sizes, flags, outer_iterations);
    tracing::trace!(%kind, %shape, "extracted primitive shape");
    Ok(shape)
}

/// Validate a descriptor and derive its primitive shape.
pub fn analyze(desc: &ContractionDescriptor, kind: PrimitiveKind, strict_tags: bool) -> Result<PrimitiveShape> {
    desc.validate()?;
    if strict_tags {
        check_tag_order(desc, kind)?;
    }
    extract_primitive_shape(desc, kind)
}
