//! Canonical primitive shape derived from a descriptor.

use std::fmt;

/// Sizes of the primitive-role dimensions, read positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveSizes {
    pub br: i64,
    pub m: i64,
    pub n: i64,
    pub k: i64,
}

/// Operand layouts as seen by the kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TransposeFlags {
    /// Left operand is contiguous along K.
    pub trans_a: bool,
    /// Right operand is contiguous along N.
    pub trans_b: bool,
}

/// The GEMM or batch-reduced GEMM executed per outer-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveShape {
    pub m: i64,
    pub n: i64,
    pub k: i64,
    /// Batch-reduce count; 1 for plain GEMM.
    pub br: i64,
    pub trans_a: bool,
    pub trans_b: bool,
    /// Number of primitive invocations issued by the surrounding loops.
    pub outer_iterations: i64,
}

impl PrimitiveShape {
    /// Plain non-transposed GEMM executed once.
    pub const fn gemm(m: i64, n: i64, k: i64) -> Self {
        Self { m, n, k, br: 1, trans_a: false, trans_b: false, outer_iterations: 1 }
    }

    pub fn from_parts(sizes: PrimitiveSizes, flags: TransposeFlags, outer_iterations: i64) -> Self {
        Self {
            m: sizes.m,
            n: sizes.n,
            k: sizes.k,
            br: sizes.br,
            trans_a: flags.trans_a,
            trans_b: flags.trans_b,
            outer_iterations,
        }
    }

    pub const fn with_transpose(mut self, trans_a: bool, trans_b: bool) -> Self {
        self.trans_a = trans_a;
        self.trans_b = trans_b;
        self
    }

    pub const fn with_br(mut self, br: i64) -> Self {
        self.br = br;
        self
    }

    pub const fn with_outer_iterations(mut self, outer_iterations: i64) -> Self {
        self.outer_iterations = outer_iterations;
        self
    }

    /// K extent seen by the kernel once the batch reduction is folded in.
    pub const fn effective_k(&self) -> i64 {
        self.k * self.br
    }

    /// Floating-point operations of one primitive invocation.
    pub fn flops(&self) -> f64 {
        2.0 * self.m as f64 * self.n as f64 * self.effective_k() as f64
    }

    pub fn flags(&self) -> TransposeFlags {
        TransposeFlags { trans_a: self.trans_a, trans_b: self.trans_b }
    }
}

impl fmt::Display for PrimitiveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}n{}k{}", self.m, self.n, self.k)?;
        if self.br != 1 {
            write!(f, "br{}", self.br)?;
        }
        let a = if self.trans_a { 'T' } else { 'N' };
        let b = if self.trans_b { 'T' } else { 'N' };
        write!(f, "_{a}{b}x{}", self.outer_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_k_folds_batch_reduce() {
        let shape = PrimitiveShape::gemm(4, 3, 5).with_br(2);
        assert_eq!(shape.effective_k(), 10);
        assert_eq!(shape.flops(), 2.0 * 4.0 * 3.0 * 10.0);
    }

    #[test]
    fn test_flags_round_trip_through_parts() {
        let flags = TransposeFlags { trans_a: true, trans_b: false };
        let shape = PrimitiveShape::from_parts(PrimitiveSizes { br: 1, m: 2, n: 3, k: 4 }, flags, 5);
        assert_eq!(shape.flags(), flags);
    }

    #[test]
    fn test_display() {
        let shape = PrimitiveShape::gemm(64, 32, 16).with_transpose(true, false).with_outer_iterations(8);
        assert_eq!(shape.to_string(), "m64n32k16_TNx8");
        assert_eq!(PrimitiveShape::gemm(1, 2, 3).with_br(4).to_string(), "m1n2k3br4_NNx1");
    }
}
