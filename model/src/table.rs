//! Compiled-in GFLOPS grids.

/// Read-only measured throughput over an `M x N x K x layout` grid.
///
/// Values are stored flattened in `[m][n][k][layout]` order. The layout axis
/// has one slot per tabulated transpose combination: four for
/// `(trans_a, trans_b)` grids, two for grids keyed by `trans_b` only.
#[derive(Debug)]
pub struct PerfTable {
    name: &'static str,
    m_values: &'static [i64],
    n_values: &'static [i64],
    k_values: &'static [i64],
    layouts: usize,
    gflops: &'static [f64],
}

impl PerfTable {
    /// Panics at compile time when the grid size does not match the axes.
    pub const fn new(
        name: &'static str,
        m_values: &'static [i64],
        n_values: &'static [i64],
        k_values: &'static [i64],
        layouts: usize,
        gflops: &'static [f64],
    ) -> Self {
        assert!(gflops.len() == m_values.len() * n_values.len() * k_values.len() * layouts, "table shape mismatch");
        Self { name, m_values, n_values, k_values, layouts, gflops }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn m_values(&self) -> &'static [i64] {
        self.m_values
    }

    pub fn n_values(&self) -> &'static [i64] {
        self.n_values
    }

    pub fn k_values(&self) -> &'static [i64] {
        self.k_values
    }

    pub fn layouts(&self) -> usize {
        self.layouts
    }

    /// All stored entries.
    pub fn values(&self) -> &'static [f64] {
        self.gflops
    }

    pub fn len(&self) -> usize {
        self.gflops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gflops.is_empty()
    }

    #[inline]
    pub fn get(&self, m: usize, n: usize, k: usize, layout: usize) -> f64 {
        let idx = ((m * self.n_values.len() + n) * self.k_values.len() + k) * self.layouts + layout;
        self.gflops[idx]
    }
}

/// Clamp a raw transpose flag into `{0, 1}`.
pub fn clamp_flag(flag: i64) -> usize {
    flag.clamp(0, 1) as usize
}

/// Layout slot of a `(trans_a, trans_b)` grid.
pub fn layout_ab(trans_a: i64, trans_b: i64) -> usize {
    clamp_flag(trans_a) * 2 + clamp_flag(trans_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    static M: [i64; 2] = [1, 2];
    static N: [i64; 1] = [4];
    static K: [i64; 3] = [8, 16, 32];
    static DATA: [f64; 12] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
    static TABLE: PerfTable = PerfTable::new("toy", &M, &N, &K, 2, &DATA);

    #[test]
    fn test_flat_indexing() {
        assert_eq!(TABLE.get(0, 0, 0, 0), 0.0);
        assert_eq!(TABLE.get(0, 0, 2, 1), 5.0);
        assert_eq!(TABLE.get(1, 0, 1, 0), 12.0);
        assert_eq!(TABLE.len(), 12);
    }

    #[test]
    fn test_layout_clamping() {
        assert_eq!(layout_ab(0, 0), 0);
        assert_eq!(layout_ab(0, 1), 1);
        assert_eq!(layout_ab(1, 0), 2);
        assert_eq!(layout_ab(5, -3), 2);
        assert_eq!(clamp_flag(-1), 0);
    }
}
