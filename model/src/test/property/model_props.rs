use proptest::prelude::*;
use tenmo_descriptor::{ContractionDescriptor, PrimitiveKind};

use crate::arch::{M4, Model, ModelSelector, PerfModel, Zen5, generic::Generic, m4, zen5};
use crate::table::PerfTable;
use crate::{Predictor, PredictorConfig, estimate_primitive};

fn any_selector() -> impl Strategy<Value = ModelSelector> {
    prop_oneof![Just(ModelSelector::Zen5), Just(ModelSelector::M4), Just(ModelSelector::A76), Just(ModelSelector::Generic)]
}

/// An index into `axis` whose next breakpoint leaves room for an in-between value.
fn gap_index(axis: &'static [i64]) -> impl Strategy<Value = usize> {
    let gaps: Vec<usize> = (0..axis.len() - 1).filter(|&i| axis[i + 1] - axis[i] > 1).collect();
    prop::sample::select(gaps)
}

fn between(axis: &'static [i64], index: usize) -> impl Strategy<Value = i64> {
    (axis[index] + 1)..axis[index + 1]
}

fn within(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value >= lo - 1e-9 && value <= hi + 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Same inputs, same bits, for every model.
    #[test]
    fn predictions_are_deterministic(
        selector in any_selector(),
        m in 1i64..600, n in 1i64..600, k in 1i64..1200,
        trans_a in 0i64..=1, trans_b in 0i64..=1,
    ) {
        let a = estimate_primitive(m, n, k, trans_a, trans_b, selector, 800.0, 8).unwrap();
        let b = estimate_primitive(m, n, k, trans_a, trans_b, selector, 800.0, 8).unwrap();
        prop_assert_eq!(a.gflops.to_bits(), b.gflops.to_bits());
        prop_assert_eq!(a.time_seconds.to_bits(), b.time_seconds.to_bits());
        prop_assert!(a.gflops > 0.0 && a.gflops.is_finite());
    }

    /// Between two K breakpoints the estimate lies between the two table entries.
    #[test]
    fn zen5_k_interpolation_is_bounded(
        ki in gap_index(zen5::TABLE.k_values()),
        mi in 0..zen5::TABLE.m_values().len(),
        ni in 0..zen5::TABLE.n_values().len(),
        layout in 0usize..4,
        offset in 1i64..1000,
    ) {
        let table: &PerfTable = &zen5::TABLE;
        let (lo, hi) = (table.k_values()[ki], table.k_values()[ki + 1]);
        let k = lo + 1 + offset % (hi - lo - 1);
        let (m, n) = (table.m_values()[mi], table.n_values()[ni]);
        let gflops = Zen5.estimate_gflops(m, n, k, layout as i64 / 2, layout as i64 % 2).unwrap();
        prop_assert!(within(gflops, table.get(mi, ni, ki, layout), table.get(mi, ni, ki + 1, layout)));
    }

    /// Same along M, below the remapped range.
    #[test]
    fn zen5_m_interpolation_is_bounded(
        (mi, m) in gap_index(zen5::TABLE.m_values()).prop_flat_map(|i| (Just(i), between(zen5::TABLE.m_values(), i))),
        ni in 0..zen5::TABLE.n_values().len(),
        ki in 0..zen5::TABLE.k_values().len(),
    ) {
        let table: &PerfTable = &zen5::TABLE;
        let (n, k) = (table.n_values()[ni], table.k_values()[ki]);
        let gflops = Zen5.estimate_gflops(m, n, k, 0, 0).unwrap();
        prop_assert!(within(gflops, table.get(mi, ni, ki, 0), table.get(mi + 1, ni, ki, 0)));
    }

    /// Same along N on the M4 grid.
    #[test]
    fn m4_n_interpolation_is_bounded(
        (ni, n) in gap_index(m4::TABLE.n_values()).prop_flat_map(|i| (Just(i), between(m4::TABLE.n_values(), i))),
        mi in 0..m4::TABLE.m_values().len(),
        ki in 0..m4::TABLE.k_values().len(),
        trans_b in 0i64..=1,
    ) {
        let table: &PerfTable = &m4::TABLE;
        let (m, k) = (table.m_values()[mi], table.k_values()[ki]);
        let layout = trans_b as usize;
        let gflops = M4.estimate_gflops(m, n, k, 0, trans_b).unwrap();
        prop_assert!(within(gflops, table.get(mi, ni, ki, layout), table.get(mi, ni + 1, ki, layout)));
    }

    /// Below the first and above the last breakpoint the edge row is returned exactly.
    #[test]
    fn out_of_range_clamps_to_edges(
        k_below in 1i64..4,
        k_above in 512i64..100_000,
        n_above in 256i64..100_000,
        mi in 0..m4::TABLE.m_values().len(),
    ) {
        let m = m4::TABLE.m_values()[mi];
        prop_assert_eq!(M4.estimate_gflops(m, 1, k_below, 0, 0).unwrap(), m4::TABLE.get(mi, 0, 0, 0));
        prop_assert_eq!(M4.estimate_gflops(m, 1, k_above, 0, 0).unwrap(), m4::TABLE.get(mi, 0, 5, 0));
        prop_assert_eq!(Zen5.estimate_gflops(1, n_above, 4, 1, 0).unwrap(), zen5::TABLE.get(0, 10, 0, 2));
    }

    /// Vector-aligned M with saturated N and K runs at exactly the declared peak.
    #[test]
    fn generic_saturated_hits_peak(
        peak in 1.0f64..10_000.0,
        vector_size in 1i64..64,
        kernels in 1i64..32,
        n in 8i64..4096,
        k in 48i64..4096,
    ) {
        let model = Generic::new(peak, vector_size).unwrap();
        prop_assert_eq!(model.efficiency(vector_size * kernels, n, k), 1.0);
        prop_assert_eq!(model.estimate_gflops(vector_size * kernels, n, k, 0, 0).unwrap(), peak);
    }

    /// Generic efficiency never exceeds 1 nor drops to zero.
    #[test]
    fn generic_efficiency_is_a_fraction(vector_size in 1i64..64, m in 1i64..4096, n in 1i64..64, k in 1i64..128) {
        let model = Generic::new(100.0, vector_size).unwrap();
        let efficiency = model.efficiency(m, n, k);
        prop_assert!(efficiency > 0.0 && efficiency <= 1.0);
    }

    /// Whole-contraction time is the primitive time times the loop count.
    #[test]
    fn descriptor_time_scales_with_loops(
        desc in ContractionDescriptor::arb(PrimitiveKind::BrGemm, 48),
        selector in prop_oneof![Just(ModelSelector::Zen5), Just(ModelSelector::M4), Just(ModelSelector::A76)],
    ) {
        let predictor = Predictor::new(PredictorConfig::builder().model(selector).build()).unwrap();
        let shape = predictor.shape(&desc, PrimitiveKind::BrGemm).unwrap();
        let whole = predictor.predict(&desc, PrimitiveKind::BrGemm).unwrap();
        let single = predictor.predict_shape(&shape.with_outer_iterations(1)).unwrap();
        prop_assert_eq!(whole.gflops.to_bits(), single.gflops.to_bits());
        let ratio = whole.time_seconds / single.time_seconds;
        prop_assert!((ratio - shape.outer_iterations as f64).abs() <= 1e-9 * ratio);
    }

    /// Model construction only cares about generic parameters for the generic model.
    #[test]
    fn table_models_accept_any_parameters(peak in -10.0f64..10.0, vector_size in -4i64..4) {
        for selector in [ModelSelector::Zen5, ModelSelector::M4, ModelSelector::A76] {
            prop_assert!(Model::new(selector, peak, vector_size).is_ok());
        }
    }
}
