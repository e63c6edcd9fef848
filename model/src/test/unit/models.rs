use std::str::FromStr;

use strum::IntoEnumIterator;
use test_case::test_case;

use crate::arch::a76::{self, blocking};
use crate::arch::{A76, Model, ModelSelector, PerfModel, Zen5, zen5};

fn model(selector: ModelSelector) -> Model {
    Model::new(selector, 250.0, 8).unwrap()
}

#[test_case("zen5", ModelSelector::Zen5)]
#[test_case("M4", ModelSelector::M4)]
#[test_case("a76", ModelSelector::A76)]
#[test_case("GENERIC", ModelSelector::Generic)]
fn test_selector_parsing(name: &str, expected: ModelSelector) {
    assert_eq!(ModelSelector::from_str(name).unwrap(), expected);
    assert_eq!(ModelSelector::from_str(&expected.to_string()).unwrap(), expected);
}

#[test]
fn test_model_reports_its_selector() {
    for selector in ModelSelector::iter() {
        assert_eq!(model(selector).selector(), selector);
    }
}

#[test]
fn test_enum_dispatch_matches_variant() {
    let direct = Zen5.estimate_gflops(77, 5, 40, 1, 0).unwrap();
    let dispatched = model(ModelSelector::Zen5).estimate_gflops(77, 5, 40, 1, 0).unwrap();
    assert_eq!(direct.to_bits(), dispatched.to_bits());
}

#[test]
fn test_flags_are_clamped_inside_models() {
    for selector in ModelSelector::iter() {
        let model = model(selector);
        let clamped = model.estimate_gflops(40, 12, 64, 1, 0).unwrap();
        let raw = model.estimate_gflops(40, 12, 64, 7, -2).unwrap();
        assert_eq!(clamped.to_bits(), raw.to_bits(), "{selector}");
    }
}

#[test]
fn test_layouts_are_distinguished() {
    let nn = Zen5.estimate_gflops(64, 64, 64, 0, 0).unwrap();
    let tt = Zen5.estimate_gflops(64, 64, 64, 1, 1).unwrap();
    assert_eq!(nn, zen5::TABLE.get(11, 9, 4, 0));
    assert_eq!(tt, zen5::TABLE.get(11, 9, 4, 3));
}

#[test]
fn test_a76_aggregates_microkernels_by_time() {
    let (m, n, k) = (20, 9, 64);
    let plan = blocking::partition(m, n);
    let (flops, time) = plan.iter().fold((0.0, 0.0), |(f, t), block| {
        let bf = block.flops(k) as f64;
        (f + bf, t + bf / a76::microkernel_gflops(block.m, block.n, k, 0, 1))
    });
    let expected = flops / time;
    let actual = A76.estimate_gflops(m, n, k, 0, 1).unwrap();
    assert!((actual - expected).abs() < 1e-9 * expected);
}

#[test]
fn test_a76_large_k_clamps_to_last_breakpoint() {
    let at_edge = a76::microkernel_gflops(8, 4, 128, 0, 0);
    assert_eq!(a76::microkernel_gflops(8, 4, 4096, 0, 0), at_edge);
}
