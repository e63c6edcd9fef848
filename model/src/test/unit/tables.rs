use test_case::test_case;

use crate::arch::{a76, m4, zen5};
use crate::table::PerfTable;

fn strictly_increasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

#[test_case(&zen5::TABLE, 4; "zen5")]
#[test_case(&m4::TABLE, 2; "m4")]
#[test_case(&a76::TABLE, 4; "a76")]
fn test_table_contract(table: &PerfTable, layouts: usize) {
    assert_eq!(table.layouts(), layouts);
    assert!(!table.is_empty());
    assert_eq!(table.len(), table.m_values().len() * table.n_values().len() * table.k_values().len() * layouts);

    for axis in [table.m_values(), table.n_values(), table.k_values()] {
        assert!(strictly_increasing(axis), "{}: breakpoints not strictly increasing", table.name());
        assert!(axis[0] > 0, "{}: non-positive breakpoint", table.name());
    }

    let bad = table.values().iter().position(|&v| !(v.is_finite() && v > 0.0));
    assert_eq!(bad, None, "{}: non-positive entry", table.name());
}

#[test]
fn test_zen5_axes() {
    assert_eq!(zen5::TABLE.m_values().last(), Some(&128));
    assert_eq!(zen5::TABLE.n_values(), &[1, 2, 3, 4, 5, 6, 7, 8, 16, 64, 256]);
    assert_eq!(zen5::TABLE.k_values(), &[4, 16, 32, 48, 64, 128]);
}

#[test]
fn test_a76_covers_register_blocked_kernels() {
    // Every microkernel the blocking engine can emit must be tabulated exactly.
    assert_eq!(a76::TABLE.m_values(), (1..=16i64).collect::<Vec<_>>().as_slice());
    assert_eq!(a76::TABLE.n_values(), (1..=15i64).collect::<Vec<_>>().as_slice());
}
