//! # Fault Table Tests
//!
//! Tests for fault-count accumulation and report rendering.

use pretty_assertions::assert_eq;

use faultsim_core::policy::PolicyKind;
use faultsim_core::stats::FaultTable;

#[test]
fn test_new_table_is_zeroed() {
    let table = FaultTable::new(4, 20);
    assert_eq!(table.wss_min(), 4);
    assert_eq!(table.wss_max(), 20);
    for wss in 4..=20 {
        for kind in PolicyKind::ALL {
            assert_eq!(table.total(kind, wss), 0);
        }
    }
}

#[test]
fn test_record_accumulates_across_trials() {
    let mut table = FaultTable::new(4, 6);
    table.record(PolicyKind::Lru, 5, 12);
    table.record(PolicyKind::Lru, 5, 30);
    table.record(PolicyKind::Fifo, 5, 7);

    assert_eq!(table.total(PolicyKind::Lru, 5), 42);
    assert_eq!(table.total(PolicyKind::Fifo, 5), 7);
    assert_eq!(table.total(PolicyKind::Clock, 5), 0);
    assert_eq!(table.total(PolicyKind::Lru, 4), 0);
    assert_eq!(table.total(PolicyKind::Lru, 6), 0);
}

#[test]
fn test_record_keeps_sizes_independent() {
    let mut table = FaultTable::new(4, 5);
    table.record(PolicyKind::Clock, 4, 3);
    table.record(PolicyKind::Clock, 5, 9);
    assert_eq!(table.total(PolicyKind::Clock, 4), 3);
    assert_eq!(table.total(PolicyKind::Clock, 5), 9);
}

#[test]
fn test_render_lists_policies_per_size_in_report_order() {
    let mut table = FaultTable::new(4, 5);
    table.record(PolicyKind::Lru, 4, 10);
    table.record(PolicyKind::Fifo, 4, 11);
    table.record(PolicyKind::Clock, 4, 12);
    table.record(PolicyKind::Lru, 5, 20);
    table.record(PolicyKind::Fifo, 5, 21);
    table.record(PolicyKind::Clock, 5, 22);

    let expected = "\
Working Set 4 - LRU - 10
Working Set 4 - FIFO - 11
Working Set 4 - Clock - 12

Working Set 5 - LRU - 20
Working Set 5 - FIFO - 21
Working Set 5 - Clock - 22

";
    assert_eq!(table.render(), expected);
}

#[test]
fn test_render_single_size() {
    let table = FaultTable::new(7, 7);
    let expected = "\
Working Set 7 - LRU - 0
Working Set 7 - FIFO - 0
Working Set 7 - Clock - 0

";
    assert_eq!(table.render(), expected);
}

#[test]
fn test_render_empty_range_is_empty() {
    let table = FaultTable::new(8, 7);
    assert_eq!(table.render(), "");
}

#[test]
#[should_panic(expected = "outside the table range")]
fn test_record_rejects_sizes_outside_the_table() {
    let mut table = FaultTable::new(4, 6);
    table.record(PolicyKind::Lru, 7, 1);
}

#[test]
#[should_panic(expected = "outside the table range")]
fn test_total_rejects_sizes_outside_the_table() {
    let table = FaultTable::new(4, 6);
    let _ = table.total(PolicyKind::Lru, 3);
}

#[test]
fn test_table_serializes_to_json() {
    let mut table = FaultTable::new(4, 5);
    table.record(PolicyKind::Lru, 4, 1);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["wss_min"], 4);
    assert_eq!(json["wss_max"], 5);
    assert_eq!(json["lru"][0], 1);
    assert_eq!(json["fifo"][1], 0);
}
