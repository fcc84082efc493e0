//! Anomaly table tests: the scripted event set is consulted uniformly by
//! the stages, so its accessors must be exact.

use chrono::NaiveDate;
use wfm_core::anomaly::AnomalyTable;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn volume_multipliers_match_the_scripted_windows() {
    let table = AnomalyTable::standard();

    assert_eq!(table.volume_multiplier(date(2024, 3, 16)), 2.0);
    assert_eq!(table.volume_multiplier(date(2024, 6, 3)), 3.0);
    assert_eq!(table.volume_multiplier(date(2024, 6, 4)), 3.0);
    assert_eq!(table.volume_multiplier(date(2024, 9, 1)), 1.4);
    assert_eq!(table.volume_multiplier(date(2024, 9, 7)), 1.4);

    // Boundaries and quiet days.
    assert_eq!(table.volume_multiplier(date(2024, 6, 2)), 1.0);
    assert_eq!(table.volume_multiplier(date(2024, 6, 5)), 1.0);
    assert_eq!(table.volume_multiplier(date(2024, 9, 8)), 1.0);
    // The outage day and the bot failure day carry no volume effect.
    assert_eq!(table.volume_multiplier(date(2024, 3, 15)), 1.0);
    assert_eq!(table.volume_multiplier(date(2024, 10, 10)), 1.0);
}

#[test]
fn deflection_adjustment_applies_only_to_october() {
    let table = AnomalyTable::standard();

    let (factor, note) = table.deflection_adjustment(2024, 10).expect("october hit");
    assert_eq!(factor, 0.3);
    assert!(note.contains("Oct 10"));

    for month in (1..=12).filter(|&m| m != 10) {
        assert!(table.deflection_adjustment(2024, month).is_none());
    }
    assert!(table.deflection_adjustment(2023, 10).is_none());
}

#[test]
fn sla_overrides_cover_exactly_two_days() {
    let table = AnomalyTable::standard();

    let outage = table.sla_override(date(2024, 3, 15)).expect("outage day");
    assert_eq!(outage.actual, 0.45);
    assert_eq!(outage.avg_wait_minutes, 180);
    assert_eq!(outage.abandonment, 0.25);

    let bot = table.sla_override(date(2024, 10, 10)).expect("bot failure day");
    assert_eq!(bot.actual, 0.60);
    assert_eq!(bot.avg_wait_minutes, 90);
    assert_eq!(bot.abandonment, 0.15);

    assert!(table.sla_override(date(2024, 3, 16)).is_none());
    assert!(table.sla_override(date(2024, 10, 11)).is_none());
}

#[test]
fn empty_table_is_inert() {
    let table = AnomalyTable::empty();
    assert_eq!(table.volume_multiplier(date(2024, 6, 3)), 1.0);
    assert!(table.deflection_adjustment(2024, 10).is_none());
    assert!(table.sla_override(date(2024, 3, 15)).is_none());
}
