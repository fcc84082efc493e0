//! Service-level stage tests: clamp band, incident overrides, ordering,
//! and the missing-month fallback.

use chrono::NaiveDate;
use wfm_core::{
    anomaly::AnomalyTable,
    engine::GenEngine,
    rng::{RngBank, StageSlot},
    sla,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const INCIDENT_DATES: [(i32, u32, u32); 2] = [(2024, 3, 15), (2024, 10, 10)];

#[test]
fn one_record_per_day_ascending() {
    let records = GenEngine::new(42).run().sla;
    assert_eq!(records.len(), 366);
    for pair in records.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn target_is_eighty_percent_everywhere() {
    let records = GenEngine::new(42).run().sla;
    assert!(records.iter().all(|r| r.target == 0.80));
}

#[test]
fn formula_days_stay_in_the_clamp_band() {
    let records = GenEngine::new(42).run().sla;
    let incidents: Vec<NaiveDate> = INCIDENT_DATES
        .iter()
        .map(|&(y, m, d)| date(y, m, d))
        .collect();

    for r in records.iter().filter(|r| !incidents.contains(&r.date)) {
        assert!(
            (0.65..=0.95).contains(&r.actual),
            "{}: SLA {} outside clamp band",
            r.date,
            r.actual
        );
        assert!(r.avg_wait_time >= 5, "{}: wait {}", r.date, r.avg_wait_time);
        assert!(r.abandonment >= 0.01, "{}: abandonment {}", r.date, r.abandonment);
    }
}

#[test]
fn outage_day_is_hard_overridden() {
    let records = GenEngine::new(42).run().sla;
    let outage = records.iter().find(|r| r.date == date(2024, 3, 15)).unwrap();
    assert_eq!(outage.actual, 0.45);
    assert_eq!(outage.avg_wait_time, 180);
    assert_eq!(outage.abandonment, 0.25);
}

#[test]
fn bot_failure_day_is_hard_overridden() {
    let records = GenEngine::new(42).run().sla;
    let failure = records.iter().find(|r| r.date == date(2024, 10, 10)).unwrap();
    assert_eq!(failure.actual, 0.60);
    assert_eq!(failure.avg_wait_time, 90);
    assert_eq!(failure.abandonment, 0.15);
}

#[test]
fn overrides_are_seed_independent() {
    for seed in [1u64, 42, 2024] {
        let records = GenEngine::new(seed).run().sla;
        let outage = records.iter().find(|r| r.date == date(2024, 3, 15)).unwrap();
        assert_eq!(outage.actual, 0.45, "seed {seed}");
    }
}

#[test]
fn missing_deflection_months_fall_back_to_the_reference_rate() {
    // Run the stage with no deflection data at all: every month uses the
    // 0.20 fallback and the output still covers every day in band.
    let data = GenEngine::new(42).run();
    let bank = RngBank::new(42);
    let records = sla::generate(
        &data.volume,
        &data.staffing,
        &[],
        &AnomalyTable::standard(),
        &mut bank.for_stage(StageSlot::ServiceLevel),
    );

    assert_eq!(records.len(), 366);
    let incidents: Vec<NaiveDate> = INCIDENT_DATES
        .iter()
        .map(|&(y, m, d)| date(y, m, d))
        .collect();
    for r in records.iter().filter(|r| !incidents.contains(&r.date)) {
        assert!((0.65..=0.95).contains(&r.actual));
    }
}
