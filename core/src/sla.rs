//! Service-level stage: daily SLA results derived from the volume,
//! staffing, and deflection outputs.
//!
//! Aggregation runs over BTreeMaps so iteration is date-ascending by
//! construction — never an incidental hash order.

use crate::{
    anomaly::AnomalyTable,
    deflection::DeflectionRecord,
    rng::StageRng,
    staffing::StaffingRecord,
    types::{month_key, round3},
    volume::VolumeRecord,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Daily target: 80% of contacts answered within threshold.
pub const SLA_TARGET: f64 = 0.80;

/// Fallback deflection rate when a month has no record.
const DEFAULT_DEFLECTION_RATE: f64 = 0.20;

/// Daily contact volume on an ordinary day, used as the reference point
/// for the volume pressure term.
const NORMAL_DAILY_VOLUME: f64 = 1000.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SLARecord {
    pub date: NaiveDate,
    pub target: f64,
    pub actual: f64,
    /// Minutes.
    pub avg_wait_time: u32,
    pub abandonment: f64,
}

/// One record per date, date-ascending.
pub fn generate(
    volume: &[VolumeRecord],
    staffing: &[StaffingRecord],
    deflection: &[DeflectionRecord],
    anomalies: &AnomalyTable,
    rng: &mut StageRng,
) -> Vec<SLARecord> {
    let mut daily_volume: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in volume {
        *daily_volume.entry(record.date).or_default() += record.total() as u64;
    }

    // (scheduled, actual) summed across shifts.
    let mut daily_staffing: BTreeMap<NaiveDate, (u32, u32)> = BTreeMap::new();
    for record in staffing {
        let entry = daily_staffing.entry(record.date).or_default();
        entry.0 += record.scheduled;
        entry.1 += record.actual;
    }

    let rate_by_month: HashMap<&str, f64> = deflection
        .iter()
        .map(|d| (d.month.as_str(), d.overall_rate))
        .collect();

    daily_volume
        .iter()
        .map(|(&date, &day_volume)| {
            if let Some(incident) = anomalies.sla_override(date) {
                return SLARecord {
                    date,
                    target: SLA_TARGET,
                    actual: incident.actual,
                    avg_wait_time: incident.avg_wait_minutes,
                    abandonment: incident.abandonment,
                };
            }

            let (scheduled, actual_staff) = daily_staffing.get(&date).copied().unwrap_or((0, 0));
            let staffing_ratio = if scheduled > 0 {
                actual_staff as f64 / scheduled as f64
            } else {
                1.0
            };

            let deflection_rate = rate_by_month
                .get(month_key(date).as_str())
                .copied()
                .unwrap_or(DEFAULT_DEFLECTION_RATE);

            // Understaffing hurts, volume pressure hurts (capped at 3x
            // normal), deflection above the 20% reference helps.
            let mut adjustment = (staffing_ratio - 1.0) * 0.3;
            let volume_factor = (day_volume as f64 / NORMAL_DAILY_VOLUME).min(3.0);
            adjustment -= (volume_factor - 1.0) * 0.1;
            adjustment += (deflection_rate - DEFAULT_DEFLECTION_RATE) * 0.5;

            let noise = rng.gaussian(0.0, 0.05);
            let sla = (0.82 + adjustment + noise).clamp(0.65, 0.95);

            let avg_wait_time = ((45.0 * (1.0 - sla)) as u32).max(5);
            let abandonment = ((1.0 - sla) * 0.2).max(0.01);

            SLARecord {
                date,
                target: SLA_TARGET,
                actual: round3(sla),
                avg_wait_time,
                abandonment: round3(abandonment),
            }
        })
        .collect()
}
