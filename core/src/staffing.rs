//! Staffing stage: scheduled vs. actual headcount per (date, shift).
//!
//! Absences are binomial draws over the shift headcount with seasonal
//! probabilities; training pulls a few agents off the midday shift on
//! Tuesdays and Thursdays.

use crate::{config::GeneratorConfig, rng::StageRng};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRecord {
    pub date: NaiveDate,
    pub shift: String,
    pub scheduled: u32,
    pub actual: u32,
    pub pto_count: u32,
    pub sick_count: u32,
    pub training_count: u32,
}

/// One record per (date, shift), date-ascending with shifts in the
/// order declared in the config.
pub fn generate(config: &GeneratorConfig, rng: &mut StageRng) -> Vec<StaffingRecord> {
    let mut records = Vec::new();

    for date in config.dates() {
        for shift in &config.shifts {
            let scheduled = shift.agents;

            let pto_count = rng.binomial(scheduled, pto_rate(date));

            let mut sick_rate = rng.uniform(0.03, 0.05);
            if matches!(date.month(), 12 | 1 | 2 | 3) {
                // Flu season.
                sick_rate *= 1.3;
            }
            let sick_count = rng.binomial(scheduled, sick_rate);

            let training_count = training_headcount(date, shift.name, rng);

            let actual = scheduled.saturating_sub(pto_count + sick_count + training_count);

            records.push(StaffingRecord {
                date,
                shift: shift.name.to_owned(),
                scheduled,
                actual,
                pto_count,
                sick_count,
                training_count,
            });
        }
    }

    records
}

fn pto_rate(date: NaiveDate) -> f64 {
    let mut rate = match (date.month(), date.day()) {
        (7 | 8, _) => 0.08,         // summer vacations
        (12, d) if d >= 20 => 0.15, // holiday rush for days off
        (12, _) => 0.05,
        _ => 0.03,
    };

    // Weekend rosters see half the PTO pressure.
    if date.weekday().num_days_from_monday() >= 5 {
        rate *= 0.5;
    }

    rate
}

/// Training blocks run Tuesday/Thursday on the midday shift only,
/// pulling 2-5 agents each time.
fn training_headcount(date: NaiveDate, shift_name: &str, rng: &mut StageRng) -> u32 {
    if matches!(date.weekday(), Weekday::Tue | Weekday::Thu) && shift_name == "midday" {
        rng.int_between(2, 5)
    } else {
        0
    }
}
