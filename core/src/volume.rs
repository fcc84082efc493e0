//! Volume stage: hourly contact counts for every operating hour of the year.
//!
//! volume = base_hourly × daily_multiplier × hourly_multiplier × noise,
//! floored at 1, then multiplied by any scripted anomaly for the date.
//! The result is split by channel (exact, emails absorb the rounding
//! remainder) and by category (independently rounded).

use crate::{anomaly::AnomalyTable, config::GeneratorConfig, rng::StageRng};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Business-category breakdown of one hour's contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactTypeCounts {
    pub billing: u32,
    pub technical: u32,
    pub general: u32,
    pub sales: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    pub date: NaiveDate,
    pub hour: u32,
    pub calls: u32,
    pub chats: u32,
    pub emails: u32,
    pub contact_type: ContactTypeCounts,
}

impl VolumeRecord {
    /// Total contacts this hour. Equals the generated hourly volume
    /// exactly: the channel split is remainder-absorbing.
    pub fn total(&self) -> u32 {
        self.calls + self.chats + self.emails
    }
}

/// One record per (date, operating hour), date-ascending then hour-ascending.
pub fn generate(
    config: &GeneratorConfig,
    anomalies: &AnomalyTable,
    rng: &mut StageRng,
) -> Vec<VolumeRecord> {
    let mut records = Vec::new();

    for date in config.dates() {
        let daily_mult = daily_multiplier(date);

        for hour in config.operating_hours() {
            let base = config.base_hourly_volume() * daily_mult * hourly_multiplier(hour);

            // ±15% noise, floored at a minimum of one contact.
            let noise = rng.gaussian(1.0, 0.15);
            let volume = ((base * noise) as i64).max(1) as u64;

            // Anomaly multipliers apply after the floor, so a 3x day is
            // exactly 3x the formula value for every hour.
            let volume = (volume as f64 * anomalies.volume_multiplier(date)) as u32;

            let (calls, chats, emails) = split_channels(volume, date, config.start_date);
            let contact_type = split_categories(volume, date);

            records.push(VolumeRecord {
                date,
                hour,
                calls,
                chats,
                emails,
                contact_type,
            });
        }
    }

    records
}

/// Day-of-week factor × month factor × scripted seasonal boosts.
fn daily_multiplier(date: NaiveDate) -> f64 {
    // Mon..Sun. Weekends run at a third of weekday volume.
    const DOW_MULTIPLIERS: [f64; 7] = [1.2, 1.2, 1.0, 1.0, 0.9, 0.4, 0.4];
    let dow_mult = DOW_MULTIPLIERS[date.weekday().num_days_from_monday() as usize];

    let mut month_mult = match date.month() {
        1 => 1.15,     // post-holiday surge
        2 => 0.9,      // February dip
        3..=6 => 1.0,  // steady spring
        7 | 8 => 0.85, // summer dip
        9 => 1.1,      // back-to-school spike
        10 => 1.05,    // autumn build
        11 => 1.3,     // seasonal peak
        _ => 1.1,      // December mixed
    };

    // Black Friday week uplift.
    if date.month() == 11 && (22..=29).contains(&date.day()) {
        month_mult *= 1.4;
    }
    // Christmas week reduction.
    if date.month() == 12 && (23..=26).contains(&date.day()) {
        month_mult *= 0.3;
    }

    dow_mult * month_mult
}

/// Intraday shape with peaks at 10am and 2pm.
fn hourly_multiplier(hour: u32) -> f64 {
    match hour {
        8 => 0.6,
        9 => 0.8,
        10 => 1.3,
        11 => 1.2,
        12 => 1.0,
        13 => 0.9,
        14 => 1.3,
        15 => 1.2,
        16 => 1.0,
        17 => 0.8,
        18 => 0.7,
        19 => 0.6,
        20 => 0.5,
        _ => 1.0,
    }
}

/// Channel split with year-progress interpolation: calls migrate to chat
/// over the year, email share stays flat. Emails take the integer
/// remainder so the three channels always sum to the hourly volume.
fn split_channels(volume: u32, date: NaiveDate, start_date: NaiveDate) -> (u32, u32, u32) {
    let progress = (date - start_date).num_days() as f64 / 365.0;

    let calls_pct = 0.60 - progress * 0.05;
    let chats_pct = 0.30 + progress * 0.05;

    let calls = (volume as f64 * calls_pct) as u32;
    let chats = (volume as f64 * chats_pct) as u32;
    let emails = volume - calls - chats;

    (calls, chats, emails)
}

/// Category split. Each share rounds down independently, so the four
/// counts may undershoot the hourly total by a few contacts. Intentional:
/// the channel split is the exact one.
fn split_categories(volume: u32, date: NaiveDate) -> ContactTypeCounts {
    let mut billing = 0.35;
    let mut technical = 0.30;
    let mut general = 0.25;
    let mut sales = 0.10;

    match date.month() {
        1 => {
            // Post-holiday billing questions.
            billing += 0.05;
            general -= 0.05;
        }
        7 | 8 => {
            general -= 0.03;
            technical += 0.03;
        }
        11 | 12 => {
            // Q4 sales push.
            sales += 0.05;
            general -= 0.05;
        }
        _ => {}
    }

    // End-of-month billing spike.
    if date.day() >= 25 {
        billing += 0.08;
        general -= 0.08;
    }

    let total = volume as f64;
    ContactTypeCounts {
        billing: (total * billing) as u32,
        technical: (total * technical) as u32,
        general: (total * general) as u32,
        sales: (total * sales) as u32,
    }
}
