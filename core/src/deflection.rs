//! Deflection stage: monthly AI self-service rates.
//!
//! The overall rate ramps linearly from 18% to 27% across the year with
//! small monthly jitter; per-category rates ramp toward their own
//! ceilings. Launch notes and the October bot outage come from scripted
//! tables, not from the formula.

use crate::{anomaly::AnomalyTable, config::GeneratorConfig, rng::StageRng, types::round3};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeflectionRates {
    pub billing: f64,
    pub technical: f64,
    pub general: f64,
    pub sales: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeflectionRecord {
    /// `YYYY-MM`.
    pub month: String,
    pub overall_rate: f64,
    pub by_type: DeflectionRates,
    /// Serialized as null when no update shipped that month.
    pub bot_updates: Option<String>,
}

/// One record per calendar month, month-ascending.
pub fn generate(
    config: &GeneratorConfig,
    anomalies: &AnomalyTable,
    rng: &mut StageRng,
) -> Vec<DeflectionRecord> {
    let year = config.start_date.year();

    (1..=12u32)
        .map(|month| {
            let progress = (month - 1) as f64 / 11.0;

            let base_rate = 0.18 + 0.09 * progress;
            let jitter = rng.gaussian(0.0, 0.01);
            let mut overall = (base_rate + jitter).clamp(0.15, 0.30);

            let mut bot_updates = launch_note(month).map(str::to_owned);

            // A mid-month bot outage drags the monthly average down.
            if let Some((factor, note)) = anomalies.deflection_adjustment(year, month) {
                overall *= factor;
                bot_updates = Some(note.to_owned());
            }

            DeflectionRecord {
                month: format!("{year:04}-{month:02}"),
                overall_rate: round3(overall),
                by_type: DeflectionRates {
                    billing: round3((0.25 + 0.13 * progress).min(0.38)),
                    technical: round3((0.12 + 0.06 * progress).min(0.18)),
                    general: round3((0.20 + 0.28 * progress).min(0.48)),
                    sales: round3((0.08 + 0.04 * progress).min(0.12)),
                },
                bot_updates,
            }
        })
        .collect()
}

fn launch_note(month: u32) -> Option<&'static str> {
    match month {
        3 => Some("Billing Bot v2 launched - improved invoice queries"),
        8 => Some("FAQ expansion - 200+ new self-service topics"),
        _ => None,
    }
}
