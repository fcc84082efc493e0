//! Scripted operational anomalies.
//!
//! RULE: Every one-off event date lives in this single table. Stages never
//! hardcode anomaly dates themselves; they consult the table through the
//! accessors below. Tests can run any stage against an empty table to
//! observe the unmodified formulas.

use chrono::{Datelike, NaiveDate};

/// Fixed incident values that replace the service-level formula for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlaIncident {
    pub actual: f64,
    pub avg_wait_minutes: u32,
    pub abandonment: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnomalyEffect {
    /// Multiply the formula volume for every operating hour in the window.
    VolumeMultiplier(f64),
    /// Multiply the overall deflection rate of the month containing the
    /// window, and carry a note into that month's record.
    DeflectionMonthMultiplier { factor: f64, note: &'static str },
    /// Replace the formula service-level result outright for a single day.
    SlaOverride(SlaIncident),
}

#[derive(Debug, Clone)]
pub struct AnomalyWindow {
    pub name: &'static str,
    pub start: NaiveDate,
    /// Inclusive.
    pub end: NaiveDate,
    pub effect: AnomalyEffect,
}

impl AnomalyWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnomalyTable {
    windows: Vec<AnomalyWindow>,
}

impl AnomalyTable {
    pub fn empty() -> Self {
        Self { windows: Vec::new() }
    }

    /// The scripted 2024 anomaly set.
    ///
    /// The March 15 outage itself is a service-level incident; the contact
    /// surge lands the following day. The October 10 bot outage leaves
    /// volume untouched — it shows up as the deflection collapse and a
    /// degraded service day.
    pub fn standard() -> Self {
        Self {
            windows: vec![
                AnomalyWindow {
                    name: "system outage",
                    start: day(2024, 3, 15),
                    end: day(2024, 3, 15),
                    effect: AnomalyEffect::SlaOverride(SlaIncident {
                        actual: 0.45,
                        avg_wait_minutes: 180,
                        abandonment: 0.25,
                    }),
                },
                AnomalyWindow {
                    name: "outage recovery surge",
                    start: day(2024, 3, 16),
                    end: day(2024, 3, 16),
                    effect: AnomalyEffect::VolumeMultiplier(2.0),
                },
                AnomalyWindow {
                    name: "viral social moment",
                    start: day(2024, 6, 3),
                    end: day(2024, 6, 4),
                    effect: AnomalyEffect::VolumeMultiplier(3.0),
                },
                AnomalyWindow {
                    name: "product launch campaign",
                    start: day(2024, 9, 1),
                    end: day(2024, 9, 7),
                    effect: AnomalyEffect::VolumeMultiplier(1.4),
                },
                AnomalyWindow {
                    name: "bot outage",
                    start: day(2024, 10, 10),
                    end: day(2024, 10, 10),
                    effect: AnomalyEffect::DeflectionMonthMultiplier {
                        factor: 0.3,
                        note: "System incident on Oct 10 - bot performance restored",
                    },
                },
                AnomalyWindow {
                    name: "bot outage service impact",
                    start: day(2024, 10, 10),
                    end: day(2024, 10, 10),
                    effect: AnomalyEffect::SlaOverride(SlaIncident {
                        actual: 0.60,
                        avg_wait_minutes: 90,
                        abandonment: 0.15,
                    }),
                },
            ],
        }
    }

    /// Combined volume multiplier for a date (1.0 when nothing applies).
    pub fn volume_multiplier(&self, date: NaiveDate) -> f64 {
        self.windows
            .iter()
            .filter(|w| w.contains(date))
            .filter_map(|w| match w.effect {
                AnomalyEffect::VolumeMultiplier(factor) => Some(factor),
                _ => None,
            })
            .product()
    }

    /// Deflection adjustment for a calendar month, if any window with a
    /// deflection effect starts in that month.
    pub fn deflection_adjustment(&self, year: i32, month: u32) -> Option<(f64, &'static str)> {
        self.windows.iter().find_map(|w| match w.effect {
            AnomalyEffect::DeflectionMonthMultiplier { factor, note }
                if w.start.year() == year && w.start.month() == month =>
            {
                Some((factor, note))
            }
            _ => None,
        })
    }

    /// Hard service-level override for a date, if scripted.
    pub fn sla_override(&self, date: NaiveDate) -> Option<SlaIncident> {
        self.windows.iter().find_map(|w| match w.effect {
            AnomalyEffect::SlaOverride(incident) if w.contains(date) => Some(incident),
            _ => None,
        })
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid anomaly date")
}
