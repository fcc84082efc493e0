//! Fixed generation parameters.
//!
//! The generator reads no external data: every base parameter of the
//! modelled contact center lives here. Scripted one-off events live in
//! the anomaly table, not in this config.

use chrono::NaiveDate;

/// A recurring daily staffing block with a fixed scheduled headcount.
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    pub name: &'static str,
    pub start_hour: u32,
    pub end_hour: u32,
    pub agents: u32,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_weekly_volume: f64,
    pub total_ftes: u32,
    /// Contiguous daily operating window, hours [first, last] inclusive.
    pub first_hour: u32,
    pub last_hour: u32,
    /// Shift order here is the record order in the staffing dataset.
    pub shifts: Vec<ShiftConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid calendar date"),
            base_weekly_volume: 15_000.0,
            total_ftes: 94,
            // 8am through 9pm: 13 operating hours.
            first_hour: 8,
            last_hour: 20,
            shifts: vec![
                ShiftConfig { name: "morning", start_hour: 8,  end_hour: 12, agents: 26 },
                ShiftConfig { name: "midday",  start_hour: 12, end_hour: 17, agents: 42 },
                ShiftConfig { name: "evening", start_hour: 17, end_hour: 21, agents: 26 },
            ],
        }
    }
}

impl GeneratorConfig {
    /// Every date in the generation range, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Operating hours of one day, ascending.
    pub fn operating_hours(&self) -> impl Iterator<Item = u32> {
        self.first_hour..=self.last_hour
    }

    pub fn operating_hour_count(&self) -> u32 {
        self.last_hour - self.first_hour + 1
    }

    /// Mean volume for one operating hour on an unmodified day.
    pub fn base_hourly_volume(&self) -> f64 {
        self.base_weekly_volume / 7.0 / self.operating_hour_count() as f64
    }
}
