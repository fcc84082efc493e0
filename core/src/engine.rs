//! The generation engine.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Volume stage
//!   2. Deflection stage
//!   3. Staffing stage
//!   4. Service-level stage   (consumes 1-3)
//!   5. Cost/benchmark stage  (static)
//!   6. Summary aggregation   (consumes 1, 2, 4)
//!
//! RULES:
//!   - No stage runs before its inputs exist.
//!   - All randomness flows through the RngBank, one stream per stage.
//!   - Stages never consult the wall clock or any external input.

use crate::{
    anomaly::AnomalyTable,
    config::GeneratorConfig,
    cost::{self, CostData},
    deflection::{self, DeflectionRecord},
    rng::{RngBank, StageSlot},
    sla::{self, SLARecord},
    staffing::{self, StaffingRecord},
    summary::{self, SummaryStats},
    volume::{self, VolumeRecord},
};

/// All six datasets of one generation run.
pub struct GeneratedData {
    pub volume: Vec<VolumeRecord>,
    pub deflection: Vec<DeflectionRecord>,
    pub staffing: Vec<StaffingRecord>,
    pub sla: Vec<SLARecord>,
    pub cost: CostData,
    pub summary: SummaryStats,
}

pub struct GenEngine {
    config: GeneratorConfig,
    anomalies: AnomalyTable,
    rng_bank: RngBank,
}

impl GenEngine {
    /// Standard configuration and anomaly set — what the CLI runs.
    pub fn new(seed: u64) -> Self {
        Self::with_config(GeneratorConfig::default(), AnomalyTable::standard(), seed)
    }

    pub fn with_config(config: GeneratorConfig, anomalies: AnomalyTable, seed: u64) -> Self {
        Self {
            config,
            anomalies,
            rng_bank: RngBank::new(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every stage in the documented order.
    pub fn run(&self) -> GeneratedData {
        let cfg = &self.config;

        let volume = volume::generate(
            cfg,
            &self.anomalies,
            &mut self.rng_bank.for_stage(StageSlot::Volume),
        );
        log::info!("volume stage: {} hourly records", volume.len());

        let deflection = deflection::generate(
            cfg,
            &self.anomalies,
            &mut self.rng_bank.for_stage(StageSlot::Deflection),
        );
        log::info!("deflection stage: {} monthly records", deflection.len());

        let staffing = staffing::generate(cfg, &mut self.rng_bank.for_stage(StageSlot::Staffing));
        log::info!("staffing stage: {} shift records", staffing.len());

        let sla = sla::generate(
            &volume,
            &staffing,
            &deflection,
            &self.anomalies,
            &mut self.rng_bank.for_stage(StageSlot::ServiceLevel),
        );
        log::info!("service-level stage: {} daily records", sla.len());

        let cost = cost::generate();
        let summary = summary::generate(cfg, &volume, &deflection, &sla);
        log::debug!(
            "summary: {} contacts, peak {} ({})",
            summary.total_contacts,
            summary.peak_day.date,
            summary.peak_day.volume
        );

        GeneratedData {
            volume,
            deflection,
            staffing,
            sla,
            cost,
            summary,
        }
    }
}
