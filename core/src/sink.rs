//! Persistence: the six fixed-name JSON documents the analytics front
//! end reads.
//!
//! Writes are independent and unordered among themselves; there is no
//! cross-file atomicity. A failed write aborts the run and the partial
//! output set is not valid.

use crate::{
    engine::GeneratedData,
    error::{GenError, GenResult},
};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const VOLUME_FILE: &str = "historical_volume.json";
pub const DEFLECTION_FILE: &str = "deflection_history.json";
pub const STAFFING_FILE: &str = "staffing_schedules.json";
pub const SLA_FILE: &str = "sla_performance.json";
pub const COST_FILE: &str = "cost_data.json";
pub const SUMMARY_FILE: &str = "summary_stats.json";

pub struct DataSink {
    out_dir: PathBuf,
}

impl DataSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory. Callers can invoke this before the
    /// generation run so an unusable path fails fast.
    pub fn ensure_dir(&self) -> GenResult<()> {
        fs::create_dir_all(&self.out_dir).map_err(|source| GenError::Io {
            path: self.out_dir.clone(),
            source,
        })
    }

    /// Create the output directory and write all six datasets.
    pub fn write_all(&self, data: &GeneratedData) -> GenResult<()> {
        self.ensure_dir()?;

        self.write_file(VOLUME_FILE, &data.volume)?;
        self.write_file(DEFLECTION_FILE, &data.deflection)?;
        self.write_file(STAFFING_FILE, &data.staffing)?;
        self.write_file(SLA_FILE, &data.sla)?;
        self.write_file(COST_FILE, &data.cost)?;
        self.write_file(SUMMARY_FILE, &data.summary)?;

        Ok(())
    }

    fn write_file<T: Serialize>(&self, name: &str, payload: &T) -> GenResult<()> {
        let path = self.out_dir.join(name);
        let json = serde_json::to_vec_pretty(payload)?;
        fs::write(&path, json).map_err(|source| GenError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}
