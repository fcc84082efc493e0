//! wfm-core: deterministic synthetic contact-center data generation.
//!
//! Produces one year of interrelated operational datasets — hourly contact
//! volumes, monthly AI deflection rates, per-shift staffing, daily service
//! levels, cost/benchmark tables, and a roll-up summary — used to populate
//! the WFM analytics prototype with realistic-looking numbers.
//!
//! Everything derives from fixed constants and a single master seed: two
//! runs with the same seed emit byte-identical JSON.

pub mod anomaly;
pub mod config;
pub mod cost;
pub mod deflection;
pub mod engine;
pub mod error;
pub mod rng;
pub mod sink;
pub mod sla;
pub mod staffing;
pub mod summary;
pub mod types;
pub mod volume;
