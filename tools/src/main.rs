//! wfm-datagen: headless synthetic-data runner for the WFM analytics
//! prototype.
//!
//! Usage:
//!   wfm-datagen --seed 42 --output public/data

use anyhow::{bail, Context, Result};
use std::env;
use wfm_core::{
    engine::{GenEngine, GeneratedData},
    sink::DataSink,
};

const DEFAULT_OUTPUT_DIR: &str = "public/data";
const DEFAULT_SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed: u64 = parse_flag(&args, &["--seed", "-s"], DEFAULT_SEED)?;
    let out_dir = flag_value(&args, &["--output", "-o"])
        .unwrap_or(DEFAULT_OUTPUT_DIR)
        .to_string();

    println!("wfm-datagen — synthetic contact-center data");
    println!("  seed:    {seed}");
    println!("  output:  {out_dir}");
    println!();

    log::debug!("raw args: {args:?}");

    // Claim the output directory before doing any generation work.
    let sink = DataSink::new(&out_dir);
    sink.ensure_dir()
        .with_context(|| format!("preparing output directory {out_dir}"))?;

    let engine = GenEngine::new(seed);
    let data = engine.run();

    sink.write_all(&data)
        .with_context(|| format!("writing datasets to {out_dir}"))?;

    print_summary(&data);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    args.windows(2)
        .find(|w| names.contains(&w[0].as_str()))
        .map(|w| w[1].as_str())
}

/// Parse an optional typed flag. Unlike a silent default, a malformed
/// value is a hard error: proceeding with a surprise seed would change
/// every dataset.
fn parse_flag<T: std::str::FromStr>(args: &[String], names: &[&str], default: T) -> Result<T> {
    match flag_value(args, names) {
        None => Ok(default),
        Some(raw) => match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => bail!("invalid value for {}: {raw:?}", names[0]),
        },
    }
}

fn print_summary(data: &GeneratedData) {
    println!("=== GENERATION SUMMARY ===");
    println!("  volume records:    {}", data.volume.len());
    println!("  staffing records:  {}", data.staffing.len());
    println!("  deflection months: {}", data.deflection.len());
    println!("  sla days:          {}", data.sla.len());
    println!("  total contacts:    {}", data.summary.total_contacts);
    println!(
        "  peak day:          {} ({} contacts)",
        data.summary.peak_day.date, data.summary.peak_day.volume
    );
    println!("  avg SLA:           {:.3}", data.summary.avg_sla);
}
