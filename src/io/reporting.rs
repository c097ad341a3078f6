// src/io/reporting.rs

use crate::simulation::engine::{DayRecord, OverflowSimulation};
use std::error::Error;
use std::path::Path;

/// Writes the per-day simulation records to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `records` - The day records from a finished simulation run.
pub fn write_simulation_log(file_path: &str, records: &[DayRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        records.len(),
        file_path
    );
    Ok(())
}

/// Prints the feasibility verdict for a finished run: either an all-clear,
/// or the days whose starting backlog cannot be worked off within 72 hours.
pub fn print_summary(sim: &OverflowSimulation) {
    println!("\n=== 72-hour Completion Check ===");
    println!("Peak starting backlog: {} jobs", sim.peak_backlog());

    if sim.is_within_limit() {
        println!("No overflow detected within the 72-hour limit.");
    } else {
        println!(
            "Overflow detected on {} day(s): {:?}",
            sim.overflow_days(),
            sim.overflow_day_indices()
        );
    }
}
