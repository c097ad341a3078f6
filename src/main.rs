mod error;
mod io;
mod model;
mod simulation;

use crate::io::reporting;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::OverflowSimulation;
use std::env;
use std::process;

fn main() {
    println!("=== 72-hour Job Overflow Simulation ===");

    // 1. SETUP CONFIGURATION
    // Defaults mirror a typical operation: full capacity Mon-Wed, reduced
    // Thu-Fri, closed weekends, with 100 jobs arriving Monday and Friday.
    let mut config = SimulationConfig::default();

    // The week count can be overridden from the command line.
    if let Some(arg) = env::args().nth(1) {
        match arg.parse() {
            Ok(weeks) => config.weeks = weeks,
            Err(_) => {
                eprintln!("Invalid week count: '{}'", arg);
                process::exit(1);
            }
        }
    }

    // 2. EXPAND SCHEDULES
    // The weekly patterns repeat across the whole horizon.
    let (capacity, inflow) = match config.expand() {
        Ok(schedules) => schedules,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // 3. INITIALIZE SIMULATION
    let mut sim = match OverflowSimulation::new(capacity, inflow) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid schedules: {}", e);
            process::exit(1);
        }
    };

    // 4. RUN SIMULATION
    println!(
        "Running simulation for {} weeks ({} days)...",
        config.weeks,
        config.horizon_days()
    );
    sim.run();

    // 5. EXPORT RESULTS
    let output_file = "overflow_report.csv";
    match reporting::write_simulation_log(output_file, &sim.records) {
        Ok(_) => println!("Success! Data written to ./{}", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    // 6. PRINT FEASIBILITY SUMMARY
    reporting::print_summary(&sim);

    println!("\nSimulation Complete.");
}
