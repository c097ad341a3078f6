// src/io/schedule.rs

use crate::error::{Result, SimError};
use crate::model::pattern::WeekdayPattern;
use rand::thread_rng;
use rand_distr::{Distribution, Normal};

/// Expands a weekly pattern into a full simulation schedule by repeating it
/// once per week. Element `i` of the result is the pattern value for weekday
/// `i % 7`.
///
/// # Arguments
/// * `pattern` - Per-weekday values (capacity or inflow).
/// * `weeks` - Length of the simulation in weeks; must be at least 1.
pub fn tile_pattern(pattern: &WeekdayPattern, weeks: usize) -> Result<Vec<u32>> {
    if weeks < 1 {
        return Err(SimError::NoWeeks);
    }

    let mut schedule = Vec::with_capacity(weeks * 7);
    for _ in 0..weeks {
        schedule.extend_from_slice(pattern.values());
    }
    Ok(schedule)
}

/// Generates a schedule where every day carries the exact same value.
/// Useful as a stable baseline against weekday-shaped inflow.
#[allow(dead_code)]
pub fn constant_schedule(days: usize, value: u32) -> Vec<u32> {
    vec![value; days]
}

/// Generates an inflow schedule from a Normal (Bell Curve) distribution.
///
/// Samples are rounded to the nearest integer and clamped at zero, since a
/// negative number of arriving jobs is meaningless.
///
/// # Arguments
/// * `days` - Length of the simulation in days.
/// * `mean` - The average daily inflow (e.g., 40.0).
/// * `std_dev` - The standard deviation (volatility) (e.g., 10.0).
#[allow(dead_code)]
pub fn noisy_schedule(days: usize, mean: f64, std_dev: f64) -> Vec<u32> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean, std_dev).unwrap();

    let mut schedule = Vec::with_capacity(days);

    for _ in 0..days {
        let val: f64 = normal.sample(&mut rng);
        let int_val = val.round();

        if int_val < 0.0 {
            schedule.push(0);
        } else {
            schedule.push(int_val as u32);
        }
    }

    schedule
}
