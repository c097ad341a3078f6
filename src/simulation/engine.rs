// src/simulation/engine.rs

use crate::error::{Result, SimError};
use crate::model::week::Weekday;
use serde::Serialize;

/// How far the feasibility window looks ahead, in days (72 hours).
const WINDOW_DAYS: usize = 3;

// We make this Serialize so we can write it to CSV later
#[derive(Debug, Clone, Serialize)]
pub struct DayRecord {
    pub day: usize,
    pub weekday: &'static str,
    pub backlog_start: u32,
    pub backlog_end: u32,
    pub safe_limit: u32,
    pub is_overflow: bool,
}

pub struct OverflowSimulation {
    // The Schedules (one entry per simulated day)
    capacity: Vec<u32>,
    inflow: Vec<u32>,

    // Jobs left unprocessed at the previous day's close
    remaining: u32,
    current_day: usize,

    pub records: Vec<DayRecord>,
}

impl OverflowSimulation {
    /// Creates a simulation over a capacity and an inflow schedule.
    ///
    /// Both schedules must cover the same, non-zero number of days. Anything
    /// else is a caller contract violation and is rejected up front rather
    /// than silently truncated.
    pub fn new(capacity: Vec<u32>, inflow: Vec<u32>) -> Result<Self> {
        if capacity.len() != inflow.len() {
            return Err(SimError::ScheduleMismatch {
                capacity: capacity.len(),
                inflow: inflow.len(),
            });
        }
        if capacity.is_empty() {
            return Err(SimError::EmptySchedule);
        }

        Ok(Self {
            capacity,
            inflow,
            remaining: 0,
            current_day: 0,
            records: Vec::new(),
        })
    }

    /// Runs the full forward pass, one record per day.
    ///
    /// Days are strictly sequential: each day's starting backlog depends on
    /// the previous day's close, so the pass cannot be reordered. After the
    /// run the record list is complete and is only read from.
    pub fn run(&mut self) {
        while self.current_day < self.capacity.len() {
            self.step();
        }
    }

    fn step(&mut self) {
        let day = self.current_day;

        // Jobs waiting this morning: yesterday's leftovers plus today's arrivals.
        let backlog_start = self.remaining + self.inflow[day];

        // Work off as much as today's capacity allows.
        let processed = backlog_start.min(self.capacity[day]);
        let backlog_end = backlog_start - processed;
        self.remaining = backlog_end;

        let safe_limit = self.window_capacity(day);

        self.records.push(DayRecord {
            day,
            weekday: Weekday::from_index(day).label(),
            backlog_start,
            backlog_end,
            safe_limit,
            // A tie still clears inside the window; only a strict excess overflows.
            is_overflow: backlog_start > safe_limit,
        });

        self.current_day += 1;
    }

    /// Total capacity reachable in the 72-hour window starting at `day`:
    /// today plus the next two days, truncated at the end of the horizon.
    fn window_capacity(&self, day: usize) -> u32 {
        let end = (day + WINDOW_DAYS).min(self.capacity.len());
        self.capacity[day..end].iter().sum()
    }

    /// Number of days whose starting backlog cannot clear within the window.
    pub fn overflow_days(&self) -> usize {
        self.records.iter().filter(|r| r.is_overflow).count()
    }

    /// Indices of all flagged days, in day order.
    pub fn overflow_day_indices(&self) -> Vec<usize> {
        self.records
            .iter()
            .filter(|r| r.is_overflow)
            .map(|r| r.day)
            .collect()
    }

    /// True when every day clears within the 72-hour window.
    pub fn is_within_limit(&self) -> bool {
        self.overflow_days() == 0
    }

    /// Largest starting backlog seen across the run.
    pub fn peak_backlog(&self) -> u32 {
        self.records.iter().map(|r| r.backlog_start).max().unwrap_or(0)
    }
}
