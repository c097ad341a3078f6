// src/model/pattern.rs

use crate::error::{Result, SimError};
use crate::model::week::Weekday;

/// One value per weekday, Monday-first.
///
/// The same shape describes both processing capacity and job inflow. The
/// unsigned element type carries the non-negativity invariant, so a pattern
/// that exists is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayPattern {
    values: [u32; 7],
}

impl WeekdayPattern {
    pub fn new(values: [u32; 7]) -> Self {
        Self { values }
    }

    /// Builds a pattern from a slice, rejecting anything that is not exactly
    /// one value per weekday. This is the validation entry point for callers
    /// that marshal values in from an input layer.
    #[allow(dead_code)]
    pub fn from_slice(values: &[u32]) -> Result<Self> {
        let values: [u32; 7] = values
            .try_into()
            .map_err(|_| SimError::PatternLength(values.len()))?;
        Ok(Self { values })
    }

    /// `amount` on each selected weekday, 0 everywhere else. Selecting the
    /// same day twice has no extra effect.
    pub fn from_days(days: &[Weekday], amount: u32) -> Self {
        let mut values = [0; 7];
        for day in days {
            values[day.index()] = amount;
        }
        Self { values }
    }

    /// The same value on all seven days.
    #[allow(dead_code)]
    pub fn uniform(value: u32) -> Self {
        Self { values: [value; 7] }
    }

    pub fn values(&self) -> &[u32; 7] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_accepts_exactly_seven_values() {
        let pattern = WeekdayPattern::from_slice(&[35, 35, 35, 10, 10, 0, 0]).unwrap();
        assert_eq!(pattern.values(), &[35, 35, 35, 10, 10, 0, 0]);
    }

    #[test]
    fn from_slice_rejects_wrong_lengths() {
        assert_eq!(
            WeekdayPattern::from_slice(&[1, 2, 3]),
            Err(SimError::PatternLength(3))
        );
        assert_eq!(
            WeekdayPattern::from_slice(&[0; 8]),
            Err(SimError::PatternLength(8))
        );
    }

    #[test]
    fn from_days_marks_only_selected_days() {
        let pattern = WeekdayPattern::from_days(&[Weekday::Monday, Weekday::Friday], 100);
        assert_eq!(pattern.values(), &[100, 0, 0, 0, 100, 0, 0]);
    }

    #[test]
    fn from_days_is_idempotent_for_duplicates() {
        let once = WeekdayPattern::from_days(&[Weekday::Tuesday], 40);
        let twice = WeekdayPattern::from_days(&[Weekday::Tuesday, Weekday::Tuesday], 40);
        assert_eq!(once, twice);
    }

    #[test]
    fn uniform_fills_the_whole_week() {
        assert_eq!(WeekdayPattern::uniform(7).values(), &[7; 7]);
    }
}
