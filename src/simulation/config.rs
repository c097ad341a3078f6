// src/simulation/config.rs

use crate::error::Result;
use crate::io::schedule;
use crate::model::pattern::WeekdayPattern;
use crate::model::week::Weekday;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub weeks: usize,
    pub capacity_pattern: WeekdayPattern,
    pub inflow_pattern: WeekdayPattern,
}

impl SimulationConfig {
    /// Number of simulated days.
    pub fn horizon_days(&self) -> usize {
        self.weeks * 7
    }

    /// Tiles both weekly patterns across the full horizon.
    pub fn expand(&self) -> Result<(Vec<u32>, Vec<u32>)> {
        let capacity = schedule::tile_pattern(&self.capacity_pattern, self.weeks)?;
        let inflow = schedule::tile_pattern(&self.inflow_pattern, self.weeks)?;
        Ok((capacity, inflow))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            weeks: 5,
            // Full capacity Mon-Wed, reduced Thu-Fri, closed on the weekend.
            capacity_pattern: WeekdayPattern::new([35, 35, 35, 10, 10, 0, 0]),
            // 100 jobs arriving every Monday and Friday.
            inflow_pattern: WeekdayPattern::from_days(&[Weekday::Monday, Weekday::Friday], 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_five_weeks() {
        let config = SimulationConfig::default();
        assert_eq!(config.horizon_days(), 35);
        assert_eq!(config.capacity_pattern.values(), &[35, 35, 35, 10, 10, 0, 0]);
        assert_eq!(config.inflow_pattern.values(), &[100, 0, 0, 0, 100, 0, 0]);
    }

    #[test]
    fn expand_tiles_both_schedules_to_the_horizon() {
        let config = SimulationConfig::default();
        let (capacity, inflow) = config.expand().unwrap();

        assert_eq!(capacity.len(), 35);
        assert_eq!(inflow.len(), 35);
        assert_eq!(&capacity[..7], &[35, 35, 35, 10, 10, 0, 0]);
        assert_eq!(&capacity[28..], &[35, 35, 35, 10, 10, 0, 0]);
        assert_eq!(inflow[7], 100);
        assert_eq!(inflow[11], 100);
    }
}
