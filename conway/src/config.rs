// config.rs - Default sizes, timings and the runtime configuration

use std::time::Duration;

use crate::error::{Error, Result};
use crate::patterns;

// Playfield size used by the desktop app
pub const DEFAULT_ROWS: usize = 75;
pub const DEFAULT_COLS: usize = 100;

// Smallest grid the seed fleet fits on without wrapping onto itself
pub const MIN_SEEDED_ROWS: usize = patterns::SEED_MAX_ROW + 1;
pub const MIN_SEEDED_COLS: usize = patterns::SEED_MAX_COL + 1;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100); // ~10 gen/sec
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(2000);

// Number of past generations remembered for cycle detection
pub const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_interval: Duration,
    /// Stop the run once a generation repeats one of the last `HISTORY_LEN`.
    pub stop_on_cycle: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            stop_on_cycle: false,
        }
    }
}

impl LifeConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_seeded_dimensions(self.rows, self.cols)?;
        check_interval(self.tick_interval)
    }

    /// Generations per second implied by the tick interval.
    pub fn speed(&self) -> f32 {
        1000.0 / self.tick_interval.as_millis().max(1) as f32
    }

    /// Sets the tick interval from a gen/sec figure, clamped to the allowed range.
    pub fn set_speed(&mut self, gens_per_sec: f32) {
        let millis = (1000.0 / gens_per_sec.max(f32::EPSILON)) as u64;
        let millis = millis.clamp(
            MIN_TICK_INTERVAL.as_millis() as u64,
            MAX_TICK_INTERVAL.as_millis() as u64,
        );
        self.tick_interval = Duration::from_millis(millis);
    }
}

pub(crate) fn check_seeded_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows < MIN_SEEDED_ROWS || cols < MIN_SEEDED_COLS {
        return Err(Error::InvalidDimensions {
            rows,
            cols,
            min_rows: MIN_SEEDED_ROWS,
            min_cols: MIN_SEEDED_COLS,
        });
    }
    Ok(())
}

fn check_interval(interval: Duration) -> Result<()> {
    if interval < MIN_TICK_INTERVAL || interval > MAX_TICK_INTERVAL {
        return Err(Error::InvalidInterval {
            millis: interval.as_millis() as u64,
            min: MIN_TICK_INTERVAL.as_millis() as u64,
            max: MAX_TICK_INTERVAL.as_millis() as u64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!((config.speed() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_grid_smaller_than_seed() {
        let config = LifeConfig::new(28, 100);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidDimensions { rows: 28, min_rows: 29, .. })
        ));
        assert!(LifeConfig::new(29, 59).validate().is_err());
        assert!(LifeConfig::new(29, 60).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_interval() {
        let mut config = LifeConfig::default();
        config.tick_interval = Duration::from_millis(1);
        assert!(matches!(config.validate(), Err(Error::InvalidInterval { millis: 1, .. })));
    }

    #[test]
    fn set_speed_clamps() {
        let mut config = LifeConfig::default();
        config.set_speed(4.0);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        config.set_speed(10_000.0);
        assert_eq!(config.tick_interval, MIN_TICK_INTERVAL);
        config.set_speed(0.0);
        assert_eq!(config.tick_interval, MAX_TICK_INTERVAL);
    }
}
