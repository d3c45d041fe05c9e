//! Time-averaging configuration.
//!
//! Holds the parameters for one window stack so they can be stored next to
//! the simulation configuration and rebuilt later.

use crate::errors::TimeAveragingError;
use crate::time_averaging::{Generations, MoranCumulativeTimeAverager, MoranTimeAverager, Tick};
use serde::{Deserialize, Serialize};

fn default_ending_interval() -> bool {
    true
}

fn default_num_loci() -> usize {
    1
}

/// Parameters for building a window stack.
///
/// Durations and population size are stored signed so that a document with a
/// zero or negative value parses and is rejected as
/// [`TimeAveragingError::InvalidConfiguration`] when the averager is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAveragingConfig {
    /// Tick shared by every window
    pub anchor_tick: Tick,
    /// Window durations in generations
    pub durations: Vec<i64>,
    /// Ticks per generation
    pub population_size: i64,
    /// Loci tracked by the cumulative averager
    #[serde(default = "default_num_loci")]
    pub num_loci: usize,
    /// `true` pins window starts to the anchor, `false` pins window ends
    #[serde(default = "default_ending_interval")]
    pub ending_interval: bool,
}

impl TimeAveragingConfig {
    /// Create a configuration with one locus and `ending_interval = true`.
    pub fn new(anchor_tick: Tick, durations: Vec<i64>, population_size: i64) -> Self {
        Self {
            anchor_tick,
            durations,
            population_size,
            num_loci: default_num_loci(),
            ending_interval: default_ending_interval(),
        }
    }

    pub fn with_num_loci(mut self, num_loci: usize) -> Self {
        self.num_loci = num_loci;
        self
    }

    pub fn with_ending_interval(mut self, ending_interval: bool) -> Self {
        self.ending_interval = ending_interval;
        self
    }

    /// Parse a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, TimeAveragingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TimeAveragingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build_window_stack(&self) -> Result<MoranTimeAverager, TimeAveragingError> {
        let (durations, population_size) = self.validated()?;
        MoranTimeAverager::new(
            self.anchor_tick,
            &durations,
            population_size,
            self.ending_interval,
        )
    }

    pub fn build_cumulative(&self) -> Result<MoranCumulativeTimeAverager, TimeAveragingError> {
        let (durations, population_size) = self.validated()?;
        MoranCumulativeTimeAverager::new(
            self.anchor_tick,
            &durations,
            population_size,
            self.num_loci,
            self.ending_interval,
        )
    }

    /// Durations and population size converted to their unsigned forms.
    fn validated(&self) -> Result<(Vec<Generations>, usize), TimeAveragingError> {
        let population_size = usize::try_from(self.population_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                TimeAveragingError::InvalidConfiguration(format!(
                    "population size must be positive, got {}",
                    self.population_size
                ))
            })?;

        let durations = self
            .durations
            .iter()
            .map(|&d| {
                Generations::try_from(d)
                    .ok()
                    .filter(|&g| g > 0)
                    .ok_or_else(|| {
                        TimeAveragingError::InvalidConfiguration(format!(
                            "window durations must be positive, got {d}"
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((durations, population_size))
    }
}
