use thiserror::Error;

/// Error type for population-genetics formulas, CRP simulation and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopgenError {
    /// Population size must be at least one individual.
    #[error("Invalid population size: {0} (must be positive)")]
    InvalidPopulationSize(usize),

    /// An innovation or mutation rate outside its admissible range.
    #[error("Invalid rate for {name}: {value} (must be in (0.0, 1.0])")]
    InvalidRate { name: &'static str, value: f64 },

    /// Theta must be finite and non-negative.
    #[error("Invalid theta: {0} (must be finite and >= 0.0)")]
    InvalidTheta(f64),

    /// The scaled value does not fit in the tick range.
    #[error("Duration of {generations} generations at population size {population_size} overflows the tick range")]
    TickOverflow {
        generations: u64,
        population_size: usize,
    },

    /// A requested sample is larger than the population it is drawn from.
    #[error("Sample size requested: {requested} is larger than population: {available}")]
    SampleTooLarge { requested: usize, available: u64 },

    /// Sampling with replacement needs at least one individual.
    #[error("Cannot sample from an empty counter")]
    EmptyCounter,
}

/// Check a rate lies in `(0.0, 1.0]`.
pub(crate) fn validate_rate(name: &'static str, value: f64) -> Result<(), PopgenError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(PopgenError::InvalidRate { name, value })
    }
}

/// Check a population size is positive.
pub(crate) fn validate_population_size(population_size: usize) -> Result<(), PopgenError> {
    if population_size == 0 {
        Err(PopgenError::InvalidPopulationSize(population_size))
    } else {
        Ok(())
    }
}
