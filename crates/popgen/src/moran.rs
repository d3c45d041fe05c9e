//! Moran infinite-alleles model.
//!
//! In a Moran model one individual is replaced per tick, so a generation is
//! `population_size` ticks. Durations in this module are given either in
//! generations or in ticks and say so in the function name.

use crate::errors::{PopgenError, validate_population_size, validate_rate};

/// Convert a duration in generations into Moran model ticks.
///
/// # Errors
///
/// Returns [`PopgenError::InvalidPopulationSize`] for an empty population and
/// [`PopgenError::TickOverflow`] if the product does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use transmission_popgen::moran::generations_to_ticks;
///
/// assert_eq!(generations_to_ticks(50, 100).unwrap(), 5000);
/// ```
pub fn generations_to_ticks(generations: u64, population_size: usize) -> Result<u64, PopgenError> {
    validate_population_size(population_size)?;
    (population_size as u64)
        .checked_mul(generations)
        .ok_or(PopgenError::TickOverflow {
            generations,
            population_size,
        })
}

/// Number of generations before an infinite-alleles Moran model converges to
/// stationarity at one locus.
///
/// # Formula
///
/// $$t = \frac{\ln(N \mu)}{\mu}$$
///
/// # References
///
/// Watkins, J. C. (2010). Convergence time to the Ewens sampling formula.
/// J. Math. Biol. 60, 189-206.
pub fn watkins_convergence_generations(
    population_size: usize,
    innovation_rate: f64,
) -> Result<f64, PopgenError> {
    validate_population_size(population_size)?;
    validate_rate("innovation_rate", innovation_rate)?;
    Ok((population_size as f64 * innovation_rate).ln() / innovation_rate)
}

/// Ticks for one locus to converge to stationarity.
pub fn watkins_convergence_ticks(
    population_size: usize,
    innovation_rate: f64,
) -> Result<f64, PopgenError> {
    Ok(population_size as f64 * watkins_convergence_generations(population_size, innovation_rate)?)
}

/// Ticks for `num_loci` loci to converge, assuming each tick is assigned to
/// one locus uniformly at random.
pub fn watkins_multilocus_convergence_ticks(
    population_size: usize,
    num_loci: usize,
    innovation_rate: f64,
) -> Result<f64, PopgenError> {
    Ok(num_loci as f64 * watkins_convergence_ticks(population_size, innovation_rate)?)
}

/// Per-locus mutation probability per tick for a given population-level theta.
///
/// Inverts Ewens (2004) eq. 3.98, `θ = 2Nμ / (1 - μ)`:
///
/// $$\mu = \frac{\theta / 2N}{1 - \theta / 2N}$$
///
/// Code that picks one of `M` loci to mutate should use `M × μ` as the event
/// probability per tick.
///
/// # Errors
///
/// `theta` must be non-negative and strictly below `2N`.
pub fn mutation_rate_from_theta(population_size: usize, theta: f64) -> Result<f64, PopgenError> {
    validate_population_size(population_size)?;
    let scaled = theta / (2.0 * population_size as f64);
    if !theta.is_finite() || theta < 0.0 || scaled >= 1.0 {
        return Err(PopgenError::InvalidTheta(theta));
    }
    Ok(scaled / (1.0 - scaled))
}
