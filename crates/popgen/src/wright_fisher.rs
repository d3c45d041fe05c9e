//! Wright-Fisher infinite-alleles model.

use crate::errors::{PopgenError, validate_population_size, validate_rate};

/// Per-locus mutation probability per generation for a given theta.
///
/// Uses `μ = θ / N`. As with the Moran version, code that mutates one of `M`
/// loci per event should scale by `M`.
pub fn mutation_rate_from_theta(population_size: usize, theta: f64) -> Result<f64, PopgenError> {
    validate_population_size(population_size)?;
    if !theta.is_finite() || theta < 0.0 {
        return Err(PopgenError::InvalidTheta(theta));
    }
    Ok(theta / population_size as f64)
}

/// Expected generations for an unlabelled infinite-alleles WF process to reach
/// quasi-stationarity, rounded up to the next multiple of 1000.
///
/// # Formula
///
/// $$\theta = 2N\mu, \qquad t = \frac{9.2 N}{\theta + 1}$$
///
/// The constant is for the diploid process, which makes the estimate
/// conservative for a haploid population.
///
/// # Arguments
///
/// * `population_size` - Size of the haploid population
/// * `mutation_rate` - Innovation rate per individual per generation
///
/// # References
///
/// Ewens, W. J., & Gillespie, J. H. (1974). Some simulation results for the
/// neutral allele model. Theor. Pop. Biol. 6, 35-57 (eq. 17).
pub fn convergence_generations(
    population_size: usize,
    mutation_rate: f64,
) -> Result<u64, PopgenError> {
    validate_population_size(population_size)?;
    validate_rate("mutation_rate", mutation_rate)?;

    let n = population_size as f64;
    let theta = 2.0 * n * mutation_rate;
    let time = (9.2 * n) / (theta + 1.0);

    Ok((time / 1000.0).ceil() as u64 * 1000)
}
