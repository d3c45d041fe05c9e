//! Chinese Restaurant Process.
//!
//! With the discount parameter fixed at zero the CRP partition of `n`
//! individuals follows the Ewens sampling distribution with parameter θ, so
//! it gives a cheap draw of neutral infinite-alleles trait counts at
//! stationarity.

use crate::errors::{PopgenError, validate_population_size};
use log::trace;
use rand::Rng;

/// Assign each of `population` individuals to a table (trait).
///
/// The first individual sits at table 1. Individual `i` (1-based) opens a new
/// table with probability `θ / (i - 1 + θ)` and otherwise joins the table of a
/// uniformly chosen earlier individual. Tables are numbered from 1 in order of
/// creation.
///
/// In the Bayesian nonparametrics literature θ is often called α, with the
/// discount of the two-parameter Pitman-Yor process called θ instead.
///
/// # Errors
///
/// Fails for an empty population or a negative or non-finite theta.
pub fn simulate_memberships<R: Rng + ?Sized>(
    population: usize,
    theta: f64,
    rng: &mut R,
) -> Result<Vec<usize>, PopgenError> {
    validate_population_size(population)?;
    if !theta.is_finite() || theta < 0.0 {
        return Err(PopgenError::InvalidTheta(theta));
    }

    let mut assignments = Vec::with_capacity(population);
    let mut current_table = 1;
    assignments.push(current_table);

    for i in 2..=population {
        let prob = theta / ((i - 1) as f64 + theta);
        if rng.random::<f64>() < prob {
            current_table += 1;
            assignments.push(current_table);
        } else {
            let table = assignments[rng.random_range(0..assignments.len())];
            assignments.push(table);
        }
    }

    trace!("CRP with theta {theta}: {current_table} tables for {population} individuals");
    Ok(assignments)
}

/// Simulate a CRP partition and return its table sizes, largest first.
pub fn unlabeled_counts<R: Rng + ?Sized>(
    population: usize,
    theta: f64,
    rng: &mut R,
) -> Result<Vec<usize>, PopgenError> {
    let assignments = simulate_memberships(population, theta, rng)?;
    let num_tables = assignments.iter().copied().max().unwrap_or(0);

    let mut counts = vec![0usize; num_tables];
    for table in assignments {
        counts[table - 1] += 1;
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));
    Ok(counts)
}
