//! Sub-sampling of trait counters.
//!
//! A counter maps a trait to the number of individuals carrying it. The
//! functions here draw smaller counters from it, the way a field sample of
//! `n` individuals would be drawn from a simulated population.

use crate::errors::PopgenError;
use log::debug;
use rand::Rng;
use rand::seq::index;
use rand_distr::{Binomial, Distribution};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Counter entries in key order with their cumulative upper bounds.
///
/// Sorting keeps draws reproducible for a seeded RNG regardless of the
/// counter's hash order.
fn sorted_entries<K: Ord>(counter: &HashMap<K, u64>) -> (Vec<(&K, u64)>, u64) {
    let mut entries: Vec<(&K, u64)> = counter
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(k, c)| (k, *c))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let total = entries.iter().map(|(_, c)| c).sum();
    (entries, total)
}

/// Draw samples without replacement from a counter, one per requested size.
///
/// Each individual represented in `counter` is drawn at most once per
/// sample. Returns the sampled counters keyed by sample size.
///
/// # Errors
///
/// [`PopgenError::SampleTooLarge`] if any size exceeds the counter total.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
/// use std::collections::HashMap;
/// use transmission_popgen::sampling::sample_counter;
///
/// let counter = HashMap::from([("a", 300), ("b", 200), ("c", 400)]);
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
/// let samples = sample_counter(&[10, 50], &counter, &mut rng).unwrap();
/// assert_eq!(samples[&50].values().sum::<u64>(), 50);
/// ```
pub fn sample_counter<K, R>(
    sample_sizes: &[usize],
    counter: &HashMap<K, u64>,
    rng: &mut R,
) -> Result<BTreeMap<usize, HashMap<K, u64>>, PopgenError>
where
    K: Eq + Hash + Ord + Clone,
    R: Rng + ?Sized,
{
    let (entries, total) = sorted_entries(counter);
    let mut cumulative = Vec::with_capacity(entries.len());
    let mut running = 0u64;
    for (_, count) in &entries {
        running += count;
        cumulative.push(running);
    }

    if let Some(&requested) = sample_sizes.iter().find(|&&s| s as u64 > total) {
        return Err(PopgenError::SampleTooLarge {
            requested,
            available: total,
        });
    }

    let mut result = BTreeMap::new();
    for &size in sample_sizes {
        let mut sampled: HashMap<K, u64> = HashMap::new();
        for idx in index::sample(rng, total as usize, size) {
            let entry = cumulative.partition_point(|&end| end <= idx as u64);
            *sampled.entry(entries[entry].0.clone()).or_insert(0) += 1;
        }
        debug!("sampled {size} of {total} individuals into {} traits", sampled.len());
        result.insert(size, sampled);
    }

    Ok(result)
}

/// Draw samples with replacement (a multinomial draw over trait frequencies).
///
/// Traits that receive no draws are left out of the sampled counter.
///
/// # Errors
///
/// [`PopgenError::EmptyCounter`] if the counter holds no individuals.
pub fn sample_counter_with_replacement<K, R>(
    sample_sizes: &[usize],
    counter: &HashMap<K, u64>,
    rng: &mut R,
) -> Result<BTreeMap<usize, HashMap<K, u64>>, PopgenError>
where
    K: Eq + Hash + Ord + Clone,
    R: Rng + ?Sized,
{
    let (entries, total) = sorted_entries(counter);
    if total == 0 {
        return Err(PopgenError::EmptyCounter);
    }

    let mut result = BTreeMap::new();
    for &size in sample_sizes {
        let mut sampled: HashMap<K, u64> = HashMap::new();
        let mut remaining_draws = size as u64;
        let mut remaining_mass = total;

        // Conditional binomials: each trait takes its share of what is left.
        for (key, count) in &entries {
            if remaining_draws == 0 {
                break;
            }
            let drawn = if *count >= remaining_mass {
                remaining_draws
            } else {
                // count < remaining_mass here, so p lies in (0, 1).
                let p = *count as f64 / remaining_mass as f64;
                Binomial::new(remaining_draws, p)
                    .map_err(|_| PopgenError::InvalidRate {
                        name: "binomial probability",
                        value: p,
                    })?
                    .sample(rng)
            };
            if drawn > 0 {
                sampled.insert((*key).clone(), drawn);
            }
            remaining_draws -= drawn;
            remaining_mass -= count;
        }

        result.insert(size, sampled);
    }

    Ok(result)
}
