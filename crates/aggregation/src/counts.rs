//! Trait and configuration count maps and their additive merge.
//!
//! These maps behave like frequency counters: merging adds the incoming count
//! for each key onto the existing one, with absent keys starting at zero.
//! Totals saturate at `Count::MAX`.

use std::collections::{BTreeMap, HashMap};

/// Identifier of one trait (allele) at a locus.
pub type TraitId = u64;

/// Index of a locus, in `[0, num_loci)`.
pub type Locus = usize;

/// Number of occurrences.
pub type Count = u64;

/// Trait occurrence counts at one locus.
pub type TraitCounts = HashMap<TraitId, Count>;

/// Trait counts for every locus.
pub type LocusCounts = BTreeMap<Locus, TraitCounts>;

/// The traits carried jointly across loci at one sampling instant.
pub type ConfigurationKey = Vec<TraitId>;

/// Occurrence counts of joint trait configurations.
pub type ConfigurationCounts = HashMap<ConfigurationKey, Count>;

/// Add every count in `incoming` onto `target`.
pub fn merge_trait_counts(target: &mut TraitCounts, incoming: &TraitCounts) {
    for (&trait_id, &count) in incoming {
        let total = target.entry(trait_id).or_insert(0);
        *total = total.saturating_add(count);
    }
}

/// Merge per-locus counts, creating loci absent from `target`.
pub fn merge_locus_counts(target: &mut LocusCounts, incoming: &LocusCounts) {
    for (&locus, counts) in incoming {
        merge_trait_counts(target.entry(locus).or_default(), counts);
    }
}

/// Add every configuration count in `incoming` onto `target`.
pub fn merge_configuration_counts(
    target: &mut ConfigurationCounts,
    incoming: &ConfigurationCounts,
) {
    for (key, &count) in incoming {
        match target.get_mut(key) {
            Some(existing) => *existing = existing.saturating_add(count),
            None => {
                target.insert(key.clone(), count);
            }
        }
    }
}

/// Drop configurations whose count is zero.
pub fn prune_zero_counts(mut counts: ConfigurationCounts) -> ConfigurationCounts {
    counts.retain(|_, count| *count > 0);
    counts
}
