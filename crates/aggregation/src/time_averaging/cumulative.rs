//! Cumulative time averager.
//!
//! Each window of the stack accumulates per-locus trait counts and joint
//! configuration counts for every sample whose tick falls inside it. Windows
//! overlap by construction, so one sample usually lands in several.

use super::report::{ConfigurationCount, WindowReport};
use super::window::{AnchorMode, Generations, Tick, WindowSpec, bounds, build_windows};
use crate::counts::{
    ConfigurationCounts, Locus, LocusCounts, TraitCounts, merge_configuration_counts,
    merge_locus_counts, prune_zero_counts,
};
use crate::errors::TimeAveragingError;
use log::trace;
use std::collections::BTreeMap;

/// Accumulated state of one window.
#[derive(Debug, Clone)]
struct WindowState {
    spec: WindowSpec,
    counts_by_locus: LocusCounts,
    configuration_counts: ConfigurationCounts,
}

impl WindowState {
    fn new(spec: WindowSpec, num_loci: usize) -> Self {
        Self {
            spec,
            counts_by_locus: (0..num_loci).map(|l| (l, TraitCounts::new())).collect(),
            configuration_counts: ConfigurationCounts::new(),
        }
    }
}

/// Time-averaged trait counts over a stack of nested windows.
///
/// Samples arrive as `(timestep, counts_by_locus, configuration_counts)`
/// triples from a simulation loop. Every window whose half-open range holds
/// the timestep adds the counts to its running totals. All queries return
/// owned copies.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use transmission_aggregation::counts::{ConfigurationCounts, LocusCounts};
/// use transmission_aggregation::time_averaging::MoranCumulativeTimeAverager;
///
/// let mut averager = MoranCumulativeTimeAverager::new(10_000, &[10, 50], 100, 1, true).unwrap();
/// let sample = LocusCounts::from([(0, HashMap::from([(1002, 15)]))]);
///
/// averager.record_sample(10_025, &sample, &ConfigurationCounts::new());
/// averager.record_sample(11_005, &sample, &ConfigurationCounts::new());
///
/// assert_eq!(averager.counts_for_window(10).unwrap()[&0][&1002], 15);
/// assert_eq!(averager.counts_for_window(50).unwrap()[&0][&1002], 30);
/// ```
#[derive(Debug, Clone)]
pub struct MoranCumulativeTimeAverager {
    anchor_tick: Tick,
    population_size: usize,
    num_loci: usize,
    anchor_mode: AnchorMode,
    windows: Vec<WindowState>,
    earliest_tick: Tick,
    latest_tick: Tick,
}

impl MoranCumulativeTimeAverager {
    /// Build the window stack with empty counts for every locus in
    /// `[0, num_loci)`.
    ///
    /// # Errors
    ///
    /// [`TimeAveragingError::InvalidConfiguration`] for an empty population,
    /// a zero or repeated duration, or an empty duration list.
    pub fn new(
        anchor_tick: Tick,
        durations: &[Generations],
        population_size: usize,
        num_loci: usize,
        ending_interval: bool,
    ) -> Result<Self, TimeAveragingError> {
        let anchor_mode = AnchorMode::from_ending_interval(ending_interval);
        let specs = build_windows(anchor_tick, durations, population_size, anchor_mode)?;
        let (earliest_tick, latest_tick) = bounds(&specs);

        Ok(Self {
            anchor_tick,
            population_size,
            num_loci,
            anchor_mode,
            windows: specs
                .into_iter()
                .map(|spec| WindowState::new(spec, num_loci))
                .collect(),
            earliest_tick,
            latest_tick,
        })
    }

    /// Window ranges as `(start, end)`, in construction order.
    pub fn interval_tuples(&self) -> Vec<(Tick, Tick)> {
        self.windows
            .iter()
            .map(|w| w.spec.interval.as_tuple())
            .collect()
    }

    pub fn earliest_tick(&self) -> Tick {
        self.earliest_tick
    }

    pub fn latest_tick(&self) -> Tick {
        self.latest_tick
    }

    /// Coarse domain check, inclusive at both ends.
    pub fn is_within_bounds(&self, timestep: Tick) -> bool {
        self.earliest_tick <= timestep && timestep <= self.latest_tick
    }

    /// Add one sample to every window containing `timestep`.
    ///
    /// A timestep outside every window is not an error: most ticks of a
    /// simulation fall outside a short window, so the call does nothing.
    pub fn record_sample(
        &mut self,
        timestep: Tick,
        counts_by_locus: &LocusCounts,
        configuration_counts: &ConfigurationCounts,
    ) {
        let mut updated = 0usize;
        for window in self
            .windows
            .iter_mut()
            .filter(|w| w.spec.interval.contains(timestep))
        {
            merge_locus_counts(&mut window.counts_by_locus, counts_by_locus);
            merge_configuration_counts(&mut window.configuration_counts, configuration_counts);
            updated += 1;
        }

        if updated == 0 {
            trace!("tick {timestep} outside all time-averaging windows");
        } else {
            trace!("tick {timestep} recorded into {updated} windows");
        }
    }

    /// Per-locus counts accumulated in the window of `generations`.
    ///
    /// # Errors
    ///
    /// [`TimeAveragingError::UnknownWindow`] if no window has that duration.
    pub fn counts_for_window(
        &self,
        generations: Generations,
    ) -> Result<LocusCounts, TimeAveragingError> {
        Ok(self.window(generations)?.counts_by_locus.clone())
    }

    /// Non-zero configuration counts accumulated in the window of `generations`.
    pub fn configuration_counts_for_window(
        &self,
        generations: Generations,
    ) -> Result<ConfigurationCounts, TimeAveragingError> {
        Ok(prune_zero_counts(
            self.window(generations)?.configuration_counts.clone(),
        ))
    }

    /// Per-locus counts of every window, keyed by window length in ticks.
    pub fn all_window_counts(&self) -> BTreeMap<Tick, LocusCounts> {
        self.windows
            .iter()
            .map(|w| (w.spec.ticks, w.counts_by_locus.clone()))
            .collect()
    }

    /// Per-locus counts of every window, keyed by duration in generations.
    pub fn counts_for_windows_by_generation(&self) -> BTreeMap<Generations, LocusCounts> {
        self.windows
            .iter()
            .map(|w| (w.spec.generations, w.counts_by_locus.clone()))
            .collect()
    }

    /// Configuration counts of every window, keyed by duration in
    /// generations. Configurations with a zero count are left out.
    pub fn configuration_counts_by_generation(
        &self,
    ) -> BTreeMap<Generations, ConfigurationCounts> {
        self.windows
            .iter()
            .map(|w| {
                (
                    w.spec.generations,
                    prune_zero_counts(w.configuration_counts.clone()),
                )
            })
            .collect()
    }

    /// Serializable snapshot of every window, in construction order.
    pub fn report(&self) -> Vec<WindowReport> {
        self.windows
            .iter()
            .map(|w| {
                let mut configurations: Vec<ConfigurationCount> = w
                    .configuration_counts
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(traits, &count)| ConfigurationCount {
                        traits: traits.clone(),
                        count,
                    })
                    .collect();
                configurations.sort_by(|a, b| a.traits.cmp(&b.traits));

                WindowReport {
                    generations: w.spec.generations,
                    ticks: w.spec.ticks,
                    interval: w.spec.interval,
                    counts_by_locus: w.counts_by_locus.clone(),
                    configurations,
                }
            })
            .collect()
    }

    pub fn anchor_tick(&self) -> Tick {
        self.anchor_tick
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn num_loci(&self) -> usize {
        self.num_loci
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    /// Window durations in generations, in construction order.
    pub fn durations(&self) -> Vec<Generations> {
        self.windows.iter().map(|w| w.spec.generations).collect()
    }

    /// Loci currently tracked by the window of `generations`.
    pub fn loci(&self, generations: Generations) -> Result<Vec<Locus>, TimeAveragingError> {
        Ok(self
            .window(generations)?
            .counts_by_locus
            .keys()
            .copied()
            .collect())
    }

    fn window(&self, generations: Generations) -> Result<&WindowState, TimeAveragingError> {
        self.windows
            .iter()
            .find(|w| w.spec.generations == generations)
            .ok_or(TimeAveragingError::UnknownWindow(generations))
    }
}
