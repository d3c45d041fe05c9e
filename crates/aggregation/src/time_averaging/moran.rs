//! Non-cumulative time averager: the window stack without count state.

use super::window::{AnchorMode, Generations, Tick, WindowSpec, bounds, build_windows};
use crate::errors::TimeAveragingError;

/// A stack of nested time-averaging windows around one anchor tick.
///
/// Window durations are given in Moran generations and translated into ticks
/// using the population size. Comparing time-averaged samples that must be a
/// fixed distance apart (e.g. a trait survival analysis) uses two stacks
/// sharing one anchor: a [`AnchorMode::Starting`] stack that ends there and a
/// [`AnchorMode::Ending`] stack that begins there.
///
/// # Examples
///
/// ```
/// use transmission_aggregation::time_averaging::MoranTimeAverager;
///
/// let stack = MoranTimeAverager::new(100_000, &[10, 50, 100], 100, false).unwrap();
/// assert_eq!(
///     stack.interval_tuples(),
///     vec![(99_000, 100_000), (95_000, 100_000), (90_000, 100_000)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MoranTimeAverager {
    anchor_tick: Tick,
    population_size: usize,
    anchor_mode: AnchorMode,
    windows: Vec<WindowSpec>,
    earliest_tick: Tick,
    latest_tick: Tick,
}

impl MoranTimeAverager {
    /// Build the window stack.
    ///
    /// # Arguments
    ///
    /// * `anchor_tick` - Tick at which every window starts (`ending_interval`)
    ///   or ends (otherwise)
    /// * `durations` - Window durations in generations
    /// * `population_size` - Ticks per generation
    /// * `ending_interval` - Which side of the windows is pinned to the anchor
    pub fn new(
        anchor_tick: Tick,
        durations: &[Generations],
        population_size: usize,
        ending_interval: bool,
    ) -> Result<Self, TimeAveragingError> {
        let anchor_mode = AnchorMode::from_ending_interval(ending_interval);
        let windows = build_windows(anchor_tick, durations, population_size, anchor_mode)?;
        let (earliest_tick, latest_tick) = bounds(&windows);

        Ok(Self {
            anchor_tick,
            population_size,
            anchor_mode,
            windows,
            earliest_tick,
            latest_tick,
        })
    }

    /// Window ranges as `(start, end)`, in construction order.
    pub fn interval_tuples(&self) -> Vec<(Tick, Tick)> {
        self.windows.iter().map(|w| w.interval.as_tuple()).collect()
    }

    /// Earliest tick covered by any window.
    pub fn earliest_tick(&self) -> Tick {
        self.earliest_tick
    }

    /// Latest window end over the stack.
    pub fn latest_tick(&self) -> Tick {
        self.latest_tick
    }

    /// Coarse domain check, inclusive at both ends.
    ///
    /// Per-window membership is half-open, so `latest_tick` itself passes
    /// this check without belonging to any window.
    pub fn is_within_bounds(&self, timestep: Tick) -> bool {
        self.earliest_tick <= timestep && timestep <= self.latest_tick
    }

    /// Durations of the windows containing `timestep`, in construction order.
    pub fn windows_containing(&self, timestep: Tick) -> Vec<Generations> {
        self.windows
            .iter()
            .filter(|w| w.interval.contains(timestep))
            .map(|w| w.generations)
            .collect()
    }

    pub fn anchor_tick(&self) -> Tick {
        self.anchor_tick
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor_mode
    }

    /// Window durations in generations, in construction order.
    pub fn durations(&self) -> Vec<Generations> {
        self.windows.iter().map(|w| w.generations).collect()
    }

    /// Window specifications in construction order.
    pub fn windows(&self) -> &[WindowSpec] {
        &self.windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_interval_initialization() {
        let stack = MoranTimeAverager::new(100_000, &[10, 50, 100], 100, false).unwrap();
        let expected = vec![(99_000, 100_000), (95_000, 100_000), (90_000, 100_000)];
        assert_eq!(stack.interval_tuples(), expected);
        assert_eq!(stack.earliest_tick(), 90_000);
        assert_eq!(stack.latest_tick(), 100_000);
        assert_eq!(stack.anchor_mode(), AnchorMode::Starting);
    }

    #[test]
    fn test_ending_interval_initialization() {
        let stack = MoranTimeAverager::new(100_000, &[10, 50, 100], 100, true).unwrap();
        let expected = vec![(100_000, 101_000), (100_000, 105_000), (100_000, 110_000)];
        assert_eq!(stack.interval_tuples(), expected);
        assert_eq!(stack.earliest_tick(), 100_000);
        assert_eq!(stack.latest_tick(), 110_000);
    }

    #[test]
    fn test_in_interval() {
        let stack = MoranTimeAverager::new(100_000, &[10, 50, 100], 100, true).unwrap();
        assert!(stack.is_within_bounds(103_501));
        assert!(!stack.is_within_bounds(99_999));
        assert!(stack.is_within_bounds(100_000));
        assert!(stack.is_within_bounds(110_000));
        assert!(!stack.is_within_bounds(110_001));
    }

    #[test]
    fn test_windows_containing() {
        let stack = MoranTimeAverager::new(100_000, &[10, 50, 100], 100, true).unwrap();
        assert_eq!(stack.windows_containing(100_000), vec![10, 50, 100]);
        assert_eq!(stack.windows_containing(103_501), vec![50, 100]);
        assert!(stack.windows_containing(99_999).is_empty());
        // Inside the coarse bounds but past every half-open window
        assert!(stack.windows_containing(110_000).is_empty());
    }

    #[test]
    fn test_unsorted_durations_keep_order() {
        let stack = MoranTimeAverager::new(1000, &[5, 1], 10, false).unwrap();
        assert_eq!(stack.interval_tuples(), vec![(950, 1000), (990, 1000)]);
        assert_eq!(stack.durations(), vec![5, 1]);
        assert_eq!(stack.population_size(), 10);
        assert_eq!(stack.anchor_tick(), 1000);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            MoranTimeAverager::new(0, &[10, 10], 100, true),
            Err(TimeAveragingError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            MoranTimeAverager::new(0, &[10], 0, true),
            Err(TimeAveragingError::InvalidConfiguration(_))
        ));
    }
}
