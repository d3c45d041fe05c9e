//! Window geometry shared by the time averagers.

use crate::errors::TimeAveragingError;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;
use transmission_popgen::moran::generations_to_ticks;

/// A discrete time step of the underlying process.
pub type Tick = i64;

/// A duration expressed in generations (`population_size` ticks each).
pub type Generations = u64;

/// Which end of the window stack is pinned to the anchor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// Every window starts at the anchor and they differ in their end.
    /// Used for the stack at the end of a survival comparison, and as the
    /// default for single-stack use.
    Ending,
    /// Every window ends at the anchor and they differ in their start.
    Starting,
}

impl AnchorMode {
    /// Map the `ending_interval` flag onto an anchor mode.
    pub fn from_ending_interval(ending_interval: bool) -> Self {
        if ending_interval {
            Self::Ending
        } else {
            Self::Starting
        }
    }
}

/// Tick range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickInterval {
    pub start: Tick,
    pub end: Tick,
}

impl TickInterval {
    /// Half-open membership: `start <= tick < end`.
    #[inline]
    pub fn contains(&self, tick: Tick) -> bool {
        self.start <= tick && tick < self.end
    }

    pub fn as_tuple(&self) -> (Tick, Tick) {
        (self.start, self.end)
    }
}

/// One window of the stack, identified by its duration in both units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub generations: Generations,
    pub ticks: Tick,
    pub interval: TickInterval,
}

/// Build the window stack around `anchor_tick`, in the order `durations` were
/// given.
///
/// # Errors
///
/// [`TimeAveragingError::InvalidConfiguration`] when the population is empty,
/// no durations are given, a duration is zero, two durations scale to the same
/// tick length, or a window boundary overflows the tick range.
pub(crate) fn build_windows(
    anchor_tick: Tick,
    durations: &[Generations],
    population_size: usize,
    anchor_mode: AnchorMode,
) -> Result<Vec<WindowSpec>, TimeAveragingError> {
    if population_size == 0 {
        return Err(TimeAveragingError::InvalidConfiguration(
            "population size must be positive".to_string(),
        ));
    }
    if durations.is_empty() {
        return Err(TimeAveragingError::InvalidConfiguration(
            "at least one window duration is required".to_string(),
        ));
    }

    let mut seen_ticks = HashSet::with_capacity(durations.len());
    let mut windows = Vec::with_capacity(durations.len());

    for &generations in durations {
        if generations == 0 {
            return Err(TimeAveragingError::InvalidConfiguration(
                "window durations must be positive".to_string(),
            ));
        }

        let ticks = Tick::try_from(generations_to_ticks(generations, population_size)?)
            .map_err(|_| overflow(generations))?;
        if !seen_ticks.insert(ticks) {
            return Err(TimeAveragingError::InvalidConfiguration(format!(
                "duration of {generations} generations repeats a window of {ticks} ticks"
            )));
        }

        let interval = match anchor_mode {
            AnchorMode::Ending => TickInterval {
                start: anchor_tick,
                end: anchor_tick
                    .checked_add(ticks)
                    .ok_or_else(|| overflow(generations))?,
            },
            AnchorMode::Starting => TickInterval {
                start: anchor_tick
                    .checked_sub(ticks)
                    .ok_or_else(|| overflow(generations))?,
                end: anchor_tick,
            },
        };

        windows.push(WindowSpec {
            generations,
            ticks,
            interval,
        });
    }

    debug!(
        "intervals as tuples: {:?}",
        windows.iter().map(|w| w.interval.as_tuple()).collect::<Vec<_>>()
    );

    Ok(windows)
}

fn overflow(generations: Generations) -> TimeAveragingError {
    TimeAveragingError::InvalidConfiguration(format!(
        "window of {generations} generations overflows the tick range"
    ))
}

/// Earliest start and latest end over a non-empty window stack.
pub(crate) fn bounds<'a>(windows: impl IntoIterator<Item = &'a WindowSpec>) -> (Tick, Tick) {
    windows
        .into_iter()
        .fold((Tick::MAX, Tick::MIN), |(earliest, latest), w| {
            (earliest.min(w.interval.start), latest.max(w.interval.end))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_is_half_open() {
        let interval = TickInterval {
            start: 10000,
            end: 11000,
        };
        assert!(interval.contains(10000));
        assert!(interval.contains(10999));
        assert!(!interval.contains(11000));
        assert!(!interval.contains(9999));
    }

    #[test]
    fn test_build_windows_preserves_order() {
        let windows = build_windows(0, &[100, 10, 50], 10, AnchorMode::Ending).unwrap();
        let gens: Vec<_> = windows.iter().map(|w| w.generations).collect();
        assert_eq!(gens, vec![100, 10, 50]);
        assert_eq!(windows[0].ticks, 1000);
        assert_eq!(bounds(&windows), (0, 1000));
    }

    #[test]
    fn test_starting_windows_can_go_negative() {
        let windows = build_windows(500, &[10], 100, AnchorMode::Starting).unwrap();
        assert_eq!(windows[0].interval.as_tuple(), (-500, 500));
    }

    #[test]
    fn test_build_windows_rejects_bad_input() {
        let invalid = |r: Result<Vec<WindowSpec>, TimeAveragingError>| {
            matches!(r, Err(TimeAveragingError::InvalidConfiguration(_)))
        };
        assert!(invalid(build_windows(0, &[10], 0, AnchorMode::Ending)));
        assert!(invalid(build_windows(0, &[], 100, AnchorMode::Ending)));
        assert!(invalid(build_windows(0, &[10, 0], 100, AnchorMode::Ending)));
        assert!(invalid(build_windows(0, &[10, 10], 100, AnchorMode::Ending)));
        assert!(invalid(build_windows(
            Tick::MAX - 5,
            &[10],
            100,
            AnchorMode::Ending
        )));
        assert!(invalid(build_windows(0, &[u64::MAX], 100, AnchorMode::Ending)));
    }

    #[test]
    fn test_anchor_mode_from_flag() {
        assert_eq!(AnchorMode::from_ending_interval(true), AnchorMode::Ending);
        assert_eq!(AnchorMode::from_ending_interval(false), AnchorMode::Starting);
    }
}
