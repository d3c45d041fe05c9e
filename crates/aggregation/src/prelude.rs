//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use transmission_aggregation::prelude::*;
//!
//! let config = TimeAveragingConfig::new(100_000, vec![10, 50, 100], 100);
//! let averager = config.build_cumulative().unwrap();
//! assert!(averager.is_within_bounds(103_501));
//! ```

pub use crate::config::TimeAveragingConfig;
pub use crate::counts::{
    ConfigurationCounts, ConfigurationKey, Count, Locus, LocusCounts, TraitCounts, TraitId,
};
pub use crate::errors::TimeAveragingError;
pub use crate::time_averaging::{
    AnchorMode, Generations, MoranCumulativeTimeAverager, MoranTimeAverager, Tick, WindowReport,
};
