//! # Aggregation Crate
//!
//! The `aggregation` crate post-processes trait counts produced by an
//! external transmission simulation. Its core is time-averaging: a stack of
//! nested windows around one anchor tick, each accumulating the per-locus
//! trait counts and joint configuration counts of the samples that fall
//! inside it.
//!
//! Window durations are given in Moran generations and converted to ticks
//! with [`transmission_popgen::moran::generations_to_ticks`].

pub mod config;
pub mod counts;
pub mod errors;
pub mod prelude;
pub mod time_averaging;

pub use config::TimeAveragingConfig;
pub use errors::TimeAveragingError;
pub use time_averaging::{MoranCumulativeTimeAverager, MoranTimeAverager};
