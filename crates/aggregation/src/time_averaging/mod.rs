//! Time-averaging of trait counts over nested Moran-model windows.
//!
//! - [`MoranTimeAverager`]: the window stack around an anchor tick, with
//!   bounds and membership queries.
//! - [`MoranCumulativeTimeAverager`]: the same stack, accumulating per-locus
//!   trait counts and configuration counts as samples arrive.

pub mod cumulative;
pub mod moran;
pub mod report;
pub mod window;

pub use cumulative::MoranCumulativeTimeAverager;
pub use moran::MoranTimeAverager;
pub use report::{ConfigurationCount, WindowReport};
pub use window::{AnchorMode, Generations, Tick, TickInterval, WindowSpec};
