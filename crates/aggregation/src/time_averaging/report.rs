//! Serializable window snapshots for the reporting layer.

use super::window::{Generations, Tick, TickInterval};
use crate::counts::{ConfigurationKey, Count, LocusCounts};
use serde::Serialize;

/// One joint configuration and its accumulated count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationCount {
    pub traits: ConfigurationKey,
    pub count: Count,
}

/// Accumulated state of one window.
///
/// Configurations are listed in trait order with zero counts removed, so the
/// snapshot serializes to formats that only allow string map keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowReport {
    pub generations: Generations,
    pub ticks: Tick,
    #[serde(flatten)]
    pub interval: TickInterval,
    pub counts_by_locus: LocusCounts,
    pub configurations: Vec<ConfigurationCount>,
}
