//! # Population Genetics Crate
//!
//! The `popgen` crate collects the analytical side of neutral cultural
//! transmission models: closed-form convergence times and theta/mutation
//! conversions for the Moran and Wright-Fisher infinite-alleles models, a
//! Chinese Restaurant Process simulator, and utilities for sub-sampling
//! trait counters.

pub mod crp;
pub mod errors;
pub mod moran;
pub mod prelude;
pub mod sampling;
pub mod wright_fisher;

pub use errors::PopgenError;
