//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use transmission_popgen::prelude::*;
//!
//! let ticks = moran::generations_to_ticks(10, 100).unwrap();
//! assert_eq!(ticks, 1000);
//! ```

pub use crate::errors::PopgenError;
pub use crate::sampling::{sample_counter, sample_counter_with_replacement};
pub use crate::{crp, moran, wright_fisher};
