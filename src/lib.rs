//! # TPS652510 Compensation
//!
//! Calculates "Type III" loop compensation parts for the output rails of a
//! TPS652510 buck converter (datasheet section "Loop Compensation").
//!
//! This library provides:
//! - Converter-wide system parameters with the crossover at `f_switch / 10`
//! - Per-rail resolution of RC, CC, CROLL and the output inductor, with
//!   optional part overrides
//! - A stability check on the roll-off pole
//! - A plain-text report of every rail
//!
//! ## Architecture
//!
//! - [`params`] - System parameters of the converter
//! - [`rail`] - Rail descriptions and the built-in board rails
//! - [`compensation`] - Formulas and per-rail resolution
//! - [`report`] - Text report emission
//! - [`notation`] - SPICE-style rail notation for the command line
//!
//! ## Usage
//!
//! ```bash
//! tpscomp
//! tpscomp --rail "V=5 I=1 C=22u" --rail "V=3.3 I=500m C=10u RC=3k"
//! ```
//!
//! ```
//! use tps_compensation::{compute_rail, RailSpec, SystemParameters};
//!
//! let params = SystemParameters::tps652510();
//! let result = compute_rail(&RailSpec::new(12.0, 0.3, 14e-6), &params);
//! assert_eq!(result.r, 40.0);
//! ```
//!
//! ## Numeric Degeneracies
//!
//! The calculation never fails. A rail with zero current, or one at or above
//! the input voltage, produces `inf`/`NaN` values that are printed as-is.
//! [`RailSpec::validate`] offers opt-in checks for callers that want them.

pub mod compensation;
pub mod error;
pub mod notation;
pub mod params;
pub mod rail;
pub mod report;

// Re-export main types for convenience
pub use compensation::{compute_rail, RailResult};
pub use error::{CompensationError, Result};
pub use params::SystemParameters;
pub use rail::{default_rails, RailSpec};
pub use report::write_report;
