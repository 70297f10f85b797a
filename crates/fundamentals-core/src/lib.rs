//! Fundamentals Core: summation utility, variable probes and the showcase routine
//!
//! The showcase declares three primitives, sums two pairs of integers and
//! reports where each primitive lives and how many bytes it occupies.
//!
//! # Example
//!
//! ```
//! use fundamentals_core::{run_showcase, write_sum};
//!
//! let mut out = Vec::new();
//! let total = write_sum(&mut out, 5, 10).unwrap();
//! assert_eq!(total, 15);
//! assert_eq!(String::from_utf8(out).unwrap(), "Sum: 15\n");
//!
//! let mut out = Vec::new();
//! let outcome = run_showcase(&mut out).unwrap();
//! assert_eq!(outcome.sums[1].sum, 24);
//! ```

pub mod config;
pub mod error;
pub mod probe;
pub mod showcase;
pub mod sum;

pub use config::FundamentalsConfig;
pub use error::{FundamentalsError, FundamentalsResult};
pub use probe::{Diagnostic, Primitive, Probe, VariableRecord};
pub use showcase::{run_showcase, ShowcaseOutcome, SumRecord};
pub use sum::{add_number, sum, write_sum};

/// Crate version, reported in the startup log line
pub const FUNDAMENTALS_VERSION: &str = env!("CARGO_PKG_VERSION");
