//! Showcase routine: the program's single execution path
//!
//! Declares `x`, `y` and `z`, sums `(5, 10)` and `(x, 20)`, then reports the
//! address of every variable followed by its value and size.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FundamentalsError, FundamentalsResult};
use crate::probe::{Diagnostic, Probe, VariableRecord};
use crate::sum::write_sum;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumRecord {
    pub a: i32,
    pub b: i32,
    pub sum: i32,
}

/// What one showcase run computed and reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseOutcome {
    pub sums: Vec<SumRecord>,
    pub variables: Vec<VariableRecord>,
}

impl ShowcaseOutcome {
    pub fn to_json(&self) -> FundamentalsResult<String> {
        serde_json::to_string(self).map_err(|e| FundamentalsError::Serialize(e.to_string()))
    }
}

/// Run the showcase, writing its eight lines to `out`
pub fn run_showcase<W: Write>(out: &mut W) -> FundamentalsResult<ShowcaseOutcome> {
    let x: i32 = 4;
    let y: f32 = 3.5;
    let z: bool = true;

    let mut sums = Vec::with_capacity(2);
    for (a, b) in [(5, 10), (x, 20)] {
        let sum = write_sum(out, a, b)?;
        sums.push(SumRecord { a, b, sum });
    }

    let px = Probe::new("x", &x);
    let py = Probe::new("y", &y);
    let pz = Probe::new("z", &z);
    let probes: [&dyn Diagnostic; 3] = [&px, &py, &pz];

    for probe in probes {
        writeln!(out, "{}", probe.address_line())?;
    }
    for probe in probes {
        writeln!(out, "{}", probe.size_line())?;
        tracing::debug!(
            name = probe.name(),
            size = probe.size(),
            address = probe.address(),
            "variable reported"
        );
    }
    out.flush()?;

    let outcome = ShowcaseOutcome {
        sums,
        variables: probes.iter().map(|p| p.record()).collect(),
    };
    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(outcome = %outcome.to_json()?, "showcase finished");
    }

    Ok(outcome)
}
