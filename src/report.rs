//! Text report of the resolved rails.
//!
//! Format, one block per rail, tab-indented:
//!
//! ```text
//! THESE ARE PRELIMINARY VALUES. STILL NEED TO BE VERIFIED.
//! rail V:12 I:0.3 C:0.000014
//!     R:40
//!     RC:7500
//!     ...
//!     CMIN:0.0000000621...
//! ```
//!
//! A rail failing the stability check is followed by a blank line, a
//! warning line naming the crossover frequency, and another blank line.

use std::io::Write;

use crate::compensation::{compute_rail, RailResult};
use crate::error::Result;
use crate::params::SystemParameters;
use crate::rail::RailSpec;

/// First line of every report.
pub const DISCLAIMER: &str = "THESE ARE PRELIMINARY VALUES. STILL NEED TO BE VERIFIED.";

/// Write the block for one rail.
pub fn write_rail_block<W: Write>(
    writer: &mut W,
    spec: &RailSpec,
    result: &RailResult,
    params: &SystemParameters,
) -> Result<()> {
    writeln!(writer, "rail V:{} I:{} C:{}", spec.v, spec.i, spec.c)?;
    writeln!(writer, "\tR:{}", result.r)?;
    writeln!(writer, "\tRC:{}", result.rc)?;
    writeln!(writer, "\tCC:{}", result.cc)?;
    writeln!(writer, "\tCROLL:{}", result.croll)?;
    writeln!(writer, "\tFPROLL:{}", result.fp_roll)?;
    writeln!(writer, "\tL:{}", result.l)?;
    writeln!(writer, "\tRIPPLE:{}", result.ripple)?;
    writeln!(writer, "\tCMIN:{}", result.c_min)?;

    if !result.stability_ok {
        writeln!(writer)?;
        writeln!(writer, "\tWARNING: fp_roll is too close to f_c={}!", params.f_c)?;
        writeln!(writer)?;
    }

    Ok(())
}

/// Compute every rail in order and write the full report.
///
/// Returns the results in the same order as `rails`.
pub fn write_report<W: Write>(
    writer: &mut W,
    params: &SystemParameters,
    rails: &[RailSpec],
) -> Result<Vec<RailResult>> {
    let _span = tracing::info_span!("report", n_rails = rails.len()).entered();

    writeln!(writer, "{}", DISCLAIMER)?;

    let mut results = Vec::with_capacity(rails.len());
    for (n, spec) in rails.iter().enumerate() {
        let result = compute_rail(spec, params);
        if !result.stability_ok {
            tracing::warn!(
                rail = n + 1,
                fp_roll = result.fp_roll,
                f_c = params.f_c,
                "roll-off pole below twice the crossover frequency"
            );
        }
        write_rail_block(writer, spec, &result, params)?;
        results.push(result);
    }

    writer.flush()?;
    Ok(results)
}
