//! tpscomp - TPS652510 Type III compensation calculator
//!
//! Prints compensation and inductor values for each output rail.
//!
//! # Usage
//!
//! ```bash
//! tpscomp
//! tpscomp --strict --rail "V=5 I=1 C=22u L=10u"
//! RUST_LOG=debug tpscomp
//! ```

use std::io;

use clap::Parser;
use tps_compensation::{
    default_rails,
    error::Result,
    notation::parse_rail,
    report::write_report,
    RailSpec, SystemParameters,
};

/// Type III loop compensation calculator for TPS652510 rails
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rail to calculate instead of the built-in list, e.g. "V=5 I=1 C=22u RC=3k"
    #[arg(short, long, value_name = "RAIL")]
    rail: Vec<String>,

    /// Reject rails that are not physically valid before calculating
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let params = SystemParameters::tps652510();

    let rails: Vec<RailSpec> = if args.rail.is_empty() {
        default_rails()
    } else {
        args.rail
            .iter()
            .map(|text| parse_rail(text))
            .collect::<Result<_>>()?
    };

    if args.strict {
        for (n, rail) in rails.iter().enumerate() {
            rail.validate(n + 1, &params)?;
        }
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &params, &rails)?;

    Ok(())
}
