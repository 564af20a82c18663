//! Solar Anniversary CLI tool
//!
//! Prints the date 1500 solar years after the Prophet Muhammad's birth.

use clap::Parser;
use std::process;

use solar_anniversary::anniversary::report_line;

/// Solar Anniversary - compute the 1500-solar-year anniversary date
#[derive(Parser)]
#[command(name = "solar-anniversary")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLE:
    $ solar-anniversary
    1500 solar years since the Prophet's birth will be on: Thursday, 01 May 2070")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    println!("{}", report_line()?);
    Ok(())
}
