//! # Main — CLI Entry Point
//!
//! Parses the two supported invocation shapes, times the kernel call, and
//! renders output in the mandated text format.
//!
//! ## Usage
//!
//! ```text
//! sieve <hi>
//! sieve <lo> <hi>
//! ```
//!
//! Any other argument count prints a usage line to standard output and exits
//! with status 1.

use anyhow::{Context, Result};
use std::time::Instant;

use sieve::{compute, SieveMode};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    // Initialize structured logging: LOG_FORMAT=json for log aggregation, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    enum Header {
        All(u64),
        Range(u64, u64),
    }

    let (mode, header) = match args.as_slice() {
        [hi] => {
            let hi: u64 = hi
                .parse()
                .with_context(|| format!("argument `{hi}` is not a valid u64"))?;
            (SieveMode::All { hi }, Header::All(hi))
        }
        [lo, hi] => {
            let lo: u64 = lo
                .parse()
                .with_context(|| format!("argument `{lo}` is not a valid u64"))?;
            let hi: u64 = hi
                .parse()
                .with_context(|| format!("argument `{hi}` is not a valid u64"))?;
            (SieveMode::Range { lo, hi }, Header::Range(lo, hi))
        }
        _ => {
            println!("usage: sieve <hi> | sieve <lo> <hi>");
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let primes = compute(mode);
    let elapsed = start.elapsed();

    match header {
        Header::All(hi) => println!("Primes up to {hi} (total {}):", primes.len()),
        Header::Range(lo, hi) => {
            println!("Primes from {lo} to {hi} (total {}):", primes.len())
        }
    }
    let mut line = String::new();
    for p in &primes {
        line.push_str(&p.to_string());
        line.push(' ');
    }
    println!("{line}");
    println!("Time: {} seconds", elapsed.as_secs_f64());

    Ok(())
}
