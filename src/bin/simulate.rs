//! Shot Simulation Tool - headless batches of randomized shots
//!
//! Fires random drags at the hoop for each aim scheme and power preset and
//! reports make percentage.
//!
//! Usage:
//!   cargo run --bin simulate
//!   cargo run --bin simulate -- --shots 500 --seed 42
//!   cargo run --bin simulate -- --aim angle --preset soft,standard -o results.json

use hoopshot::simulation::{SimConfig, run_simulation};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match SimConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: simulate [--shots N] [--seed N] [--aim LIST] [--preset LIST] [--max-frames N] [-o FILE] [-q]");
            std::process::exit(2);
        }
    };
    run_simulation(config);
}
