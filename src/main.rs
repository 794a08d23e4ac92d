//! Orders validation pipeline binary.
//!
//! Usage: `orders_validator <orders-file>`. Writes the accepted/rejected
//! streams under the configured output directory and logs a run summary.

use log::info;
use orders_validator::{pipeline, Config};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Orders file path is required");
            std::process::exit(1);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match pipeline::run_file(&input, &config) {
        Ok(stats) => {
            info!(
                "processed orders = {}, accepted orders = {}, rejected orders = {}",
                stats.processed, stats.accepted, stats.rejected
            );
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
