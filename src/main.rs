//! albumstore entry point
//!
//! This is a minimal entrypoint that:
//! 1. Initializes logging
//! 2. Delegates to the library `run()`
//! 3. Prints errors to stderr
//! 4. Exits with non-zero on failure
//!
//! Configuration loading, database setup, and route wiring all live in the
//! library crate.

use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = albumstore::run().await {
        eprintln!("{}", e);
        process::exit(1);
    }
}
