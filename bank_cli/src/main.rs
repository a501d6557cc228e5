//! The "Bank CLI" app's entry point.

use bank_cli::config::{Config, DEFAULT_LOG_FILTER};
use bank_cli::logic::main_loop;
use clap::Parser;
use std::env;
use std::process::ExitCode;

/// The "Bank CLI" app's entry point.
fn main() -> ExitCode {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let config = Config::parse();
    log::debug!("config = {:?}", config);

    match main_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Console I/O failed: {}", err);
            eprintln!("[ERROR] Console I/O failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
