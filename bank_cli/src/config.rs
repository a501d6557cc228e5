//! Command-line configuration

use bank_common::accounts::DEFAULT_ACCOUNT_BASE;
use clap::Parser;

/// Used when `RUST_LOG` isn't set; covers both `bank_cli` and `bank_common`.
pub const DEFAULT_LOG_FILTER: &str = "bank=warn";

/// Accounts that are opened on start, unless disabled
pub const SAMPLE_ACCOUNTS: [(&str, f64); 2] = [("John Doe", 1000.0), ("Jane Smith", 500.0)];

/// The highest base that still leaves one account number to issue
const MAX_ACCOUNT_BASE: i64 = u32::MAX as i64 - 1;

#[derive(Debug, Parser)]
#[command(name = "bank_cli")]
#[command(about = "An in-memory bank account simulator.")]
pub struct Config {
    /// Start without the sample accounts
    #[arg(long)]
    pub no_samples: bool,

    /// Account numbers are issued starting right above this value
    #[arg(
        long,
        default_value_t = DEFAULT_ACCOUNT_BASE,
        value_parser = clap::value_parser!(u32).range(..=MAX_ACCOUNT_BASE)
    )]
    pub account_base: u32,

    /// Don't wait for Enter after each action
    #[arg(long)]
    pub no_pause: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_samples: false,
            account_base: DEFAULT_ACCOUNT_BASE,
            no_pause: false,
        }
    }
}
