pub mod accounts;
pub mod bank;
pub mod cli;
pub mod errors;
pub mod tx;
pub mod validation;

pub use accounts::{Account, AccountNumber, AccountNumberGenerator};
pub use bank::Bank;
pub use errors::{AccountingError, ErrorKind};
pub use tx::{Transaction, TxKind};
