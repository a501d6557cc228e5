//! Application-specific errors

use thiserror::Error;

pub const EMPTY_HOLDER_NAME: &str = "Account holder name cannot be empty!";

/// **The category of an [`AccountingError`]**
///
/// None of them is fatal; the caller can always retry with corrected input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A value that can never succeed: a non-positive amount, a negative initial deposit,
    /// an empty holder name, a recipient that doesn't exist,
    /// or a numbering base that leaves no account numbers to issue.
    InvalidInput,
    /// The account doesn't hold enough funds for a withdrawal or a transfer.
    InsufficientFunds,
    /// An out-of-range pick from a numbered list of accounts.
    SelectionError,
}

/// **An application-specific error type**
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AccountingError {
    #[error("Amount must be positive; you provided {0:.2}.")]
    InvalidAmount(f64),
    #[error("Initial deposit cannot be negative; you provided {0:.2}.")]
    InvalidInitialDeposit(f64),
    #[error("Account holder name cannot be empty: \"{0}\".")]
    InvalidHolderName(String),
    #[error("Account {0} doesn't exist.")]
    AccountNotFound(String),
    #[error("Cannot transfer money to the same account ({0})!")]
    SameAccount(String),
    #[error("Insufficient funds in account {account}! Requested: ${requested:.2}, available balance: ${available:.2}.")]
    InsufficientFunds {
        account: String,
        requested: f64,
        available: f64,
    },
    #[error("No account numbers left after {0}.")]
    AccountNumbersExhausted(String),
    #[error("Invalid account selection: {0}; there are {1} accounts.")]
    InvalidSelection(usize, usize),
}

impl AccountingError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountingError::InvalidAmount(_)
            | AccountingError::InvalidInitialDeposit(_)
            | AccountingError::InvalidHolderName(_)
            | AccountingError::AccountNotFound(_)
            | AccountingError::SameAccount(_)
            | AccountingError::AccountNumbersExhausted(_) => ErrorKind::InvalidInput,
            AccountingError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            AccountingError::InvalidSelection(_, _) => ErrorKind::SelectionError,
        }
    }
}
