use chrono::{DateTime, Local};
use std::fmt;

/// The timestamp format used when rendering a [`Transaction`]
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// **A kind of balance-affecting event**
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TxKind {
    Deposit,
    Withdraw,
    TransferOut,
    TransferIn,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width and alignment flags working for table output.
        f.pad(match self {
            TxKind::Deposit => "DEPOSIT",
            TxKind::Withdraw => "WITHDRAW",
            TxKind::TransferOut => "TRANSFER OUT",
            TxKind::TransferIn => "TRANSFER IN",
        })
    }
}

/// **A transaction type**
///
/// An immutable record of one event that changed an account's balance.
/// It is created exactly once, at the moment an account commits the change,
/// and it lives as long as the account's history does.
///
/// All fields are private and only have getters.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    kind: TxKind,
    amount: f64,
    balance_after: f64,
    timestamp: DateTime<Local>,
}

impl Transaction {
    /// Records an event, stamped with the current wall-clock time.
    pub fn new(kind: TxKind, amount: f64, balance_after: f64) -> Self {
        Self::with_timestamp(kind, amount, balance_after, Local::now())
    }

    pub fn with_timestamp(
        kind: TxKind,
        amount: f64,
        balance_after: f64,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            kind,
            amount,
            balance_after,
            timestamp,
        }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The account's balance immediately after this event
    pub fn balance_after(&self) -> f64 {
        self.balance_after
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} | ${:>8.2} | ${:>10.2} | {}",
            self.kind,
            self.amount,
            self.balance_after,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}
