use crate::errors::AccountingError;
use crate::tx::{Transaction, TxKind};
use crate::validation::{validate_amount, validate_initial_deposit};
use std::fmt;

/// Width of the rules around the account information block
pub const INFO_RULE_WIDTH: usize = 50;
/// Width of the rules around a transaction history listing
pub const HISTORY_RULE_WIDTH: usize = 70;

pub const NO_TRANSACTIONS: &str = "No transactions found.";

/// The base offset of the account-number counter when none is configured
pub const DEFAULT_ACCOUNT_BASE: u32 = 1000;

/// **A unique account identifier**
///
/// Displayed as `ACC` followed by the number, e.g., `ACC1001`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AccountNumber(u32);

impl AccountNumber {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("ACC{}", self.0))
    }
}

/// **Issues account numbers**
///
/// Numbers increase monotonically, starting right above the base offset,
/// and are never reused.
/// Each [`crate::bank::Bank`] owns its own generator.
#[derive(Debug)]
pub struct AccountNumberGenerator {
    last: u32,
}

impl AccountNumberGenerator {
    /// The first issued number will be `base + 1`.
    pub fn new(base: u32) -> Self {
        Self { last: base }
    }

    /// Issues the next number.
    ///
    /// # Errors
    /// - The `u32` number space is used up, `AccountingError::AccountNumbersExhausted`
    pub fn next_number(&mut self) -> Result<AccountNumber, AccountingError> {
        let next = self.last.checked_add(1).ok_or_else(|| {
            AccountingError::AccountNumbersExhausted(AccountNumber(self.last).to_string())
        })?;
        self.last = next;

        Ok(AccountNumber(next))
    }
}

impl Default for AccountNumberGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT_BASE)
    }
}

/// **A bank account**
///
/// Holds a balance and the chronological, append-only history of the
/// transactions that produced it.
///
/// The balance never drops below zero: every operation validates its input
/// before it touches any state, so a failed operation leaves the account unchanged.
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    balance: f64,
    history: Vec<Transaction>,
}

impl Account {
    /// Returns an empty account with a zero balance.
    pub fn new(number: AccountNumber, holder: &str) -> Self {
        Account {
            number,
            holder: holder.to_string(),
            balance: 0.0,
            history: Vec::new(),
        }
    }

    /// Opens an account and makes the initial deposit, if it is positive.
    ///
    /// A zero initial deposit isn't recorded in the history.
    ///
    /// # Errors
    /// - Negative initial deposit, `AccountingError::InvalidInitialDeposit`
    pub fn open(
        number: AccountNumber,
        holder: &str,
        initial_deposit: f64,
    ) -> Result<Self, AccountingError> {
        let initial_deposit = validate_initial_deposit(initial_deposit)?;

        let mut account = Account::new(number, holder);
        if initial_deposit > 0.0 {
            account.deposit(initial_deposit)?;
        }

        Ok(account)
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    /// The complete history, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// The most recent `min(count, history length)` transactions, oldest first
    pub fn recent_transactions(&self, count: usize) -> &[Transaction] {
        let start = self.history.len().saturating_sub(count);
        &self.history[start..]
    }

    pub fn has_sufficient_funds(&self, amount: f64) -> bool {
        self.balance >= amount
    }

    /// Deposits the `amount` into the account.
    ///
    /// # Errors
    /// - Non-positive amount, `AccountingError::InvalidAmount`
    pub fn deposit(&mut self, amount: f64) -> Result<Transaction, AccountingError> {
        let amount = validate_amount(amount).map_err(|err| self.rejected("deposit", err))?;

        self.balance += amount;
        let tx = self.record(TxKind::Deposit, amount);
        log::info!(
            "deposit; account = {}, amount = {:.2}, balance = {:.2}",
            self.number,
            amount,
            self.balance
        );

        Ok(tx)
    }

    /// Withdraws the `amount` from the account.
    ///
    /// # Errors
    /// - Non-positive amount, `AccountingError::InvalidAmount`;
    /// - Amount exceeds the balance, `AccountingError::InsufficientFunds`.
    pub fn withdraw(&mut self, amount: f64) -> Result<Transaction, AccountingError> {
        let amount = validate_amount(amount)
            .and_then(|amount| self.ensure_funds(amount))
            .map_err(|err| self.rejected("withdraw", err))?;

        self.balance -= amount;
        let tx = self.record(TxKind::Withdraw, amount);
        log::info!(
            "withdraw; account = {}, amount = {:.2}, balance = {:.2}",
            self.number,
            amount,
            self.balance
        );

        Ok(tx)
    }

    /// Moves the `amount` from this account to the `recipient`.
    ///
    /// Funds are checked against this account only. Once that check passes,
    /// the deposit half can't fail, so both sides are updated without a rollback path.
    ///
    /// Returns the `TransferOut` entry recorded here and
    /// the `TransferIn` entry recorded in the recipient's history.
    ///
    /// # Errors
    /// - Non-positive amount, `AccountingError::InvalidAmount`;
    /// - Amount exceeds this account's balance, `AccountingError::InsufficientFunds`.
    pub fn transfer(
        &mut self,
        recipient: &mut Account,
        amount: f64,
    ) -> Result<(Transaction, Transaction), AccountingError> {
        let amount = validate_amount(amount)
            .and_then(|amount| self.ensure_funds(amount))
            .map_err(|err| self.rejected("transfer", err))?;

        self.balance -= amount;
        let tx_out = self.record(TxKind::TransferOut, amount);

        recipient.balance += amount;
        let tx_in = recipient.record(TxKind::TransferIn, amount);

        log::info!(
            "transfer; from = {}, to = {}, amount = {:.2}, balances = {:.2} / {:.2}",
            self.number,
            recipient.number,
            amount,
            self.balance,
            recipient.balance
        );

        Ok((tx_out, tx_in))
    }

    /// One line: number, holder, balance and the number of transactions
    pub fn summary(&self) -> String {
        format!(
            "Account: {} | Holder: {} | Balance: ${:.2} | Transactions: {}",
            self.number,
            self.holder,
            self.balance,
            self.history.len()
        )
    }

    /// The account information block
    pub fn info_report(&self) -> String {
        let rule = "=".repeat(INFO_RULE_WIDTH);
        [
            rule.clone(),
            "           ACCOUNT INFORMATION".to_string(),
            rule.clone(),
            format!("Account Number: {}", self.number),
            format!("Account Holder: {}", self.holder),
            format!("Current Balance: ${:.2}", self.balance),
            format!("Total Transactions: {}", self.history.len()),
            rule,
        ]
        .join("\n")
    }

    /// The complete transaction history, framed and with a table header
    pub fn history_report(&self) -> String {
        let rule = "=".repeat(HISTORY_RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "                    TRANSACTION HISTORY".to_string(),
            rule.clone(),
        ];
        if self.history.is_empty() {
            lines.push(NO_TRANSACTIONS.to_string());
        } else {
            lines.extend(transaction_table(&self.history));
        }
        lines.push(rule);

        lines.join("\n")
    }

    /// The last `count` transactions with a table header
    pub fn recent_history_report(&self, count: usize) -> String {
        let mut lines = vec![format!("=== LAST {} TRANSACTIONS ===", count)];
        if self.history.is_empty() {
            lines.push(NO_TRANSACTIONS.to_string());
        } else {
            lines.extend(transaction_table(self.recent_transactions(count)));
        }

        lines.join("\n")
    }

    fn ensure_funds(&self, amount: f64) -> Result<f64, AccountingError> {
        if self.has_sufficient_funds(amount) {
            Ok(amount)
        } else {
            Err(AccountingError::InsufficientFunds {
                account: self.number.to_string(),
                requested: amount,
                available: self.balance,
            })
        }
    }

    fn record(&mut self, kind: TxKind, amount: f64) -> Transaction {
        let tx = Transaction::new(kind, amount, self.balance);
        self.history.push(tx.clone());
        tx
    }

    fn rejected(&self, operation: &str, err: AccountingError) -> AccountingError {
        log::debug!("{}; account = {}, rejected: {}", operation, self.number, err);
        err
    }
}

/// The header line of every transaction table
pub fn transaction_header() -> String {
    format!(
        "{:<10} | {:<8} | {:<10} | {}",
        "TYPE", "AMOUNT", "BALANCE", "TIMESTAMP"
    )
}

fn transaction_table(transactions: &[Transaction]) -> Vec<String> {
    let mut lines = vec![transaction_header(), "-".repeat(HISTORY_RULE_WIDTH)];
    lines.extend(transactions.iter().map(|tx| tx.to_string()));
    lines
}
