use crate::accounts::{Account, AccountNumber, AccountNumberGenerator};
use crate::errors::AccountingError;
use crate::tx::Transaction;
use crate::validation::{validate_holder_name, validate_initial_deposit};

/// Width of the rule under the all-accounts table header
pub const ACCOUNTS_RULE_WIDTH: usize = 60;

/// Manages accounts, numbers new ones, and orchestrates operations between them.
///
/// Accounts are kept in the order in which they were opened.
#[derive(Debug, Default)]
pub struct Bank {
    generator: AccountNumberGenerator,
    accounts: Vec<Account>,
}

impl Bank {
    /// **Creates a new instance without any accounts.**
    pub fn new(generator: AccountNumberGenerator) -> Self {
        Bank {
            generator,
            accounts: Vec::new(),
        }
    }

    /// **Opens a new account**
    ///
    /// The input is validated before an account number is issued,
    /// so a rejected request never consumes a number.
    ///
    /// # Errors
    /// - Empty holder's name, `AccountingError::InvalidHolderName`;
    /// - Negative initial deposit, `AccountingError::InvalidInitialDeposit`;
    /// - No account numbers left, `AccountingError::AccountNumbersExhausted`.
    pub fn open_account(
        &mut self,
        holder: &str,
        initial_deposit: f64,
    ) -> Result<&Account, AccountingError> {
        let holder = validate_holder_name(holder)?;
        let initial_deposit = validate_initial_deposit(initial_deposit)?;

        let number = self.generator.next_number()?;
        let account = Account::open(number, holder, initial_deposit)?;
        log::info!(
            "open_account; account = {}, holder = {}, balance = {:.2}",
            account.number(),
            account.holder(),
            account.balance()
        );
        self.accounts.push(account);

        Ok(self
            .accounts
            .last()
            .expect("The account has just been pushed."))
    }

    /// All accounts, in the order in which they were opened
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// **Looks an account up by its number**
    ///
    /// # Errors
    /// - Account doesn't exist, `AccountingError::AccountNotFound`
    pub fn get(&self, number: AccountNumber) -> Result<&Account, AccountingError> {
        self.position_of(number).map(|idx| &self.accounts[idx])
    }

    /// **Looks an account up by its number, for modification**
    ///
    /// # Errors
    /// - Account doesn't exist, `AccountingError::AccountNotFound`
    pub fn get_mut(&mut self, number: AccountNumber) -> Result<&mut Account, AccountingError> {
        let idx = self.position_of(number)?;
        Ok(&mut self.accounts[idx])
    }

    /// **Picks an account by its 1-based position in [`Bank::accounts`]**
    ///
    /// # Errors
    /// - Position out of range, `AccountingError::InvalidSelection`
    pub fn get_by_position(&self, position: usize) -> Result<&Account, AccountingError> {
        position
            .checked_sub(1)
            .and_then(|idx| self.accounts.get(idx))
            .ok_or(AccountingError::InvalidSelection(
                position,
                self.accounts.len(),
            ))
    }

    /// **Deposit funds**
    ///
    /// # Errors
    /// - Account doesn't exist, `AccountingError::AccountNotFound`;
    /// - Non-positive amount, `AccountingError::InvalidAmount`.
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: f64,
    ) -> Result<Transaction, AccountingError> {
        self.get_mut(number)?.deposit(amount)
    }

    /// **Withdraw funds**
    ///
    /// # Errors
    /// - Account doesn't exist, `AccountingError::AccountNotFound`;
    /// - Non-positive amount, `AccountingError::InvalidAmount`;
    /// - Amount exceeds the balance, `AccountingError::InsufficientFunds`.
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: f64,
    ) -> Result<Transaction, AccountingError> {
        self.get_mut(number)?.withdraw(amount)
    }

    /// **Transfer funds between sender and recipient**
    ///
    /// The checks are done in this order: same account, recipient exists, sender exists,
    /// and then the amount and the sender's funds.
    ///
    /// # Errors
    /// - Sender and recipient are the same account, `AccountingError::SameAccount`;
    /// - Any of the two accounts doesn't exist, `AccountingError::AccountNotFound`;
    /// - Non-positive amount, `AccountingError::InvalidAmount`;
    /// - Amount exceeds the sender's balance, `AccountingError::InsufficientFunds`.
    pub fn transfer(
        &mut self,
        sender: AccountNumber,
        recipient: AccountNumber,
        amount: f64,
    ) -> Result<(Transaction, Transaction), AccountingError> {
        if sender == recipient {
            log::debug!("transfer; account = {}, rejected: same account", sender);
            return Err(AccountingError::SameAccount(sender.to_string()));
        }

        let recipient_idx = self.position_of(recipient)?;
        let sender_idx = self.position_of(sender)?;

        let (sender, recipient) = if sender_idx < recipient_idx {
            let (left, right) = self.accounts.split_at_mut(recipient_idx);
            (&mut left[sender_idx], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(sender_idx);
            (&mut right[0], &mut left[recipient_idx])
        };

        sender.transfer(recipient, amount)
    }

    /// The sum of all balances
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(Account::balance).sum()
    }

    /// **The table of all accounts with their balances, followed by the totals**
    pub fn accounts_report(&self) -> String {
        if self.accounts.is_empty() {
            return "No accounts found.".to_string();
        }

        let mut lines = vec![
            format!(
                "{:<12} | {:<15} | {:<10} | {}",
                "ACCOUNT #", "HOLDER", "BALANCE", "TRANSACTIONS"
            ),
            "-".repeat(ACCOUNTS_RULE_WIDTH),
        ];
        lines.extend(self.accounts.iter().map(|acc| {
            format!(
                "{:<12} | {:<15} | ${:<9.2} | {}",
                acc.number(),
                acc.holder(),
                acc.balance(),
                acc.transaction_count()
            )
        }));
        lines.push("-".repeat(ACCOUNTS_RULE_WIDTH));
        lines.push(format!(
            "Total Accounts: {} | Total Balance: ${:.2}",
            self.accounts.len(),
            self.total_balance()
        ));

        lines.join("\n")
    }

    fn position_of(&self, number: AccountNumber) -> Result<usize, AccountingError> {
        self.accounts
            .iter()
            .position(|acc| acc.number() == number)
            .ok_or(AccountingError::AccountNotFound(number.to_string()))
    }
}
