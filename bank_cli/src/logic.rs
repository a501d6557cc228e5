//! The interactive menu
//!
//! A thin layer over [`Bank`]: it asks for input, calls the core, and prints the outcome.
//! All business rules live in `bank_common`.

use crate::config::{Config, SAMPLE_ACCOUNTS};
use bank_common::accounts::AccountNumberGenerator;
use bank_common::cli::constants::*;
use bank_common::cli::Console;
use bank_common::errors::{AccountingError, EMPTY_HOLDER_NAME};
use bank_common::validation::is_valid_name;
use bank_common::Bank;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to Bank Account Simulation!";
const GOODBYE: &str = "Thank you for using Bank Account Simulation! Goodbye!";

/// Why the menu loop stopped before the user chose to exit
#[derive(Debug)]
enum Interrupt {
    /// The input ran out.
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// **Runs the menu on the standard input and output until the user exits.**
///
/// End of input counts as exiting.
///
/// # Errors
/// Fails only if the console can't be read or written.
pub fn main_loop(config: &Config) -> io::Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout());
    Session::new(config, console).run()
}

/// **One interactive session: a bank and the console that drives it**
pub struct Session<R, W> {
    bank: Bank,
    console: Console<R, W>,
    pause: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &Config, console: Console<R, W>) -> Self {
        let mut bank = Bank::new(AccountNumberGenerator::new(config.account_base));

        if !config.no_samples {
            for (holder, initial_deposit) in SAMPLE_ACCOUNTS {
                if let Err(err) = bank.open_account(holder, initial_deposit) {
                    log::error!("Failed to open the sample account {}: {}", holder, err);
                }
            }
        }

        Self {
            bank,
            console,
            pause: !config.no_pause,
        }
    }

    /// Ends the session, giving back the bank and the console output.
    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.console.into_output())
    }

    /// **The main loop**
    ///
    /// Shows the menu, performs the chosen action, and optionally waits for Enter,
    /// until the user chooses to exit or the input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.welcome()?;

        match self.menu_loop() {
            Ok(()) => Ok(()),
            Err(Interrupt::EndOfInput) => {
                log::info!("End of input; leaving.");
                Ok(())
            }
            Err(Interrupt::Io(err)) => Err(err),
        }
    }

    fn menu_loop(&mut self) -> Result<(), Interrupt> {
        loop {
            self.console.menu()?;

            match self.number("Enter your choice: ")? {
                CREATE_ACCOUNT => self.create_account()?,
                DEPOSIT => self.deposit()?,
                WITHDRAW => self.withdraw()?,
                TRANSFER => self.transfer()?,
                CHECK_BALANCE => self.check_balance()?,
                ACCOUNT_INFO => self.account_info()?,
                HISTORY => self.history()?,
                ALL_ACCOUNTS => self.all_accounts()?,
                EXIT => return Ok(self.console.println(GOODBYE)?),
                _ => self.console.error("Invalid choice! Please try again.")?,
            }

            if self.pause && !self.console.wait_for_enter()? {
                return Err(Interrupt::EndOfInput);
            }
        }
    }

    fn welcome(&mut self) -> io::Result<()> {
        self.console.println(WELCOME)?;
        self.console.println(&"=".repeat(MENU_RULE_WIDTH))?;

        if !self.bank.is_empty() {
            self.console.success("Sample accounts created:")?;
            for account in self.bank.accounts() {
                self.console.println(&format!(
                    "- {} (Initial: ${:.2})",
                    account.holder(),
                    account.balance()
                ))?;
            }
        }

        Ok(())
    }

    fn create_account(&mut self) -> Result<(), Interrupt> {
        self.console.section("Create New Account", 30)?;

        let holder = self.line("Enter account holder name: ")?;
        if !is_valid_name(&holder) {
            return Ok(self.console.error(EMPTY_HOLDER_NAME)?);
        }

        let initial_deposit = self.amount("Enter initial deposit amount (0 for none): $")?;

        match self.bank.open_account(&holder, initial_deposit) {
            Ok(account) => {
                let msg = format!(
                    "Account created successfully!\nAccount Number: {}\nAccount Holder: {}\nInitial Balance: ${:.2}",
                    account.number(),
                    account.holder(),
                    account.balance()
                );
                Ok(self.console.success(&msg)?)
            }
            Err(err) => Ok(self.console.error(&err.to_string())?),
        }
    }

    fn deposit(&mut self) -> Result<(), Interrupt> {
        self.console.section("Deposit Money", 20)?;

        let Some(idx) = self.select_account()? else {
            return Ok(());
        };
        let number = self.bank.accounts()[idx].number();
        let amount = self.amount("Enter deposit amount: $")?;

        match self.bank.deposit(number, amount) {
            Ok(tx) => Ok(self.console.success(&format!(
                "Successfully deposited ${:.2}. New balance: ${:.2}",
                tx.amount(),
                tx.balance_after()
            ))?),
            Err(err) => Ok(self.console.error(&err.to_string())?),
        }
    }

    fn withdraw(&mut self) -> Result<(), Interrupt> {
        self.console.section("Withdraw Money", 20)?;

        let Some(idx) = self.select_account()? else {
            return Ok(());
        };
        let number = self.bank.accounts()[idx].number();
        let amount = self.amount("Enter withdrawal amount: $")?;

        match self.bank.withdraw(number, amount) {
            Ok(tx) => Ok(self.console.success(&format!(
                "Successfully withdrew ${:.2}. New balance: ${:.2}",
                tx.amount(),
                tx.balance_after()
            ))?),
            Err(err) => Ok(self.console.error(&err.to_string())?),
        }
    }

    fn transfer(&mut self) -> Result<(), Interrupt> {
        self.console.section("Transfer Money", 20)?;

        if self.bank.len() < 2 {
            return Ok(self
                .console
                .error("Need at least 2 accounts to perform transfer!")?);
        }

        self.console
            .println("Select SOURCE account (money will be taken from):")?;
        let Some(source) = self.select_account()? else {
            return Ok(());
        };

        self.console
            .println("Select DESTINATION account (money will be sent to):")?;
        let Some(destination) = self.select_account()? else {
            return Ok(());
        };

        let sender = self.bank.accounts()[source].number();
        let recipient = self.bank.accounts()[destination].number();
        if sender == recipient {
            let err = AccountingError::SameAccount(sender.to_string());
            return Ok(self.console.error(&err.to_string())?);
        }

        let amount = self.amount("Enter transfer amount: $")?;

        match self.bank.transfer(sender, recipient, amount) {
            Ok((tx_out, _)) => {
                let msg = format!(
                    "Successfully transferred ${:.2} to {}. Your new balance: ${:.2}",
                    tx_out.amount(),
                    self.bank.accounts()[destination].holder(),
                    tx_out.balance_after()
                );
                Ok(self.console.success(&msg)?)
            }
            Err(err) => Ok(self.console.error(&err.to_string())?),
        }
    }

    fn check_balance(&mut self) -> Result<(), Interrupt> {
        self.console.section("Check Balance", 20)?;

        let Some(idx) = self.select_account()? else {
            return Ok(());
        };
        let balance = self.bank.accounts()[idx].balance();

        Ok(self
            .console
            .println(&format!("Current Balance: ${:.2}", balance))?)
    }

    fn account_info(&mut self) -> Result<(), Interrupt> {
        self.console.section("Account Information", 25)?;

        let Some(idx) = self.select_account()? else {
            return Ok(());
        };
        let report = self.bank.accounts()[idx].info_report();

        Ok(self.console.println(&format!("\n{}", report))?)
    }

    fn history(&mut self) -> Result<(), Interrupt> {
        self.console.section("Transaction History", 25)?;

        let Some(idx) = self.select_account()? else {
            return Ok(());
        };
        if self.bank.accounts()[idx].transaction_count() == 0 {
            return Ok(self
                .console
                .println("No transactions found for this account.")?);
        }

        self.console
            .println(&format!("\n{HISTORY_ALL}. View All Transactions"))?;
        self.console
            .println(&format!("{HISTORY_RECENT}. View Recent Transactions"))?;

        match self.number("Choose option: ")? {
            HISTORY_ALL => {
                let report = self.bank.accounts()[idx].history_report();
                Ok(self.console.println(&format!("\n{}", report))?)
            }
            HISTORY_RECENT => {
                let count = self.number("Enter number of recent transactions to view: ")?;
                match usize::try_from(count) {
                    Ok(count) if count > 0 => {
                        let report = self.bank.accounts()[idx].recent_history_report(count);
                        Ok(self.console.println(&format!("\n{}", report))?)
                    }
                    _ => Ok(self.console.error("Please enter a positive number!")?),
                }
            }
            _ => Ok(self.console.error("Invalid choice!")?),
        }
    }

    fn all_accounts(&mut self) -> Result<(), Interrupt> {
        self.console.section("All Bank Accounts", 25)?;

        let report = self.bank.accounts_report();
        Ok(self.console.println(&report)?)
    }

    /// **Lists the accounts and asks for one by its position.**
    ///
    /// Returns the 0-based index into [`Bank::accounts`],
    /// or `None` if there are no accounts or the selection is out of range.
    fn select_account(&mut self) -> Result<Option<usize>, Interrupt> {
        if self.bank.is_empty() {
            self.console
                .error("No accounts available! Please create an account first.")?;
            return Ok(None);
        }

        let rule = "-".repeat(MENU_RULE_WIDTH);
        let mut lines = vec!["\nAvailable Accounts:".to_string(), rule.clone()];
        lines.extend(self.bank.accounts().iter().enumerate().map(|(idx, acc)| {
            format!(
                "{}. {} ({}) - Balance: ${:.2}",
                idx + 1,
                acc.holder(),
                acc.number(),
                acc.balance()
            )
        }));
        lines.push(rule);
        self.console.println(&lines.join("\n"))?;

        let choice = self.number("Select account number: ")?;
        let position = usize::try_from(choice).unwrap_or(0);

        match self.bank.get_by_position(position) {
            Ok(_) => Ok(Some(position - 1)),
            Err(err) => {
                log::debug!("select_account; rejected: {}", err);
                self.console.error(&err.to_string())?;
                Ok(None)
            }
        }
    }

    fn line(&mut self, label: &str) -> Result<String, Interrupt> {
        self.console.read_line(label)?.ok_or(Interrupt::EndOfInput)
    }

    fn number(&mut self, label: &str) -> Result<i64, Interrupt> {
        self.console.read_number(label)?.ok_or(Interrupt::EndOfInput)
    }

    fn amount(&mut self, label: &str) -> Result<f64, Interrupt> {
        self.console.read_amount(label)?.ok_or(Interrupt::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_common::errors::ErrorKind;
    use bank_common::TxKind;
    use std::io::Cursor;

    fn no_pause() -> Config {
        Config {
            no_pause: true,
            ..Config::default()
        }
    }

    fn run(config: &Config, input: &str) -> (Bank, String) {
        run_bytes(config, input.as_bytes())
    }

    fn run_bytes(config: &Config, input: &[u8]) -> (Bank, String) {
        let console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        let mut session = Session::new(config, console);
        session.run().unwrap();

        let (bank, output) = session.into_parts();
        (bank, String::from_utf8(output).unwrap())
    }

    fn balances(bank: &Bank) -> Vec<f64> {
        bank.accounts().iter().map(|acc| acc.balance()).collect()
    }

    #[test]
    fn samples_are_opened() {
        let (bank, output) = run(&no_pause(), "9\n");

        assert_eq!(vec![1000.0, 500.0], balances(&bank));
        assert!(output.contains(WELCOME));
        assert!(output.contains("- John Doe (Initial: $1000.00)"));
        assert!(output.contains("- Jane Smith (Initial: $500.00)"));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn no_samples() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (bank, output) = run(&config, "9\n");

        assert!(bank.is_empty());
        assert!(!output.contains("Sample accounts created"));
    }

    #[test]
    fn john_and_jane_scenario() {
        // deposit 500 to John, withdraw 2000 from John, transfer 600 from John to Jane
        let input = "2\n1\n500\n3\n1\n2000\n4\n1\n2\n600\n9\n";
        let (bank, output) = run(&no_pause(), input);

        assert_eq!(vec![900.0, 1100.0], balances(&bank));
        let accounts = bank.accounts();
        assert_eq!(3, accounts[0].transaction_count());
        assert_eq!(2, accounts[1].transaction_count());
        assert_eq!(TxKind::TransferOut, accounts[0].history()[2].kind());
        assert_eq!(TxKind::TransferIn, accounts[1].history()[1].kind());

        assert!(output.contains("[OK] Successfully deposited $500.00. New balance: $1500.00"));
        assert!(output.contains("[ERROR] Insufficient funds in account ACC1001!"));
        assert!(output.contains(
            "[OK] Successfully transferred $600.00 to Jane Smith. Your new balance: $900.00"
        ));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (bank, output) = run(&no_pause(), "2\n1\n");

        assert_eq!(vec![1000.0, 500.0], balances(&bank));
        assert!(!output.contains(GOODBYE));
    }

    #[test]
    fn invalid_choices_reprompt() {
        let (_, output) = run(&no_pause(), "42\nabc\n9\n");

        assert!(output.contains("[ERROR] Invalid choice! Please try again."));
        assert!(output.contains(INVALID_NUMBER_MSG));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn invalid_utf8_choice_reprompts() {
        let (bank, output) = run_bytes(&no_pause(), b"\xff\n9\n");

        assert_eq!(vec![1000.0, 500.0], balances(&bank));
        assert!(output.contains(INVALID_NUMBER_MSG));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn invalid_utf8_holder_name_is_kept_lossy() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (bank, output) = run_bytes(&config, b"1\nB\xffb\n10\n9\n");

        assert_eq!("B\u{FFFD}b", bank.accounts()[0].holder());
        assert!(output.contains(GOODBYE));
    }

    /// A reader whose every read fails with the given kind
    struct FailingReader(io::ErrorKind);

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "broken pipe"))
        }
    }

    #[test]
    fn read_error_unexpected_eof_is_reported() {
        let reader = io::BufReader::new(FailingReader(io::ErrorKind::UnexpectedEof));
        let mut session = Session::new(&no_pause(), Console::new(reader, Vec::new()));

        let err = session.run().unwrap_err();
        assert_eq!(io::ErrorKind::UnexpectedEof, err.kind());
    }

    #[test]
    fn read_error_is_reported() {
        let reader = io::BufReader::new(FailingReader(io::ErrorKind::BrokenPipe));
        let mut session = Session::new(&no_pause(), Console::new(reader, Vec::new()));

        let err = session.run().unwrap_err();
        assert_eq!(io::ErrorKind::BrokenPipe, err.kind());
    }

    #[test]
    fn exhausted_account_base() {
        let config = Config {
            account_base: u32::MAX,
            ..no_pause()
        };
        let (bank, output) = run(&config, "1\nAlice\n10\n9\n");

        assert!(bank.is_empty());
        assert!(!output.contains("Sample accounts created"));
        let err = AccountingError::AccountNumbersExhausted(format!("ACC{}", u32::MAX));
        assert!(output.contains(&format!("[ERROR] {}", err)));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn last_account_number_is_used() {
        let config = Config {
            account_base: u32::MAX - 1,
            ..no_pause()
        };
        let (bank, output) = run(&config, "9\n");

        assert_eq!(1, bank.len());
        let number = bank.accounts()[0].number();
        assert_eq!(format!("ACC{}", u32::MAX), number.to_string());
        assert!(output.contains("- John Doe (Initial: $1000.00)"));
        assert!(!output.contains("Jane Smith"));
    }

    #[test]
    fn invalid_amount_reprompts() {
        let (bank, output) = run(&no_pause(), "2\n2\nlots\n25.50\n9\n");

        assert_eq!(vec![1000.0, 525.5], balances(&bank));
        assert!(output.contains(INVALID_AMOUNT_MSG));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let (bank, output) = run(&no_pause(), "2\n1\n0\n3\n1\n-5\n9\n");

        assert_eq!(vec![1000.0, 500.0], balances(&bank));
        assert_eq!(1, bank.accounts()[0].transaction_count());
        assert_eq!(2, output.matches("Amount must be positive").count());
    }

    #[test]
    fn create_account() {
        let config = Config {
            no_samples: true,
            account_base: 7000,
            ..no_pause()
        };
        let (bank, output) = run(&config, "1\nAlice Cooper\n250\n9\n");

        let accounts = bank.accounts();
        assert_eq!(1, accounts.len());
        assert_eq!("ACC7001", accounts[0].number().to_string());
        assert_eq!("Alice Cooper", accounts[0].holder());
        assert_eq!(250.0, accounts[0].balance());
        assert!(output.contains("Account Number: ACC7001"));
        assert!(output.contains("Initial Balance: $250.00"));
    }

    #[test]
    fn create_account_rejections() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (bank, output) = run(&config, "1\n   \n1\nBob\n-5\n1\nBob\n0\n9\n");

        let accounts = bank.accounts();
        assert_eq!(1, accounts.len());
        assert_eq!("ACC1001", accounts[0].number().to_string());
        assert_eq!(0, accounts[0].transaction_count());
        assert!(output.contains(EMPTY_HOLDER_NAME));
        assert!(output.contains("Initial deposit cannot be negative"));
    }

    #[test]
    fn select_account_out_of_range() {
        let (_, output) = run(&no_pause(), "5\n3\n5\n-1\n9\n");

        let err = AccountingError::InvalidSelection(3, 2);
        assert_eq!(ErrorKind::SelectionError, err.kind());
        assert!(output.contains(&err.to_string()));
        assert!(output.contains(&AccountingError::InvalidSelection(0, 2).to_string()));
        assert!(!output.contains("Current Balance"));
    }

    #[test]
    fn select_account_without_accounts() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (_, output) = run(&config, "2\n9\n");

        assert!(output.contains("No accounts available!"));
    }

    #[test]
    fn check_balance_and_info() {
        let (_, output) = run(&no_pause(), "5\n2\n6\n1\n9\n");

        assert!(output.contains("2. Jane Smith (ACC1002) - Balance: $500.00"));
        assert!(output.contains("Current Balance: $500.00"));
        assert!(output.contains("ACCOUNT INFORMATION"));
        assert!(output.contains("Account Holder: John Doe"));
    }

    #[test]
    fn transfer_same_account() {
        let (bank, output) = run(&no_pause(), "4\n1\n1\n9\n");

        assert_eq!(vec![1000.0, 500.0], balances(&bank));
        assert!(output.contains("Cannot transfer money to the same account (ACC1001)!"));
        assert!(!output.contains("Enter transfer amount"));
    }

    #[test]
    fn transfer_needs_two_accounts() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (_, output) = run(&config, "4\n9\n");

        assert!(output.contains("Need at least 2 accounts to perform transfer!"));
    }

    #[test]
    fn history_views() {
        let input = "2\n1\n500\n7\n1\n1\n7\n1\n2\n1\n7\n1\n2\n0\n7\n1\n3\n9\n";
        let (_, output) = run(&no_pause(), input);

        assert!(output.contains("TRANSACTION HISTORY"));
        assert!(output.contains("=== LAST 1 TRANSACTIONS ==="));
        assert!(output.contains("Please enter a positive number!"));
        assert!(output.contains("[ERROR] Invalid choice!"));
    }

    #[test]
    fn history_without_transactions() {
        let config = Config {
            no_samples: true,
            ..no_pause()
        };
        let (_, output) = run(&config, "1\nBob\n0\n7\n1\n9\n");

        assert!(output.contains("No transactions found for this account."));
        assert!(!output.contains("View Recent Transactions"));
    }

    #[test]
    fn all_accounts() {
        let (_, output) = run(&no_pause(), "8\n9\n");

        assert!(output.contains("All Bank Accounts"));
        assert!(output.contains("Total Accounts: 2 | Total Balance: $1500.00"));
    }

    #[test]
    fn pause_after_each_action() {
        let (_, output) = run(&Config::default(), "8\n\n9\n");

        assert_eq!(1, output.matches(PRESS_ENTER).count());
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn pause_at_end_of_input() {
        let (_, output) = run(&Config::default(), "8\n");

        assert_eq!(1, output.matches(PRESS_ENTER).count());
        assert!(!output.contains(GOODBYE));
    }
}
