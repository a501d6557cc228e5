/// Main menu choices

pub const CREATE_ACCOUNT: i64 = 1;
pub const DEPOSIT: i64 = 2;
pub const WITHDRAW: i64 = 3;
pub const TRANSFER: i64 = 4;
pub const CHECK_BALANCE: i64 = 5;
pub const ACCOUNT_INFO: i64 = 6;
pub const HISTORY: i64 = 7;
pub const ALL_ACCOUNTS: i64 = 8;
pub const EXIT: i64 = 9;

/// Main menu labels, in the order of the choices
pub const MENU_ENTRIES: [(i64, &str); 9] = [
    (CREATE_ACCOUNT, "Create New Account"),
    (DEPOSIT, "Deposit Money"),
    (WITHDRAW, "Withdraw Money"),
    (TRANSFER, "Transfer Money"),
    (CHECK_BALANCE, "Check Balance"),
    (ACCOUNT_INFO, "View Account Information"),
    (HISTORY, "View Transaction History"),
    (ALL_ACCOUNTS, "Display All Accounts"),
    (EXIT, "Exit"),
];

/// Transaction history sub-menu choices

pub const HISTORY_ALL: i64 = 1;
pub const HISTORY_RECENT: i64 = 2;

/// Various CLI constants

pub const MENU_RULE_WIDTH: usize = 50;
pub const ERROR_PREFIX: &str = "[ERROR]";
pub const OK_PREFIX: &str = "[OK]";
pub const INVALID_NUMBER_MSG: &str = "Please enter a valid number!";
pub const INVALID_AMOUNT_MSG: &str = "Please enter a valid amount!";
pub const PRESS_ENTER: &str = "Press Enter to continue...";
