//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use std::io::{self, BufRead, Write};

/// **Contains the main menu, framed by rules.**
///
/// Wrapped by `Console::menu()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added entry.
pub fn menu_contents() -> String {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    let mut lines = vec![rule.clone(), "                 MAIN MENU".to_string(), rule.clone()];
    lines.extend(
        MENU_ENTRIES
            .iter()
            .map(|(choice, label)| format!("{:<3} {}", format!("{}.", choice), label)),
    );
    lines.push(rule);

    lines.join("\n")
}

/// Parses a whole number, ignoring surrounding whitespace.
pub fn parse_number(word: &str) -> Option<i64> {
    word.trim().parse::<i64>().ok()
}

/// Parses a finite decimal amount, ignoring surrounding whitespace
/// and an optional leading `$`.
///
/// Negative amounts parse fine; rejecting them is up to the core.
pub fn parse_amount(word: &str) -> Option<f64> {
    let word = word.trim();
    let word = word.strip_prefix('$').unwrap_or(word);
    word.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// **A line-oriented console over any input and output**
///
/// Every read returns `None` once the input is exhausted,
/// so callers can wind down instead of re-prompting forever.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives the output back, e.g., to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{ERROR_PREFIX} {msg}")
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{OK_PREFIX} {msg}")
    }

    /// Prints a section title underlined with dashes.
    pub fn section(&mut self, title: &str, width: usize) -> io::Result<()> {
        writeln!(self.output, "\n{title}\n{}", "-".repeat(width))
    }

    pub fn menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", menu_contents())
    }

    /// **Reads a single line, trimmed.**
    ///
    /// Writes `label` and flushes the output first.
    /// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`,
    /// so such a line is simply unparsable instead of an I/O error.
    pub fn read_line(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Prompts until a whole number is entered.
    pub fn read_number(&mut self, label: &str) -> io::Result<Option<i64>> {
        self.read_parsed(label, parse_number, INVALID_NUMBER_MSG)
    }

    /// Prompts until a decimal amount is entered.
    pub fn read_amount(&mut self, label: &str) -> io::Result<Option<f64>> {
        self.read_parsed(label, parse_amount, INVALID_AMOUNT_MSG)
    }

    /// Returns `false` if the input is exhausted.
    pub fn wait_for_enter(&mut self) -> io::Result<bool> {
        Ok(self.read_line(&format!("\n{PRESS_ENTER}\n"))?.is_some())
    }

    fn read_parsed<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Option<T>,
        invalid_msg: &str,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.read_line(label)? else {
                return Ok(None);
            };
            match parse(&line) {
                Some(value) => return Ok(Some(value)),
                None => {
                    log::debug!("unparsable input: {:?}", line);
                    self.error(invalid_msg)?;
                }
            }
        }
    }
}
